//! # System Lifecycle & Orchestration
//!
//! Individual registries, factories, and slots are simple; **wiring them
//! together** is where an application takes shape. [`DrawToolSystem`] is the
//! conductor: it performs all registration during setup — before any
//! concurrent use, per the registry's concurrency contract — and then hands
//! out products and the shared config for the life of the process.
//!
//! **Key Responsibilities:**
//! 1. **Registration** - populate the shape and theme registries once, at startup
//! 2. **Factories** - expose the uniform creation contract over those registries
//! 3. **Shared config** - own the singleton slot every component reads from
//!
//! The system itself is cheap to share behind an `Arc`; every operation takes
//! `&self`.

use crate::config::{eager_config_slot, lazy_config_slot, AppConfig};
use crate::error::DrawToolError;
use crate::model::shape::{register_shapes, BoxedShape};
use crate::model::theme::{register_themes, BoxedControlSurface, BoxedScreen};
use creational_framework::{
    FamilyFactory, FamilyRegistry, FrameworkError, SingletonSlot, VariantFactory, VariantFamily,
    VariantRegistry,
};
use std::sync::Arc;
use tracing::info;

/// The assembled draw tool: factories for shapes and themes plus the shared
/// configuration slot.
pub struct DrawToolSystem {
    shapes: VariantFactory<BoxedShape>,
    themes: FamilyFactory<BoxedControlSurface, BoxedScreen>,
    config: Arc<SingletonSlot<AppConfig>>,
}

impl DrawToolSystem {
    /// Builds the system: registers every built-in shape and theme, then
    /// wraps the registries in their factories. Registration failures can
    /// only come from duplicate keys, which would be a wiring bug surfaced
    /// immediately at startup.
    pub fn new() -> Result<Self, FrameworkError> {
        Self::with_config_slot(Arc::new(lazy_config_slot()))
    }

    /// Builds the system around a config supplied up front (e.g. parsed by
    /// an external collaborator before startup). The slot is eager, so no
    /// caller ever pays a construction path.
    pub fn with_config(config: AppConfig) -> Result<Self, FrameworkError> {
        Self::with_config_slot(Arc::new(eager_config_slot(config)))
    }

    fn with_config_slot(config: Arc<SingletonSlot<AppConfig>>) -> Result<Self, FrameworkError> {
        let shape_registry = Arc::new(VariantRegistry::new());
        register_shapes(&shape_registry)?;

        let theme_registry = Arc::new(FamilyRegistry::new());
        register_themes(&theme_registry)?;

        info!(
            shapes = shape_registry.len(),
            themes = theme_registry.supported_families().len(),
            "Draw tool system wired"
        );

        Ok(Self {
            shapes: VariantFactory::new(shape_registry),
            themes: FamilyFactory::new(theme_registry),
            config,
        })
    }

    /// Creates a shape by kind key (`"circle"`, `"triangle"`, ...).
    pub fn create_shape(&self, kind: &str) -> Result<BoxedShape, FrameworkError> {
        self.shapes.create(kind)
    }

    /// Creates a complete theme family by family key (`"light"`, `"dark"`).
    pub fn create_theme(
        &self,
        family: &str,
    ) -> Result<VariantFamily<BoxedControlSurface, BoxedScreen>, FrameworkError> {
        self.themes.create_family(family)
    }

    /// Creates the shape named by the shared config's `default_shape`.
    pub fn create_default_shape(&self) -> Result<BoxedShape, FrameworkError> {
        let config = self.config()?;
        self.create_shape(&config.default_shape)
    }

    /// Creates the theme family named by the shared config, translating a
    /// factory miss into a configuration error the user can act on.
    pub fn create_configured_theme(
        &self,
    ) -> Result<VariantFamily<BoxedControlSurface, BoxedScreen>, DrawToolError> {
        let config = self.config()?;
        self.create_theme(&config.theme).map_err(|e| match e {
            FrameworkError::UnsupportedVariant { key } => {
                DrawToolError::UnknownConfiguredTheme(key)
            }
            other => DrawToolError::Framework(other),
        })
    }

    /// The shared configuration. First caller constructs it; everyone else
    /// gets the same instance.
    pub fn config(&self) -> Result<Arc<AppConfig>, FrameworkError> {
        self.config.get_instance()
    }

    /// Handle to the config slot itself, for callers that want to observe
    /// status or apply a wait deadline.
    pub fn config_slot(&self) -> Arc<SingletonSlot<AppConfig>> {
        Arc::clone(&self.config)
    }

    /// Kind keys the shape factory can produce, for user-facing error
    /// reporting.
    pub fn supported_shapes(&self) -> Vec<String> {
        self.shapes.supported_kinds()
    }

    /// Family keys the theme factory can produce.
    pub fn supported_themes(&self) -> Vec<String> {
        self.themes.supported_families()
    }
}
