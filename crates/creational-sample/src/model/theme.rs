//! Theme families for the draw tool UI: the abstract-factory product family.
//!
//! A theme is a family of two product positions — a control surface and a
//! screen — that must always be instantiated together. Registering both
//! producers in one [`FamilyRegistry::register_family`] call is what makes
//! mixing positions from two themes impossible: `create_family("dark")` can
//! only ever pair the dark control surface with the dark screen.
//!
//! Adding a theme is one registration call. Adding a third position (say, a
//! cursor set) would change the registry's type parameters and every
//! registration site here — the deliberately closed axis.

use creational_framework::{FamilyRegistry, FrameworkError, ProductVariant};

/// First family position: what the user clicks and drags.
pub trait ControlSurface: ProductVariant {
    /// The theme this control surface belongs to.
    fn theme(&self) -> &str;
    fn press(&self) -> String;
}

/// Second family position: where shapes are rendered.
pub trait Screen: ProductVariant {
    /// The theme this screen belongs to.
    fn theme(&self) -> &str;
    fn render(&self) -> String;
}

pub type BoxedControlSurface = Box<dyn ControlSurface>;
pub type BoxedScreen = Box<dyn Screen>;

// --- Light family ---

#[derive(Debug, Clone)]
pub struct LightControlSurface;

impl ProductVariant for LightControlSurface {
    fn kind(&self) -> &str {
        "light-control-surface"
    }
}

impl ControlSurface for LightControlSurface {
    fn theme(&self) -> &str {
        "light"
    }

    fn press(&self) -> String {
        "light control pressed".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct LightScreen;

impl ProductVariant for LightScreen {
    fn kind(&self) -> &str {
        "light-screen"
    }
}

impl Screen for LightScreen {
    fn theme(&self) -> &str {
        "light"
    }

    fn render(&self) -> String {
        "rendering on the light screen".to_string()
    }
}

// --- Dark family ---

#[derive(Debug, Clone)]
pub struct DarkControlSurface;

impl ProductVariant for DarkControlSurface {
    fn kind(&self) -> &str {
        "dark-control-surface"
    }
}

impl ControlSurface for DarkControlSurface {
    fn theme(&self) -> &str {
        "dark"
    }

    fn press(&self) -> String {
        "dark control pressed".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct DarkScreen;

impl ProductVariant for DarkScreen {
    fn kind(&self) -> &str {
        "dark-screen"
    }
}

impl Screen for DarkScreen {
    fn theme(&self) -> &str {
        "dark"
    }

    fn render(&self) -> String {
        "rendering on the dark screen".to_string()
    }
}

/// Registers the built-in themes. Called once during system setup.
pub fn register_themes(
    registry: &FamilyRegistry<BoxedControlSurface, BoxedScreen>,
) -> Result<(), FrameworkError> {
    registry.register_family(
        "light",
        || Box::new(LightControlSurface) as BoxedControlSurface,
        || Box::new(LightScreen) as BoxedScreen,
    )?;
    registry.register_family(
        "dark",
        || Box::new(DarkControlSurface) as BoxedControlSurface,
        || Box::new(DarkScreen) as BoxedScreen,
    )?;
    Ok(())
}
