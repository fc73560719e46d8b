//! # Simple Factory
//!
//! This module defines the [`ProductVariant`] capability seam and the
//! [`VariantFactory`], the uniform creation contract over a
//! [`VariantRegistry`].
//!
//! # Architecture Note
//! Callers depend on the factory and the capability trait, never on concrete
//! product types. Asking for a kind with no registered producer is a
//! recoverable, reportable condition ([`FrameworkError::UnsupportedVariant`]),
//! not a defect — the factory never panics and never returns a
//! partially-constructed product.

use crate::error::FrameworkError;
use crate::registry::VariantRegistry;
use std::sync::Arc;
use tracing::{debug, warn};

/// Capability contract shared by every product a factory can produce.
///
/// # Architecture Note
/// Concrete products implement this trait (plus whatever domain capabilities
/// they need) instead of extending a base-class hierarchy. The kind tag is
/// the product's identity: it matches the key its producer was registered
/// under, which is what lets tests and callers verify what they were given.
pub trait ProductVariant: Send + Sync {
    /// The concrete kind tag, e.g. `"circle"`.
    fn kind(&self) -> &str;
}

// Boxed trait objects flow through factories unchanged.
impl<T: ProductVariant + ?Sized> ProductVariant for Box<T> {
    fn kind(&self) -> &str {
        (**self).kind()
    }
}

/// Creates products by kind key, dispatching through a shared registry.
///
/// # Example
///
/// ```rust
/// use creational_framework::{
///     FrameworkError, ProductVariant, VariantFactory, VariantRegistry,
/// };
/// use std::sync::Arc;
///
/// struct Widget(&'static str);
/// impl ProductVariant for Widget {
///     fn kind(&self) -> &str {
///         self.0
///     }
/// }
///
/// let registry = Arc::new(VariantRegistry::new());
/// registry.register("plain", || Widget("plain")).unwrap();
///
/// let factory = VariantFactory::new(registry);
/// assert_eq!(factory.create("plain").unwrap().kind(), "plain");
/// assert!(matches!(
///     factory.create("fancy"),
///     Err(FrameworkError::UnsupportedVariant { .. })
/// ));
/// ```
pub struct VariantFactory<P> {
    registry: Arc<VariantRegistry<P>>,
}

impl<P: ProductVariant> VariantFactory<P> {
    /// Wraps a registry. The registry is shared, so several factories (or
    /// direct registry users) can coexist.
    pub fn new(registry: Arc<VariantRegistry<P>>) -> Self {
        Self { registry }
    }

    /// Produces a new product for `key`.
    ///
    /// Fails with [`FrameworkError::UnsupportedVariant`] when no producer is
    /// registered under `key`.
    pub fn create(&self, key: &str) -> Result<P, FrameworkError> {
        let producer = self.registry.resolve(key).map_err(|e| match e {
            FrameworkError::UnknownVariant { key, supported } => {
                warn!(%key, ?supported, "Create failed: no producer for kind");
                FrameworkError::UnsupportedVariant { key }
            }
            other => other,
        })?;
        let product = producer();
        debug!(key, kind = product.kind(), "Created variant");
        Ok(product)
    }

    /// The sorted list of kinds this factory can produce.
    pub fn supported_kinds(&self) -> Vec<String> {
        self.registry.supported_kinds()
    }

    /// Access to the underlying registry, e.g. for late registration.
    pub fn registry(&self) -> &VariantRegistry<P> {
        &self.registry
    }
}
