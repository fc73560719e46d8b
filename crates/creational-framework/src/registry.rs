//! # Variant Registry
//!
//! This module defines the [`VariantRegistry`], the lookup table that maps a
//! kind key (an opaque string selected by configuration) to a producer for
//! that kind. Factories sit on top of it for type resolution.
//!
//! # Architecture Note
//! The registry replaces two habits that do not survive contact with a real
//! type system: a `switch` over kind strings inside the factory, and storing
//! constructor references in configuration objects for reflective
//! instantiation. Registering an explicit closure per kind keeps the set of
//! producers open for extension (add a key) without modifying the factory.
//!
//! # Concurrency Model
//! Resolution is read-mostly: registration normally happens during
//! process-wide setup, after which every `resolve` is a shared read. The
//! registry still supports runtime registration, so the map lives behind an
//! `RwLock` — many concurrent resolves, exclusive registration.

use crate::error::FrameworkError;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

/// A zero-argument producer for a product type. Cheap to clone and share.
pub type Producer<P> = Arc<dyn Fn() -> P + Send + Sync>;

/// What to do when a key is registered twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Last registration wins; the overwrite is logged at `warn` level.
    #[default]
    Overwrite,
    /// Registration fails with [`FrameworkError::DuplicateKey`].
    Reject,
}

/// Maps kind keys to producers for a family of related product types.
///
/// The registry treats keys as opaque strings; parsing and sourcing them
/// (from config files, CLI flags, etc.) is the caller's concern.
///
/// # Example
///
/// ```rust
/// use creational_framework::{FrameworkError, VariantRegistry};
///
/// let registry: VariantRegistry<u32> = VariantRegistry::new();
/// registry.register("one", || 1).unwrap();
/// registry.register("two", || 2).unwrap();
///
/// let producer = registry.resolve("two").unwrap();
/// assert_eq!(producer(), 2);
///
/// match registry.resolve("three").err().unwrap() {
///     FrameworkError::UnknownVariant { key, supported } => {
///         assert_eq!(key, "three");
///         assert_eq!(supported, vec!["one".to_string(), "two".to_string()]);
///     }
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
pub struct VariantRegistry<P> {
    entries: RwLock<HashMap<String, Producer<P>>>,
    policy: DuplicatePolicy,
}

impl<P> Default for VariantRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> VariantRegistry<P> {
    /// Creates an empty registry with the [`DuplicatePolicy::Overwrite`] policy.
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    /// Creates an empty registry with an explicit duplicate policy.
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            policy,
        }
    }

    /// Stores `producer` under `key`.
    ///
    /// Duplicate keys follow the configured [`DuplicatePolicy`]: either the
    /// new producer replaces the old one (logged), or the call fails with
    /// [`FrameworkError::DuplicateKey`] and the existing entry is untouched.
    pub fn register<F>(&self, key: impl Into<String>, producer: F) -> Result<(), FrameworkError>
    where
        F: Fn() -> P + Send + Sync + 'static,
    {
        let key = key.into();
        let mut entries = self.write_entries();
        if entries.contains_key(&key) {
            match self.policy {
                DuplicatePolicy::Reject => {
                    warn!(%key, "Registration rejected: key already present");
                    return Err(FrameworkError::DuplicateKey { key });
                }
                DuplicatePolicy::Overwrite => {
                    warn!(%key, "Overwriting existing producer");
                }
            }
        }
        entries.insert(key.clone(), Arc::new(producer));
        info!(%key, size = entries.len(), "Producer registered");
        Ok(())
    }

    /// Looks up the producer registered under `key`.
    ///
    /// An unknown key fails with [`FrameworkError::UnknownVariant`] carrying
    /// the sorted list of supported kinds.
    pub fn resolve(&self, key: &str) -> Result<Producer<P>, FrameworkError> {
        let entries = self.read_entries();
        match entries.get(key) {
            Some(producer) => {
                debug!(key, "Resolved producer");
                Ok(Arc::clone(producer))
            }
            None => {
                let mut supported: Vec<String> = entries.keys().cloned().collect();
                supported.sort();
                debug!(key, ?supported, "Registry miss");
                Err(FrameworkError::UnknownVariant {
                    key: key.to_string(),
                    supported,
                })
            }
        }
    }

    /// Returns the sorted list of registered kind keys.
    pub fn supported_kinds(&self) -> Vec<String> {
        let mut kinds: Vec<String> = self.read_entries().keys().cloned().collect();
        kinds.sort();
        kinds
    }

    /// Whether a producer is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.read_entries().contains_key(key)
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    // Lock poisoning is recovered by taking the inner map: registrations are
    // single inserts and resolves are pure reads, so a poisoned map is still
    // coherent.
    fn read_entries(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Producer<P>>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entries(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Producer<P>>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
