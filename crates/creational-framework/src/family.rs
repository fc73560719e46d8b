//! # Abstract Factory
//!
//! This module defines the [`FamilyRegistry`] and [`FamilyFactory`], the
//! family-of-products counterpart to the simple [`VariantFactory`](crate::factory::VariantFactory).
//!
//! # Architecture Note
//! A family is a set of products designed to be used together (the classic
//! example: every UI control of one theme). The invariant that matters is
//! *family consistency*: every member of a created family came from producers
//! registered under the same family key. We enforce it by construction —
//! [`FamilyRegistry::register_family`] registers all positions of a family in
//! one atomic call, so `create_family` cannot pair producers from two
//! different families.
//!
//! # The Tilted Extension Axis
//! Adding a new *family* is one `register_family` call and touches no existing
//! code. Adding a new *position* (a third product kind shared by all
//! families) changes the type parameters of the registry and every
//! registration site. That asymmetry is deliberate and inherited from the
//! pattern itself: the set of positions is fixed at design time, the set of
//! families stays open.

use crate::error::FrameworkError;
use crate::factory::ProductVariant;
use crate::registry::{DuplicatePolicy, Producer};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

/// A matched pair of products created together from one family key.
#[derive(Debug)]
pub struct VariantFamily<A, B> {
    /// The key the family was registered under.
    pub family_key: String,
    /// First position of the family tuple.
    pub primary: A,
    /// Second position of the family tuple.
    pub secondary: B,
}

struct FamilyProducers<A, B> {
    primary: Producer<A>,
    secondary: Producer<B>,
}

impl<A, B> Clone for FamilyProducers<A, B> {
    fn clone(&self) -> Self {
        Self {
            primary: Arc::clone(&self.primary),
            secondary: Arc::clone(&self.secondary),
        }
    }
}

/// Maps a family key to the producers for every position of that family.
///
/// Same reader/writer discipline and duplicate policy semantics as
/// [`VariantRegistry`](crate::registry::VariantRegistry).
pub struct FamilyRegistry<A, B> {
    entries: RwLock<HashMap<String, FamilyProducers<A, B>>>,
    policy: DuplicatePolicy,
}

impl<A, B> Default for FamilyRegistry<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B> FamilyRegistry<A, B> {
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

    /// Registers both producers of a family atomically under `key`.
    ///
    /// Registering the positions together is what guarantees family
    /// consistency: there is no state in which a family key maps to producers
    /// from different registrations.
    pub fn register_family<F, G>(
        &self,
        key: impl Into<String>,
        primary: F,
        secondary: G,
    ) -> Result<(), FrameworkError>
    where
        F: Fn() -> A + Send + Sync + 'static,
        G: Fn() -> B + Send + Sync + 'static,
    {
        let key = key.into();
        let mut entries = self.write_entries();
        if entries.contains_key(&key) {
            match self.policy {
                DuplicatePolicy::Reject => {
                    warn!(%key, "Family registration rejected: key already present");
                    return Err(FrameworkError::DuplicateKey { key });
                }
                DuplicatePolicy::Overwrite => {
                    warn!(%key, "Overwriting existing family");
                }
            }
        }
        entries.insert(
            key.clone(),
            FamilyProducers {
                primary: Arc::new(primary),
                secondary: Arc::new(secondary),
            },
        );
        info!(%key, size = entries.len(), "Family registered");
        Ok(())
    }

    /// The sorted list of registered family keys.
    pub fn supported_families(&self) -> Vec<String> {
        let mut families: Vec<String> = self.read_entries().keys().cloned().collect();
        families.sort();
        families
    }

    /// Whether a family is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.read_entries().contains_key(key)
    }

    fn resolve(&self, key: &str) -> Result<FamilyProducers<A, B>, FrameworkError> {
        let entries = self.read_entries();
        match entries.get(key) {
            Some(producers) => Ok(producers.clone()),
            None => {
                let mut supported: Vec<String> = entries.keys().cloned().collect();
                supported.sort();
                Err(FrameworkError::UnknownVariant {
                    key: key.to_string(),
                    supported,
                })
            }
        }
    }

    fn read_entries(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, FamilyProducers<A, B>>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entries(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, FamilyProducers<A, B>>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Creates whole families by family key.
pub struct FamilyFactory<A, B> {
    registry: Arc<FamilyRegistry<A, B>>,
}

impl<A: ProductVariant, B: ProductVariant> FamilyFactory<A, B> {
    /// Wraps a shared family registry.
    pub fn new(registry: Arc<FamilyRegistry<A, B>>) -> Self {
        Self { registry }
    }

    /// Produces every member of the family registered under `key`.
    ///
    /// Fails with [`FrameworkError::UnsupportedVariant`] when no family is
    /// registered under `key`. On success the returned pair is guaranteed to
    /// come from the same registration.
    pub fn create_family(&self, key: &str) -> Result<VariantFamily<A, B>, FrameworkError> {
        let producers = self.registry.resolve(key).map_err(|e| match e {
            FrameworkError::UnknownVariant { key, supported } => {
                warn!(%key, ?supported, "Create failed: no family for key");
                FrameworkError::UnsupportedVariant { key }
            }
            other => other,
        })?;
        let primary = (producers.primary)();
        let secondary = (producers.secondary)();
        debug!(
            key,
            primary = primary.kind(),
            secondary = secondary.kind(),
            "Created family"
        );
        Ok(VariantFamily {
            family_key: key.to_string(),
            primary,
            secondary,
        })
    }

    /// The sorted list of families this factory can produce.
    pub fn supported_families(&self) -> Vec<String> {
        self.registry.supported_families()
    }

    /// Access to the underlying registry, e.g. for late registration.
    pub fn registry(&self) -> &FamilyRegistry<A, B> {
        &self.registry
    }
}
