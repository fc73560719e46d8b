//! # Prototype Clone Engine
//!
//! This module defines the [`Prototype`] trait and [`clone_instance`], the
//! uniform entry point for duplicating an existing instance instead of
//! constructing one through a factory.
//!
//! # Shallow vs. Deep
//! - **Shallow** copies top-level fields. A field holding shared mutable
//!   structure (an `Arc<Mutex<_>>`, a handle) stays shared between source and
//!   clone. Every impl must document which fields alias.
//! - **Deep** severs all mutable sharing: mutating the clone is never
//!   observable through the source. This is a transitive requirement — every
//!   nested type reachable from the root must itself support deep cloning.
//!   A reachable field that cannot be cloned fails the whole call with
//!   [`FrameworkError::NonCloneableField`] at clone time; the engine never
//!   silently degrades a deep request to a shallow copy.
//!
//! # Identity
//! A clone is always a distinct instance, even when field-for-field equal to
//! its source. In ownership terms this falls out naturally: both methods
//! return a new value. What impls must *not* do is hand back a shared handle
//! to the same allocation and call it a deep clone.
//!
//! # Nested Field Paths
//! Impls that delegate to nested prototypes extend the error path with
//! [`FrameworkError::prefix_field`], so a failure three levels down still
//! reports its full dotted path from the root (e.g. `header.logo`).

use crate::error::FrameworkError;
use tracing::{debug, warn};

/// Which duplication contract [`clone_instance`] should apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneMode {
    /// Top-level copy; shared substructure stays aliased.
    Shallow,
    /// Fully independent copy; fails on non-cloneable reachable fields.
    Deep,
}

/// Contract for types that can be duplicated from an existing instance.
///
/// # Example
///
/// ```rust
/// use creational_framework::{clone_instance, CloneMode, FrameworkError, Prototype};
/// use std::sync::{Arc, Mutex};
///
/// struct Canvas {
///     name: String,
///     // Shared with shallow clones.
///     layers: Arc<Mutex<Vec<String>>>,
/// }
///
/// impl Prototype for Canvas {
///     /// Shallow: `layers` remains shared with the source.
///     fn clone_shallow(&self) -> Self {
///         Self {
///             name: self.name.clone(),
///             layers: Arc::clone(&self.layers),
///         }
///     }
///
///     fn clone_deep(&self) -> Result<Self, FrameworkError> {
///         let layers = self.layers.lock().unwrap().clone();
///         Ok(Self {
///             name: self.name.clone(),
///             layers: Arc::new(Mutex::new(layers)),
///         })
///     }
/// }
///
/// let source = Canvas {
///     name: "sketch".into(),
///     layers: Arc::new(Mutex::new(vec!["background".into()])),
/// };
///
/// let shallow = clone_instance(&source, CloneMode::Shallow).unwrap();
/// assert!(Arc::ptr_eq(&source.layers, &shallow.layers));
///
/// let deep = clone_instance(&source, CloneMode::Deep).unwrap();
/// assert!(!Arc::ptr_eq(&source.layers, &deep.layers));
/// ```
pub trait Prototype: Sized {
    /// Copies top-level fields. Shared mutable substructure stays aliased
    /// between source and clone; the impl documents which fields.
    fn clone_shallow(&self) -> Self;

    /// Produces a fully independent copy, or fails with
    /// [`FrameworkError::NonCloneableField`] naming the offending field path.
    fn clone_deep(&self) -> Result<Self, FrameworkError>;
}

/// Duplicates `source` according to `mode`.
///
/// Shallow cloning cannot fail; the `Result` exists so both modes share one
/// call site. Deep cloning surfaces [`FrameworkError::NonCloneableField`]
/// rather than degrading to a shallow copy.
pub fn clone_instance<T: Prototype>(source: &T, mode: CloneMode) -> Result<T, FrameworkError> {
    match mode {
        CloneMode::Shallow => {
            debug!("Shallow clone");
            Ok(source.clone_shallow())
        }
        CloneMode::Deep => {
            debug!("Deep clone");
            source.clone_deep().map_err(|e| {
                warn!(error = %e, "Deep clone failed");
                e
            })
        }
    }
}
