//! # Framework Errors
//!
//! This module defines the common error types used throughout the creational
//! framework. By centralizing error definitions, we ensure consistent error
//! handling across registries, factories, the clone engine, and singleton slots.
//!
//! # Propagation Policy
//! Every error here is returned to the immediate caller; nothing in the library
//! panics. Registry misses and factory misses are recoverable conditions the
//! caller can report to a user, not defects.

/// Boxed error type accepted from user-supplied slot constructors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur within the creational framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// A registry lookup missed. Carries the supported kinds so the caller
    /// can present them to a user.
    #[error("unknown variant {key:?}; supported kinds: [{}]", .supported.join(", "))]
    UnknownVariant { key: String, supported: Vec<String> },

    /// A factory was asked for a kind with no registered producer.
    #[error("unsupported variant {key:?}")]
    UnsupportedVariant { key: String },

    /// Registration conflict under [`DuplicatePolicy::Reject`](crate::registry::DuplicatePolicy).
    #[error("duplicate registration for key {key:?}")]
    DuplicateKey { key: String },

    /// Deep clone reached a field that does not support cloning. The path is
    /// dotted from the root instance (e.g. `header.logo`).
    #[error("field {field_path:?} does not support deep cloning")]
    NonCloneableField { field_path: String },

    /// A waiter on a singleton slot exceeded its deadline while another
    /// caller held the slot in `Initializing`. The slot itself is unharmed
    /// and the waiter may retry.
    #[error("timed out waiting for slot {slot:?} to initialize")]
    InitializationTimeout { slot: String },

    /// The slot constructor returned an error. The slot rolled back to
    /// `Uninitialized`, so the next caller will re-run the constructor.
    #[error("slot {slot:?} constructor failed: {cause}")]
    InitializationFailed { slot: String, cause: BoxError },
}

impl FrameworkError {
    /// Shorthand for [`FrameworkError::NonCloneableField`].
    pub fn non_cloneable(field_path: impl Into<String>) -> Self {
        Self::NonCloneableField {
            field_path: field_path.into(),
        }
    }

    /// Extends a `NonCloneableField` path with the parent field name, so
    /// nested [`Prototype`](crate::prototype::Prototype) impls report the full
    /// path from the root instance. Other variants pass through unchanged.
    pub fn prefix_field(self, parent: &str) -> Self {
        match self {
            Self::NonCloneableField { field_path } => Self::NonCloneableField {
                field_path: format!("{parent}.{field_path}"),
            },
            other => other,
        }
    }
}
