//! # Creational Framework
//!
//! This crate provides the foundational building blocks for polymorphic
//! object creation in Rust: a **variant registry**, a **factory hierarchy**
//! (simple and abstract), a **prototype clone engine**, and a thread-safe,
//! lazily-initialized **singleton slot**.
//!
//! ## Why a Creational Framework?
//!
//! Every sizable system ends up answering the same three questions:
//!
//! - *Who constructs this?* Callers should be able to ask for a product by an
//!   opaque kind key — usually sourced from configuration — without depending
//!   on concrete types.
//! - *How do I copy one?* Sometimes the cheapest way to a new instance is
//!   duplicating an existing one, with explicit control over how much of the
//!   structure is shared.
//! - *How many exist?* Some resources must exist exactly once per process,
//!   even when a hundred threads race on first access.
//!
//! The framework answers each with a small, independent component, so you
//! adopt only what you need.
//!
//! ## Architecture Overview
//!
//! Dependency order, leaves first:
//!
//! 1. **[`VariantRegistry`]** - maps kind keys to producer closures
//! 2. **[`VariantFactory`] / [`FamilyFactory`]** - the uniform creation
//!    contract on top of the registry
//! 3. **[`Prototype`] / [`clone_instance`]** - shallow/deep duplication of an
//!    existing instance; independent of the registry
//! 4. **[`SingletonSlot`]** - race-free, one-time construction of a shared
//!    instance
//!
//! ## Core Abstractions
//!
//! ### [`ProductVariant`] - The Capability Seam
//!
//! Every product implements [`ProductVariant`] (its kind tag) plus whatever
//! domain capabilities it needs. There is no base-class hierarchy: concrete
//! types are flat, and callers hold them through trait objects or enums.
//!
//! ```rust
//! use creational_framework::{ProductVariant, VariantFactory, VariantRegistry};
//! use std::sync::Arc;
//!
//! trait Shape: ProductVariant {
//!     fn area(&self) -> f64;
//! }
//!
//! struct Circle {
//!     radius: f64,
//! }
//! impl ProductVariant for Circle {
//!     fn kind(&self) -> &str {
//!         "circle"
//!     }
//! }
//! impl Shape for Circle {
//!     fn area(&self) -> f64 {
//!         std::f64::consts::PI * self.radius * self.radius
//!     }
//! }
//!
//! let registry: Arc<VariantRegistry<Box<dyn Shape>>> = Arc::new(VariantRegistry::new());
//! registry
//!     .register("circle", || Box::new(Circle { radius: 1.0 }) as Box<dyn Shape>)
//!     .unwrap();
//!
//! let factory = VariantFactory::new(registry);
//! let shape = factory.create("circle").unwrap();
//! assert_eq!(shape.kind(), "circle");
//! ```
//!
//! ### [`SingletonSlot`] - Exactly One Instance
//!
//! A slot is an explicit object, not hidden module state, so tests can spin
//! up as many independent slots as they need. The lazy variant runs its
//! constructor exactly once under a mutex-guarded state machine; the eager
//! variant constructs up front and never synchronizes at all. See the
//! [`singleton`] module docs for the full protocol.
//!
//! ## Concurrency Model
//!
//! - Registries: readers-writer — many concurrent `resolve` calls, exclusive
//!   registration. Registration is expected during process setup, but late
//!   registration is safe.
//! - Factories and the clone engine: stateless per call; no synchronization
//!   beyond what the registry provides.
//! - Slots: the one shared mutable resource. All status transitions happen
//!   under a mutex; after initialization every access is lock-free.
//!
//! ## Error Handling
//!
//! One central [`FrameworkError`] enum, returned to the immediate caller.
//! A miss is a recoverable, user-reportable condition — asking for
//! `"square"` when only `"circle"` and `"triangle"` are registered fails
//! with [`FrameworkError::UnsupportedVariant`], never a panic and never a
//! half-built product.
//!
//! ## Testing
//!
//! The [`testing`] module provides instrumented constructors
//! ([`testing::CallCounter`], [`testing::FlakyConstructor`]) for asserting
//! the slot protocol's properties — constructor ran exactly once, failed
//! construction is re-offered — without reaching into slot internals.

pub mod error;
pub mod factory;
pub mod family;
pub mod prototype;
pub mod registry;
pub mod singleton;
pub mod testing;
pub mod tracing;

// Re-export core types for convenience
pub use error::{BoxError, FrameworkError};
pub use factory::{ProductVariant, VariantFactory};
pub use family::{FamilyFactory, FamilyRegistry, VariantFamily};
pub use prototype::{clone_instance, CloneMode, Prototype};
pub use registry::{DuplicatePolicy, Producer, VariantRegistry};
pub use singleton::{SingletonSlot, SlotStatus};
pub use crate::tracing::setup_tracing;
