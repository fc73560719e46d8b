//! # Draw Tool Sample
//!
//! A complete worked application on top of `creational-framework`:
//!
//! - **[model]**: the product domains — shapes (simple factory), themes
//!   (abstract factory), documents (prototype cloning).
//! - **[config]**: the shared [`AppConfig`](config::AppConfig) and its
//!   singleton slots.
//! - **[lifecycle]**: the [`DrawToolSystem`](lifecycle::DrawToolSystem)
//!   orchestrator that wires registries, factories, and slots at startup.
//!
//! The binary in `main.rs` walks through every creation path; the
//! integration tests in `tests/` assert the same scenarios.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;

pub use error::DrawToolError;
