//! Domain models for the draw tool sample.

pub mod document;
pub mod shape;
pub mod theme;

pub use document::{Document, Header, NativeHandle};
pub use shape::{register_shapes, BoxedShape, Circle, Shape, Triangle};
pub use theme::{
    register_themes, BoxedControlSurface, BoxedScreen, ControlSurface, Screen,
};
