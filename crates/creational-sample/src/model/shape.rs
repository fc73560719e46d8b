//! Shapes for the draw tool: the simple-factory product family.
//!
//! Each concrete shape is a flat struct implementing [`Shape`]; there is no
//! base-class hierarchy. The kind tag matches the registry key the shape's
//! producer is registered under, which is how callers and tests verify what
//! the factory handed them.

use creational_framework::{FrameworkError, ProductVariant, VariantRegistry};

/// Capability contract for everything the draw tool can render.
pub trait Shape: ProductVariant {
    fn area(&self) -> f64;
    fn describe(&self) -> String;
}

/// Shapes are held as trait objects throughout the draw tool.
pub type BoxedShape = Box<dyn Shape>;

#[derive(Debug, Clone)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    /// The default circle produced by the factory.
    pub fn unit() -> Self {
        Self { radius: 1.0 }
    }
}

impl ProductVariant for Circle {
    fn kind(&self) -> &str {
        "circle"
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    fn describe(&self) -> String {
        format!("circle with radius {}", self.radius)
    }
}

#[derive(Debug, Clone)]
pub struct Triangle {
    pub base: f64,
    pub height: f64,
}

impl Triangle {
    /// The default triangle produced by the factory.
    pub fn unit() -> Self {
        Self {
            base: 1.0,
            height: 1.0,
        }
    }
}

impl ProductVariant for Triangle {
    fn kind(&self) -> &str {
        "triangle"
    }
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }

    fn describe(&self) -> String {
        format!("triangle {}x{}", self.base, self.height)
    }
}

/// Registers every shape the draw tool supports. Called once during system
/// setup, before any concurrent use of the registry.
pub fn register_shapes(registry: &VariantRegistry<BoxedShape>) -> Result<(), FrameworkError> {
    registry.register("circle", || Box::new(Circle::unit()) as BoxedShape)?;
    registry.register("triangle", || Box::new(Triangle::unit()) as BoxedShape)?;
    Ok(())
}
