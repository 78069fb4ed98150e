//! # Open/Closed
//!
//! The [`Shape`] contract is closed for modification and open for extension.
//! [`Triangle`] joined [`Circle`] and [`Square`] as a new type only: nothing in
//! their code, or in [`total_area`], had to change. A crate downstream can do the
//! same with its own shapes.
//!
//! Dimensions are plain `serde` data, so shapes can be described in JSON or any
//! other format:
//!
//! ```rust
//! use solid_recipe::ocp::{Circle, Shape};
//!
//! let circle: Circle = serde_json::from_str(r#"{ "radius": 2.0 }"#).unwrap();
//! assert!((circle.area() - 12.566).abs() < 1e-3);
//! ```

use std::f64::consts::PI;
use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

pub trait Shape {
    /// Human-readable variant name.
    fn name(&self) -> &'static str;

    fn area(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Square {
    pub side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self { side }
    }
}

impl Shape for Square {
    fn name(&self) -> &'static str {
        "Square"
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub base: f64,
    pub height: f64,
}

impl Triangle {
    pub fn new(base: f64, height: f64) -> Self {
        Self { base, height }
    }
}

impl Shape for Triangle {
    fn name(&self) -> &'static str {
        "Triangle"
    }

    fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }
}

/// Sums the areas of any mix of shapes.
pub fn total_area(shapes: &[&dyn Shape]) -> f64 {
    shapes.iter().map(|shape| shape.area()).sum()
}

/// Writes `<name> area: <area>` with three decimals.
pub fn describe(shape: &dyn Shape, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{} area: {:.3}", shape.name(), shape.area())?;
    Ok(())
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    debug!("ocp demo");
    let circle = Circle::new(2.0);
    let square = Square::new(3.0);
    let triangle = Triangle::new(4.0, 5.0);
    let shapes: [&dyn Shape; 3] = [&circle, &square, &triangle];

    for shape in shapes {
        describe(shape, out)?;
    }
    debug!(total = total_area(&shapes), "Areas computed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_areas() {
        assert!((Circle::new(2.0).area() - 4.0 * PI).abs() < 1e-9);
        assert!((Circle::new(2.0).area() - 12.566).abs() < 1e-3);
        assert_eq!(Square::new(3.0).area(), 9.0);
        assert_eq!(Triangle::new(4.0, 5.0).area(), 10.0);
    }

    #[test]
    fn test_total_area_mixes_variants() {
        let square = Square::new(3.0);
        let triangle = Triangle::new(4.0, 5.0);
        assert_eq!(total_area(&[&square, &triangle]), 19.0);
        assert_eq!(total_area(&[]), 0.0);
    }

    #[test]
    fn test_describe_format() {
        let mut out = Vec::new();
        describe(&Square::new(3.0), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Square area: 9.000\n");
    }
}
