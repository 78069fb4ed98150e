//! # Polymorphism
//!
//! A caller holding a `&dyn Shape` draws whatever it was given, without ever
//! asking *which* shape it holds. The concrete type picks the behavior at runtime.
//!
//! The [`Shape`] trait carries the "base" behavior as a provided method. A variant
//! that says nothing about drawing ([`GenericShape`]) inherits it; [`Circle`] and
//! [`Square`] override it.
//!
//! ```rust
//! use solid_recipe::polymorphism::{Circle, Shape, Square};
//!
//! let shapes: Vec<Box<dyn Shape>> = vec![Box::new(Circle), Box::new(Square)];
//! let mut out = Vec::new();
//! for shape in &shapes {
//!     shape.draw(&mut out).unwrap();
//! }
//! assert_eq!(String::from_utf8(out).unwrap(), "Drawing circle\nDrawing square\n");
//! ```

use std::io::Write;

use tracing::debug;

use crate::error::Result;

/// Something that can be drawn.
pub trait Shape {
    /// Writes this shape's drawing line.
    ///
    /// The provided implementation is the base behavior shared by any shape that
    /// does not override it.
    fn draw(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Drawing shape")?;
        Ok(())
    }
}

/// A shape with no drawing of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenericShape;

impl Shape for GenericShape {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Circle;

impl Shape for Circle {
    fn draw(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Drawing circle")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square;

impl Shape for Square {
    fn draw(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Drawing square")?;
        Ok(())
    }
}

/// Draws every shape in order, dispatching through the contract only.
pub fn draw_all(shapes: &[Box<dyn Shape>], out: &mut dyn Write) -> Result<()> {
    for shape in shapes {
        shape.draw(out)?;
    }
    Ok(())
}

/// Draws a circle and a square through `Box<dyn Shape>` references.
pub fn demo(out: &mut dyn Write) -> Result<()> {
    debug!("polymorphism demo");
    let shape1: Box<dyn Shape> = Box::new(Circle);
    let shape2: Box<dyn Shape> = Box::new(Square);

    draw_all(&[shape1, shape2], out)
}
