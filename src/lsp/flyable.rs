//! # Fix 2: Flight as a Capability
//!
//! Instead of a hierarchy, flight is an independent [`Flyable`] contract. Types
//! that fly implement it; types that don't simply never do. [`launch`] accepts
//! only `Flyable` types, so handing it an [`Ostrich`] is rejected by the compiler:
//!
//! ```compile_fail
//! use solid_recipe::lsp::flyable::{launch, Ostrich};
//!
//! let mut out = Vec::new();
//! launch(&Ostrich, &mut out).unwrap();
//! ```

use std::io::Write;

use tracing::debug;

use crate::error::Result;

pub trait Flyable {
    fn fly(&self, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Eagle;

impl Flyable for Eagle {
    fn fly(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Eagle can fly")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Ostrich;

/// Sends a flight-capable variant into the air.
pub fn launch<F: Flyable + ?Sized>(bird: &F, out: &mut dyn Write) -> Result<()> {
    // Just the type name (e.g. "Eagle" instead of "solid_recipe::lsp::flyable::Eagle")
    let bird_type = std::any::type_name::<F>()
        .rsplit("::")
        .next()
        .unwrap_or("Unknown");
    debug!(bird_type, "Launch");
    bird.fly(out)
}
