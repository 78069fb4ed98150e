//! # The Violation
//!
//! [`Bird`] promises `fly`. [`Ostrich`] is a `Bird` but breaks the promise at
//! runtime, so code written against `Bird` can no longer trust it.
//!
//! Nothing in the demonstration calls [`Ostrich::fly`]; the failure exists only
//! to show the problem.

use std::io::Write;

use tracing::warn;

use crate::error::{Result, SolidError};

pub trait Bird {
    fn fly(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Bird can fly")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sparrow;

impl Bird for Sparrow {}

#[derive(Debug, Clone, Copy, Default)]
pub struct Ostrich;

impl Bird for Ostrich {
    /// Always fails with [`SolidError::UnsupportedCapability`].
    fn fly(&self, _out: &mut dyn Write) -> Result<()> {
        warn!(variant = "Ostrich", "Refusing to fly");
        Err(SolidError::UnsupportedCapability {
            variant: "Ostrich",
            capability: "fly",
        })
    }
}
