//! # Fix 1: Split the Hierarchy
//!
//! Every [`Bird`] can eat. Only a [`FlyingBird`] (a supertrait refinement of
//! `Bird`) can fly. [`Ostrich`] implements `Bird` alone, so there is no `fly`
//! on it to break.
//!
//! ```compile_fail
//! use solid_recipe::lsp::flying_bird::{FlyingBird, Ostrich};
//!
//! let mut out = Vec::new();
//! Ostrich.fly(&mut out).unwrap();
//! ```

use std::io::Write;

use crate::error::Result;

pub trait Bird {
    fn eat(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Bird is eating")?;
        Ok(())
    }
}

pub trait FlyingBird: Bird {
    fn fly(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Bird can fly")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sparrow;

impl Bird for Sparrow {}
impl FlyingBird for Sparrow {}

// No FlyingBird impl.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ostrich;

impl Bird for Ostrich {}
