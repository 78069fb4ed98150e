//! # Dependency Inversion
//!
//! [`Computer`] is the high-level consumer. It knows about the [`Keyboard`]
//! contract and nothing else: which keyboard it types on is decided by whoever
//! constructs it.
//!
//! ## Architecture Note
//! The keyboard is injected at construction and owned exclusively by the computer
//! (`Box<dyn Keyboard>`). Swapping [`MechanicalKeyboard`] for
//! [`MembraneKeyboard`] (or a [`MockKeyboard`](crate::mock::MockKeyboard) in
//! tests) requires no change to `Computer`.

use std::io::Write;

use tracing::{debug, instrument};

use crate::error::Result;

/// The capability the computer depends on.
pub trait Keyboard {
    /// Types on this keyboard.
    fn type_keys(&self, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MechanicalKeyboard;

impl Keyboard for MechanicalKeyboard {
    fn type_keys(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Typing on Mechanical Keyboard")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MembraneKeyboard;

impl Keyboard for MembraneKeyboard {
    fn type_keys(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Typing on Membrane Keyboard")?;
        Ok(())
    }
}

/// A consumer that depends only on the [`Keyboard`] abstraction.
pub struct Computer {
    keyboard: Box<dyn Keyboard>,
}

impl Computer {
    pub fn new(keyboard: Box<dyn Keyboard>) -> Self {
        Self { keyboard }
    }

    /// Delegates to the injected keyboard, exactly once.
    #[instrument(skip_all)]
    pub fn input(&self, out: &mut dyn Write) -> Result<()> {
        debug!("Delegating to keyboard");
        self.keyboard.type_keys(out)
    }
}

/// Types once on a computer wired with a mechanical keyboard.
pub fn demo(out: &mut dyn Write) -> Result<()> {
    debug!("dip demo");
    let keyboard: Box<dyn Keyboard> = Box::new(MechanicalKeyboard);
    let computer = Computer::new(keyboard);
    computer.input(out)
}
