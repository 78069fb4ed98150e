//! # Liskov Substitution
//!
//! One violation and two ways out of it, each in its own module so their
//! same-named birds never collide:
//!
//! - [`violation`]: `Ostrich` is a `Bird` whose `fly` fails at runtime.
//! - [`flying_bird`]: `FlyingBird` refines `Bird`; flightless birds never get `fly`.
//! - [`flyable`]: flight is a separate capability implemented only by flyers.
//!
//! In both fixes, asking a flightless bird to fly is a compile error rather than
//! a runtime failure.

pub mod flyable;
pub mod flying_bird;
pub mod violation;

use std::io::Write;

use tracing::debug;

use crate::error::Result;

/// Runs the substitutable calls of all three examples.
///
/// The violating `Ostrich::fly` is deliberately left out.
pub fn demo(out: &mut dyn Write) -> Result<()> {
    debug!("lsp demo");

    {
        use violation::Bird;
        violation::Sparrow.fly(out)?;
    }

    {
        use flying_bird::{Bird, FlyingBird};
        flying_bird::Ostrich.eat(out)?;
        flying_bird::Sparrow.fly(out)?;
    }

    flyable::launch(&flyable::Eagle, out)
}
