//! Dependency inversion: a computer typing on an injected keyboard.

use solid_recipe::tracing::setup_tracing;
use solid_recipe::SolidError;

fn main() -> Result<(), SolidError> {
    setup_tracing();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    solid_recipe::dip::demo(&mut out)
}
