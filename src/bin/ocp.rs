//! Open/closed: areas of a circle, a square and the later-added triangle.

use solid_recipe::tracing::setup_tracing;
use solid_recipe::SolidError;

fn main() -> Result<(), SolidError> {
    setup_tracing();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    solid_recipe::ocp::demo(&mut out)
}
