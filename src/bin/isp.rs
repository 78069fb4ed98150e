//! Interface segregation: one all-in-one device used by two narrow consumers.

use solid_recipe::tracing::setup_tracing;
use solid_recipe::SolidError;

fn main() -> Result<(), SolidError> {
    setup_tracing();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    solid_recipe::isp::demo(&mut out)
}
