//! Liskov substitution: the substitutable calls of the violation and both fixes.

use solid_recipe::tracing::setup_tracing;
use solid_recipe::SolidError;

fn main() -> Result<(), SolidError> {
    setup_tracing();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    solid_recipe::lsp::demo(&mut out)
}
