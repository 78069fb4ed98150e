//! # Observability & Tracing
//!
//! Diagnostics for the demonstration binaries.
//!
//! Every binary prints its demonstration to **stdout**. Diagnostics must never
//! mix into those lines, so the subscriber installed by [`setup_tracing`] writes
//! to **stderr**.
//!
//! ## What Gets Traced
//!
//! - **Demo start**: each `demo` logs a `debug!` line naming itself
//! - **Delegation**: consumers such as [`Computer::input`](crate::dip::Computer::input)
//!   run inside an `#[instrument]` span
//! - **Violations**: the Liskov violation logs a `warn!` when it refuses to fly
//!
//! ## Usage Examples
//!
//! ```bash
//! # Only the demo output (default: errors only on stderr)
//! cargo run --bin dip
//!
//! # Show delegation spans
//! RUST_LOG=debug cargo run --bin dip
//!
//! # Filter to one module
//! RUST_LOG=solid_recipe::lsp=trace cargo run --bin lsp
//! ```

/// Initializes the tracing subscriber for a demonstration binary.
///
/// Verbosity is controlled via `RUST_LOG`. Call once, at the top of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
