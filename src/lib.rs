//! # SOLID Recipe
//!
//! > **Object-oriented design principles, written the Rust way.**
//!
//! This crate demonstrates polymorphism and the SOLID principles as small,
//! self-contained examples. Each example is a module with a `demo` function and a
//! matching binary under `src/bin/` that prints the demo to stdout.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### No inheritance, only contracts
//! Rust has no implementation inheritance. Every "base class" here becomes a
//! trait: shared base behavior is a **provided method**, an override is a method
//! the variant implements itself, and "extends" becomes a **supertrait**.
//!
//! ### Compile-time over runtime
//! Where the classic examples fail at runtime (an ostrich asked to fly), the Rust
//! fixes make the bad call unrepresentable: it does not compile.
//!
//! ## 🗺️ Module Tour
//!
//! | Module | Principle | Binary |
//! |--------|-----------|--------|
//! | [`polymorphism`] | Runtime dispatch through `dyn Shape` | `polymorphism` |
//! | [`ocp`] | Open/Closed: new shapes without edits | `ocp` |
//! | [`lsp`] | Liskov Substitution: violation and two fixes | `lsp` |
//! | [`isp`] | Interface Segregation: `Printer` vs `Scanner` | `isp` |
//! | [`dip`] | Dependency Inversion: `Computer` over `Keyboard` | `dip` |
//!
//! Shared pieces:
//! - [`error`]: the crate's [`SolidError`].
//! - [`tracing`](mod@crate::tracing): diagnostics on stderr, controlled by `RUST_LOG`.
//! - [`mock`]: a call-recording [`Keyboard`](dip::Keyboard) for tests.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! cargo run --bin polymorphism
//! RUST_LOG=debug cargo run --bin dip
//! cargo test
//! ```
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### Output
//! "Printing to the console" is writing lines to a `&mut dyn std::io::Write`.
//! Binaries pass a locked stdout, tests pass a `Vec<u8>`.
//!
//! ### Concurrency
//! None. Every demo runs synchronously, start to finish, on one thread.

pub mod dip;
pub mod error;
pub mod isp;
pub mod lsp;
pub mod mock;
pub mod ocp;
pub mod polymorphism;
pub mod tracing;

pub use error::{Result, SolidError};
