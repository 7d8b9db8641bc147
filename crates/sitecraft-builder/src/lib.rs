//! sitecraft-builder library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # Layers
//!
//! ```text
//! application/     BuilderSession, persistence gateway, domain manager,
//!                  command dispatch (no I/O, depends on traits only)
//! infrastructure/  reqwest adapters, in-memory adapters, TOML settings
//! ```

pub mod application;
pub mod infrastructure;
