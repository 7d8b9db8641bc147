//! Infrastructure layer for the builder.
//!
//! Contains the I/O-facing adapters: the reqwest clients for the
//! configuration store and the domain API, in-memory stand-ins for both, and
//! the TOML settings file.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `sitecraft_core`, but MUST NOT be imported by the `application` or domain
//! layers.

pub mod remote;
pub mod storage;
