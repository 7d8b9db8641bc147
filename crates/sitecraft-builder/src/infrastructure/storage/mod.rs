//! Storage infrastructure: the local settings file.
//!
//! The builder keeps nothing but its own settings on disk; configurations
//! live in the remote store.  The `settings` sub-module handles:
//!
//! - Reading the TOML settings file from the platform-appropriate directory.
//! - Writing it back (e.g. to create a template on first run).
//! - Providing defaults when the file does not exist yet.

pub mod settings;
