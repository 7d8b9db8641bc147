//! Application layer use cases for the builder.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure business rules in `sitecraft-core`) and the infrastructure (HTTP,
//! files).
//!
//! Use cases in this layer:
//!
//! - **Orchestrate** domain objects to fulfil a user goal (e.g., "change the
//!   primary color and make it undoable").
//! - **Depend on abstractions** (traits) rather than concrete implementations,
//!   so the HTTP transport can be swapped for an in-memory one in tests.
//! - **Contain no network I/O and no file system access**.
//!
//! # Sub-modules
//!
//! - **`session`**        – The [`session::BuilderSession`]: current
//!   configuration, active schema, baseline, undo history, and every mutator.
//!
//! - **`persist_config`** – Save/load/delete against the remote configuration
//!   store, including the baseline and slug bookkeeping.
//!
//! - **`connect_domain`** – The custom-domain state machine (add, verify,
//!   remove) gated on the record being published.
//!
//! - **`commands`**       – Explicit command dispatch: every user action
//!   (including undo, redo, and save) is a plain [`commands::BuilderCommand`]
//!   value.  Key bindings and buttons belong to the caller.
//!
//! - **`errors`**         – The error taxonomy shared by all use cases.

pub mod commands;
pub mod connect_domain;
pub mod errors;
pub mod persist_config;
pub mod session;
