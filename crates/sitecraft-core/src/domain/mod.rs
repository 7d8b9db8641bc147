//! Domain entities for the SiteCraft builder.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! Clean Architecture organises code into concentric layers.  The innermost
//! layer is called the **domain** (or "entities" layer).  Domain code:
//!
//! - Contains the core business rules of the application.
//! - Has **no** imports from network libraries, databases, or UI frameworks.
//! - Can be compiled and tested on any platform without any external setup.
//!
//! Here that means: what a template looks like, what a configuration holds,
//! how undo/redo snapshots are kept, when a document counts as "dirty", and
//! which DNS records a custom domain needs.

/// Static per-template field catalogs (realtor, creative).
mod catalog;

/// The edited document: template, colors, content maps, social links.
pub mod configuration;

/// Custom-domain record, lifecycle phases, and DNS instructions.
pub mod custom_domain;

/// Unsaved-change detection.
pub mod dirty;

/// Bounded undo/redo snapshot stacks.
pub mod history;

/// Schema registry types and lookup.
pub mod schema;

/// The closed set of template identifiers.
pub mod template;
