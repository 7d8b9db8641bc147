//! # sitecraft-core
//!
//! Shared library for the SiteCraft builder containing the template schema
//! catalogs, the editable configuration model, the undo/redo history, and the
//! JSON wire protocol spoken with the remote configuration and domain APIs.
//!
//! This crate is used by the builder engine and by anything else that needs
//! to read or write a site configuration.  It has zero dependencies on
//! network sockets, async runtimes, or UI frameworks.
//!
//! # Architecture overview (for beginners)
//!
//! SiteCraft lets a user pick a template (for example a real-estate agent
//! card or a creative portfolio) and then fill in colors, texts, images, and
//! social links in a visual editor.  The editor is schema-driven: each
//! template declares which fields exist and what their defaults are.
//!
//! - **`domain`** – Pure business logic.  The most important pieces are the
//!   [`Configuration`] (the document being edited), the static [`Schema`]
//!   catalogs, and the bounded [`History`] used for undo/redo.
//!
//! - **`protocol`** – How configurations and domain status objects travel
//!   over the network.  Every message is a plain serde struct encoded as
//!   camelCase JSON.

pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `sitecraft_core::Configuration` instead of
// `sitecraft_core::domain::configuration::Configuration`.
pub use domain::configuration::{
    ColorKey, ColorSlots, Configuration, ContentMaps, LogoSlot, LogoSlots, SocialLink, UnknownSlot,
};
pub use domain::custom_domain::{
    dns_instructions, is_subdomain, validate_domain, DnsRecord, DnsRecordKind, DnsTargets,
    DomainInputError, DomainPhase, DomainRecord, DomainStatus,
};
pub use domain::dirty::has_unsaved_changes;
pub use domain::history::{History, HISTORY_LIMIT};
pub use domain::schema::{schema_for, AssetKind, FieldKind, Schema};
pub use domain::template::{TemplateId, UnknownTemplate};
pub use protocol::messages::{AckResponse, LoadResponse, SaveRequest};
