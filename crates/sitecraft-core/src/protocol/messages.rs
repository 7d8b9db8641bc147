//! Request and response bodies.
//!
//! Every struct here maps one-to-one onto a JSON body.  Field names are
//! camelCase on the wire (`socialLinks`, `customDomain`, `domainConfig`).
//!
//! # Acknowledgement bodies
//!
//! Mutating endpoints reply with either `{"ok": true}` or
//! `{"error": "human readable message"}`.  [`AckResponse::into_result`]
//! collapses that into a `Result` so callers never inspect the raw shape.
//! A reply that carries neither an error nor `"ok": true` is a failure.

use serde::{Deserialize, Serialize};

use crate::domain::configuration::Configuration;
use crate::domain::custom_domain::DomainStatus;
use crate::domain::template::TemplateId;

/// `POST` body of the configuration save endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    pub config: Configuration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub template: TemplateId,
}

impl SaveRequest {
    pub fn new(config: Configuration, slug: Option<String>) -> Self {
        let template = config.template;
        Self { config, slug, template }
    }
}

/// Message reported when an acknowledgement lacks both `ok` and `error`.
pub const NOT_ACKNOWLEDGED: &str = "request was not acknowledged";

/// `{ok}` / `{error}` reply of the save, delete, and domain-remove endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AckResponse {
    pub fn ok() -> Self {
        Self { ok: true, error: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { ok: false, error: Some(message.into()) }
    }

    /// `Ok(())` only for `"ok": true` without an error.  An `error` always
    /// wins; a reply with neither yields [`NOT_ACKNOWLEDGED`].
    pub fn into_result(self) -> Result<(), String> {
        match (self.ok, self.error) {
            (_, Some(message)) => Err(message),
            (true, None) => Ok(()),
            (false, None) => Err(NOT_ACKNOWLEDGED.to_string()),
        }
    }
}

/// Reply of the configuration load endpoint.
///
/// An owner without a stored record gets an empty object, which deserializes
/// to a response whose `config` is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Configuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_config: Option<DomainStatus>,
}

impl LoadResponse {
    /// `true` when the owner has no stored record.
    pub fn is_empty(&self) -> bool {
        self.config.is_none()
    }
}

/// `POST` body of the domain-add endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainAddRequest {
    pub domain: String,
    pub template: TemplateId,
}

/// Reply of the domain-add endpoint: a status object or `{error}`.
///
/// `Error` is listed first because a status object accepts any JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DomainAddResponse {
    Error { error: String },
    Status(DomainStatus),
}

/// Reply of the domain-status endpoint: `{domain: {verified, ...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainStatusResponse {
    pub domain: DomainStatus,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
