//! Custom-domain record and DNS instructions.
//!
//! A published site can be served from a user-owned domain.  The lifecycle is:
//!
//! ```text
//! NoDomain ──add──► PendingVerification ──verify (ok)──► Verified
//!     ▲                    │    ▲                           │
//!     └──────remove────────┘    └─────── (no path) ─────────┘
//!     ▲                                                     │
//!     └────────────────────────remove───────────────────────┘
//! ```
//!
//! A verified domain never falls back to pending on its own; the only way
//! back is remove followed by add.
//!
//! # Why `manual_check_required` exists
//!
//! Provider status reads can be cached and report `verified: true` from
//! before a DNS change.  The record therefore carries a session-local flag
//! that is forced on whenever a domain is added or loaded, and cleared only
//! by an explicit verification round-trip.  While it is set the domain is
//! displayed as pending no matter what `domain_config.verified` says.  The
//! flag is never persisted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Longest domain name accepted (RFC 1035 presentation limit).
pub const MAX_DOMAIN_LEN: usize = 253;

/// Rejected before any network call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainInputError {
    #[error("domain must not be empty")]
    Empty,
    #[error("domain is {len} characters long; the maximum is {MAX_DOMAIN_LEN}")]
    TooLong { len: usize },
}

/// Provider status object: `{ verified, ...provider metadata }`.
///
/// Provider-specific fields are kept verbatim in `metadata` so they can be
/// shown or forwarded without this crate knowing their shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainStatus {
    #[serde(default)]
    pub verified: bool,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl DomainStatus {
    pub fn verified() -> Self {
        Self { verified: true, metadata: Map::new() }
    }

    pub fn unverified() -> Self {
        Self::default()
    }
}

/// Display phase derived from a [`DomainRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainPhase {
    NoDomain,
    PendingVerification,
    Verified,
}

/// Domain fields attached to a published configuration's remote record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainRecord {
    pub custom_domain: Option<String>,
    pub domain_config: Option<DomainStatus>,
    /// Session-local; see the module docs.
    pub manual_check_required: bool,
}

impl DomainRecord {
    /// Builds a record from persisted fields.
    ///
    /// A stored domain always starts with `manual_check_required` set, since
    /// the persisted `verified` flag may be stale.
    pub fn from_persisted(
        custom_domain: Option<String>,
        domain_config: Option<DomainStatus>,
    ) -> Self {
        let manual_check_required = custom_domain.is_some();
        Self {
            custom_domain,
            domain_config,
            manual_check_required,
        }
    }

    pub fn phase(&self) -> DomainPhase {
        if self.custom_domain.is_none() {
            return DomainPhase::NoDomain;
        }
        let verified = self.domain_config.as_ref().is_some_and(|c| c.verified);
        if verified && !self.manual_check_required {
            DomainPhase::Verified
        } else {
            DomainPhase::PendingVerification
        }
    }
}

/// Normalises and validates a user-entered domain.
///
/// Only emptiness and length are checked; the provider is the authority on
/// everything else.  The result is trimmed and lower-cased.
///
/// # Errors
///
/// Returns [`DomainInputError::Empty`] or [`DomainInputError::TooLong`].
pub fn validate_domain(input: &str) -> Result<String, DomainInputError> {
    let domain = input.trim().to_ascii_lowercase();
    if domain.is_empty() {
        return Err(DomainInputError::Empty);
    }
    if domain.len() > MAX_DOMAIN_LEN {
        return Err(DomainInputError::TooLong { len: domain.len() });
    }
    Ok(domain)
}

// ── DNS instructions ──────────────────────────────────────────────────────────

/// Record values the hosting provider expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsTargets {
    /// IPv4 address an apex domain's A record must point to.
    pub apex_a_record: String,
    /// Hostname a subdomain's CNAME must point to.
    pub cname_target: String,
}

impl Default for DnsTargets {
    fn default() -> Self {
        Self {
            apex_a_record: "76.76.21.21".to_string(),
            cname_target: "cname.vercel-dns.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DnsRecordKind {
    A,
    Cname,
}

/// One DNS record the user has to create at their registrar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub kind: DnsRecordKind,
    /// Host label relative to the apex (`@` for the apex itself).
    pub host: String,
    pub value: String,
}

/// Returns `true` when `domain` has more than two dot-separated labels.
pub fn is_subdomain(domain: &str) -> bool {
    domain.split('.').filter(|l| !l.is_empty()).count() > 2
}

/// Which record the user must create for `domain`.
///
/// Display-only: the choice does not affect the lifecycle.
///
/// - `shop.example.com` → `CNAME shop → cname_target`
/// - `example.com` → `A @ → apex_a_record`
pub fn dns_instructions(domain: &str, targets: &DnsTargets) -> DnsRecord {
    let labels: Vec<&str> = domain.split('.').filter(|l| !l.is_empty()).collect();
    if labels.len() > 2 {
        DnsRecord {
            kind: DnsRecordKind::Cname,
            host: labels[..labels.len() - 2].join("."),
            value: targets.cname_target.clone(),
        }
    } else {
        DnsRecord {
            kind: DnsRecordKind::A,
            host: "@".to_string(),
            value: targets.apex_a_record.clone(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_domain_trims_and_lowercases() {
        assert_eq!(validate_domain("  Example.COM "), Ok("example.com".to_string()));
    }

    #[test]
    fn test_validate_domain_rejects_blank_input() {
        assert_eq!(validate_domain("   "), Err(DomainInputError::Empty));
    }

    #[test]
    fn test_validate_domain_rejects_overlong_input() {
        let long = format!("{}.com", "a".repeat(MAX_DOMAIN_LEN));
        assert!(matches!(validate_domain(&long), Err(DomainInputError::TooLong { .. })));
    }

    #[test]
    fn test_phase_is_no_domain_without_custom_domain() {
        assert_eq!(DomainRecord::default().phase(), DomainPhase::NoDomain);
    }

    #[test]
    fn test_phase_is_pending_while_manual_check_required_even_if_verified() {
        let record = DomainRecord {
            custom_domain: Some("example.com".to_string()),
            domain_config: Some(DomainStatus::verified()),
            manual_check_required: true,
        };
        assert_eq!(record.phase(), DomainPhase::PendingVerification);
    }

    #[test]
    fn test_phase_is_verified_only_after_manual_check_cleared() {
        let record = DomainRecord {
            custom_domain: Some("example.com".to_string()),
            domain_config: Some(DomainStatus::verified()),
            manual_check_required: false,
        };
        assert_eq!(record.phase(), DomainPhase::Verified);
    }

    #[test]
    fn test_from_persisted_forces_manual_check_for_stored_domain() {
        let record = DomainRecord::from_persisted(
            Some("example.com".into()),
            Some(DomainStatus::verified()),
        );
        assert!(record.manual_check_required);
        assert_eq!(record.phase(), DomainPhase::PendingVerification);

        let empty = DomainRecord::from_persisted(None, None);
        assert!(!empty.manual_check_required);
    }

    #[test]
    fn test_dns_instructions_for_apex_domain_use_a_record() {
        let record = dns_instructions("example.com", &DnsTargets::default());
        assert_eq!(record.kind, DnsRecordKind::A);
        assert_eq!(record.host, "@");
        assert_eq!(record.value, "76.76.21.21");
    }

    #[test]
    fn test_dns_instructions_for_subdomain_use_cname_with_leading_labels() {
        let record = dns_instructions("cards.shop.example.com", &DnsTargets::default());
        assert_eq!(record.kind, DnsRecordKind::Cname);
        assert_eq!(record.host, "cards.shop");
        assert_eq!(record.value, "cname.vercel-dns.com");
    }

    #[test]
    fn test_is_subdomain_counts_labels() {
        assert!(!is_subdomain("example.com"));
        assert!(is_subdomain("www.example.com"));
    }

    #[test]
    fn test_domain_status_keeps_provider_metadata() {
        let json = r#"{"verified":false,"name":"example.com","verification":[{"type":"TXT"}]}"#;
        let status: DomainStatus = serde_json::from_str(json).unwrap();
        assert!(!status.verified);
        assert_eq!(status.metadata["name"], "example.com");
        assert!(status.metadata.contains_key("verification"));
    }
}
