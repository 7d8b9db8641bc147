//! ConnectDomainUseCase: attaching a custom domain to a published site.
//!
//! # Domain lifecycle (for beginners)
//!
//! ```text
//!             add (published only)           verify → verified
//! NoDomain  ───────────────────────►  Pending  ─────────────────►  Verified
//!    ▲                                 │  ▲                            │
//!    └──────────── remove ─────────────┘  └─ verify → not verified     │
//!    └─────────────────────────── remove ──────────────────────────────┘
//! ```
//!
//! - `NoDomain`: no `custom_domain` stored.
//! - `Pending`: a domain is stored but has not been confirmed by an explicit
//!   verification round-trip in this session (`manual_check_required`).
//! - `Verified`: the last explicit verify reported `verified: true`.
//!
//! A freshly added domain is always `Pending`, whatever the registration
//! response claims, and a domain read from a stored record starts `Pending`
//! too: cached provider reads can report `verified` long after a DNS change.
//! There is no direct `Verified → Pending` edge; a re-verify that reports
//! "not verified" keeps the verified state and only logs a warning.
//!
//! Nothing here polls.  Verification happens only when the caller invokes
//! [`DomainConnectionManager::verify`].

use async_trait::async_trait;
use sitecraft_core::{
    dns_instructions, validate_domain, DnsRecord, DnsTargets, DomainPhase, DomainRecord,
    DomainStatus, TemplateId,
};
use tracing::{debug, info, warn};

use super::errors::{BuilderError, RemoteError};
use super::session::BuilderSession;

/// Remote DNS/hosting provider, proxied by the site backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainProvider: Send + Sync {
    /// Registers `domain` for the owner's `template` site.
    async fn add_domain(
        &self,
        domain: &str,
        template: TemplateId,
    ) -> Result<DomainStatus, RemoteError>;

    /// Fetches the provider's current status, bypassing intermediate caches.
    async fn domain_status(&self, domain: &str) -> Result<DomainStatus, RemoteError>;

    /// Detaches `domain` from the owner's `template` site.
    async fn remove_domain(&self, domain: &str, template: TemplateId) -> Result<(), RemoteError>;
}

/// Use case: drives the [`DomainRecord`] of one published configuration.
pub struct DomainConnectionManager<P> {
    provider: P,
    record: DomainRecord,
}

impl<P: DomainProvider> DomainConnectionManager<P> {
    /// Creates a manager with no domain attached.
    pub fn new(provider: P) -> Self {
        Self::from_record(provider, DomainRecord::default())
    }

    /// Creates a manager seeded from a loaded record.
    ///
    /// A stored domain is never trusted as verified until checked again.
    pub fn from_record(provider: P, mut record: DomainRecord) -> Self {
        if record.custom_domain.is_some() {
            record.manual_check_required = true;
        }
        Self { provider, record }
    }

    /// Replaces the tracked record, e.g. after the session loaded another one.
    pub fn reset_record(&mut self, mut record: DomainRecord) {
        if record.custom_domain.is_some() {
            record.manual_check_required = true;
        }
        self.record = record;
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn record(&self) -> &DomainRecord {
        &self.record
    }

    pub fn phase(&self) -> DomainPhase {
        self.record.phase()
    }

    /// DNS record the user has to create, or `None` without a domain.
    pub fn dns_instructions(&self, targets: &DnsTargets) -> Option<DnsRecord> {
        self.record
            .custom_domain
            .as_deref()
            .map(|domain| dns_instructions(domain, targets))
    }

    /// Registers `input` as the custom domain of the session's site.
    ///
    /// # Errors
    ///
    /// - [`BuilderError::Validation`] for an empty or over-long domain.
    /// - [`BuilderError::Precondition`] when the site is not published or a
    ///   domain is already attached.  No network call is made.
    /// - [`BuilderError::Remote`] when the provider rejects the domain; the
    ///   record stays empty.
    pub async fn add_domain(
        &mut self,
        session: &BuilderSession,
        input: &str,
    ) -> Result<DomainPhase, BuilderError> {
        let domain = validate_domain(input)?;

        if !session.is_published() {
            return Err(BuilderError::Precondition(
                "publish the site before connecting a custom domain".into(),
            ));
        }
        if let Some(existing) = &self.record.custom_domain {
            return Err(BuilderError::Precondition(format!(
                "{existing} is already connected; remove it first"
            )));
        }

        let status = self
            .provider
            .add_domain(&domain, session.template())
            .await
            .map_err(|err| {
                warn!(%domain, error = %err, "domain registration failed");
                BuilderError::from(err)
            })?;

        info!(
            %domain,
            reported_verified = status.verified,
            "domain registered; awaiting verification"
        );
        self.record = DomainRecord {
            custom_domain: Some(domain),
            domain_config: Some(status),
            manual_check_required: true,
        };
        Ok(self.record.phase())
    }

    /// Asks the provider whether the attached domain resolves correctly.
    ///
    /// # Errors
    ///
    /// - [`BuilderError::Precondition`] when no domain is attached.
    /// - [`BuilderError::Remote`] on provider failure; the record is unchanged.
    pub async fn verify(&mut self) -> Result<DomainPhase, BuilderError> {
        let Some(domain) = self.record.custom_domain.clone() else {
            return Err(BuilderError::Precondition("no custom domain to verify".into()));
        };

        let status = self.provider.domain_status(&domain).await.map_err(|err| {
            warn!(%domain, error = %err, "domain status check failed");
            BuilderError::from(err)
        })?;

        match (self.record.phase(), status.verified) {
            (_, true) => {
                info!(%domain, "domain verified");
                self.record.domain_config = Some(status);
                self.record.manual_check_required = false;
            }
            (DomainPhase::Verified, false) => {
                warn!(
                    %domain,
                    "provider no longer reports the domain as verified; keeping verified state"
                );
            }
            (_, false) => {
                debug!(%domain, "domain still pending verification");
                self.record.domain_config = Some(status);
                self.record.manual_check_required = true;
            }
        }
        Ok(self.record.phase())
    }

    /// Detaches the custom domain.  `confirmed` carries the user's explicit
    /// consent; removal without it is refused.
    ///
    /// Removing when no domain is attached is a no-op.
    ///
    /// # Errors
    ///
    /// - [`BuilderError::Precondition`] without confirmation.
    /// - [`BuilderError::Remote`] on provider failure; the record is unchanged.
    pub async fn remove_domain(
        &mut self,
        session: &BuilderSession,
        confirmed: bool,
    ) -> Result<(), BuilderError> {
        if !confirmed {
            return Err(BuilderError::Precondition(
                "removing a custom domain requires confirmation".into(),
            ));
        }
        let Some(domain) = self.record.custom_domain.clone() else {
            debug!("no custom domain to remove");
            return Ok(());
        };

        self.provider
            .remove_domain(&domain, session.template())
            .await
            .map_err(|err| {
                warn!(%domain, error = %err, "domain removal failed");
                BuilderError::from(err)
            })?;

        info!(%domain, "domain removed");
        self.record = DomainRecord::default();
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
