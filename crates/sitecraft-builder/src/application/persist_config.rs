//! PersistConfigUseCase: save, load, and delete against the configuration store.
//!
//! The [`ConfigurationStore`] trait is the seam between this use case and the
//! transport.  The HTTP implementation lives in
//! `infrastructure::remote::config_store`; tests use mockall mocks or the
//! in-memory store.
//!
//! All baseline and slug bookkeeping happens on the [`BuilderSession`]; this
//! module only sequences the remote call between `begin_save` and
//! `complete_save` and maps load/delete results back onto the session.

use async_trait::async_trait;
use sitecraft_core::{DomainRecord, LoadResponse, SaveRequest, TemplateId};
use tracing::{debug, info, warn};

use super::errors::{BuilderError, RemoteError};
use super::session::BuilderSession;

/// Remote storage of one owner's configuration records.
///
/// Every call is scoped to the authenticated owner; the transport supplies
/// the credentials.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfigurationStore: Send + Sync {
    /// Creates or replaces the owner's record for `request.template`.
    async fn save(&self, request: &SaveRequest) -> Result<(), RemoteError>;

    /// Fetches the owner's record, optionally filtered to one template.
    ///
    /// `Ok(None)` means the owner has no stored record.
    async fn load(&self, template: Option<TemplateId>) -> Result<Option<LoadResponse>, RemoteError>;

    /// Removes the owner's record for `template`.
    async fn delete(&self, template: TemplateId) -> Result<(), RemoteError>;
}

/// What a load found, beyond what it wrote into the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadOutcome {
    /// `false` when the session was reset to template defaults.
    pub found: bool,
    /// Domain fields of the loaded record (empty when nothing was found).
    pub domain: DomainRecord,
}

/// Use case: moves configurations between a [`BuilderSession`] and a store.
pub struct PersistenceGateway<S> {
    store: S,
}

impl<S: ConfigurationStore> PersistenceGateway<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Saves the session's current configuration under `slug`.
    ///
    /// The slug is sent exactly as given; `None` leaves the record's slug to
    /// the store.  On success the sent value becomes the baseline.
    ///
    /// # Errors
    ///
    /// - [`BuilderError::ReadOnly`] for read-only sessions (nothing is sent).
    /// - [`BuilderError::Remote`] when the store rejects the save; local edits
    ///   are kept and the session stays dirty.
    pub async fn save(
        &self,
        session: &mut BuilderSession,
        slug: Option<String>,
    ) -> Result<(), BuilderError> {
        let ticket = session.begin_save(slug)?;
        debug!(
            template = %ticket.request().template,
            slug = ?ticket.request().slug,
            "sending save"
        );
        let outcome = self.store.save(ticket.request()).await;
        session.complete_save(ticket, outcome)
    }

    /// Loads the owner's record into the session.
    ///
    /// When no record exists the session is reset to the defaults of
    /// `template` (or of its current template) with no slug, no baseline, and
    /// empty history.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Remote`]; the session is left unchanged.
    pub async fn load(
        &self,
        session: &mut BuilderSession,
        template: Option<TemplateId>,
    ) -> Result<LoadOutcome, BuilderError> {
        let response = self.store.load(template).await.map_err(|err| {
            warn!(error = %err, "load failed");
            BuilderError::from(err)
        })?;

        match response {
            Some(LoadResponse {
                config: Some(config),
                slug,
                published,
                custom_domain,
                domain_config,
                ..
            }) => {
                info!(template = %config.template, slug = ?slug, published, "configuration loaded");
                session.apply_loaded(config, slug, published);
                Ok(LoadOutcome {
                    found: true,
                    domain: DomainRecord::from_persisted(custom_domain, domain_config),
                })
            }
            _ => {
                let template = template.unwrap_or_else(|| session.template());
                info!(template = %template, "no stored configuration; using defaults");
                session.reset_to_defaults(template);
                Ok(LoadOutcome::default())
            }
        }
    }

    /// Deletes the record for the session's current template.
    ///
    /// On success the session is reset to that template's defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Remote`]; the session is left unchanged.
    pub async fn delete(&self, session: &mut BuilderSession) -> Result<(), BuilderError> {
        let template = session.template();
        self.store.delete(template).await.map_err(|err| {
            warn!(error = %err, "delete failed");
            BuilderError::from(err)
        })?;
        info!(template = %template, "configuration deleted");
        session.reset_to_defaults(template);
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
