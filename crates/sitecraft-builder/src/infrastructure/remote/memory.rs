//! In-memory stand-ins for the remote services.
//!
//! Used by `--offline` runs of the console and by integration tests.  Both
//! types are cheap `Clone` handles over shared state, so a test can keep one
//! handle for inspection while the use case owns another.
//!
//! The store mimics the backend's observable rules:
//!
//! - One record per template; `load(None)` returns the most recently saved one.
//! - A slug may be used by one record only.
//! - Saving without a slug keeps the record's existing slug.
//!
//! [`InMemoryDomainProvider::linked`] additionally writes the domain fields
//! onto the store's record, as the real backend does.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use sitecraft_core::{Configuration, DomainStatus, LoadResponse, SaveRequest, TemplateId};
use tracing::debug;

use crate::application::connect_domain::DomainProvider;
use crate::application::errors::RemoteError;
use crate::application::persist_config::ConfigurationStore;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ── Configuration store ───────────────────────────────────────────────────────

/// One stored configuration record.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    pub config: Configuration,
    pub slug: Option<String>,
    pub published: bool,
    pub custom_domain: Option<String>,
    pub domain_config: Option<DomainStatus>,
}

#[derive(Debug, Default)]
struct StoreState {
    records: HashMap<TemplateId, StoredRecord>,
    last_saved: Option<TemplateId>,
    failure: Option<RemoteError>,
    save_calls: usize,
    load_calls: usize,
    delete_calls: usize,
}

/// [`ConfigurationStore`] keeping records in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with `failure` (`None` heals).
    pub fn set_failure(&self, failure: Option<RemoteError>) {
        lock(&self.state).failure = failure;
    }

    /// Flips the published flag of `template`'s record, if it exists.
    pub fn set_published(&self, template: TemplateId, published: bool) -> bool {
        let mut state = lock(&self.state);
        match state.records.get_mut(&template) {
            Some(record) => {
                record.published = published;
                true
            }
            None => false,
        }
    }

    pub fn record(&self, template: TemplateId) -> Option<StoredRecord> {
        lock(&self.state).records.get(&template).cloned()
    }

    pub fn save_calls(&self) -> usize {
        lock(&self.state).save_calls
    }

    pub fn load_calls(&self) -> usize {
        lock(&self.state).load_calls
    }

    pub fn delete_calls(&self) -> usize {
        lock(&self.state).delete_calls
    }

    fn set_domain(
        &self,
        template: TemplateId,
        domain: Option<String>,
        status: Option<DomainStatus>,
    ) {
        if let Some(record) = lock(&self.state).records.get_mut(&template) {
            record.custom_domain = domain;
            record.domain_config = status;
        }
    }

    fn update_domain_status(&self, domain: &str, status: &DomainStatus) {
        let mut state = lock(&self.state);
        for record in state.records.values_mut() {
            if record.custom_domain.as_deref() == Some(domain) {
                record.domain_config = Some(status.clone());
            }
        }
    }
}

#[async_trait]
impl ConfigurationStore for InMemoryConfigStore {
    async fn save(&self, request: &SaveRequest) -> Result<(), RemoteError> {
        let mut state = lock(&self.state);
        state.save_calls += 1;
        if let Some(err) = state.failure.clone() {
            return Err(err);
        }

        if let Some(slug) = &request.slug {
            let taken = state.records.iter().any(|(template, r)| {
                *template != request.template && r.slug.as_ref() == Some(slug)
            });
            if taken {
                return Err(RemoteError::Rejected(format!("slug {slug} is already taken")));
            }
        }

        let record = state
            .records
            .entry(request.template)
            .or_insert_with(|| StoredRecord {
                config: request.config.clone(),
                slug: None,
                published: false,
                custom_domain: None,
                domain_config: None,
            });
        record.config = request.config.clone();
        if request.slug.is_some() {
            record.slug = request.slug.clone();
        }
        state.last_saved = Some(request.template);
        debug!(template = %request.template, "record stored in memory");
        Ok(())
    }

    async fn load(
        &self,
        template: Option<TemplateId>,
    ) -> Result<Option<LoadResponse>, RemoteError> {
        let mut state = lock(&self.state);
        state.load_calls += 1;
        if let Some(err) = state.failure.clone() {
            return Err(err);
        }

        let Some(key) = template.or(state.last_saved) else {
            return Ok(None);
        };
        Ok(state.records.get(&key).map(|record| LoadResponse {
            config: Some(record.config.clone()),
            template: Some(key),
            slug: record.slug.clone(),
            published: record.published,
            custom_domain: record.custom_domain.clone(),
            domain_config: record.domain_config.clone(),
        }))
    }

    async fn delete(&self, template: TemplateId) -> Result<(), RemoteError> {
        let mut state = lock(&self.state);
        state.delete_calls += 1;
        if let Some(err) = state.failure.clone() {
            return Err(err);
        }

        state.records.remove(&template);
        if state.last_saved == Some(template) {
            state.last_saved = None;
        }
        Ok(())
    }
}

// ── Domain provider ───────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct ProviderState {
    domains: HashMap<String, DomainStatus>,
    failure: Option<RemoteError>,
    add_calls: usize,
    status_calls: usize,
    remove_calls: usize,
}

/// [`DomainProvider`] keeping registrations in process memory.
///
/// Registered domains report `verified: false` until
/// [`mark_verified`](Self::mark_verified) is called, mimicking DNS that has
/// not propagated yet.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDomainProvider {
    state: Arc<Mutex<ProviderState>>,
    store: Option<InMemoryConfigStore>,
}

impl InMemoryDomainProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider that mirrors domain changes onto `store`'s records.
    pub fn linked(store: InMemoryConfigStore) -> Self {
        Self {
            state: Arc::default(),
            store: Some(store),
        }
    }

    pub fn set_failure(&self, failure: Option<RemoteError>) {
        lock(&self.state).failure = failure;
    }

    /// Simulates DNS propagation for `domain`.
    pub fn mark_verified(&self, domain: &str, verified: bool) {
        if let Some(status) = lock(&self.state).domains.get_mut(domain) {
            status.verified = verified;
        }
    }

    pub fn is_registered(&self, domain: &str) -> bool {
        lock(&self.state).domains.contains_key(domain)
    }

    pub fn add_calls(&self) -> usize {
        lock(&self.state).add_calls
    }

    pub fn status_calls(&self) -> usize {
        lock(&self.state).status_calls
    }

    pub fn remove_calls(&self) -> usize {
        lock(&self.state).remove_calls
    }
}

#[async_trait]
impl DomainProvider for InMemoryDomainProvider {
    async fn add_domain(
        &self,
        domain: &str,
        template: TemplateId,
    ) -> Result<DomainStatus, RemoteError> {
        let status = {
            let mut state = lock(&self.state);
            state.add_calls += 1;
            if let Some(err) = state.failure.clone() {
                return Err(err);
            }
            if state.domains.contains_key(domain) {
                return Err(RemoteError::Rejected(format!("{domain} is already in use")));
            }
            let mut status = DomainStatus::unverified();
            status
                .metadata
                .insert("name".to_string(), serde_json::Value::String(domain.to_string()));
            state.domains.insert(domain.to_string(), status.clone());
            status
        };

        if let Some(store) = &self.store {
            store.set_domain(template, Some(domain.to_string()), Some(status.clone()));
        }
        Ok(status)
    }

    async fn domain_status(&self, domain: &str) -> Result<DomainStatus, RemoteError> {
        let status = {
            let mut state = lock(&self.state);
            state.status_calls += 1;
            if let Some(err) = state.failure.clone() {
                return Err(err);
            }
            state
                .domains
                .get(domain)
                .cloned()
                .ok_or_else(|| RemoteError::Status {
                    status: 404,
                    message: format!("{domain} is not registered"),
                })?
        };

        if let Some(store) = &self.store {
            store.update_domain_status(domain, &status);
        }
        Ok(status)
    }

    async fn remove_domain(&self, domain: &str, template: TemplateId) -> Result<(), RemoteError> {
        {
            let mut state = lock(&self.state);
            state.remove_calls += 1;
            if let Some(err) = state.failure.clone() {
                return Err(err);
            }
            state.domains.remove(domain);
        }

        if let Some(store) = &self.store {
            store.set_domain(template, None, None);
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
