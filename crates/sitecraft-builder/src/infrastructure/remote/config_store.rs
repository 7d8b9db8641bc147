//! HTTP implementation of [`ConfigurationStore`].

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use sitecraft_core::protocol::routes;
use sitecraft_core::{LoadResponse, SaveRequest, TemplateId};
use tracing::{debug, info};

use super::api_client::{decode_json, error_from_response, ApiClient};
use crate::application::errors::RemoteError;
use crate::application::persist_config::ConfigurationStore;

/// Configuration store backed by `{base}/api/builder/config`.
#[derive(Debug, Clone)]
pub struct HttpConfigStore {
    api: ApiClient,
}

impl HttpConfigStore {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ConfigurationStore for HttpConfigStore {
    async fn save(&self, request: &SaveRequest) -> Result<(), RemoteError> {
        info!(template = %request.template, slug = ?request.slug, "POST {}", routes::CONFIG);
        let http = self.api.request(Method::POST, routes::CONFIG).json(request);
        self.api.send_ack(http).await
    }

    async fn load(
        &self,
        template: Option<TemplateId>,
    ) -> Result<Option<LoadResponse>, RemoteError> {
        debug!(?template, "GET {}", routes::CONFIG);
        let mut http = self.api.request(Method::GET, routes::CONFIG);
        if let Some(template) = template {
            http = http.query(&[("template", template.as_str())]);
        }

        let (status, body) = self.api.fetch(http).await?;
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(error_from_response(status, &body));
        }
        if body.trim().is_empty() || body.trim() == "null" {
            return Ok(None);
        }

        let response: LoadResponse = decode_json(&body)?;
        Ok((!response.is_empty()).then_some(response))
    }

    async fn delete(&self, template: TemplateId) -> Result<(), RemoteError> {
        info!(template = %template, "DELETE {}", routes::CONFIG);
        let http = self
            .api
            .request(Method::DELETE, routes::CONFIG)
            .query(&[("template", template.as_str())]);
        self.api.send_ack(http).await
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
