//! HTTP implementation of [`DomainProvider`].
//!
//! The backend proxies the hosting provider's domain API.  Status reads carry
//! a random `t` query parameter so no intermediate cache can answer them.

use async_trait::async_trait;
use reqwest::Method;
use sitecraft_core::protocol::messages::{
    DomainAddRequest, DomainAddResponse, DomainStatusResponse,
};
use sitecraft_core::protocol::routes;
use sitecraft_core::{DomainStatus, TemplateId};
use tracing::info;
use uuid::Uuid;

use super::api_client::ApiClient;
use crate::application::connect_domain::DomainProvider;
use crate::application::errors::RemoteError;

/// Domain provider backed by `{base}/api/domains`.
#[derive(Debug, Clone)]
pub struct HttpDomainProvider {
    api: ApiClient,
}

impl HttpDomainProvider {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DomainProvider for HttpDomainProvider {
    async fn add_domain(
        &self,
        domain: &str,
        template: TemplateId,
    ) -> Result<DomainStatus, RemoteError> {
        info!(%domain, %template, "POST {}", routes::DOMAINS);
        let body = DomainAddRequest {
            domain: domain.to_string(),
            template,
        };
        let http = self.api.request(Method::POST, routes::DOMAINS).json(&body);
        match self.api.send_json::<DomainAddResponse>(http).await? {
            DomainAddResponse::Status(status) => Ok(status),
            DomainAddResponse::Error { error } => Err(RemoteError::Rejected(error)),
        }
    }

    async fn domain_status(&self, domain: &str) -> Result<DomainStatus, RemoteError> {
        info!(%domain, "GET {}", routes::DOMAIN_STATUS);
        let cache_buster = Uuid::new_v4().simple().to_string();
        let http = self
            .api
            .request(Method::GET, routes::DOMAIN_STATUS)
            .query(&[("domain", domain), ("t", cache_buster.as_str())]);
        let response: DomainStatusResponse = self.api.send_json(http).await?;
        Ok(response.domain)
    }

    async fn remove_domain(&self, domain: &str, template: TemplateId) -> Result<(), RemoteError> {
        info!(%domain, %template, "DELETE {}", routes::DOMAINS);
        let http = self
            .api
            .request(Method::DELETE, routes::DOMAINS)
            .query(&[("domain", domain), ("template", template.as_str())]);
        self.api.send_ack(http).await
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::remote::test_server::TestServer;

    fn provider_for(server: &TestServer) -> HttpDomainProvider {
        HttpDomainProvider::new(server.api_client(Some("owner-token")))
    }

    #[tokio::test]
    async fn test_add_domain_posts_domain_and_template() {
        // Arrange
        let reply = r#"{"verified":false,"name":"example.com","apexName":"example.com"}"#;
        let server = TestServer::start(&[(200, reply)]).await;
        let provider = provider_for(&server);

        // Act
        let status = provider
            .add_domain("example.com", TemplateId::Realtor)
            .await
            .unwrap();

        // Assert
        assert!(!status.verified);
        assert_eq!(status.metadata["name"], "example.com");
        let sent = &server.requests()[0];
        assert_eq!(sent.method(), "POST");
        assert_eq!(sent.target(), "/api/domains");
        assert_eq!(sent.header("authorization"), Some("Bearer owner-token"));
        let body: DomainAddRequest = serde_json::from_str(&sent.body).unwrap();
        assert_eq!(
            body,
            DomainAddRequest {
                domain: "example.com".into(),
                template: TemplateId::Realtor,
            }
        );
    }

    #[tokio::test]
    async fn test_add_domain_error_body_with_success_status_is_rejected() {
        let server =
            TestServer::start(&[(200, r#"{"error":"domain already in use"}"#)]).await;
        let provider = provider_for(&server);

        let result = provider.add_domain("example.com", TemplateId::Realtor).await;

        assert_eq!(
            result,
            Err(RemoteError::Rejected("domain already in use".into()))
        );
    }

    #[tokio::test]
    async fn test_add_domain_error_status_is_reported() {
        let server = TestServer::start(&[(403, "")]).await;
        let provider = provider_for(&server);

        let result = provider.add_domain("example.com", TemplateId::Creative).await;

        assert_eq!(
            result,
            Err(RemoteError::Status {
                status: 403,
                message: "Forbidden".into()
            })
        );
    }

    #[tokio::test]
    async fn test_every_status_read_carries_fresh_cache_buster() {
        // Arrange
        let server = TestServer::start(&[
            (200, r#"{"domain":{"verified":false}}"#),
            (200, r#"{"domain":{"verified":true}}"#),
        ])
        .await;
        let provider = provider_for(&server);

        // Act
        let first = provider.domain_status("example.com").await.unwrap();
        let second = provider.domain_status("example.com").await.unwrap();

        // Assert
        assert!(!first.verified);
        assert!(second.verified);
        let requests = server.requests();
        assert_eq!(requests.len(), 2);
        for request in &requests {
            assert_eq!(request.method(), "GET");
            assert!(request.target().starts_with("/api/domains/status?"));
            assert_eq!(request.query_param("domain"), Some("example.com"));
            assert_eq!(request.header("authorization"), Some("Bearer owner-token"));
        }
        let first_t = requests[0].query_param("t").unwrap();
        let second_t = requests[1].query_param("t").unwrap();
        assert!(!first_t.is_empty());
        assert_ne!(first_t, second_t);
    }

    #[tokio::test]
    async fn test_remove_domain_sends_domain_and_template() {
        // Arrange
        let server = TestServer::start(&[(200, r#"{"ok":true}"#)]).await;
        let provider = provider_for(&server);

        // Act
        let removed = provider
            .remove_domain("shop.example.com", TemplateId::Creative)
            .await;

        // Assert
        assert_eq!(removed, Ok(()));
        let sent = &server.requests()[0];
        assert_eq!(sent.method(), "DELETE");
        assert_eq!(sent.query_param("domain"), Some("shop.example.com"));
        assert_eq!(sent.query_param("template"), Some("creative"));
    }

    #[tokio::test]
    async fn test_remove_domain_unacknowledged_is_rejected() {
        let server = TestServer::start(&[(200, "{}")]).await;
        let provider = provider_for(&server);

        let removed = provider.remove_domain("example.com", TemplateId::Realtor).await;

        assert!(matches!(removed, Err(RemoteError::Rejected(_))));
    }
}
