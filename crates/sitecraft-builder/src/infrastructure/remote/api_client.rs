//! Shared HTTP plumbing for the site backend.
//!
//! Both remote adapters talk to the same backend with the same conventions:
//!
//! - JSON bodies in both directions.
//! - An optional `Authorization: Bearer <token>` header scoping every call to
//!   the owner.
//! - Failures reported either as a non-2xx status or as a 2xx `{"error": ...}`
//!   body.
//! - Mutations acknowledged with `{"ok": true}` or a bodiless `204 No Content`.
//!   Anything else is not an acknowledgement.
//!
//! No per-request timeout or retry is configured; the transport default
//! applies and a failed call is simply reported.

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use sitecraft_core::protocol::messages::NOT_ACKNOWLEDGED;
use sitecraft_core::AckResponse;
use tracing::debug;

use crate::application::errors::RemoteError;

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Thin wrapper around a [`reqwest::Client`] bound to one backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, access_token: Option<String>) -> Self {
        Self::with_client(Client::new(), base_url, access_token)
    }

    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        access_token: Option<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            access_token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of `path` (which starts with `/`).
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Starts a request against `path` with the owner's credentials attached.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.client.request(method, self.endpoint(path));
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Sends `request` and returns the status with the raw body.
    ///
    /// Only transport failures are errors here; status handling is up to the
    /// caller.
    pub async fn fetch(
        &self,
        request: RequestBuilder,
    ) -> Result<(StatusCode, String), RemoteError> {
        let response = request
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        debug!(%status, bytes = body.len(), "backend responded");
        Ok((status, body))
    }

    /// Sends `request` and decodes a successful JSON body into `T`.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, RemoteError> {
        let (status, body) = self.fetch(request).await?;
        if !status.is_success() {
            return Err(error_from_response(status, &body));
        }
        decode_json(&body)
    }

    /// Sends `request` and interprets the `{ok}` / `{error}` reply.
    pub async fn send_ack(&self, request: RequestBuilder) -> Result<(), RemoteError> {
        let (status, body) = self.fetch(request).await?;
        if !status.is_success() {
            return Err(error_from_response(status, &body));
        }
        if status == StatusCode::NO_CONTENT {
            return Ok(());
        }
        decode_ack(&body)
    }
}

/// Decodes a JSON body, mapping failures to [`RemoteError::Decode`].
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, RemoteError> {
    serde_json::from_str(body).map_err(|e| RemoteError::Decode(e.to_string()))
}

/// Interprets the body of a 2xx acknowledgement.
///
/// Only `{"ok": true}` succeeds.  An `error` message, `{"ok": false}`, `{}`,
/// and an empty body all become [`RemoteError::Rejected`].
pub fn decode_ack(body: &str) -> Result<(), RemoteError> {
    if body.trim().is_empty() {
        return Err(RemoteError::Rejected(NOT_ACKNOWLEDGED.to_string()));
    }
    decode_json::<AckResponse>(body)?
        .into_result()
        .map_err(RemoteError::Rejected)
}

/// Builds the error for a non-2xx response, preferring the body's `error`.
pub fn error_from_response(status: StatusCode, body: &str) -> RemoteError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error }) => RemoteError::Rejected(error),
        Err(_) => RemoteError::Status {
            status: status.as_u16(),
            message: if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("request failed").to_string()
            } else {
                body.trim().to_string()
            },
        },
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
