//! Error taxonomy of the builder engine.
//!
//! | Variant        | Raised when                                        | State change |
//! |----------------|----------------------------------------------------|--------------|
//! | `Precondition` | e.g. adding a domain to an unpublished site        | none         |
//! | `Validation`   | e.g. an empty domain string                        | none         |
//! | `Remote`       | any network/service failure of a gateway call      | none         |
//! | `ReadOnly`     | saving a read-only session                         | none         |
//!
//! Failures are always returned as values.  In particular a failed save never
//! rolls back in-memory edits: the document simply stays dirty.

use sitecraft_core::DomainInputError;
use thiserror::Error;

/// Failure reported by a remote adapter (configuration store or domain API).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    /// The request never produced a response (DNS, TLS, connection reset).
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success HTTP status.
    #[error("service returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The service answered `{"error": ...}`.
    #[error("{0}")]
    Rejected(String),

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Error type returned by every builder use case.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuilderError {
    #[error("precondition failed: {0}")]
    Precondition(String),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("remote request failed: {0}")]
    Remote(#[from] RemoteError),

    #[error("session is read-only")]
    ReadOnly,
}

impl From<DomainInputError> for BuilderError {
    fn from(err: DomainInputError) -> Self {
        BuilderError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_message_is_human_readable() {
        let err = BuilderError::from(RemoteError::Rejected("slug already taken".into()));
        assert_eq!(err.to_string(), "remote request failed: slug already taken");
    }

    #[test]
    fn test_domain_input_error_maps_to_validation() {
        let err = BuilderError::from(DomainInputError::Empty);
        assert_eq!(err, BuilderError::Validation("domain must not be empty".into()));
    }
}
