//! HTTP transport port

use async_trait::async_trait;
use thebizark_domain::ProviderError;
use thiserror::Error;

/// Raw upstream response handed back by the transport.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Body as UTF-8, lossily.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Transport-level failures: the request never produced an upstream
/// response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The URL handed to the transport was rejected.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request timed out.
    #[error("request timed out")]
    Timeout,

    /// Connecting to the upstream failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

impl From<TransportError> for ProviderError {
    fn from(error: TransportError) -> Self {
        Self::Network {
            message: error.to_string(),
        }
    }
}

/// Port for the two request shapes the login flow issues.
///
/// Implementations perform exactly one call per invocation; no retries,
/// no redirect following. Timeouts are whatever the implementation
/// enforces.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POSTs a form-encoded body with `Accept: application/json`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no upstream response was
    /// produced; non-2xx responses are returned as values, not errors.
    async fn post_form(
        &self,
        url: &str,
        fields: &[(&str, String)],
    ) -> Result<TransportResponse, TransportError>;

    /// GETs a resource with a bearer `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no upstream response was
    /// produced; non-2xx responses are returned as values, not errors.
    async fn get_bearer(
        &self,
        url: &str,
        access_token: &str,
    ) -> Result<TransportResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn success_statuses() {
        let ok = TransportResponse {
            status: 204,
            body: Vec::new(),
        };
        assert!(ok.is_success());

        let unauthorized = TransportResponse {
            status: 401,
            body: b"denied".to_vec(),
        };
        assert!(!unauthorized.is_success());
        assert_eq!(unauthorized.body_text(), "denied");
    }

    #[test]
    fn transport_errors_surface_as_network_errors() {
        let err: ProviderError = TransportError::Timeout.into();
        assert!(matches!(err, ProviderError::Network { .. }));
    }
}
