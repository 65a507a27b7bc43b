//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port with the request
//! shapes the identity service expects: a form-encoded token POST with
//! `Accept: application/json`, and a bearer-authenticated resource GET.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thebizark_application::{HttpTransport, TransportError, TransportResponse};

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Content-Type for form-urlencoded data.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Transport adapter over `reqwest::Client`.
///
/// Redirects are never followed; both endpoints answer directly and a
/// redirect from either is an upstream fault worth surfacing.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the default client settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be built.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("thebizark-login/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;
        Ok(Self { client })
    }

    /// Creates a transport over a caller-configured client, for hosts
    /// that need their own timeout, proxy, or TLS settings.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Maps reqwest errors to port `TransportError`s.
    fn map_error(error: &reqwest::Error) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout;
        }
        if error.is_connect() {
            return TransportError::ConnectionFailed(error.to_string());
        }
        if error.is_builder() {
            return TransportError::InvalidUrl(error.to_string());
        }
        TransportError::Other(error.to_string())
    }

    async fn read_response(response: reqwest::Response) -> Result<TransportResponse, TransportError> {
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Other(format!("failed to read body: {e}")))?
            .to_vec();
        Ok(TransportResponse { status, body })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_form(
        &self,
        url: &str,
        fields: &[(&str, String)],
    ) -> Result<TransportResponse, TransportError> {
        let body = serde_urlencoded::to_string(fields)
            .map_err(|e| TransportError::Other(format!("failed to encode form: {e}")))?;

        let response = self
            .client
            .post(url)
            .header("Accept", "application/json")
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| Self::map_error(&e))?;

        Self::read_response(response).await
    }

    async fn get_bearer(
        &self,
        url: &str,
        access_token: &str,
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| Self::map_error(&e))?;

        Self::read_response(response).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_succeeds() {
        assert!(ReqwestTransport::new().is_ok());
    }

    #[tokio::test]
    async fn unparseable_url_is_rejected() {
        let transport = ReqwestTransport::new().unwrap();
        let result = transport.post_form("not a url", &[]).await;
        assert!(result.is_err());
    }
}
