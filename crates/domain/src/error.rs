//! Provider error types

use thiserror::Error;

/// Errors surfaced by the login flow.
///
/// Every failure propagates directly to the caller; the provider performs
/// no retries and no local recovery. Each operation either fully succeeds
/// or fails with one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The callback state did not match the value the caller issued, or
    /// the flow ran without a prior redirect.
    #[error("invalid state parameter on login callback")]
    InvalidState,

    /// The identity service answered with a non-2xx status.
    #[error("upstream returned HTTP {status}: {body}")]
    Http {
        /// Status code of the upstream response.
        status: u16,
        /// Upstream response body, verbatim.
        body: String,
    },

    /// The request never produced an upstream response.
    #[error("network error: {message}")]
    Network {
        /// Transport-level description.
        message: String,
    },

    /// The response body was not the JSON shape this provider requires.
    #[error("decode error: {message}")]
    Decode {
        /// What was missing or malformed.
        message: String,
    },

    /// The configured endpoint and path do not form a valid URL.
    #[error("invalid provider configuration: {message}")]
    Config {
        /// Offending configuration detail.
        message: String,
    },
}

/// Result type alias for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
