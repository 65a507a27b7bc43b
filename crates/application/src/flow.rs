//! Generic OAuth2 authorization-code flow.
//!
//! The concrete provider owns one [`OAuth2Flow`] and delegates the wire
//! work to it. The flow itself knows nothing about Thebizark beyond the
//! configuration it is handed; it talks to the identity service through
//! the [`HttpTransport`] port.

use std::sync::Arc;

use serde_json::Value;
use thebizark_domain::{ProviderConfig, ProviderError, ProviderResult, TokenSet, UserProfile};
use tracing::{debug, instrument};
use url::Url;

use crate::ports::HttpTransport;

/// Drives the three-step authorization-code flow against a configurable
/// identity endpoint.
pub struct OAuth2Flow {
    config: ProviderConfig,
    transport: Arc<dyn HttpTransport>,
}

impl OAuth2Flow {
    /// Creates a flow over the given configuration and transport.
    #[must_use]
    pub fn new(config: ProviderConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// The configuration this flow was built with.
    #[must_use]
    pub const fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Builds the URL the user is redirected to for consent.
    ///
    /// Pure construction, no network call. `state` is the caller-generated
    /// CSRF token; the flow round-trips it without interpreting it.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Config`] when the configured endpoint and
    /// authorize path do not form a valid URL.
    pub fn authorize_url(&self, state: &str) -> ProviderResult<Url> {
        let base = self.config.authorize_url_base();
        let mut url = Url::parse(&base).map_err(|e| ProviderError::Config {
            message: format!("{e}: {base}"),
        })?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("client_id", &self.config.client_id);
            query.append_pair("redirect_uri", &self.config.redirect_url);
            query.append_pair("response_type", "code");
            query.append_pair("state", state);
            if !self.config.scopes.is_empty() {
                query.append_pair(
                    "scope",
                    &self.config.scopes.join(&self.config.scope_separator),
                );
            }
        }
        Ok(url)
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// # Errors
    ///
    /// [`ProviderError::Http`] on non-2xx, [`ProviderError::Network`] on
    /// transport failure, [`ProviderError::Decode`] on a malformed body.
    #[instrument(skip_all, level = "debug")]
    pub async fn exchange_code(&self, code: &str) -> ProviderResult<TokenSet> {
        let fields = [
            ("client_id", self.config.client_id.clone()),
            ("client_secret", self.config.client_secret.clone()),
            ("redirect_uri", self.config.redirect_url.clone()),
            ("code", code.to_string()),
            ("grant_type", "authorization_code".to_string()),
        ];
        self.request_token(&fields).await
    }

    /// Exchanges a refresh token for a fresh access token.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::exchange_code`].
    #[instrument(skip_all, level = "debug")]
    pub async fn exchange_refresh_token(&self, refresh_token: &str) -> ProviderResult<TokenSet> {
        let fields = [
            ("client_id", self.config.client_id.clone()),
            ("client_secret", self.config.client_secret.clone()),
            ("grant_type", "refresh_token".to_string()),
            ("refresh_token", refresh_token.to_string()),
            ("redirect_uri", self.config.redirect_url.clone()),
        ];
        self.request_token(&fields).await
    }

    /// Fetches the user resource and maps it into the normalized profile.
    ///
    /// # Errors
    ///
    /// [`ProviderError::Decode`] when the payload has no `id`; otherwise
    /// the same taxonomy as [`Self::exchange_code`].
    #[instrument(skip_all, level = "debug")]
    pub async fn fetch_user(&self, access_token: &str) -> ProviderResult<UserProfile> {
        let raw = self
            .get_json(&self.config.resource_url(), access_token)
            .await?;
        UserProfile::from_resource(raw)
    }

    /// Fetches the caller's organizations, returned as raw JSON.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::exchange_code`].
    #[instrument(skip_all, level = "debug")]
    pub async fn fetch_organizations(&self, access_token: &str) -> ProviderResult<Value> {
        self.get_json(&self.config.organizations_url(), access_token)
            .await
    }

    async fn request_token(&self, fields: &[(&str, String)]) -> ProviderResult<TokenSet> {
        let url = self.config.token_url();
        let response = self.transport.post_form(&url, fields).await?;
        if !response.is_success() {
            return Err(ProviderError::Http {
                status: response.status,
                body: response.body_text(),
            });
        }
        let raw: Value =
            serde_json::from_slice(&response.body).map_err(|e| ProviderError::Decode {
                message: format!("token response is not valid JSON: {e}"),
            })?;
        let token = TokenSet::from_json(raw)?;
        debug!(
            token_type = %token.token_type,
            has_refresh = token.can_refresh(),
            "token exchange completed"
        );
        Ok(token)
    }

    async fn get_json(&self, url: &str, access_token: &str) -> ProviderResult<Value> {
        let response = self.transport.get_bearer(url, access_token).await?;
        if !response.is_success() {
            return Err(ProviderError::Http {
                status: response.status,
                body: response.body_text(),
            });
        }
        serde_json::from_slice(&response.body).map_err(|e| ProviderError::Decode {
            message: format!("resource response is not valid JSON: {e}"),
        })
    }
}
