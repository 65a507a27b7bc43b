//! The Thebizark provider.
//!
//! Wires the provider configuration, the generic flow, the transient
//! token cache, and the reqwest transport into the concrete "login via
//! Thebizark" provider a host registers.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use thebizark_application::{
    CompleteLogin, CompleteLoginInput, CompleteLoginOutput, HttpTransport, OAuth2Flow,
    SocialProvider, TokenCache, verify_state,
};
use thebizark_domain::{
    PROVIDER_NAME, ProviderConfig, ProviderResult, TokenSet, UserProfile,
};
use tracing::debug;
use url::Url;

use crate::transport::ReqwestTransport;

/// OAuth2 social login provider for the Thebizark identity service.
///
/// One instance serves one login flow at a time per authorization code;
/// the internal token cache is keyed by code, so concurrent logins for
/// different users never observe each other's tokens.
pub struct ThebizarkProvider {
    flow: OAuth2Flow,
    cache: TokenCache,
}

impl ThebizarkProvider {
    /// Creates a provider over the default reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ProviderConfig) -> ProviderResult<Self> {
        let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new()?);
        Ok(Self::with_transport(config, transport))
    }

    /// Creates a provider over a caller-supplied transport.
    #[must_use]
    pub fn with_transport(config: ProviderConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            flow: OAuth2Flow::new(config, transport),
            cache: TokenCache::new(),
        }
    }

    /// The configuration this provider was built with.
    #[must_use]
    pub const fn config(&self) -> &ProviderConfig {
        self.flow.config()
    }

    /// Builds the consent redirect URL for the given caller state.
    ///
    /// # Errors
    ///
    /// Returns [`thebizark_domain::ProviderError::Config`] when the
    /// endpoint configuration does not form a valid URL.
    pub fn authorize_url(&self, state: &str) -> ProviderResult<Url> {
        self.flow.authorize_url(state)
    }

    /// Exchanges an authorization code and caches the result under it.
    ///
    /// # Errors
    ///
    /// Propagates exchange errors unchanged; nothing is cached on
    /// failure.
    pub async fn exchange_code(&self, code: &str) -> ProviderResult<TokenSet> {
        let token = self.flow.exchange_code(code).await?;
        self.cache.store(code.to_string(), token.clone()).await;
        Ok(token)
    }

    /// The token for a code, exchanged at most once per provider
    /// instance. A code seen before is served from the cache; a new code
    /// triggers a fresh exchange.
    ///
    /// # Errors
    ///
    /// Propagates exchange errors unchanged.
    pub async fn token_for_code(&self, code: &str) -> ProviderResult<TokenSet> {
        if let Some(token) = self.cache.get_valid(code).await {
            return Ok(token);
        }
        self.exchange_code(code).await
    }

    /// Exchanges a refresh token for a fresh access token. Not cached;
    /// refresh results are not tied to an authorization code.
    ///
    /// # Errors
    ///
    /// Propagates exchange errors unchanged.
    pub async fn exchange_refresh_token(&self, refresh_token: &str) -> ProviderResult<TokenSet> {
        self.flow.exchange_refresh_token(refresh_token).await
    }

    /// Fetches the normalized profile for an already-obtained token.
    ///
    /// # Errors
    ///
    /// Propagates fetch and mapping errors unchanged.
    pub async fn user_by_token(&self, access_token: &str) -> ProviderResult<UserProfile> {
        self.flow.fetch_user(access_token).await
    }

    /// Fetches the raw organizations payload for an already-obtained
    /// token.
    ///
    /// # Errors
    ///
    /// Propagates fetch errors unchanged.
    pub async fn organizations_by_token(&self, access_token: &str) -> ProviderResult<Value> {
        self.flow.fetch_organizations(access_token).await
    }

    /// Completes a callback into the caller's organizations: verify
    /// state, exchange the code (cached), fetch organizations.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`SocialProvider::login`].
    pub async fn organizations(&self, input: CompleteLoginInput) -> ProviderResult<Value> {
        verify_state(
            input.expected_state.as_deref(),
            input.returned_state.as_deref(),
        )?;
        let token = self.token_for_code(&input.code).await?;
        self.organizations_by_token(&token.access_token).await
    }
}

#[async_trait]
impl SocialProvider for ThebizarkProvider {
    fn scheme(&self) -> &str {
        PROVIDER_NAME
    }

    fn authorize_redirect(&self, state: &str) -> ProviderResult<Url> {
        self.authorize_url(state)
    }

    async fn login(&self, input: CompleteLoginInput) -> ProviderResult<CompleteLoginOutput> {
        let outcome = CompleteLogin::new(&self.flow, &self.cache)
            .execute(input)
            .await?;
        debug!(user = %outcome.user.id, "thebizark login completed");
        Ok(outcome)
    }
}
