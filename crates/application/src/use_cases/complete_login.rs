//! Complete-login use case.

use thebizark_domain::{ProviderError, ProviderResult, TokenSet, UserProfile};

use crate::flow::OAuth2Flow;
use crate::token_cache::TokenCache;

/// Callback parameters delivered by the redirect, plus the state the
/// caller issued before redirecting.
///
/// The component neither generates nor stores state; a caller that tracks
/// none sets `expected_state` to `None` and runs the flow stateless.
#[derive(Debug, Clone)]
pub struct CompleteLoginInput {
    /// Authorization code from the callback query.
    pub code: String,
    /// State echoed back by the identity service, if any.
    pub returned_state: Option<String>,
    /// State the caller issued before redirecting, if it tracks one.
    pub expected_state: Option<String>,
}

impl CompleteLoginInput {
    /// Input for a stateless callback carrying only the code.
    #[must_use]
    pub fn stateless(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            returned_state: None,
            expected_state: None,
        }
    }
}

/// Output of a completed login.
#[derive(Debug, Clone)]
pub struct CompleteLoginOutput {
    /// Token obtained by the code exchange.
    pub token: TokenSet,
    /// Normalized user profile.
    pub user: UserProfile,
}

/// Use case for turning a redirect callback into a verified user
/// identity: verify state → exchange the code → fetch the user.
pub struct CompleteLogin<'a> {
    flow: &'a OAuth2Flow,
    cache: &'a TokenCache,
}

impl<'a> CompleteLogin<'a> {
    /// Creates the use case over a provider's flow and cache.
    #[must_use]
    pub const fn new(flow: &'a OAuth2Flow, cache: &'a TokenCache) -> Self {
        Self { flow, cache }
    }

    /// Runs one whole callback. A code already exchanged by this provider
    /// instance is served from the cache instead of a second token call.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::InvalidState`] when the caller issued a state
    ///   and the callback did not echo it back exactly.
    /// - Any exchange or fetch error, unchanged.
    pub async fn execute(&self, input: CompleteLoginInput) -> ProviderResult<CompleteLoginOutput> {
        verify_state(
            input.expected_state.as_deref(),
            input.returned_state.as_deref(),
        )?;

        let token = match self.cache.get_valid(&input.code).await {
            Some(token) => token,
            None => {
                let token = self.flow.exchange_code(&input.code).await?;
                self.cache.store(input.code.clone(), token.clone()).await;
                token
            }
        };

        let user = self.flow.fetch_user(&token.access_token).await?;
        Ok(CompleteLoginOutput { token, user })
    }
}

/// Compares the caller-issued state with the callback's echo.
///
/// A caller that issued no state runs stateless and skips the check.
///
/// # Errors
///
/// Returns [`ProviderError::InvalidState`] on any mismatch, including a
/// callback that dropped the state entirely.
pub fn verify_state(expected: Option<&str>, returned: Option<&str>) -> ProviderResult<()> {
    match expected {
        None => Ok(()),
        Some(expected) if returned == Some(expected) => Ok(()),
        Some(_) => Err(ProviderError::InvalidState),
    }
}
