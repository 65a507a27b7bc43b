//! Access token types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ProviderError, ProviderResult};

/// Parsed token-exchange response.
///
/// Held transiently for the duration of one login flow; `raw` preserves
/// the untransformed body for callers that need provider-specific fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSet {
    /// The access token string.
    pub access_token: String,
    /// Token type, usually `bearer`.
    pub token_type: String,
    /// When the token expires, if the upstream said.
    pub expires_at: Option<DateTime<Utc>>,
    /// Refresh token for obtaining new access tokens.
    pub refresh_token: Option<String>,
    /// Scopes granted with this token.
    #[serde(default)]
    pub scopes: Vec<String>,
    /// When this token was obtained.
    pub obtained_at: DateTime<Utc>,
    /// Untransformed token-exchange response body.
    pub raw: Value,
}

impl TokenSet {
    /// Parses a token-endpoint response body.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Decode`] when the payload carries no
    /// `access_token`.
    pub fn from_json(raw: Value) -> ProviderResult<Self> {
        let access_token = raw
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or_else(|| ProviderError::Decode {
                message: "token response is missing access_token".to_string(),
            })?
            .to_string();
        let token_type = raw
            .get("token_type")
            .and_then(Value::as_str)
            .unwrap_or("Bearer")
            .to_string();
        let refresh_token = raw
            .get("refresh_token")
            .and_then(Value::as_str)
            .map(String::from);
        let scopes: Vec<String> = raw
            .get("scope")
            .and_then(Value::as_str)
            .map(|s| s.split_whitespace().map(String::from).collect())
            .unwrap_or_default();

        let now = Utc::now();
        let expires_at = raw
            .get("expires_in")
            .and_then(Value::as_u64)
            .map(|secs| now + chrono::Duration::seconds(secs.cast_signed()));

        Ok(Self {
            access_token,
            token_type,
            expires_at,
            refresh_token,
            scopes,
            obtained_at: now,
            raw,
        })
    }

    /// Check if the token is expired or will expire within the given
    /// buffer. Tokens without an upstream expiry never expire here.
    #[must_use]
    pub fn is_expired_or_expiring(&self, buffer_seconds: i64) -> bool {
        self.expires_at.is_some_and(|expires_at| {
            Utc::now() + chrono::Duration::seconds(buffer_seconds) >= expires_at
        })
    }

    /// Check if the token can be refreshed.
    #[must_use]
    pub const fn can_refresh(&self) -> bool {
        self.refresh_token.is_some()
    }

    /// Returns the `Authorization` header value for this token.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_full_token_response() {
        let raw = json!({
            "access_token": "T",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "R",
            "scope": "read write"
        });
        let token = TokenSet::from_json(raw.clone()).unwrap();

        assert_eq!(token.access_token, "T");
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.refresh_token.as_deref(), Some("R"));
        assert_eq!(token.scopes, vec!["read".to_string(), "write".to_string()]);
        assert!(token.expires_at.is_some());
        assert!(token.can_refresh());
        assert_eq!(token.raw, raw);
    }

    #[test]
    fn minimal_response_defaults_the_rest() {
        let token = TokenSet::from_json(json!({"access_token": "T"})).unwrap();

        assert_eq!(token.token_type, "Bearer");
        assert!(token.refresh_token.is_none());
        assert!(token.scopes.is_empty());
        assert!(token.expires_at.is_none());
        assert!(!token.is_expired_or_expiring(0));
        assert!(!token.can_refresh());
    }

    #[test]
    fn missing_access_token_is_a_decode_error() {
        let err = TokenSet::from_json(json!({"token_type": "bearer"})).unwrap_err();
        assert!(matches!(err, ProviderError::Decode { .. }));
    }

    #[test]
    fn authorization_header_format() {
        let token = TokenSet::from_json(json!({"access_token": "abc"})).unwrap();
        assert_eq!(token.authorization_header(), "Bearer abc");
    }

    #[test]
    fn fresh_token_is_not_expiring() {
        let token = TokenSet::from_json(json!({"access_token": "T", "expires_in": 3600})).unwrap();
        assert!(!token.is_expired_or_expiring(0));
        assert!(token.is_expired_or_expiring(7200));
    }
}
