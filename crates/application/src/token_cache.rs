//! Transient token cache.
//!
//! One login flow exchanges a code at most once even when both the parsed
//! token and a later resource fetch need it: the cache holds the most
//! recent exchange result keyed by the authorization code that produced
//! it. A different code reads as a miss, which is all the invalidation
//! the flow needs. Each provider instance owns its cache; it is never
//! shared across providers.

use std::collections::HashMap;
use std::sync::Arc;

use thebizark_domain::TokenSet;
use tokio::sync::RwLock;

/// Async map of flow key → most recent token-exchange result.
#[derive(Debug, Clone, Default)]
pub struct TokenCache {
    tokens: Arc<RwLock<HashMap<String, TokenSet>>>,
}

impl TokenCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a token under the given key.
    pub async fn store(&self, key: String, token: TokenSet) {
        let mut tokens = self.tokens.write().await;
        tokens.insert(key, token);
    }

    /// Get a token by key, expired or not.
    pub async fn get(&self, key: &str) -> Option<TokenSet> {
        let tokens = self.tokens.read().await;
        tokens.get(key).cloned()
    }

    /// Get a non-expired token, or None if expired or missing.
    pub async fn get_valid(&self, key: &str) -> Option<TokenSet> {
        let tokens = self.tokens.read().await;
        tokens.get(key).and_then(|t| {
            if t.is_expired_or_expiring(0) {
                None
            } else {
                Some(t.clone())
            }
        })
    }

    /// Remove a token.
    pub async fn remove(&self, key: &str) -> Option<TokenSet> {
        let mut tokens = self.tokens.write().await;
        tokens.remove(key)
    }

    /// Clear all tokens.
    pub async fn clear(&self) {
        let mut tokens = self.tokens.write().await;
        tokens.clear();
    }

    /// Number of cached tokens.
    pub async fn count(&self) -> usize {
        let tokens = self.tokens.read().await;
        tokens.len()
    }
}
