//! Host-facing provider surface.
//!
//! A host exposing several "login via X" buttons keeps one
//! [`ProviderRegistry`] and resolves the scheme from the callback route.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thebizark_domain::ProviderResult;
use url::Url;

use crate::use_cases::{CompleteLoginInput, CompleteLoginOutput};

/// Implemented by each social login provider a host registers.
#[async_trait]
pub trait SocialProvider: Send + Sync {
    /// Name the provider is looked up under, e.g. `"thebizark"`.
    fn scheme(&self) -> &str;

    /// Redirect URL to the upstream authorize endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error when the provider's endpoint configuration does
    /// not form a valid URL.
    fn authorize_redirect(&self, state: &str) -> ProviderResult<Url>;

    /// Turns a callback into a verified identity: code → token → profile.
    ///
    /// # Errors
    ///
    /// Propagates state verification, exchange, and fetch errors
    /// unchanged.
    async fn login(&self, input: CompleteLoginInput) -> ProviderResult<CompleteLoginOutput>;
}

/// Name → provider map a host registers login providers into.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn SocialProvider>>,
}

impl ProviderRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider under its scheme, replacing any previous
    /// entry with the same name.
    pub fn register(&mut self, provider: Arc<dyn SocialProvider>) {
        self.providers
            .insert(provider.scheme().to_string(), provider);
    }

    /// Looks a provider up by scheme.
    #[must_use]
    pub fn get(&self, scheme: &str) -> Option<Arc<dyn SocialProvider>> {
        self.providers.get(scheme).cloned()
    }

    /// Registered scheme names, unordered.
    #[must_use]
    pub fn schemes(&self) -> Vec<&str> {
        self.providers.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use thebizark_domain::ProviderError;

    use super::*;

    struct StubProvider {
        scheme: &'static str,
    }

    #[async_trait]
    impl SocialProvider for StubProvider {
        fn scheme(&self) -> &str {
            self.scheme
        }

        fn authorize_redirect(&self, state: &str) -> ProviderResult<Url> {
            Url::parse(&format!("https://stub.example/authorize?state={state}")).map_err(|e| {
                ProviderError::Config {
                    message: e.to_string(),
                }
            })
        }

        async fn login(&self, _input: CompleteLoginInput) -> ProviderResult<CompleteLoginOutput> {
            Err(ProviderError::InvalidState)
        }
    }

    #[test]
    fn registers_and_resolves_by_scheme() {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(StubProvider { scheme: "stub" }));

        let provider = registry.get("stub").unwrap();
        assert_eq!(provider.scheme(), "stub");
        assert!(registry.get("other").is_none());
        assert_eq!(registry.schemes(), vec!["stub"]);
    }

    #[test]
    fn later_registration_wins() {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(StubProvider { scheme: "stub" }));
        registry.register(Arc::new(StubProvider { scheme: "stub" }));
        assert_eq!(registry.schemes().len(), 1);
    }
}
