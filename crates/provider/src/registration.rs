//! Host registration hook.

use std::sync::Arc;

use thebizark_application::ProviderRegistry;
use thebizark_domain::{ProviderConfig, ProviderResult};
use thebizark_infrastructure::ThebizarkProvider;

/// Registers a default-wired Thebizark provider under its scheme name.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn extend(registry: &mut ProviderRegistry, config: ProviderConfig) -> ProviderResult<()> {
    registry.register(Arc::new(ThebizarkProvider::new(config)?));
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registers_under_the_provider_name() {
        let mut registry = ProviderRegistry::new();
        extend(
            &mut registry,
            ProviderConfig::new("id", "secret", "https://app.example/callback"),
        )
        .unwrap();

        let provider = registry.get("thebizark").unwrap();
        assert_eq!(provider.scheme(), "thebizark");
    }
}
