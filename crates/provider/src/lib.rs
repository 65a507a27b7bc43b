//! Thebizark social login provider.
//!
//! Authenticates end users against the Thebizark identity service via the
//! OAuth2 authorization-code flow and maps the user resource into a
//! normalized profile.
//!
//! ```no_run
//! use thebizark::{ProviderConfig, ProviderRegistry, extend};
//!
//! # fn main() -> Result<(), thebizark::ProviderError> {
//! let mut registry = ProviderRegistry::new();
//! extend(
//!     &mut registry,
//!     ProviderConfig::new("client-id", "client-secret", "https://app.example/callback"),
//! )?;
//! assert!(registry.get("thebizark").is_some());
//! # Ok(())
//! # }
//! ```

mod registration;

pub use registration::extend;
pub use thebizark_application::{
    CompleteLogin, CompleteLoginInput, CompleteLoginOutput, HttpTransport, OAuth2Flow,
    ProviderRegistry, SocialProvider, TokenCache, TransportError, TransportResponse,
};
pub use thebizark_domain::{
    ConfigOverrides, ORGANIZATIONS_PATH, PROVIDER_NAME, ProviderConfig, ProviderError,
    ProviderResult, TokenSet, UserProfile,
};
pub use thebizark_infrastructure::{ReqwestTransport, ThebizarkProvider};
