//! Thebizark Application - Flow orchestration and ports
//!
//! This crate defines the application layer with:
//! - The generic OAuth2 authorization-code flow helper
//! - Port traits (interfaces for the HTTP stack)
//! - The transient token cache and the complete-login use case
//! - The host-facing provider trait and registry

pub mod flow;
pub mod ports;
pub mod registry;
pub mod token_cache;
pub mod use_cases;

pub use flow::OAuth2Flow;
pub use ports::{HttpTransport, TransportError, TransportResponse};
pub use registry::{ProviderRegistry, SocialProvider};
pub use token_cache::TokenCache;
pub use use_cases::{CompleteLogin, CompleteLoginInput, CompleteLoginOutput, verify_state};
