//! Thebizark Domain - Core provider types
//!
//! This crate defines the domain model for the Thebizark social login
//! provider. All types here are pure Rust with no I/O dependencies.

pub mod config;
pub mod error;
pub mod token;
pub mod user;

pub use config::{ConfigOverrides, ORGANIZATIONS_PATH, PROVIDER_NAME, ProviderConfig};
pub use error::{ProviderError, ProviderResult};
pub use token::TokenSet;
pub use user::UserProfile;
