//! Thebizark Infrastructure - Adapters and the concrete provider
//!
//! This crate provides the reqwest-backed implementation of the transport
//! port and the wired Thebizark provider a host registers.

pub mod provider;
pub mod transport;

pub use provider::ThebizarkProvider;
pub use transport::ReqwestTransport;
