//! Port definitions (interfaces)
//!
//! Ports define the boundary between the flow logic and the HTTP stack.
//! Adapters in the infrastructure layer implement them.

mod http;

pub use http::{HttpTransport, TransportError, TransportResponse};
