//! HTTP transport adapter for the Tempest API.
//!
//! [`Transport`] is the seam between the facade and the wire: the facade
//! describes each exchange as plain data ([`Request`]/[`Response`]) and the
//! transport executes it. Production code uses the reqwest-backed
//! [`HttpTransport`]; tests substitute doubles.

pub mod client;
pub mod transport;

pub use client::{HttpTransport, HttpTransportBuilder};
pub use transport::{Method, Request, Response, Transport, Verbosity};
