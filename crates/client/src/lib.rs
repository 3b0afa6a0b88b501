//! # Tempest Client
//!
//! Typed client for the Tempest time-series database HTTP+JSON API.
//!
//! This crate contains:
//! - The transport adapter (`http`): a reqwest-backed [`Transport`]
//!   implementation plus the trait seam test doubles plug into
//! - The API facade (`api`): one method per administrative or data
//!   operation, with uniform credential injection and error translation
//!
//! ## Architecture
//! - All operations are stateless, one request/response round trip each
//! - No facade-level retries; failures surface exactly once
//! - Credentials are per-client configuration, never process-global
//!
//! ```no_run
//! use tempest_client::{ClientConfig, TempestClient};
//! use tempest_domain::TimePrecision;
//!
//! # async fn demo() -> tempest_domain::Result<()> {
//! let client = TempestClient::new(ClientConfig::new(
//!     "http://localhost:8086",
//!     "root",
//!     "root",
//! ))?;
//! let series = client.query("metrics", "select * from cpu", TimePrecision::Milliseconds).await?;
//! # let _ = series;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod http;

// Re-export commonly used items
pub use api::{ClientConfig, TempestClient};
pub use http::{HttpTransport, Method, Request, Response, Transport, Verbosity};
