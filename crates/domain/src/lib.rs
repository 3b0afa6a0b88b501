//! # Tempest Domain
//!
//! Wire-level data types and the caller-facing error taxonomy for the
//! Tempest time-series database client.
//!
//! This crate contains:
//! - Request/response shapes (`Series`, `Database`, `User`, ...)
//! - The closed `TimePrecision` and `LogLevel` enumerations
//! - The `Operation` capability set
//! - `ClientError` and the `Result` alias
//!
//! ## Architecture
//! - No I/O and no dependency on the client crate
//! - Only external dependencies allowed
//! - Pure data structures; validation beyond shape is the service's job

pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::{ClientError, ErrorKind, Result};
pub use types::*;
