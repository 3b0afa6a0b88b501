//! Typed facade over the Tempest administrative and data-plane API.

pub mod client;
pub mod translate;

pub use client::{ClientConfig, TempestClient};
