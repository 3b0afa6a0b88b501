//! Database descriptors for the lifecycle endpoints.

use serde::{Deserialize, Serialize};

/// A database as created via `POST /db` or listed via `GET /db`.
///
/// `replication_factor` is optional because list responses may omit it;
/// range validation of the value is delegated to the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Database {
    pub name: String,
    #[serde(rename = "replicationFactor", skip_serializing_if = "Option::is_none")]
    pub replication_factor: Option<u32>,
}

impl Database {
    pub fn new(name: impl Into<String>, replication_factor: u32) -> Self {
        Self { name: name.into(), replication_factor: Some(replication_factor) }
    }
}
