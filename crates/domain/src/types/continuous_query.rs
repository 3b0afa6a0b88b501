//! Continuous-query and scheduled-delete descriptors.

use serde::{Deserialize, Serialize};

/// A server-side continuous query, as listed via
/// `GET /db/{db}/continuous_queries`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContinuousQuery {
    pub id: i64,
    /// The query text, opaque to the client.
    pub query: String,
}

/// A scheduled delete descriptor.
///
/// The scheduled-delete operations are declared by the API surface but are
/// not supported by this client (see `Operation::is_supported`); the shape
/// exists so the facade signatures are complete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduledDelete {
    pub id: i64,
    pub query: String,
}
