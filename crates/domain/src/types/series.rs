//! Columnar series batches, the unit of exchange for writes and queries.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named, columnar batch of time-series rows.
///
/// Produced by callers for writes and by the service for query results.
/// Point cells are opaque JSON values; the client performs no column/value
/// arity validation (the service enforces it).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Series {
    pub name: String,
    /// Column names, ordered. The service treats `time` and
    /// `sequence_number` specially; the client does not.
    pub columns: Vec<String>,
    /// Rows of values, one inner vector per point, positionally matching
    /// `columns`.
    pub points: Vec<Vec<Value>>,
}

impl Series {
    /// Create an empty batch for the given series name and column set.
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self { name: name.into(), columns, points: Vec::new() }
    }

    /// Append one row of values.
    pub fn push_point(&mut self, point: Vec<Value>) {
        self.points.push(point);
    }
}
