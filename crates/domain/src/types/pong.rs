//! Liveness token returned by `GET /ping`.

use serde::{Deserialize, Serialize};

/// Response body of the ping endpoint, e.g. `{"status":"ok"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pong {
    pub status: String,
}

impl Pong {
    /// Whether the service reported itself healthy.
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_status_is_healthy() {
        let pong: Pong = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(pong.is_ok());
    }

    #[test]
    fn other_status_is_not() {
        let pong = Pong { status: "degraded".into() };
        assert!(!pong.is_ok());
    }
}
