//! The transport seam: plain-data request/response types and the
//! [`Transport`] trait.
//!
//! Requests and responses are described as owned data so test doubles need
//! no HTTP machinery, and so the facade stays free of reqwest types. Any
//! HTTP status is a *successful* transport outcome; translating non-2xx
//! responses into errors is the facade's job.

use async_trait::async_trait;
use serde_json::Value;
use tempest_domain::{LogLevel, Result};

/// HTTP method for a request. Only the methods the Tempest API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// One outgoing exchange, described as data.
///
/// `path` is relative to the transport's base address and already
/// percent-encoded; `query` parameters are encoded by the transport.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None }
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// The raw outcome of an executed [`Request`].
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The transport's own verbosity levels.
///
/// [`LogLevel`] maps onto these 1:1; the mapping is total over both closed
/// enumerations, so an unmapped level cannot exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    #[default]
    Silent,
    RequestLine,
    WithHeaders,
    WithBodies,
}

impl From<LogLevel> for Verbosity {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::None => Self::Silent,
            LogLevel::Basic => Self::RequestLine,
            LogLevel::Headers => Self::WithHeaders,
            LogLevel::Full => Self::WithBodies,
        }
    }
}

/// Executes requests against the remote service.
///
/// Implementations report transport faults (connection refused, timeout,
/// unreadable response) as `ClientError::Transport`; a response with any
/// status code is `Ok`. Retry policy, if any, lives behind this trait and
/// is invisible to the facade.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request and return the raw response.
    async fn execute(&self, request: Request) -> Result<Response>;

    /// Adjust diagnostic verbosity. No effect on request semantics; the
    /// default implementation ignores it, which is fine for doubles.
    fn set_verbosity(&self, verbosity: Verbosity) {
        let _ = verbosity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_mapping_is_total_and_ordered() {
        assert_eq!(Verbosity::from(LogLevel::None), Verbosity::Silent);
        assert_eq!(Verbosity::from(LogLevel::Basic), Verbosity::RequestLine);
        assert_eq!(Verbosity::from(LogLevel::Headers), Verbosity::WithHeaders);
        assert_eq!(Verbosity::from(LogLevel::Full), Verbosity::WithBodies);
        assert!(Verbosity::Silent < Verbosity::RequestLine);
        assert!(Verbosity::WithHeaders < Verbosity::WithBodies);
    }

    #[test]
    fn request_builder_accumulates_query_pairs() {
        let request = Request::new(Method::Get, "/db/metrics/series")
            .query("q", "select * from cpu")
            .query("time_precision", "s");
        assert_eq!(request.method.as_str(), "GET");
        assert_eq!(
            request.query,
            vec![
                ("q".to_string(), "select * from cpu".to_string()),
                ("time_precision".to_string(), "s".to_string()),
            ]
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn success_covers_the_2xx_range() {
        let mut response = Response { status: 200, headers: Vec::new(), body: String::new() };
        assert!(response.is_success());
        response.status = 204;
        assert!(response.is_success());
        response.status = 301;
        assert!(!response.is_success());
        response.status = 400;
        assert!(!response.is_success());
    }
}
