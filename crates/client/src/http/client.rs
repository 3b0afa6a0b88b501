//! Reqwest-backed [`Transport`] implementation.
//!
//! Holds the service base address and an optional retry policy. Retries,
//! when configured, apply only to 5xx responses and connect-level faults;
//! the facade above never retries anything, so a single attempt (the
//! default) reports every failure exactly once.

use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use tempest_domain::{ClientError, Result};
use tracing::debug;
use url::Url;

use super::transport::{Method, Request, Response, Transport, Verbosity};

/// HTTP transport with configurable timeout and retry support.
#[derive(Debug)]
pub struct HttpTransport {
    client: ReqwestClient,
    base_url: Url,
    max_attempts: usize,
    base_backoff: Duration,
    verbosity: AtomicU8,
}

impl HttpTransport {
    /// Start building a transport for the given base address.
    pub fn builder(base_url: impl Into<String>) -> HttpTransportBuilder {
        HttpTransportBuilder::new(base_url)
    }

    /// The service base address this transport targets.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn current_verbosity(&self) -> Verbosity {
        match self.verbosity.load(Ordering::Relaxed) {
            0 => Verbosity::Silent,
            1 => Verbosity::RequestLine,
            2 => Verbosity::WithHeaders,
            _ => Verbosity::WithBodies,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidArgument(format!("invalid request path {path:?}: {e}")))
    }

    fn backoff_delay(&self, retry_number: usize) -> Duration {
        let shift = retry_number.saturating_sub(1).min(8) as u32;
        self.base_backoff.saturating_mul(1 << shift)
    }

    async fn sleep_with_backoff(&self, retry_number: usize) {
        let delay = self.backoff_delay(retry_number);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn build_request(&self, request: &Request) -> Result<reqwest::Request> {
        let url = self.endpoint(&request.path)?;
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, url).query(&request.query);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        builder.build().map_err(|e| ClientError::Transport(format!("request build failed: {e}")))
    }

    async fn read_response(&self, response: reqwest::Response) -> Result<Response> {
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (name.to_string(), String::from_utf8_lossy(value.as_bytes()).into_owned())
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(format!("failed to read response body: {e}")))?;
        Ok(Response { status, headers, body })
    }

    fn log_exchange(&self, request: &Request, response: &Response) {
        let verbosity = self.current_verbosity();
        if verbosity >= Verbosity::RequestLine {
            debug!(
                method = request.method.as_str(),
                path = %request.path,
                status = response.status,
                "http exchange"
            );
        }
        if verbosity >= Verbosity::WithHeaders {
            debug!(headers = ?response.headers, "response headers");
        }
        if verbosity >= Verbosity::WithBodies {
            debug!(request_body = ?request.body, response_body = %response.body, "bodies");
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: Request) -> Result<Response> {
        let attempts = self.max_attempts.max(1);

        for attempt in 0..attempts {
            let wire_request = self.build_request(&request)?;

            match self.client.execute(wire_request).await {
                Ok(raw) => {
                    let response = self.read_response(raw).await?;
                    self.log_exchange(&request, &response);

                    if response.status >= 500 && attempt + 1 < attempts {
                        self.sleep_with_backoff(attempt + 1).await;
                        continue;
                    }
                    return Ok(response);
                }
                Err(err) => {
                    if attempt + 1 < attempts && should_retry_error(&err) {
                        debug!(
                            attempt = attempt + 1,
                            path = %request.path,
                            error = %err,
                            "transport fault, retrying"
                        );
                        self.sleep_with_backoff(attempt + 1).await;
                        continue;
                    }
                    return Err(translate_fault(&err));
                }
            }
        }

        Err(ClientError::Transport("transport exhausted attempts without a result".into()))
    }

    fn set_verbosity(&self, verbosity: Verbosity) {
        self.verbosity.store(verbosity as u8, Ordering::Relaxed);
    }
}

fn should_retry_error(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect() || err.is_request()
}

fn translate_fault(err: &reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Transport(format!("request timed out: {err}"))
    } else if err.is_connect() {
        ClientError::Transport(format!("connection failed: {err}"))
    } else {
        ClientError::Transport(err.to_string())
    }
}

/// Builder for [`HttpTransport`].
#[derive(Debug)]
pub struct HttpTransportBuilder {
    base_url: String,
    timeout: Duration,
    max_attempts: usize,
    base_backoff: Duration,
    user_agent: Option<String>,
}

impl HttpTransportBuilder {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            max_attempts: 1,
            base_backoff: Duration::from_millis(200),
            user_agent: None,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Total number of attempts (initial try + retries). Default is 1:
    /// every failure is reported exactly once.
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn base_backoff(mut self, backoff: Duration) -> Self {
        self.base_backoff = backoff;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<HttpTransport> {
        // A trailing slash keeps Url::join from eating the last path
        // segment of the base address.
        let normalized =
            if self.base_url.ends_with('/') { self.base_url } else { format!("{}/", self.base_url) };
        let base_url = Url::parse(&normalized)
            .map_err(|e| ClientError::Config(format!("invalid base address: {e}")))?;

        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();
        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build http client: {e}")))?;

        Ok(HttpTransport {
            client,
            base_url,
            max_attempts: self.max_attempts,
            base_backoff: self.base_backoff,
            verbosity: AtomicU8::new(Verbosity::Silent as u8),
        })
    }
}

#[cfg(test)]
mod tests {
    use tempest_domain::LogLevel;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn transport_for(server: &MockServer) -> HttpTransport {
        HttpTransport::builder(server.uri())
            .base_backoff(Duration::from_millis(10))
            .build()
            .expect("http transport")
    }

    #[tokio::test]
    async fn executes_get_with_query_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .and(query_param("u", "root"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"ok"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport_for(&server);
        let response = transport
            .execute(Request::new(Method::Get, "/ping").query("u", "root"))
            .await
            .expect("response");

        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn non_success_statuses_are_returned_not_raised() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
            .mount(&server)
            .await;

        let transport = transport_for(&server);
        let response =
            transport.execute(Request::new(Method::Get, "/db")).await.expect("response");
        assert_eq!(response.status, 404);
        assert_eq!(response.body, "not here");
    }

    #[tokio::test]
    async fn retries_server_errors_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let transport = HttpTransport::builder(server.uri())
            .base_backoff(Duration::from_millis(5))
            .max_attempts(3)
            .build()
            .expect("http transport");

        let response =
            transport.execute(Request::new(Method::Get, "/db")).await.expect("response");
        assert_eq!(response.status, 200);
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 3);
    }

    #[tokio::test]
    async fn single_attempt_surfaces_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener); // release the port so requests fail with ECONNREFUSED

        let transport =
            HttpTransport::builder(format!("http://{addr}")).build().expect("http transport");
        let err = transport.execute(Request::new(Method::Get, "/ping")).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn verbosity_can_be_raised_at_runtime() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let transport = transport_for(&server);
        assert_eq!(transport.current_verbosity(), Verbosity::Silent);
        transport.set_verbosity(Verbosity::from(LogLevel::Full));
        assert_eq!(transport.current_verbosity(), Verbosity::WithBodies);

        // Logging is diagnostic only; the exchange still succeeds.
        let response =
            transport.execute(Request::new(Method::Get, "/ping")).await.expect("response");
        assert_eq!(response.status, 200);
    }

    #[test]
    fn base_url_join_preserves_path_prefixes() {
        let transport =
            HttpTransport::builder("http://localhost:8086").build().expect("http transport");
        let url = transport.endpoint("/db/metrics/series").expect("endpoint");
        assert_eq!(url.as_str(), "http://localhost:8086/db/metrics/series");
    }

    #[test]
    fn rejects_unparseable_base_address() {
        let err = HttpTransport::builder("not a url").build().unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
