//! The Tempest API facade: one method per administrative or data
//! operation.
//!
//! Every method is a thin orchestration: build a plain-data request,
//! inject the configured credentials, hand it to the transport, translate
//! the outcome. No method holds state between calls and none retries;
//! concurrent use from multiple tasks needs no locking.

use std::sync::Arc;
use std::time::Duration;

use tempest_domain::{
    ClientError, ContinuousQuery, Database, LogLevel, Operation, Pong, Result, ScheduledDelete,
    Series, TimePrecision, User,
};
use tracing::{debug, instrument};

use super::translate;
use crate::http::{HttpTransport, Method, Request, Response, Transport};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for a Tempest client.
///
/// Immutable once the client is constructed; the credential pair is held
/// per instance, so several independently configured clients can coexist
/// in one process.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base address of the service (e.g. "http://localhost:8086").
    pub base_url: String,
    pub username: String,
    pub password: String,
    /// Transport timeout per request.
    pub timeout: Duration,
    /// Initial diagnostic verbosity.
    pub log_level: LogLevel,
}

impl ClientConfig {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_level: LogLevel::default(),
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

/// Typed client for the Tempest time-series database.
///
/// Construction performs no network I/O; the first failure, if any,
/// surfaces on the first operation.
pub struct TempestClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl TempestClient {
    /// Create a client backed by the reqwest transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::builder(&config.base_url)
            .timeout(config.timeout)
            .user_agent(concat!("tempest-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client with an injected transport (test doubles, custom
    /// retry policies).
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        transport.set_verbosity(config.log_level.into());
        Self { config, transport }
    }

    /// Adjust the transport's diagnostic verbosity. No effect on request
    /// semantics.
    pub fn set_log_level(&self, level: LogLevel) {
        debug!(%level, "log level changed");
        self.transport.set_verbosity(level.into());
    }

    /// Whether this client implements the given operation. Unsupported
    /// operations fail with [`ClientError::Unsupported`] before any
    /// transport call.
    pub fn supports(&self, operation: Operation) -> bool {
        operation.is_supported()
    }

    // ------------------------------------------------------------------
    // Data plane
    // ------------------------------------------------------------------

    /// Liveness check. Carries no credentials; fails only on transport
    /// problems or a non-success status.
    #[instrument(skip(self))]
    pub async fn ping(&self) -> Result<Pong> {
        let response = self.send(Request::new(Method::Get, "/ping")).await?;
        translate::decode(&response)
    }

    /// Write a batch of series. Side effect only; the service validates
    /// column/value arity.
    #[instrument(skip(self, series), fields(database = %database, batches = series.len()))]
    pub async fn write_series(
        &self,
        database: &str,
        series: &[Series],
        precision: TimePrecision,
    ) -> Result<()> {
        let body = serde_json::to_value(series)
            .map_err(|e| ClientError::InvalidArgument(format!("unserializable series: {e}")))?;
        let request = self
            .authed(Request::new(Method::Post, format!("/db/{}/series", segment(database))))
            .query("time_precision", precision.wire_code())
            .body(body);
        self.send(request).await?;
        Ok(())
    }

    /// Run a query. `query` is an opaque passthrough string; no local
    /// parsing or validation.
    #[instrument(skip(self), fields(database = %database))]
    pub async fn query(
        &self,
        database: &str,
        query: &str,
        precision: TimePrecision,
    ) -> Result<Vec<Series>> {
        let request = self
            .authed(Request::new(Method::Get, format!("/db/{}/series", segment(database))))
            .query("q", query)
            .query("time_precision", precision.wire_code());
        let response = self.send(request).await?;
        translate::decode(&response)
    }

    // ------------------------------------------------------------------
    // Database lifecycle
    // ------------------------------------------------------------------

    /// Create a database. Replication-factor range checks are the
    /// service's job.
    #[instrument(skip(self))]
    pub async fn create_database(&self, name: &str, replication_factor: u32) -> Result<()> {
        let body = Database::new(name, replication_factor);
        let request = self
            .authed(Request::new(Method::Post, "/db"))
            .body(serde_json::to_value(&body).map_err(invalid_body)?);
        self.send(request).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_database(&self, name: &str) -> Result<()> {
        let request =
            self.authed(Request::new(Method::Delete, format!("/db/{}", segment(name))));
        self.send(request).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list_databases(&self) -> Result<Vec<Database>> {
        let response = self.authed_get("/db").await?;
        translate::decode(&response)
    }

    // ------------------------------------------------------------------
    // Cluster-admin lifecycle
    // ------------------------------------------------------------------

    #[instrument(skip(self, password))]
    pub async fn create_cluster_admin(&self, name: &str, password: &str) -> Result<()> {
        let body = User::credentials(name, password);
        let request = self
            .authed(Request::new(Method::Post, "/cluster_admins"))
            .body(serde_json::to_value(&body).map_err(invalid_body)?);
        self.send(request).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_cluster_admin(&self, name: &str) -> Result<()> {
        let request = self
            .authed(Request::new(Method::Delete, format!("/cluster_admins/{}", segment(name))));
        self.send(request).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list_cluster_admins(&self) -> Result<Vec<User>> {
        let response = self.authed_get("/cluster_admins").await?;
        translate::decode(&response)
    }

    /// Overwrite the named admin's password. Other fields are sent unset.
    #[instrument(skip(self, password))]
    pub async fn update_cluster_admin(&self, name: &str, password: &str) -> Result<()> {
        let body = User::password_only(password);
        let request = self
            .authed(Request::new(Method::Post, format!("/cluster_admins/{}", segment(name))))
            .body(serde_json::to_value(&body).map_err(invalid_body)?);
        self.send(request).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Per-database user lifecycle
    // ------------------------------------------------------------------

    #[instrument(skip(self, password, permissions), fields(database = %database))]
    pub async fn create_database_user(
        &self,
        database: &str,
        name: &str,
        password: &str,
        permissions: Vec<String>,
    ) -> Result<()> {
        let body = User {
            name: Some(name.to_string()),
            password: Some(password.to_string()),
            is_admin: None,
            permissions: Some(permissions),
        };
        let request = self
            .authed(Request::new(Method::Post, format!("/db/{}/users", segment(database))))
            .body(serde_json::to_value(&body).map_err(invalid_body)?);
        self.send(request).await?;
        Ok(())
    }

    #[instrument(skip(self), fields(database = %database))]
    pub async fn delete_database_user(&self, database: &str, name: &str) -> Result<()> {
        let request = self.authed(Request::new(
            Method::Delete,
            format!("/db/{}/users/{}", segment(database), segment(name)),
        ));
        self.send(request).await?;
        Ok(())
    }

    #[instrument(skip(self), fields(database = %database))]
    pub async fn list_database_users(&self, database: &str) -> Result<Vec<User>> {
        let response =
            self.authed_get(&format!("/db/{}/users", segment(database))).await?;
        translate::decode(&response)
    }

    /// Overwrite the named user's password and permissions. Deliberately
    /// distinct from [`alter_database_privilege`](Self::alter_database_privilege):
    /// this one touches the password, that one never does.
    #[instrument(skip(self, password, permissions), fields(database = %database))]
    pub async fn update_database_user(
        &self,
        database: &str,
        name: &str,
        password: &str,
        permissions: Vec<String>,
    ) -> Result<()> {
        let body = User {
            name: None,
            password: Some(password.to_string()),
            is_admin: None,
            permissions: Some(permissions),
        };
        self.post_user_update(database, name, &body).await
    }

    /// Update the admin flag and permission set. The request body never
    /// includes a password field.
    #[instrument(skip(self, permissions), fields(database = %database))]
    pub async fn alter_database_privilege(
        &self,
        database: &str,
        name: &str,
        is_admin: bool,
        permissions: Vec<String>,
    ) -> Result<()> {
        let body = User {
            name: None,
            password: None,
            is_admin: Some(is_admin),
            permissions: Some(permissions),
        };
        self.post_user_update(database, name, &body).await
    }

    /// Verify the *given* credentials (not the client's configured pair)
    /// against the service. Bad credentials are a defined non-success
    /// result, not an error; only transport failures raise.
    #[instrument(skip(self, password), fields(database = %database))]
    pub async fn authenticate_database_user(
        &self,
        database: &str,
        username: &str,
        password: &str,
    ) -> Result<bool> {
        let request =
            Request::new(Method::Get, format!("/db/{}/authenticate", segment(database)))
                .query("u", username)
                .query("p", password);
        let response = self.transport.execute(request).await?;
        match response.status {
            status if (200..300).contains(&status) => Ok(true),
            401 | 403 => Ok(false),
            status => Err(ClientError::Service { status, message: response.body }),
        }
    }

    // ------------------------------------------------------------------
    // Continuous queries
    // ------------------------------------------------------------------

    #[instrument(skip(self), fields(database = %database))]
    pub async fn list_continuous_queries(&self, database: &str) -> Result<Vec<ContinuousQuery>> {
        let response = self
            .authed_get(&format!("/db/{}/continuous_queries", segment(database)))
            .await?;
        translate::decode(&response)
    }

    #[instrument(skip(self), fields(database = %database))]
    pub async fn delete_continuous_query(&self, database: &str, id: i64) -> Result<()> {
        let request = self.authed(Request::new(
            Method::Delete,
            format!("/db/{}/continuous_queries/{id}", segment(database)),
        ));
        self.send(request).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Declared but unsupported operations
    // ------------------------------------------------------------------

    /// Not supported; fails with [`ClientError::Unsupported`] and never
    /// touches the transport.
    pub async fn delete_points(&self, database: &str, series_name: &str) -> Result<()> {
        let _ = (database, series_name);
        Err(ClientError::Unsupported(Operation::DeletePoints))
    }

    /// Not supported; see [`delete_points`](Self::delete_points).
    pub async fn create_scheduled_delete(
        &self,
        database: &str,
        delete: &ScheduledDelete,
    ) -> Result<()> {
        let _ = (database, delete);
        Err(ClientError::Unsupported(Operation::CreateScheduledDelete))
    }

    /// Not supported; see [`delete_points`](Self::delete_points).
    pub async fn describe_scheduled_deletes(
        &self,
        database: &str,
    ) -> Result<Vec<ScheduledDelete>> {
        let _ = database;
        Err(ClientError::Unsupported(Operation::DescribeScheduledDeletes))
    }

    /// Not supported; see [`delete_points`](Self::delete_points).
    pub async fn remove_scheduled_delete(&self, database: &str, id: i64) -> Result<()> {
        let _ = (database, id);
        Err(ClientError::Unsupported(Operation::RemoveScheduledDelete))
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Append the configured credential pair. Uniform across every
    /// credentialed operation; no per-operation logic.
    fn authed(&self, request: Request) -> Request {
        request.query("u", &self.config.username).query("p", &self.config.password)
    }

    async fn authed_get(&self, path: &str) -> Result<Response> {
        self.send(self.authed(Request::new(Method::Get, path))).await
    }

    /// Execute and translate: transport faults and service rejections both
    /// surface here, exactly once.
    async fn send(&self, request: Request) -> Result<Response> {
        let response = self.transport.execute(request).await?;
        translate::check_success(response)
    }

    async fn post_user_update(&self, database: &str, name: &str, body: &User) -> Result<()> {
        let request = self
            .authed(Request::new(
                Method::Post,
                format!("/db/{}/users/{}", segment(database), segment(name)),
            ))
            .body(serde_json::to_value(body).map_err(invalid_body)?);
        self.send(request).await?;
        Ok(())
    }
}

/// Percent-encode a value interpolated into a path.
fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn invalid_body(err: serde_json::Error) -> ClientError {
    ClientError::InvalidArgument(format!("unserializable request body: {err}"))
}
