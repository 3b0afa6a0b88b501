//! Wire-level data types exchanged with the Tempest HTTP API.

pub mod continuous_query;
pub mod database;
pub mod log_level;
pub mod operation;
pub mod pong;
pub mod precision;
pub mod series;
pub mod user;

// Re-export the request/response shapes for convenience
pub use continuous_query::{ContinuousQuery, ScheduledDelete};
pub use database::Database;
pub use log_level::LogLevel;
pub use operation::Operation;
pub use pong::Pong;
pub use precision::TimePrecision;
pub use series::Series;
pub use user::User;
