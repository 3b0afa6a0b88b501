//! Diagnostic log verbosity for the transport adapter.

use std::fmt;
use std::str::FromStr;

use crate::errors::ClientError;

/// How much of each HTTP exchange the transport logs.
///
/// Maps 1:1 onto the transport adapter's own verbosity levels; changing it
/// has no effect on request semantics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LogLevel {
    /// No request logging.
    #[default]
    None,
    /// Request line and response status.
    Basic,
    /// Request line, response status, and headers.
    Headers,
    /// Request line, response status, headers, and bodies.
    Full,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Basic => "basic",
            Self::Headers => "headers",
            Self::Full => "full",
        };
        f.write_str(name)
    }
}

impl FromStr for LogLevel {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "basic" => Ok(Self::Basic),
            "headers" => Ok(Self::Headers),
            "full" => Ok(Self::Full),
            other => Err(ClientError::InvalidArgument(format!(
                "log level must be one of \"none\", \"basic\", \"headers\", \"full\", got {other:?}"
            ))),
        }
    }
}
