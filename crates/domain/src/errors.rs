//! Caller-facing error taxonomy for the Tempest client.
//!
//! Every failure a facade operation can produce is one of three kinds:
//! a caller contract violation decidable without I/O, a transport failure
//! with no service message, or a service rejection carrying the service's
//! message verbatim. Callers branch on [`ClientError::kind`] to decide
//! whether to fix their input, retry, or surface the message.

use thiserror::Error;

use crate::types::Operation;

/// Main error type for Tempest client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The operation is declared by the API surface but not implemented by
    /// this client. Raised before any transport call.
    #[error("operation not supported by this client: {0}")]
    Unsupported(Operation),

    /// Caller input rejected without a network call (unparseable precision
    /// or log level, malformed base address, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Client construction failed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The request never received a valid response: connection refused,
    /// timeout, request build failure. No service message is available.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered 2xx but the body did not decode into the
    /// expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The service returned a non-success status. `message` is the
    /// response body, unmodified.
    #[error("service error (status {status}): {message}")]
    Service { status: u16, message: String },
}

/// The three failure kinds callers distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Fix the input; retrying the same call cannot succeed.
    CallerContract,
    /// The service was never reached (or answered garbage); retrying may
    /// succeed.
    Transport,
    /// The service rejected the operation and said why.
    Service,
}

impl ClientError {
    /// Classify this error into its caller-visible kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unsupported(_) | Self::InvalidArgument(_) | Self::Config(_) => {
                ErrorKind::CallerContract
            }
            Self::Transport(_) | Self::MalformedResponse(_) => ErrorKind::Transport,
            Self::Service { .. } => ErrorKind::Service,
        }
    }

    /// Whether retrying the same call might succeed. Only transport-kind
    /// failures are retryable; the facade itself never retries.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }
}

/// Result type alias for Tempest client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_cover_the_taxonomy() {
        assert_eq!(
            ClientError::Unsupported(Operation::DeletePoints).kind(),
            ErrorKind::CallerContract
        );
        assert_eq!(ClientError::InvalidArgument("x".into()).kind(), ErrorKind::CallerContract);
        assert_eq!(ClientError::Config("x".into()).kind(), ErrorKind::CallerContract);
        assert_eq!(ClientError::Transport("refused".into()).kind(), ErrorKind::Transport);
        assert_eq!(ClientError::MalformedResponse("eof".into()).kind(), ErrorKind::Transport);
        assert_eq!(
            ClientError::Service { status: 400, message: "nope".into() }.kind(),
            ErrorKind::Service
        );
    }

    #[test]
    fn only_transport_kind_is_retryable() {
        assert!(ClientError::Transport("refused".into()).is_retryable());
        assert!(ClientError::MalformedResponse("eof".into()).is_retryable());
        assert!(!ClientError::Unsupported(Operation::DeletePoints).is_retryable());
        assert!(!ClientError::Service { status: 500, message: String::new() }.is_retryable());
    }

    #[test]
    fn service_error_preserves_message_verbatim() {
        let err = ClientError::Service { status: 400, message: "database already exists".into() };
        assert_eq!(err.to_string(), "service error (status 400): database already exists");
    }
}
