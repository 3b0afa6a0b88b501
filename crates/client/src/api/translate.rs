//! Error translation: the single chokepoint every response passes through.
//!
//! Transport faults arrive as `ClientError::Transport` from the transport
//! itself. This module handles the other half of the contract: a non-2xx
//! response becomes `ClientError::Service` carrying the body verbatim
//! (never parsed), and a 2xx body that does not decode becomes
//! `ClientError::MalformedResponse`. Nothing is swallowed or retried here.

use serde::de::DeserializeOwned;
use tempest_domain::{ClientError, Result};

use crate::http::Response;

/// Pass a successful response through; turn a non-success status into a
/// service error with the service's message unmodified.
pub(crate) fn check_success(response: Response) -> Result<Response> {
    if response.is_success() {
        return Ok(response);
    }
    Err(ClientError::Service { status: response.status, message: response.body })
}

/// Decode the body of an already-checked response.
pub(crate) fn decode<T: DeserializeOwned>(response: &Response) -> Result<T> {
    serde_json::from_str(&response.body)
        .map_err(|e| ClientError::MalformedResponse(format!("{e} (body: {:.120})", response.body)))
}

#[cfg(test)]
mod tests {
    use tempest_domain::{ErrorKind, Pong};

    use super::*;

    fn response(status: u16, body: &str) -> Response {
        Response { status, headers: Vec::new(), body: body.to_string() }
    }

    #[test]
    fn success_statuses_pass_through() {
        for status in [200, 201, 204] {
            assert!(check_success(response(status, "")).is_ok());
        }
    }

    #[test]
    fn non_success_carries_body_verbatim() {
        let err = check_success(response(400, "database already exists")).unwrap_err();
        match err {
            ClientError::Service { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "database already exists");
            }
            other => panic!("expected service error, got {other:?}"),
        }
    }

    #[test]
    fn empty_error_body_is_preserved_as_empty() {
        let err = check_success(response(500, "")).unwrap_err();
        assert!(matches!(err, ClientError::Service { status: 500, ref message } if message.is_empty()));
    }

    #[test]
    fn undecodable_success_body_is_transport_kind() {
        let err = decode::<Pong>(&response(200, "<html>gateway</html>")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[test]
    fn decode_reads_expected_shape() {
        let pong: Pong = decode(&response(200, r#"{"status":"ok"}"#)).unwrap();
        assert!(pong.is_ok());
    }
}
