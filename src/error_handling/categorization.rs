//! Error categorization.
//!
//! Maps transport-level failures (`reqwest::Error`, HTTP status codes) onto the
//! lookup and authentication taxonomies. No retry strategy lives here: every
//! retry is a fresh caller-initiated request.

use reqwest::StatusCode;

use super::types::{AuthError, LookupError};

/// Categorizes a `reqwest::Error` into a `LookupError`.
///
/// Status codes are checked first so that `error_for_status` failures keep
/// their meaning; network-level failures are reported as `Transport`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> LookupError {
    if let Some(status) = error.status() {
        return categorize_lookup_status(status);
    }

    if error.is_decode() {
        LookupError::InvalidResponse(error.to_string())
    } else {
        // timeout, connect, request, body, builder, redirect
        LookupError::Transport(error.to_string())
    }
}

/// Maps a non-success lookup status onto a `LookupError`.
pub fn categorize_lookup_status(status: StatusCode) -> LookupError {
    match status.as_u16() {
        401 => LookupError::Unauthenticated,
        404 => LookupError::NotFound,
        code => LookupError::ServerError { status: code },
    }
}

/// Maps a non-success login status onto an `AuthError`.
///
/// Client errors mean the authority looked at the pair and refused it; server
/// errors mean it never gave an answer.
pub fn categorize_auth_status(status: StatusCode, server_message: Option<String>) -> AuthError {
    if status.is_client_error() {
        AuthError::InvalidCredentials(
            server_message.unwrap_or_else(|| crate::config::MSG_LOGIN_FAILED.to_string()),
        )
    } else {
        AuthError::Transport(format!("authentication service returned status {status}"))
    }
}

/// Categorizes a `reqwest::Error` raised while logging in.
pub fn categorize_auth_error(error: &reqwest::Error) -> AuthError {
    match error.status() {
        Some(status) => categorize_auth_status(status, None),
        None => AuthError::Transport(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MSG_LOGIN_FAILED;

    #[test]
    fn test_lookup_status_mapping() {
        assert_eq!(
            categorize_lookup_status(StatusCode::NOT_FOUND),
            LookupError::NotFound
        );
        assert_eq!(
            categorize_lookup_status(StatusCode::UNAUTHORIZED),
            LookupError::Unauthenticated
        );
        assert_eq!(
            categorize_lookup_status(StatusCode::INTERNAL_SERVER_ERROR),
            LookupError::ServerError { status: 500 }
        );
        assert_eq!(
            categorize_lookup_status(StatusCode::TOO_MANY_REQUESTS),
            LookupError::ServerError { status: 429 }
        );
    }

    #[test]
    fn test_auth_status_client_error_is_invalid_credentials() {
        assert_eq!(
            categorize_auth_status(StatusCode::UNAUTHORIZED, Some("Wrong password".into())),
            AuthError::InvalidCredentials("Wrong password".into())
        );
        assert_eq!(
            categorize_auth_status(StatusCode::BAD_REQUEST, None),
            AuthError::InvalidCredentials(MSG_LOGIN_FAILED.into())
        );
    }

    #[test]
    fn test_auth_status_server_error_is_transport() {
        match categorize_auth_status(StatusCode::BAD_GATEWAY, Some("ignored".into())) {
            AuthError::Transport(msg) => assert!(msg.contains("502")),
            other => panic!("expected Transport, got {:?}", other),
        }
    }

    // Network-level reqwest errors (timeouts, refused connections) are exercised
    // against a live mock server in tests/api_client.rs.
}
