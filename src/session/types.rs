//! Session data structures.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The authenticated user as returned by the login endpoint.
///
/// Only `email` is interpreted; any other members the service sends are kept
/// in `extra` so they survive a round trip through session storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Login email
    pub email: String,
    /// Display name, when the service provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Remaining members of the service's user object
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserIdentity {
    /// Identity with only an email.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
            extra: serde_json::Map::new(),
        }
    }
}

/// Bearer credential issued at login.
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for the `Authorization` header and session storage only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Who is signed in
    pub identity: UserIdentity,
    /// Bearer credential, if the service issued one
    pub token: Option<Credential>,
}

/// Body of the login endpoint's answer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    /// Whether the authority accepted the pair
    #[serde(default)]
    pub success: bool,
    /// The signed-in user
    #[serde(default)]
    pub user: Option<UserIdentity>,
    /// Optional bearer token
    #[serde(default)]
    pub token: Option<String>,
    /// Human-readable reason on failure
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_debug_is_redacted() {
        let token = Credential::new("super-secret");
        let rendered = format!("{:?}", token);
        assert!(!rendered.contains("super-secret"));

        let session = Session {
            identity: UserIdentity::new("admin@example.com"),
            token: Some(token),
        };
        assert!(!format!("{:?}", session).contains("super-secret"));
    }

    #[test]
    fn test_identity_keeps_unknown_members() {
        let json = r#"{"id":7,"email":"admin@example.com","role":"admin"}"#;
        let identity: UserIdentity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.email, "admin@example.com");
        assert_eq!(identity.extra.get("id"), Some(&serde_json::json!(7)));

        let back = serde_json::to_value(&identity).unwrap();
        assert_eq!(back["role"], "admin");
        assert!(back.get("name").is_none());
    }

    #[test]
    fn test_login_response_defaults() {
        let response: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.success);
        assert!(response.user.is_none());

        let response: LoginResponse = serde_json::from_str(
            r#"{"success":true,"user":{"email":"a@b.co"},"token":"t"}"#,
        )
        .unwrap();
        assert!(response.success);
        assert_eq!(response.user.unwrap().email, "a@b.co");
        assert_eq!(response.token.as_deref(), Some("t"));
    }
}
