//! Authentication service boundary.

use async_trait::async_trait;

use super::types::LoginResponse;
use crate::error_handling::AuthError;

/// The authority that checks an email/password pair.
///
/// Implementations make exactly one attempt per call. Non-success HTTP
/// statuses are already mapped to `AuthError`; a 2xx body is returned as-is
/// and `SessionStore` decides whether it represents success.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Submit the credentials once.
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError>;
}
