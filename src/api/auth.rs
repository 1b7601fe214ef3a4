//! Login endpoint.

use async_trait::async_trait;
use log::debug;
use serde::Serialize;

use super::HttpApiClient;
use crate::error_handling::{categorize_auth_error, categorize_auth_status, AuthError};
use crate::session::{AuthService, LoginResponse};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[async_trait]
impl AuthService for HttpApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError> {
        debug!("POST {} for {}", self.login_url, email);
        let response = self
            .client
            .post(&self.login_url)
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(|e| categorize_auth_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            // Rejections usually carry {"message": "..."}; keep it for the user
            let message = response
                .json::<LoginResponse>()
                .await
                .ok()
                .and_then(|body| body.message);
            return Err(categorize_auth_status(status, message));
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| AuthError::Transport(format!("unreadable login response: {e}")))
    }
}
