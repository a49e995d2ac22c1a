//! Authentication calls

use gloo_net::http::Method;
use timesheet_core::models::{LoginRequest, SetupRequest, SignUpRequest, UserSummary};
use timesheet_core::ServiceError;

use super::{fetch, fetch_empty, required};

pub async fn login(email: &str, password: &str) -> Result<UserSummary, ServiceError> {
    let body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    required(fetch(Method::POST, "/api/auth/login", &body).await?)
}

/// Creates the account and its first user, signing them in
pub async fn sign_up(body: &SignUpRequest) -> Result<UserSummary, ServiceError> {
    required(fetch(Method::POST, "/api/account", body).await?)
}

/// Sets the password of an invited user
pub async fn setup(token: &str, password: &str) -> Result<(), ServiceError> {
    let body = SetupRequest {
        token: token.to_string(),
        password: password.to_string(),
    };
    fetch::<_, serde_json::Value>(Method::PUT, "/api/auth/setup", &body).await?;
    Ok(())
}

/// Resumes a session from the auth cookie
pub async fn resume_session() -> Result<UserSummary, ServiceError> {
    required(fetch_empty(Method::POST, "/api/auth/token").await?)
}

pub async fn logout() -> Result<(), ServiceError> {
    fetch_empty::<serde_json::Value>(Method::POST, "/api/auth/logout").await?;
    Ok(())
}
