use gloo_net::http::Method;
use timesheet_core::models::{Account, AddUserRequest};
use timesheet_core::ServiceError;

use super::{fetch, get, required};

pub async fn get_account() -> Result<Account, ServiceError> {
    required(get("/api/account").await?)
}

pub async fn update_account(account: &Account) -> Result<Account, ServiceError> {
    Ok(fetch(Method::PUT, "/api/account", account)
        .await?
        .unwrap_or_else(|| account.clone()))
}

/// Invites a user to the account; the server emails them a setup link
pub async fn add_user(body: &AddUserRequest) -> Result<(), ServiceError> {
    fetch::<_, serde_json::Value>(Method::POST, "/api/account/user", body).await?;
    Ok(())
}
