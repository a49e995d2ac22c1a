use gloo_net::http::Method;
use timesheet_core::models::{PasswordChange, Profile};
use timesheet_core::ServiceError;

use super::{fetch, get, required};

pub async fn get_profile() -> Result<Profile, ServiceError> {
    required(get("/api/profile").await?)
}

pub async fn update_profile(profile: &Profile) -> Result<Profile, ServiceError> {
    Ok(fetch(Method::PUT, "/api/profile", profile)
        .await?
        .unwrap_or_else(|| profile.clone()))
}

pub async fn update_password(change: &PasswordChange) -> Result<(), ServiceError> {
    fetch::<_, serde_json::Value>(Method::PUT, "/api/profile/password", change).await?;
    Ok(())
}
