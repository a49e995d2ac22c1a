use chrono::NaiveDate;
use gloo_net::http::Method;
use timesheet_core::dates::short_date;
use timesheet_core::models::{TimeEntriesRequest, TimeWeek, WeekRange};
use timesheet_core::ServiceError;

use super::{fetch, get, required};

/// Week containing `date`, or the current week
pub async fn get_week(date: Option<NaiveDate>) -> Result<TimeWeek, ServiceError> {
    let path = match date {
        Some(date) => format!("/api/time/week/{}", short_date(date)),
        None => "/api/time/week".to_string(),
    };
    required(get(&path).await?)
}

pub async fn add_row(range: &WeekRange) -> Result<(), ServiceError> {
    fetch::<_, serde_json::Value>(Method::POST, "/api/time/project/week", range).await?;
    Ok(())
}

pub async fn delete_row(range: &WeekRange) -> Result<(), ServiceError> {
    fetch::<_, serde_json::Value>(Method::DELETE, "/api/time/project/week", range).await?;
    Ok(())
}

pub async fn save_entries(request: &TimeEntriesRequest) -> Result<(), ServiceError> {
    fetch::<_, serde_json::Value>(Method::PUT, "/api/time", request).await?;
    Ok(())
}
