//! Clients, projects and the task catalog

use gloo_net::http::Method;
use timesheet_core::models::{
    Client, IdRequest, Project, ProjectIdRequest, ProjectUpsert, Task, TimeWeek, WeekRange,
};
use timesheet_core::ServiceError;

use super::{fetch, get, required};

// ========================
// Clients
// ========================

pub async fn get_client(id: i64) -> Result<Client, ServiceError> {
    required(get(&format!("/api/client/{}", id)).await?)
}

pub async fn get_clients() -> Result<Vec<Client>, ServiceError> {
    Ok(get("/api/client/all").await?.unwrap_or_default())
}

pub async fn get_archived_clients() -> Result<Vec<Client>, ServiceError> {
    Ok(get("/api/client/archived").await?.unwrap_or_default())
}

pub async fn archive_client(id: i64) -> Result<(), ServiceError> {
    fetch::<_, serde_json::Value>(Method::PUT, "/api/client/archive", &IdRequest { id }).await?;
    Ok(())
}

pub async fn restore_client(id: i64) -> Result<(), ServiceError> {
    fetch::<_, serde_json::Value>(Method::PUT, "/api/client/restore", &IdRequest { id }).await?;
    Ok(())
}

/// Creates the client when it has no id yet, updates it otherwise
pub async fn save_client(client: &Client) -> Result<Client, ServiceError> {
    let method = if client.id.is_some() { Method::PUT } else { Method::POST };
    required(fetch(method, "/api/client", client).await?)
}

// ========================
// Projects
// ========================

pub async fn get_project(id: i64) -> Result<Project, ServiceError> {
    required(get(&format!("/api/client/project/{}", id)).await?)
}

pub async fn get_projects() -> Result<Vec<Project>, ServiceError> {
    Ok(get("/api/client/project/all").await?.unwrap_or_default())
}

pub async fn get_archived_projects() -> Result<Vec<Project>, ServiceError> {
    Ok(get("/api/client/project/archived").await?.unwrap_or_default())
}

pub async fn archive_project(project_id: i64) -> Result<(), ServiceError> {
    let body = ProjectIdRequest { project_id };
    fetch::<_, serde_json::Value>(Method::PUT, "/api/client/project/archive", &body).await?;
    Ok(())
}

pub async fn restore_project(project_id: i64) -> Result<(), ServiceError> {
    let body = ProjectIdRequest { project_id };
    fetch::<_, serde_json::Value>(Method::PUT, "/api/client/project/restore", &body).await?;
    Ok(())
}

pub async fn save_project(project: &ProjectUpsert) -> Result<Project, ServiceError> {
    let method = if project.id.is_some() { Method::PUT } else { Method::POST };
    required(fetch(method, "/api/client/project", project).await?)
}

/// Copies last week's rows into the range. `None` when last week had nothing.
pub async fn copy_prior_week(range: &WeekRange) -> Result<Option<TimeWeek>, ServiceError> {
    fetch(Method::POST, "/api/client/project/copy/last/week", range).await
}

// ========================
// Tasks
// ========================

pub async fn get_tasks() -> Result<Vec<Task>, ServiceError> {
    Ok(get("/api/task/all").await?.unwrap_or_default())
}

pub async fn get_task(id: i64) -> Result<Task, ServiceError> {
    required(get(&format!("/api/task/{}", id)).await?)
}

pub async fn get_archived_tasks() -> Result<Vec<Task>, ServiceError> {
    Ok(get("/api/task/archived").await?.unwrap_or_default())
}

pub async fn archive_task(id: i64) -> Result<(), ServiceError> {
    fetch::<_, serde_json::Value>(Method::PUT, "/api/task/archive", &IdRequest { id }).await?;
    Ok(())
}

pub async fn restore_task(id: i64) -> Result<(), ServiceError> {
    fetch::<_, serde_json::Value>(Method::PUT, "/api/task/restore", &IdRequest { id }).await?;
    Ok(())
}

pub async fn save_task(task: &Task) -> Result<Task, ServiceError> {
    let method = if task.id.is_some() { Method::PUT } else { Method::POST };
    required(fetch(method, "/api/task", task).await?)
}
