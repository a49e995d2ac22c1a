use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::lenient;

/// Server envelope wrapping every JSON response
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Option<String>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("error")
    }
}

// ========================
// Auth / Account / Profile
// ========================

/// User returned by login, sign-up and token resume
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub timezone: String,
    pub week_start: u8,
    pub multiple_accounts: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SetupRequest {
    pub token: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    pub company: String,
    pub week_start: u8,
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub timezone: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub password: String,
    pub confirm_password: String,
}

// ========================
// Clients / Projects / Tasks
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Client {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(skip_serializing)]
    pub archived: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub client_id: i64,
    pub client_name: String,
    pub archived: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub tasks: Vec<ProjectTask>,
}

/// Task attached to a project with its effective billable flag and rate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ProjectTaskRecord")]
pub struct ProjectTask {
    pub id: i64,
    pub name: String,
    pub billable: bool,
    pub rate: f64,
}

/// Raw project task as the server sends it: overrides are optional and fall
/// back to the task defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ProjectTaskRecord {
    id: i64,
    name: String,
    billable: Option<bool>,
    rate: Option<f64>,
    default_billable: bool,
    default_rate: Option<f64>,
}

impl From<ProjectTaskRecord> for ProjectTask {
    fn from(record: ProjectTaskRecord) -> Self {
        let billable = record.billable.unwrap_or(false) || record.default_billable;
        let rate = match record.rate {
            Some(rate) if rate != 0.0 => rate,
            _ => record.default_rate.unwrap_or(0.0),
        };
        Self {
            id: record.id,
            name: record.name,
            billable,
            rate,
        }
    }
}

impl From<&Task> for ProjectTask {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.unwrap_or_default(),
            name: task.name.clone(),
            billable: task.default_billable,
            rate: task.default_rate,
        }
    }
}

/// Body of project create/update
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub client_id: i64,
    pub tasks: Vec<ProjectTask>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Task {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub default_billable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub default_rate: f64,
    #[serde(skip_serializing)]
    pub archived: bool,
}

/// `null` reads the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize)]
pub struct IdRequest {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdRequest {
    pub project_id: i64,
}

// ========================
// Time
// ========================

/// One saved time value of the week response
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekEntry {
    pub project_id: i64,
    pub task_id: i64,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub task_name: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(with = "lenient")]
    pub day: NaiveDate,
    #[serde(default)]
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeWeek {
    #[serde(with = "lenient")]
    pub start: NaiveDate,
    #[serde(with = "lenient")]
    pub end: NaiveDate,
    #[serde(default, deserialize_with = "null_as_default")]
    pub entries: Vec<WeekEntry>,
}

/// Date range body used by row add/delete and prior week copy
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRange {
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryUpdate {
    pub project_id: i64,
    pub task_id: i64,
    pub day: String,
    pub hours: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeEntriesRequest {
    pub entries: Vec<TimeEntryUpdate>,
}

// ========================
// Reports
// ========================

/// One aggregated row of any report dimension
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportRow {
    pub client_id: Option<i64>,
    pub client_name: Option<String>,
    pub project_id: Option<i64>,
    pub project_name: Option<String>,
    pub task_id: Option<i64>,
    pub task_name: Option<String>,
    pub profile_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub billable_hours: f64,
    pub non_billable_hours: f64,
    pub billable_total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_task_falls_back_to_defaults() {
        let task: ProjectTask = serde_json::from_str(
            r#"{"id":3,"name":"Design","defaultBillable":true,"defaultRate":95.5}"#,
        )
        .unwrap();
        assert!(task.billable);
        assert_eq!(task.rate, 95.5);
    }

    #[test]
    fn test_project_task_keeps_overrides() {
        let task: ProjectTask = serde_json::from_str(
            r#"{"id":3,"name":"Design","billable":true,"rate":120,"defaultBillable":false,"defaultRate":95.5}"#,
        )
        .unwrap();
        assert!(task.billable);
        assert_eq!(task.rate, 120.0);

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["rate"], 120.0);
        assert!(json.get("defaultRate").is_none());
    }

    #[test]
    fn test_time_week_parses() {
        let week: TimeWeek = serde_json::from_str(
            r#"{"start":"2024-03-04","end":"2024-03-11T00:00:00Z","entries":[
                {"projectId":1,"taskId":2,"projectName":"Site","taskName":"Dev","clientName":"Acme","day":"2024-03-05","hours":2.5}
            ]}"#,
        )
        .unwrap();
        assert_eq!(week.end, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        assert_eq!(week.entries[0].hours, 2.5);
    }

    #[test]
    fn test_envelope_error_flag() {
        let ok: Envelope<Vec<Client>> =
            serde_json::from_str(r#"{"status":"success","data":[{"id":1,"name":"Acme"}]}"#).unwrap();
        assert!(!ok.is_error());
        assert_eq!(ok.data.unwrap()[0].name, "Acme");

        let failed: Envelope<Vec<Client>> =
            serde_json::from_str(r#"{"status":"error","code":"InvalidToken"}"#).unwrap();
        assert!(failed.is_error());
        assert!(failed.data.is_none());
    }

    #[test]
    fn test_null_lists_read_as_empty() {
        let week: TimeWeek =
            serde_json::from_str(r#"{"start":"2024-03-04","end":"2024-03-10","entries":null}"#).unwrap();
        assert!(week.entries.is_empty());

        let week: TimeWeek = serde_json::from_str(r#"{"start":"2024-03-04","end":"2024-03-10"}"#).unwrap();
        assert!(week.entries.is_empty());

        let project: Project = serde_json::from_str(
            r#"{"id":1,"name":"Site","clientId":2,"clientName":"Acme","archived":false,"tasks":null}"#,
        )
        .unwrap();
        assert!(project.tasks.is_empty());
        assert_eq!(project.client_name, "Acme");
    }

    #[test]
    fn test_task_null_rate() {
        let task: Task =
            serde_json::from_str(r#"{"id":1,"name":"QA","defaultBillable":false,"defaultRate":null}"#).unwrap();
        assert_eq!(task.default_rate, 0.0);
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("archived").is_none());
    }
}
