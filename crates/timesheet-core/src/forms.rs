//! Edit forms for projects, tasks, clients and the profile password

use thiserror::Error;

use crate::hours::{normalize, rate_from_text, sanitize};
use crate::models::{Client, PasswordChange, Project, ProjectTask, ProjectUpsert, Task};
use crate::validation::{
    is_client_name_valid, is_email_valid, is_name_valid, is_password_valid, is_project_name_valid,
    is_task_name_valid,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please select a client")]
    ClientRequired,
    #[error("Invalid name")]
    InvalidName,
    #[error("Invalid first name")]
    InvalidFirstName,
    #[error("Invalid last name")]
    InvalidLastName,
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Invalid current password")]
    InvalidCurrentPassword,
    #[error("Invalid password")]
    InvalidPassword,
    #[error("Invalid confirm password")]
    InvalidConfirmPassword,
    #[error("Passwords don't match")]
    PasswordMismatch,
}

// ========================
// Project
// ========================

/// Task row of the project form; the rate stays text while being edited
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectTaskDraft {
    pub id: i64,
    pub name: String,
    pub billable: bool,
    pub rate: String,
}

impl From<&ProjectTask> for ProjectTaskDraft {
    fn from(task: &ProjectTask) -> Self {
        Self {
            id: task.id,
            name: task.name.clone(),
            billable: task.billable,
            rate: rate_text(task.rate),
        }
    }
}

fn rate_text(rate: f64) -> String {
    if rate == 0.0 {
        String::new()
    } else {
        normalize(&rate.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectForm {
    pub id: Option<i64>,
    pub name: String,
    pub client_id: Option<i64>,
    pub client_name: String,
    tasks: Vec<ProjectTaskDraft>,
}

impl ProjectForm {
    pub fn from_project(project: &Project) -> Self {
        let mut form = Self {
            id: Some(project.id),
            name: project.name.clone(),
            client_id: Some(project.client_id).filter(|id| *id != 0),
            client_name: project.client_name.clone(),
            tasks: project.tasks.iter().map(ProjectTaskDraft::from).collect(),
        };
        form.sort_tasks();
        form
    }

    pub fn tasks(&self) -> &[ProjectTaskDraft] {
        &self.tasks
    }

    pub fn select_client(&mut self, client: &Client) {
        self.client_id = client.id;
        self.client_name = client.name.clone();
    }

    /// Attach a catalog task with its defaults. Returns false if already attached.
    pub fn add_task(&mut self, task: &Task) -> bool {
        let Some(id) = task.id else {
            return false;
        };
        if self.tasks.iter().any(|t| t.id == id) {
            return false;
        }
        self.tasks.push(ProjectTaskDraft::from(&ProjectTask::from(task)));
        self.sort_tasks();
        true
    }

    pub fn remove_task(&mut self, id: i64) {
        self.tasks.retain(|t| t.id != id);
    }

    pub fn set_billable(&mut self, id: i64, billable: bool) {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => task.billable = billable,
            None => log::error!("Could not find task by id {}", id),
        }
    }

    pub fn set_rate(&mut self, id: i64, raw: &str) {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => task.rate = sanitize(raw),
            None => log::error!("Could not find task by id {}", id),
        }
    }

    pub fn blur_rate(&mut self, id: i64) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.rate = normalize(&task.rate);
        }
    }

    fn sort_tasks(&mut self) {
        self.tasks.sort_by_cached_key(|t| t.name.to_lowercase());
    }

    /// Request body for create or update
    pub fn validate(&self) -> Result<ProjectUpsert, FormError> {
        let client_id = self.client_id.ok_or(FormError::ClientRequired)?;
        if !is_project_name_valid(&self.name) {
            return Err(FormError::InvalidName);
        }
        Ok(ProjectUpsert {
            id: self.id,
            name: self.name.clone(),
            client_id,
            tasks: self
                .tasks
                .iter()
                .map(|t| ProjectTask {
                    id: t.id,
                    name: t.name.clone(),
                    billable: t.billable,
                    rate: rate_from_text(&t.rate),
                })
                .collect(),
        })
    }
}

// ========================
// Task
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct TaskForm {
    pub id: Option<i64>,
    pub name: String,
    pub default_billable: bool,
    pub rate: String,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            default_billable: true,
            rate: String::new(),
        }
    }
}

impl TaskForm {
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id,
            name: task.name.clone(),
            default_billable: task.default_billable,
            rate: rate_text(task.default_rate),
        }
    }

    pub fn set_rate(&mut self, raw: &str) {
        self.rate = sanitize(raw);
    }

    pub fn blur_rate(&mut self) {
        self.rate = normalize(&self.rate);
    }

    pub fn validate(&self) -> Result<Task, FormError> {
        if !is_task_name_valid(&self.name) {
            return Err(FormError::InvalidName);
        }
        Ok(Task {
            id: self.id,
            name: self.name.clone(),
            default_billable: self.default_billable,
            default_rate: rate_from_text(&self.rate),
            archived: false,
        })
    }
}

pub fn validate_client(id: Option<i64>, name: &str) -> Result<Client, FormError> {
    if !is_client_name_valid(name) {
        return Err(FormError::InvalidName);
    }
    Ok(Client {
        id,
        name: name.to_string(),
        archived: false,
    })
}

// ========================
// Profile
// ========================

pub fn validate_profile(first_name: &str, last_name: &str, email: &str) -> Result<(), FormError> {
    if !is_name_valid(first_name) {
        return Err(FormError::InvalidFirstName);
    }
    if !is_name_valid(last_name) {
        return Err(FormError::InvalidLastName);
    }
    if !is_email_valid(email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

impl PasswordChange {
    pub fn validate(&self) -> Result<(), FormError> {
        if !is_password_valid(&self.current_password) {
            return Err(FormError::InvalidCurrentPassword);
        }
        if !is_password_valid(&self.password) {
            return Err(FormError::InvalidPassword);
        }
        if !is_password_valid(&self.confirm_password) {
            return Err(FormError::InvalidConfirmPassword);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }

    /// Map a server `FieldSize` field name onto the form field it refers to
    pub fn field_error(field: &str) -> Option<FormError> {
        match field {
            "currentPassword" => Some(FormError::InvalidCurrentPassword),
            "password" => Some(FormError::InvalidPassword),
            "confirmPassword" => Some(FormError::InvalidConfirmPassword),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_task(id: i64, name: &str, billable: bool, rate: f64) -> Task {
        Task {
            id: Some(id),
            name: name.into(),
            default_billable: billable,
            default_rate: rate,
            archived: false,
        }
    }

    #[test]
    fn test_project_form_requires_client_then_name() {
        let mut form = ProjectForm::default();
        assert_eq!(form.validate(), Err(FormError::ClientRequired));
        form.select_client(&Client {
            id: Some(3),
            name: "Acme".into(),
            archived: false,
        });
        assert_eq!(form.validate(), Err(FormError::InvalidName));
        form.name = "Website".into();
        let body = form.validate().unwrap();
        assert_eq!(body.client_id, 3);
        assert!(body.id.is_none());
    }

    #[test]
    fn test_project_tasks_deduped_and_sorted() {
        let mut form = ProjectForm::default();
        assert!(form.add_task(&catalog_task(1, "testing", true, 80.0)));
        assert!(form.add_task(&catalog_task(2, "Design", false, 0.0)));
        assert!(!form.add_task(&catalog_task(1, "testing", true, 80.0)));
        assert_eq!(form.tasks()[0].name, "Design");
        assert_eq!(form.tasks()[1].rate, "80");
        form.remove_task(2);
        assert_eq!(form.tasks().len(), 1);
    }

    #[test]
    fn test_project_rates_normalised() {
        let mut form = ProjectForm::default();
        form.add_task(&catalog_task(1, "Dev", true, 0.0));
        form.set_rate(1, "$12.5.0");
        assert_eq!(form.tasks()[0].rate, "12.5.0");
        form.blur_rate(1);
        assert_eq!(form.tasks()[0].rate, "12.5");
        form.set_billable(1, false);

        form.client_id = Some(1);
        form.name = "P".into();
        let body = form.validate().unwrap();
        assert_eq!(body.tasks[0].rate, 12.5);
        assert!(!body.tasks[0].billable);

        form.set_rate(1, "");
        assert_eq!(form.validate().unwrap().tasks[0].rate, 0.0);
    }

    #[test]
    fn test_task_form() {
        let mut form = TaskForm::default();
        assert!(form.default_billable);
        assert_eq!(form.validate(), Err(FormError::InvalidName));
        form.name = "Review".into();
        form.set_rate("abc");
        let task = form.validate().unwrap();
        assert_eq!(task.default_rate, 0.0);

        let loaded = TaskForm::from_task(&catalog_task(4, "QA", true, 65.25));
        assert_eq!(loaded.rate, "65.25");
    }

    #[test]
    fn test_client_validation() {
        assert_eq!(validate_client(None, "  "), Err(FormError::InvalidName));
        assert_eq!(validate_client(Some(2), "Acme").unwrap().id, Some(2));
    }

    #[test]
    fn test_password_change() {
        let mut change = PasswordChange {
            current_password: "short".into(),
            password: "password1".into(),
            confirm_password: "password2".into(),
        };
        assert_eq!(change.validate(), Err(FormError::InvalidCurrentPassword));
        change.current_password = "oldpassword".into();
        assert_eq!(change.validate(), Err(FormError::PasswordMismatch));
        change.confirm_password = "password1".into();
        assert!(change.validate().is_ok());
        assert_eq!(
            PasswordChange::field_error("confirmPassword"),
            Some(FormError::InvalidConfirmPassword)
        );
    }

    #[test]
    fn test_profile_validation() {
        assert_eq!(validate_profile("", "B", "a@b.co"), Err(FormError::InvalidFirstName));
        assert_eq!(validate_profile("A", "B", "nope"), Err(FormError::InvalidEmail));
        assert!(validate_profile("A", "B", "a@b.co").is_ok());
    }
}
