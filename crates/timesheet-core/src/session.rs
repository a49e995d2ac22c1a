//! Session State
//!
//! Who is signed in, the global error modal and the shared task catalog.
//! The UI keeps one of each in its reactive store and only mutates them through
//! these methods.

use crate::error::ServiceError;
use crate::messages::SERVER_ERROR_MESSAGE;
use crate::models::{Account, Profile, Task, UserSummary};

pub const MAX_NAME_LENGTH: usize = 20;
pub const MAX_COMPANY_LENGTH: usize = 40;

/// Cut to `max` characters, appending an ellipsis when something was cut
pub fn trim_to_max_length(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        let mut trimmed: String = value.chars().take(max).collect();
        trimmed.push('\u{2026}');
        trimmed
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub authenticated: bool,
    pub user_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub timezone: String,
    pub multiple_accounts: bool,
    pub week_start: u8,
}

impl Session {
    /// Login, sign-up and token resume all land here
    pub fn login(&mut self, user: UserSummary) {
        self.authenticated = true;
        self.user_id = Some(user.id);
        self.first_name = user.first_name;
        self.last_name = user.last_name;
        self.company = user.company;
        self.multiple_accounts = user.multiple_accounts;
        self.week_start = user.week_start;
        if !user.email.is_empty() {
            self.email = user.email;
        }
        if !user.timezone.is_empty() {
            self.timezone = user.timezone;
        }
    }

    /// Logout, invalid token and unauthorised responses
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn apply_profile(&mut self, profile: &Profile) {
        self.first_name = profile.first_name.clone();
        self.last_name = profile.last_name.clone();
        self.email = profile.email.clone();
        self.timezone = profile.timezone.clone();
    }

    pub fn apply_account(&mut self, account: &Account) {
        self.company = account.company.clone();
        self.week_start = account.week_start;
    }

    pub fn display_first_name(&self) -> String {
        trim_to_max_length(&self.first_name, MAX_NAME_LENGTH)
    }

    pub fn display_full_name(&self) -> String {
        format!(
            "{} {}",
            trim_to_max_length(&self.first_name, MAX_NAME_LENGTH),
            trim_to_max_length(&self.last_name, MAX_NAME_LENGTH)
        )
    }

    pub fn display_company(&self) -> String {
        trim_to_max_length(&self.company, MAX_COMPANY_LENGTH)
    }
}

pub const DEFAULT_ERROR_TITLE: &str = "Hmmm, an unexpected error happened";
pub const DEFAULT_ERROR_ACTION: &str = "Please try your request again";

/// Global modal state: either a server error or an expired session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorModal {
    pub server_error: bool,
    pub title: String,
    pub message: String,
    pub action_message: String,
    pub session_expired: bool,
}

impl ErrorModal {
    /// Route a service error to the right modal
    pub fn show_service_error(&mut self, err: &ServiceError) {
        if err.is_session_error() {
            self.session_expired = true;
        } else {
            self.server_error = true;
            self.title = DEFAULT_ERROR_TITLE.to_string();
            self.message = SERVER_ERROR_MESSAGE.to_string();
            self.action_message = err
                .error_action_message
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_ERROR_ACTION.to_string());
        }
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}

/// Global task list, kept sorted by name ignoring case
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskCatalog {
    tasks: Vec<Task>,
    fetched: bool,
}

impl TaskCatalog {
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_fetched(&self) -> bool {
        self.fetched
    }

    pub fn get(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == Some(id))
    }

    pub fn add_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.fetched = true;
        self.sort();
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
        self.sort();
    }

    pub fn update(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task,
            None => log::warn!("Update for unknown task {:?}", task.id),
        }
        self.sort();
    }

    pub fn remove(&mut self, id: i64) {
        self.tasks.retain(|t| t.id != Some(id));
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn sort(&mut self) {
        self.tasks.sort_by_cached_key(|t| t.name.to_lowercase());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn user() -> UserSummary {
        UserSummary {
            id: 42,
            first_name: "Alexandria-Katherine".into(),
            last_name: "Smith".into(),
            company: "Acme".into(),
            week_start: 1,
            ..Default::default()
        }
    }

    fn task(id: i64, name: &str) -> Task {
        Task {
            id: Some(id),
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_login_and_clear() {
        let mut session = Session::default();
        session.login(user());
        assert!(session.authenticated);
        assert_eq!(session.user_id, Some(42));
        assert_eq!(session.week_start, 1);
        session.clear();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_display_trims() {
        let mut session = Session::default();
        session.login(user());
        // Exactly twenty characters
        assert_eq!(session.display_first_name(), "Alexandria-Katherine");
        session.first_name.push_str("-Jones");
        assert_eq!(session.display_first_name(), "Alexandria-Katherine\u{2026}");
        assert_eq!(trim_to_max_length("abc", 2), "ab\u{2026}");
    }

    #[test]
    fn test_profile_and_account_updates() {
        let mut session = Session::default();
        session.login(user());
        session.apply_profile(&Profile {
            first_name: "Al".into(),
            last_name: "Smith".into(),
            email: "al@example.com".into(),
            timezone: "America/Denver".into(),
        });
        session.apply_account(&Account {
            company: "Acme Two".into(),
            week_start: 6,
            timezone: String::new(),
        });
        assert_eq!(session.display_full_name(), "Al Smith");
        assert_eq!(session.company, "Acme Two");
        assert_eq!(session.week_start, 6);
        assert_eq!(session.timezone, "America/Denver");
    }

    #[test]
    fn test_error_modal_routing() {
        let mut modal = ErrorModal::default();
        modal.show_service_error(&ServiceError::new(ErrorCode::TokenExpired, 401, ""));
        assert!(modal.session_expired);
        assert!(!modal.server_error);
        modal.close();

        let mut err = ServiceError::new(ErrorCode::Other("Boom".into()), 500, "boom");
        err.error_action_message = Some("Call support".into());
        modal.show_service_error(&err);
        assert!(modal.server_error);
        assert_eq!(modal.message, SERVER_ERROR_MESSAGE);
        assert_eq!(modal.action_message, "Call support");
        modal.close();
        assert_eq!(modal, ErrorModal::default());
    }

    #[test]
    fn test_task_catalog() {
        let mut catalog = TaskCatalog::default();
        assert!(!catalog.is_fetched());
        catalog.add_all(vec![task(1, "design"), task(2, "Admin")]);
        assert!(catalog.is_fetched());
        assert_eq!(catalog.tasks()[0].name, "Admin");

        catalog.add(task(3, "Build"));
        assert_eq!(catalog.tasks()[1].name, "Build");

        catalog.update(task(1, "Analysis"));
        assert_eq!(catalog.tasks()[1].name, "Analysis");

        catalog.remove(2);
        assert_eq!(catalog.tasks().len(), 2);
        assert!(catalog.get(2).is_none());

        catalog.reset();
        assert!(catalog.tasks().is_empty());
        assert!(!catalog.is_fetched());
    }
}
