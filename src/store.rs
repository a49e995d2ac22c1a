//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use timesheet_core::models::{Account, Profile, Task, UserSummary};
use timesheet_core::session::{ErrorModal, Session, TaskCatalog};
use timesheet_core::ServiceError;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in user
    pub session: Session,
    /// Server error / expired session modal
    pub error_modal: ErrorModal,
    /// Task catalog shared by the task list and the project editor
    pub task_catalog: TaskCatalog,
    /// Set once the boot token check has finished
    pub booted: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_login(store: &AppStore, user: UserSummary) {
    store.session().write().login(user);
}

/// Forget the user along with anything cached for them
pub fn store_logout(store: &AppStore) {
    store.session().write().clear();
    store.task_catalog().write().reset();
}

pub fn store_apply_profile(store: &AppStore, profile: &Profile) {
    store.session().write().apply_profile(profile);
}

pub fn store_apply_account(store: &AppStore, account: &Account) {
    store.session().write().apply_account(account);
}

pub fn store_show_error(store: &AppStore, err: &ServiceError) {
    store.error_modal().write().show_service_error(err);
}

pub fn store_close_error(store: &AppStore) {
    store.error_modal().write().close();
}

pub fn store_set_tasks(store: &AppStore, tasks: Vec<Task>) {
    store.task_catalog().write().add_all(tasks);
}

pub fn store_add_task(store: &AppStore, task: Task) {
    store.task_catalog().write().add(task);
}

pub fn store_update_task(store: &AppStore, task: Task) {
    store.task_catalog().write().update(task);
}

pub fn store_remove_task(store: &AppStore, task_id: i64) {
    store.task_catalog().write().remove(task_id);
}
