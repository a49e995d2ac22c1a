//! UI Components
//!
//! Reusable Leptos components.

mod add_row_modal;
mod add_user_modal;
mod confirm_modal;
mod create_client_modal;
mod create_task_modal;
mod error_modal;
mod form_input;
mod navigation;
mod unauthenticated_modal;
mod wait_loader;

pub use add_row_modal::AddRowModal;
pub use add_user_modal::AddUserModal;
pub use confirm_modal::ConfirmModal;
pub use create_client_modal::CreateClientModal;
pub use create_task_modal::CreateTaskModal;
pub use error_modal::ErrorModal;
pub use form_input::FormInput;
pub use navigation::Navigation;
pub use unauthenticated_modal::UnauthenticatedModal;
pub use wait_loader::WaitLoader;
