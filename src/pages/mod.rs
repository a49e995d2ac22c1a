//! Routed pages

mod account;
mod home;
mod login;
mod new_user_setup;
mod profile;
mod projects;
mod reports;
mod sign_up;
mod time;

pub use account::AccountPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use new_user_setup::NewUserSetupPage;
pub use profile::ProfilePage;
pub use projects::{ClientEditPage, ClientsPage, ProjectEditPage, ProjectsPage, TaskEditPage, TasksPage};
pub use reports::ReportsPage;
pub use sign_up::SignUpPage;
pub use time::TimePage;
