//! Timesheet Core
//!
//! Platform-independent view-model logic for the timesheet web client.
//! Nothing in here touches the browser, so all of it is testable with `cargo test`.
//!
//! - models: wire types exchanged with the REST API
//! - error / messages: service errors and user-facing error text
//! - dates / hours: date and hour-entry parsing and formatting
//! - timesheet: the weekly time-entry grid with its unsaved-change buffer
//! - picker: client → project → task cascade for adding grid rows
//! - forms: project and task edit forms
//! - report: report dimensions, time ranges and billable totals
//! - session: signed-in user, error modal and global task catalog state
//! - validation / account: field bounds and account option lists

pub mod account;
pub mod dates;
pub mod error;
pub mod forms;
pub mod hours;
pub mod messages;
pub mod models;
pub mod picker;
pub mod report;
pub mod session;
pub mod timesheet;
pub mod validation;

pub use error::{ErrorCode, ServiceError};
