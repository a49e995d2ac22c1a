//! Projects Pages
//!
//! Tabbed lists of projects, clients and tasks (each with an archived view)
//! plus their create/edit forms.

mod client_edit;
mod clients_list;
mod project_edit;
mod projects_list;
mod task_edit;
mod tasks_list;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

pub use client_edit::ClientEditPage;
pub use clients_list::ClientsPage;
pub use project_edit::ProjectEditPage;
pub use projects_list::ProjectsPage;
pub use task_edit::TaskEditPage;
pub use tasks_list::TasksPage;

const TABS: [(&str, &str); 3] = [("/projects", "Projects"), ("/clients", "Clients"), ("/tasks", "Tasks")];

/// Projects / Clients / Tasks switcher above every list
#[component]
fn ListTabs() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="menu tabular">
            {TABS
                .into_iter()
                .map(|(path, label)| {
                    let active = move || location.pathname.get().starts_with(path);
                    view! {
                        <A href=path attr:class=move || if active() { "item active" } else { "item" }>
                            {label}
                        </A>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Active / Archived switch of a list
#[component]
fn ArchivedToggle(archived: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="btn-group archived-toggle">
            <button class="btn" class:active=move || !archived.get() on:click=move |_| archived.set(false)>
                "Active"
            </button>
            <button class="btn" class:active=move || archived.get() on:click=move |_| archived.set(true)>
                "Archived"
            </button>
        </div>
    }
}

/// Pending archive confirmation: id plus the name shown in the dialog
#[derive(Debug, Clone, PartialEq)]
struct ArchiveTarget {
    id: i64,
    name: String,
}

fn archive_description(kind: &str, name: &str) -> String {
    format!("Do you want to archive the {} {}?", name, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_description() {
        assert_eq!(
            archive_description("project", "Website"),
            "Do you want to archive the Website project?"
        );
    }
}
