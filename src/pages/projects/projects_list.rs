use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use timesheet_core::models::Project;

use super::{archive_description, ArchiveTarget, ArchivedToggle, ListTabs};
use crate::api;
use crate::components::{ConfirmModal, WaitLoader};
use crate::context::handle_service_error;
use crate::store::use_app_store;

/// Projects grouped under their client, keeping the server's order
fn group_by_client(projects: Vec<Project>) -> Vec<(String, Vec<Project>)> {
    let mut groups: Vec<(String, Vec<Project>)> = Vec::new();
    for project in projects {
        match groups.iter_mut().find(|(client, _)| *client == project.client_name) {
            Some((_, list)) => list.push(project),
            None => groups.push((project.client_name.clone(), vec![project])),
        }
    }
    groups
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let store = use_app_store();
    let archived = RwSignal::new(false);
    let projects = RwSignal::new(Vec::<Project>::new());
    let loading = RwSignal::new(false);
    let target = RwSignal::new(None::<ArchiveTarget>);

    // Refetch whenever the Active / Archived switch flips
    Effect::new(move |_| {
        let show_archived = archived.get();
        loading.set(true);
        spawn_local(async move {
            let result = if show_archived {
                api::get_archived_projects().await
            } else {
                api::get_projects().await
            };
            match result {
                Ok(list) => projects.set(list),
                Err(e) => handle_service_error(&store, &e),
            }
            loading.set(false);
        });
    });

    let remove = move |id: i64| projects.update(|list| list.retain(|p| p.id != id));

    let confirm_archive = move |_: ()| {
        let Some(ArchiveTarget { id, .. }) = target.get_untracked() else {
            return;
        };
        target.set(None);
        spawn_local(async move {
            match api::archive_project(id).await {
                Ok(()) => remove(id),
                Err(e) => handle_service_error(&store, &e),
            }
        });
    };

    let restore = move |id: i64| {
        spawn_local(async move {
            match api::restore_project(id).await {
                Ok(()) => remove(id),
                Err(e) => handle_service_error(&store, &e),
            }
        });
    };

    let groups = move || group_by_client(projects.get());

    view! {
        <div class="list-page projects-list">
            <ListTabs />
            <div class="list-toolbar">
                <A href="/projects/create" attr:class="btn btn-positive">"+ New Project"</A>
                <ArchivedToggle archived=archived />
            </div>

            <Show when=move || loading.get()>
                <WaitLoader message="Loading projects..." />
            </Show>
            <Show when=move || !loading.get() && projects.with(|p| p.is_empty())>
                <p class="empty-list">
                    {move || if archived.get() { "No archived projects" } else { "No projects yet" }}
                </p>
            </Show>

            <For
                each=groups
                key=|(client, list)| (client.clone(), list.iter().map(|p| p.id).collect::<Vec<_>>())
                children=move |(client, list)| {
                    view! {
                        <div class="list-group">
                            <h3 class="list-group-header">{client}</h3>
                            {list
                                .into_iter()
                                .map(|project| {
                                    let id = project.id;
                                    let name = project.name.clone();
                                    view! {
                                        <div class="list-item">
                                            <span class="list-item-name">{project.name}</span>
                                            <Show
                                                when=move || archived.get()
                                                fallback=move || {
                                                    let name = name.clone();
                                                    view! {
                                                        <A href=format!("/projects/edit/{}", id) attr:class="btn btn-small">"Edit"</A>
                                                        <button
                                                            class="btn btn-small"
                                                            on:click=move |_| target.set(Some(ArchiveTarget { id, name: name.clone() }))
                                                        >
                                                            "Archive"
                                                        </button>
                                                    }
                                                }
                                            >
                                                <button class="btn btn-small" on:click=move |_| restore(id)>"Restore"</button>
                                            </Show>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                }
            />

            <ConfirmModal
                open=Signal::derive(move || target.with(|t| t.is_some()))
                title="Archive Project?"
                description=Signal::derive(move || {
                    target.with(|t| t.as_ref().map(|t| archive_description("project", &t.name)).unwrap_or_default())
                })
                on_confirm=confirm_archive
                on_cancel=move |_: ()| target.set(None)
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: i64, client: &str) -> Project {
        Project {
            id,
            name: format!("P{}", id),
            client_name: client.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_group_by_client_keeps_order() {
        let groups = group_by_client(vec![
            project(1, "Beta"),
            project(2, "Acme"),
            project(3, "Beta"),
        ]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Beta");
        assert_eq!(groups[0].1.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(groups[1].0, "Acme");
    }
}
