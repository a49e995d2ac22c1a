use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use timesheet_core::hours::format_number;
use timesheet_core::models::Task;

use super::{archive_description, ArchiveTarget, ArchivedToggle, ListTabs};
use crate::api;
use crate::components::{ConfirmModal, WaitLoader};
use crate::context::handle_service_error;
use crate::store::{store_add_task, store_remove_task, store_set_tasks, use_app_store, AppStateStoreFields, AppStore};

/// Fill the shared task catalog once per session
pub(crate) fn ensure_task_catalog(store: AppStore) {
    if store.task_catalog().read_untracked().is_fetched() {
        return;
    }
    spawn_local(async move {
        match api::get_tasks().await {
            Ok(tasks) => store_set_tasks(&store, tasks),
            Err(e) => handle_service_error(&store, &e),
        }
    });
}

fn rate_label(task: &Task) -> String {
    if !task.default_billable {
        "Non-billable".to_string()
    } else if task.default_rate == 0.0 {
        "Billable".to_string()
    } else {
        format!("${}/hr", format_number(task.default_rate))
    }
}

#[component]
pub fn TasksPage() -> impl IntoView {
    let store = use_app_store();
    let archived = RwSignal::new(false);
    let archived_tasks = RwSignal::new(Vec::<Task>::new());
    let loading = RwSignal::new(false);
    let target = RwSignal::new(None::<ArchiveTarget>);

    ensure_task_catalog(store);

    Effect::new(move |_| {
        if !archived.get() {
            return;
        }
        loading.set(true);
        spawn_local(async move {
            match api::get_archived_tasks().await {
                Ok(list) => archived_tasks.set(list),
                Err(e) => handle_service_error(&store, &e),
            }
            loading.set(false);
        });
    });

    let tasks = move || {
        if archived.get() {
            archived_tasks.get()
        } else {
            store.task_catalog().read().tasks().to_vec()
        }
    };

    let confirm_archive = move |_: ()| {
        let Some(ArchiveTarget { id, .. }) = target.get_untracked() else {
            return;
        };
        target.set(None);
        spawn_local(async move {
            match api::archive_task(id).await {
                Ok(()) => store_remove_task(&store, id),
                Err(e) => handle_service_error(&store, &e),
            }
        });
    };

    let restore = move |id: i64| {
        spawn_local(async move {
            match api::restore_task(id).await {
                Ok(()) => {
                    let restored = archived_tasks
                        .try_update(|list| {
                            let index = list.iter().position(|t| t.id == Some(id))?;
                            Some(list.remove(index))
                        })
                        .flatten();
                    // Only a catalog that was already fetched needs the task
                    if let Some(task) = restored.filter(|_| store.task_catalog().read_untracked().is_fetched()) {
                        store_add_task(&store, Task { archived: false, ..task });
                    }
                }
                Err(e) => handle_service_error(&store, &e),
            }
        });
    };

    view! {
        <div class="list-page tasks-list">
            <ListTabs />
            <div class="list-toolbar">
                <A href="/task/create" attr:class="btn btn-positive">"+ New Task"</A>
                <ArchivedToggle archived=archived />
            </div>

            <Show when=move || loading.get()>
                <WaitLoader message="Loading tasks..." />
            </Show>

            <div class="list-group">
                <For
                    each=tasks
                    key=|task| (task.id, task.name.clone(), task.default_billable, task.default_rate.to_bits())
                    children=move |task| {
                        let id = task.id.unwrap_or_default();
                        let name = task.name.clone();
                        let rate = rate_label(&task);
                        view! {
                            <div class="list-item">
                                <span class="list-item-name">{task.name}</span>
                                <span class="list-item-meta">{rate}</span>
                                <Show
                                    when=move || archived.get()
                                    fallback=move || {
                                        let name = name.clone();
                                        view! {
                                            <A href=format!("/task/edit/{}", id) attr:class="btn btn-small">"Edit"</A>
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
                    }
                />
            </div>

            <ConfirmModal
                open=Signal::derive(move || target.with(|t| t.is_some()))
                title="Archive Task?"
                description=Signal::derive(move || {
                    target.with(|t| t.as_ref().map(|t| archive_description("task", &t.name)).unwrap_or_default())
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

    #[test]
    fn test_rate_label() {
        let mut task = Task {
            name: "Dev".into(),
            default_billable: true,
            default_rate: 85.5,
            ..Default::default()
        };
        assert_eq!(rate_label(&task), "$85.5/hr");
        task.default_rate = 0.0;
        assert_eq!(rate_label(&task), "Billable");
        task.default_billable = false;
        assert_eq!(rate_label(&task), "Non-billable");
    }
}
