//! Create/update a project: client, name and the tasks it carries with
//! per-project billable flag and rate

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use timesheet_core::forms::{FormError, ProjectForm, ProjectTaskDraft};
use timesheet_core::models::{Client, Task};
use timesheet_core::validation::PROJECT_NAME_MAX_LENGTH;

use super::tasks_list::ensure_task_catalog;
use crate::api;
use crate::components::{CreateClientModal, CreateTaskModal, WaitLoader};
use crate::context::{handle_service_error, use_navigate_to};
use crate::store::{use_app_store, AppStateStoreFields};

const NEW_CLIENT: &str = "new";

#[component]
fn ProjectTaskRows(form: RwSignal<ProjectForm>) -> impl IntoView {
    let task_ids = move || form.with(|f| f.tasks().iter().map(|t| t.id).collect::<Vec<_>>());

    view! {
        <table class="project-tasks">
            <thead>
                <tr>
                    <th>"Task"</th>
                    <th>"Billable"</th>
                    <th>"Rate"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=task_ids
                    key=|id| *id
                    children=move |id| {
                        let field = move |read: fn(&ProjectTaskDraft) -> String| {
                            form.with(|f| f.tasks().iter().find(|t| t.id == id).map(read).unwrap_or_default())
                        };
                        let billable = move || form.with(|f| f.tasks().iter().any(|t| t.id == id && t.billable));
                        view! {
                            <tr>
                                <td>{move || field(|t| t.name.clone())}</td>
                                <td>
                                    <input
                                        type="checkbox"
                                        prop:checked=billable
                                        on:change=move |ev| form.update(|f| f.set_billable(id, event_target_checked(&ev)))
                                    />
                                </td>
                                <td>
                                    <div class="input-icon">
                                        <span class="icon">"$"</span>
                                        <input
                                            type="text"
                                            prop:value=move || field(|t| t.rate.clone())
                                            prop:disabled=move || !billable()
                                            on:input=move |ev| form.update(|f| f.set_rate(id, &event_target_value(&ev)))
                                            on:blur=move |_| form.update(|f| f.blur_rate(id))
                                        />
                                    </div>
                                </td>
                                <td>
                                    <button type="button" class="btn-icon" title="Remove task" on:click=move |_| form.update(|f| f.remove_task(id))>
                                        "✕"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

/// `/projects/create` and `/projects/edit/:id`
#[component]
pub fn ProjectEditPage() -> impl IntoView {
    let store = use_app_store();
    let navigate_to = use_navigate_to();
    let params = use_params_map();
    let project_id = params.with_untracked(|p| p.get("id").and_then(|id| id.parse::<i64>().ok()));

    let form = RwSignal::new(ProjectForm::default());
    let clients = RwSignal::new(Vec::<Client>::new());
    let form_error = RwSignal::new(None::<FormError>);
    let (busy, set_busy) = signal(true);
    let client_modal = RwSignal::new(false);
    let task_modal = RwSignal::new(false);

    ensure_task_catalog(store);

    spawn_local(async move {
        match api::get_clients().await {
            Ok(list) => clients.set(list),
            Err(e) => handle_service_error(&store, &e),
        }
        if let Some(id) = project_id {
            match api::get_project(id).await {
                Ok(project) => form.set(ProjectForm::from_project(&project)),
                Err(e) => handle_service_error(&store, &e),
            }
        }
        set_busy.set(false);
    });

    // Catalog tasks not yet on the project
    let available_tasks = move || {
        let attached: Vec<i64> = form.with(|f| f.tasks().iter().map(|t| t.id).collect());
        store
            .task_catalog()
            .read()
            .tasks()
            .iter()
            .filter(|t| t.id.is_some_and(|id| !attached.contains(&id)))
            .cloned()
            .collect::<Vec<Task>>()
    };

    let on_client_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        if value == NEW_CLIENT {
            client_modal.set(true);
            return;
        }
        let picked = value
            .parse::<i64>()
            .ok()
            .and_then(|id| clients.with(|list| list.iter().find(|c| c.id == Some(id)).cloned()));
        if let Some(client) = picked {
            form_error.set(None);
            form.update(|f| f.select_client(&client));
        }
    };

    let on_task_pick = move |ev: leptos::ev::Event| {
        let Ok(id) = event_target_value(&ev).parse::<i64>() else {
            return;
        };
        let task = store.task_catalog().read_untracked().get(id).cloned();
        if let Some(task) = task {
            form.update(|f| {
                f.add_task(&task);
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| f.name = f.name.trim().to_string());
        let body = match form.with(|f| f.validate()) {
            Ok(body) => body,
            Err(e) => return form_error.set(Some(e)),
        };
        set_busy.set(true);
        spawn_local(async move {
            match api::save_project(&body).await {
                Ok(saved) => {
                    log::info!("Saved project {}", saved.id);
                    navigate_to.run("/projects".to_string());
                }
                Err(e) => handle_service_error(&store, &e),
            }
            set_busy.set(false);
        });
    };

    let title = if project_id.is_some() { "Edit Project" } else { "Create Project" };
    let selected_client = move || form.with(|f| f.client_id.map(|id| id.to_string()).unwrap_or_default());

    view! {
        <div class="edit-page project-edit">
            <Show when=move || busy.get()>
                <WaitLoader message="Loading Project..." />
            </Show>
            <h2 class="header">{title}</h2>
            <form class="form" on:submit=on_submit>
                <div class="field">
                    <label>"Client"</label>
                    <select
                        class:error=move || form_error.get() == Some(FormError::ClientRequired)
                        prop:value=selected_client
                        on:change=on_client_change
                    >
                        <option value="" disabled=true>"Select Client"</option>
                        <For
                            each=move || clients.get()
                            key=|client| client.id
                            children=|client| view! {
                                <option value=client.id.map(|id| id.to_string()).unwrap_or_default()>{client.name}</option>
                            }
                        />
                        <option value=NEW_CLIENT>"+ New Client"</option>
                    </select>
                </div>
                <div class="field">
                    <label>"Project Name"</label>
                    <input
                        type="text"
                        maxlength=PROJECT_NAME_MAX_LENGTH
                        class:error=move || form_error.get() == Some(FormError::InvalidName)
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| {
                            form_error.set(None);
                            form.update(|f| f.name = event_target_value(&ev));
                        }
                    />
                </div>
                <Show when=move || form_error.get().is_some()>
                    <div class="message negative">{move || form_error.get().map(|e| e.to_string())}</div>
                </Show>

                <h3 class="header">"Tasks"</h3>
                <ProjectTaskRows form=form />
                <div class="field inline add-task">
                    <select prop:value="" on:change=on_task_pick>
                        <option value="">"Add Task..."</option>
                        <For
                            each=available_tasks
                            key=|task| task.id
                            children=|task| view! {
                                <option value=task.id.map(|id| id.to_string()).unwrap_or_default()>{task.name}</option>
                            }
                        />
                    </select>
                    <button type="button" class="btn" on:click=move |_| task_modal.set(true)>"+ New Task"</button>
                </div>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">"Save"</button>
                    <button type="button" class="btn" on:click=move |_| navigate_to.run("/projects".to_string())>
                        "Cancel"
                    </button>
                </div>
            </form>

            <CreateClientModal
                open=client_modal
                on_success=move |client: Client| {
                    client_modal.set(false);
                    clients.update(|list| list.push(client.clone()));
                    form.update(|f| f.select_client(&client));
                    form_error.set(None);
                }
                on_cancel=move |_: ()| {
                    client_modal.set(false);
                    // Puts the select back on the current client
                    form.notify();
                }
            />
            <CreateTaskModal
                open=task_modal
                on_success=move |task: Task| {
                    task_modal.set(false);
                    form.update(|f| {
                        f.add_task(&task);
                    });
                }
                on_cancel=move |_: ()| task_modal.set(false)
            />
        </div>
    }
}
