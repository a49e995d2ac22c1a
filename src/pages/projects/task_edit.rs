use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use timesheet_core::forms::TaskForm;
use timesheet_core::validation::TASK_NAME_MAX_LENGTH;

use crate::api;
use crate::components::WaitLoader;
use crate::context::{handle_service_error, use_navigate_to};
use crate::store::{store_add_task, store_update_task, use_app_store, AppStateStoreFields};

/// `/task/create` and `/task/edit/:id`
#[component]
pub fn TaskEditPage() -> impl IntoView {
    let store = use_app_store();
    let navigate_to = use_navigate_to();
    let params = use_params_map();
    let task_id = params.with_untracked(|p| p.get("id").and_then(|id| id.parse::<i64>().ok()));

    let form = RwSignal::new(TaskForm::default());
    let (name_error, set_name_error) = signal(false);
    let (busy, set_busy) = signal(task_id.is_some());

    if let Some(id) = task_id {
        spawn_local(async move {
            match api::get_task(id).await {
                Ok(task) => form.set(TaskForm::from_task(&task)),
                Err(e) => handle_service_error(&store, &e),
            }
            set_busy.set(false);
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut draft = form.get();
        draft.name = draft.name.trim().to_string();
        let task = match draft.validate() {
            Ok(task) => task,
            Err(_) => return set_name_error.set(true),
        };
        set_busy.set(true);
        spawn_local(async move {
            match api::save_task(&task).await {
                Ok(saved) => {
                    // An unfetched catalog picks the task up on its first load
                    if store.task_catalog().read_untracked().is_fetched() {
                        if task_id.is_some() {
                            store_update_task(&store, saved);
                        } else {
                            store_add_task(&store, saved);
                        }
                    }
                    navigate_to.run("/tasks".to_string());
                }
                Err(e) => handle_service_error(&store, &e),
            }
            set_busy.set(false);
        });
    };

    let title = if task_id.is_some() { "Edit Task" } else { "Create Task" };

    view! {
        <div class="edit-page task-edit">
            <Show when=move || busy.get()>
                <WaitLoader message="Saving Task..." />
            </Show>
            <h2 class="header">{title}</h2>
            <form class="form" on:submit=on_submit>
                <div class="field">
                    <label>"Task Name"</label>
                    <input
                        type="text"
                        maxlength=TASK_NAME_MAX_LENGTH
                        class:error=move || name_error.get()
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| {
                            set_name_error.set(false);
                            form.update(|f| f.name = event_target_value(&ev));
                        }
                    />
                </div>
                <div class="field checkbox">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.default_billable)
                            on:change=move |ev| form.update(|f| f.default_billable = event_target_checked(&ev))
                        />
                        "Billable by default"
                    </label>
                </div>
                <div class="field">
                    <label>"Default Hourly Rate"</label>
                    <div class="input-icon">
                        <span class="icon">"$"</span>
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.rate.clone())
                            prop:disabled=move || !form.with(|f| f.default_billable)
                            on:input=move |ev| form.update(|f| f.set_rate(&event_target_value(&ev)))
                            on:blur=move |_| form.update(|f| f.blur_rate())
                        />
                    </div>
                </div>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">"Save"</button>
                    <button type="button" class="btn" on:click=move |_| navigate_to.run("/tasks".to_string())>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
