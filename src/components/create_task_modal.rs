//! Create Task Modal
//!
//! Inline task creation from the project editor. New tasks also land in the
//! global task catalog.

use leptos::prelude::*;
use leptos::task::spawn_local;
use timesheet_core::forms::TaskForm;
use timesheet_core::models::Task;

use crate::api;
use crate::components::WaitLoader;
use crate::context::handle_service_error;
use crate::store::{store_add_task, use_app_store};

#[component]
pub fn CreateTaskModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_success: Callback<Task>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();
    let form = RwSignal::new(TaskForm::default());
    let (name_error, set_name_error) = signal(false);
    let (loading, set_loading) = signal(false);

    let reset = move || {
        form.set(TaskForm::default());
        set_name_error.set(false);
    };

    let save = move |_| {
        let mut draft = form.get();
        draft.name = draft.name.trim().to_string();
        let task = match draft.validate() {
            Ok(task) => task,
            Err(_) => return set_name_error.set(true),
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::save_task(&task).await {
                Ok(created) => {
                    store_add_task(&store, created.clone());
                    on_success.run(created);
                    reset();
                }
                Err(e) => handle_service_error(&store, &e),
            }
            set_loading.set(false);
        });
    };

    let cancel = move |_| {
        on_cancel.run(());
        reset();
    };

    view! {
        <Show when=move || loading.get()>
            <WaitLoader message="Saving Task..." />
        </Show>
        <Show when=move || open.get() && !loading.get()>
            <div class="modal-backdrop inverted">
                <div class="modal">
                    <div class="modal-header">"Create Task"</div>
                    <div class="modal-content">
                        <form class="form" on:submit=|ev| ev.prevent_default()>
                            <div class="field">
                                <label>"Task Name"</label>
                                <input
                                    type="text"
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
                                    "Billable"
                                </label>
                            </div>
                            <div class="field">
                                <label>"Hourly Rate"</label>
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
                        </form>
                    </div>
                    <div class="modal-actions">
                        <button class="btn btn-primary" on:click=save>"Save"</button>
                        <button class="btn" on:click=cancel>"Cancel"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
