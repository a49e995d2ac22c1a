//! Add Project Modal
//!
//! Client → project → task dropdowns for adding a row to the time grid.

use leptos::prelude::*;
use timesheet_core::picker::{PickerOption, ProjectPicker};
use timesheet_core::timesheet::TimeRow;

fn selected_id(ev: &leptos::ev::Event) -> Option<i64> {
    event_target_value(ev).parse().ok()
}

#[component]
fn PickerSelect(
    label: &'static str,
    #[prop(into)] options: Signal<Vec<PickerOption>>,
    #[prop(into)] selected: Signal<Option<i64>>,
    #[prop(into)] on_select: Callback<i64>,
) -> impl IntoView {
    view! {
        <div class="field inline">
            <label class="picker-label">{label}</label>
            <select
                prop:value=move || selected.get().map(|id| id.to_string()).unwrap_or_default()
                on:change=move |ev| {
                    if let Some(id) = selected_id(&ev) {
                        on_select.run(id);
                    }
                }
            >
                <option value="" disabled=true>{label}</option>
                <For
                    each=move || options.get()
                    key=|option| option.id
                    children=move |option| {
                        view! { <option value=option.id.to_string()>{option.name}</option> }
                    }
                />
            </select>
        </div>
    }
}

#[component]
pub fn AddRowModal(
    #[prop(into)] open: Signal<bool>,
    picker: RwSignal<ProjectPicker>,
    #[prop(into)] on_save: Callback<TimeRow>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let clients = Signal::derive(move || {
        picker.with(|p| {
            p.clients()
                .iter()
                .map(|c| PickerOption { id: c.id, name: c.name.clone() })
                .collect::<Vec<_>>()
        })
    });
    let projects = Signal::derive(move || {
        picker.with(|p| {
            p.projects()
                .iter()
                .map(|pr| PickerOption { id: pr.id, name: pr.name.clone() })
                .collect::<Vec<_>>()
        })
    });
    let tasks = Signal::derive(move || picker.with(|p| p.tasks().to_vec()));

    let client_id = Signal::derive(move || picker.with(|p| p.client().map(|c| c.id)));
    let project_id = Signal::derive(move || picker.with(|p| p.project().map(|pr| pr.id)));
    let task_id = Signal::derive(move || picker.with(|p| p.task().map(|t| t.id)));

    let save = move |_| match picker.with(|p| p.selected_row()) {
        Some(row) => on_save.run(row),
        None => log::warn!("No project and task selected"),
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="modal modal-tiny project-task-modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">"Add Project"</div>
                    <div class="modal-content">
                        <form class="form" on:submit=|ev| ev.prevent_default()>
                            <PickerSelect
                                label="Client"
                                options=clients
                                selected=client_id
                                on_select=move |id: i64| picker.update(|p| p.select_client(id))
                            />
                            <PickerSelect
                                label="Project"
                                options=projects
                                selected=project_id
                                on_select=move |id: i64| picker.update(|p| p.select_project(id))
                            />
                            <PickerSelect
                                label="Task"
                                options=tasks
                                selected=task_id
                                on_select=move |id: i64| picker.update(|p| p.select_task(id))
                            />
                        </form>
                    </div>
                    <div class="modal-actions">
                        <button class="btn btn-positive" on:click=save>"Save"</button>
                        <button class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
