use chrono::NaiveDate;
use leptos::prelude::*;
use timesheet_core::hours::format_number;
use timesheet_core::timesheet::{CellKey, RowKey, TotalScope};

use super::TimeController;

/// One editable hours box
#[component]
pub(super) fn HoursCell(controller: TimeController, row: RowKey, day: NaiveDate) -> impl IntoView {
    let cell = CellKey::new(row, day);
    let text = move || {
        controller
            .sheet
            .with(|s| s.row(row).map(|r| r.text(day).to_string()).unwrap_or_default())
    };

    view! {
        <input
            class="hours-input"
            type="text"
            inputmode="decimal"
            placeholder="0"
            prop:value=text
            on:input=move |ev| {
                controller.edit(cell, &event_target_value(&ev));
            }
            on:blur=move |_| controller.blur(cell)
        />
    }
}

/// Client, project and task labels plus the row delete button
#[component]
pub(super) fn RowHeading(controller: TimeController, row: RowKey) -> impl IntoView {
    let labels = move || {
        controller.sheet.with(|s| {
            s.row(row)
                .map(|r| (r.project_name.clone(), r.client_name.clone(), r.task_name.clone()))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="row-heading">
            <div class="row-labels">
                <span class="row-project">{move || labels().0}</span>
                <span class="row-client">{move || format!("({})", labels().1)}</span>
                <span class="row-task">{move || labels().2}</span>
            </div>
            <button
                class="btn-icon row-delete"
                title="Delete row"
                on:click=move |_| controller.delete_target.set(Some(row))
            >
                "✕"
            </button>
        </div>
    }
}

#[component]
pub(super) fn RowTotal(controller: TimeController, row: RowKey, scope: Signal<TotalScope>) -> impl IntoView {
    view! {
        <span class="row-total">
            {move || format_number(controller.sheet.with(|s| s.row_total(row, scope.get())))}
        </span>
    }
}

/// Shown instead of the rows when the loaded week has none
#[component]
pub(super) fn EmptyWeek(controller: TimeController) -> impl IntoView {
    let prior_empty = move || controller.sheet.with(|s| s.prior_week_empty());

    view! {
        <div class="empty-week">
            <Show
                when=prior_empty
                fallback=move || view! {
                    <p>"No time entered"</p>
                    <button
                        class="btn btn-primary"
                        disabled=move || controller.loading.get()
                        on:click=move |_| controller.copy_prior_week()
                    >
                        "Copy Prior Week"
                    </button>
                }
            >
                <p>"No entries saved last week"</p>
                <button class="btn btn-primary" on:click=move |_| controller.add_row_open.set(true)>
                    "Add Project"
                </button>
            </Show>
        </div>
    }
}

/// "Saving..." while a flush is in flight; Save is only live with unsaved edits
#[component]
pub(super) fn SaveButton(controller: TimeController) -> impl IntoView {
    let label = move || if controller.saving.get() { "Saving..." } else { "Save" };

    view! {
        <button
            class="btn btn-positive save-button"
            disabled=move || controller.saving.get() || !controller.has_unsaved()
            on:click=move |_| controller.save()
        >
            {label}
        </button>
    }
}
