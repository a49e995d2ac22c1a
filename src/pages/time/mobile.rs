//! Single-day layout for phones: a strip of the loaded days and the current
//! day's cells

use leptos::prelude::*;
use timesheet_core::hours::format_number;
use timesheet_core::timesheet::TotalScope;

use super::grid::{EmptyWeek, HoursCell, RowHeading, RowTotal, SaveButton};
use super::TimeController;

#[component]
fn DayStrip(controller: TimeController) -> impl IntoView {
    let sheet = controller.sheet;

    view! {
        <div class="day-strip">
            <button class="btn-icon" title="Previous day" on:click=move |_| controller.previous_day()>"‹"</button>
            <For
                each=move || sheet.with(|s| s.days())
                key=|day| *day
                children=move |day| {
                    let current = move || sheet.with(|s| s.current() == day);
                    let initial = day.format("%a").to_string().chars().next().unwrap_or_default();
                    view! {
                        <button
                            class="strip-day"
                            class:current=current
                            on:click=move |_| controller.select_day(day)
                        >
                            <span class="weekday">{initial.to_string()}</span>
                            <span class="day-total">{move || format_number(sheet.with(|s| s.day_total(day)))}</span>
                        </button>
                    }
                }
            />
            <button class="btn-icon" title="Next day" on:click=move |_| controller.next_day()>"›"</button>
        </div>
    }
}

#[component]
pub(super) fn MobileDay(controller: TimeController) -> impl IntoView {
    let sheet = controller.sheet;
    let current = move || sheet.with(|s| s.current());
    let day_scope = Signal::derive(move || TotalScope::Day(current()));
    let row_keys = move || sheet.with(|s| s.rows().iter().map(|r| r.key).collect::<Vec<_>>());

    view! {
        <div class="time-page mobile">
            <h2 class="day-title">{move || current().format("%A, %b %-d").to_string()}</h2>
            <DayStrip controller=controller />

            <Show when=move || !sheet.with(|s| s.is_empty()) fallback=move || view! { <EmptyWeek controller=controller /> }>
                <div class="day-rows">
                    <For
                        each=row_keys
                        key=|row| *row
                        children=move |row| {
                            view! {
                                <div class="day-row">
                                    <RowHeading controller=controller row=row />
                                    // Re-keyed on the day so the input follows the strip
                                    {move || {
                                        let day = current();
                                        view! { <HoursCell controller=controller row=row day=day /> }
                                    }}
                                    <RowTotal controller=controller row=row scope=day_scope />
                                </div>
                            }
                        }
                    />
                </div>
                <div class="day-total-line">
                    "Total "
                    {move || format_number(sheet.with(|s| s.grand_total(day_scope.get())))}
                </div>
            </Show>

            <div class="mobile-footer">
                <button class="btn btn-round" on:click=move |_| controller.add_row_open.set(true)>"+"</button>
                <SaveButton controller=controller />
            </div>
        </div>
    }
}
