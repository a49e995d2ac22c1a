//! Week layout: one column per day of the loaded range

use leptos::prelude::*;
use timesheet_core::dates::{parse_short_date, short_date};
use timesheet_core::hours::format_number;
use timesheet_core::timesheet::TotalScope;

use super::grid::{EmptyWeek, HoursCell, RowHeading, RowTotal, SaveButton};
use super::TimeController;

#[component]
fn WeekHeader(controller: TimeController) -> impl IntoView {
    let sheet = controller.sheet;
    let title = move || {
        sheet.with(|s| {
            format!(
                "{} - {}",
                s.start().format("%b %-d, %Y"),
                s.end().format("%b %-d, %Y")
            )
        })
    };
    let picked = move || sheet.with(|s| short_date(s.current()));

    view! {
        <div class="week-header">
            <div class="week-arrows">
                <button class="btn-icon" title="Previous week" on:click=move |_| controller.previous_week()>"‹"</button>
                <button class="btn-icon" title="Next week" on:click=move |_| controller.next_week()>"›"</button>
            </div>
            <h2 class="week-title">{title}</h2>
            <div class="week-actions">
                <button
                    class="btn"
                    disabled=move || sheet.with(|s| s.is_current_week())
                    on:click=move |_| controller.this_week()
                >
                    "This Week"
                </button>
                <input
                    type="date"
                    class="week-date"
                    prop:value=picked
                    on:change=move |ev| {
                        if let Some(day) = parse_short_date(&event_target_value(&ev)) {
                            controller.pick_date(day);
                        }
                    }
                />
            </div>
        </div>
    }
}

#[component]
pub(super) fn DesktopWeek(controller: TimeController) -> impl IntoView {
    let sheet = controller.sheet;
    let days = move || sheet.with(|s| s.days());
    let row_keys = move || sheet.with(|s| s.rows().iter().map(|r| r.key).collect::<Vec<_>>());
    let week_scope = Signal::derive(|| TotalScope::Week);

    view! {
        <div class="time-page desktop">
            <WeekHeader controller=controller />

            <Show when=move || !sheet.with(|s| s.is_empty()) fallback=move || view! { <EmptyWeek controller=controller /> }>
                <table class="time-grid">
                    <thead>
                        <tr>
                            <th class="row-heading-cell"></th>
                            <For
                                each=days
                                key=|day| *day
                                children=move |day| {
                                    let today = move || sheet.with(|s| s.today() == day);
                                    view! {
                                        <th class:today=today>
                                            <span class="weekday">{day.format("%a").to_string()}</span>
                                            <span class="day-date">{day.format("%b %-d").to_string()}</span>
                                        </th>
                                    }
                                }
                            />
                            <th class="total-cell">"Total"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=row_keys
                            key=|row| *row
                            children=move |row| {
                                view! {
                                    <tr>
                                        <td><RowHeading controller=controller row=row /></td>
                                        <For
                                            each=days
                                            key=|day| *day
                                            children=move |day| view! {
                                                <td><HoursCell controller=controller row=row day=day /></td>
                                            }
                                        />
                                        <td class="total-cell">
                                            <RowTotal controller=controller row=row scope=week_scope />
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                    <tfoot>
                        <tr>
                            <td></td>
                            <For
                                each=days
                                key=|day| *day
                                children=move |day| view! {
                                    <td class="day-total">{move || format_number(sheet.with(|s| s.day_total(day)))}</td>
                                }
                            />
                            <td class="total-cell grand-total">
                                {move || format_number(sheet.with(|s| s.grand_total(TotalScope::Week)))}
                            </td>
                        </tr>
                    </tfoot>
                </table>
            </Show>

            <div class="time-actions">
                <button class="btn" on:click=move |_| controller.add_row_open.set(true)>"+ Project"</button>
                <SaveButton controller=controller />
            </div>
        </div>
    }
}
