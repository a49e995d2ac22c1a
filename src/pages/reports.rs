//! Reports Page
//!
//! Billable and non-billable hours per project, client, task or person over
//! a selectable period, with CSV export.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use timesheet_core::dates::{parse_short_date, short_date};
use timesheet_core::hours::format_number;
use timesheet_core::models::ReportRow;
use timesheet_core::report::{
    format_currency, format_hours_total, BillableTotals, ReportKind, ReportPeriod, TimeRange,
};

use crate::api;
use crate::browser;
use crate::components::WaitLoader;
use crate::context::handle_service_error;
use crate::mobile::use_is_mobile;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn ReportTabs(#[prop(into)] kind: Signal<ReportKind>) -> impl IntoView {
    view! {
        <div class="menu tabular">
            {ReportKind::ALL
                .into_iter()
                .map(|tab| {
                    let class = move || if kind.get() == tab { "item active" } else { "item" };
                    view! { <A href=tab.path() attr:class=class>{tab.label()}</A> }
                })
                .collect_view()}
        </div>
    }
}

/// Range select, period heading, prev/next arrows and custom dates
#[component]
fn PeriodControls(period: RwSignal<ReportPeriod>, week_start: Signal<u8>) -> impl IntoView {
    let on_range = move |ev: leptos::ev::Event| {
        if let Some(range) = TimeRange::from_key(&event_target_value(&ev)) {
            period.set(ReportPeriod::containing(range, browser::today(), week_start.get_untracked()));
        }
    };
    let navigable = move || period.with(|p| p.range.is_navigable());
    let custom = move || period.with(|p| p.range == TimeRange::Custom);

    let set_from = move |ev: leptos::ev::Event| {
        if let Some(day) = parse_short_date(&event_target_value(&ev)) {
            period.update(|p| p.from = day.min(p.to));
        }
    };
    let set_to = move |ev: leptos::ev::Event| {
        if let Some(day) = parse_short_date(&event_target_value(&ev)) {
            period.update(|p| p.to = day.max(p.from));
        }
    };

    view! {
        <div class="report-period">
            <select prop:value=move || period.with(|p| p.range.key()) on:change=on_range>
                {TimeRange::OPTIONS
                    .into_iter()
                    .map(|range| view! { <option value=range.key()>{range.label()}</option> })
                    .collect_view()}
            </select>
            <Show when=navigable>
                <button class="btn-icon" title="Previous" on:click=move |_| period.update(|p| *p = p.shift(-1))>"‹"</button>
                <button class="btn-icon" title="Next" on:click=move |_| period.update(|p| *p = p.shift(1))>"›"</button>
            </Show>
            <span class="period-title">{move || period.with(|p| p.display())}</span>
            <Show when=custom>
                <div class="custom-range">
                    <input type="date" prop:value=move || period.with(|p| short_date(p.from)) on:change=set_from />
                    <span>"to"</span>
                    <input type="date" prop:value=move || period.with(|p| short_date(p.to)) on:change=set_to />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ReportTable(kind: Signal<ReportKind>, rows: RwSignal<Vec<ReportRow>>) -> impl IntoView {
    let is_mobile = use_is_mobile();
    let totals = move || rows.with(|r| BillableTotals::from_rows(r));
    let client_column = move || kind.get().shows_client() && !is_mobile.get();
    let total_colspan = move || kind.get().total_colspan(is_mobile.get());

    view! {
        <table class="report-table">
            <thead>
                <tr>
                    <Show when=client_column>
                        <th>"Client Name"</th>
                    </Show>
                    <th>"Name"</th>
                    <th class="numeric">"Billable Hours"</th>
                    <th class="numeric">"Non-Billable Hours"</th>
                    <th class="numeric">"Billable Amount"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || rows.get()
                    key=move |row| kind.with_untracked(|k| (k.key(), k.row_id(row)))
                    children=move |row| {
                        let (name, shows_client) =
                            kind.with_untracked(|k| (k.row_name(&row), k.shows_client()));
                        let client = row.client_name.clone().unwrap_or_default();
                        let stacked_client = client.clone();
                        view! {
                            <tr>
                                <Show when=move || shows_client && !is_mobile.get()>
                                    <td>{client.clone()}</td>
                                </Show>
                                <td>
                                    <Show when=move || shows_client && is_mobile.get()>
                                        <div class="report-client">{stacked_client.clone()}</div>
                                    </Show>
                                    {name}
                                </td>
                                <td class="numeric">{format_number(row.billable_hours)}</td>
                                <td class="numeric">{format_number(row.non_billable_hours)}</td>
                                <td class="numeric">{format_currency(row.billable_total)}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
            <tfoot>
                <tr>
                    <td colspan=move || total_colspan().to_string()>"Total"</td>
                    <td class="numeric">{move || format_hours_total(totals().billable_hours)}</td>
                    <td class="numeric">{move || format_hours_total(totals().non_billable_hours)}</td>
                    <td class="numeric">{move || format_currency(totals().billable_total)}</td>
                </tr>
            </tfoot>
        </table>
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let store = use_app_store();
    let location = use_location();
    let kind = Signal::derive(move || ReportKind::from_path(&location.pathname.get()));
    let week_start = Signal::derive(move || store.session().read().week_start);

    let period = RwSignal::new(ReportPeriod::containing(
        TimeRange::default(),
        browser::today(),
        week_start.get_untracked(),
    ));
    let rows = RwSignal::new(Vec::<ReportRow>::new());
    let (loading, set_loading) = signal(false);
    let (exporting, set_exporting) = signal(false);
    // Bumped per request so a slow response for an old tab or period is ignored
    let request_seq = StoredValue::new(0u64);

    Effect::new(move |_| {
        let (kind, period) = (kind.get(), period.get());
        let Some(ticket) = request_seq.try_update_value(|seq| {
            *seq += 1;
            *seq
        }) else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            let result = api::get_report(kind, &period, None).await;
            if request_seq.try_get_value() != Some(ticket) {
                return;
            }
            match result {
                Ok(list) => rows.set(list),
                Err(e) => {
                    rows.set(Vec::new());
                    handle_service_error(&store, &e);
                }
            }
            set_loading.set(false);
        });
    });

    let export = move |_| {
        let (kind, period) = (kind.get_untracked(), period.get_untracked());
        let filename = period.csv_filename(&store.session().read_untracked().company);
        set_exporting.set(true);
        spawn_local(async move {
            match api::export_report(kind, &period).await {
                Ok(bytes) => {
                    if let Err(e) = browser::download_csv(&bytes, &filename) {
                        log::error!("CSV download failed: {}", e);
                    }
                }
                Err(e) => handle_service_error(&store, &e),
            }
            set_exporting.set(false);
        });
    };

    view! {
        <div class="reports-page">
            <ReportTabs kind=kind />
            <div class="report-toolbar">
                <PeriodControls period=period week_start=week_start />
                <button class="btn" disabled=move || exporting.get() on:click=export>
                    {move || if exporting.get() { "Exporting..." } else { "Export CSV" }}
                </button>
            </div>
            <Show when=move || loading.get()>
                <WaitLoader message="Loading report..." />
            </Show>
            <Show
                when=move || !rows.with(|r| r.is_empty())
                fallback=move || view! {
                    <p class="empty-list">{move || (!loading.get()).then_some("No time recorded for this period")}</p>
                }
            >
                <ReportTable kind=kind rows=rows />
            </Show>
        </div>
    }
}
