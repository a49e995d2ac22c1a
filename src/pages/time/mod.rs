//! Time Page
//!
//! Weekly time-entry grid. Edits are buffered in the [`WeekSheet`] and flushed
//! in one request after a quiet period, on Save, or before the loaded range
//! is left.

mod desktop;
mod grid;
mod mobile;

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_debounce::{use_debouncer, Debouncer};
use leptos_router::hooks::use_location;
use timesheet_core::dates::{start_date_from_path, time_path, TIME_BASE_URL};
use timesheet_core::picker::ProjectPicker;
use timesheet_core::timesheet::{CellKey, DayStep, RowKey, TimeRow, WeekSheet};

use crate::api;
use crate::browser;
use crate::components::{AddRowModal, ConfirmModal, WaitLoader};
use crate::config::AUTOSAVE_DELAY_MS;
use crate::context::{handle_service_error, use_navigate_to};
use crate::mobile::use_is_mobile;
use crate::store::{use_app_store, AppStore};

use desktop::DesktopWeek;
use mobile::MobileDay;

/// Page state and actions shared by the desktop and mobile layouts
#[derive(Clone, Copy)]
pub(crate) struct TimeController {
    pub sheet: RwSignal<WeekSheet>,
    pub loading: RwSignal<bool>,
    /// False until the first week load has finished
    pub ready: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub add_row_open: RwSignal<bool>,
    pub delete_target: RwSignal<Option<RowKey>>,
    store: AppStore,
    autosave: Debouncer,
    navigate_to: Callback<String>,
}

impl TimeController {
    fn new(store: AppStore, navigate_to: Callback<String>) -> Self {
        Self {
            sheet: RwSignal::new(WeekSheet::new(browser::today())),
            loading: RwSignal::new(false),
            ready: RwSignal::new(false),
            saving: RwSignal::new(false),
            add_row_open: RwSignal::new(false),
            delete_target: RwSignal::new(None),
            store,
            autosave: use_debouncer(AUTOSAVE_DELAY_MS),
            navigate_to,
        }
    }

    // ========================
    // Loading
    // ========================

    /// Load the week containing `day`, making `day` current
    fn load_week(self, day: NaiveDate) {
        let Some(ticket) = self.sheet.try_update(|s| {
            s.set_today(browser::today());
            s.begin_load()
        }) else {
            return;
        };
        self.loading.set(true);

        spawn_local(async move {
            let result = api::get_week(Some(day)).await;
            // Stale, or the page unmounted while the request was out
            let latest = self
                .sheet
                .try_with_untracked(|s| s.is_latest(ticket))
                .unwrap_or(false);
            if !latest {
                log::debug!("Dropping week load for {}", day);
                return;
            }
            match result {
                Ok(week) => {
                    self.sheet.update(|s| {
                        s.load(ticket, week, day);
                    });
                }
                Err(e) => {
                    handle_service_error(&self.store, &e);
                    self.sheet.update(|s| s.load_failed(ticket));
                }
            }
            self.loading.set(false);
            self.ready.set(true);
        });
    }

    /// React to a route change: move within the loaded range or load another
    fn follow_path(self, pathname: &str, first_visit: bool) {
        let day = start_date_from_path(pathname, browser::today());
        let moved = !first_visit && self.sheet.try_update(|s| s.set_current(day)).unwrap_or(false);
        if !moved {
            self.load_week(day);
        }
    }

    // ========================
    // Saving
    // ========================

    /// Flush unsaved edits. Resolves to false when the save failed.
    async fn flush(self) -> bool {
        self.autosave.cancel();
        let batch = self.sheet.with_untracked(|s| s.pending_batch());
        if batch.is_empty() {
            return true;
        }

        log::debug!("Saving {} time entries", batch.len());
        self.saving.set(true);
        let result = api::save_entries(&batch.request()).await;
        self.saving.set(false);

        match result {
            Ok(()) => {
                self.sheet.update(|s| s.acknowledge(&batch));
                true
            }
            Err(e) => {
                handle_service_error(&self.store, &e);
                false
            }
        }
    }

    pub fn save(self) {
        spawn_local(async move {
            self.flush().await;
        });
    }

    pub fn has_unsaved(self) -> bool {
        self.sheet.with(|s| s.has_unsaved())
    }

    // ========================
    // Editing
    // ========================

    /// Record typed text and restart the autosave timer. Returns the text the
    /// cell should now show.
    pub fn edit(self, cell: CellKey, raw: &str) -> Option<String> {
        let text = self.sheet.try_update(|s| s.edit(cell, raw)).flatten()?;
        self.autosave.schedule(move || self.save());
        Some(text)
    }

    pub fn blur(self, cell: CellKey) {
        self.sheet.update(|s| s.blur(cell));
    }

    // ========================
    // Navigation
    // ========================

    /// Leave the loaded range once unsaved edits are stored; stay put if the
    /// save fails
    fn leave_to(self, path: String) {
        spawn_local(async move {
            if self.flush().await {
                self.navigate_to.run(path);
            } else {
                log::warn!("Not leaving the week: saving failed");
            }
        });
    }

    pub fn previous_week(self) {
        let start = self.sheet.with_untracked(|s| s.week_shift(-7));
        self.leave_to(time_path(start));
    }

    pub fn next_week(self) {
        let start = self.sheet.with_untracked(|s| s.week_shift(7));
        self.leave_to(time_path(start));
    }

    pub fn this_week(self) {
        if !self.sheet.with_untracked(|s| s.is_current_week()) {
            self.leave_to(TIME_BASE_URL.to_string());
        }
    }

    pub fn pick_date(self, day: NaiveDate) {
        self.leave_to(time_path(day));
    }

    fn step(self, step: DayStep) {
        match step {
            DayStep::Within(day) => self.select_day(day),
            DayStep::Leave(start) => self.leave_to(time_path(start)),
        }
    }

    pub fn previous_day(self) {
        self.step(self.sheet.with_untracked(|s| s.previous_day()));
    }

    pub fn next_day(self) {
        self.step(self.sheet.with_untracked(|s| s.next_day()));
    }

    /// Make a day of the loaded range current
    pub fn select_day(self, day: NaiveDate) {
        if self.sheet.with_untracked(|s| s.current()) == day {
            return;
        }
        if self.sheet.try_update(|s| s.set_current(day)).unwrap_or(false) {
            self.navigate_to.run(time_path(day));
        }
    }

    // ========================
    // Rows
    // ========================

    pub fn copy_prior_week(self) {
        let range = self.sheet.with_untracked(|s| s.range(None));
        self.loading.set(true);
        spawn_local(async move {
            match api::copy_prior_week(&range).await {
                Ok(copied) => self.sheet.update(|s| s.replace_rows(copied)),
                Err(e) => handle_service_error(&self.store, &e),
            }
            self.loading.set(false);
        });
    }

    pub fn add_row(self, row: TimeRow) {
        self.add_row_open.set(false);
        if self.sheet.with_untracked(|s| s.has_row(row.key)) {
            return;
        }
        let range = self.sheet.with_untracked(|s| s.range(Some(row.key)));
        spawn_local(async move {
            match api::add_row(&range).await {
                Ok(()) => {
                    self.sheet.update(|s| {
                        s.add_row(row);
                    });
                }
                Err(e) => handle_service_error(&self.store, &e),
            }
        });
    }

    pub fn confirm_delete_row(self) {
        let Some(key) = self.delete_target.get_untracked() else {
            return;
        };
        let range = self.sheet.with_untracked(|s| s.range(Some(key)));
        spawn_local(async move {
            match api::delete_row(&range).await {
                Ok(()) => self.sheet.update(|s| s.remove_row(key)),
                Err(e) => handle_service_error(&self.store, &e),
            }
            self.delete_target.set(None);
        });
    }
}

#[component]
pub fn TimePage() -> impl IntoView {
    let store = use_app_store();
    let is_mobile = use_is_mobile();
    let location = use_location();
    let controller = TimeController::new(store, use_navigate_to());
    let picker = RwSignal::new(ProjectPicker::default());

    // Route date drives the grid
    Effect::new(move |visited: Option<()>| {
        let pathname = location.pathname.get();
        controller.follow_path(&pathname, visited.is_none());
    });

    // Edits still waiting on the autosave timer go out when the page unmounts
    on_cleanup(move || {
        let Some(batch) = controller.sheet.try_with_untracked(|s| s.pending_batch()) else {
            return;
        };
        if batch.is_empty() {
            return;
        }
        spawn_local(async move {
            if let Err(e) = api::save_entries(&batch.request()).await {
                log::error!("Saving time entries on leave failed: {}", e);
            }
        });
    });

    spawn_local(async move {
        match api::get_projects().await {
            Ok(projects) => picker.set(ProjectPicker::from_projects(&projects)),
            Err(e) => handle_service_error(&store, &e),
        }
    });

    view! {
        <Show
            when=move || controller.ready.get()
            fallback=|| view! { <WaitLoader message="Loading time entries..." /> }
        >
            {move || if is_mobile.get() {
                view! { <MobileDay controller=controller /> }.into_any()
            } else {
                view! { <DesktopWeek controller=controller /> }.into_any()
            }}
        </Show>

        <AddRowModal
            open=controller.add_row_open
            picker=picker
            on_save=move |row: TimeRow| controller.add_row(row)
            on_cancel=move |_: ()| controller.add_row_open.set(false)
        />
        <ConfirmModal
            open=Signal::derive(move || controller.delete_target.get().is_some())
            title="Delete Time Entries"
            description="Remove all project time entries for this week?"
            on_confirm=move |_: ()| controller.confirm_delete_row()
            on_cancel=move |_: ()| controller.delete_target.set(None)
        />
    }
}
