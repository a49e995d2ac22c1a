//! Weekly Time Grid
//!
//! View-model of the time page: rows keyed by (project, task), one text cell per
//! day of the loaded range, and a buffer of edits not yet saved.
//!
//! Saving works on a snapshot: `pending_batch` copies the buffer, and
//! `acknowledge` only clears the cells whose text still matches that copy, so
//! edits typed while the request is in flight stay pending.
//!
//! Loads are sequenced with `begin_load`; a response carrying an older ticket
//! is dropped.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::dates::{days_between, short_date};
use crate::hours::{display_hours, normalize, round_total, sanitize, value_of};
use crate::models::{TimeEntriesRequest, TimeEntryUpdate, TimeWeek, WeekEntry, WeekRange};

/// Length of the default range when nothing has been loaded
const DEFAULT_RANGE_DAYS: i64 = 7;
pub const WEEK_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowKey {
    pub project_id: i64,
    pub task_id: i64,
}

impl RowKey {
    pub fn new(project_id: i64, task_id: i64) -> Self {
        Self { project_id, task_id }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellKey {
    pub row: RowKey,
    pub day: NaiveDate,
}

impl CellKey {
    pub fn new(row: RowKey, day: NaiveDate) -> Self {
        Self { row, day }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeRow {
    pub key: RowKey,
    pub client_name: String,
    pub project_name: String,
    pub task_name: String,
    cells: BTreeMap<NaiveDate, String>,
}

impl TimeRow {
    pub fn new(
        key: RowKey,
        client_name: impl Into<String>,
        project_name: impl Into<String>,
        task_name: impl Into<String>,
    ) -> Self {
        Self {
            key,
            client_name: client_name.into(),
            project_name: project_name.into(),
            task_name: task_name.into(),
            cells: BTreeMap::new(),
        }
    }

    fn from_entry(entry: &WeekEntry) -> Self {
        Self::new(
            RowKey::new(entry.project_id, entry.task_id),
            entry.client_name.clone(),
            entry.project_name.clone(),
            entry.task_name.clone(),
        )
    }

    /// Rows order by project, then client, then task name, ignoring case
    fn sort_key(&self) -> String {
        format!(
            "{}{}{}",
            self.project_name.to_lowercase(),
            self.client_name.to_lowercase(),
            self.task_name.to_lowercase()
        )
    }

    pub fn text(&self, day: NaiveDate) -> &str {
        self.cells.get(&day).map(String::as_str).unwrap_or("")
    }

    pub fn value(&self, day: NaiveDate) -> f64 {
        value_of(self.text(day))
    }
}

/// Which days count toward a row total: the whole week on desktop, the
/// current day on mobile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalScope {
    Week,
    Day(NaiveDate),
}

/// Result of stepping one day from the current day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStep {
    /// Still inside the loaded range
    Within(NaiveDate),
    /// Crossed the range edge; a new range starting at this day must be loaded
    Leave(NaiveDate),
}

/// Snapshot of the unsaved buffer sent in one `PUT /api/time`
#[derive(Debug, Clone, PartialEq)]
pub struct SaveBatch {
    snapshot: BTreeMap<CellKey, String>,
}

impl SaveBatch {
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn request(&self) -> TimeEntriesRequest {
        TimeEntriesRequest {
            entries: self
                .snapshot
                .iter()
                .map(|(cell, text)| TimeEntryUpdate {
                    project_id: cell.row.project_id,
                    task_id: cell.row.task_id,
                    day: short_date(cell.day),
                    hours: value_of(text),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeekSheet {
    today: NaiveDate,
    start: NaiveDate,
    end: NaiveDate,
    current: NaiveDate,
    rows: Vec<TimeRow>,
    pending: BTreeMap<CellKey, String>,
    prior_week_empty: bool,
    load_seq: u64,
}

impl WeekSheet {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            start: today,
            end: today + Duration::days(DEFAULT_RANGE_DAYS),
            current: today,
            rows: Vec::new(),
            pending: BTreeMap::new(),
            prior_week_empty: false,
            load_seq: 0,
        }
    }

    // ========================
    // Range
    // ========================

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn current(&self) -> NaiveDate {
        self.current
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        days_between(self.start, self.end)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }

    pub fn is_current_week(&self) -> bool {
        self.contains(self.today)
    }

    /// Move the current day inside the loaded range. Returns false when the
    /// day is outside and a load is needed instead.
    pub fn set_current(&mut self, day: NaiveDate) -> bool {
        if self.contains(day) {
            self.current = day;
            true
        } else {
            false
        }
    }

    pub fn previous_day(&self) -> DayStep {
        let day = self.current - Duration::days(1);
        if day < self.start {
            DayStep::Leave(self.start - Duration::days(1))
        } else {
            DayStep::Within(day)
        }
    }

    pub fn next_day(&self) -> DayStep {
        let day = self.current + Duration::days(1);
        if day > self.end {
            DayStep::Leave(self.start + Duration::days(WEEK_DAYS))
        } else {
            DayStep::Within(day)
        }
    }

    /// Request body naming the loaded range, optionally narrowed to one row
    pub fn range(&self, row: Option<RowKey>) -> WeekRange {
        WeekRange {
            start_date: short_date(self.start),
            end_date: short_date(self.end),
            project_id: row.map(|r| r.project_id),
            task_id: row.map(|r| r.task_id),
        }
    }

    /// Start of the range `days` away from the loaded one (±7 for week arrows)
    pub fn week_shift(&self, days: i64) -> NaiveDate {
        self.start + Duration::days(days)
    }

    // ========================
    // Loading
    // ========================

    /// Start a load; only the response for the latest ticket is applied
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.prior_week_empty = false;
        self.load_seq
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.load_seq
    }

    /// Apply a week response. Returns false when the ticket is stale.
    pub fn load(&mut self, ticket: u64, week: TimeWeek, current: NaiveDate) -> bool {
        if !self.is_latest(ticket) {
            log::debug!("Dropping stale week response for {}", week.start);
            return false;
        }

        self.start = week.start;
        self.end = week.end;
        self.current = if self.contains(current) { current } else { week.start };
        self.rows = build_rows(&week.entries);
        self.overlay_pending();
        true
    }

    /// A failed load falls back to the default range around today
    pub fn load_failed(&mut self, ticket: u64) {
        if !self.is_latest(ticket) {
            return;
        }
        self.start = self.today;
        self.end = self.today + Duration::days(DEFAULT_RANGE_DAYS);
        self.current = self.today;
    }

    /// Apply the prior week copy; `None` means there was nothing to copy
    pub fn replace_rows(&mut self, copied: Option<TimeWeek>) {
        match copied {
            Some(week) => {
                self.prior_week_empty = false;
                self.rows = build_rows(&week.entries);
                self.overlay_pending();
            }
            None => self.prior_week_empty = true,
        }
    }

    pub fn prior_week_empty(&self) -> bool {
        self.prior_week_empty
    }

    fn overlay_pending(&mut self) {
        for (cell, text) in &self.pending {
            if cell.day < self.start || cell.day > self.end {
                continue;
            }
            if let Some(row) = self.rows.iter_mut().find(|r| r.key == cell.row) {
                row.cells.insert(cell.day, text.clone());
            }
        }
    }

    // ========================
    // Rows
    // ========================

    pub fn rows(&self) -> &[TimeRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_row(&self, key: RowKey) -> bool {
        self.rows.iter().any(|r| r.key == key)
    }

    pub fn row(&self, key: RowKey) -> Option<&TimeRow> {
        self.rows.iter().find(|r| r.key == key)
    }

    /// Insert an empty row for the loaded range. Returns false when a row for
    /// the same project and task already exists.
    pub fn add_row(&mut self, mut row: TimeRow) -> bool {
        if self.has_row(row.key) {
            return false;
        }
        row.cells = self.days().into_iter().map(|d| (d, display_hours(0.0))).collect();
        self.rows.push(row);
        sort_rows(&mut self.rows);
        true
    }

    /// Drop a row along with any unsaved edits of it
    pub fn remove_row(&mut self, key: RowKey) {
        self.rows.retain(|r| r.key != key);
        self.pending.retain(|cell, _| cell.row != key);
    }

    // ========================
    // Editing
    // ========================

    /// Record typed text. Returns the sanitised text, or `None` if the row is
    /// not on the sheet.
    pub fn edit(&mut self, cell: CellKey, raw: &str) -> Option<String> {
        let text = sanitize(raw);
        let Some(row) = self.rows.iter_mut().find(|r| r.key == cell.row) else {
            log::warn!(
                "No row for project {} task {}",
                cell.row.project_id,
                cell.row.task_id
            );
            return None;
        };
        row.cells.insert(cell.day, text.clone());
        self.pending.insert(cell, text.clone());
        Some(text)
    }

    /// Normalise a cell once it loses focus ("1.2.3" → "1.2")
    pub fn blur(&mut self, cell: CellKey) {
        let Some(row) = self.rows.iter_mut().find(|r| r.key == cell.row) else {
            return;
        };
        let Some(text) = row.cells.get_mut(&cell.day) else {
            return;
        };
        let cleaned = normalize(text);
        if *text == cleaned {
            return;
        }
        *text = cleaned.clone();
        if let Some(pending) = self.pending.get_mut(&cell) {
            *pending = cleaned;
        }
    }

    pub fn has_unsaved(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn pending_batch(&self) -> SaveBatch {
        SaveBatch {
            snapshot: self.pending.clone(),
        }
    }

    /// Clear what a successful save covered. Cells edited again after the
    /// snapshot keep their newer text pending.
    pub fn acknowledge(&mut self, batch: &SaveBatch) {
        for (cell, text) in &batch.snapshot {
            if self.pending.get(cell) == Some(text) {
                self.pending.remove(cell);
            }
        }
    }

    // ========================
    // Totals
    // ========================

    fn counts(&self, scope: TotalScope, day: NaiveDate) -> bool {
        match scope {
            TotalScope::Week => true,
            TotalScope::Day(only) => only == day,
        }
    }

    pub fn row_total(&self, key: RowKey, scope: TotalScope) -> f64 {
        let Some(row) = self.row(key) else {
            return 0.0;
        };
        let sum: f64 = self
            .days()
            .into_iter()
            .filter(|d| self.counts(scope, *d))
            .map(|d| row.value(d))
            .sum();
        round_total(sum)
    }

    pub fn day_total(&self, day: NaiveDate) -> f64 {
        round_total(self.rows.iter().map(|r| r.value(day)).sum())
    }

    pub fn grand_total(&self, scope: TotalScope) -> f64 {
        let sum: f64 = self
            .rows
            .iter()
            .map(|r| {
                self.days()
                    .into_iter()
                    .filter(|d| self.counts(scope, *d))
                    .map(|d| r.value(d))
                    .sum::<f64>()
            })
            .sum();
        round_total(sum)
    }
}

fn build_rows(entries: &[WeekEntry]) -> Vec<TimeRow> {
    let mut rows: Vec<TimeRow> = Vec::new();
    for entry in entries {
        let key = RowKey::new(entry.project_id, entry.task_id);
        let index = match rows.iter().position(|r| r.key == key) {
            Some(i) => i,
            None => {
                rows.push(TimeRow::from_entry(entry));
                rows.len() - 1
            }
        };
        rows[index].cells.insert(entry.day, display_hours(entry.hours));
    }
    sort_rows(&mut rows);
    rows
}

fn sort_rows(rows: &mut [TimeRow]) {
    rows.sort_by_cached_key(|r| r.sort_key());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(project: i64, task: i64, names: (&str, &str, &str), day: NaiveDate, hours: f64) -> WeekEntry {
        WeekEntry {
            project_id: project,
            task_id: task,
            client_name: names.0.into(),
            project_name: names.1.into(),
            task_name: names.2.into(),
            day,
            hours,
        }
    }

    fn week(start: NaiveDate, entries: Vec<WeekEntry>) -> TimeWeek {
        TimeWeek {
            start,
            end: start + Duration::days(6),
            entries,
        }
    }

    fn loaded_sheet() -> WeekSheet {
        let start = date(2024, 3, 4);
        let mut sheet = WeekSheet::new(date(2024, 3, 6));
        let ticket = sheet.begin_load();
        let loaded = sheet.load(
            ticket,
            week(
                start,
                vec![
                    entry(2, 1, ("Acme", "website", "Dev"), date(2024, 3, 4), 2.0),
                    entry(1, 1, ("Zeta", "Apollo", "Dev"), date(2024, 3, 5), 1.5),
                    entry(2, 1, ("Acme", "website", "Dev"), date(2024, 3, 5), 0.0),
                ],
            ),
            date(2024, 3, 6),
        );
        assert!(loaded);
        sheet
    }

    #[test]
    fn test_default_range() {
        let today = date(2024, 3, 6);
        let sheet = WeekSheet::new(today);
        assert_eq!(sheet.start(), today);
        assert_eq!(sheet.end(), date(2024, 3, 13));
        assert!(sheet.is_current_week());
    }

    #[test]
    fn test_rows_grouped_and_sorted() {
        let sheet = loaded_sheet();
        assert_eq!(sheet.rows().len(), 2);
        assert_eq!(sheet.rows()[0].project_name, "Apollo");
        assert_eq!(sheet.rows()[1].text(date(2024, 3, 4)), "2");
        // Zero hours show as an empty cell
        assert_eq!(sheet.rows()[1].text(date(2024, 3, 5)), "");
    }

    #[test]
    fn test_edit_and_blur() {
        let mut sheet = loaded_sheet();
        let cell = CellKey::new(RowKey::new(1, 1), date(2024, 3, 7));
        assert_eq!(sheet.edit(cell, "1.2.3h").as_deref(), Some("1.2.3"));
        assert!(sheet.has_unsaved());
        sheet.blur(cell);
        assert_eq!(sheet.row(cell.row).unwrap().text(cell.day), "1.2");

        let batch = sheet.pending_batch();
        assert_eq!(batch.request().entries[0].hours, 1.2);
    }

    #[test]
    fn test_edit_unknown_row_is_ignored() {
        let mut sheet = loaded_sheet();
        let cell = CellKey::new(RowKey::new(9, 9), date(2024, 3, 7));
        assert!(sheet.edit(cell, "3").is_none());
        assert!(!sheet.has_unsaved());
    }

    #[test]
    fn test_acknowledge_keeps_newer_edits() {
        let mut sheet = loaded_sheet();
        let a = CellKey::new(RowKey::new(1, 1), date(2024, 3, 4));
        let b = CellKey::new(RowKey::new(2, 1), date(2024, 3, 4));
        sheet.edit(a, "4");
        sheet.edit(b, "");
        let batch = sheet.pending_batch();
        assert_eq!(batch.len(), 2);

        // Typed while the save is in flight
        sheet.edit(a, "5");
        sheet.acknowledge(&batch);

        assert_eq!(sheet.pending_count(), 1);
        let next = sheet.pending_batch().request();
        assert_eq!(next.entries[0].hours, 5.0);
    }

    #[test]
    fn test_empty_cell_saves_as_zero() {
        let mut sheet = loaded_sheet();
        let cell = CellKey::new(RowKey::new(2, 1), date(2024, 3, 4));
        sheet.edit(cell, "");
        let request = sheet.pending_batch().request();
        assert_eq!(request.entries[0].hours, 0.0);
        assert_eq!(request.entries[0].day, "2024-03-04");
    }

    #[test]
    fn test_totals() {
        let mut sheet = loaded_sheet();
        let key = RowKey::new(2, 1);
        sheet.edit(CellKey::new(key, date(2024, 3, 6)), "0.1");
        sheet.edit(CellKey::new(key, date(2024, 3, 7)), "0.2");
        assert_eq!(sheet.row_total(key, TotalScope::Week), 2.3);
        assert_eq!(sheet.row_total(key, TotalScope::Day(date(2024, 3, 6))), 0.1);
        assert_eq!(sheet.day_total(date(2024, 3, 5)), 1.5);
        assert_eq!(sheet.grand_total(TotalScope::Week), 3.8);
        assert_eq!(sheet.grand_total(TotalScope::Day(date(2024, 3, 5))), 1.5);
    }

    #[test]
    fn test_add_row_once() {
        let mut sheet = loaded_sheet();
        let row = TimeRow::new(RowKey::new(3, 4), "Acme", "Beacon", "QA");
        assert!(sheet.add_row(row.clone()));
        assert!(!sheet.add_row(row));
        assert_eq!(sheet.rows().len(), 3);
        assert_eq!(sheet.rows()[1].project_name, "Beacon");
        assert_eq!(sheet.row(RowKey::new(3, 4)).unwrap().cells.len(), 7);
        assert!(!sheet.has_unsaved());
    }

    #[test]
    fn test_remove_row_drops_pending() {
        let mut sheet = loaded_sheet();
        let key = RowKey::new(1, 1);
        sheet.edit(CellKey::new(key, date(2024, 3, 4)), "3");
        sheet.edit(CellKey::new(RowKey::new(2, 1), date(2024, 3, 4)), "3");
        sheet.remove_row(key);
        assert!(!sheet.has_row(key));
        assert_eq!(sheet.pending_count(), 1);
    }

    #[test]
    fn test_day_steps() {
        let mut sheet = loaded_sheet();
        assert!(sheet.set_current(date(2024, 3, 4)));
        assert_eq!(sheet.previous_day(), DayStep::Leave(date(2024, 3, 3)));
        assert_eq!(sheet.next_day(), DayStep::Within(date(2024, 3, 5)));

        assert!(sheet.set_current(date(2024, 3, 10)));
        assert_eq!(sheet.next_day(), DayStep::Leave(date(2024, 3, 11)));
        assert!(!sheet.set_current(date(2024, 3, 11)));
        assert_eq!(sheet.week_shift(-7), date(2024, 2, 26));
    }

    #[test]
    fn test_range_body() {
        let sheet = loaded_sheet();
        let whole = sheet.range(None);
        assert_eq!(whole.start_date, "2024-03-04");
        assert_eq!(whole.end_date, "2024-03-10");
        assert!(whole.project_id.is_none());

        let row = sheet.range(Some(RowKey::new(2, 1)));
        assert_eq!((row.project_id, row.task_id), (Some(2), Some(1)));
    }

    #[test]
    fn test_stale_load_is_dropped() {
        let mut sheet = loaded_sheet();
        let first = sheet.begin_load();
        let second = sheet.begin_load();
        assert!(!sheet.load(first, week(date(2024, 2, 26), vec![]), date(2024, 2, 26)));
        assert_eq!(sheet.start(), date(2024, 3, 4));
        assert!(sheet.load(second, week(date(2024, 3, 11), vec![]), date(2024, 3, 12)));
        assert_eq!(sheet.current(), date(2024, 3, 12));
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_pending_edits_survive_reload() {
        let mut sheet = loaded_sheet();
        let cell = CellKey::new(RowKey::new(1, 1), date(2024, 3, 8));
        sheet.edit(cell, "6");
        let ticket = sheet.begin_load();
        sheet.load(
            ticket,
            week(
                date(2024, 3, 4),
                vec![entry(1, 1, ("Zeta", "Apollo", "Dev"), date(2024, 3, 8), 2.0)],
            ),
            date(2024, 3, 4),
        );
        assert_eq!(sheet.row(cell.row).unwrap().text(cell.day), "6");
    }

    #[test]
    fn test_load_failure_resets_range() {
        let mut sheet = loaded_sheet();
        let ticket = sheet.begin_load();
        sheet.load_failed(ticket);
        assert_eq!(sheet.start(), date(2024, 3, 6));
        assert_eq!(sheet.end(), date(2024, 3, 13));
    }

    #[test]
    fn test_copy_prior_week() {
        let mut sheet = WeekSheet::new(date(2024, 3, 6));
        sheet.replace_rows(None);
        assert!(sheet.prior_week_empty());
        sheet.replace_rows(Some(week(
            date(2024, 3, 6),
            vec![entry(1, 1, ("Zeta", "Apollo", "Dev"), date(2024, 3, 6), 0.0)],
        )));
        assert!(!sheet.prior_week_empty());
        assert_eq!(sheet.rows().len(), 1);
        sheet.begin_load();
        assert!(!sheet.prior_week_empty());
    }
}
