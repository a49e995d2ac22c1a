//! Reports
//!
//! Report dimensions, time range arithmetic and aggregated billing totals.

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::dates::{short_date, start_of_week, weekday_from_index};
use crate::models::ReportRow;

// ========================
// Dimensions
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportKind {
    #[default]
    Projects,
    Clients,
    Tasks,
    Person,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Projects,
        ReportKind::Clients,
        ReportKind::Tasks,
        ReportKind::Person,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ReportKind::Projects => "projects",
            ReportKind::Clients => "clients",
            ReportKind::Tasks => "tasks",
            ReportKind::Person => "person",
        }
    }

    pub fn path(&self) -> String {
        format!("/reports/{}", self.key())
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Projects => "Projects",
            ReportKind::Clients => "Clients",
            ReportKind::Tasks => "Tasks",
            ReportKind::Person => "Person",
        }
    }

    /// Path segment of `/api/report/time/{dimension}`
    pub fn dimension(&self) -> &'static str {
        match self {
            ReportKind::Projects => "project",
            ReportKind::Clients => "client",
            ReportKind::Tasks => "task",
            ReportKind::Person => "person",
        }
    }

    /// Tab for a location; anything unrecognised shows projects
    pub fn from_path(pathname: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| pathname.starts_with(&kind.path()))
            .unwrap_or_default()
    }

    pub fn row_name(&self, row: &ReportRow) -> String {
        let name = match self {
            ReportKind::Projects => row.project_name.clone(),
            ReportKind::Clients => row.client_name.clone(),
            ReportKind::Tasks => row.task_name.clone(),
            ReportKind::Person => Some(
                format!(
                    "{} {}",
                    row.first_name.as_deref().unwrap_or_default(),
                    row.last_name.as_deref().unwrap_or_default()
                )
                .trim()
                .to_string(),
            ),
        };
        name.unwrap_or_default()
    }

    pub fn row_id(&self, row: &ReportRow) -> i64 {
        let id = match self {
            ReportKind::Projects => row.project_id,
            ReportKind::Clients => row.client_id,
            ReportKind::Tasks => row.task_id,
            ReportKind::Person => row.profile_id,
        };
        id.unwrap_or_default()
    }

    /// Projects are listed under their client: a separate column on desktop,
    /// a line above the project name on mobile
    pub fn shows_client(&self) -> bool {
        matches!(self, ReportKind::Projects)
    }

    /// Columns the footer "Total" label spans
    pub fn total_colspan(&self, mobile: bool) -> u8 {
        if self.shows_client() && !mobile {
            2
        } else {
            1
        }
    }
}

// ========================
// Time ranges
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    Week,
    Month,
    Quarter,
    #[default]
    Year,
    All,
    Custom,
}

impl TimeRange {
    pub const OPTIONS: [TimeRange; 6] = [
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::Quarter,
        TimeRange::Year,
        TimeRange::All,
        TimeRange::Custom,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Quarter => "quarter",
            TimeRange::Year => "year",
            TimeRange::All => "all",
            TimeRange::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Week => "Week",
            TimeRange::Month => "Month",
            TimeRange::Quarter => "Quarter",
            TimeRange::Year => "Year",
            TimeRange::All => "All",
            TimeRange::Custom => "Custom",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::OPTIONS.into_iter().find(|r| r.key() == key)
    }

    pub fn is_navigable(&self) -> bool {
        !matches!(self, TimeRange::All)
    }
}

fn month_start(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

fn month_end(day: NaiveDate) -> NaiveDate {
    let first = month_start(day);
    first
        .checked_add_months(Months::new(1))
        .map(|next| next - Duration::days(1))
        .unwrap_or(first)
}

fn quarter_start(day: NaiveDate) -> NaiveDate {
    let month = (day.month0() / 3) * 3 + 1;
    NaiveDate::from_ymd_opt(day.year(), month, 1).unwrap_or(day)
}

fn shift_months(day: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        day.checked_add_months(Months::new(months as u32))
    } else {
        day.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(day)
}

/// Inclusive report period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    pub range: TimeRange,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ReportPeriod {
    /// Period of `range` containing `today`; weeks begin on the account's
    /// week start (0 = Sunday)
    pub fn containing(range: TimeRange, today: NaiveDate, week_start: u8) -> Self {
        let (from, to) = match range {
            TimeRange::Week => {
                let from = start_of_week(today, weekday_from_index(week_start));
                (from, from + Duration::days(6))
            }
            TimeRange::Month | TimeRange::Custom => (month_start(today), month_end(today)),
            TimeRange::Quarter => {
                let from = quarter_start(today);
                (from, month_end(shift_months(from, 2)))
            }
            TimeRange::Year => {
                let from = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
                let to = NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today);
                (from, to)
            }
            TimeRange::All => {
                let from = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(today);
                (from, shift_months(today, 1200))
            }
        };
        Self { range, from, to }
    }

    /// Previous (`-1`) or next (`+1`) period of the same length
    pub fn shift(&self, amount: i32) -> Self {
        let (from, to) = match self.range {
            TimeRange::Week => {
                let days = Duration::days(7 * amount as i64);
                (self.from + days, self.to + days)
            }
            TimeRange::Month => {
                let from = shift_months(month_start(self.from), amount);
                (from, month_end(from))
            }
            TimeRange::Quarter => {
                let from = shift_months(month_start(self.from), amount * 3);
                (from, month_end(shift_months(from, 2)))
            }
            TimeRange::Year => (shift_months(self.from, amount * 12), shift_months(self.to, amount * 12)),
            TimeRange::Custom => (shift_months(self.from, amount), shift_months(self.to, amount)),
            TimeRange::All => (self.from, self.to),
        };
        Self { from, to, ..*self }
    }

    /// Heading shown next to the range selector
    pub fn display(&self) -> String {
        match self.range {
            TimeRange::Week => format!(
                "{} - {}",
                self.from.format("%d"),
                self.to.format("%d %b %Y")
            ),
            TimeRange::Month => self.from.format("%b %Y").to_string(),
            TimeRange::Quarter => format!(
                "{} - {}",
                self.from.format("%d %b"),
                self.to.format("%d %b %Y")
            ),
            TimeRange::Year => self.from.format("%Y").to_string(),
            TimeRange::All => "All Time".to_string(),
            TimeRange::Custom => format!(
                "{} - {}",
                self.from.format("%d %b %Y"),
                self.to.format("%d %b %Y")
            ),
        }
    }

    pub fn query(&self, page: Option<u32>) -> String {
        format!(
            "from={}&to={}&page={}",
            short_date(self.from),
            short_date(self.to),
            page.map(|p| p.to_string()).unwrap_or_default()
        )
    }

    pub fn csv_filename(&self, company: &str) -> String {
        csv_filename(company, self.from, self.to)
    }
}

// ========================
// Totals and formatting
// ========================

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BillableTotals {
    pub billable_hours: f64,
    pub non_billable_hours: f64,
    pub billable_total: f64,
}

impl BillableTotals {
    pub fn from_rows(rows: &[ReportRow]) -> Self {
        rows.iter().fold(Self::default(), |acc, row| Self {
            billable_hours: acc.billable_hours + row.billable_hours,
            non_billable_hours: acc.non_billable_hours + row.non_billable_hours,
            billable_total: acc.billable_total + row.billable_total,
        })
    }
}

/// US dollar amount with thousands separators ("$1,234.50")
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, c) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// Footer hours, always two decimals
pub fn format_hours_total(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// `export_{company}_{from}_to_{to}.csv`, company runs of non-alphanumerics
/// collapsed to '-'
pub fn csv_filename(company: &str, from: NaiveDate, to: NaiveDate) -> String {
    let mut clean = String::new();
    let mut in_run = false;
    for c in company.chars() {
        if c.is_ascii_alphanumeric() {
            clean.push(c);
            in_run = false;
        } else if !in_run {
            clean.push('-');
            in_run = true;
        }
    }
    format!(
        "export_{}_{}_to_{}.csv",
        clean,
        short_date(from),
        short_date(to)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_kind_paths() {
        assert_eq!(ReportKind::from_path("/reports/tasks"), ReportKind::Tasks);
        assert_eq!(ReportKind::from_path("/reports/person/extra"), ReportKind::Person);
        assert_eq!(ReportKind::from_path("/reports"), ReportKind::Projects);
        assert_eq!(ReportKind::Clients.dimension(), "client");
    }

    #[test]
    fn test_week_period_respects_week_start() {
        // Wednesday
        let today = date(2024, 5, 15);
        let sunday = ReportPeriod::containing(TimeRange::Week, today, 0);
        assert_eq!((sunday.from, sunday.to), (date(2024, 5, 12), date(2024, 5, 18)));
        let monday = ReportPeriod::containing(TimeRange::Week, today, 1);
        assert_eq!(monday.from, date(2024, 5, 13));
        let saturday = ReportPeriod::containing(TimeRange::Week, today, 6);
        assert_eq!(saturday.from, date(2024, 5, 11));
    }

    #[test]
    fn test_month_quarter_year() {
        let today = date(2024, 2, 10);
        let month = ReportPeriod::containing(TimeRange::Month, today, 0);
        assert_eq!((month.from, month.to), (date(2024, 2, 1), date(2024, 2, 29)));
        let quarter = ReportPeriod::containing(TimeRange::Quarter, date(2024, 8, 20), 0);
        assert_eq!((quarter.from, quarter.to), (date(2024, 7, 1), date(2024, 9, 30)));
        let year = ReportPeriod::containing(TimeRange::Year, today, 0);
        assert_eq!((year.from, year.to), (date(2024, 1, 1), date(2024, 12, 31)));
        let all = ReportPeriod::containing(TimeRange::All, today, 0);
        assert_eq!((all.from, all.to), (date(1970, 1, 1), date(2124, 2, 10)));
    }

    #[test]
    fn test_shift_recomputes_month_end() {
        let jan = ReportPeriod::containing(TimeRange::Month, date(2024, 1, 31), 0);
        let feb = jan.shift(1);
        assert_eq!((feb.from, feb.to), (date(2024, 2, 1), date(2024, 2, 29)));
        let q = ReportPeriod::containing(TimeRange::Quarter, date(2024, 1, 5), 0).shift(-1);
        assert_eq!((q.from, q.to), (date(2023, 10, 1), date(2023, 12, 31)));
        let w = ReportPeriod::containing(TimeRange::Week, date(2024, 5, 15), 0).shift(1);
        assert_eq!(w.from, date(2024, 5, 19));
        let all = ReportPeriod::containing(TimeRange::All, date(2024, 5, 15), 0);
        assert_eq!(all.shift(1), all);
        assert!(!TimeRange::All.is_navigable());
    }

    #[test]
    fn test_display() {
        let period = ReportPeriod::containing(TimeRange::Month, date(2024, 3, 3), 0);
        assert_eq!(period.display(), "Mar 2024");
        let week = ReportPeriod::containing(TimeRange::Week, date(2024, 5, 15), 0);
        assert_eq!(week.display(), "12 - 18 May 2024");
    }

    #[test]
    fn test_totals() {
        let rows = vec![
            ReportRow {
                billable_hours: 2.5,
                non_billable_hours: 1.0,
                billable_total: 250.0,
                ..Default::default()
            },
            ReportRow {
                billable_hours: 1.5,
                billable_total: 100.0,
                ..Default::default()
            },
        ];
        let totals = BillableTotals::from_rows(&rows);
        assert_eq!(totals.billable_hours, 4.0);
        assert_eq!(totals.non_billable_hours, 1.0);
        assert_eq!(totals.billable_total, 350.0);
        assert_eq!(BillableTotals::from_rows(&[]), BillableTotals::default());
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-12.0), "-$12.00");
    }

    #[test]
    fn test_csv_filename() {
        let name = csv_filename("Acme & Sons, LLC", date(2024, 1, 1), date(2024, 12, 31));
        assert_eq!(name, "export_Acme-Sons-LLC_2024-01-01_to_2024-12-31.csv");
    }

    #[test]
    fn test_row_name() {
        let row = ReportRow {
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            profile_id: Some(7),
            ..Default::default()
        };
        assert_eq!(ReportKind::Person.row_name(&row), "Ada Lovelace");
        assert_eq!(ReportKind::Person.row_id(&row), 7);
        assert_eq!(ReportKind::Projects.row_name(&row), "");
    }

    #[test]
    fn test_client_column() {
        assert!(ReportKind::Projects.shows_client());
        assert!(!ReportKind::Clients.shows_client());
        assert_eq!(ReportKind::Projects.total_colspan(false), 2);
        assert_eq!(ReportKind::Projects.total_colspan(true), 1);
        assert_eq!(ReportKind::Tasks.total_colspan(false), 1);
    }

    #[test]
    fn test_query() {
        let period = ReportPeriod::containing(TimeRange::Year, date(2024, 3, 3), 0);
        assert_eq!(period.query(None), "from=2024-01-01&to=2024-12-31&page=");
    }
}
