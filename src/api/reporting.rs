use timesheet_core::models::ReportRow;
use timesheet_core::report::{ReportKind, ReportPeriod};
use timesheet_core::ServiceError;

use super::{fetch_csv, get};

pub async fn get_report(
    kind: ReportKind,
    period: &ReportPeriod,
    page: Option<u32>,
) -> Result<Vec<ReportRow>, ServiceError> {
    let path = format!("/api/report/time/{}?{}", kind.dimension(), period.query(page));
    Ok(get(&path).await?.unwrap_or_default())
}

pub async fn export_report(kind: ReportKind, period: &ReportPeriod) -> Result<Vec<u8>, ServiceError> {
    let path = format!("/api/report/time/export/{}?{}", kind.dimension(), period.query(None));
    fetch_csv(&path).await
}
