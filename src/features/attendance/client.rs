//! Client helpers for `/attendance`.

use super::types::{Attendance, AttendanceCreate, AttendanceFilter, AttendanceUpdate, DailySummary};
use crate::api::{ApiClient, ApiError, Page, Pagination};
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
struct ListQuery<'a> {
    #[serde(flatten)]
    window: Pagination,
    #[serde(flatten)]
    filter: &'a AttendanceFilter,
}

/// Lists attendance records, newest first.
///
/// # Errors
/// Returns an `ApiError` if the request fails.
pub async fn list_attendance(
    client: &ApiClient,
    window: Pagination,
    filter: &AttendanceFilter,
) -> Result<Page<Attendance>, ApiError> {
    if let (Some(start), Some(end)) = (filter.start_date, filter.end_date) {
        if start > end {
            return Err(ApiError::Config(
                "Start date must not be after end date.".to_string(),
            ));
        }
    }
    client
        .get_json_query("/attendance/", &ListQuery { window, filter })
        .await
}

/// # Errors
/// Returns an `ApiError` if the request fails or the record is not visible.
pub async fn get_attendance(client: &ApiClient, id: Uuid) -> Result<Attendance, ApiError> {
    client.get_json(&format!("/attendance/{id}")).await
}

/// Records a check-in for the signed-in employee.
///
/// # Errors
/// Returns an `ApiError`; the backend rejects a second check-in for the same day.
pub async fn check_in(
    client: &ApiClient,
    record: &AttendanceCreate,
) -> Result<Attendance, ApiError> {
    client.post_json("/attendance/", record).await
}

/// # Errors
/// Returns an `ApiError` if the request fails.
pub async fn update_attendance(
    client: &ApiClient,
    id: Uuid,
    changes: &AttendanceUpdate,
) -> Result<Attendance, ApiError> {
    client.put_json(&format!("/attendance/{id}"), changes).await
}

/// Stamps the check-out time server-side.
///
/// # Errors
/// Returns an `ApiError`, e.g. "Already checked out".
pub async fn check_out(client: &ApiClient, id: Uuid) -> Result<Attendance, ApiError> {
    client
        .post_empty(&format!("/attendance/check-out/{id}"))
        .await
}

/// # Errors
/// Returns an `ApiError`; laborers get a 403.
pub async fn daily_summary(client: &ApiClient, date: NaiveDate) -> Result<DailySummary, ApiError> {
    client
        .get_json(&format!("/attendance/daily-summary/{}", date.format("%Y-%m-%d")))
        .await
}
