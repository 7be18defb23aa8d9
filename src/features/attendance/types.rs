use crate::features::timestamp;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Attendance {
    pub id: Uuid,
    pub employee_id: Uuid,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub check_in: DateTime<Utc>,
    #[serde(default, with = "timestamp::option")]
    pub check_out: Option<DateTime<Utc>>,
    /// Minutes.
    #[serde(default)]
    pub break_duration: Option<i64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Attendance {
    /// Hours between check-in and check-out minus the break, if checked out.
    #[must_use]
    pub fn hours_worked(&self) -> Option<f64> {
        let check_out = self.check_out?;
        #[allow(clippy::cast_precision_loss)]
        let seconds = (check_out - self.check_in).num_seconds() as f64;
        #[allow(clippy::cast_precision_loss)]
        let break_hours = self.break_duration.unwrap_or(0) as f64 / 60.0;
        Some(seconds / 3600.0 - break_hours)
    }
}

/// Body of `POST /attendance/` (check-in).
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AttendanceCreate {
    #[serde(with = "timestamp")]
    pub check_in: DateTime<Utc>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub check_out: Option<DateTime<Utc>>,
    pub break_duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AttendanceCreate {
    #[must_use]
    pub const fn check_in_at(check_in: DateTime<Utc>) -> Self {
        Self {
            check_in,
            check_out: None,
            break_duration: 0,
            location: None,
            notes: None,
        }
    }
}

/// Body of `PUT /attendance/{id}`.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct AttendanceUpdate {
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub check_out: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Query of `GET /attendance/`. Laborers only ever see their own records.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct AttendanceFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Response of `GET /attendance/daily-summary/{date}`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_employees: u64,
    pub checked_out: u64,
    pub still_working: u64,
    pub total_hours_worked: f64,
    pub average_hours_per_employee: f64,
    #[serde(default)]
    pub attendance_records: Vec<Attendance>,
}
