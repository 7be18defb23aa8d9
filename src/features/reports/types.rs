use crate::api::ApiError;
use crate::features::leave_requests::LeaveStatus;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// Inclusive date range required by every report except the dashboard.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    /// # Errors
    /// Returns `ApiError::Config` if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ApiError> {
        if start > end {
            return Err(ApiError::Config(
                "Start date must not be after end date.".to_string(),
            ));
        }
        Ok(Self {
            start_date: start,
            end_date: end,
        })
    }
}

/// Optional narrowing accepted by the summary reports.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ReportFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeaveStatus>,
}

/// Flattens scalar leaves of a report into `path = value` pairs, e.g.
/// `summary.total_hours_worked = 42.5`. Arrays are summarised by length.
#[must_use]
pub fn flatten_scalars(value: &Value) -> Vec<(String, String)> {
    let mut out = Vec::new();
    collect(String::new(), value, &mut out);
    out
}

fn collect(prefix: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                collect(path, child, out);
            }
        }
        Value::Array(items) => out.push((prefix, format!("[{} items]", items.len()))),
        Value::String(text) => out.push((prefix, text.clone())),
        Value::Null => out.push((prefix, "-".to_string())),
        other => out.push((prefix, other.to_string())),
    }
}
