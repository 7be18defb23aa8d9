use crate::features::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Longest reason or supervisor comment the backend accepts.
pub const MAX_TEXT_CHARS: usize = 500;

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        };
        formatter.write_str(label)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct LeaveRequest {
    pub id: Uuid,
    pub employee_id: Uuid,
    #[serde(default)]
    pub supervisor_id: Option<Uuid>,
    pub leave_type: String,
    #[serde(with = "timestamp")]
    pub start_date: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub end_date: DateTime<Utc>,
    pub reason: String,
    #[serde(default)]
    pub status: LeaveStatus,
    #[serde(default)]
    pub supervisor_comments: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl LeaveRequest {
    /// Calendar days covered, both ends included.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end_date.date_naive() - self.start_date.date_naive()).num_days() + 1
    }
}

/// Body of `POST /leave-requests/`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct LeaveRequestCreate {
    /// Free text such as "sick", "vacation" or "personal".
    pub leave_type: String,
    #[serde(with = "timestamp")]
    pub start_date: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub end_date: DateTime<Utc>,
    pub reason: String,
}

/// Body of `PUT /leave-requests/{id}`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct LeaveDecision {
    pub status: LeaveStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor_comments: Option<String>,
}

impl LeaveDecision {
    #[must_use]
    pub fn approve(comments: Option<String>) -> Self {
        Self {
            status: LeaveStatus::Approved,
            supervisor_comments: comments,
        }
    }

    #[must_use]
    pub fn reject(comments: Option<String>) -> Self {
        Self {
            status: LeaveStatus::Rejected,
            supervisor_comments: comments,
        }
    }
}
