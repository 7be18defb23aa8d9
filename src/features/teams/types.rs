use crate::features::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct TeamAssignment {
    pub id: Uuid,
    pub team_name: String,
    #[serde(default)]
    pub site_location: Option<String>,
    pub supervisor_id: Uuid,
    pub laborer_id: Uuid,
    #[serde(with = "timestamp")]
    pub assigned_date: DateTime<Utc>,
    pub is_active: bool,
}

/// Body of `POST /teams/`; the laborer travels in the query.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct TeamAssignmentCreate {
    pub team_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_location: Option<String>,
}

/// One entry of `GET /teams/my-team`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct TeamMember {
    pub assignment_id: Uuid,
    pub team_name: String,
    #[serde(default)]
    pub site_location: Option<String>,
    #[serde(with = "timestamp")]
    pub assigned_date: DateTime<Utc>,
    pub laborer: Laborer,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Laborer {
    pub id: Uuid,
    #[serde(default)]
    pub full_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    pub is_active: bool,
}

impl Laborer {
    /// Full name when known, otherwise the email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}
