use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Maximum number of error body characters surfaced to the user.
const MAX_ERROR_CHARS: usize = 200;

/// Location prefixes the backend adds in front of a field path.
const LOCATION_KINDS: [&str; 4] = ["body", "query", "path", "header"];

/// One field-level problem reported by a 422 response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

#[derive(Clone, Debug, Error)]
pub enum ApiError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {detail}")]
    Http { status: u16, detail: String },
    #[error("Validation failed: {}", join_issues(.issues))]
    Validation { issues: Vec<FieldIssue> },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Message shown to the user. Backend `detail` strings pass through verbatim.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Http { detail, .. } => detail.clone(),
            Self::Validation { issues } => join_issues(issues),
            Self::Config(message)
            | Self::Network(message)
            | Self::Timeout(message)
            | Self::Parse(message)
            | Self::Serialization(message) => message.clone(),
        }
    }

    /// Transport failures; the next poll tick or a manual retry may succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout(_))
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Validation { .. } => Some(422),
            _ => None,
        }
    }

    /// Builds an error from a non-success response.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body).map(|parsed| parsed.detail) {
            Ok(Detail::Message(detail)) => Self::Http { status, detail },
            Ok(Detail::Issues(raw)) if status == 422 => Self::Validation {
                issues: raw.into_iter().map(RawIssue::into_issue).collect(),
            },
            Ok(Detail::Issues(raw)) => Self::Http {
                status,
                detail: join_issues(
                    &raw.into_iter()
                        .map(RawIssue::into_issue)
                        .collect::<Vec<_>>(),
                ),
            },
            Ok(Detail::Other(_)) | Err(_) => Self::Http {
                status,
                detail: sanitize_body(body),
            },
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Detail,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Issues(Vec<RawIssue>),
    Other(Value),
}

#[derive(Deserialize)]
struct RawIssue {
    #[serde(default)]
    loc: Vec<Value>,
    msg: String,
}

impl RawIssue {
    fn into_issue(self) -> FieldIssue {
        let mut parts: Vec<String> = self
            .loc
            .iter()
            .filter_map(|part| match part {
                Value::String(value) => Some(value.clone()),
                Value::Number(value) => Some(value.to_string()),
                _ => None,
            })
            .collect();

        if parts
            .first()
            .is_some_and(|first| LOCATION_KINDS.contains(&first.as_str()))
        {
            parts.remove(0);
        }

        FieldIssue {
            field: parts.join("."),
            message: self.msg,
        }
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| {
            if issue.field.is_empty() {
                issue.message.clone()
            } else {
                format!("{}: {}", issue.field, issue.message)
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Trims and truncates raw error bodies.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
