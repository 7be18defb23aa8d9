//! Client helpers for `/leave-requests`. Visibility is role dependent on the
//! backend: admins see everything, supervisors their team, laborers their own.

use super::types::{LeaveDecision, LeaveRequest, LeaveRequestCreate, MAX_TEXT_CHARS};
use crate::api::{ApiClient, ApiError, Message, Page, Pagination};
use uuid::Uuid;

/// # Errors
/// Returns an `ApiError` if the request fails.
pub async fn list_leave_requests(
    client: &ApiClient,
    window: Pagination,
) -> Result<Page<LeaveRequest>, ApiError> {
    client.get_json_query("/leave-requests/", &window).await
}

/// # Errors
/// Returns an `ApiError` if the request fails or the request is not visible.
pub async fn get_leave_request(client: &ApiClient, id: Uuid) -> Result<LeaveRequest, ApiError> {
    client.get_json(&format!("/leave-requests/{id}")).await
}

/// Files a new request; the backend assigns the approving supervisor.
///
/// # Errors
/// Returns `ApiError::Config` for an inverted date range, a blank type or an
/// over-long reason, otherwise any request failure.
pub async fn create_leave_request(
    client: &ApiClient,
    request: &LeaveRequestCreate,
) -> Result<LeaveRequest, ApiError> {
    if request.leave_type.trim().is_empty() {
        return Err(ApiError::Config("Leave type is required.".to_string()));
    }
    if request.end_date < request.start_date {
        return Err(ApiError::Config(
            "End date must not be before start date.".to_string(),
        ));
    }
    if request.reason.chars().count() > MAX_TEXT_CHARS {
        return Err(ApiError::Config(format!(
            "Reason must be at most {MAX_TEXT_CHARS} characters."
        )));
    }
    client.post_json("/leave-requests/", request).await
}

/// Approves or rejects a request.
///
/// # Errors
/// Returns an `ApiError`; laborers and supervisors of another team get a 403.
pub async fn decide_leave_request(
    client: &ApiClient,
    id: Uuid,
    decision: &LeaveDecision,
) -> Result<LeaveRequest, ApiError> {
    if let Some(comments) = &decision.supervisor_comments {
        if comments.chars().count() > MAX_TEXT_CHARS {
            return Err(ApiError::Config(format!(
                "Comments must be at most {MAX_TEXT_CHARS} characters."
            )));
        }
    }
    client
        .put_json(&format!("/leave-requests/{id}"), decision)
        .await
}

/// # Errors
/// Returns an `ApiError` if the request fails.
pub async fn delete_leave_request(client: &ApiClient, id: Uuid) -> Result<Message, ApiError> {
    client.delete_json(&format!("/leave-requests/{id}")).await
}
