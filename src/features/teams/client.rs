//! Client helpers for `/teams`. Unlike the other list endpoints these return a
//! plain array rather than a `{ data, count }` page.

use super::types::{TeamAssignment, TeamAssignmentCreate, TeamMember};
use crate::api::{ApiClient, ApiError, Message, Pagination};
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
struct LaborerQuery {
    laborer_id: Uuid,
}

/// # Errors
/// Returns an `ApiError` if the request fails.
pub async fn list_assignments(
    client: &ApiClient,
    window: Pagination,
) -> Result<Vec<TeamAssignment>, ApiError> {
    client.get_json_query("/teams/", &window).await
}

/// Active members supervised by the signed-in user.
///
/// # Errors
/// Returns an `ApiError`; callers who are not supervisors get a 403.
pub async fn my_team(client: &ApiClient) -> Result<Vec<TeamMember>, ApiError> {
    client.get_json("/teams/my-team").await
}

/// Assigns a laborer to a team under their current supervisor.
///
/// # Errors
/// Returns `ApiError::Config` for a blank team name, otherwise any request
/// failure (e.g. the laborer already has an active team).
pub async fn create_assignment(
    client: &ApiClient,
    laborer_id: Uuid,
    assignment: &TeamAssignmentCreate,
) -> Result<TeamAssignment, ApiError> {
    if assignment.team_name.trim().is_empty() {
        return Err(ApiError::Config("Team name is required.".to_string()));
    }
    client
        .post_json_query("/teams/", &LaborerQuery { laborer_id }, assignment)
        .await
}

/// Marks an assignment inactive; the record is kept.
///
/// # Errors
/// Returns an `ApiError` if the request fails.
pub async fn deactivate_assignment(client: &ApiClient, id: Uuid) -> Result<Message, ApiError> {
    client.delete_json(&format!("/teams/{id}")).await
}
