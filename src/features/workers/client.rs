//! Client helpers for `/workers`. Ids are validated locally as UUIDs so a typo
//! fails before any request is made.

use super::types::{Worker, WorkerCreate, WorkerUpdate};
use crate::api::{ApiClient, ApiError, Page, Pagination};
use uuid::Uuid;

/// # Errors
/// Returns an `ApiError` if the request fails.
pub async fn list_workers(
    client: &ApiClient,
    window: Pagination,
) -> Result<Page<Worker>, ApiError> {
    client.get_json_query("/workers/", &window).await
}

/// # Errors
/// Returns an `ApiError` if the request fails or the worker does not exist.
pub async fn get_worker(client: &ApiClient, id: Uuid) -> Result<Worker, ApiError> {
    client.get_json(&format!("/workers/{id}")).await
}

/// # Errors
/// Returns `ApiError::Config` for a blank name, otherwise any request failure.
pub async fn create_worker(client: &ApiClient, worker: &WorkerCreate) -> Result<Worker, ApiError> {
    if worker.name.trim().is_empty() {
        return Err(ApiError::Config("Worker name is required.".to_string()));
    }
    client.post_json("/workers/", worker).await
}

/// # Errors
/// Returns `ApiError::Config` when there is nothing to change, otherwise any
/// request failure.
pub async fn update_worker(
    client: &ApiClient,
    id: Uuid,
    changes: &WorkerUpdate,
) -> Result<Worker, ApiError> {
    if changes.is_empty() {
        return Err(ApiError::Config("No worker fields to update.".to_string()));
    }
    client.put_json(&format!("/workers/{id}"), changes).await
}

/// Deletes a worker; the backend answers with the deleted record.
///
/// # Errors
/// Returns an `ApiError` if the request fails.
pub async fn delete_worker(client: &ApiClient, id: Uuid) -> Result<Worker, ApiError> {
    client.delete_json(&format!("/workers/{id}")).await
}
