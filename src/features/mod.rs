//! Typed clients for the backend's feature areas. Each area keeps its endpoint
//! paths and wire models together so the console and the login controller never
//! build URLs by hand. Authorization is enforced by the backend.

pub mod attendance;
pub mod leave_requests;
pub mod qr_auth;
pub mod reports;
pub mod teams;
pub mod timestamp;
pub mod workers;

use crate::api::ApiError;
use uuid::Uuid;

/// Parses a record id typed by the user.
///
/// # Errors
/// Returns `ApiError::Config` if `raw` is not a UUID.
pub fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ApiError::Config(format!("Invalid id: {raw}")))
}
