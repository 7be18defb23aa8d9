//! Client helpers for the qr-auth endpoints. None of these calls need a bearer
//! token; the validated token is never logged.

use super::types::{AuthToken, GeneratedCode, LoginCredential, PollResult, TokenResponse};
use crate::{
    api::{ApiClient, ApiError},
    qr_login::ports::QrAuthApi,
};
use tracing::instrument;

/// Issues a new single-use login code.
///
/// # Errors
/// Returns an `ApiError` if the request fails or the backend rejects it.
#[instrument(skip(client))]
pub async fn generate_code(client: &ApiClient) -> Result<GeneratedCode, ApiError> {
    client.post_empty("/qr-auth/generate").await
}

/// Asks whether `code` can still be redeemed.
///
/// # Errors
/// Returns an `ApiError` for transport failures or a non-2xx response.
#[instrument(skip(client))]
pub async fn check_status(client: &ApiClient, code: &str) -> Result<PollResult, ApiError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(ApiError::Config("QR code is required.".to_string()));
    }
    client.get_json_segment("/qr-auth/status", code).await
}

/// Redeems a code for the given employee.
///
/// # Errors
/// Returns `ApiError::Http` with the backend's detail (unknown employee, used or
/// expired code) or a transport error.
#[instrument(skip(client, credential), fields(employee_id = %credential.employee_id))]
pub async fn validate(
    client: &ApiClient,
    credential: &LoginCredential,
) -> Result<AuthToken, ApiError> {
    let response: TokenResponse = client.post_query("/qr-auth/validate", credential).await?;
    Ok(response.into())
}

impl QrAuthApi for ApiClient {
    async fn generate_code(&self) -> Result<GeneratedCode, ApiError> {
        generate_code(self).await
    }

    async fn check_status(&self, code: &str) -> Result<PollResult, ApiError> {
        check_status(self, code).await
    }

    async fn validate(&self, credential: &LoginCredential) -> Result<AuthToken, ApiError> {
        validate(self, credential).await
    }
}
