use crate::features::timestamp;
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response of `POST /qr-auth/generate`. Only `code` is required.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GeneratedCode {
    pub code: String,
    #[serde(default, with = "timestamp::option")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_used: bool,
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl GeneratedCode {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            expires_at: None,
            is_used: false,
            id: None,
            created_at: None,
        }
    }
}

/// Response of `GET /qr-auth/status/{code}`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct PollResult {
    pub valid: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub remaining_seconds: Option<i64>,
}

impl PollResult {
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            valid: true,
            message: None,
            remaining_seconds: None,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
            remaining_seconds: None,
        }
    }
}

/// Query of `POST /qr-auth/validate`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct LoginCredential {
    pub employee_id: String,
    #[serde(rename = "qr_code")]
    pub code: String,
}

/// Bearer token returned by a successful validation.
#[derive(Clone, Debug)]
pub struct AuthToken {
    access_token: SecretString,
    token_type: String,
}

impl AuthToken {
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: SecretString::from(access_token.into()),
            token_type: "bearer".to_string(),
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &SecretString {
        &self.access_token
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        self.access_token.expose_secret()
    }

    #[must_use]
    pub fn token_type(&self) -> &str {
        &self.token_type
    }
}

/// Wire shape of the token; converted right away so the value is never printed.
#[derive(Deserialize)]
pub(crate) struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
}

impl From<TokenResponse> for AuthToken {
    fn from(response: TokenResponse) -> Self {
        let mut token = Self::new(response.access_token);
        if let Some(token_type) = response.token_type {
            token.token_type = token_type;
        }
        token
    }
}
