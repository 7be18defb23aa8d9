//! Collaborators the login controller talks to. They are injected so the
//! controller can run against the real backend, a terminal, or test doubles.

use crate::api::ApiError;
use crate::features::qr_auth::{AuthToken, GeneratedCode, LoginCredential, PollResult};
use crate::session::StoreError;
use std::fmt;
use std::future::Future;
use tracing::{error, info, warn};

/// The three qr-auth endpoints.
pub trait QrAuthApi: Send + Sync + 'static {
    fn generate_code(&self) -> impl Future<Output = Result<GeneratedCode, ApiError>> + Send;

    fn check_status(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<PollResult, ApiError>> + Send;

    fn validate(
        &self,
        credential: &LoginCredential,
    ) -> impl Future<Output = Result<AuthToken, ApiError>> + Send;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        formatter.write_str(label)
    }
}

/// A user-facing notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    #[must_use]
    pub fn new(level: NoticeLevel, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn expired() -> Self {
        Self::new(
            NoticeLevel::Warning,
            "QR Code Expired",
            "Please generate a new QR code",
        )
    }

    #[must_use]
    pub fn generation_failed(detail: &str) -> Self {
        Self::new(
            NoticeLevel::Error,
            "Error",
            format!("Failed to generate QR code: {detail}"),
        )
    }

    /// The backend's detail is shown verbatim.
    #[must_use]
    pub fn login_failed(detail: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, "Login failed.", detail)
    }

    #[must_use]
    pub fn login_succeeded() -> Self {
        Self::new(NoticeLevel::Success, "Success!", "Login successful.")
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.title, self.description)
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Receives the token after a successful login.
pub trait SessionStore: Send + Sync {
    /// # Errors
    /// Returns a `StoreError` if the token cannot be persisted.
    fn save(&self, token: &AuthToken) -> Result<(), StoreError>;
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Routes notices to the log; used when nothing renders them.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info | NoticeLevel::Success => {
                info!(title = %notice.title, "{}", notice.description);
            }
            NoticeLevel::Warning => warn!(title = %notice.title, "{}", notice.description),
            NoticeLevel::Error => error!(title = %notice.title, "{}", notice.description),
        }
    }
}
