use super::image::QrImage;
use crate::api::ApiError;
use crate::features::qr_auth::types::PollResult;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::fmt;
use std::time::Duration;

/// Lifetime of a login code, matching the backend's 5 minute expiry.
pub const DEFAULT_TTL_SECONDS: u64 = 300;

/// Interval between status checks while a code is displayed.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Countdown resolution.
pub const TICK: Duration = Duration::from_secs(1);

/// Where a successful login lands.
pub const LANDING_ROUTE: &str = "/";

/// Identifies one login attempt within a controller. Monotonic, never reused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(u64);

impl SessionId {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "qr-{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Expired,
    Consumed,
}

impl SessionStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// One generated login code and where it is in its lifecycle.
#[derive(Clone, Debug)]
pub struct QrSession {
    id: SessionId,
    code: String,
    issued_at: DateTime<Utc>,
    ttl_seconds: u64,
    status: SessionStatus,
    image: QrImage,
}

impl QrSession {
    pub(crate) fn new(
        id: SessionId,
        code: String,
        issued_at: DateTime<Utc>,
        ttl_seconds: u64,
        image: QrImage,
    ) -> Self {
        Self {
            id,
            code,
            issued_at,
            ttl_seconds,
            status: SessionStatus::Active,
            image,
        }
    }

    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub const fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    #[must_use]
    pub const fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub const fn image(&self) -> &QrImage {
        &self.image
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        let ttl = i64::try_from(self.ttl_seconds).unwrap_or(i64::MAX);
        self.issued_at + ChronoDuration::seconds(ttl)
    }

    /// Active -> Expired. Returns false (and changes nothing) otherwise.
    pub(crate) fn expire(&mut self) -> bool {
        self.transition(SessionStatus::Expired)
    }

    /// Active -> Consumed. Returns false (and changes nothing) otherwise.
    pub(crate) fn consume(&mut self) -> bool {
        self.transition(SessionStatus::Consumed)
    }

    fn transition(&mut self, to: SessionStatus) -> bool {
        if self.status == SessionStatus::Active && to.is_terminal() {
            self.status = to;
            true
        } else {
            false
        }
    }
}

/// Produced by the scheduled tasks of one session and consumed by the controller.
#[derive(Debug)]
pub enum SessionEvent {
    Tick {
        session: SessionId,
        remaining: u64,
    },
    CountdownZero {
        session: SessionId,
    },
    Status {
        session: SessionId,
        result: Result<PollResult, ApiError>,
    },
}

impl SessionEvent {
    #[must_use]
    pub const fn session(&self) -> SessionId {
        match self {
            Self::Tick { session, .. }
            | Self::CountdownZero { session }
            | Self::Status { session, .. } => *session,
        }
    }
}

/// Formats seconds as `m:ss` for the countdown display.
#[must_use]
pub fn format_countdown(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
