//! Owns at most one login attempt at a time and applies the events its
//! countdown and poller produce. All state changes happen on the task that owns
//! the controller; the scheduled tasks only ever send events.

use super::countdown::Countdown;
use super::image::{ImageError, QrImage};
use super::manual::{FormError, ManualLoginForm};
use super::model::{
    format_countdown, QrSession, SessionEvent, SessionId, SessionStatus, DEFAULT_POLL_INTERVAL,
    DEFAULT_TTL_SECONDS, LANDING_ROUTE,
};
use super::poller::StatusPoller;
use super::ports::{Navigator, Notice, Notifier, QrAuthApi, SessionStore};
use crate::api::ApiError;
use crate::features::qr_auth::AuthToken;
use crate::session::StoreError;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Failed to generate QR code: {0}")]
    Generate(#[source] ApiError),
    #[error(transparent)]
    Render(#[from] ImageError),
    #[error("{}", .0.detail())]
    Validate(#[source] ApiError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoginSettings {
    pub ttl_seconds: u64,
    pub poll_interval: Duration,
}

impl Default for LoginSettings {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_TTL_SECONDS,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpiryCause {
    CountdownElapsed,
    ReportedInvalid,
}

/// What applying one event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// Stale, or the session already left `Active`.
    Ignored,
    Ticked { remaining: u64 },
    StillValid,
    /// The status request failed; the session stays `Active`.
    PollFailed,
    Expired(ExpiryCause),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn,
    Expired(ExpiryCause),
}

struct Timers {
    countdown: Countdown,
    poller: StatusPoller,
}

impl Timers {
    fn stop(&self) {
        self.countdown.stop();
        self.poller.stop();
    }

    fn is_running(&self) -> bool {
        self.countdown.is_running() || self.poller.is_running()
    }
}

pub struct QrLoginController<A: QrAuthApi> {
    api: Arc<A>,
    notifier: Arc<dyn Notifier>,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    settings: LoginSettings,
    last_id: SessionId,
    session: Option<QrSession>,
    remaining: u64,
    expiry: Option<ExpiryCause>,
    timers: Option<Timers>,
    events_tx: UnboundedSender<SessionEvent>,
    events_rx: UnboundedReceiver<SessionEvent>,
}

impl<A: QrAuthApi> QrLoginController<A> {
    #[must_use]
    pub fn new(
        api: Arc<A>,
        notifier: Arc<dyn Notifier>,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            api,
            notifier,
            store,
            navigator,
            settings: LoginSettings::default(),
            last_id: SessionId::default(),
            session: None,
            remaining: 0,
            expiry: None,
            timers: None,
            events_tx,
            events_rx,
        }
    }

    /// Applies to sessions generated after this call.
    #[must_use]
    pub fn with_settings(mut self, settings: LoginSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub const fn settings(&self) -> LoginSettings {
        self.settings
    }

    #[must_use]
    pub const fn session(&self) -> Option<&QrSession> {
        self.session.as_ref()
    }

    /// Seconds left on the current session's countdown.
    #[must_use]
    pub fn remaining_seconds(&self) -> Option<u64> {
        self.session.as_ref().map(|session| {
            if session.is_active() {
                self.remaining
            } else {
                0
            }
        })
    }

    /// Countdown text such as `4:59`.
    #[must_use]
    pub fn format_remaining(&self) -> Option<String> {
        self.remaining_seconds().map(format_countdown)
    }

    #[must_use]
    pub fn timers_running(&self) -> bool {
        self.timers.as_ref().is_some_and(Timers::is_running)
    }

    /// True when no session is in progress, so a new code may be requested.
    #[must_use]
    pub fn can_retry(&self) -> bool {
        self.session
            .as_ref()
            .map_or(true, |session| session.status().is_terminal())
    }

    /// Cause of the last expiry of the current session.
    #[must_use]
    pub const fn expiry_cause(&self) -> Option<ExpiryCause> {
        self.expiry
    }

    /// A manual form with the displayed code filled in.
    #[must_use]
    pub fn manual_form(&self) -> ManualLoginForm {
        let code = self
            .session
            .as_ref()
            .filter(|session| session.is_active())
            .map(|session| session.code().to_string())
            .unwrap_or_default();
        ManualLoginForm::new(String::new(), code)
    }

    /// Discards any current session and requests a new code. On failure there
    /// is no session and nothing is scheduled.
    ///
    /// # Errors
    /// Returns `LoginError::Generate` if the backend call fails and
    /// `LoginError::Render` if the code cannot be drawn.
    #[instrument(skip(self))]
    pub async fn generate(&mut self) -> Result<&QrSession, LoginError> {
        self.discard();

        let generated = match self.api.generate_code().await {
            Ok(generated) => generated,
            Err(err) => {
                warn!(error = %err, "QR code generation failed");
                self.notifier
                    .notify(Notice::generation_failed(&err.detail()));
                return Err(LoginError::Generate(err));
            }
        };

        let image = match QrImage::encode(&generated.code) {
            Ok(image) => image,
            Err(err) => {
                self.notifier
                    .notify(Notice::generation_failed(&err.to_string()));
                return Err(LoginError::Render(err));
            }
        };

        let id = self.last_id.next();
        self.last_id = id;
        let ttl_seconds = self.settings.ttl_seconds;

        self.timers = Some(Timers {
            countdown: Countdown::start(id, ttl_seconds, self.events_tx.clone()),
            poller: StatusPoller::start(
                Arc::clone(&self.api),
                id,
                generated.code.clone(),
                self.settings.poll_interval,
                self.events_tx.clone(),
            ),
        });
        self.remaining = ttl_seconds;
        info!(session = %id, ttl_seconds, "QR code issued");

        let session = QrSession::new(id, generated.code, Utc::now(), ttl_seconds, image);
        Ok(self.session.insert(session))
    }

    /// Waits for the next event from the scheduled tasks. Cancel safe.
    pub async fn next_event(&mut self) -> Option<SessionEvent> {
        self.events_rx.recv().await
    }

    pub fn try_next_event(&mut self) -> Option<SessionEvent> {
        self.events_rx.try_recv().ok()
    }

    /// Applies one event. Events from an earlier session, or arriving after the
    /// current one left `Active`, change nothing.
    pub fn handle_event(&mut self, event: SessionEvent) -> EventOutcome {
        let current = self
            .session
            .as_ref()
            .filter(|session| session.is_active())
            .map(QrSession::id);
        if current != Some(event.session()) {
            debug!(session = %event.session(), "discarding stale event");
            return EventOutcome::Ignored;
        }

        match event {
            SessionEvent::Tick { remaining, .. } => {
                self.remaining = remaining;
                EventOutcome::Ticked { remaining }
            }
            SessionEvent::CountdownZero { .. } => {
                self.on_countdown_zero();
                EventOutcome::Expired(ExpiryCause::CountdownElapsed)
            }
            SessionEvent::Status { result: Ok(poll), .. } if poll.valid => EventOutcome::StillValid,
            SessionEvent::Status { result: Ok(poll), .. } => {
                debug!(message = ?poll.message, "QR code reported invalid");
                self.on_poll_invalid();
                EventOutcome::Expired(ExpiryCause::ReportedInvalid)
            }
            SessionEvent::Status { result: Err(err), .. } => {
                warn!(error = %err, transient = err.is_transient(), "QR status check failed");
                EventOutcome::PollFailed
            }
        }
    }

    /// The backend says the code can no longer be redeemed. Returns whether the
    /// session was expired by this call.
    pub fn on_poll_invalid(&mut self) -> bool {
        self.expire(ExpiryCause::ReportedInvalid)
    }

    /// The countdown reached zero. Returns whether the session was expired by
    /// this call.
    pub fn on_countdown_zero(&mut self) -> bool {
        self.expire(ExpiryCause::CountdownElapsed)
    }

    /// Completes a login with a token obtained for the current code.
    ///
    /// # Errors
    /// Returns `LoginError::Store` if the token cannot be persisted.
    pub fn on_validated(&mut self, token: AuthToken) -> Result<(), LoginError> {
        self.complete_login(&token)
    }

    /// Submits the manual form. The form keeps its values on failure and its
    /// busy flag is cleared on every path.
    ///
    /// # Errors
    /// Returns `LoginError::Form` without calling the backend when a field is
    /// blank, `LoginError::Validate` with the backend's detail, or
    /// `LoginError::Store` if the token cannot be persisted.
    #[instrument(skip_all)]
    pub async fn submit_manual(&mut self, form: &mut ManualLoginForm) -> Result<(), LoginError> {
        let credential = match form.credential() {
            Ok(credential) => credential,
            Err(err) => {
                form.finish_submit(Some(err.to_string()));
                return Err(LoginError::Form(err));
            }
        };

        form.begin_submit();
        match self.api.validate(&credential).await {
            Ok(token) => {
                let same_code = self
                    .session
                    .as_ref()
                    .is_some_and(|session| session.code() == credential.code);
                if !same_code {
                    self.discard();
                }
                let result = self.complete_login(&token);
                form.finish_submit(result.as_ref().err().map(ToString::to_string));
                result
            }
            Err(err) => {
                let detail = err.detail();
                info!(error = %err, "manual login rejected");
                self.notifier.notify(Notice::login_failed(detail.clone()));
                form.finish_submit(Some(detail));
                Err(LoginError::Validate(err))
            }
        }
    }

    /// Processes events until the current session is no longer `Active`.
    /// Returns `None` when there is no session to wait on, or when nothing is
    /// scheduled that could move it.
    pub async fn run_until_terminal(&mut self) -> Option<LoginOutcome> {
        loop {
            match self.session.as_ref().map(QrSession::status)? {
                SessionStatus::Consumed => return Some(LoginOutcome::LoggedIn),
                SessionStatus::Expired => {
                    return self.expiry.map(LoginOutcome::Expired);
                }
                SessionStatus::Active if self.timers.is_none() => return None,
                SessionStatus::Active => {}
            }
            let event = self.next_event().await?;
            self.handle_event(event);
        }
    }

    /// Cancels both scheduled tasks. An `Active` session is discarded since
    /// nothing can expire or redeem it any more; a terminal one is kept.
    pub fn teardown(&mut self) {
        self.stop_timers();
        if self.session.as_ref().is_some_and(QrSession::is_active) {
            self.discard();
        }
    }

    fn stop_timers(&mut self) {
        if let Some(timers) = self.timers.take() {
            timers.stop();
        }
    }

    fn discard(&mut self) {
        self.stop_timers();
        if let Some(session) = self.session.take() {
            debug!(session = %session.id(), "session discarded");
        }
        self.remaining = 0;
        self.expiry = None;
    }

    fn expire(&mut self, cause: ExpiryCause) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !session.expire() {
            return false;
        }
        info!(session = %session.id(), ?cause, "QR code expired");
        self.stop_timers();
        self.remaining = 0;
        self.expiry = Some(cause);
        self.notifier.notify(Notice::expired());
        true
    }

    fn complete_login(&mut self, token: &AuthToken) -> Result<(), LoginError> {
        if let Some(session) = self.session.as_mut() {
            if session.consume() {
                info!(session = %session.id(), "QR code consumed");
            }
        }
        // the code was redeemed after it expired here; keep no stale outcome
        if self.session.as_ref().map(QrSession::status) == Some(SessionStatus::Expired) {
            self.discard();
        }
        self.stop_timers();
        self.remaining = 0;

        if let Err(err) = self.store.save(token) {
            warn!(error = %err, "failed to store token");
            self.notifier.notify(Notice::login_failed(err.to_string()));
            return Err(LoginError::Store(err));
        }
        self.navigator.navigate(LANDING_ROUTE);
        self.notifier.notify(Notice::login_succeeded());
        Ok(())
    }
}
