//! Controller behaviour against an in-process backend, with tokio's clock
//! paused so countdown and poll timing is exact.

#![allow(clippy::unwrap_used)]

use super::*;
use crate::api::ApiError;
use crate::features::qr_auth::{AuthToken, GeneratedCode, LoginCredential, PollResult};
use crate::session::{MemoryTokenStore, StoreError};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
struct FakeApi {
    codes: Mutex<VecDeque<Result<GeneratedCode, ApiError>>>,
    statuses: Mutex<VecDeque<Result<PollResult, ApiError>>>,
    tokens: Mutex<VecDeque<Result<AuthToken, ApiError>>>,
    status_delay: Duration,
    checked: Mutex<Vec<String>>,
    submitted: Mutex<Vec<LoginCredential>>,
    generate_calls: AtomicUsize,
}

impl FakeApi {
    fn issuing(codes: &[&str]) -> Self {
        let api = Self::default();
        for code in codes {
            api.push_code(Ok(GeneratedCode::new(*code)));
        }
        api
    }

    fn push_code(&self, code: Result<GeneratedCode, ApiError>) {
        self.codes.lock().unwrap().push_back(code);
    }

    fn push_status(&self, status: Result<PollResult, ApiError>) {
        self.statuses.lock().unwrap().push_back(status);
    }

    fn push_token(&self, token: Result<AuthToken, ApiError>) {
        self.tokens.lock().unwrap().push_back(token);
    }

    fn checked(&self) -> Vec<String> {
        self.checked.lock().unwrap().clone()
    }

    fn submitted(&self) -> Vec<LoginCredential> {
        self.submitted.lock().unwrap().clone()
    }
}

impl QrAuthApi for FakeApi {
    async fn generate_code(&self) -> Result<GeneratedCode, ApiError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        self.codes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no code scripted".to_string())))
    }

    async fn check_status(&self, code: &str) -> Result<PollResult, ApiError> {
        self.checked.lock().unwrap().push(code.to_string());
        let status = self
            .statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(PollResult::valid()));
        if !self.status_delay.is_zero() {
            tokio::time::sleep(self.status_delay).await;
        }
        status
    }

    async fn validate(&self, credential: &LoginCredential) -> Result<AuthToken, ApiError> {
        self.submitted.lock().unwrap().push(credential.clone());
        self.tokens.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(ApiError::Http {
                status: 401,
                detail: "Invalid QR code".to_string(),
            })
        })
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

#[derive(Default)]
struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}

struct BrokenStore;

impl SessionStore for BrokenStore {
    fn save(&self, _token: &AuthToken) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk full".to_string()))
    }
}

struct Harness {
    controller: QrLoginController<FakeApi>,
    api: Arc<FakeApi>,
    notifier: Arc<RecordingNotifier>,
    store: MemoryTokenStore,
    navigator: Arc<RecordingNavigator>,
}

impl Harness {
    fn new(api: FakeApi) -> Self {
        Self::with_settings(api, LoginSettings::default())
    }

    fn with_settings(api: FakeApi, settings: LoginSettings) -> Self {
        let api = Arc::new(api);
        let notifier = Arc::new(RecordingNotifier::default());
        let store = MemoryTokenStore::new();
        let navigator = Arc::new(RecordingNavigator::default());
        let controller = QrLoginController::new(
            Arc::clone(&api),
            notifier.clone(),
            Arc::new(store.clone()),
            navigator.clone(),
        )
        .with_settings(settings);

        Self {
            controller,
            api,
            notifier,
            store,
            navigator,
        }
    }

    fn drain(&mut self) -> Vec<EventOutcome> {
        let mut outcomes = Vec::new();
        while let Some(event) = self.controller.try_next_event() {
            outcomes.push(self.controller.handle_event(event));
        }
        outcomes
    }

    fn stored_token(&self) -> Option<String> {
        self.store.token().map(|token| token.expose().to_string())
    }
}

fn settings(ttl_seconds: u64, poll_seconds: u64) -> LoginSettings {
    LoginSettings {
        ttl_seconds,
        poll_interval: Duration::from_secs(poll_seconds),
    }
}

#[tokio::test(start_paused = true)]
async fn countdown_expires_code_after_valid_polls() {
    let mut harness = Harness::with_settings(FakeApi::issuing(&["abc123"]), settings(22, 5));
    let session = harness.controller.generate().await.unwrap();
    assert_eq!(session.code(), "abc123");
    assert_eq!(session.status(), SessionStatus::Active);
    assert_eq!(harness.controller.format_remaining().as_deref(), Some("0:22"));

    let mut valid_polls = 0;
    let cause = loop {
        let event = harness.controller.next_event().await.unwrap();
        match harness.controller.handle_event(event) {
            EventOutcome::StillValid => valid_polls += 1,
            EventOutcome::Expired(cause) => break cause,
            EventOutcome::Ticked { .. } => {}
            other => panic!("unexpected outcome {other:?}"),
        }
    };

    assert_eq!(cause, ExpiryCause::CountdownElapsed);
    assert_eq!(valid_polls, 4);
    assert_eq!(
        harness.controller.session().map(QrSession::status),
        Some(SessionStatus::Expired)
    );
    assert_eq!(harness.notifier.notices(), vec![Notice::expired()]);
    assert!(harness.api.submitted().is_empty());
    assert!(!harness.controller.timers_running());
    assert!(harness.controller.can_retry());

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(harness.api.checked().len(), 4);
    assert!(harness
        .drain()
        .iter()
        .all(|outcome| *outcome == EventOutcome::Ignored));
}

#[tokio::test(start_paused = true)]
async fn manual_fallback_consumes_session() {
    let api = FakeApi::issuing(&["xyz789"]);
    api.push_token(Ok(AuthToken::new("tok")));
    let mut harness = Harness::new(api);
    harness.controller.generate().await.unwrap();

    let mut form = harness.controller.manual_form();
    assert_eq!(form.code, "xyz789");
    form.employee_id = "E100".to_string();
    harness.controller.submit_manual(&mut form).await.unwrap();

    assert_eq!(
        harness.controller.session().map(QrSession::status),
        Some(SessionStatus::Consumed)
    );
    assert_eq!(harness.stored_token().as_deref(), Some("tok"));
    assert_eq!(harness.navigator.routes(), vec![LANDING_ROUTE.to_string()]);
    assert_eq!(harness.notifier.notices(), vec![Notice::login_succeeded()]);
    assert!(!form.is_submitting());
    assert_eq!(form.last_error(), None);

    let submitted = harness.api.submitted();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].employee_id, "E100");
    assert_eq!(submitted[0].code, "xyz789");

    assert!(!harness.controller.timers_running());
    assert_eq!(
        harness.controller.run_until_terminal().await,
        Some(LoginOutcome::LoggedIn)
    );

    tokio::time::sleep(Duration::from_secs(600)).await;
    assert!(harness.api.checked().is_empty());
    assert!(harness.drain().is_empty());
}

#[tokio::test(start_paused = true)]
async fn failed_generation_leaves_nothing_scheduled() {
    let api = FakeApi::default();
    api.push_code(Err(ApiError::Network("connection refused".to_string())));
    api.push_code(Ok(GeneratedCode::new("abc123")));
    let mut harness = Harness::new(api);

    let err = harness.controller.generate().await.unwrap_err();
    assert!(matches!(err, LoginError::Generate(_)));
    assert!(harness.controller.session().is_none());
    assert!(!harness.controller.timers_running());
    assert!(harness.controller.can_retry());
    assert_eq!(harness.controller.run_until_terminal().await, None);

    let notices = harness.notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert_eq!(
        notices[0].description,
        "Failed to generate QR code: connection refused"
    );

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert!(harness.api.checked().is_empty());
    assert!(harness.drain().is_empty());

    let retry = harness.controller.generate().await.unwrap();
    assert_eq!(retry.code(), "abc123");
    assert!(harness.controller.timers_running());
}

#[tokio::test(start_paused = true)]
async fn second_expiry_signal_is_a_no_op() {
    let mut harness = Harness::new(FakeApi::issuing(&["abc123"]));
    harness.controller.generate().await.unwrap();

    assert!(harness.controller.on_poll_invalid());
    assert!(!harness.controller.on_countdown_zero());
    assert!(!harness.controller.on_poll_invalid());

    assert_eq!(
        harness.controller.expiry_cause(),
        Some(ExpiryCause::ReportedInvalid)
    );
    assert_eq!(harness.notifier.notices(), vec![Notice::expired()]);
    assert_eq!(harness.controller.remaining_seconds(), Some(0));
}

#[tokio::test(start_paused = true)]
async fn invalid_status_expires_session() {
    let api = FakeApi::issuing(&["abc123"]);
    api.push_status(Ok(PollResult::valid()));
    api.push_status(Ok(PollResult::invalid("QR code already used")));
    let mut harness = Harness::new(api);
    harness.controller.generate().await.unwrap();

    let started = tokio::time::Instant::now();
    let outcome = harness.controller.run_until_terminal().await;
    assert_eq!(outcome, Some(LoginOutcome::Expired(ExpiryCause::ReportedInvalid)));
    assert_eq!(started.elapsed(), Duration::from_secs(10));
    assert_eq!(harness.notifier.notices(), vec![Notice::expired()]);

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(harness.api.checked(), vec!["abc123", "abc123"]);
}

#[tokio::test(start_paused = true)]
async fn late_status_after_expiry_is_discarded() {
    let api = FakeApi {
        status_delay: Duration::from_secs(3),
        ..FakeApi::issuing(&["abc123"])
    };
    api.push_status(Ok(PollResult::invalid("QR code expired")));
    let mut harness = Harness::with_settings(api, settings(6, 5));
    harness.controller.generate().await.unwrap();

    // the check leaves at 5s and answers at 8s, after the countdown ends at 6s
    let outcome = harness.controller.run_until_terminal().await;
    assert_eq!(outcome, Some(LoginOutcome::Expired(ExpiryCause::CountdownElapsed)));

    tokio::time::sleep(Duration::from_secs(5)).await;
    let late = harness.controller.try_next_event().unwrap();
    assert!(matches!(late, SessionEvent::Status { .. }));
    assert_eq!(harness.controller.handle_event(late), EventOutcome::Ignored);

    assert_eq!(
        harness.controller.expiry_cause(),
        Some(ExpiryCause::CountdownElapsed)
    );
    assert_eq!(harness.notifier.notices().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn regenerate_cancels_previous_timers() {
    let mut harness = Harness::new(FakeApi::issuing(&["abc123", "xyz789"]));
    let first = harness.controller.generate().await.unwrap().id();

    tokio::time::sleep(Duration::from_secs(7)).await;
    let second = harness.controller.generate().await.unwrap().id();
    assert!(second > first);
    assert_eq!(harness.controller.remaining_seconds(), Some(DEFAULT_TTL_SECONDS));

    // everything queued so far belongs to the discarded session
    let stale = harness.drain();
    assert!(!stale.is_empty());
    assert!(stale.iter().all(|outcome| *outcome == EventOutcome::Ignored));

    tokio::time::sleep(Duration::from_millis(6_500)).await;
    let fresh = harness.drain();
    assert!(fresh.contains(&EventOutcome::StillValid));
    assert!(fresh.contains(&EventOutcome::Ticked {
        remaining: DEFAULT_TTL_SECONDS - 6
    }));
    assert_eq!(harness.api.checked(), vec!["abc123", "xyz789"]);
    assert!(harness.notifier.notices().is_empty());
}

#[tokio::test(start_paused = true)]
async fn failed_status_check_is_transient() {
    let api = FakeApi::issuing(&["abc123"]);
    api.push_status(Err(ApiError::Timeout("Request timed out.".to_string())));
    let mut harness = Harness::new(api);
    harness.controller.generate().await.unwrap();

    let mut polls = Vec::new();
    while polls.len() < 2 {
        let event = harness.controller.next_event().await.unwrap();
        match harness.controller.handle_event(event) {
            EventOutcome::Ticked { .. } => {}
            outcome => polls.push(outcome),
        }
    }

    assert_eq!(polls, vec![EventOutcome::PollFailed, EventOutcome::StillValid]);
    assert!(harness.controller.session().unwrap().is_active());
    assert!(harness.notifier.notices().is_empty());
}

#[tokio::test(start_paused = true)]
async fn rejected_manual_login_keeps_form_and_session() {
    let api = FakeApi::issuing(&["xyz789"]);
    api.push_token(Err(ApiError::Http {
        status: 401,
        detail: "Employee not found".to_string(),
    }));
    let mut harness = Harness::new(api);
    harness.controller.generate().await.unwrap();

    let mut form = ManualLoginForm::new("E999", "xyz789");
    let err = harness.controller.submit_manual(&mut form).await.unwrap_err();
    assert!(matches!(err, LoginError::Validate(_)));
    assert_eq!(err.to_string(), "Employee not found");

    assert_eq!(form.employee_id, "E999");
    assert_eq!(form.code, "xyz789");
    assert!(!form.is_submitting());
    assert_eq!(form.last_error(), Some("Employee not found"));

    assert!(harness.controller.session().unwrap().is_active());
    assert!(harness.controller.timers_running());
    assert_eq!(
        harness.notifier.notices(),
        vec![Notice::login_failed("Employee not found")]
    );
    assert!(harness.navigator.routes().is_empty());
    assert_eq!(harness.stored_token(), None);
}

#[tokio::test(start_paused = true)]
async fn blank_manual_form_never_calls_backend() {
    let mut harness = Harness::new(FakeApi::default());
    let mut form = ManualLoginForm::new("  ", "xyz789");

    let err = harness.controller.submit_manual(&mut form).await.unwrap_err();
    assert!(matches!(err, LoginError::Form(_)));
    assert_eq!(form.last_error(), Some("Employee ID is required"));
    assert!(!form.is_submitting());
    assert!(harness.api.submitted().is_empty());
    assert!(harness.notifier.notices().is_empty());
}

#[tokio::test(start_paused = true)]
async fn manual_login_without_displayed_code() {
    let api = FakeApi::default();
    api.push_token(Ok(AuthToken::new("tok")));
    let mut harness = Harness::new(api);

    let mut form = ManualLoginForm::new("E100", "xyz789");
    harness.controller.submit_manual(&mut form).await.unwrap();

    assert!(harness.controller.session().is_none());
    assert_eq!(harness.stored_token().as_deref(), Some("tok"));
    assert_eq!(harness.navigator.routes(), vec!["/".to_string()]);
    assert_eq!(harness.api.generate_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn manual_login_with_other_code_discards_displayed_one() {
    let api = FakeApi::issuing(&["abc123"]);
    api.push_token(Ok(AuthToken::new("tok")));
    let mut harness = Harness::new(api);
    harness.controller.generate().await.unwrap();

    let mut form = ManualLoginForm::new("E100", "printed-code");
    harness.controller.submit_manual(&mut form).await.unwrap();

    assert!(harness.controller.session().is_none());
    assert!(!harness.controller.timers_running());
    assert_eq!(harness.stored_token().as_deref(), Some("tok"));
}

#[tokio::test(start_paused = true)]
async fn store_failure_is_reported_without_navigation() {
    let api = Arc::new(FakeApi::issuing(&["abc123"]));
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let mut controller = QrLoginController::new(
        Arc::clone(&api),
        notifier.clone(),
        Arc::new(BrokenStore),
        navigator.clone(),
    );
    controller.generate().await.unwrap();

    let err = controller
        .on_validated(AuthToken::new("tok"))
        .unwrap_err();
    assert!(matches!(err, LoginError::Store(_)));
    assert_eq!(
        controller.session().map(QrSession::status),
        Some(SessionStatus::Consumed)
    );
    assert!(!controller.timers_running());
    assert!(navigator.routes().is_empty());

    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Login failed.");
}

#[tokio::test(start_paused = true)]
async fn teardown_stops_both_tasks() {
    let mut harness = Harness::new(FakeApi::issuing(&["abc123"]));
    harness.controller.generate().await.unwrap();
    assert!(harness.controller.timers_running());

    harness.controller.teardown();
    assert!(!harness.controller.timers_running());

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert!(harness.api.checked().is_empty());
    assert!(harness.drain().is_empty());
    assert!(harness.controller.session().is_none());
    assert!(harness.controller.can_retry());
}

#[tokio::test(start_paused = true)]
async fn run_until_terminal_returns_after_teardown() {
    let mut harness = Harness::new(FakeApi::issuing(&["abc123"]));
    harness.controller.generate().await.unwrap();
    harness.controller.teardown();

    let outcome = tokio::time::timeout(
        Duration::from_secs(600),
        harness.controller.run_until_terminal(),
    )
    .await
    .unwrap();
    assert_eq!(outcome, None);
}

#[tokio::test(start_paused = true)]
async fn teardown_keeps_terminal_session() {
    let mut harness = Harness::new(FakeApi::issuing(&["abc123"]));
    harness.controller.generate().await.unwrap();
    assert!(harness.controller.on_countdown_zero());

    harness.controller.teardown();
    assert_eq!(
        harness.controller.session().map(QrSession::status),
        Some(SessionStatus::Expired)
    );
    assert!(harness.controller.can_retry());
}

#[tokio::test(start_paused = true)]
async fn manual_login_with_expired_code_leaves_no_expired_session() {
    let api = FakeApi::issuing(&["abc123"]);
    api.push_token(Ok(AuthToken::new("tok")));
    let mut harness = Harness::new(api);
    harness.controller.generate().await.unwrap();
    assert!(harness.controller.on_countdown_zero());

    let mut form = ManualLoginForm::new("E100", "abc123");
    harness.controller.submit_manual(&mut form).await.unwrap();

    assert!(harness.controller.session().is_none());
    assert_eq!(harness.controller.expiry_cause(), None);
    assert!(!harness.controller.timers_running());
    assert_eq!(harness.stored_token().as_deref(), Some("tok"));
    assert_eq!(harness.navigator.routes(), vec![LANDING_ROUTE.to_string()]);
    assert_eq!(harness.controller.run_until_terminal().await, None);
}
