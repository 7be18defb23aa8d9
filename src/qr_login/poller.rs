//! Periodic status checks for one session. Each check runs as its own task so
//! stopping the poller never cuts a request short; a result that arrives after
//! the session has ended is dropped by the controller.

use super::model::{SessionEvent, SessionId};
use super::ports::QrAuthApi;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, Instrument};

#[derive(Debug)]
pub struct StatusPoller {
    handle: JoinHandle<()>,
}

impl StatusPoller {
    /// Checks `code` every `every`, first one interval after start, until
    /// stopped. Must be called inside a tokio runtime.
    #[must_use]
    pub fn start<A: QrAuthApi>(
        api: Arc<A>,
        session: SessionId,
        code: String,
        every: Duration,
        events: UnboundedSender<SessionEvent>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + every, every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if events.is_closed() {
                    return;
                }
                debug!(%session, "polling QR status");

                let api = Arc::clone(&api);
                let code = code.clone();
                let events = events.clone();
                tokio::spawn(
                    async move {
                        let result = api.check_status(&code).await;
                        let _ = events.send(SessionEvent::Status { session, result });
                    }
                    .in_current_span(),
                );
            }
        });

        Self { handle }
    }

    /// Prevents further checks. A check already in flight still reports back.
    pub fn stop(&self) {
        self.handle.abort();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for StatusPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
