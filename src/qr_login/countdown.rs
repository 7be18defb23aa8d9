//! Per-session countdown. Ticks once per second from the TTL down to zero and
//! reports zero exactly once, then stops on its own.

use super::model::{SessionEvent, SessionId, TICK};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::trace;

#[derive(Debug)]
pub struct Countdown {
    handle: JoinHandle<()>,
}

impl Countdown {
    /// Starts counting down `ttl_seconds` for `session`. Must be called inside a
    /// tokio runtime.
    #[must_use]
    pub fn start(
        session: SessionId,
        ttl_seconds: u64,
        events: UnboundedSender<SessionEvent>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + TICK, TICK);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            let mut remaining = ttl_seconds;
            while remaining > 0 {
                ticker.tick().await;
                remaining -= 1;
                trace!(%session, remaining, "countdown tick");
                if events.send(SessionEvent::Tick { session, remaining }).is_err() {
                    return;
                }
            }
            let _ = events.send(SessionEvent::CountdownZero { session });
        });

        Self { handle }
    }

    /// No further events are sent once this returns.
    pub fn stop(&self) {
        self.handle.abort();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
