//! QR-code login.
//!
//! A [`QrLoginController`] requests a short-lived code, shows it, and then
//! waits for one of three things:
//!
//! - the status poller reports the code as no longer valid (expired, used or
//!   unknown to the backend),
//! - the countdown reaches zero,
//! - the code is redeemed, either through a scan or the manual form.
//!
//! The first two expire the session, the third consumes it. Either way both
//! scheduled tasks are cancelled and later events for that session are ignored.

mod controller;
mod countdown;
mod image;
mod manual;
mod model;
pub mod ports;
mod poller;

pub use controller::{
    EventOutcome, ExpiryCause, LoginError, LoginOutcome, LoginSettings, QrLoginController,
};
pub use countdown::Countdown;
pub use image::{ImageError, QrImage};
pub use manual::{FormError, FormField, ManualLoginForm};
pub use model::{
    format_countdown, QrSession, SessionEvent, SessionId, SessionStatus, DEFAULT_POLL_INTERVAL,
    DEFAULT_TTL_SECONDS, LANDING_ROUTE, TICK,
};
pub use poller::StatusPoller;
pub use ports::{
    Navigator, Notice, NoticeLevel, Notifier, QrAuthApi, SessionStore, TracingNotifier,
};

#[cfg(test)]
mod tests;
