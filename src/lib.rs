//! # Workforce (HR console client)
//!
//! `workforce` is the client side of a workforce-management backend: QR-code
//! login, attendance check-in/out, leave-request approval, worker and team
//! administration, and managerial reports.
//!
//! ## QR login
//!
//! The login screen is a small state machine driven by two scheduled tasks:
//!
//! - A **countdown** ticking once per second from the code's TTL (300 s) down
//!   to zero.
//! - A **status poller** asking the backend every 5 s whether the code is
//!   still valid.
//!
//! Whichever of the two reports the code as dead first expires the session;
//! the other signal is ignored. A successful validation (scanned code plus
//! employee ID, or the manual fallback form) consumes the session, hands the
//! bearer token to the [`qr_login::SessionStore`] and navigates to the landing
//! page. Both tasks report through a channel of events tagged with the id of
//! the session that scheduled them, so a response that arrives after the
//! session left the `Active` state is dropped instead of applied.
//!
//! ## Backend contract
//!
//! The backend is an opaque collaborator. List endpoints accept `skip`/`limit`
//! and return `{ data, count }`, validation failures come back as HTTP 422
//! with a structured `detail`, and domain rejections carry a `detail` string
//! that is shown to the user verbatim.

pub mod api;
pub mod cli;
pub mod features;
pub mod qr_login;
pub mod session;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
