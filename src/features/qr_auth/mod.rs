//! QR-code authentication endpoints: issue a short-lived code, report whether it
//! is still redeemable and exchange it (with an employee id) for a bearer token.

pub mod client;
pub mod types;

pub use client::{check_status, generate_code, validate};
pub use types::{AuthToken, GeneratedCode, LoginCredential, PollResult};
