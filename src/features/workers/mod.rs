//! Worker records owned by the signed-in user (all workers for superusers).

pub mod client;
pub mod types;

pub use types::{Worker, WorkerCreate, WorkerUpdate};
