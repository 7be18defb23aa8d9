//! Typed access to the HR backend's REST API.

mod client;
pub mod config;
mod errors;
mod message;
mod pagination;

pub use client::ApiClient;
pub use config::{ApiConfig, API_PREFIX, DEFAULT_TIMEOUT};
pub use errors::{ApiError, FieldIssue};
pub use message::Message;
pub use pagination::{Page, Pagination, DEFAULT_LIMIT};
