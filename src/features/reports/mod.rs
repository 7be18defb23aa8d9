//! Managerial reports. Payload shapes depend on the caller's role, so they are
//! kept as JSON values and flattened for display.

pub mod client;
pub mod types;

pub use types::{flatten_scalars, DateRange, ReportFilter};
