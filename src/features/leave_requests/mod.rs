//! Leave requests: employees file them, supervisors and admins approve or
//! reject them.

pub mod client;
pub mod types;

pub use types::{LeaveDecision, LeaveRequest, LeaveRequestCreate, LeaveStatus};
