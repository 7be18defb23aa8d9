//! Attendance records: check-in, check-out and the supervisor's daily summary.

pub mod client;
pub mod types;

pub use types::{Attendance, AttendanceCreate, AttendanceFilter, AttendanceUpdate, DailySummary};
