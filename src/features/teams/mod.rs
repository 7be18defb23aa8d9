//! Team assignments linking laborers to their supervisor.

pub mod client;
pub mod types;

pub use types::{Laborer, TeamAssignment, TeamAssignmentCreate, TeamMember};
