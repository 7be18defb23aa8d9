use crate::cli::actions::{attendance, leave, logout, qr_login, reports, teams, workers, Action};
use anyhow::Result;

/// Execute the provided action.
// Single dispatch point for all console actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::QrLogin(args) => qr_login::execute(args).await,
        Action::Logout(args) => logout::execute(&args),
        Action::Workers(args) => workers::execute(args).await,
        Action::Attendance(args) => attendance::execute(args).await,
        Action::Leave(args) => leave::execute(args).await,
        Action::Teams(args) => teams::execute(args).await,
        Action::Reports(args) => reports::execute(args).await,
    }
}
