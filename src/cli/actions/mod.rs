pub mod attendance;
pub mod leave;
pub mod logout;
pub mod qr_login;
pub mod reports;
pub mod teams;
pub mod workers;

// Internal "interpreter" for `Action`.
mod run;

use crate::api::{Page, Pagination};
use chrono::{DateTime, Utc};

#[derive(Debug)]
pub enum Action {
    QrLogin(qr_login::Args),
    Logout(logout::Args),
    Workers(workers::Args),
    Attendance(attendance::Args),
    Leave(leave::Args),
    Teams(teams::Args),
    Reports(reports::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|value| !value.trim().is_empty()).unwrap_or("-")
}

fn short_time(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// Footer for a `{ data, count }` listing.
fn page_footer<T>(window: Pagination, page: &Page<T>) -> String {
    let shown = page.data.len() as u64;
    let first = if shown == 0 { 0 } else { window.skip + 1 };
    let range = format!("{first}-{} of {}", window.skip + shown, page.count);
    if window.has_more(page) {
        let next = window.next();
        format!("{range} (next: --skip {} --limit {})", next.skip, next.limit)
    } else {
        range
    }
}
