use crate::cli::globals::GlobalArgs;
use crate::features::reports::{client, flatten_scalars, DateRange, ReportFilter};
use anyhow::Result;
use serde_json::Value;

#[derive(Debug)]
pub enum Operation {
    Dashboard,
    Attendance {
        range: DateRange,
        filter: ReportFilter,
    },
    Leave {
        range: DateRange,
        filter: ReportFilter,
    },
    TeamPerformance(DateRange),
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub operation: Operation,
}

/// # Errors
/// Returns an error if not logged in or the backend rejects the request.
pub async fn execute(args: Args) -> Result<()> {
    let api = args.globals.authenticated_client()?;

    let report = match args.operation {
        Operation::Dashboard => client::dashboard_stats(&api).await?,
        Operation::Attendance { range, filter } => {
            client::attendance_summary(&api, range, &filter).await?
        }
        Operation::Leave { range, filter } => client::leave_summary(&api, range, &filter).await?,
        Operation::TeamPerformance(range) => client::team_performance(&api, range).await?,
    };
    print_report(&report);
    Ok(())
}

fn print_report(report: &Value) {
    let rows = flatten_scalars(report);
    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in rows {
        println!("{key:<width$}  {value}");
    }
}
