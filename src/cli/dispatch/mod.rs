//! Maps validated command-line matches to an [`Action`]. Anything the backend
//! would reject for shape alone (inverted date ranges, missing ids) fails here
//! before a request is made.

use crate::api::Pagination;
use crate::cli::actions::{attendance, leave, logout, qr_login, reports, teams, workers, Action};
use crate::cli::commands::{
    self, attendance as attendance_args, leave as leave_args, qr_login as qr_login_args,
    reports as reports_args, teams as teams_args, workers as workers_args,
};
use crate::cli::globals::{default_token_file, GlobalArgs};
use crate::features::attendance::AttendanceFilter;
use crate::features::leave_requests::{LeaveDecision, LeaveRequestCreate, LeaveStatus};
use crate::features::reports::{DateRange, ReportFilter};
use crate::features::teams::TeamAssignmentCreate;
use crate::features::workers::{WorkerCreate, WorkerUpdate};
use crate::qr_login::LoginSettings;
use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::ArgMatches;
use std::path::PathBuf;
use std::time::Duration;
use uuid::Uuid;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let globals = global_args(matches)?;

    match matches.subcommand() {
        Some(("qr-login", sub)) => Ok(Action::QrLogin(qr_login::Args {
            globals,
            settings: LoginSettings {
                ttl_seconds: required::<u64>(sub, qr_login_args::ARG_TTL_SECONDS)?,
                poll_interval: Duration::from_secs(required::<u64>(
                    sub,
                    qr_login_args::ARG_POLL_SECONDS,
                )?),
            },
            persist: !sub.get_flag(qr_login_args::ARG_NO_PERSIST),
        })),
        Some(("logout", _)) => Ok(Action::Logout(logout::Args { globals })),
        Some(("workers", sub)) => Ok(Action::Workers(workers::Args {
            globals,
            operation: workers_operation(sub)?,
        })),
        Some(("attendance", sub)) => Ok(Action::Attendance(attendance::Args {
            globals,
            operation: attendance_operation(sub)?,
        })),
        Some(("leave", sub)) => Ok(Action::Leave(leave::Args {
            globals,
            operation: leave_operation(sub)?,
        })),
        Some(("teams", sub)) => Ok(Action::Teams(teams::Args {
            globals,
            operation: teams_operation(sub)?,
        })),
        Some(("reports", sub)) => Ok(Action::Reports(reports::Args {
            globals,
            operation: reports_operation(sub)?,
        })),
        Some((name, _)) => bail!("unknown command: {name}"),
        None => bail!("missing command"),
    }
}

fn global_args(matches: &ArgMatches) -> Result<GlobalArgs> {
    let api_url = matches
        .get_one::<String>(commands::ARG_API_URL)
        .cloned()
        .context("missing required argument: --api-url")?;
    let token_file = matches
        .get_one::<String>(commands::ARG_TOKEN_FILE)
        .map(PathBuf::from)
        .or_else(default_token_file)
        .context("cannot locate the token file: set --token-file or WORKFORCE_TOKEN_FILE")?;
    let timeout = Duration::from_secs(required::<u64>(matches, commands::ARG_TIMEOUT_SECONDS)?);

    Ok(GlobalArgs::new(api_url, token_file, timeout))
}

fn required<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str) -> Result<T> {
    matches
        .get_one::<T>(id)
        .cloned()
        .with_context(|| format!("missing required argument: --{id}"))
}

fn optional(matches: &ArgMatches, id: &str) -> Option<String> {
    matches
        .get_one::<String>(id)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn window(matches: &ArgMatches) -> Result<Pagination> {
    Ok(Pagination::new(
        required::<u64>(matches, commands::ARG_SKIP)?,
        required::<u64>(matches, commands::ARG_LIMIT)?,
    ))
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn subcommand(matches: &ArgMatches) -> Result<(&str, &ArgMatches)> {
    matches.subcommand().context("missing subcommand")
}

fn workers_operation(matches: &ArgMatches) -> Result<workers::Operation> {
    let (name, sub) = subcommand(matches)?;
    Ok(match name {
        "list" => workers::Operation::List(window(sub)?),
        "get" => workers::Operation::Get(required::<Uuid>(sub, workers_args::ARG_ID)?),
        "delete" => workers::Operation::Delete(required::<Uuid>(sub, workers_args::ARG_ID)?),
        "create" => workers::Operation::Create(WorkerCreate {
            name: required::<String>(sub, workers_args::ARG_NAME)?,
            gender: optional(sub, "gender"),
            department: optional(sub, "department"),
            address: optional(sub, "address"),
            aadhar: optional(sub, "aadhar"),
            bankname: optional(sub, "bankname"),
            ifscode: optional(sub, "ifscode"),
            accountno: optional(sub, "accountno"),
            pfno: optional(sub, "pfno"),
            esicno: optional(sub, "esicno"),
        }),
        "update" => workers::Operation::Update {
            id: required::<Uuid>(sub, workers_args::ARG_ID)?,
            changes: WorkerUpdate {
                name: optional(sub, workers_args::ARG_NAME),
                gender: optional(sub, "gender"),
                department: optional(sub, "department"),
                address: optional(sub, "address"),
                aadhar: optional(sub, "aadhar"),
                bankname: optional(sub, "bankname"),
                ifscode: optional(sub, "ifscode"),
                accountno: optional(sub, "accountno"),
                pfno: optional(sub, "pfno"),
                esicno: optional(sub, "esicno"),
            },
        },
        other => bail!("unknown workers command: {other}"),
    })
}

fn attendance_operation(matches: &ArgMatches) -> Result<attendance::Operation> {
    let (name, sub) = subcommand(matches)?;
    Ok(match name {
        "list" => {
            let filter = AttendanceFilter {
                employee_id: sub.get_one::<Uuid>(attendance_args::ARG_EMPLOYEE).copied(),
                start_date: sub.get_one::<NaiveDate>(attendance_args::ARG_FROM).copied(),
                end_date: sub.get_one::<NaiveDate>(attendance_args::ARG_TO).copied(),
            };
            if let (Some(start), Some(end)) = (filter.start_date, filter.end_date) {
                if start > end {
                    bail!("--from must not be after --to");
                }
            }
            attendance::Operation::List {
                window: window(sub)?,
                filter,
            }
        }
        "check-in" => attendance::Operation::CheckIn {
            location: optional(sub, attendance_args::ARG_LOCATION),
            notes: optional(sub, attendance_args::ARG_NOTES),
            break_minutes: required::<i64>(sub, attendance_args::ARG_BREAK_MINUTES)?,
        },
        "check-out" => {
            attendance::Operation::CheckOut(required::<Uuid>(sub, attendance_args::ARG_ID)?)
        }
        "summary" => attendance::Operation::Summary(
            sub.get_one::<NaiveDate>(attendance_args::ARG_DATE).copied(),
        ),
        other => bail!("unknown attendance command: {other}"),
    })
}

fn leave_operation(matches: &ArgMatches) -> Result<leave::Operation> {
    let (name, sub) = subcommand(matches)?;
    Ok(match name {
        "list" => leave::Operation::List(window(sub)?),
        "get" => leave::Operation::Get(required::<Uuid>(sub, leave_args::ARG_ID)?),
        "delete" => leave::Operation::Delete(required::<Uuid>(sub, leave_args::ARG_ID)?),
        "request" => {
            let from = required::<NaiveDate>(sub, leave_args::ARG_FROM)?;
            let to = required::<NaiveDate>(sub, leave_args::ARG_TO)?;
            if to < from {
                bail!("--to must not be before --from");
            }
            leave::Operation::Request(LeaveRequestCreate {
                leave_type: required::<String>(sub, leave_args::ARG_TYPE)?,
                start_date: start_of_day(from),
                end_date: start_of_day(to),
                reason: required::<String>(sub, leave_args::ARG_REASON)?,
            })
        }
        "approve" => leave::Operation::Decide {
            id: required::<Uuid>(sub, leave_args::ARG_ID)?,
            decision: LeaveDecision::approve(optional(sub, leave_args::ARG_COMMENT)),
        },
        "reject" => leave::Operation::Decide {
            id: required::<Uuid>(sub, leave_args::ARG_ID)?,
            decision: LeaveDecision::reject(optional(sub, leave_args::ARG_COMMENT)),
        },
        other => bail!("unknown leave command: {other}"),
    })
}

fn teams_operation(matches: &ArgMatches) -> Result<teams::Operation> {
    let (name, sub) = subcommand(matches)?;
    Ok(match name {
        "list" => teams::Operation::List(window(sub)?),
        "my-team" => teams::Operation::MyTeam,
        "assign" => teams::Operation::Assign {
            laborer_id: required::<Uuid>(sub, teams_args::ARG_LABORER)?,
            assignment: TeamAssignmentCreate {
                team_name: required::<String>(sub, teams_args::ARG_TEAM)?,
                site_location: optional(sub, teams_args::ARG_SITE),
            },
        },
        "deactivate" => teams::Operation::Deactivate(required::<Uuid>(sub, teams_args::ARG_ID)?),
        other => bail!("unknown teams command: {other}"),
    })
}

fn date_range(matches: &ArgMatches) -> Result<DateRange> {
    let from = required::<NaiveDate>(matches, reports_args::ARG_FROM)?;
    let to = required::<NaiveDate>(matches, reports_args::ARG_TO)?;
    Ok(DateRange::new(from, to)?)
}

fn leave_status(raw: &str) -> Result<LeaveStatus> {
    Ok(match raw {
        "pending" => LeaveStatus::Pending,
        "approved" => LeaveStatus::Approved,
        "rejected" => LeaveStatus::Rejected,
        other => bail!("invalid leave status: {other}"),
    })
}

fn reports_operation(matches: &ArgMatches) -> Result<reports::Operation> {
    let (name, sub) = subcommand(matches)?;
    Ok(match name {
        "dashboard" => reports::Operation::Dashboard,
        "attendance" => reports::Operation::Attendance {
            range: date_range(sub)?,
            filter: ReportFilter {
                site_location: optional(sub, reports_args::ARG_SITE),
                team_name: optional(sub, reports_args::ARG_TEAM),
                supervisor_id: sub.get_one::<Uuid>(reports_args::ARG_SUPERVISOR).copied(),
                status: None,
            },
        },
        "leave" => reports::Operation::Leave {
            range: date_range(sub)?,
            filter: ReportFilter {
                supervisor_id: sub.get_one::<Uuid>(reports_args::ARG_SUPERVISOR).copied(),
                status: sub
                    .get_one::<String>(reports_args::ARG_STATUS)
                    .map(|raw| leave_status(raw))
                    .transpose()?,
                ..ReportFilter::default()
            },
        },
        "team-performance" => reports::Operation::TeamPerformance(date_range(sub)?),
        other => bail!("unknown reports command: {other}"),
    })
}
