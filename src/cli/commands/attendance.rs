use super::{validator_date, validator_uuid, with_pagination};
use clap::{Arg, Command};

pub const ARG_ID: &str = "id";
pub const ARG_EMPLOYEE: &str = "employee";
pub const ARG_FROM: &str = "from";
pub const ARG_TO: &str = "to";
pub const ARG_LOCATION: &str = "location";
pub const ARG_NOTES: &str = "notes";
pub const ARG_BREAK_MINUTES: &str = "break-minutes";
pub const ARG_DATE: &str = "date";

#[must_use]
pub fn subcommand() -> Command {
    Command::new("attendance")
        .about("Check in, check out and review attendance")
        .subcommand_required(true)
        .subcommand(with_pagination(
            Command::new("list")
                .about("List attendance records, newest first")
                .arg(
                    Arg::new(ARG_EMPLOYEE)
                        .long("employee")
                        .help("Only records of this employee (UUID)")
                        .value_parser(validator_uuid()),
                )
                .arg(
                    Arg::new(ARG_FROM)
                        .long("from")
                        .help("First day, YYYY-MM-DD")
                        .value_parser(validator_date()),
                )
                .arg(
                    Arg::new(ARG_TO)
                        .long("to")
                        .help("Last day, YYYY-MM-DD")
                        .value_parser(validator_date()),
                ),
        ))
        .subcommand(
            Command::new("check-in")
                .about("Record a check-in now")
                .arg(Arg::new(ARG_LOCATION).long("location").help("Work site"))
                .arg(Arg::new(ARG_NOTES).long("notes").help("Free-form notes"))
                .arg(
                    Arg::new(ARG_BREAK_MINUTES)
                        .long("break-minutes")
                        .help("Break taken, in minutes")
                        .default_value("0")
                        .value_parser(clap::value_parser!(i64).range(0..=1440)),
                ),
        )
        .subcommand(
            Command::new("check-out")
                .about("Stamp the check-out time of a record")
                .arg(
                    Arg::new(ARG_ID)
                        .help("Attendance record id (UUID)")
                        .required(true)
                        .value_parser(validator_uuid()),
                ),
        )
        .subcommand(
            Command::new("summary")
                .about("Daily summary for supervisors and admins")
                .arg(
                    Arg::new(ARG_DATE)
                        .long("date")
                        .help("Day to summarize, YYYY-MM-DD (default: today)")
                        .value_parser(validator_date()),
                ),
        )
}
