use super::{validator_date, validator_uuid};
use clap::{builder::PossibleValuesParser, Arg, Command};

pub const ARG_FROM: &str = "from";
pub const ARG_TO: &str = "to";
pub const ARG_SITE: &str = "site";
pub const ARG_TEAM: &str = "team";
pub const ARG_SUPERVISOR: &str = "supervisor";
pub const ARG_STATUS: &str = "status";

fn ranged(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(
            Arg::new(ARG_FROM)
                .long("from")
                .help("First day, YYYY-MM-DD")
                .required(true)
                .value_parser(validator_date()),
        )
        .arg(
            Arg::new(ARG_TO)
                .long("to")
                .help("Last day, YYYY-MM-DD")
                .required(true)
                .value_parser(validator_date()),
        )
}

fn supervisor_arg() -> Arg {
    Arg::new(ARG_SUPERVISOR)
        .long("supervisor")
        .help("Only this supervisor's team (UUID)")
        .value_parser(validator_uuid())
}

#[must_use]
pub fn subcommand() -> Command {
    Command::new("reports")
        .about("Dashboards and managerial reports")
        .subcommand_required(true)
        .subcommand(Command::new("dashboard").about("Counters for your role"))
        .subcommand(
            ranged("attendance", "Attendance summary for a date range")
                .arg(Arg::new(ARG_SITE).long("site").help("Only this site"))
                .arg(Arg::new(ARG_TEAM).long("team").help("Only this team"))
                .arg(supervisor_arg()),
        )
        .subcommand(
            ranged("leave", "Leave summary for a date range")
                .arg(
                    Arg::new(ARG_STATUS)
                        .long("status")
                        .help("Only requests in this state")
                        .value_parser(PossibleValuesParser::new(["pending", "approved", "rejected"])),
                )
                .arg(supervisor_arg()),
        )
        .subcommand(ranged("team-performance", "Per-team attendance figures"))
}
