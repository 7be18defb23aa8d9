use super::{validator_uuid, with_pagination};
use clap::{Arg, Command};

pub const ARG_ID: &str = "id";
pub const ARG_LABORER: &str = "laborer";
pub const ARG_TEAM: &str = "team";
pub const ARG_SITE: &str = "site";

#[must_use]
pub fn subcommand() -> Command {
    Command::new("teams")
        .about("Team assignments")
        .subcommand_required(true)
        .subcommand(with_pagination(
            Command::new("list").about("List team assignments"),
        ))
        .subcommand(Command::new("my-team").about("Active members you supervise"))
        .subcommand(
            Command::new("assign")
                .about("Assign a laborer to a team under you")
                .arg(
                    Arg::new(ARG_LABORER)
                        .long("laborer")
                        .help("Laborer id (UUID)")
                        .required(true)
                        .value_parser(validator_uuid()),
                )
                .arg(
                    Arg::new(ARG_TEAM)
                        .long("team")
                        .help("Team name")
                        .required(true),
                )
                .arg(Arg::new(ARG_SITE).long("site").help("Site location")),
        )
        .subcommand(
            Command::new("deactivate")
                .about("End a team assignment")
                .arg(
                    Arg::new(ARG_ID)
                        .help("Assignment id (UUID)")
                        .required(true)
                        .value_parser(validator_uuid()),
                ),
        )
}
