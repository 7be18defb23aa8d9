use super::{validator_date, validator_uuid, with_pagination};
use clap::{Arg, Command};

pub const ARG_ID: &str = "id";
pub const ARG_TYPE: &str = "type";
pub const ARG_FROM: &str = "from";
pub const ARG_TO: &str = "to";
pub const ARG_REASON: &str = "reason";
pub const ARG_COMMENT: &str = "comment";

fn id_arg() -> Arg {
    Arg::new(ARG_ID)
        .help("Leave request id (UUID)")
        .required(true)
        .value_parser(validator_uuid())
}

fn decision(name: &'static str, about: &'static str) -> Command {
    Command::new(name).about(about).arg(id_arg()).arg(
        Arg::new(ARG_COMMENT)
            .long("comment")
            .help("Comment shown to the requester (max 500 characters)"),
    )
}

#[must_use]
pub fn subcommand() -> Command {
    Command::new("leave")
        .about("File and decide leave requests")
        .subcommand_required(true)
        .subcommand(with_pagination(
            Command::new("list").about("List visible leave requests"),
        ))
        .subcommand(Command::new("get").about("Show one leave request").arg(id_arg()))
        .subcommand(
            Command::new("request")
                .about("File a new leave request")
                .arg(
                    Arg::new(ARG_TYPE)
                        .long("type")
                        .help("Leave type, e.g. sick or annual")
                        .required(true),
                )
                .arg(
                    Arg::new(ARG_FROM)
                        .long("from")
                        .help("First day off, YYYY-MM-DD")
                        .required(true)
                        .value_parser(validator_date()),
                )
                .arg(
                    Arg::new(ARG_TO)
                        .long("to")
                        .help("Last day off, YYYY-MM-DD")
                        .required(true)
                        .value_parser(validator_date()),
                )
                .arg(
                    Arg::new(ARG_REASON)
                        .long("reason")
                        .help("Reason (max 500 characters)")
                        .required(true),
                ),
        )
        .subcommand(decision("approve", "Approve a pending request"))
        .subcommand(decision("reject", "Reject a pending request"))
        .subcommand(Command::new("delete").about("Withdraw a leave request").arg(id_arg()))
}
