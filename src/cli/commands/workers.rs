use super::{validator_uuid, with_pagination};
use clap::{Arg, Command};

pub const ARG_ID: &str = "id";
pub const ARG_NAME: &str = "name";

/// Optional worker fields, shared by `create` and `update`.
pub const DETAIL_FIELDS: [(&str, &str); 9] = [
    ("gender", "Gender"),
    ("department", "Department"),
    ("address", "Postal address"),
    ("aadhar", "Aadhaar number"),
    ("bankname", "Bank name"),
    ("ifscode", "Bank IFSC code"),
    ("accountno", "Bank account number"),
    ("pfno", "Provident fund number"),
    ("esicno", "ESIC number"),
];

fn id_arg() -> Arg {
    Arg::new(ARG_ID)
        .help("Worker id (UUID)")
        .required(true)
        .value_parser(validator_uuid())
}

fn with_details(command: Command) -> Command {
    DETAIL_FIELDS
        .iter()
        .fold(command, |command, (name, help)| {
            command.arg(Arg::new(*name).long(*name).help(*help))
        })
}

#[must_use]
pub fn subcommand() -> Command {
    Command::new("workers")
        .about("Manage worker records")
        .subcommand_required(true)
        .subcommand(with_pagination(Command::new("list").about("List workers")))
        .subcommand(Command::new("get").about("Show one worker").arg(id_arg()))
        .subcommand(with_details(
            Command::new("create").about("Create a worker").arg(
                Arg::new(ARG_NAME)
                    .long("name")
                    .help("Full name")
                    .required(true),
            ),
        ))
        .subcommand(with_details(
            Command::new("update")
                .about("Change fields of a worker")
                .arg(id_arg())
                .arg(Arg::new(ARG_NAME).long("name").help("Full name")),
        ))
        .subcommand(Command::new("delete").about("Delete a worker").arg(id_arg()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::{ARG_LIMIT, ARG_SKIP};
    use uuid::Uuid;

    #[test]
    fn create_requires_name() {
        assert!(subcommand()
            .try_get_matches_from(vec!["workers", "create", "--gender", "F"])
            .is_err());

        let matches = subcommand().get_matches_from(vec![
            "workers",
            "create",
            "--name",
            "Asha",
            "--ifscode",
            "SBIN0001",
        ]);
        let create = matches.subcommand_matches("create");
        assert_eq!(
            create.and_then(|m| m.get_one::<String>("ifscode")).map(String::as_str),
            Some("SBIN0001")
        );
        assert_eq!(create.and_then(|m| m.get_one::<String>("pfno")), None);
    }

    #[test]
    fn get_parses_uuid() {
        let id = Uuid::new_v4();
        let matches = subcommand().get_matches_from(vec![
            "workers".to_string(),
            "get".to_string(),
            id.to_string(),
        ]);
        let get = matches.subcommand_matches("get");
        assert_eq!(get.and_then(|m| m.get_one::<Uuid>(ARG_ID)).copied(), Some(id));

        assert!(subcommand()
            .try_get_matches_from(vec!["workers", "delete", "42"])
            .is_err());
    }

    #[test]
    fn list_pagination_defaults() {
        let matches = subcommand().get_matches_from(vec!["workers", "list"]);
        let list = matches.subcommand_matches("list");
        assert_eq!(list.and_then(|m| m.get_one::<u64>(ARG_SKIP)).copied(), Some(0));
        assert_eq!(list.and_then(|m| m.get_one::<u64>(ARG_LIMIT)).copied(), Some(100));
    }
}
