pub mod attendance;
pub mod leave;
pub mod logging;
pub mod qr_login;
pub mod reports;
pub mod teams;
pub mod workers;

use chrono::NaiveDate;
use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};
use uuid::Uuid;

pub const ARG_API_URL: &str = "api-url";
pub const ARG_TOKEN_FILE: &str = "token-file";
pub const ARG_TIMEOUT_SECONDS: &str = "timeout-seconds";
pub const ARG_SKIP: &str = "skip";
pub const ARG_LIMIT: &str = "limit";

/// Accepts `YYYY-MM-DD`.
#[must_use]
pub fn validator_date() -> ValueParser {
    ValueParser::from(move |raw: &str| -> std::result::Result<NaiveDate, String> {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| format!("invalid date '{raw}', expected YYYY-MM-DD"))
    })
}

#[must_use]
pub fn validator_uuid() -> ValueParser {
    ValueParser::from(move |raw: &str| -> std::result::Result<Uuid, String> {
        Uuid::parse_str(raw.trim()).map_err(|_| format!("invalid id '{raw}', expected a UUID"))
    })
}

/// `--skip` / `--limit` for list subcommands.
#[must_use]
pub fn with_pagination(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_SKIP)
                .long("skip")
                .help("Number of records to skip")
                .default_value("0")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new(ARG_LIMIT)
                .long("limit")
                .help("Maximum number of records to return")
                .default_value("100")
                .value_parser(clap::value_parser!(u64).range(1..=1000)),
        )
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("workforce")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .long("api-url")
                .help("Base URL of the HR backend")
                .env("WORKFORCE_API_URL")
                .default_value("http://localhost:8000")
                .global(true),
        )
        .arg(
            Arg::new(ARG_TOKEN_FILE)
                .long("token-file")
                .help("Where the login token is stored")
                .long_help(
                    "Where the login token is stored. Defaults to $HOME/.config/workforce/token; the file is created with mode 0600.",
                )
                .env("WORKFORCE_TOKEN_FILE")
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT_SECONDS)
                .long("timeout-seconds")
                .help("HTTP request timeout in seconds")
                .env("WORKFORCE_TIMEOUT_SECONDS")
                .default_value("10")
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .subcommand(qr_login::subcommand())
        .subcommand(Command::new("logout").about("Forget the stored login token"))
        .subcommand(workers::subcommand())
        .subcommand(attendance::subcommand())
        .subcommand(leave::subcommand())
        .subcommand(teams::subcommand())
        .subcommand(reports::subcommand());

    logging::with_args(command)
}
