//! Global `-v` flag. Repeating it raises the level one step; the
//! `WORKFORCE_LOG_LEVEL` variable takes either a level name or its index.

use clap::{builder::ValueParser, Arg, ArgAction, Command};

pub const ARG_VERBOSITY: &str = "verbosity";

const LOG_LEVEL_ENV: &str = "WORKFORCE_LOG_LEVEL";

/// Level names in verbosity order; the index is the value stored for the arg.
const LEVEL_NAMES: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Maps `warn`, `WARN` or `1` to the same verbosity.
///
/// # Errors
/// Returns a message listing the accepted names for anything else.
pub fn parse_log_level(raw: &str) -> Result<u8, String> {
    let raw = raw.trim();
    let index = match raw.parse::<usize>() {
        Ok(number) => Some(number).filter(|number| *number < LEVEL_NAMES.len()),
        Err(_) => LEVEL_NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(raw)),
    };

    index
        .and_then(|index| u8::try_from(index).ok())
        .ok_or_else(|| {
            format!(
                "unknown log level '{raw}', expected one of {} or 0-{}",
                LEVEL_NAMES.join(", "),
                LEVEL_NAMES.len() - 1
            )
        })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Log verbosity, repeat to raise it: -v warn, -vv info, -vvv debug, -vvvv trace")
            .env(LOG_LEVEL_ENV)
            .global(true)
            .action(ArgAction::Count)
            .value_parser(ValueParser::from(parse_log_level)),
    )
}
