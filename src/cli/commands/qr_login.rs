use clap::{Arg, ArgAction, Command};

pub const ARG_POLL_SECONDS: &str = "poll-seconds";
pub const ARG_TTL_SECONDS: &str = "ttl-seconds";
pub const ARG_NO_PERSIST: &str = "no-persist";

#[must_use]
pub fn subcommand() -> Command {
    Command::new("qr-login")
        .about("Sign in by scanning a QR code, or type the code manually")
        .long_about(
            "Shows a one-time QR code and waits for it to be redeemed. While the code is displayed: \
             `m` opens the manual login form, `r` generates a new code, `q` quits.",
        )
        .arg(
            Arg::new(ARG_POLL_SECONDS)
                .long("poll-seconds")
                .help("Seconds between status checks of the displayed code")
                .env("WORKFORCE_POLL_SECONDS")
                .default_value("5")
                .value_parser(clap::value_parser!(u64).range(1..=60)),
        )
        .arg(
            Arg::new(ARG_TTL_SECONDS)
                .long("ttl-seconds")
                .help("Lifetime of a displayed code, matching the backend's expiry")
                .env("WORKFORCE_QR_TTL_SECONDS")
                .default_value("300")
                .value_parser(clap::value_parser!(u64).range(1..=3600)),
        )
        .arg(
            Arg::new(ARG_NO_PERSIST)
                .long("no-persist")
                .help("Keep the token in memory only; nothing is written to disk")
                .action(ArgAction::SetTrue),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        temp_env::with_vars(
            [
                ("WORKFORCE_POLL_SECONDS", None::<&str>),
                ("WORKFORCE_QR_TTL_SECONDS", None),
            ],
            || {
                let matches = subcommand().get_matches_from(vec!["qr-login"]);
                assert_eq!(matches.get_one::<u64>(ARG_POLL_SECONDS).copied(), Some(5));
                assert_eq!(matches.get_one::<u64>(ARG_TTL_SECONDS).copied(), Some(300));
                assert!(!matches.get_flag(ARG_NO_PERSIST));
            },
        );
    }

    #[test]
    fn env_and_flags() {
        temp_env::with_vars(
            [
                ("WORKFORCE_POLL_SECONDS", Some("2")),
                ("WORKFORCE_QR_TTL_SECONDS", Some("60")),
            ],
            || {
                let matches = subcommand().get_matches_from(vec!["qr-login", "--no-persist"]);
                assert_eq!(matches.get_one::<u64>(ARG_POLL_SECONDS).copied(), Some(2));
                assert_eq!(matches.get_one::<u64>(ARG_TTL_SECONDS).copied(), Some(60));
                assert!(matches.get_flag(ARG_NO_PERSIST));
            },
        );
    }

    #[test]
    fn zero_interval_rejected() {
        temp_env::with_vars([("WORKFORCE_POLL_SECONDS", None::<&str>)], || {
            let result = subcommand().try_get_matches_from(vec!["qr-login", "--poll-seconds", "0"]);
            assert!(result.is_err());
        });
    }
}
