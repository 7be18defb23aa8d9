//! Interactive QR login. The code is drawn in the terminal and the countdown is
//! redrawn in place; keyboard commands arrive as lines on stdin.

use crate::cli::globals::GlobalArgs;
use crate::qr_login::{
    format_countdown, EventOutcome, LoginError, LoginSettings, Navigator, Notice, NoticeLevel,
    Notifier, QrAuthApi, QrLoginController, SessionStore,
};
use crate::session::MemoryTokenStore;
use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::{debug, info, warn};

const HINT: &str = "[m] manual login  [r] new code  [q] quit";

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub settings: LoginSettings,
    pub persist: bool,
}

struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => warn!(title = %notice.title, "{}", notice.description),
            _ => info!(title = %notice.title, "{}", notice.description),
        }
        println!("\n[{}] {notice}", notice.level);
    }
}

struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: &str) {
        debug!(route, "navigating");
        println!("Signed in. Continue at {route}");
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Manual,
    Regenerate,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    match line.trim().to_ascii_lowercase().as_str() {
        "" => Input::Empty,
        "m" | "manual" => Input::Manual,
        "r" | "retry" | "new" => Input::Regenerate,
        "q" | "quit" | "exit" => Input::Quit,
        _ => Input::Unknown(line.trim().to_string()),
    }
}

/// Runs the login screen until the user signs in or quits.
///
/// # Errors
/// Returns an error if the API URL is invalid or stdin cannot be read.
pub async fn execute(args: Args) -> Result<()> {
    let api = Arc::new(args.globals.anonymous_client()?);
    let store: Arc<dyn SessionStore> = if args.persist {
        Arc::new(args.globals.token_store())
    } else {
        Arc::new(MemoryTokenStore::new())
    };

    let mut controller =
        QrLoginController::new(api, Arc::new(TerminalNotifier), store, Arc::new(TerminalNavigator))
            .with_settings(args.settings);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    show_new_code(&mut controller).await;
    let result = interact(&mut controller, &mut lines).await;
    controller.teardown();

    if matches!(result, Ok(true)) {
        if args.persist {
            println!("Token saved to {}", args.globals.token_file.display());
        } else {
            println!("Token kept in memory only; it is discarded on exit.");
        }
    }
    result.map(|_| ())
}

/// Returns whether the user signed in.
async fn interact<A, R>(
    controller: &mut QrLoginController<A>,
    lines: &mut Lines<R>,
) -> Result<bool>
where
    A: QrAuthApi,
    R: AsyncBufRead + Unpin,
{
    loop {
        tokio::select! {
            Some(event) = controller.next_event() => {
                match controller.handle_event(event) {
                    EventOutcome::Ticked { remaining } => draw_countdown(remaining),
                    EventOutcome::Expired(cause) => {
                        debug!(?cause, "session expired");
                        println!("{HINT}");
                    }
                    EventOutcome::Ignored | EventOutcome::StillValid | EventOutcome::PollFailed => {}
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    return Ok(false);
                };
                match parse_input(&line) {
                    Input::Quit => return Ok(false),
                    Input::Regenerate => show_new_code(controller).await,
                    Input::Manual => {
                        if manual_login(controller, lines).await? {
                            return Ok(true);
                        }
                        println!("{HINT}");
                    }
                    Input::Empty => {}
                    Input::Unknown(other) => println!("Unknown command '{other}'. {HINT}"),
                }
            }
        }
    }
}

async fn show_new_code<A: QrAuthApi>(controller: &mut QrLoginController<A>) {
    match controller.generate().await {
        Ok(session) => {
            println!("{}", session.image().to_terminal());
            println!("Code: {}", session.code());
            println!(
                "Scan with the mobile app before {} UTC",
                session.expires_at().format("%H:%M:%S")
            );
            println!("{HINT}");
        }
        // The notifier already reported the failure.
        Err(err) => debug!(error = %err, "no code to display"),
    }
}

fn draw_countdown(remaining: u64) {
    let mut stdout = std::io::stdout();
    let _ = write!(stdout, "\rExpires in {}  ", format_countdown(remaining));
    let _ = stdout.flush();
}

/// Manual fallback. Returns whether the login succeeded; the form keeps its
/// values between attempts.
async fn manual_login<A, R>(
    controller: &mut QrLoginController<A>,
    lines: &mut Lines<R>,
) -> Result<bool>
where
    A: QrAuthApi,
    R: AsyncBufRead + Unpin,
{
    let mut form = controller.manual_form();
    loop {
        let Some(employee_id) = prompt(lines, "Employee ID", &form.employee_id).await? else {
            return Ok(false);
        };
        let Some(code) = prompt(lines, "QR code", &form.code).await? else {
            return Ok(false);
        };
        form.employee_id = employee_id;
        form.code = code;

        match controller.submit_manual(&mut form).await {
            Ok(()) => return Ok(true),
            // Local validation is not reported through the notifier.
            Err(LoginError::Form(err)) => println!("{err}"),
            Err(err) => debug!(error = %err, "manual login failed"),
        }

        match prompt(lines, "Try again? [y/N]", "").await? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => {}
            _ => return Ok(false),
        }
    }
}

/// Reads one answer; a blank line keeps `current`. `None` on end of input.
async fn prompt<R>(lines: &mut Lines<R>, label: &str, current: &str) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    if current.is_empty() {
        print!("{label}: ");
    } else {
        print!("{label} [{current}]: ");
    }
    let _ = std::io::stdout().flush();

    Ok(lines.next_line().await?.map(|line| {
        let line = line.trim();
        if line.is_empty() {
            current.to_string()
        } else {
            line.to_string()
        }
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn input_commands() {
        assert_eq!(parse_input(" M "), Input::Manual);
        assert_eq!(parse_input("r"), Input::Regenerate);
        assert_eq!(parse_input("quit"), Input::Quit);
        assert_eq!(parse_input("   "), Input::Empty);
        assert_eq!(parse_input("scan"), Input::Unknown("scan".to_string()));
    }

    #[tokio::test]
    async fn prompt_keeps_current_value_on_blank_line() {
        let mut lines = BufReader::new(&b"\n  E200 \n"[..]).lines();

        let kept = prompt(&mut lines, "QR code", "xyz789").await.unwrap();
        assert_eq!(kept.as_deref(), Some("xyz789"));

        let typed = prompt(&mut lines, "Employee ID", "").await.unwrap();
        assert_eq!(typed.as_deref(), Some("E200"));

        let eof = prompt(&mut lines, "Employee ID", "E200").await.unwrap();
        assert_eq!(eof, None);
    }
}
