//! `caresync session` handler: the countdown in a terminal.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::adapters::live::LiveTicker;
use crate::session::{run_countdown, Decision, SessionOutcome, SessionTimer};

/// Map a typed command to a countdown decision.
#[must_use]
pub fn parse_decision(line: &str) -> Option<Decision> {
    match line.trim().to_ascii_lowercase().as_str() {
        "e" | "extend" => Some(Decision::Extend),
        "l" | "logout" => Some(Decision::LogoutNow),
        "q" | "quit" => Some(Decision::Dispose),
        _ => None,
    }
}

/// How the terminal reports each ending.
#[must_use]
pub fn outcome_label(outcome: Option<SessionOutcome>) -> String {
    outcome.map_or_else(|| "dismissed".to_string(), |o| o.to_string())
}

/// Run the countdown until it ends, printing each tick.
///
/// # Errors
///
/// Returns an error string if the durations are rejected or the runtime
/// cannot start.
pub fn run(initial_remaining: u32, total: u32) -> Result<(), String> {
    let timer = SessionTimer::start(initial_remaining, total).map_err(|e| e.to_string())?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start runtime: {e}"))?;

    println!("Session expires in {} (extend / logout / quit)", timer.display());
    let outcome = runtime.block_on(countdown_with_stdin(timer));
    // A pending stdin read cannot be cancelled; don't wait for it.
    runtime.shutdown_background();

    println!("{}", outcome_label(outcome));
    Ok(())
}

async fn countdown_with_stdin(timer: SessionTimer) -> Option<SessionOutcome> {
    let (decisions, receiver) = mpsc::unbounded_channel();
    let countdown =
        run_countdown(timer, LiveTicker::new(), receiver, |state| println!("{}", state.display()));
    tokio::pin!(countdown);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut listening = true;
    loop {
        tokio::select! {
            outcome = &mut countdown => return outcome,
            line = lines.next_line(), if listening => match line {
                Ok(Some(line)) => match parse_decision(&line) {
                    Some(decision) => {
                        if decisions.send(decision).is_err() {
                            tracing::debug!(?decision, "countdown already finished; decision ignored");
                        }
                    }
                    None => eprintln!("unknown command {line:?}; use extend, logout or quit"),
                },
                Ok(None) => listening = false,
                Err(e) => {
                    tracing::warn!(error = %e, "stopped reading stdin");
                    listening = false;
                }
            },
        }
    }
}
