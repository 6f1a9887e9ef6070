//! Command dispatch and handlers.

pub mod session;
pub mod txid;

use crate::cli::{Command, TxidCommand};
use crate::config::Config;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// `CARESYNC_REPLAY` serves clock and random values from a cassette;
/// `CARESYNC_RECORD` writes them to one when the command finishes.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command, config: &Config) -> Result<(), String> {
    match command {
        Command::Txid { action } => {
            let mut out = std::io::stdout().lock();
            let (form, count) = match action {
                TxidCommand::Validate { id } => return txid::validate(id, &mut out),
                TxidCommand::Long { count } => (txid::Form::Long, *count),
                TxidCommand::Short { count } => (txid::Form::Short, *count),
            };
            let ctx = ServiceContext::from_config(config)?;
            txid::generate(&ctx, form, count, &mut out)
        }
        Command::Session { remaining, total } => session::run(
            remaining.unwrap_or(config.session.initial_remaining),
            total.unwrap_or(config.session.total),
        ),
    }
}
