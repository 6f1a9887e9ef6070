//! Core library for the `caresync` CLI.
//!
//! Two independent utilities from the CareSync portal:
//!
//! - [`session`]: the session-timeout countdown that ends in exactly one
//!   of extend, logout or expiry.
//! - [`txid`]: transaction-ID generation and shape validation.
//!
//! Time, randomness and ticking are injected through [`ports`].

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod ports;
pub mod session;
pub mod txid;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command, &config::Config::from_env())
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_validates_transaction_id() {
        assert!(run(["caresync", "txid", "validate", "CS-1234-5678"]).is_ok());
    }

    #[test]
    fn run_errors_on_invalid_transaction_id() {
        let err = run(["caresync", "txid", "validate", "CS-1234"]).unwrap_err();
        assert!(err.contains("invalid transaction id"));
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["caresync", "unknown"]);
        assert!(result.is_err());
    }
}
