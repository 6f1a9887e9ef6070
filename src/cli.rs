//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `caresync`.
#[derive(Debug, Parser)]
#[command(name = "caresync", version, about = "CareSync session and transaction-ID tools")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate or validate transaction IDs.
    Txid {
        /// Transaction-ID action.
        #[command(subcommand)]
        action: TxidCommand,
    },
    /// Run the session-timeout countdown in the terminal.
    ///
    /// Type `extend`, `logout` or `quit` and press enter to decide.
    Session {
        /// Seconds left when the countdown starts.
        #[arg(long)]
        remaining: Option<u32>,
        /// Full length of the countdown in seconds.
        #[arg(long)]
        total: Option<u32>,
    },
}

/// Transaction-ID actions.
#[derive(Debug, Subcommand)]
pub enum TxidCommand {
    /// Generate timestamped IDs (`CS-YYYYMMDD-HHMMSS-NNNN`).
    Long {
        /// How many IDs to print.
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
    /// Generate display-only IDs (`CS-NNNN-MMMM`).
    Short {
        /// How many IDs to print.
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
    /// Check the shape of an ID.
    Validate {
        /// The ID to check.
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, TxidCommand};
    use clap::Parser;

    #[test]
    fn parses_txid_long_with_count() {
        let cli = Cli::parse_from(["caresync", "txid", "long", "--count", "3"]);
        assert!(matches!(cli.command, Command::Txid { action: TxidCommand::Long { count: 3 } }));
    }

    #[test]
    fn txid_short_defaults_to_one() {
        let cli = Cli::parse_from(["caresync", "txid", "short"]);
        assert!(matches!(cli.command, Command::Txid { action: TxidCommand::Short { count: 1 } }));
    }

    #[test]
    fn parses_validate_argument() {
        let cli = Cli::parse_from(["caresync", "txid", "validate", "CS-1234-5678"]);
        match cli.command {
            Command::Txid { action: TxidCommand::Validate { id } } => assert_eq!(id, "CS-1234-5678"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_session_overrides() {
        let cli = Cli::parse_from(["caresync", "session", "--remaining", "5", "--total", "10"]);
        assert!(matches!(
            cli.command,
            Command::Session { remaining: Some(5), total: Some(10) }
        ));
    }

    #[test]
    fn rejects_negative_durations() {
        assert!(Cli::try_parse_from(["caresync", "session", "--remaining", "-1"]).is_err());
    }
}
