//! Error types for the countdown and transaction-ID modules.

use thiserror::Error;

/// Rejected countdown configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// A duration was zero.
    #[error("{field} must be greater than zero")]
    ZeroDuration {
        /// Which argument was zero.
        field: &'static str,
    },

    /// The countdown would start above its own total.
    #[error("remaining time ({remaining}s) exceeds total ({total}s)")]
    RemainingExceedsTotal {
        /// Requested starting value.
        remaining: u32,
        /// Requested total.
        total: u32,
    },
}

/// Text that is not a transaction ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionIdError {
    /// Matches neither the long nor the short shape.
    #[error("invalid transaction id: {0}")]
    Malformed(String),
}
