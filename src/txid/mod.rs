//! Transaction identifiers.
//!
//! Two textual shapes share the [`PREFIX`]:
//!
//! - long: `CS-YYYYMMDD-HHMMSS-NNNN` (local date and time, then a random number)
//! - short: `CS-NNNN-MMMM` (two random numbers; for display only)
//!
//! Every random group is drawn from `1000..=9999`. Nothing checks
//! generated IDs against earlier ones, so two long IDs issued within the
//! same second collide with probability 1/9000.

pub mod generator;
pub mod id;
pub mod validate;

pub use generator::TransactionIdGenerator;
pub use id::{TransactionId, TransactionIdKind};
pub use validate::{is_valid_long, is_valid_short};

/// Literal every transaction ID starts with.
pub const PREFIX: &str = "CS";

/// Smallest value of a random group.
pub const RANDOM_MIN: u16 = 1000;

/// Largest value of a random group.
pub const RANDOM_MAX: u16 = 9999;
