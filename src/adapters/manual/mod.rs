//! Manually driven adapters for hosts and tests that control time themselves.

pub mod ticker;

pub use ticker::{ManualTickHandle, ManualTicker};
