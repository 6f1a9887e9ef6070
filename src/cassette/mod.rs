//! Cassettes: recorded capability calls that can be replayed deterministically.

pub mod format;
pub mod recorder;
pub mod replayer;
