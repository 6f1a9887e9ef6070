//! Random source port for drawing bounded integers.

/// Produces uniformly distributed integers.
///
/// Transaction IDs only ever need small bounded numbers, so the port stays
/// narrow and is easy to replay from a cassette.
pub trait RandomSource: Send + Sync {
    /// Returns a uniformly random value in `low..=high`.
    ///
    /// Implementations may assume `low <= high`.
    fn next_in_range(&self, low: u16, high: u16) -> u16;
}
