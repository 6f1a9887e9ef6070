//! Replaying adapter for the `RandomSource` port.

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::RandomSource;

/// Replays recorded random draws from a cassette.
pub struct ReplayingRandom {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingRandom {
    /// Creates a new replaying random source from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl RandomSource for ReplayingRandom {
    /// # Panics
    ///
    /// Panics if the recorded draw lies outside `low..=high`; the cassette
    /// no longer matches the caller.
    fn next_in_range(&self, low: u16, high: u16) -> u16 {
        let (seq, output) = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            let interaction = replayer.next_interaction("random", "next_in_range");
            (interaction.seq, interaction.output.clone())
        };
        let value: u16 =
            serde_json::from_value(output).expect("random::next_in_range: expected a u16 output");
        assert!(
            (low..=high).contains(&value),
            "Cassette diverged: recorded draw {value} (seq={seq}) outside requested bounds \
             {low}..={high}"
        );
        value
    }
}
