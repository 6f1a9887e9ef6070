//! Recording adapter for the `RandomSource` port.

use std::sync::{Arc, Mutex};

use serde_json::json;

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::RandomSource;

/// Records random draws while delegating to an inner implementation.
pub struct RecordingRandom {
    inner: Box<dyn RandomSource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingRandom {
    /// Creates a new recording random source wrapping the given implementation.
    pub fn new(inner: Box<dyn RandomSource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl RandomSource for RecordingRandom {
    fn next_in_range(&self, low: u16, high: u16) -> u16 {
        let result = self.inner.next_in_range(low, high);
        record_interaction(
            &self.recorder,
            "random",
            "next_in_range",
            &json!({ "low": low, "high": high }),
            &result,
        );
        result
    }
}
