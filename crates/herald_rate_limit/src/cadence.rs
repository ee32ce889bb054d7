//! Fixed-period pacing of poll cycles.

use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Paces poll cycles so each one starts a fixed period after the last.
///
/// A cycle that overran its period is followed immediately by the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    period: Duration,
}

impl Cadence {
    /// Create a cadence with the given period.
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// The cycle period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// How long to sleep after a cycle that started at `cycle_start`.
    pub fn remaining(&self, cycle_start: Instant) -> Duration {
        self.period.saturating_sub(cycle_start.elapsed())
    }

    /// Sleep out the rest of the cycle that started at `cycle_start`.
    pub async fn wait_for_next(&self, cycle_start: Instant) {
        let remaining = self.remaining(cycle_start);
        debug!(sleep_ms = remaining.as_millis() as u64, "Waiting for next cycle");
        if !remaining.is_zero() {
            tokio::time::sleep(remaining).await;
        }
    }
}
