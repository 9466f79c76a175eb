//! Artificial response latency.
//!
//! Delays carry no meaning for the result of a request; disabling them
//! only changes timing.

use std::ops::RangeInclusive;
use std::time::Duration;

use rand::Rng;

use crate::config::LatencyConfig;

/// Sleeps for random durations drawn from configured ranges.
#[derive(Debug, Clone)]
pub struct LatencySimulator {
    enabled: bool,
    load_ms: RangeInclusive<u64>,
    metrics_ms: RangeInclusive<u64>,
}

impl LatencySimulator {
    pub fn new(config: &LatencyConfig) -> Self {
        Self {
            enabled: config.enabled,
            load_ms: ordered(config.load_min_ms, config.load_max_ms),
            metrics_ms: ordered(config.metrics_min_ms, config.metrics_max_ms),
        }
    }

    /// A simulator that never sleeps.
    #[cfg(test)]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            load_ms: 0..=0,
            metrics_ms: 0..=0,
        }
    }

    /// Delay applied before an endpoint produces its response.
    pub async fn simulate_load(&self) {
        if let Some(delay) = self.sample(&self.load_ms) {
            tokio::time::sleep(delay).await;
            tracing::debug!(delay_ms = delay.as_millis() as u64, "System load simulated");
        }
    }

    /// Shorter delay incurred while recording lookup metrics.
    pub async fn metrics_delay(&self) {
        if let Some(delay) = self.sample(&self.metrics_ms) {
            tokio::time::sleep(delay).await;
        }
    }

    fn sample(&self, range: &RangeInclusive<u64>) -> Option<Duration> {
        if !self.enabled {
            return None;
        }
        let ms = rand::thread_rng().gen_range(range.clone());
        Some(Duration::from_millis(ms))
    }
}

/// Build a range, swapping inverted bounds.
fn ordered(a: u64, b: u64) -> RangeInclusive<u64> {
    if a <= b {
        a..=b
    } else {
        b..=a
    }
}
