//! Update statistics for an occupancy map.
//!
//! Feature-gated and runtime-toggled to ensure zero overhead when disabled.
//!
//! # Usage
//!
//! ```ignore
//! use octomap::metrics::COLLECT_METRICS;
//!
//! // Compile with --features metrics
//! // Runtime toggle:
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//!
//! map.update(&[0.5, 0.5, 0.5], 0.9)?;
//! println!("{} splits", map.metrics().splits);
//! ```

use std::collections::VecDeque;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;
use std::sync::atomic::AtomicBool;

/// Runtime toggle for metrics collection.
/// Set to false to disable metrics gathering at runtime.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
    #[cfg(feature = "metrics")]
    {
        COLLECT_METRICS.load(Ordering::Relaxed)
    }
    #[cfg(not(feature = "metrics"))]
    {
        false
    }
}

/// Most recent update timings in microseconds, oldest first.
#[derive(Debug, Clone)]
pub struct TimingWindow {
    samples: VecDeque<u64>,
    capacity: usize,
}

impl TimingWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, dropping the oldest once full.
    pub fn push(&mut self, micros: u64) {
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(micros);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Mean of the retained samples, 0 when empty.
    pub fn average(&self) -> f64 {
        match self.samples.len() {
            0 => 0.0,
            n => self.samples.iter().sum::<u64>() as f64 / n as f64,
        }
    }

    /// Slowest retained sample.
    pub fn max(&self) -> Option<u64> {
        self.samples.iter().copied().max()
    }
}

impl Default for TimingWindow {
    fn default() -> Self {
        Self::new(128)
    }
}

/// Map-level statistics, updated on every call to `update`.
#[derive(Debug, Clone, Default)]
pub struct MapMetrics {
    /// Observations fused into the tree.
    pub updates: u64,
    /// Observations rejected as invalid arguments.
    pub rejected_updates: u64,
    /// Leaves turned into internal nodes.
    pub splits: u64,
    /// Rolling window of update times in microseconds.
    pub update_timings: TimingWindow,
    /// Last update time in microseconds.
    pub last_update_us: u64,
}

impl MapMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset counters and timings.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record an accepted observation and the splits it caused.
    pub fn record_update(&mut self, splits: usize, timing_us: u64) {
        if !is_enabled() {
            return;
        }
        self.updates += 1;
        self.splits += splits as u64;
        self.update_timings.push(timing_us);
        self.last_update_us = timing_us;
    }

    /// Record a rejected observation.
    pub fn record_rejected(&mut self) {
        if is_enabled() {
            self.rejected_updates += 1;
        }
    }

    /// Get average update timing in microseconds.
    pub fn avg_update_timing_us(&self) -> f64 {
        self.update_timings.average()
    }
}

/// Stopwatch for update timings. Reads zero when metrics are compiled out.
pub(crate) struct UpdateTimer {
    #[cfg(feature = "metrics")]
    start: web_time::Instant,
}

impl UpdateTimer {
    #[inline]
    pub(crate) fn start() -> Self {
        Self {
            #[cfg(feature = "metrics")]
            start: web_time::Instant::now(),
        }
    }

    #[inline]
    pub(crate) fn elapsed_us(&self) -> u64 {
        #[cfg(feature = "metrics")]
        {
            self.start.elapsed().as_micros() as u64
        }
        #[cfg(not(feature = "metrics"))]
        {
            0
        }
    }
}
