//! Benchmark utility functions and helper types
//!
//! Convenience timers plus functions for reading, clearing and reporting the
//! global benchmark store.
//!
//! # Key Features
//! - **Manual Timers**: `Timer` for explicit start/stop timing
//! - **Scoped Timers**: `ScopedTimer` for automatic timing based on scope
//! - **Reports**: `format_summary` and `log_summary`

use chrono::{DateTime, Local};
use log::info;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::BenchmarkConfig;
use super::data::{BENCHMARK_DATA, PerformanceMetrics};
use super::format::format_table;

/// Operation name used for maze generation timings
pub const MAZE_GENERATION: &str = "maze generation";

/// Operation name used for movement tick timings
pub const MOVEMENT_TICK: &str = "movement tick";

/// Operations measured per level, cleared once the level is reported
pub const LEVEL_OPERATIONS: [&str; 2] = [MAZE_GENERATION, MOVEMENT_TICK];

/// A timer for measuring execution time of code sections
///
/// Starts timing when created; [`Timer::stop`] records the measurement.
pub struct Timer {
    name: String,
    start_time: Instant,
    config: BenchmarkConfig,
}

impl Timer {
    /// Creates a new timer with the given name
    pub fn new(name: &str, config: BenchmarkConfig) -> Self {
        Self {
            name: name.to_string(),
            start_time: Instant::now(),
            config,
        }
    }

    /// Stops the timer and records the measurement
    ///
    /// Returns the elapsed duration whether or not it was recorded.
    pub fn stop(self) -> Duration {
        let duration = self.start_time.elapsed();

        if self.config.enabled && duration >= self.config.min_duration_threshold {
            if let Ok(mut data) = BENCHMARK_DATA.lock() {
                data.record_measurement(&self.name, duration);
            }
        }

        duration
    }
}

/// A scoped timer that records its measurement when dropped
pub struct ScopedTimer {
    timer: Option<Timer>,
}

impl ScopedTimer {
    /// Creates a new scoped timer
    pub fn new(name: &str, config: BenchmarkConfig) -> Self {
        Self {
            timer: Some(Timer::new(name, config)),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.stop();
        }
    }
}

/// Times a closure execution with default configuration
pub fn time<F, R>(name: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let timer = Timer::new(name, BenchmarkConfig::default());
    let result = f();
    timer.stop();
    result
}

/// Creates a scoped timer with default configuration
pub fn scoped_timer(name: &str) -> ScopedTimer {
    ScopedTimer::new(name, BenchmarkConfig::default())
}

/// Forgets the measurements of the named operations
pub fn clear_measurements(names: &[&str]) {
    if let Ok(mut data) = BENCHMARK_DATA.lock() {
        data.clear(names);
    }
}

/// Returns a copy of all recorded measurements
pub fn get_measurements() -> HashMap<String, PerformanceMetrics> {
    BENCHMARK_DATA
        .lock()
        .map(|data| data.get_measurements())
        .unwrap_or_default()
}

/// Returns the metrics of a single operation
pub fn get_metrics(name: &str) -> Option<PerformanceMetrics> {
    BENCHMARK_DATA
        .lock()
        .ok()
        .and_then(|data| data.get(name).cloned())
}

/// Builds a timestamped summary of every recorded measurement
///
/// `tick_rate` is the observed ticks per second of the host loop, if known.
pub fn format_summary(tick_rate: Option<f64>) -> String {
    let measurements = get_measurements();
    let now: DateTime<Local> = Local::now();
    let mut summary = format!(
        "=== PERFORMANCE SUMMARY ({}) ===\n",
        now.format("%Y-%m-%d %H:%M:%S")
    );

    if let Some(rate) = tick_rate.filter(|rate| *rate > 0.0) {
        summary.push_str(&format!("Tick rate: {rate:.1}/s\n"));
    }

    if measurements.is_empty() {
        summary.push_str("No measurements recorded\n");
        return summary;
    }

    let mut rows: Vec<_> = measurements.iter().collect();
    summary.push_str(&format_table(&mut rows));
    summary
}

/// Logs the summary at info level
pub fn log_summary(tick_rate: Option<f64>) {
    for line in format_summary(tick_rate).lines() {
        info!("{line}");
    }
}
