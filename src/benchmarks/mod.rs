//! Benchmarking and Performance Analysis Library
//!
//! This module measures how long maze generation and movement ticks take. Timings
//! are collected into a process-wide store and summarized when a level ends.
//!
//! # Features
//! - **Timing Measurements**: `Timer` and `ScopedTimer` for code sections
//! - **Tick Rate Counter**: observed tick frequency of the host loop
//! - **Reports**: timestamped tables for the log

use std::time::Duration;

/// Configuration for benchmarking features
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Whether benchmarking is enabled
    pub enabled: bool,
    /// Minimum duration to record (filters out very fast operations)
    pub min_duration_threshold: Duration,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            enabled: cfg!(debug_assertions),
            min_duration_threshold: Duration::ZERO,
        }
    }
}

/// Data structures for storing benchmark measurements.
pub mod data;

/// Table formatting for benchmark reports.
pub mod format;

/// Timers and convenience functions.
pub mod utils;

#[cfg(test)]
mod tests;

pub use data::{PerformanceMetrics, TickRateCounter};
pub use utils::*;
