use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Tick rate counter for monitoring the host loop cadence
pub struct TickRateCounter {
    /// Duration between consecutive recorded ticks
    pub tick_times: Vec<Duration>,
    /// Maximum number of samples to keep in memory
    max_samples: usize,
    /// Timestamp of the last recorded tick
    last_tick_time: Option<Instant>,
}

impl TickRateCounter {
    /// Creates a new tick rate counter
    pub fn new(max_samples: usize) -> Self {
        Self {
            tick_times: Vec::with_capacity(max_samples),
            max_samples,
            last_tick_time: None,
        }
    }

    /// Records a tick at `now`
    pub fn record_tick(&mut self, now: Instant) {
        if let Some(last_time) = self.last_tick_time {
            self.tick_times.push(now.duration_since(last_time));

            // Keep only the most recent samples
            if self.tick_times.len() > self.max_samples {
                self.tick_times.remove(0);
            }
        }

        self.last_tick_time = Some(now);
    }

    /// Gets the average ticks per second over the kept samples
    pub fn ticks_per_second(&self) -> f64 {
        if self.tick_times.is_empty() {
            return 0.0;
        }

        let total_time: Duration = self.tick_times.iter().sum();
        let avg_tick_time = total_time / self.tick_times.len() as u32;

        if avg_tick_time.as_secs_f64() > 0.0 {
            1.0 / avg_tick_time.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Forgets every sample, e.g. between levels
    pub fn reset(&mut self) {
        self.tick_times.clear();
        self.last_tick_time = None;
    }
}

/// Performance metrics for a specific operation
#[derive(Debug, Clone)]
pub struct PerformanceMetrics {
    /// Number of times this operation was measured
    pub count: usize,
    /// Total duration of all measurements combined
    pub total_duration: Duration,
    /// Shortest duration recorded for this operation
    pub min_duration: Duration,
    /// Longest duration recorded for this operation
    pub max_duration: Duration,
    /// Average duration across all measurements
    pub avg_duration: Duration,
}

impl PerformanceMetrics {
    fn new() -> Self {
        Self {
            count: 0,
            total_duration: Duration::ZERO,
            min_duration: Duration::MAX,
            max_duration: Duration::ZERO,
            avg_duration: Duration::ZERO,
        }
    }

    fn update(&mut self, duration: Duration) {
        self.count += 1;
        self.total_duration += duration;
        self.min_duration = self.min_duration.min(duration);
        self.max_duration = self.max_duration.max(duration);
        self.avg_duration = self.total_duration / self.count as u32;
    }
}

lazy_static::lazy_static! {
    /// Centralized benchmark data storage
    pub static ref BENCHMARK_DATA: Arc<Mutex<BenchmarkData>> =
        Arc::new(Mutex::new(BenchmarkData::new()));
}

/// Central storage for all benchmark measurements
pub struct BenchmarkData {
    measurements: HashMap<String, PerformanceMetrics>,
}

impl BenchmarkData {
    fn new() -> Self {
        Self {
            measurements: HashMap::new(),
        }
    }

    /// Records a new measurement for the specified operation
    pub fn record_measurement(&mut self, name: &str, duration: Duration) {
        self.measurements
            .entry(name.to_string())
            .or_insert_with(PerformanceMetrics::new)
            .update(duration);
    }

    /// Returns a copy of all recorded measurements
    pub fn get_measurements(&self) -> HashMap<String, PerformanceMetrics> {
        self.measurements.clone()
    }

    /// Returns the metrics of one operation, if it was ever measured
    pub fn get(&self, name: &str) -> Option<&PerformanceMetrics> {
        self.measurements.get(name)
    }

    /// Forgets the measurements of the named operations
    pub fn clear(&mut self, names: &[&str]) {
        for name in names {
            self.measurements.remove(*name);
        }
    }
}
