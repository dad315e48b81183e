//! Benchmark module tests
//!
//! Every test records under its own operation name because the store is global
//! and tests run in parallel.

use super::*;
use std::thread;
use std::time::{Duration, Instant};

fn enabled_config() -> BenchmarkConfig {
    BenchmarkConfig {
        enabled: true,
        min_duration_threshold: Duration::ZERO,
    }
}

/// Tests that a manual timer measures and records elapsed time
#[test]
fn test_timer() {
    let timer = Timer::new("test_timer", enabled_config());
    thread::sleep(Duration::from_millis(10));
    let duration = timer.stop();

    assert!(duration >= Duration::from_millis(10));
    let metrics = get_metrics("test_timer").unwrap();
    assert_eq!(metrics.count, 1);
    assert!(metrics.min_duration >= Duration::from_millis(10));
}

/// Tests that a scoped timer records on drop
#[test]
fn test_scoped_timer() {
    {
        let _timer = ScopedTimer::new("test_scoped_timer", enabled_config());
        thread::sleep(Duration::from_millis(2));
    }

    assert!(get_measurements().contains_key("test_scoped_timer"));
}

/// Tests that disabled timers still return a duration but record nothing
#[test]
fn test_disabled_timer_records_nothing() {
    let config = BenchmarkConfig {
        enabled: false,
        ..enabled_config()
    };
    Timer::new("test_disabled_timer", config).stop();
    assert!(get_metrics("test_disabled_timer").is_none());
}

/// Tests aggregation across several measurements
#[test]
fn test_metrics_aggregate() {
    for _ in 0..3 {
        Timer::new("test_metrics_aggregate", enabled_config()).stop();
    }
    let metrics = get_metrics("test_metrics_aggregate").unwrap();
    assert_eq!(metrics.count, 3);
    assert!(metrics.min_duration <= metrics.avg_duration);
    assert!(metrics.avg_duration <= metrics.max_duration);
}

/// Tests the tick rate counter against synthetic timestamps
#[test]
fn test_tick_rate_counter() {
    let mut counter = TickRateCounter::new(10);
    let start = Instant::now();
    counter.record_tick(start);
    assert_eq!(counter.ticks_per_second(), 0.0);

    for i in 1..=20u32 {
        counter.record_tick(start + Duration::from_millis(20) * i);
    }
    assert_eq!(counter.tick_times.len(), 10);
    assert!((counter.ticks_per_second() - 50.0).abs() < 1e-6);

    counter.reset();
    assert_eq!(counter.ticks_per_second(), 0.0);
}

/// Tests that the summary lists recorded operations
#[test]
fn test_format_summary() {
    Timer::new("test_format_summary", enabled_config()).stop();
    let summary = format_summary(Some(62.5));

    assert!(summary.starts_with("=== PERFORMANCE SUMMARY"));
    assert!(summary.contains("Tick rate: 62.5/s"));
    assert!(summary.contains("test_format_summary"));
    assert!(summary.contains("Operation"));
}

/// Tests that clearing forgets only the named operations
#[test]
fn test_clear_measurements() {
    Timer::new("test_clear_dropped", enabled_config()).stop();
    Timer::new("test_clear_kept", enabled_config()).stop();

    clear_measurements(&["test_clear_dropped"]);

    assert!(get_metrics("test_clear_dropped").is_none());
    assert_eq!(get_metrics("test_clear_kept").unwrap().count, 1);

    Timer::new("test_clear_dropped", enabled_config()).stop();
    assert_eq!(get_metrics("test_clear_dropped").unwrap().count, 1);
}
