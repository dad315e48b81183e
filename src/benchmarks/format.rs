//! Benchmark result formatting utilities
//!
//! Renders recorded metrics as a fixed-width table. Column widths grow to fit
//! the longest entry so the output stays aligned in the log.

use super::data::PerformanceMetrics;
use std::fmt::Write;

/// Column widths in the order: (name, count, total, avg, min, max)
pub type ColumnWidths = (usize, usize, usize, usize, usize, usize);

/// Calculates column widths for benchmark table formatting
pub fn calculate_column_widths(benchmarks: &[(&String, &PerformanceMetrics)]) -> ColumnWidths {
    let mut widths: ColumnWidths = (20, 5, 12, 12, 12, 12);

    for (name, metrics) in benchmarks {
        widths.0 = widths.0.max(name.len());
        widths.1 = widths.1.max(metrics.count.to_string().len());
        widths.2 = widths.2.max(format!("{:?}", metrics.total_duration).len());
        widths.3 = widths.3.max(format!("{:?}", metrics.avg_duration).len());
        widths.4 = widths.4.max(format!("{:?}", metrics.min_duration).len());
        widths.5 = widths.5.max(format!("{:?}", metrics.max_duration).len());
    }

    widths
}

/// Formats benchmarks as a table, most time-consuming operation first
pub fn format_table(benchmarks: &mut [(&String, &PerformanceMetrics)]) -> String {
    benchmarks.sort_by(|a, b| b.1.total_duration.cmp(&a.1.total_duration));
    let (name_w, count_w, total_w, avg_w, min_w, max_w) = calculate_column_widths(benchmarks);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<name_w$} | {:>count_w$} | {:>total_w$} | {:>avg_w$} | {:>min_w$} | {:>max_w$}",
        "Operation", "Count", "Total", "Avg", "Min", "Max",
    );
    let _ = writeln!(
        out,
        "{}",
        "-".repeat(name_w + count_w + total_w + avg_w + min_w + max_w + 15)
    );

    for (name, metrics) in benchmarks.iter() {
        let _ = writeln!(
            out,
            "{:<name_w$} | {:>count_w$} | {:>total_w$} | {:>avg_w$} | {:>min_w$} | {:>max_w$}",
            name,
            metrics.count,
            format!("{:?}", metrics.total_duration),
            format!("{:?}", metrics.avg_duration),
            format!("{:?}", metrics.min_duration),
            format!("{:?}", metrics.max_duration),
        );
    }

    out
}
