#![allow(dead_code)]

use bar_chart::{ChartConfig, Series};

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

/// The chart from the documentation: three bars, one negative.
pub fn mixed_series() -> Series {
    Series::new(vec![10.0, -5.0, 20.0], ["a", "b", "c"])
}

pub fn small_config() -> ChartConfig {
    ChartConfig::default().with_size(300.0, 200.0)
}
