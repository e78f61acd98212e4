//! Visualization and plotting

pub mod bars;
pub mod comparison;
pub mod complexity;

pub use bars::BarChartPlotter;
pub use comparison::ComparisonPlotter;
pub use complexity::ComplexityPlotter;

use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use plotters::coord::types::RangedCoordf64;
use plotters::style::HSLColor;
use sortbench_core::ChartStyle;
use std::ops::Range;

/// Linear `f64` axis whose ticks sit on a fixed set of values
///
/// When the values outnumber what the axis can label, every n-th one is kept.
#[derive(Clone)]
pub(crate) struct TickedAxis {
    inner: RangedCoordf64,
    ticks: Vec<f64>,
}

impl TickedAxis {
    pub(crate) fn new(range: Range<f64>, ticks: Vec<f64>) -> Self {
        let ticks = ticks
            .into_iter()
            .filter(|t| range.start <= *t && *t <= range.end)
            .collect();
        Self {
            inner: range.into(),
            ticks,
        }
    }
}

impl Ranged for TickedAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.inner.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        let max = hint.max_num_points();
        if max == 0 {
            return Vec::new();
        }
        let step = (self.ticks.len() + max - 1) / max;
        self.ticks.iter().copied().step_by(step.max(1)).collect()
    }

    fn range(&self) -> Range<f64> {
        self.inner.range()
    }
}

/// Evenly spaced hue for series `idx` out of `count`
pub(crate) fn series_color(style: &ChartStyle, idx: usize, count: usize) -> HSLColor {
    let hue = idx as f64 / count.max(1) as f64;
    HSLColor(hue, style.saturation, style.lightness)
}

/// `94011` -> `94,011`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Axis range around `[min, max]` that never has zero width
pub(crate) fn padded_range(min: f64, max: f64, ratio: f64) -> Range<f64> {
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    if min == max {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * ratio };
        return (min - pad)..(max + pad);
    }
    let pad = (max - min) * ratio;
    (min - pad)..(max + pad)
}

/// Log-axis range covering the positive values, widened by a factor on each side
pub(crate) fn log_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .filter(|v| *v > 0.0 && v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if !min.is_finite() {
        return 0.001..1.0;
    }
    (min / 1.5)..(max * 1.5)
}
