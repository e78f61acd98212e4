//! Bar chart of every algorithm at a single input size

use super::{group_thousands, padded_range, series_color};
use anyhow::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use sortbench_core::{BenchmarkDataset, ChartStyle};
use std::path::Path;

/// Renders `grafico_barras_<size>.png`
pub struct BarChartPlotter;

impl BarChartPlotter {
    /// Successful runs at `size`, in row order
    pub fn bars(dataset: &BenchmarkDataset, size: u64) -> Vec<(String, f64)> {
        dataset
            .successful()
            .filter(|r| r.size == size)
            .map(|r| (r.algorithm.clone(), r.time_ms))
            .collect()
    }

    /// One bar per algorithm, annotated with its time
    pub fn plot(
        dataset: &BenchmarkDataset,
        size: u64,
        style: &ChartStyle,
        path: &Path,
    ) -> Result<()> {
        let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let bars = Self::bars(dataset, size);
        if bars.is_empty() {
            tracing::warn!(size, "No successful runs at this size");
            root.present()?;
            return Ok(());
        }

        let max_time = bars.iter().map(|b| b.1).fold(0.0_f64, f64::max);
        // Headroom above the tallest bar for its label
        let y_range = if max_time > 0.0 {
            0.0..max_time * 1.15
        } else {
            padded_range(0.0, 0.0, 0.1)
        };

        let font = style.font_family.as_str();
        let names: Vec<&str> = bars.iter().map(|b| b.0.as_str()).collect();
        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!(
                    "Time comparison - array with {} elements",
                    group_thousands(size)
                ),
                (font, style.caption_size),
            )
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(80)
            .build_cartesian_2d((0..bars.len()).into_segmented(), y_range)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(bars.len())
            .x_desc("Algorithm")
            .y_desc("Time (ms)")
            .label_style((font, style.label_size))
            .x_label_formatter(&|v| match v {
                SegmentValue::CenterOf(i) => {
                    names.get(*i).map(|n| n.to_string()).unwrap_or_default()
                }
                _ => String::new(),
            })
            .light_line_style(BLACK.mix(0.05))
            .bold_line_style(BLACK.mix(0.3))
            .draw()?;

        chart.draw_series(bars.iter().enumerate().map(|(idx, (_, time))| {
            let color = series_color(style, idx, bars.len());
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(idx), 0.0),
                    (SegmentValue::Exact(idx + 1), *time),
                ],
                color.filled(),
            );
            bar.set_margin(0, 0, 10, 10);
            bar
        }))?;

        let annotation = TextStyle::from((font, style.label_size))
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(bars.iter().enumerate().map(|(idx, (_, time))| {
            Text::new(
                format!("{:.2}ms", time),
                (SegmentValue::CenterOf(idx), *time),
                annotation.clone(),
            )
        }))?;

        root.present()?;
        tracing::info!(path = %path.display(), size, bars = bars.len(), "Saved bar chart");
        Ok(())
    }
}
