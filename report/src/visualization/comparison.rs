//! Time vs. size line chart, one series per algorithm

use super::{group_thousands, log_range, padded_range, series_color, TickedAxis};
use anyhow::Result;
use plotters::prelude::*;
use sortbench_core::{BenchmarkDataset, ChartStyle};
use std::path::Path;

/// Renders `grafico_comparacao_algoritmos.png`
pub struct ComparisonPlotter;

impl ComparisonPlotter {
    /// Successful observations grouped per algorithm, in order of first appearance
    pub fn series(dataset: &BenchmarkDataset) -> Vec<(String, Vec<(f64, f64)>)> {
        dataset
            .successful_algorithms()
            .into_iter()
            .map(|alg| (alg.to_string(), dataset.observations(alg)))
            .collect()
    }

    /// Plot every algorithm on a log-scaled time axis
    ///
    /// X ticks sit exactly on the distinct sizes present in the data.
    pub fn plot(dataset: &BenchmarkDataset, style: &ChartStyle, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let series = Self::series(dataset);
        if series.is_empty() {
            tracing::warn!("No successful runs to plot");
            root.present()?;
            return Ok(());
        }

        let sizes: Vec<f64> = dataset
            .successful_sizes()
            .into_iter()
            .map(|s| s as f64)
            .collect();
        let x_axis = TickedAxis::new(
            padded_range(sizes[0], sizes[sizes.len() - 1], 0.03),
            sizes,
        );
        let y_range = log_range(series.iter().flat_map(|(_, pts)| pts.iter().map(|p| p.1)));

        let font = style.font_family.as_str();
        let mut chart = ChartBuilder::on(&root)
            .caption(
                "Performance Comparison - Sorting Algorithms",
                (font, style.caption_size),
            )
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(80)
            .build_cartesian_2d(x_axis, y_range.log_scale())?;

        chart
            .configure_mesh()
            .x_desc("Array size (elements)")
            .y_desc("Time (ms)")
            .label_style((font, style.label_size))
            .x_label_formatter(&|x| group_thousands(x.round() as u64))
            .y_label_formatter(&|y| {
                if *y >= 1.0 {
                    format!("{:.0}", y)
                } else {
                    format!("{:.3}", y)
                }
            })
            .light_line_style(BLACK.mix(0.05))
            .bold_line_style(BLACK.mix(0.3))
            .draw()?;

        for (idx, (algorithm, points)) in series.iter().enumerate() {
            let color = series_color(style, idx, series.len());
            // Log axis: non-positive times cannot be placed
            let visible: Vec<(f64, f64)> = points.iter().copied().filter(|p| p.1 > 0.0).collect();

            chart
                .draw_series(LineSeries::new(
                    visible.iter().copied(),
                    color.stroke_width(style.line_width),
                ))?
                .label(algorithm.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });

            chart.draw_series(
                visible
                    .iter()
                    .map(|p| Circle::new(*p, style.marker_size, color.filled())),
            )?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font((font, style.label_size))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        root.present()?;
        tracing::info!(path = %path.display(), series = series.len(), "Saved comparison chart");
        Ok(())
    }
}
