//! Per-algorithm complexity panels with reference growth curves

use super::{group_thousands, log_range, padded_range};
use crate::analysis::{reference_curve, ComplexityClass};
use anyhow::Result;
use plotters::coord::ranged1d::{AsRangedCoord, ValueFormatter};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use sortbench_core::{BenchmarkDataset, ChartStyle, ReportConfig};
use std::ops::Range;
use std::path::Path;

/// Panels per grid row
const GRID_COLUMNS: usize = 2;

/// Data behind one panel of the complexity chart
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexityPanel {
    /// Algorithm name
    pub algorithm: String,
    /// Assumed growth rate
    pub class: ComplexityClass,
    /// Panel caption
    pub title: String,
    /// Quadratic panels use a log-scaled time axis
    pub log_y: bool,
    /// Observed (size, time) points in row order
    pub points: Vec<(f64, f64)>,
    /// Reference curve, when there are enough points to anchor one
    pub curve: Option<Vec<(f64, f64)>>,
}

/// Renders `analise_complexidade.png`
pub struct ComplexityPlotter;

impl ComplexityPlotter {
    /// Build one panel per successful algorithm, in order of first appearance
    pub fn panels(dataset: &BenchmarkDataset, config: &ReportConfig) -> Vec<ComplexityPanel> {
        dataset
            .successful_algorithms()
            .into_iter()
            .map(|algorithm| {
                let class = ComplexityClass::assumed_for(algorithm);
                let points = dataset.observations(algorithm);
                let curve = reference_curve(
                    &points,
                    class,
                    config.curve_samples,
                    config.min_fit_points,
                );

                let title = match (&curve, class) {
                    (None, _) => algorithm.to_string(),
                    (Some(_), ComplexityClass::Linearithmic)
                        if algorithm.contains("std::sort") =>
                    {
                        format!("{} ({} - optimized)", algorithm, class.description())
                    }
                    (Some(_), _) => format!("{} ({})", algorithm, class.description()),
                };

                ComplexityPanel {
                    algorithm: algorithm.to_string(),
                    class,
                    title,
                    log_y: class == ComplexityClass::Quadratic,
                    points,
                    curve,
                }
            })
            .collect()
    }

    /// Draw every panel on a two-column grid
    pub fn plot(dataset: &BenchmarkDataset, config: &ReportConfig, path: &Path) -> Result<()> {
        let style = &config.style;
        let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let panels = Self::panels(dataset, config);
        if panels.is_empty() {
            tracing::warn!("No successful runs for complexity analysis");
            root.present()?;
            return Ok(());
        }

        let areas = root.split_evenly(grid_shape(panels.len()));
        for (panel, area) in panels.iter().zip(areas.iter()) {
            let sizes = panel.points.iter().map(|p| p.0);
            let min = sizes.clone().fold(f64::INFINITY, f64::min);
            let max = sizes.fold(f64::NEG_INFINITY, f64::max);
            let x_range = padded_range(min, max, 0.05);

            let times = panel
                .points
                .iter()
                .chain(panel.curve.iter().flatten())
                .map(|p| p.1);

            if panel.log_y {
                draw_panel(area, panel, style, x_range, log_range(times).log_scale())?;
            } else {
                let top = times.fold(0.0_f64, f64::max);
                draw_panel(area, panel, style, x_range, padded_range(0.0, top, 0.05))?;
            }
        }

        root.present()?;
        tracing::info!(path = %path.display(), panels = panels.len(), "Saved complexity chart");
        Ok(())
    }
}

/// `(rows, columns)` of the panel grid
pub fn grid_shape(panels: usize) -> (usize, usize) {
    ((panels + 1) / GRID_COLUMNS, GRID_COLUMNS)
}

fn draw_panel<Y>(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    panel: &ComplexityPanel,
    style: &ChartStyle,
    x_range: Range<f64>,
    y_range: Y,
) -> Result<()>
where
    Y: AsRangedCoord<Value = f64>,
    Y::CoordDescType: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    let font = style.font_family.as_str();
    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, (font, style.label_size + 2))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    let y_desc = if panel.log_y {
        "Time (ms) - log scale"
    } else {
        "Time (ms)"
    };

    chart
        .configure_mesh()
        .x_desc("Array size")
        .y_desc(y_desc)
        .label_style((font, style.label_size.saturating_sub(2)))
        .x_label_formatter(&|x| group_thousands(x.max(0.0).round() as u64))
        .y_label_formatter(&|y| format!("{:.2}", y))
        .x_labels(5)
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.3))
        .draw()?;

    // Log axis: non-positive times cannot be placed
    let visible = |p: &&(f64, f64)| !panel.log_y || p.1 > 0.0;

    chart
        .draw_series(
            panel
                .points
                .iter()
                .filter(visible)
                .map(|p| Circle::new(*p, style.marker_size + 2, BLUE.mix(0.7).filled())),
        )?
        .label("Observed")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, BLUE.mix(0.7).filled()));

    if let Some(curve) = &panel.curve {
        let color = match panel.class {
            ComplexityClass::Quadratic => RED,
            ComplexityClass::Linearithmic => GREEN,
        };

        chart
            .draw_series(DashedLineSeries::new(
                curve.iter().filter(visible).copied(),
                8,
                4,
                color.mix(0.8).stroke_width(style.line_width),
            ))?
            .label(panel.class.label())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font((font, style.label_size.saturating_sub(2)))
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}
