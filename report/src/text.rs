//! Plain-text benchmark report

use crate::analysis::ReportSummary;
use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::Path;

/// Report body, rendered through `Display`
pub struct TextReport<'a>(pub &'a ReportSummary);

/// Render the report body
pub fn render(summary: &ReportSummary) -> String {
    TextReport(summary).to_string()
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;
        writeln!(out, "=== BENCHMARK REPORT - SORTING ALGORITHMS ===")?;
        writeln!(out)?;

        writeln!(out, "Results file: {}", summary.source)?;
        writeln!(out, "Total runs: {}", summary.total_runs)?;
        writeln!(out, "Successful runs: {}", summary.successful_runs)?;
        writeln!(out, "Algorithms tested: {}", summary.algorithms.join(", "))?;
        writeln!(out, "Sizes tested: {:?}", summary.sizes)?;
        writeln!(out)?;

        writeln!(out, "=== BEST ALGORITHM PER SIZE ===")?;
        for best in &summary.best_per_size {
            writeln!(
                out,
                "Size {:6}: {:20} ({:8.2} ms)",
                best.size, best.algorithm, best.time_ms
            )?;
        }

        writeln!(out)?;
        writeln!(out, "=== OVERALL RANKING (mean over all sizes) ===")?;
        for (pos, entry) in summary.ranking.iter().enumerate() {
            writeln!(
                out,
                "{}. {:20}: {:8.2} ms (mean)",
                pos + 1,
                entry.algorithm,
                entry.mean_ms
            )?;
        }

        writeln!(out)?;
        writeln!(out, "=== NOTES ===")?;
        writeln!(
            out,
            "- std::sort uses introsort (hybrid of quicksort, heapsort and insertion sort)"
        )?;
        writeln!(out, "- On small arrays insertion sort can be competitive")?;
        writeln!(
            out,
            "- std::sort is tuned and usually beats hand-written implementations"
        )?;

        Ok(())
    }
}

/// Render and write the report to `path`
pub fn write(summary: &ReportSummary, path: &Path) -> Result<()> {
    fs::write(path, render(summary))
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    Ok(())
}
