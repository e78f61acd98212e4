//! Charts, tables and reports for sorting benchmark results
//!
//! Every artifact is a function of one loaded [`BenchmarkDataset`]:
//!
//! - Time vs. size comparison chart
//! - Per-size bar charts
//! - Summary and speedup tables (CSV, optionally xlsx)
//! - Complexity analysis panels
//! - Plain-text report (optionally JSON)
//!
//! # Example
//!
//! ```rust,no_run
//! use sortbench_core::{BenchmarkDataset, ReportConfig};
//! use sortbench_report::Reporter;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ReportConfig::default();
//!     let dataset = BenchmarkDataset::load_first(&config.candidate_paths)?;
//!
//!     let reporter = Reporter::new(&dataset, &config);
//!     reporter.comparison_chart()?;
//!     reporter.text_report()?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod output;
pub mod table;
pub mod text;
pub mod visualization;

pub use analysis::{ComplexityClass, ReportSummary};
pub use output::{CsvExporter, ExcelExporter, JsonExporter};
pub use table::SummaryTable;
pub use visualization::{BarChartPlotter, ComparisonPlotter, ComplexityPlotter};

use anyhow::{Context, Result};
use sortbench_core::{BenchmarkDataset, ReportConfig};
use std::fs;
use std::path::PathBuf;

/// Comparison chart file name
pub const COMPARISON_CHART: &str = "grafico_comparacao_algoritmos.png";
/// Summary table file name
pub const SUMMARY_TABLE: &str = "tabela_resumo.csv";
/// Speedup table file name
pub const SPEEDUP_TABLE: &str = "speedup_stdSort.csv";
/// Complexity chart file name
pub const COMPLEXITY_CHART: &str = "analise_complexidade.png";
/// Text report file name
pub const TEXT_REPORT: &str = "relatorio_benchmark.txt";
/// Workbook file name
pub const EXCEL_REPORT: &str = "tabela_resumo.xlsx";
/// JSON report file name
pub const JSON_REPORT: &str = "relatorio_benchmark.json";

/// Rows shown by [`Reporter::preview`]
const PREVIEW_ROWS: usize = 5;

/// `grafico_barras_<size>.png`
pub fn bar_chart_file(size: u64) -> String {
    format!("grafico_barras_{}.png", size)
}

/// Time and speedup tables built by [`Reporter::summary_tables`]
#[derive(Debug, Clone)]
pub struct SummaryTables {
    /// Pivot of successful times
    pub time: SummaryTable,
    /// Time table relative to the baseline column, when it exists
    pub speedup: Option<SummaryTable>,
}

/// Produces report artifacts from one dataset
///
/// Each method is independent: a failing artifact does not affect the others.
pub struct Reporter<'a> {
    dataset: &'a BenchmarkDataset,
    config: &'a ReportConfig,
}

impl<'a> Reporter<'a> {
    /// Create a reporter writing into `config.output_dir`
    pub fn new(dataset: &'a BenchmarkDataset, config: &'a ReportConfig) -> Self {
        Self { dataset, config }
    }

    /// Make sure the output directory exists
    pub fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.config.output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                self.config.output_dir.display()
            )
        })
    }

    /// Print the source, a few rows, the algorithms and the sizes
    pub fn preview(&self) {
        println!("\nLoaded data:");
        println!(
            "  {:<20} {:>14} {:>12} {:>8}",
            "Algoritmo", "Tamanho_Array", "Tempo_ms", "Sucesso"
        );
        for record in self.dataset.records().iter().take(PREVIEW_ROWS) {
            println!(
                "  {:<20} {:>14} {:>12.4} {:>8}",
                record.algorithm, record.size, record.time_ms, record.status
            );
        }
        println!("\nAlgorithms: {}", self.dataset.algorithms().join(", "));
        println!("Sizes: {:?}", self.dataset.sizes());
    }

    /// Line chart of time vs. size for every algorithm
    pub fn comparison_chart(&self) -> Result<PathBuf> {
        let path = self.config.output_path(COMPARISON_CHART);
        ComparisonPlotter::plot(self.dataset, &self.config.style, &path)
            .with_context(|| format!("Failed to generate comparison chart: {}", path.display()))?;
        Ok(path)
    }

    /// One bar chart per requested size
    ///
    /// With no sizes, the largest size in the file is used. Sizes that
    /// fail are logged and skipped.
    pub fn bar_charts(&self, sizes: &[u64]) -> Result<Vec<PathBuf>> {
        let sizes: Vec<u64> = if sizes.is_empty() {
            self.dataset.max_size().into_iter().collect()
        } else {
            sizes.to_vec()
        };

        if sizes.is_empty() {
            anyhow::bail!("No sizes available for bar charts");
        }

        let mut written = Vec::with_capacity(sizes.len());
        for size in sizes {
            let path = self.config.output_path(&bar_chart_file(size));
            match BarChartPlotter::plot(self.dataset, size, &self.config.style, &path) {
                Ok(()) => written.push(path),
                Err(e) => tracing::warn!(size, "Failed to generate bar chart: {:#}", e),
            }
        }
        Ok(written)
    }

    /// Pivot table, and its speedup table when the baseline column exists
    ///
    /// Both are printed rounded to two decimals and written as CSV.
    pub fn summary_tables(&self) -> Result<SummaryTables> {
        let time = SummaryTable::pivot(self.dataset);

        println!("\n=== SUMMARY TABLE ===");
        println!("{}", time);

        let path = self.config.output_path(SUMMARY_TABLE);
        CsvExporter::export(&time, &path)
            .with_context(|| format!("Failed to export summary table: {}", path.display()))?;
        println!("Table saved: {}", path.display());

        let speedup = time.relative_to(&self.config.baseline);
        match &speedup {
            Some(speedup) => {
                println!("\n=== SPEEDUP RELATIVE TO {} ===", self.config.baseline);
                println!("{}", speedup);

                let path = self.config.output_path(SPEEDUP_TABLE);
                CsvExporter::export(speedup, &path).with_context(|| {
                    format!("Failed to export speedup table: {}", path.display())
                })?;
            }
            None => tracing::debug!(
                baseline = %self.config.baseline,
                "Baseline column absent, skipping speedup table"
            ),
        }

        Ok(SummaryTables { time, speedup })
    }

    /// Grid of per-algorithm panels with reference growth curves
    pub fn complexity_chart(&self) -> Result<PathBuf> {
        let path = self.config.output_path(COMPLEXITY_CHART);
        ComplexityPlotter::plot(self.dataset, self.config, &path)
            .with_context(|| format!("Failed to generate complexity chart: {}", path.display()))?;
        Ok(path)
    }

    /// Plain-text report
    pub fn text_report(&self) -> Result<PathBuf> {
        let path = self.config.output_path(TEXT_REPORT);
        text::write(&ReportSummary::from_dataset(self.dataset), &path)?;
        Ok(path)
    }

    /// Workbook with the time and speedup tables
    pub fn excel(&self, tables: &SummaryTables) -> Result<PathBuf> {
        let path = self.config.output_path(EXCEL_REPORT);
        ExcelExporter::export(&tables.time, tables.speedup.as_ref(), &path)
            .with_context(|| format!("Failed to export Excel to: {}", path.display()))?;
        Ok(path)
    }

    /// JSON document with the report summary and both tables
    pub fn json(&self, tables: &SummaryTables) -> Result<PathBuf> {
        let path = self.config.output_path(JSON_REPORT);
        let summary = ReportSummary::from_dataset(self.dataset);
        JsonExporter::export(&summary, &tables.time, tables.speedup.as_ref(), &path)
            .with_context(|| format!("Failed to export JSON to: {}", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_core::BenchmarkRecord;
    use tempfile::TempDir;

    fn dataset() -> BenchmarkDataset {
        BenchmarkDataset::new(
            "resultados.csv",
            vec![
                BenchmarkRecord::new("Quick Sort", 1000, 0.07, true),
                BenchmarkRecord::new("std::sort", 1000, 0.05, true),
                BenchmarkRecord::new("Quick Sort", 5000, 0.4, true),
                BenchmarkRecord::new("std::sort", 5000, 0.3, true),
            ],
        )
    }

    #[test]
    fn test_bar_chart_file_name() {
        assert_eq!(bar_chart_file(100000), "grafico_barras_100000.png");
    }

    #[test]
    fn test_summary_tables_write_both_csv_files() {
        let dir = TempDir::new().unwrap();
        let config = ReportConfig::default().with_output_dir(dir.path());
        let data = dataset();

        let tables = Reporter::new(&data, &config).summary_tables().unwrap();

        assert_eq!(tables.time.get(5000, "Quick Sort"), Some(0.4));
        assert!(tables.speedup.is_some());
        assert!(dir.path().join(SUMMARY_TABLE).exists());
        assert!(dir.path().join(SPEEDUP_TABLE).exists());
    }

    #[test]
    fn test_speedup_skipped_without_baseline() {
        let dir = TempDir::new().unwrap();
        let config = ReportConfig::default().with_output_dir(dir.path());
        let data = BenchmarkDataset::new(
            "r.csv",
            vec![BenchmarkRecord::new("Quick Sort", 1000, 0.07, true)],
        );

        let tables = Reporter::new(&data, &config).summary_tables().unwrap();

        assert!(tables.speedup.is_none());
        assert!(dir.path().join(SUMMARY_TABLE).exists());
        assert!(!dir.path().join(SPEEDUP_TABLE).exists());
    }

    #[test]
    fn test_text_and_json_reports() {
        let dir = TempDir::new().unwrap();
        let config = ReportConfig::default().with_output_dir(dir.path());
        let data = dataset();
        let reporter = Reporter::new(&data, &config);

        let text_path = reporter.text_report().unwrap();
        let text = fs::read_to_string(text_path).unwrap();
        assert!(text.contains("Total runs: 4"));

        let tables = reporter.summary_tables().unwrap();
        let json_path = reporter.json(&tables).unwrap();
        let doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(json_path).unwrap()).unwrap();
        assert_eq!(doc["summary"]["total_runs"], 4);
        assert_eq!(doc["tables"]["speedup"]["1000"]["std::sort"], 1.0);
    }

    #[test]
    fn test_prepare_creates_output_dir() {
        let dir = TempDir::new().unwrap();
        let config = ReportConfig::default().with_output_dir(dir.path().join("out/charts"));
        let data = dataset();

        Reporter::new(&data, &config).prepare().unwrap();
        assert!(dir.path().join("out/charts").is_dir());
    }
}
