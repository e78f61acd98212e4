//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use sortbench_core::{BenchmarkDataset, Error, ImportConfig, ReportConfig};
use sortbench_importer::ColumnSelector;
use sortbench_report::Reporter;
use std::path::PathBuf;

/// sortbench - spreadsheet importer and report generator for sorting benchmarks
#[derive(Parser, Debug)]
#[command(name = "sortbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert one spreadsheet column into a dataset CSV, or list the columns
    Convert {
        /// Spreadsheet to read (first worksheet)
        spreadsheet: PathBuf,

        /// Column name or 0-based index (negative counts from the end); omit to list the columns
        #[arg(short, long, allow_negative_numbers = true)]
        column: Option<ColumnSelector>,

        /// Output CSV (default: <data-dir>/dados_reais_<stem>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory for the default output file
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Generate charts, tables and reports from benchmark results
    Report {
        /// Results CSV, tried before the built-in search path
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory for generated files
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Input size for a bar chart (repeatable; default: largest size)
        #[arg(short, long = "size")]
        sizes: Vec<u64>,

        /// Also export the tables to Excel (.xlsx)
        #[arg(long)]
        excel: bool,

        /// Also export the summary to JSON
        #[arg(long)]
        json: bool,

        /// JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Dispatch the selected subcommand
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Convert {
                spreadsheet,
                column,
                output,
                data_dir,
            } => {
                let mut config = ImportConfig::default();
                if let Some(dir) = data_dir {
                    config = config.with_data_dir(dir);
                }
                sortbench_importer::convert(
                    spreadsheet,
                    output.as_deref(),
                    column.as_ref(),
                    &config,
                );
                Ok(())
            }
            Commands::Report {
                input,
                output_dir,
                sizes,
                excel,
                json,
                config,
            } => {
                let mut report_config = match config {
                    Some(path) => match ReportConfig::from_file(path) {
                        Ok(loaded) => loaded,
                        Err(e) => {
                            tracing::error!(path = %path.display(), "Invalid configuration: {}", e);
                            println!("Failed to load config {}: {}", path.display(), e);
                            return Ok(());
                        }
                    },
                    None => ReportConfig::default(),
                };
                if let Some(dir) = output_dir {
                    report_config = report_config.with_output_dir(dir);
                }
                if let Some(path) = input {
                    report_config = report_config.with_preferred_input(path);
                }

                run_report(&report_config, sizes, *excel, *json)
            }
        }
    }
}

fn run_report(config: &ReportConfig, sizes: &[u64], excel: bool, json: bool) -> Result<()> {
    let dataset = match BenchmarkDataset::load_first(&config.candidate_paths) {
        Ok(dataset) => dataset,
        Err(Error::InputNotFound { attempted }) => {
            tracing::error!("No results file found");
            println!("No results file found!");
            println!("Files tried:");
            for path in attempted {
                println!("  - {}", path.display());
            }
            return Ok(());
        }
        Err(e) => {
            tracing::error!("Failed to load results: {}", e);
            println!("Failed to load results: {}", e);
            return Ok(());
        }
    };

    println!("✓ Data loaded from: {}", dataset.source().display());
    println!("✓ Total records: {}", dataset.len());

    let reporter = Reporter::new(&dataset, config);
    if let Err(e) = reporter.prepare() {
        tracing::error!("{:#}", e);
        println!("Cannot write reports: {:#}", e);
        return Ok(());
    }
    reporter.preview();

    let mut generated: Vec<PathBuf> = Vec::new();

    println!("\n1. Generating comparison chart...");
    match reporter.comparison_chart() {
        Ok(path) => generated.push(path),
        Err(e) => tracing::warn!("{:#}", e),
    }

    println!("\n2. Generating bar charts...");
    match reporter.bar_charts(sizes) {
        Ok(paths) => generated.extend(paths),
        Err(e) => tracing::warn!("{:#}", e),
    }

    println!("\n3. Generating summary table...");
    let tables = match reporter.summary_tables() {
        Ok(tables) => {
            generated.push(config.output_path(sortbench_report::SUMMARY_TABLE));
            if tables.speedup.is_some() {
                generated.push(config.output_path(sortbench_report::SPEEDUP_TABLE));
            }
            Some(tables)
        }
        Err(e) => {
            tracing::warn!("{:#}", e);
            None
        }
    };

    println!("\n4. Generating complexity analysis...");
    match reporter.complexity_chart() {
        Ok(path) => generated.push(path),
        Err(e) => tracing::warn!("{:#}", e),
    }

    println!("\n5. Generating text report...");
    match reporter.text_report() {
        Ok(path) => generated.push(path),
        Err(e) => tracing::warn!("{:#}", e),
    }

    if let Some(tables) = &tables {
        if excel {
            match reporter.excel(tables) {
                Ok(path) => generated.push(path),
                Err(e) => tracing::warn!("{:#}", e),
            }
        }
        if json {
            match reporter.json(tables) {
                Ok(path) => generated.push(path),
                Err(e) => tracing::warn!("{:#}", e),
            }
        }
    } else if excel || json {
        tracing::warn!("Skipping Excel/JSON export: summary tables unavailable");
    }

    println!("\n=== ANALYSIS COMPLETE ===");
    println!("Generated files:");
    for path in &generated {
        println!("- {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_defaults() {
        let cli = Cli::try_parse_from(["sortbench", "report"]).unwrap();
        match cli.command {
            Commands::Report {
                input,
                sizes,
                excel,
                json,
                ..
            } => {
                assert!(input.is_none());
                assert!(sizes.is_empty());
                assert!(!excel && !json);
            }
            _ => panic!("expected report"),
        }
    }

    #[test]
    fn test_parse_repeated_sizes() {
        let cli = Cli::try_parse_from([
            "sortbench", "report", "--size", "1000", "-s", "50000", "--excel", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Report { sizes, excel, .. } => {
                assert_eq!(sizes, vec![1000, 50000]);
                assert!(excel);
            }
            _ => panic!("expected report"),
        }
    }

    #[test]
    fn test_parse_convert_column_index() {
        let cli =
            Cli::try_parse_from(["sortbench", "convert", "planilha.xlsx", "--column", "2"])
                .unwrap();
        match cli.command {
            Commands::Convert {
                spreadsheet,
                column,
                ..
            } => {
                assert_eq!(spreadsheet, PathBuf::from("planilha.xlsx"));
                assert_eq!(column, Some(ColumnSelector::Index(2)));
            }
            _ => panic!("expected convert"),
        }
    }

    const RESULTS: &str = "Algoritmo,Tamanho_Array,Tempo_ms,Sucesso\n\
                           std::sort,1000,0.05,Sim\n\
                           Quick Sort,1000,0.07,Sim\n";

    #[test]
    fn test_parse_convert_negative_index() {
        let cli = Cli::try_parse_from(["sortbench", "convert", "planilha.xlsx", "--column", "-1"])
            .unwrap();
        match cli.command {
            Commands::Convert { column, .. } => {
                assert_eq!(column, Some(ColumnSelector::Index(-1)));
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_uncreatable_output_dir_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let input = dir.path().join("resultados.csv");
        std::fs::write(&input, RESULTS).unwrap();

        // A regular file cannot hold a subdirectory
        let blocker = dir.path().join("bloqueio");
        std::fs::write(&blocker, "").unwrap();

        let config = ReportConfig {
            candidate_paths: vec![input],
            ..ReportConfig::default()
        }
        .with_output_dir(blocker.join("saida"));

        assert!(run_report(&config, &[], false, false).is_ok());
        assert!(!blocker.join("saida").exists());
    }

    #[test]
    fn test_invalid_config_file_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = dir.path().join("config.json");
        std::fs::write(&config, "not json").unwrap();

        let cli = Cli::try_parse_from([
            "sortbench",
            "report",
            "--config",
            config.to_str().unwrap(),
        ])
        .unwrap();
        assert!(cli.run().is_ok());

        let missing = Cli::try_parse_from(["sortbench", "report", "--config", "/nonexistent.json"])
            .unwrap();
        assert!(missing.run().is_ok());
    }

    #[test]
    fn test_missing_input_is_not_an_error() {
        let config = ReportConfig {
            candidate_paths: vec![PathBuf::from("/nonexistent/resultados.csv")],
            ..ReportConfig::default()
        };
        assert!(run_report(&config, &[], false, false).is_ok());
    }
}
