//! Spreadsheet column to normalized CSV conversion

use crate::sheet::{ColumnDescriptor, Sheet};
use sortbench_core::{Error, ImportConfig, Result, ValueRecord};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// How the caller picked the column to convert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    /// Exact header name
    Name(String),
    /// Zero-based position; negative values count back from the last column
    Index(isize),
}

impl FromStr for ColumnSelector {
    type Err = std::convert::Infallible;

    /// Anything that parses as an integer is an index
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().parse::<isize>() {
            Ok(index) => ColumnSelector::Index(index),
            Err(_) => ColumnSelector::Name(s.to_string()),
        })
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSelector::Name(name) => write!(f, "'{}'", name),
            ColumnSelector::Index(index) => write!(f, "#{}", index),
        }
    }
}

/// Statistics of a finished conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    /// File that was written
    pub output: PathBuf,
    /// Resolved column name
    pub column: String,
    /// Data rows read from the sheet
    pub rows_read: usize,
    /// Rows written (valid numeric values)
    pub rows_written: usize,
    /// Smallest valid value
    pub min: f64,
    /// Largest valid value
    pub max: f64,
    /// Mean of the valid values
    pub mean: f64,
}

/// Result of a successful importer run
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome {
    /// No column was requested; nothing was written
    Inspected(Vec<ColumnDescriptor>),
    /// The column was converted and written
    Written(ConversionSummary),
}

/// Turns one spreadsheet column into an `ID,Valor,Categoria` dataset
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ImportConfig,
}

impl Converter {
    /// Create a converter
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    /// Load the spreadsheet and either inspect it or convert one column
    pub fn run(
        &self,
        input: &Path,
        output: Option<&Path>,
        column: Option<&ColumnSelector>,
    ) -> Result<ConversionOutcome> {
        tracing::info!(path = %input.display(), "Reading spreadsheet");
        let sheet = Sheet::open(input)?;

        println!(
            "Loaded {}: {} rows, {} columns",
            input.display(),
            sheet.row_count(),
            sheet.column_count()
        );
        println!("Columns: {:?}", sheet.column_names());

        match column {
            None => Ok(ConversionOutcome::Inspected(self.inspect(&sheet, input))),
            Some(selector) => {
                let output = output
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.config.default_output_for(input));
                self.convert_column(&sheet, selector, &output)
                    .map(ConversionOutcome::Written)
            }
        }
    }

    /// Print one line per column and how to re-run with a column
    pub fn inspect(&self, sheet: &Sheet, input: &Path) -> Vec<ColumnDescriptor> {
        let columns = sheet.describe(self.config.sample_size);

        println!("\n=== COLUMN ANALYSIS ===");
        for column in &columns {
            println!(
                "{}: '{}' - Type: {} - Valid values: {}",
                column.index, column.name, column.kind, column.non_null
            );
            if column.kind.is_numeric() {
                println!("    Sample: {:?}", column.sample);
            }
        }

        println!("\nTo convert, run:");
        println!("sortbench convert {} --column COLUMN_NAME", input.display());

        columns
    }

    /// Convert the selected column of an already loaded sheet
    pub fn convert_column(
        &self,
        sheet: &Sheet,
        selector: &ColumnSelector,
        output: &Path,
    ) -> Result<ConversionSummary> {
        let column = match selector {
            ColumnSelector::Name(name) => {
                sheet
                    .column_by_name(name)
                    .ok_or_else(|| Error::ColumnNotFound {
                        name: name.clone(),
                        available: sheet.column_names(),
                    })?
            }
            ColumnSelector::Index(index) => {
                let count = sheet.column_count();
                let position = if *index < 0 {
                    count as isize + index
                } else {
                    *index
                };
                usize::try_from(position)
                    .ok()
                    .and_then(|p| sheet.column_at(p))
                    .ok_or(Error::ColumnIndexOutOfRange {
                        index: *index,
                        count,
                    })?
            }
        };

        println!("\nProcessing column: '{}'", column.name());

        let values: Vec<f64> = column.coerce().into_iter().flatten().collect();
        println!("Valid values found: {}", values.len());
        tracing::debug!(
            column = column.name(),
            valid = values.len(),
            invalid = column.cells().len() - values.len(),
            "Coerced column"
        );

        if values.is_empty() {
            return Err(Error::NoNumericData(column.name().to_string()));
        }

        write_records(output, &values)?;

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / values.len() as f64;

        let summary = ConversionSummary {
            output: output.to_path_buf(),
            column: column.name().to_string(),
            rows_read: sheet.row_count(),
            rows_written: values.len(),
            min,
            max,
            mean,
        };

        println!("CSV file created: {}", output.display());
        println!("Rows: {}", summary.rows_written);
        println!("Statistics:");
        println!("  Minimum: {:.2}", summary.min);
        println!("  Maximum: {:.2}", summary.max);
        println!("  Mean: {:.2}", summary.mean);

        tracing::info!(path = %output.display(), rows = summary.rows_written, "Wrote dataset");
        Ok(summary)
    }
}

fn write_records(path: &Path, values: &[f64]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for (idx, value) in values.iter().enumerate() {
        writer.serialize(ValueRecord::new(idx as u64 + 1, *value))?;
    }
    writer.flush()?;
    Ok(())
}

/// Convert a spreadsheet column, reporting any failure instead of returning it
///
/// Returns the written path, or `None` in inspection mode and on error.
pub fn convert(
    input: &Path,
    output: Option<&Path>,
    column: Option<&ColumnSelector>,
    config: &ImportConfig,
) -> Option<PathBuf> {
    match Converter::new(config.clone()).run(input, output, column) {
        Ok(ConversionOutcome::Written(summary)) => Some(summary.output),
        Ok(ConversionOutcome::Inspected(_)) => None,
        Err(e) => {
            tracing::error!(path = %input.display(), "Conversion failed: {}", e);
            println!("Error processing file: {}", e);
            None
        }
    }
}
