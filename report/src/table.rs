//! Size × algorithm pivot of successful runs

use sortbench_core::BenchmarkDataset;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Header of the row-index column in exported tables
pub const INDEX_COLUMN: &str = "Tamanho_Array";

/// Times (or ratios) keyed by input size and algorithm
///
/// Rows are ascending sizes, columns are algorithm names in lexicographic
/// order. A cell is `None` when that pair never occurred.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    sizes: Vec<u64>,
    algorithms: Vec<String>,
    cells: Vec<Vec<Option<f64>>>,
}

impl SummaryTable {
    /// Pivot the successful runs of a dataset
    ///
    /// Repeated (size, algorithm) pairs are averaged.
    pub fn pivot(dataset: &BenchmarkDataset) -> Self {
        let mut sums: BTreeMap<(u64, &str), (f64, usize)> = BTreeMap::new();
        let mut sizes = BTreeSet::new();
        let mut algorithms = BTreeSet::new();

        for record in dataset.successful() {
            let entry = sums
                .entry((record.size, record.algorithm.as_str()))
                .or_insert((0.0, 0));
            entry.0 += record.time_ms;
            entry.1 += 1;
            sizes.insert(record.size);
            algorithms.insert(record.algorithm.as_str());
        }

        let duplicates = sums.values().filter(|(_, n)| *n > 1).count();
        if duplicates > 0 {
            tracing::warn!(pairs = duplicates, "Averaging repeated size/algorithm pairs");
        }

        let sizes: Vec<u64> = sizes.into_iter().collect();
        let algorithms: Vec<String> = algorithms.into_iter().map(String::from).collect();
        let cells = sizes
            .iter()
            .map(|&size| {
                algorithms
                    .iter()
                    .map(|alg| {
                        sums.get(&(size, alg.as_str()))
                            .map(|(sum, n)| sum / *n as f64)
                    })
                    .collect()
            })
            .collect();

        Self {
            sizes,
            algorithms,
            cells,
        }
    }

    /// Row keys, ascending
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// Column keys, lexicographic
    pub fn algorithms(&self) -> &[String] {
        &self.algorithms
    }

    /// Cell values of one row, aligned with [`Self::algorithms`]
    pub fn row(&self, row: usize) -> &[Option<f64>] {
        &self.cells[row]
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Whether a column with this exact name exists
    pub fn has_column(&self, algorithm: &str) -> bool {
        self.column_index(algorithm).is_some()
    }

    /// Look up one cell
    pub fn get(&self, size: u64, algorithm: &str) -> Option<f64> {
        let row = self.sizes.binary_search(&size).ok()?;
        let col = self.column_index(algorithm)?;
        self.cells[row][col]
    }

    /// Every column divided element-wise by the `baseline` column
    ///
    /// Returns `None` when the baseline column is absent. Cells in a row
    /// where the baseline is missing or zero stay empty.
    pub fn relative_to(&self, baseline: &str) -> Option<SummaryTable> {
        let base_col = self.column_index(baseline)?;

        let cells = self
            .cells
            .iter()
            .map(|row| {
                let base = row[base_col].filter(|b| *b != 0.0);
                row.iter()
                    .map(|cell| match (cell, base) {
                        (Some(value), Some(base)) => Some(value / base),
                        _ => None,
                    })
                    .collect()
            })
            .collect();

        Some(SummaryTable {
            sizes: self.sizes.clone(),
            algorithms: self.algorithms.clone(),
            cells,
        })
    }

    fn column_index(&self, algorithm: &str) -> Option<usize> {
        self.algorithms.iter().position(|a| a == algorithm)
    }
}

/// Fixed-width rendering rounded to two decimals
impl fmt::Display for SummaryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = self.algorithms.iter().map(|a| a.len().max(10)).collect();

        write!(f, "{:>14}", INDEX_COLUMN)?;
        for (alg, width) in self.algorithms.iter().zip(&widths) {
            write!(f, "  {:>width$}", alg, width = width)?;
        }
        writeln!(f)?;

        for (size, row) in self.sizes.iter().zip(&self.cells) {
            write!(f, "{:>14}", size)?;
            for (cell, width) in row.iter().zip(&widths) {
                match cell {
                    Some(value) => write!(f, "  {:>width$.2}", value, width = width)?,
                    None => write!(f, "  {:>width$}", "NaN", width = width)?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
