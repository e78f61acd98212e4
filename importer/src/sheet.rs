//! Worksheet loading and per-column type discovery

use calamine::{open_workbook_auto, Data, Range, Reader};
use serde::Serialize;
use sortbench_core::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Detected value type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Every cell is a whole number and none is missing
    Integer,
    /// Every present cell is a number
    Float,
    /// Every present cell is a boolean
    Boolean,
    /// Every present cell is a date or time
    DateTime,
    /// Anything else, including mixed columns
    Text,
    /// No present cells
    Empty,
}

impl ColumnKind {
    /// Whether the column can be sampled as numbers
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Integer | ColumnKind::Float | ColumnKind::Boolean)
    }

    /// Short lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKind::Integer => "integer",
            ColumnKind::Float => "float",
            ColumnKind::Boolean => "boolean",
            ColumnKind::DateTime => "datetime",
            ColumnKind::Text => "text",
            ColumnKind::Empty => "empty",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What inspection mode reports about one column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDescriptor {
    /// Zero-based position
    pub index: usize,
    /// Header name after normalization
    pub name: String,
    /// Detected value type
    pub kind: ColumnKind,
    /// Number of present (non-empty, non-error) cells
    pub non_null: usize,
    /// Leading numeric values, only filled for numeric kinds
    pub sample: Vec<f64>,
}

/// One column of the loaded worksheet
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    cells: Vec<Data>,
}

impl Column {
    /// Header name after normalization
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Data cells below the header, in sheet order
    pub fn cells(&self) -> &[Data] {
        &self.cells
    }

    /// Coerce every cell, keeping the sheet order; invalid cells become `None`
    pub fn coerce(&self) -> Vec<Option<f64>> {
        self.cells.iter().map(coerce_numeric).collect()
    }

    fn describe(&self, index: usize, sample_size: usize) -> ColumnDescriptor {
        let present: Vec<&Data> = self.cells.iter().filter(|c| !is_null(c)).collect();
        let kind = detect_kind(&present, present.len() < self.cells.len());
        let sample = if kind.is_numeric() {
            present
                .iter()
                .filter_map(|c| coerce_numeric(c))
                .take(sample_size)
                .collect()
        } else {
            Vec::new()
        };

        ColumnDescriptor {
            index,
            name: self.name.clone(),
            kind,
            non_null: present.len(),
            sample,
        }
    }
}

/// First worksheet of a workbook, split into named columns
///
/// The first row is the header; every following row is data.
#[derive(Debug, Clone)]
pub struct Sheet {
    columns: Vec<Column>,
    rows: usize,
}

impl Sheet {
    /// Open a workbook (xlsx, xlsm, xlsb, xls, ods) and load its first worksheet
    pub fn open(path: &Path) -> Result<Self> {
        let mut workbook = open_workbook_auto(path)
            .map_err(|e| Error::Spreadsheet(format!("failed to open {}: {}", path.display(), e)))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| Error::Spreadsheet(format!("{} contains no worksheets", path.display())))?
            .map_err(|e| Error::Spreadsheet(format!("failed to read first worksheet: {}", e)))?;

        Ok(Self::from_range(&range))
    }

    /// Split a cell range into columns using its first row as the header
    ///
    /// A range that starts past column A is padded with empty leading
    /// columns, so positions match the sheet.
    pub fn from_range(range: &Range<Data>) -> Self {
        let offset = range.start().map(|(_, col)| col as usize).unwrap_or(0);
        let mut rows = range.rows();

        let mut header = vec![Data::Empty; offset];
        header.extend(rows.next().map(|r| r.to_vec()).unwrap_or_default());
        let names = normalize_headers(&header);

        let mut columns: Vec<Column> = names
            .into_iter()
            .map(|name| Column {
                name,
                cells: Vec::new(),
            })
            .collect();

        let mut row_count = 0;
        for row in rows {
            let (leading, rest) = columns.split_at_mut(offset);
            for column in leading {
                column.cells.push(Data::Empty);
            }
            for (column, cell) in rest.iter_mut().zip(row.iter()) {
                column.cells.push(cell.clone());
            }
            row_count += 1;
        }

        tracing::debug!(columns = columns.len(), rows = row_count, "Loaded worksheet");

        Self {
            columns,
            rows: row_count,
        }
    }

    /// Number of data rows (header excluded)
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Normalized header names, in sheet order
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Look up a column by exact header name
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Look up a column by position
    pub fn column_at(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Build one descriptor per column
    pub fn describe(&self, sample_size: usize) -> Vec<ColumnDescriptor> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| column.describe(idx, sample_size))
            .collect()
    }
}

/// Coerce a single cell to a number
///
/// Integers and floats pass through, booleans map to 1/0 and strings are
/// parsed after trimming. Everything else, and NaN, is invalid.
pub fn coerce_numeric(cell: &Data) -> Option<f64> {
    let value = match cell {
        Data::Int(n) => *n as f64,
        Data::Float(n) => *n,
        Data::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Data::String(s) => s.trim().parse::<f64>().ok()?,
        Data::Empty
        | Data::Error(_)
        | Data::DateTime(_)
        | Data::DateTimeIso(_)
        | Data::DurationIso(_) => return None,
    };

    (!value.is_nan()).then_some(value)
}

/// Empty and error cells, plus zero-length strings; whitespace is a value
fn is_null(cell: &Data) -> bool {
    match cell {
        Data::Empty | Data::Error(_) => true,
        Data::String(s) => s.is_empty(),
        _ => false,
    }
}

fn detect_kind(present: &[&Data], has_missing: bool) -> ColumnKind {
    if present.is_empty() {
        return ColumnKind::Empty;
    }

    let all = |pred: fn(&Data) -> bool| present.iter().all(|c| pred(c));

    if all(|c| matches!(c, Data::Int(_) | Data::Float(_))) {
        let whole = all(|c| match c {
            Data::Float(n) => n.fract() == 0.0,
            _ => true,
        });
        if whole && !has_missing {
            ColumnKind::Integer
        } else {
            ColumnKind::Float
        }
    } else if all(|c| matches!(c, Data::Bool(_))) {
        ColumnKind::Boolean
    } else if all(|c| matches!(c, Data::DateTime(_) | Data::DateTimeIso(_))) {
        ColumnKind::DateTime
    } else {
        ColumnKind::Text
    }
}

fn normalize_headers(header: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    header
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let base = match cell {
                Data::Empty => format!("Unnamed: {}", idx),
                Data::String(s) if s.trim().is_empty() => format!("Unnamed: {}", idx),
                Data::String(s) => s.trim().to_string(),
                Data::Float(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
                other => other.to_string(),
            };

            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{}.{}", base, count)
            };
            *count += 1;
            name
        })
        .collect()
}
