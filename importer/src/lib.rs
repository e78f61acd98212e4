//! sortbench-importer: spreadsheet column to dataset conversion
//!
//! Reads the first worksheet of a workbook, treats its first row as the
//! header and either describes every column (inspection mode) or writes one
//! numeric column out as an `ID,Valor,Categoria` CSV.
//!
//! # Example
//!
//! ```rust,no_run
//! use sortbench_core::ImportConfig;
//! use sortbench_importer::{convert, ColumnSelector};
//! use std::path::Path;
//!
//! let column: ColumnSelector = "Valor".parse().unwrap();
//! let written = convert(Path::new("planilha.xlsx"), None, Some(&column), &ImportConfig::default());
//! if let Some(path) = written {
//!     println!("dataset at {}", path.display());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convert;
pub mod sheet;


pub use convert::{convert, ColumnSelector, ConversionOutcome, ConversionSummary, Converter};
pub use sheet::{coerce_numeric, Column, ColumnDescriptor, ColumnKind, Sheet};
