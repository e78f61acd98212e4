//! sortbench-core: shared types for the sortbench importer and reporter
//!
//! This crate provides the pieces both pipelines agree on:
//!
//! - Row types for converted datasets and benchmark results
//! - Loading benchmark results from an ordered list of candidate files
//! - Importer and reporter configuration
//! - Error handling

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod record;

pub use config::*;
pub use dataset::BenchmarkDataset;
pub use error::*;
pub use record::*;
