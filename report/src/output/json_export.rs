//! JSON export of the report summary

use crate::analysis::ReportSummary;
use crate::table::SummaryTable;
use anyhow::Result;
use serde_json::{json, Value};
use std::fs::File;
use std::path::Path;

/// Writes the report summary as JSON
pub struct JsonExporter;

impl JsonExporter {
    /// Export the summary, plus the pivot tables when given, to a JSON file
    pub fn export(
        summary: &ReportSummary,
        table: &SummaryTable,
        speedup: Option<&SummaryTable>,
        path: &Path,
    ) -> Result<()> {
        let output = Self::document(summary, table, speedup);
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &output)?;
        Ok(())
    }

    /// Build the exported document
    pub fn document(
        summary: &ReportSummary,
        table: &SummaryTable,
        speedup: Option<&SummaryTable>,
    ) -> Value {
        json!({
            "summary": summary,
            "tables": {
                "time_ms": Self::table_value(table),
                "speedup": speedup.map(Self::table_value),
            },
        })
    }

    /// `{ "<size>": { "<algorithm>": value } }`, skipping missing cells
    fn table_value(table: &SummaryTable) -> Value {
        let rows: serde_json::Map<String, Value> = table
            .sizes()
            .iter()
            .enumerate()
            .map(|(idx, size)| {
                let cells: serde_json::Map<String, Value> = table
                    .algorithms()
                    .iter()
                    .zip(table.row(idx))
                    .filter_map(|(alg, cell)| cell.map(|v| (alg.clone(), json!(v))))
                    .collect();
                (size.to_string(), Value::Object(cells))
            })
            .collect();
        Value::Object(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_core::{BenchmarkDataset, BenchmarkRecord};

    #[test]
    fn test_document_shape() {
        let data = BenchmarkDataset::new(
            "r.csv",
            vec![
                BenchmarkRecord::new("QuickSort", 1000, 5.0, true),
                BenchmarkRecord::new("std::sort", 1000, 2.0, true),
            ],
        );
        let summary = ReportSummary::from_dataset(&data);
        let table = SummaryTable::pivot(&data);
        let speedup = table.relative_to("std::sort");

        let doc = JsonExporter::document(&summary, &table, speedup.as_ref());

        assert_eq!(doc["summary"]["total_runs"], 2);
        assert_eq!(doc["summary"]["best_per_size"][0]["algorithm"], "std::sort");
        assert_eq!(doc["summary"]["ranking"][1]["algorithm"], "QuickSort");
        assert_eq!(doc["tables"]["time_ms"]["1000"]["QuickSort"], 5.0);
        assert_eq!(doc["tables"]["speedup"]["1000"]["QuickSort"], 2.5);
    }

    #[test]
    fn test_document_without_speedup() {
        let data = BenchmarkDataset::new(
            "r.csv",
            vec![BenchmarkRecord::new("QuickSort", 1000, 5.0, true)],
        );
        let table = SummaryTable::pivot(&data);
        let doc = JsonExporter::document(&ReportSummary::from_dataset(&data), &table, None);

        assert!(doc["tables"]["speedup"].is_null());
    }
}
