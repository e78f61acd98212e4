//! CSV export of pivot tables

use crate::table::{SummaryTable, INDEX_COLUMN};
use anyhow::Result;
use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a summary table as CSV
pub struct CsvExporter;

impl CsvExporter {
    /// Export a table to a CSV file
    pub fn export(table: &SummaryTable, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        Self::write(table, file)
    }

    /// Write a table as CSV; missing cells are left empty
    pub fn write<W: Write>(table: &SummaryTable, writer: W) -> Result<()> {
        let mut wtr = Writer::from_writer(writer);

        let mut header = vec![INDEX_COLUMN.to_string()];
        header.extend(table.algorithms().iter().cloned());
        wtr.write_record(&header)?;

        for (idx, size) in table.sizes().iter().enumerate() {
            let mut record = vec![size.to_string()];
            record.extend(
                table
                    .row(idx)
                    .iter()
                    .map(|cell| cell.map(|v| v.to_string()).unwrap_or_default()),
            );
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_core::{BenchmarkDataset, BenchmarkRecord};

    #[test]
    fn test_csv_layout() {
        let table = SummaryTable::pivot(&BenchmarkDataset::new(
            "r.csv",
            vec![
                BenchmarkRecord::new("std::sort", 1000, 0.08, true),
                BenchmarkRecord::new("Quick Sort", 1000, 0.1, true),
                BenchmarkRecord::new("Quick Sort", 5000, 0.9, true),
            ],
        ));

        let mut buf = Vec::new();
        CsvExporter::write(&table, &mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Tamanho_Array,Quick Sort,std::sort\n1000,0.1,0.08\n5000,0.9,\n"
        );
    }
}
