//! Excel export of the summary and speedup tables

use crate::table::{SummaryTable, INDEX_COLUMN};
use anyhow::Result;
use rust_xlsxwriter::*;
use std::path::Path;

/// Writes the summary and speedup tables to an xlsx workbook
pub struct ExcelExporter;

impl ExcelExporter {
    /// Export the time table, and the speedup table when present, to one workbook
    pub fn export(table: &SummaryTable, speedup: Option<&SummaryTable>, path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();

        let summary_sheet = workbook.add_worksheet();
        summary_sheet.set_name("Summary")?;
        Self::write_table(summary_sheet, table)?;

        if let Some(speedup) = speedup {
            let speedup_sheet = workbook.add_worksheet();
            speedup_sheet.set_name("Speedup")?;
            Self::write_table(speedup_sheet, speedup)?;
        }

        workbook.save(path)?;
        Ok(())
    }

    fn write_table(sheet: &mut Worksheet, table: &SummaryTable) -> Result<()> {
        let bold = Format::new().set_bold();
        let number_format = Format::new().set_num_format("0.00");

        // Headers
        sheet.write_with_format(0, 0, INDEX_COLUMN, &bold)?;
        for (col, alg) in table.algorithms().iter().enumerate() {
            sheet.write_with_format(0, (col + 1) as u16, alg.as_str(), &bold)?;
        }

        // Data rows; missing cells stay blank
        for (idx, size) in table.sizes().iter().enumerate() {
            let row = (idx + 1) as u32;
            sheet.write_with_format(row, 0, *size as f64, &bold)?;

            for (col, cell) in table.row(idx).iter().enumerate() {
                if let Some(value) = cell {
                    sheet.write_with_format(row, (col + 1) as u16, *value, &number_format)?;
                }
            }
        }

        // Set column widths
        sheet.set_column_width(0, 15)?;
        for (col, alg) in table.algorithms().iter().enumerate() {
            sheet.set_column_width((col + 1) as u16, alg.len().max(12) as f64)?;
        }

        Ok(())
    }
}
