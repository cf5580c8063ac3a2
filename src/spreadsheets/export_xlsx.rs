use crate::errors::{AppError, AppResult};
use crate::spreadsheets::layout::CsvRow;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Write a header and its rows to a single-sheet workbook.
pub fn export_listings_xlsx(header: &CsvRow, rows: &[CsvRow], path: &Path) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in header.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, name)
            .map_err(|e| {
                AppError::Export(format!("Failed to write header '{}': {}", name, e))
            })?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, value) in row.iter().enumerate() {
            worksheet
                .write_string(r, col as u16, value)
                .map_err(|e| {
                    AppError::Export(format!("Failed to write row {} column {}: {}", r, col, e))
                })?;
        }
    }

    workbook
        .save(path)
        .map_err(|e| AppError::Export(format!("Failed to save workbook: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spreadsheets::layout::header;

    #[test]
    fn saves_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.xlsx");

        let mut row = vec![String::new(); 24];
        row[0] = "The Grand".to_string();

        export_listings_xlsx(&header(false), &[row], &path).unwrap();

        let written = std::fs::metadata(&path).unwrap();
        assert!(written.len() > 0);
    }
}
