use crate::domain::ListingRecord;
use crate::errors::{AppError, AppResult};
use crate::spreadsheets::layout::{header, row};
use csv::Writer;
use std::fs::File;
use std::path::Path;

/// Streams listings to a CSV file. Each row is flushed as it is written so
/// an aborted crawl keeps everything emitted before the failure.
pub struct CsvExport {
    writer: Writer<File>,
    scored: bool,
    rows: usize,
}

impl CsvExport {
    pub fn create(path: &Path, scored: bool) -> AppResult<Self> {
        let mut writer = Writer::from_path(path).map_err(|e| {
            AppError::Export(format!("Failed to create {}: {}", path.display(), e))
        })?;

        writer
            .write_record(header(scored))
            .map_err(|e| AppError::Export(format!("Failed to write header: {}", e)))?;
        writer
            .flush()
            .map_err(|e| AppError::Export(format!("Failed to flush header: {}", e)))?;

        Ok(Self {
            writer,
            scored,
            rows: 0,
        })
    }

    pub fn write_listing(&mut self, record: &ListingRecord) -> AppResult<()> {
        self.writer
            .write_record(row(record, self.scored))
            .map_err(|e| {
                AppError::Export(format!("Failed to write row for {}: {}", record.summary.url, e))
            })?;
        self.writer
            .flush()
            .map_err(|e| AppError::Export(format!("Failed to flush row: {}", e)))?;

        self.rows += 1;
        Ok(())
    }

    /// Number of listing rows written, header excluded.
    pub fn finish(mut self) -> AppResult<usize> {
        self.writer
            .flush()
            .map_err(|e| AppError::Export(format!("Failed to flush CSV: {}", e)))?;
        Ok(self.rows)
    }
}
