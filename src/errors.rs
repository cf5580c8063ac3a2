// errors.rs
use crate::scraper::ScraperError;
use thiserror::Error;

/// Errors that end a run: bad configuration, a failed fetch or parse
/// while crawling, or a failure writing the output files.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error(transparent)]
    Scraper(#[from] ScraperError),
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
