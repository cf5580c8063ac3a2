use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTML parse error: {0}")]
    HtmlParse(String),
    #[error("Required container not found: {0}")]
    MissingContainer(&'static str),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}
