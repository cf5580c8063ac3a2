// fetcher.rs
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// Anything that can turn a URL into a response body.
pub trait PageFetcher {
    fn fetch_text(&self, url: &str) -> Result<String, ScraperError>;
}

/// Plain blocking GET. One attempt per page; failures end the run.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/json"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> Result<String, ScraperError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScraperError::Network(format!("{url}: {e}")))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ScraperError::Network(format!("{url}: {e}")))?;

        if !status.is_success() {
            return Err(ScraperError::Network(format!("{url}: HTTP {status}")));
        }

        Ok(text)
    }
}
