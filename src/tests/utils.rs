use crate::domain::{MapInfo, MapsApiParams};
use crate::scraper::{PageFetcher, ScraperError};
use std::cell::RefCell;
use std::collections::HashMap;

/// Serves canned bodies by URL and records every request.
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl StaticFetcher {
    pub fn new<I, U, B>(pages: I) -> Self
    where
        I: IntoIterator<Item = (U, B)>,
        U: Into<String>,
        B: Into<String>,
    {
        Self {
            pages: pages
                .into_iter()
                .map(|(url, body)| (url.into(), body.into()))
                .collect(),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl PageFetcher for StaticFetcher {
    fn fetch_text(&self, url: &str) -> Result<String, ScraperError> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScraperError::Network(format!("{url}: HTTP 404 Not Found")))
    }
}

pub fn test_map_info() -> MapInfo {
    MapInfo::new(
        MapsApiParams {
            base_url: "https://maps.test/distancematrix/json?",
            units: "imperial",
            mode: "transit",
            transit_routing: "less_walking",
            api_key: "TEST",
        },
        "1 Main St".to_string(),
        1_710_491_400,
        1_710_524_700,
    )
}
