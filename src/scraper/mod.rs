mod detail;
mod dom;
mod extractors;
mod fetcher;
mod models;
mod normalize;
mod scraper;
mod scraper_error;
mod travel;

pub use detail::parse_listing_document;
pub use fetcher::PageFetcher;
pub use self::scraper::{ApartmentsScraper, WalkStats};
pub use scraper_error::ScraperError;
