// scraper.rs
use crate::domain::{Field, FieldSet, ListingRecord, ListingSummary, MapInfo};
use crate::scraper::detail::parse_listing_document;
use crate::scraper::dom::{parse_selector, select_first, text_of};
use crate::scraper::fetcher::{HttpFetcher, PageFetcher};
use crate::scraper::models::TravelInfo;
use crate::scraper::travel::parse_distance_matrix;
use crate::scraper::ScraperError;
use scraper::Html;
use std::collections::HashSet;
use tracing::{debug, info, warn};
use url::Url;

const LISTING_CONTAINER: &str = "div.placardContainer";
const NO_NEXT_PAGE: &str = "javascript:void(0)";

pub struct ApartmentsScraper<F: PageFetcher = HttpFetcher> {
    fetcher: F,
}

/// Listings found on one search-results page, in document order.
#[derive(Debug, Default, PartialEq)]
pub struct ResultsPage {
    pub listings: Vec<ListingSummary>,
    pub next_url: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WalkStats {
    pub pages: usize,
    pub listings: usize,
}

impl ApartmentsScraper<HttpFetcher> {
    pub fn new() -> Result<Self, ScraperError> {
        Ok(Self::with_fetcher(HttpFetcher::new()?))
    }
}

impl<F: PageFetcher> ApartmentsScraper<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Crawl every results page from `start_url`, following "next" links
    /// until there are none, and hand each finished listing to `emit`.
    ///
    /// Pages and detail fetches run one at a time, so records arrive in page
    /// order and then in card order.
    pub fn walk_listings<E, EmitError>(
        &self,
        start_url: &str,
        map_info: &MapInfo,
        mut emit: E,
    ) -> Result<WalkStats, EmitError>
    where
        E: FnMut(ListingRecord) -> Result<(), EmitError>,
        EmitError: From<ScraperError>,
    {
        let mut stats = WalkStats::default();
        let mut visited = HashSet::new();
        let mut next_url = Some(start_url.to_string());

        while let Some(page_url) = next_url.take() {
            if !visited.insert(page_url.clone()) {
                warn!("🔁 Page {page_url} already seen, stopping");
                break;
            }

            stats.pages += 1;
            info!("📄 Scraping page {}: {page_url}", stats.pages);

            let html = self.fetcher.fetch_text(&page_url)?;
            let page = parse_results_page(&html, &page_url)?;

            info!("✅ Page {} parsed ({} listings)", stats.pages, page.listings.len());

            for summary in page.listings {
                let fields = self.parse_listing(&summary.url, map_info)?;
                debug!(url = %summary.url, name = fields.get(Field::Name), "listing parsed");
                emit(ListingRecord { summary, fields })?;
                stats.listings += 1;
            }

            next_url = page.next_url;
        }

        info!(
            "🏁 No more pages ({} pages, {} listings)",
            stats.pages, stats.listings
        );
        Ok(stats)
    }

    /// Fetch one detail page and extract its fields.
    pub fn parse_listing(&self, url: &str, map_info: &MapInfo) -> Result<FieldSet, ScraperError> {
        let html = self.fetcher.fetch_text(url)?;
        Ok(parse_listing_document(&html, map_info))
    }

    /// Distance and duration for a prepared distance-matrix URL.
    pub fn travel_time(&self, map_url: &str) -> Result<TravelInfo, ScraperError> {
        let body = self.fetcher.fetch_text(map_url)?;
        parse_distance_matrix(&body)
    }

    /// Morning trip from a listing to the target address.
    pub fn morning_commute(&self, address: &str, map_info: &MapInfo) -> Result<TravelInfo, ScraperError> {
        let url = map_info.distance_matrix_url(address, map_info.morning)?;
        self.travel_time(&url)
    }
}

/// Pull the listing cards and the next-page link out of a results page.
/// Cards without a title link are ads or placeholders and are skipped.
pub fn parse_results_page(html: &str, page_url: &str) -> Result<ResultsPage, ScraperError> {
    let base = Url::parse(page_url)
        .map_err(|e| ScraperError::InvalidUrl(format!("{page_url}: {e}")))?;

    let document = Html::parse_document(html);
    let container = select_first(document.root_element(), LISTING_CONTAINER)
        .ok_or(ScraperError::MissingContainer(LISTING_CONTAINER))?;

    let placard = parse_selector("article.placard")
        .ok_or_else(|| ScraperError::HtmlParse("article.placard".into()))?;

    let mut page = ResultsPage::default();

    for item in container.select(&placard) {
        let Some(href) = select_first(item, "a.placardTitle").and_then(|a| a.value().attr("href"))
        else {
            debug!("skipping placard without a title link");
            continue;
        };

        let Some(url) = resolve(&base, href) else {
            debug!(href, "skipping placard with unusable link");
            continue;
        };

        let rent = select_first(item, "span.altRentDisplay")
            .map(|e| text_of(e).trim().to_string())
            .unwrap_or_default();
        let contact = select_first(item, "div.phone")
            .map(|e| text_of(e).trim().to_string())
            .unwrap_or_default();

        page.listings.push(ListingSummary { url, contact, rent });
    }

    page.next_url = select_first(container, "a.next")
        .and_then(|a| a.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty() && *href != NO_NEXT_PAGE)
        .and_then(|href| resolve(&base, href));

    Ok(page)
}

fn resolve(base: &Url, href: &str) -> Option<String> {
    base.join(href).ok().map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://listings.test/search/";

    #[test]
    fn results_page_reads_cards_in_order() {
        let html = r#"<html><body><div class="placardContainer">
            <article class="placard">
                <a class="placardTitle" href="/the-grand/">The Grand</a>
                <span class="altRentDisplay"> $1,200 - $1,800 </span>
                <div class="phone"> 555-0100 </div>
            </article>
            <article class="placard"><div class="ad">Sponsored</div></article>
            <article class="placard">
                <a class="placardTitle" href="https://listings.test/oak-court/">Oak Court</a>
            </article>
            <a class="next" href="/search/2/">Next</a>
        </div></body></html>"#;

        let page = parse_results_page(html, PAGE).unwrap();

        assert_eq!(
            page.listings,
            vec![
                ListingSummary {
                    url: "https://listings.test/the-grand/".into(),
                    contact: "555-0100".into(),
                    rent: "$1,200 - $1,800".into(),
                },
                ListingSummary {
                    url: "https://listings.test/oak-court/".into(),
                    contact: String::new(),
                    rent: String::new(),
                },
            ]
        );
        assert_eq!(page.next_url.as_deref(), Some("https://listings.test/search/2/"));
    }

    #[test]
    fn placeholder_next_link_ends_pagination() {
        let html = r#"<div class="placardContainer"><a class="next" href="javascript:void(0)"></a></div>"#;
        let page = parse_results_page(html, PAGE).unwrap();
        assert!(page.listings.is_empty());
        assert_eq!(page.next_url, None);
    }

    #[test]
    fn missing_container_is_an_error() {
        let err = parse_results_page("<html><body></body></html>", PAGE).unwrap_err();
        assert!(matches!(err, ScraperError::MissingContainer(_)));
    }
}
