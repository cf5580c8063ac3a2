// src/domain/map_info.rs

use crate::scraper::ScraperError;
use url::Url;

const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/";
const DIRECTIONS_SUFFIX: &str = "/data=!4m2!4m1!3e2";

/// Map settings shared by every listing of a run. Built once from config.
#[derive(Debug, Clone, PartialEq)]
pub struct MapInfo {
    /// Distance-matrix endpoint with units, mode, routing preference and key applied.
    pub maps_url: String,
    pub target_address: String,
    /// Departure times, seconds since epoch.
    pub morning: i64,
    pub evening: i64,
}

pub struct MapsApiParams<'a> {
    pub base_url: &'a str,
    pub units: &'a str,
    pub mode: &'a str,
    pub transit_routing: &'a str,
    pub api_key: &'a str,
}

impl MapInfo {
    pub fn new(params: MapsApiParams<'_>, target_address: String, morning: i64, evening: i64) -> Self {
        let maps_url = format!(
            "{}units={}&mode={}&transit_routing_preference={}&key={}",
            params.base_url, params.units, params.mode, params.transit_routing, params.api_key
        );

        Self {
            maps_url,
            target_address,
            morning,
            evening,
        }
    }

    /// Directions link from the target address to a listing.
    pub fn map_link(&self, listing_address: &str) -> String {
        map_link(&self.target_address, listing_address)
    }

    /// Distance-matrix request from `origin` to the target address,
    /// departing at `departure` (seconds since epoch).
    pub fn distance_matrix_url(&self, origin: &str, departure: i64) -> Result<String, ScraperError> {
        let mut url = Url::parse(&self.maps_url)
            .map_err(|e| ScraperError::InvalidUrl(format!("{}: {e}", self.maps_url)))?;

        url.query_pairs_mut()
            .append_pair("origins", origin)
            .append_pair("destinations", &self.target_address)
            .append_pair("departure_time", &departure.to_string());

        Ok(url.into())
    }
}

pub fn map_link(target_address: &str, listing_address: &str) -> String {
    format!(
        "{DIRECTIONS_BASE}{}/{}{DIRECTIONS_SUFFIX}",
        target_address.replace(' ', "+"),
        listing_address.replace(' ', "+")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MapInfo {
        MapInfo::new(
            MapsApiParams {
                base_url: "https://maps.googleapis.com/maps/api/distancematrix/json?",
                units: "imperial",
                mode: "transit",
                transit_routing: "fewer_transfers",
                api_key: "KEY",
            },
            "1 Main St".to_string(),
            1_700_000_000,
            1_700_030_000,
        )
    }

    #[test]
    fn map_link_replaces_spaces_in_both_addresses() {
        assert_eq!(
            map_link("1 Main St", "2 Oak Ave"),
            "https://www.google.com/maps/dir/1+Main+St/2+Oak+Ave/data=!4m2!4m1!3e2"
        );
    }

    #[test]
    fn maps_url_carries_api_parameters() {
        assert_eq!(
            sample().maps_url,
            "https://maps.googleapis.com/maps/api/distancematrix/json?units=imperial&mode=transit&transit_routing_preference=fewer_transfers&key=KEY"
        );
    }

    #[test]
    fn distance_matrix_url_appends_route() {
        let url = sample().distance_matrix_url("2 Oak Ave", 1_700_000_000).unwrap();
        assert!(url.starts_with(&sample().maps_url));
        assert!(url.ends_with("&origins=2+Oak+Ave&destinations=1+Main+St&departure_time=1700000000"));
    }
}
