// travel.rs
use crate::scraper::models::{DistanceMatrixResponse, TravelInfo};
use crate::scraper::ScraperError;

const STATUS_OK: &str = "OK";

/// Read the first route out of a distance-matrix response. Any status other
/// than OK leaves distance and duration unset.
pub fn parse_distance_matrix(body: &str) -> Result<TravelInfo, ScraperError> {
    let response: DistanceMatrixResponse =
        serde_json::from_str(body).map_err(|e| ScraperError::JsonParse(e.to_string()))?;

    if response.status != STATUS_OK {
        return Ok(TravelInfo::default());
    }

    let Some(element) = response
        .rows
        .into_iter()
        .next()
        .and_then(|row| row.elements.into_iter().next())
    else {
        return Ok(TravelInfo::default());
    };

    if element.status != STATUS_OK {
        return Ok(TravelInfo::default());
    }

    Ok(TravelInfo {
        distance: element.distance.map(|d| d.text),
        duration: element.duration.map(|d| d.text),
    })
}
