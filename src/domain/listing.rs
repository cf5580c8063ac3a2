use crate::domain::fields::FieldSet;

/// What the search-results card tells us about a listing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingSummary {
    pub url: String,
    pub contact: String,
    pub rent: String,
}

/// A summary joined with the fields scraped from its detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRecord {
    pub summary: ListingSummary,
    pub fields: FieldSet,
}
