use crate::domain::Field;
use crate::scraper::{parse_listing_document, ApartmentsScraper, ScraperError};
use crate::tests::fixtures::{full_detail_page, BARE_DETAIL_PAGE, SITE};
use crate::tests::utils::{test_map_info, StaticFetcher};

#[test]
fn full_page_populates_every_section() {
    let fields = parse_listing_document(&full_detail_page(), &test_map_info());

    assert_eq!(fields.get(Field::Name), "The Grand");
    assert_eq!(fields.get(Field::Address), "2 Oak Ave, Chicago, IL 60601");
    assert_eq!(
        fields.get(Field::MapLink),
        "https://www.google.com/maps/dir/1+Main+St/2+Oak+Ave,+Chicago,+IL+60601/data=!4m2!4m1!3e2"
    );
    assert_eq!(fields.get(Field::OneBedroom), "1Bed:1Bath:700SqFt");
    assert_eq!(fields.get(Field::TwoBedroom), "");
    assert_eq!(fields.get(Field::OneTimeFees), "Application Fee $50");
    assert_eq!(fields.get(Field::MonthlyFees), "Trash $15");
    assert_eq!(fields.get(Field::Description), "Bright,units (R)");
    assert_eq!(fields.get(Field::PetPolicy), "Cats allowed");
    assert_eq!(fields.get(Field::Parking), "Garage $100");
    assert_eq!(fields.get(Field::Amenities), "Pool,Spa");
    assert_eq!(fields.get(Field::Gym), "Gym");
    assert_eq!(fields.get(Field::Features), "Balcony");
    assert_eq!(fields.get(Field::PropertyInfo), "Built 1990");
}

#[test]
fn sections_outside_spec_group_are_ignored() {
    let fields = parse_listing_document(&full_detail_page(), &test_map_info());
    assert_eq!(fields.get(Field::Kitchen), "");
}

#[test]
fn neighbourhood_metrics_are_read() {
    let fields = parse_listing_document(&full_detail_page(), &test_map_info());

    assert_eq!(fields.get(Field::Score), "72");
    assert_eq!(fields.get(Field::ScoreStatus), "Busy");
    assert_eq!(fields.get(Field::Airport), "Calm");
    assert_eq!(fields.get(Field::Traffic), "Busy");
    assert_eq!(fields.get(Field::Businesses), "72");
}

#[test]
fn bare_page_yields_every_field_empty() {
    let fields = parse_listing_document(BARE_DETAIL_PAGE, &test_map_info());

    for field in Field::ALL {
        assert_eq!(fields.get(field), "", "{} should be empty", field.key());
    }
    assert_eq!(fields.len(), Field::ALL.len());
}

#[test]
fn parse_listing_fetches_detail_url() {
    let url = format!("{SITE}/the-grand/");
    let fetcher = StaticFetcher::new([(url.clone(), full_detail_page())]);
    let scraper = ApartmentsScraper::with_fetcher(fetcher);

    let fields = scraper.parse_listing(&url, &test_map_info()).unwrap();
    assert_eq!(fields.get(Field::Name), "The Grand");
}

#[test]
fn failed_detail_fetch_is_an_error() {
    let scraper = ApartmentsScraper::with_fetcher(StaticFetcher::new(Vec::<(String, String)>::new()));

    let err = scraper
        .parse_listing(&format!("{SITE}/gone/"), &test_map_info())
        .unwrap_err();
    assert!(matches!(err, ScraperError::Network(_)));
}

#[test]
fn morning_commute_reads_distance_matrix() {
    let map_info = test_map_info();
    let address = "2 Oak Ave, Chicago, IL 60601";
    let url = map_info.distance_matrix_url(address, map_info.morning).unwrap();
    let body = r#"{"status":"OK","rows":[{"elements":[{"status":"OK","distance":{"text":"3.1 mi","value":5000},"duration":{"text":"22 mins","value":1320}}]}]}"#;
    let scraper = ApartmentsScraper::with_fetcher(StaticFetcher::new([(url, body)]));

    let travel = scraper.morning_commute(address, &map_info).unwrap();
    assert_eq!(travel.distance.as_deref(), Some("3.1 mi"));
    assert_eq!(travel.duration.as_deref(), Some("22 mins"));
}
