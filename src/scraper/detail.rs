// detail.rs
use crate::domain::{Field, FieldSet, MapInfo};
use crate::scraper::extractors::{self, ICON_SECTIONS, METRICS};
use scraper::Html;
use tracing::debug;

const BEDROOM_ROWS: [(Field, u8); 3] = [
    (Field::OneBedroom, 1),
    (Field::TwoBedroom, 2),
    (Field::ThreeBedroom, 3),
];

/// Run every extractor over one detail page. Sections the page doesn't have
/// come back as empty strings.
pub fn parse_listing_document(html: &str, map_info: &MapInfo) -> FieldSet {
    let document = Html::parse_document(html);
    let root = document.root_element();
    let mut fields = FieldSet::new();

    fields.set(Field::Name, extractors::property_name(root));

    let address = extractors::address(root);

    for (field, beds) in BEDROOM_ROWS {
        fields.set(field, extractors::bedroom_row(root, beds));
    }

    for metric in METRICS.iter() {
        fields.set(metric.field, extractors::metric(root, metric.selector));
    }

    if !address.is_empty() {
        fields.set(Field::MapLink, map_info.map_link(&address));
    }
    fields.set(Field::Address, address);

    let fees = extractors::fees(root);
    fields.set(Field::OneTimeFees, fees.one_time);
    fields.set(Field::MonthlyFees, fees.monthly);

    fields.set(Field::Description, extractors::description(root));

    let Some(group) = extractors::spec_group(root) else {
        debug!("no spec group on page, amenity sections left empty");
        return fields;
    };

    fields.set(Field::PetPolicy, extractors::pet_policy(group));
    fields.set(Field::Parking, extractors::parking(group));

    for (field, icon) in ICON_SECTIONS {
        fields.set(field, extractors::icon_section(group, icon));
    }

    let found = extractors::features_and_info(group);
    fields.set(Field::Features, found.features);
    fields.set(Field::PropertyInfo, found.info);

    fields
}
