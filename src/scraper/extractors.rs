// extractors.rs
//
// One function per detail-page field. Each takes the element to search under
// and returns the cleaned value, or "" when the page doesn't have it.
use crate::domain::Field;
use crate::scraper::dom::{find_next, parse_selector, select_first, text_of};
use crate::scraper::normalize::{char_window, compact_row, normalize, strip_ends};
use scraper::ElementRef;

/// Region holding amenities, parking, pets and the icon sections. The same
/// icons repeat in the printable summary, so those extractors only look here.
pub const SPEC_GROUP: &str = "section.specGroup.js-specGroup";

/// Character window of a floor-plan row that holds beds/baths/size.
/// Depends on the site's row markup; revisit if the layout changes.
const FLOOR_PLAN_WINDOW: (usize, usize) = (100, 400);

/// Icon class that marks each list section inside the spec group.
pub const ICON_SECTIONS: [(Field, &str); 8] = [
    (Field::Amenities, "featuresIcon"),
    (Field::Indoor, "interiorIcon"),
    (Field::Outdoor, "parksIcon"),
    (Field::Gym, "fitnessIcon"),
    (Field::Kitchen, "kitchenIcon"),
    (Field::Services, "servicesIcon"),
    (Field::LivingSpace, "sofaIcon"),
    (Field::Lease, "leaseIcon"),
];

pub struct MetricExtractor {
    pub field: Field,
    pub selector: &'static str,
}

// TODO: Businesses, Neighbourhood and NeighbourhoodOverview still read the
// sound-score widget; give them their own selectors once the neighbourhood
// panel markup has been captured.
pub const METRICS: [MetricExtractor; 7] = [
    MetricExtractor {
        field: Field::Score,
        selector: ".soundScoreScore",
    },
    MetricExtractor {
        field: Field::ScoreStatus,
        selector: ".soundScoreStatus",
    },
    MetricExtractor {
        field: Field::Airport,
        selector: "ul.labels .ssAirportsData.status",
    },
    MetricExtractor {
        field: Field::Traffic,
        selector: "ul.labels .ssTrafficData.status",
    },
    MetricExtractor {
        field: Field::Businesses,
        selector: ".soundScoreScore",
    },
    MetricExtractor {
        field: Field::Neighbourhood,
        selector: ".soundScoreScore",
    },
    MetricExtractor {
        field: Field::NeighbourhoodOverview,
        selector: ".soundScoreScore",
    },
];

#[derive(Debug, Default, PartialEq)]
pub struct Fees {
    pub one_time: String,
    pub monthly: String,
}

#[derive(Debug, Default, PartialEq)]
pub struct FeaturesAndInfo {
    pub features: String,
    pub info: String,
}

pub fn spec_group(root: ElementRef<'_>) -> Option<ElementRef<'_>> {
    select_first(root, SPEC_GROUP)
}

pub fn property_name(root: ElementRef<'_>) -> String {
    select_first(root, "h1.propertyName")
        .map(|heading| strip_ends(&normalize(&text_of(heading)), 1, 1))
        .unwrap_or_default()
}

/// "street, locality, region postal". Empty unless all four parts are present.
pub fn address(root: ElementRef<'_>) -> String {
    let parts = (
        address_part(root, "streetAddress"),
        address_part(root, "addressLocality"),
        address_part(root, "addressRegion"),
        address_part(root, "postalCode"),
    );

    match parts {
        (Some(street), Some(locality), Some(region), Some(postal)) => {
            format!("{}, {}, {} {}", street, locality, region, postal)
        }
        _ => String::new(),
    }
}

// The value sits either in a `content` attribute or in the element text.
fn address_part(root: ElementRef<'_>, role: &str) -> Option<String> {
    let element = select_first(root, &format!("[itemprop=\"{role}\"]"))?;
    let raw = match element.value().attr("content") {
        Some(content) => content.to_string(),
        None => text_of(element),
    };
    Some(normalize(&raw))
}

/// First floor-plan row for `beds` bedrooms, squashed to `cell:cell:...`.
pub fn bedroom_row(root: ElementRef<'_>, beds: u8) -> String {
    let (start, end) = FLOOR_PLAN_WINDOW;
    select_first(root, &format!("tr[data-beds=\"{beds}\"]"))
        .map(|row| compact_row(&char_window(&text_of(row), start, end)))
        .unwrap_or_default()
}

pub fn fees(root: ElementRef<'_>) -> Fees {
    let fee_text = |css: &str| {
        select_first(root, css)
            .map(|container| normalize(&strip_ends(&text_of(container), 1, 2)))
            .unwrap_or_default()
    };

    Fees {
        one_time: fee_text("div.oneTimeFees"),
        monthly: fee_text("div.monthlyFees"),
    }
}

pub fn description(root: ElementRef<'_>) -> String {
    select_first(root, "p[itemprop=\"description\"]")
        .map(|paragraph| normalize(&text_of(paragraph)))
        .unwrap_or_default()
}

pub fn metric(root: ElementRef<'_>, selector: &str) -> String {
    select_first(root, selector)
        .map(|widget| normalize(&text_of(widget)))
        .unwrap_or_default()
}

pub fn pet_policy(scope: ElementRef<'_>) -> String {
    select_first(scope, "div.petPolicyDetails")
        .map(|details| normalize(&strip_ends(&text_of(details), 2, 2)))
        .unwrap_or_default()
}

pub fn parking(scope: ElementRef<'_>) -> String {
    select_first(scope, "div.parkingDetails")
        .map(|details| strip_ends(&normalize(&text_of(details)), 1, 1))
        .unwrap_or_default()
}

/// The list that follows the icon with class `icon_class`.
pub fn icon_section(scope: ElementRef<'_>, icon_class: &str) -> String {
    select_first(scope, &format!("i.{icon_class}"))
        .and_then(|icon| icon.parent().and_then(ElementRef::wrap))
        .and_then(|holder| find_next(holder, "ul"))
        .map(|list| normalize(&strip_ends(&text_of(list), 1, 1)))
        .unwrap_or_default()
}

/// Both sections share the `propertyIcon` marker; the heading after each
/// icon says which one the following list belongs to.
pub fn features_and_info(scope: ElementRef<'_>) -> FeaturesAndInfo {
    let mut out = FeaturesAndInfo::default();

    let Some(selector) = parse_selector("i.propertyIcon") else {
        return out;
    };

    for icon in scope.select(&selector) {
        let Some(holder) = icon.parent().and_then(ElementRef::wrap) else {
            continue;
        };
        let (Some(list), Some(heading)) = (find_next(holder, "ul"), find_next(holder, "h3")) else {
            continue;
        };

        let data = strip_ends(&normalize(&text_of(list)), 1, 1);
        match text_of(heading).trim() {
            "Features" => out.features = data,
            "Property Information" => out.info = data,
            _ => {}
        }
    }

    out
}
