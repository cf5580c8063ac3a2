// spreadsheets/layout.rs
use crate::domain::{Field, ListingRecord};

pub type CsvRow = Vec<String>;

/// Placeholder score written after every column in scored mode.
pub const SCORE_PLACEHOLDER: &str = "5";
pub const MODIFIER_DEFAULT: &str = "0";

enum Column {
    Field(Field),
    Url,
    Contact,
    Rent,
}

const COLUMNS: [(&str, Column); 24] = [
    ("Property Name", Column::Field(Field::Name)),
    ("url", Column::Url),
    ("Contact", Column::Contact),
    ("Address", Column::Field(Field::Address)),
    ("G_map", Column::Field(Field::MapLink)),
    ("1bedroom", Column::Field(Field::OneBedroom)),
    ("2bedroom", Column::Field(Field::TwoBedroom)),
    ("3bedroom", Column::Field(Field::ThreeBedroom)),
    ("Rent", Column::Rent),
    ("Monthly Fees", Column::Field(Field::MonthlyFees)),
    ("One Time Fees", Column::Field(Field::OneTimeFees)),
    ("Pet Policy", Column::Field(Field::PetPolicy)),
    ("Parking", Column::Field(Field::Parking)),
    ("Gym", Column::Field(Field::Gym)),
    ("Kitchen", Column::Field(Field::Kitchen)),
    ("Amenities", Column::Field(Field::Amenities)),
    ("Features", Column::Field(Field::Features)),
    ("Living Space", Column::Field(Field::LivingSpace)),
    ("Lease Info", Column::Field(Field::Lease)),
    ("Services", Column::Field(Field::Services)),
    ("Property Info", Column::Field(Field::PropertyInfo)),
    ("Indoor Info", Column::Field(Field::Indoor)),
    ("Outdoor Info", Column::Field(Field::Outdoor)),
    ("Description", Column::Field(Field::Description)),
];

/// Header row. Scored mode puts a score column after every data column,
/// labels the first one `score` and ends with `modifier`.
pub fn header(scored: bool) -> CsvRow {
    let base: CsvRow = COLUMNS.iter().map(|(name, _)| name.to_string()).collect();
    if !scored {
        return base;
    }

    let mut row = interleave_scores(base);
    row[1] = "score".to_string();
    row.push("modifier".to_string());
    row
}

/// One listing as a row matching `header(scored)`.
pub fn row(record: &ListingRecord, scored: bool) -> CsvRow {
    let base: CsvRow = COLUMNS
        .iter()
        .map(|(_, column)| match column {
            Column::Field(field) => record.fields.get(*field).to_string(),
            Column::Url => record.summary.url.clone(),
            Column::Contact => record.summary.contact.clone(),
            Column::Rent => record.summary.rent.clone(),
        })
        .collect();

    if !scored {
        return base;
    }

    let mut row = interleave_scores(base);
    row.push(MODIFIER_DEFAULT.to_string());
    row
}

fn interleave_scores(columns: CsvRow) -> CsvRow {
    let mut out = Vec::with_capacity(columns.len() * 2 + 1);
    for column in columns {
        out.push(column);
        out.push(SCORE_PLACEHOLDER.to_string());
    }
    out
}
