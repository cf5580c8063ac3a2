pub mod fields;
pub mod listing;
pub mod map_info;

pub use fields::{Field, FieldSet};
pub use listing::{ListingRecord, ListingSummary};
pub use map_info::{MapInfo, MapsApiParams};
