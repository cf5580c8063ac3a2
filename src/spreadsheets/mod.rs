pub mod export_csv;
pub mod export_xlsx;
pub mod layout;

pub use export_csv::CsvExport;
pub use export_xlsx::export_listings_xlsx;
pub use layout::{header, row, CsvRow};
