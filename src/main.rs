use crate::config::{Settings, DEFAULT_CONFIG_PATH};
use crate::domain::{Field, ListingRecord, MapInfo};
use crate::errors::{AppError, AppResult};
use crate::scraper::{ApartmentsScraper, PageFetcher};
use crate::spreadsheets::{export_listings_xlsx, header, row, CsvExport};
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod errors;
mod scraper;
mod spreadsheets;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    if let Err(e) = run(Path::new(&config_path)) {
        error!("❌ Run failed: {e}");
        std::process::exit(1);
    }
}

fn run(config_path: &Path) -> AppResult<()> {
    let settings = Settings::load(config_path)?;
    info!(
        "Loaded {} (scores: {}, xlsx: {}, travel: {})",
        config_path.display(),
        settings.print_scores,
        settings.export_xlsx,
        settings.lookup_travel
    );

    let scraper = ApartmentsScraper::new()?;
    let csv_path = settings.csv_path();
    let mut csv = CsvExport::create(&csv_path, settings.print_scores)?;
    let mut xlsx_rows = Vec::new();

    let stats = scraper.walk_listings(&settings.apartments_url, &settings.map_info, |record| {
        if settings.lookup_travel {
            log_commute(&scraper, &settings.map_info, &record);
        }

        csv.write_listing(&record)?;

        if settings.export_xlsx {
            xlsx_rows.push(row(&record, settings.print_scores));
        }
        Ok::<(), AppError>(())
    })?;

    let written = csv.finish()?;
    info!(
        "✅ Wrote {written} listings from {} pages to {}",
        stats.pages,
        csv_path.display()
    );

    if settings.export_xlsx {
        let xlsx_path = settings.xlsx_path();
        export_listings_xlsx(&header(settings.print_scores), &xlsx_rows, &xlsx_path)?;
        info!("✅ Wrote {}", xlsx_path.display());
    }

    Ok(())
}

fn log_commute<F: PageFetcher>(scraper: &ApartmentsScraper<F>, map_info: &MapInfo, record: &ListingRecord) {
    let address = record.fields.get(Field::Address);
    if address.is_empty() {
        return;
    }

    match scraper.morning_commute(address, map_info) {
        Ok(travel) => info!(
            address,
            distance = travel.distance.as_deref().unwrap_or("?"),
            duration = travel.duration.as_deref().unwrap_or("?"),
            "🚆 Morning commute"
        ),
        Err(e) => warn!(address, "⚠️ Commute lookup failed: {e}"),
    }
}
