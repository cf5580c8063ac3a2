// config.rs
use crate::domain::{MapInfo, MapsApiParams};
use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveTime};
use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "address.ini";
const API_KEY_ENV: &str = "MAPS_API_KEY";
const CLOCK_FORMAT: &str = "%I:%M %p";

#[derive(Debug, Deserialize)]
struct IniFile {
    all: AllSection,
}

// Keys are matched both as written in the file and lowercased.
#[derive(Debug, Deserialize)]
struct AllSection {
    #[serde(rename = "apartmentsurl", alias = "apartmentsURL")]
    apartments_url: String,
    fname: String,
    #[serde(rename = "printscores", alias = "printScores", default)]
    print_scores: String,
    #[serde(rename = "mapsurl", alias = "mapsURL")]
    maps_url: String,
    #[serde(rename = "mapsunits", alias = "mapsUnits")]
    maps_units: String,
    #[serde(rename = "mapsmode", alias = "mapsMode")]
    maps_mode: String,
    #[serde(rename = "mapstransitrouting", alias = "mapsTransitRouting")]
    maps_transit_routing: String,
    #[serde(rename = "mapsapikey", alias = "mapsAPIKey", default)]
    maps_api_key: String,
    #[serde(rename = "targetaddress", alias = "targetAddress")]
    target_address: String,
    morning: String,
    evening: String,
    #[serde(rename = "exportxlsx", alias = "exportXlsx", default)]
    export_xlsx: String,
    #[serde(rename = "lookuptravel", alias = "lookupTravel", default)]
    lookup_travel: String,
}

/// Everything a run needs, resolved from the INI file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub apartments_url: String,
    pub output_base: String,
    pub print_scores: bool,
    pub export_xlsx: bool,
    pub lookup_travel: bool,
    pub map_info: MapInfo,
}

impl Settings {
    /// Read `path`, with commute times anchored on tomorrow's date.
    pub fn load(path: &Path) -> AppResult<Self> {
        let tomorrow = Local::now()
            .date_naive()
            .succ_opt()
            .ok_or_else(|| AppError::Config("no date after today".into()))?;
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty());

        Self::from_file(path, tomorrow, api_key)
    }

    pub fn from_file(path: &Path, day: NaiveDate, api_key: Option<String>) -> AppResult<Self> {
        let name = path
            .to_str()
            .ok_or_else(|| AppError::Config(format!("non UTF-8 path: {}", path.display())))?;

        let ini: IniFile = Config::builder()
            .add_source(File::new(name, FileFormat::Ini).required(true))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        let all = ini.all;

        let morning = departure_epoch(day, &all.morning)?;
        let evening = departure_epoch(day, &all.evening)?;
        let api_key = api_key.unwrap_or(all.maps_api_key);

        let map_info = MapInfo::new(
            MapsApiParams {
                base_url: &all.maps_url,
                units: &all.maps_units,
                mode: &all.maps_mode,
                transit_routing: &all.maps_transit_routing,
                api_key: &api_key,
            },
            all.target_address,
            morning,
            evening,
        );

        Ok(Self {
            apartments_url: all.apartments_url,
            output_base: all.fname,
            print_scores: parse_flag(&all.print_scores),
            export_xlsx: parse_flag(&all.export_xlsx),
            lookup_travel: parse_flag(&all.lookup_travel),
            map_info,
        })
    }

    pub fn csv_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.csv", self.output_base))
    }

    pub fn xlsx_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.xlsx", self.output_base))
    }
}

pub fn parse_flag(value: &str) -> bool {
    matches!(value.trim(), "T" | "t" | "1" | "True" | "true")
}

/// Seconds since epoch for `clock` ("8:30 AM") on `day`, reading the
/// date-time as UTC.
pub fn departure_epoch(day: NaiveDate, clock: &str) -> AppResult<i64> {
    let time = NaiveTime::parse_from_str(clock.trim(), CLOCK_FORMAT)
        .map_err(|e| AppError::Config(format!("bad time '{clock}': {e}")))?;
    Ok(day.and_time(time).and_utc().timestamp())
}
