// crates/cities-core/src/record.rs

//! # City Rows
//!
//! One tab-delimited row of the GeoNames dump becomes one [`CityRecord`], or
//! a [`SkipReason`] saying why it was dropped. Skips never abort the run.

use csv::StringRecord;
use thiserror::Error;

// Column layout of the GeoNames "geoname" table.
const COL_NAME: usize = 1;
const COL_ASCII_NAME: usize = 2;
const COL_LATITUDE: usize = 4;
const COL_LONGITUDE: usize = 5;
const COL_COUNTRY_CODE: usize = 8;
const COL_ADMIN1_CODE: usize = 10;
const COL_POPULATION: usize = 14;

/// Rows shorter than this are skipped.
pub const MIN_FIELDS: usize = COL_POPULATION + 1;

#[derive(Debug, Clone, PartialEq)]
pub struct CityRecord {
    /// ASCII name, or the native name when the ASCII column is empty.
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country_code: String,
    /// Admin1 code, scoped to `country_code`.
    pub region_code: String,
    /// Raw text; anything non-numeric formats as zero.
    pub population: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("row has {found} fields, need at least {}", MIN_FIELDS)]
    TooFewFields { found: usize },

    #[error("invalid latitude {0:?}")]
    InvalidLatitude(String),

    #[error("invalid longitude {0:?}")]
    InvalidLongitude(String),

    #[error("row is not valid UTF-8")]
    Undecodable,
}

// `nan` and `inf` parse as f64 but are not coordinates.
fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse().ok().filter(|v: &f64| v.is_finite())
}

/// **Row Parser:** GeoNames row -> [`CityRecord`].
///
/// Codes are taken verbatim; nothing is checked against the reference tables
/// here.
pub fn parse_row(row: &StringRecord) -> Result<CityRecord, SkipReason> {
    if row.len() < MIN_FIELDS {
        return Err(SkipReason::TooFewFields { found: row.len() });
    }

    let name = match &row[COL_ASCII_NAME] {
        "" => &row[COL_NAME],
        ascii => ascii,
    };

    let latitude = parse_coordinate(&row[COL_LATITUDE])
        .ok_or_else(|| SkipReason::InvalidLatitude(row[COL_LATITUDE].to_string()))?;
    let longitude = parse_coordinate(&row[COL_LONGITUDE])
        .ok_or_else(|| SkipReason::InvalidLongitude(row[COL_LONGITUDE].to_string()))?;

    Ok(CityRecord {
        name: name.to_string(),
        latitude,
        longitude,
        country_code: row[COL_COUNTRY_CODE].to_string(),
        region_code: row[COL_ADMIN1_CODE].to_string(),
        population: row[COL_POPULATION].to_string(),
    })
}
