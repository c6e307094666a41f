// crates/cities-core/src/format.rs

//! # Descriptions
//!
//! Turns a [`CityRecord`] into the label shown downstream:
//!
//! ```text
//! Denver, Colorado, United States. Pop 716K
//! ```

use crate::record::CityRecord;
use crate::reference::{CountryTable, RegionTable};

/// **Population Abbreviation:** `2500000` -> `"2.5M"`, `15000` -> `"15K"`.
///
/// - `>= 1_000_000`: millions, one decimal, a trailing `.0` dropped.
/// - `>= 1_000`: thousands, no decimals.
/// - otherwise the plain integer.
pub fn abbreviate_population(n: i64) -> String {
    if n >= 1_000_000 {
        let millions = format!("{:.1}", n as f64 / 1_000_000.0);
        let millions = millions.strip_suffix(".0").unwrap_or(&millions);
        return format!("{millions}M");
    }
    if n >= 1_000 {
        return format!("{:.0}K", n as f64 / 1_000.0);
    }
    n.to_string()
}

/// Raw population column -> abbreviation. Non-numeric text counts as `0`.
pub fn format_population(raw: &str) -> String {
    match raw.trim().parse::<i64>() {
        Ok(n) => abbreviate_population(n),
        Err(_) => "0".to_string(),
    }
}

/// **Description Join:** `"<city>[, <region>], <country>. Pop <abbr>"`.
///
/// Lookups that miss fall back to the raw code. The region is left out when
/// it is empty or repeats the city or country name; the country is left out
/// only when it is the city itself (city-states such as Singapore).
pub fn describe(record: &CityRecord, countries: &CountryTable, regions: &RegionTable) -> String {
    let country = countries.resolve(&record.country_code);
    let region = regions.resolve(&record.country_code, &record.region_code);

    let mut parts = vec![record.name.as_str()];
    if !region.is_empty() && region != record.name && region != country {
        parts.push(region);
    }
    if country != record.name {
        parts.push(country);
    }

    let description = format!(
        "{}. Pop {}",
        parts.join(", "),
        format_population(&record.population)
    );
    strip_line_breaks(description)
}

// The description ends up as one quoted field on one line.
fn strip_line_breaks(text: String) -> String {
    if text.contains(['\r', '\n']) {
        text.replace(['\r', '\n'], " ")
    } else {
        text
    }
}
