// crates/cities-core/src/config.rs

//! # Pipeline Configuration
//!
//! Every URL and path the pipeline touches lives here as a named field, so
//! tests (and the CLI) can point the stages somewhere else.

use std::path::{Path, PathBuf};

pub const CITIES_URL: &str = "https://download.geonames.org/export/dump/cities15000.zip";
pub const COUNTRIES_URL: &str = "https://download.geonames.org/export/dump/countryInfo.txt";
pub const ADMIN1_URL: &str = "https://download.geonames.org/export/dump/admin1CodesASCII.txt";

/// Name of the dataset inside the zip dump. Also the default cache file name.
pub const ARCHIVE_ENTRY: &str = "cities15000.txt";
pub const OUTPUT_PATH: &str = "data/cities2.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Zip archive holding the tab-delimited city dump.
    pub cities_url: String,
    /// `countryInfo.txt` (ISO code in column 0, name in column 4).
    pub countries_url: String,
    /// `admin1CodesASCII.txt` (`CC.REGION` in column 0, name in column 1).
    pub admin1_url: String,
    /// Entry extracted from the archive.
    pub archive_entry: String,
    /// Extracted dataset. When present, the archive is never downloaded.
    pub cache_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            cities_url: CITIES_URL.to_string(),
            countries_url: COUNTRIES_URL.to_string(),
            admin1_url: ADMIN1_URL.to_string(),
            archive_entry: ARCHIVE_ENTRY.to_string(),
            cache_path: PathBuf::from(ARCHIVE_ENTRY),
            output_path: PathBuf::from(OUTPUT_PATH),
        }
    }
}

impl PipelineConfig {
    pub fn with_cities_url(mut self, url: impl Into<String>) -> Self {
        self.cities_url = url.into();
        self
    }

    pub fn with_countries_url(mut self, url: impl Into<String>) -> Self {
        self.countries_url = url.into();
        self
    }

    pub fn with_admin1_url(mut self, url: impl Into<String>) -> Self {
        self.admin1_url = url.into();
        self
    }

    pub fn with_archive_entry(mut self, entry: impl Into<String>) -> Self {
        self.archive_entry = entry.into();
        self
    }

    pub fn with_cache_path(mut self, path: impl AsRef<Path>) -> Self {
        self.cache_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output_path = path.as_ref().to_path_buf();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_geonames_dump() {
        let cfg = PipelineConfig::default();
        assert_eq!(cfg.cities_url, CITIES_URL);
        assert_eq!(cfg.cache_path, PathBuf::from("cities15000.txt"));
        assert_eq!(cfg.output_path, PathBuf::from("data/cities2.txt"));
    }

    #[test]
    fn builders_replace_single_fields() {
        let cfg = PipelineConfig::default()
            .with_output_path("out/list.txt")
            .with_countries_url("http://localhost/countries");
        assert_eq!(cfg.output_path, PathBuf::from("out/list.txt"));
        assert_eq!(cfg.countries_url, "http://localhost/countries");
        assert_eq!(cfg.admin1_url, ADMIN1_URL);
    }
}
