use cities_core::config::{self, PipelineConfig};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for cities-cli
#[derive(Debug, Parser)]
#[command(
    name = "cities-cli",
    version,
    about = "Build the flat city list (lat, lon, description) from the GeoNames dumps"
)]
pub struct CliArgs {
    /// Output file (parent directories are created)
    #[arg(short = 'o', long = "output", env = "CITIES_OUTPUT", default_value = config::OUTPUT_PATH)]
    pub output: PathBuf,

    /// Extracted dataset; reused as-is when it already exists
    #[arg(short = 'c', long = "cache", env = "CITIES_CACHE", default_value = config::ARCHIVE_ENTRY)]
    pub cache: PathBuf,

    /// Zip archive with the city dump
    #[arg(long = "cities-url", env = "CITIES_URL", default_value = config::CITIES_URL)]
    pub cities_url: String,

    /// Entry to extract from the archive
    #[arg(long = "entry", env = "CITIES_ENTRY", default_value = config::ARCHIVE_ENTRY)]
    pub entry: String,

    /// Country reference table (countryInfo.txt)
    #[arg(long = "countries-url", env = "CITIES_COUNTRIES_URL", default_value = config::COUNTRIES_URL)]
    pub countries_url: String,

    /// Admin1 reference table (admin1CodesASCII.txt)
    #[arg(long = "admin1-url", env = "CITIES_ADMIN1_URL", default_value = config::ADMIN1_URL)]
    pub admin1_url: String,

    /// Delete the cached dataset first and download it again
    #[arg(long = "refresh")]
    pub refresh: bool,

    /// Print the run summary as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl CliArgs {
    pub fn to_config(&self) -> PipelineConfig {
        PipelineConfig::default()
            .with_cities_url(&self.cities_url)
            .with_countries_url(&self.countries_url)
            .with_admin1_url(&self.admin1_url)
            .with_archive_entry(&self.entry)
            .with_cache_path(&self.cache)
            .with_output_path(&self.output)
    }
}
