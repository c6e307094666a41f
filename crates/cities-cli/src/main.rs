//! cities-cli — Build the flat city list from GeoNames
//!
//! Runs the pipeline once:
//!
//! 1. Uses the cached `cities15000.txt`, or downloads and extracts the zip.
//! 2. Fetches `countryInfo.txt` and `admin1CodesASCII.txt`.
//! 3. Writes one `lat, lon, "description"` line per city.
//!
//! Usage examples
//! --------------
//!
//! - Default run
//!   $ cities-cli
//!
//! - Different output, quiet, JSON summary
//!   $ cities-cli -q --json -o /tmp/cities.txt
//!
//! - Force a fresh download of the dump
//!   $ cities-cli --refresh
//!
//! Logging follows `RUST_LOG` (default `info`); `RUST_LOG=debug` lists every
//! skipped row.
use cities_cli::args::CliArgs;
use cities_core::{source, HttpFetcher};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let default_filter = if args.quiet { "warn" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(false),
        )
        .init();

    let config = args.to_config();
    if args.refresh {
        source::clear_cache(&config)?;
    }

    let fetcher = HttpFetcher::new()?;
    let summary = cities_core::run(&config, &fetcher)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Run summary:");
        println!("  Countries: {}", summary.countries);
        println!("  Regions: {}", summary.regions);
        println!("  Cities written: {}", summary.written);
        println!("  Rows skipped: {}", summary.skipped);
        println!("  Downloaded dump: {}", summary.downloaded);
    }

    Ok(())
}
