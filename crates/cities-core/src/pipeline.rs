// crates/cities-core/src/pipeline.rs

//! # Pipeline
//!
//! fetch -> parse -> join -> format -> write, once, in that order.
//!
//! Rows are streamed: each city is formatted and written before the next one
//! is read, so memory stays flat no matter how large the dump is.

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::format::describe;
use crate::record::{parse_row, SkipReason};
use crate::reference::{CountryTable, RegionTable};
use crate::source::ensure_dataset;
use crate::writer::{CityWriter, OutputRow};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read, Write};

/// What a run did. Counts reflect this invocation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RunSummary {
    pub countries: usize,
    pub regions: usize,
    pub written: usize,
    pub skipped: usize,
    /// `false` when the cached dataset was reused.
    pub downloaded: bool,
}

/// Row counts from [`process_rows`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowCounts {
    pub written: usize,
    pub skipped: usize,
}

/// Runs the whole thing against `config`.
///
/// Any fetch or I/O failure is returned as-is; the output file is only
/// created once all three inputs are in hand.
pub fn run(config: &PipelineConfig, fetcher: &impl Fetcher) -> Result<RunSummary> {
    let downloaded = ensure_dataset(config, fetcher)?;

    let countries = CountryTable::fetch(fetcher, &config.countries_url)?;
    let regions = RegionTable::fetch(fetcher, &config.admin1_url)?;
    tracing::debug!(
        countries = countries.len(),
        regions = regions.len(),
        "reference tables loaded"
    );

    tracing::info!("Processing {}...", config.cache_path.display());
    let input = BufReader::new(File::open(&config.cache_path)?);

    tracing::info!("Writing cities to {}...", config.output_path.display());
    let mut writer = CityWriter::create(&config.output_path)?;
    let counts = process_rows(input, &countries, &regions, &mut writer)?;
    writer.finish()?;

    tracing::info!(
        "Wrote {} cities to {} ({} rows skipped)",
        counts.written,
        config.output_path.display(),
        counts.skipped
    );

    Ok(RunSummary {
        countries: countries.len(),
        regions: regions.len(),
        written: counts.written,
        skipped: counts.skipped,
        downloaded,
    })
}

/// Streams a GeoNames dump from `input` into `writer`.
///
/// Bad rows are skipped and logged at debug level; only read or write
/// failures end the loop early.
pub fn process_rows<R: Read, W: Write>(
    input: R,
    countries: &CountryTable,
    regions: &RegionTable,
    writer: &mut CityWriter<W>,
) -> Result<RowCounts> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(input);

    let mut counts = RowCounts::default();
    for (index, row) in reader.records().enumerate() {
        let parsed = match row {
            Ok(row) => parse_row(&row),
            Err(e) if matches!(e.kind(), csv::ErrorKind::Utf8 { .. }) => {
                Err(SkipReason::Undecodable)
            }
            Err(e) => return Err(e.into()),
        };

        match parsed {
            Ok(record) => {
                let row = OutputRow {
                    latitude: record.latitude,
                    longitude: record.longitude,
                    description: describe(&record, countries, regions),
                };
                writer.write_row(&row)?;
                counts.written += 1;
            }
            Err(reason) => {
                tracing::debug!(row = index + 1, %reason, "skipping row");
                counts.skipped += 1;
            }
        }
    }
    Ok(counts)
}
