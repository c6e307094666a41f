// crates/cities-core/src/lib.rs

//! cities-core
//! ===========
//!
//! Builds the flat city list consumed by the clock display: one line per
//! GeoNames city with more than 15,000 inhabitants,
//!
//! ```text
//! 39.7392, -104.9847, "Denver, Colorado, United States. Pop 716K"
//! ```
//!
//! Inputs are the `cities15000` dump plus the `countryInfo` and `admin1Codes`
//! reference tables. See [`pipeline::run`] for the whole flow and the
//! individual modules for each stage.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod error;
pub mod fetch;
pub mod format;
pub mod pipeline;
pub mod record;
pub mod reference;
pub mod source;
pub mod writer;

// Re-exports
pub use crate::config::PipelineConfig;
pub use crate::error::{CitiesError, Result};
#[cfg(feature = "fetch")]
pub use crate::fetch::HttpFetcher;
pub use crate::fetch::Fetcher;
pub use crate::format::{abbreviate_population, describe, format_population};
pub use crate::pipeline::{process_rows, run, RowCounts, RunSummary};
pub use crate::record::{parse_row, CityRecord, SkipReason};
pub use crate::reference::{CountryTable, RegionTable};
pub use crate::writer::{CityWriter, OutputRow};
