// crates/cities-core/src/writer.rs

//! # Output
//!
//! One line per city, in input order:
//!
//! ```text
//! 39.7392, -104.9847, "Denver, Colorado, United States. Pop 716K"
//! ```
//!
//! The consumer parses this positionally, so the format is fixed. Quotes
//! inside the description are written as-is.

use crate::error::Result;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
}

impl OutputRow {
    /// The exact output line, without the trailing newline.
    pub fn to_line(&self) -> String {
        format!(
            "{:.4}, {:.4}, \"{}\"",
            self.latitude, self.longitude, self.description
        )
    }
}

/// Streams rows to a sink as they are produced.
pub struct CityWriter<W: Write> {
    sink: W,
}

impl CityWriter<BufWriter<File>> {
    /// Creates (or truncates) `path`, creating missing parent directories.
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> CityWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn write_row(&mut self, row: &OutputRow) -> Result<()> {
        writeln!(self.sink, "{}", row.to_line())?;
        Ok(())
    }

    /// Flushes and hands back the sink.
    pub fn finish(mut self) -> Result<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}
