// crates/cities-core/src/source.rs

//! # City Dataset Source
//!
//! The dump ships as a zip archive. The extracted text file doubles as the
//! cache: if it exists it is used as-is, however old.

use crate::config::PipelineConfig;
use crate::error::{CitiesError, Result};
use crate::fetch::Fetcher;
use std::fs::{self, File};
use std::io::{self, BufWriter, Cursor, Read, Write};
use std::path::Path;

/// Makes sure `config.cache_path` holds the extracted dataset.
///
/// Returns `true` when the archive had to be downloaded.
pub fn ensure_dataset(config: &PipelineConfig, fetcher: &impl Fetcher) -> Result<bool> {
    if config.cache_path.exists() {
        tracing::info!("Using cached {}", config.cache_path.display());
        return Ok(false);
    }

    tracing::info!("Downloading {}...", config.cities_url);
    let archive = fetcher.fetch_bytes(&config.cities_url)?;
    extract_entry(&archive, &config.archive_entry, &config.cache_path)?;
    Ok(true)
}

/// Removes a cached dataset so the next [`ensure_dataset`] downloads again.
pub fn clear_cache(config: &PipelineConfig) -> Result<()> {
    match fs::remove_file(&config.cache_path) {
        Ok(()) => {
            tracing::info!("Removed cached {}", config.cache_path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Copies `entry` out of an in-memory zip archive into `dest`.
pub fn extract_entry(archive: &[u8], entry: &str, dest: &Path) -> Result<()> {
    let mut zip = zip::ZipArchive::new(Cursor::new(archive))?;
    let mut file = match zip.by_name(entry) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(CitiesError::NotFound(format!(
                "archive has no entry named {entry}"
            )))
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    // The cache path only ever holds a complete extract.
    let partial = dest.with_extension("part");
    if let Err(e) = write_file(&mut file, &partial) {
        let _ = fs::remove_file(&partial);
        return Err(e);
    }
    fs::rename(&partial, dest)?;
    Ok(())
}

fn write_file(reader: &mut impl Read, path: &Path) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    io::copy(reader, &mut out)?;
    out.flush()?;
    Ok(())
}
