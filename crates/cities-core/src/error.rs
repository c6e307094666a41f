// crates/cities-core/src/error.rs
use thiserror::Error;

/// Fatal failures. Any of these aborts the run.
///
/// Row-level problems are not errors; see [`crate::record::SkipReason`].
#[derive(Debug, Error)]
pub enum CitiesError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("delimited text error: {0}")]
    Csv(#[from] csv::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, CitiesError>;
