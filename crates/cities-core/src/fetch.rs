// crates/cities-core/src/fetch.rs

//! # Remote Resources
//!
//! The pipeline only needs "give me the body at this URL". [`Fetcher`] is that
//! seam; [`HttpFetcher`] is the real one, tests bring their own.

use crate::error::Result;

pub trait Fetcher {
    /// Fetches the resource as raw bytes (used for the zip archive).
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;

    /// Fetches the resource as UTF-8 text (used for the reference tables).
    fn fetch_text(&self, url: &str) -> Result<String> {
        let bytes = self.fetch_bytes(url)?;
        decode_text(url, bytes)
    }
}

/// Strict UTF-8 decoding. Reference tables with broken bytes are rejected,
/// never patched with replacement characters.
pub fn decode_text(url: &str, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|e| crate::CitiesError::InvalidData(format!("{url} is not valid UTF-8: {e}")))
}

// -----------------------------------------------------------------------------
// HTTP (Blocking)
// -----------------------------------------------------------------------------

/// Blocking HTTP client. No timeouts, no retries: a failure is fatal.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "fetch")]
impl HttpFetcher {
    pub fn new() -> Result<Self> {
        // The blocking client defaults to a 30s timeout; the dump can take longer.
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<std::time::Duration>)
            .build()?;
        Ok(Self { client })
    }
}

#[cfg(feature = "fetch")]
impl Fetcher for HttpFetcher {
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("GET {url}");
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }

    fn fetch_text(&self, url: &str) -> Result<String> {
        tracing::info!("Fetching {url}...");
        let response = self.client.get(url).send()?.error_for_status()?;
        decode_text(url, response.bytes()?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CitiesError;

    #[test]
    fn valid_utf8_is_decoded() {
        let text = decode_text("http://x/a.txt", "US\tUnited States".into()).unwrap();
        assert_eq!(text, "US\tUnited States");
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let err = decode_text("http://x/a.txt", vec![b'U', 0xFF, b'S']).unwrap_err();
        assert!(matches!(err, CitiesError::InvalidData(msg) if msg.contains("http://x/a.txt")));
    }
}
