// crates/cities-core/src/reference.rs

//! # Reference Tables
//!
//! The two lookups the description join needs:
//!
//! - [`CountryTable`]: `"US"` -> `"United States"` (from `countryInfo.txt`)
//! - [`RegionTable`]: `"US.CO"` -> `"Colorado"` (from `admin1CodesASCII.txt`)
//!
//! Both are built once and never mutated afterwards. A missing entry is not an
//! error: callers get the raw code back instead.

use crate::error::Result;
use crate::fetch::Fetcher;
use std::collections::HashMap;

/// ISO country code -> display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryTable {
    names: HashMap<String, String>,
}

/// `"<countryCode>.<regionCode>"` -> display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionTable {
    names: HashMap<String, String>,
}

// -----------------------------------------------------------------------------
// PARSING
// -----------------------------------------------------------------------------

fn tab_reader(text: &str, comment: Option<u8>) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(comment)
        .from_reader(text.as_bytes())
}

impl CountryTable {
    /// Parses `countryInfo.txt`.
    ///
    /// `#` lines and blank lines are skipped. A line needs more than 4 fields
    /// to contribute (code in field 0, name in field 4); shorter lines are
    /// dropped silently.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut names = HashMap::new();
        for row in tab_reader(text, Some(b'#')).records() {
            let row = row?;
            if row.len() > 4 {
                names.insert(row[0].to_string(), row[4].to_string());
            }
        }
        Ok(Self { names })
    }

    pub fn fetch(fetcher: &impl Fetcher, url: &str) -> Result<Self> {
        let text = fetcher.fetch_text(url)?;
        Self::from_text(&text)
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    /// Display name for `code`, or `code` itself when unknown.
    pub fn resolve<'a>(&'a self, code: &'a str) -> &'a str {
        self.get(code).unwrap_or(code)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl RegionTable {
    /// Parses `admin1CodesASCII.txt`.
    ///
    /// Every line with more than 1 field contributes; field 0 is already the
    /// composite `CC.REGION` key. No comment handling.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut names = HashMap::new();
        for row in tab_reader(text, None).records() {
            let row = row?;
            if row.len() > 1 {
                names.insert(row[0].to_string(), row[1].to_string());
            }
        }
        Ok(Self { names })
    }

    pub fn fetch(fetcher: &impl Fetcher, url: &str) -> Result<Self> {
        let text = fetcher.fetch_text(url)?;
        Self::from_text(&text)
    }

    pub fn get(&self, country_code: &str, region_code: &str) -> Option<&str> {
        self.names
            .get(&format!("{country_code}.{region_code}"))
            .map(String::as_str)
    }

    /// Display name for the region, or `region_code` itself when unknown.
    pub fn resolve<'a>(&'a self, country_code: &str, region_code: &'a str) -> &'a str {
        self.get(country_code, region_code).unwrap_or(region_code)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CountryTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RegionTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
