//! cities-cli
//! ==========
//!
//! Command-line front end for [`cities-core`]: downloads the GeoNames
//! `cities15000` dump and the two reference tables, and writes the flat
//! city list.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cities-cli                       # writes data/cities2.txt
//! cities-cli -o out/cities.txt
//! cities-cli --refresh --json      # re-download the dump, JSON summary
//! ```
//!
//! The argument parser lives in this library target so it can be tested
//! without spawning the binary.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
