// src/specs/mod.rs
//! Page-specific scraping specification.
//!
//! A spec encodes *where the ground truth lives in the HTML* for one page
//! and *how to extract it*: selector signatures, positional cell offsets,
//! the per-table layout quirks, and the normalization lookups. Higher
//! layers decide when to scrape and where the output goes; specs only
//! read pages.
//!
//! Specs are testable offline against fixture HTML; no browser involved.
pub mod medallium;
