// src/scrape.rs
use std::error::Error;

use scraper::Html;

use crate::core::browser;
use crate::data::Medallium;
use crate::params::Params;
use crate::progress::Progress;
use crate::specs::medallium::{self, RowOutcome};

/// Fetch the page and collect every table row into records.
pub fn collect_yokai<'p>(
    params: &Params,
    mut progress: Option<&mut (dyn Progress + 'p)>,
) -> Result<Medallium, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Scraping Yo-kai Watch 1 data...");
    }
    let html = browser::fetch_rendered(&params.url)?;
    Ok(collect_from_html(&html, progress))
}

/// Pure collection pass over already-fetched HTML.
/// Row failures are reported and skipped; they never abort the run, and
/// no partial record is ever pushed.
pub fn collect_from_html<'p>(html: &str, mut progress: Option<&mut (dyn Progress + 'p)>) -> Medallium {
    let doc = Html::parse_document(html);
    let mut out = Medallium::default();

    for (idx, row) in medallium::walk_tables(&doc) {
        match medallium::normalize_row(idx, row) {
            RowOutcome::Record(y) => out.yokai.push(y),
            // Section dividers between medallium ranges; not worth a line.
            RowOutcome::Skip(reason) if reason.is_divider() => {}
            RowOutcome::Skip(reason) => {
                loge!("table {idx}: {reason}");
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Skipping a row in table {idx}: {reason}"));
                }
            }
        }
    }

    out
}
