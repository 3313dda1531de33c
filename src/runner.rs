// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::params::Params;
use crate::progress::Progress;
use crate::{scrape, store};

/// Summary of what a run produced.
pub struct RunSummary {
    pub records: usize,
    pub out_file: PathBuf,
}

/// Top-level runner: fetch → collect → report → write.
/// `progress` can be None (no output) or Some(&mut impl Progress).
pub fn run(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let data = scrape::collect_yokai(params, progress.as_deref_mut())?;

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Found {} yokai.", data.yokai.len()));
    }

    let out_file = store::save_medallium(&params.out, &data)?;
    logf!("wrote {} records to {}", data.yokai.len(), out_file.display());

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Data saved in {}", out_file.display()));
        p.finish();
    }

    Ok(RunSummary { records: data.yokai.len(), out_file })
}
