// src/store.rs
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::data::Medallium;

/// Serialize the collection and write it to `path`, truncating prior
/// content. Parent directories are created as needed. Output is indented
/// UTF-8; non-ASCII characters are written as-is, not escaped.
pub fn save_medallium(path: &Path, data: &Medallium) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let text = serde_json::to_string_pretty(data)?;
    fs::write(path, text)?;
    Ok(path.to_path_buf())
}
