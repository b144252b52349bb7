//! Human-readable file sizes for stage logs.

use std::fs;
use std::path::Path;

use tracing::error;

use crate::error::{ArtifactError, Result};

/// Approximate size of the file at `path`, e.g. `"~ 2 KB"`.
pub fn get_size(path: &Path) -> Result<String> {
    match fs::metadata(path) {
        Ok(meta) => Ok(format_size_kb(meta.len())),
        Err(err) => {
            let err = ArtifactError::io(path, err);
            match &err {
                ArtifactError::NotFound { .. } => {
                    error!(path = %path.display(), "file not found");
                }
                _ => error!(path = %path.display(), err = %err, "error getting file size"),
            }
            Err(err)
        }
    }
}

/// Kilobytes rounded to the nearest integer, ties to even (1536 B is `~ 2 KB`,
/// 2560 B is also `~ 2 KB`).
pub fn format_size_kb(bytes: u64) -> String {
    let kb = (bytes as f64 / 1024.0).round_ties_even();
    format!("~ {kb:.0} KB")
}
