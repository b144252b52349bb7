//! File-backed configuration and artifact helpers.
//!
//! Read operations log failures at `ERROR` before returning them; write
//! operations return errors unlogged and log `INFO` only on success.

use std::fs;
use std::path::Path;

use crate::error::{ArtifactError, Result};

pub mod binary;
pub mod config;
pub mod dirs;
pub mod json;
pub mod size;

pub use binary::{load_bin, save_bin};
pub use config::read_yaml;
pub use dirs::create_directories;
pub use json::{load_json, save_json};
pub use size::{format_size_kb, get_size};

/// Read a UTF-8 text file. Bytes that are not UTF-8 are a `Parse` error.
pub(crate) fn read_utf8(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|err| ArtifactError::io(path, err))?;
    String::from_utf8(bytes).map_err(|err| ArtifactError::parse(path, err.utf8_error()))
}
