//! Structured (JSON) artifacts such as metrics and evaluation reports.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use tracing::{error, info};

use super::read_utf8;
use crate::document::Document;
use crate::error::{ArtifactError, Result};

const INDENT: &[u8] = b"    ";

/// Write `data` as indented JSON, replacing any existing file.
///
/// The parent directory must already exist. Errors are returned unlogged.
pub fn save_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<()> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    data.serialize(&mut ser)
        .map_err(|err| ArtifactError::serialization(path, err))?;
    buf.push(b'\n');
    fs::write(path, buf).map_err(|err| ArtifactError::Io {
        path: path.to_path_buf(),
        source: err,
    })?;
    info!(path = %path.display(), "JSON file saved");
    Ok(())
}

/// Load a JSON object written by [`save_json`] (or any JSON object file).
pub fn load_json(path: &Path) -> Result<Document> {
    match parse_json_file(path) {
        Ok(doc) => {
            info!(path = %path.display(), "JSON file loaded successfully");
            Ok(doc)
        }
        Err(err @ ArtifactError::NotFound { .. }) => {
            error!(path = %path.display(), "file not found");
            Err(err)
        }
        Err(err) => {
            error!(path = %path.display(), err = %err, "error loading JSON file");
            Err(err)
        }
    }
}

fn parse_json_file(path: &Path) -> Result<Document> {
    if !path.exists() {
        return Err(ArtifactError::not_found(path));
    }
    let contents = read_utf8(path)?;
    let value: Value =
        serde_json::from_str(&contents).map_err(|err| ArtifactError::parse(path, err))?;
    Document::try_from(value)
        .map_err(|_| ArtifactError::empty(path, "top-level JSON value is not an object"))
}
