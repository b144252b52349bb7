//! YAML configuration reader (`config/config.yaml`, `params.yaml`, `schema.yaml`).

use std::path::Path;

use tracing::{error, info};

use super::read_utf8;
use crate::document::{Document, yaml_to_json};
use crate::error::{ArtifactError, Result};

/// Read a YAML file into a non-empty [`Document`].
///
/// Fails with `NotFound` if the path is absent, `Parse` on malformed YAML, and
/// `EmptyDocument` if the file holds no mapping or an empty one. Failures are
/// logged before they are returned.
pub fn read_yaml(path: &Path) -> Result<Document> {
    match parse_yaml_file(path) {
        Ok(doc) => {
            info!(path = %path.display(), keys = doc.len(), "YAML file loaded successfully");
            Ok(doc)
        }
        Err(err) => {
            error!(path = %path.display(), err = %err, "error reading YAML file");
            Err(err)
        }
    }
}

fn parse_yaml_file(path: &Path) -> Result<Document> {
    if !path.exists() {
        return Err(ArtifactError::not_found(path));
    }
    let contents = read_utf8(path)?;
    if !has_document(&contents) {
        return Err(ArtifactError::empty(path, "YAML file is empty"));
    }
    let raw: serde_yaml::Value =
        serde_yaml::from_str(&contents).map_err(|err| ArtifactError::parse(path, err))?;
    let value = yaml_to_json(raw).map_err(|err| ArtifactError::parse(path, err))?;
    match Document::try_from(value) {
        Ok(doc) if doc.is_empty() => Err(ArtifactError::empty(path, "YAML mapping is empty")),
        Ok(doc) => Ok(doc),
        Err(serde_json::Value::Null) => Err(ArtifactError::empty(path, "YAML file is null")),
        Err(_) => Err(ArtifactError::empty(
            path,
            "top-level YAML value is not a mapping",
        )),
    }
}

/// True if anything besides blank lines, comments and document markers remains.
fn has_document(contents: &str) -> bool {
    contents.lines().map(str::trim).any(|line| {
        !line.is_empty() && !line.starts_with('#') && line != "---" && line != "..."
    })
}
