//! Stable exit codes for `artifact-io` commands.

use crate::error::{ArtifactError, ErrorKind};

/// Command succeeded.
pub const OK: i32 = 0;
/// Any failure without a more specific code (I/O, serialization, bad key).
pub const FAILURE: i32 = 1;
/// The file a command needed to read does not exist.
pub const NOT_FOUND: i32 = 2;
/// A YAML/JSON file was empty, null, or not a mapping.
pub const INVALID_DOCUMENT: i32 = 3;
/// A YAML/JSON file could not be parsed.
pub const PARSE_FAILURE: i32 = 4;

/// Exit code for an error chain, looking for an [`ArtifactError`] anywhere in it.
pub fn for_error(err: &anyhow::Error) -> i32 {
    let kind = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<ArtifactError>())
        .map(ArtifactError::kind);
    match kind {
        Some(ErrorKind::NotFound) => NOT_FOUND,
        Some(ErrorKind::EmptyOrInvalidDocument) => INVALID_DOCUMENT,
        Some(ErrorKind::ParseFailure) => PARSE_FAILURE,
        Some(ErrorKind::IoFailure | ErrorKind::SerializationFailure) | None => FAILURE,
    }
}
