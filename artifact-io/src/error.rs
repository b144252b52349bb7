//! Error types for configuration and artifact I/O.
//!
//! Every failure names the path it happened on. Read operations log the error
//! before returning it; see the individual `io` modules for which side logs.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors returned by the `io` operations.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The file to read does not exist.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The structured file parsed, but to nothing usable (null, empty, or not a mapping).
    #[error("empty or invalid document in {}: {reason}", path.display())]
    EmptyDocument { path: PathBuf, reason: String },

    /// The structured file is not valid YAML/JSON.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    /// OS-level failure while reading or writing.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Encoding or decoding an artifact failed.
    #[error("failed to (de)serialize {}: {source}", path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}

/// Coarse classification of [`ArtifactError`], stable for callers and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    EmptyOrInvalidDocument,
    ParseFailure,
    IoFailure,
    SerializationFailure,
}

impl ArtifactError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::EmptyDocument { .. } => ErrorKind::EmptyOrInvalidDocument,
            Self::Parse { .. } => ErrorKind::ParseFailure,
            Self::Io { .. } => ErrorKind::IoFailure,
            Self::Serialization { .. } => ErrorKind::SerializationFailure,
        }
    }

    /// Path of the file the operation failed on.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::EmptyDocument { path, .. }
            | Self::Parse { path, .. }
            | Self::Io { path, .. }
            | Self::Serialization { path, .. } => path,
        }
    }

    pub(crate) fn not_found(path: &Path) -> Self {
        Self::NotFound {
            path: path.to_path_buf(),
        }
    }

    pub(crate) fn empty(path: &Path, reason: impl Into<String>) -> Self {
        Self::EmptyDocument {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(path: &Path, source: impl Into<FormatError>) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    pub(crate) fn serialization(path: &Path, source: impl Into<FormatError>) -> Self {
        Self::Serialization {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    /// Wrap an I/O error, promoting `io::ErrorKind::NotFound` to [`ArtifactError::NotFound`].
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            return Self::not_found(path);
        }
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Underlying format-library error.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("cbor encode: {0}")]
    CborEncode(#[from] ciborium::ser::Error<io::Error>),

    #[error("cbor decode: {0}")]
    CborDecode(#[from] ciborium::de::Error<io::Error>),

    /// YAML content with no JSON-shaped equivalent (e.g. `.nan`, sequence keys).
    #[error("unrepresentable value: {0}")]
    Unrepresentable(String),
}

/// Errors from key/field access on a [`crate::Document`].
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no key `{key}` in document")]
    MissingKey { key: String },

    #[error("value at `{key}` is not a mapping")]
    NotAMapping { key: String },

    #[error("document does not match the requested type: {0}")]
    Extract(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArtifactError>;
