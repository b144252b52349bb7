//! Opaque binary artifacts (fitted models, preprocessors, arrays).
//!
//! Any `serde` type round-trips through CBOR. Reading back requires the same
//! type shape that was written; a mismatch surfaces as `Serialization`.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, info};

use crate::error::{ArtifactError, Result};

/// Encode `data` to `path`, replacing any existing file.
///
/// The parent directory must already exist. Errors are returned unlogged.
/// An existing file is left untouched when encoding fails.
pub fn save_bin<T: Serialize + ?Sized>(data: &T, path: &Path) -> Result<()> {
    let mut buf = Vec::new();
    ciborium::ser::into_writer(data, &mut buf)
        .map_err(|err| ArtifactError::serialization(path, err))?;
    fs::write(path, buf).map_err(|err| ArtifactError::Io {
        path: path.to_path_buf(),
        source: err,
    })?;
    info!(path = %path.display(), "binary file saved");
    Ok(())
}

/// Decode a `T` previously written with [`save_bin`].
pub fn load_bin<T: DeserializeOwned>(path: &Path) -> Result<T> {
    match decode_file(path) {
        Ok(data) => {
            info!(path = %path.display(), "binary file loaded");
            Ok(data)
        }
        Err(err @ ArtifactError::NotFound { .. }) => {
            error!(path = %path.display(), "file not found");
            Err(err)
        }
        Err(err) => {
            error!(path = %path.display(), err = %err, "error loading binary file");
            Err(err)
        }
    }
}

fn decode_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(ArtifactError::not_found(path));
    }
    let file = File::open(path).map_err(|err| ArtifactError::io(path, err))?;
    ciborium::de::from_reader(BufReader::new(file))
        .map_err(|err| ArtifactError::serialization(path, err))
}
