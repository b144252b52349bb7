//! Directory scaffolding for pipeline stages.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{ArtifactError, Result};

/// Create every directory in `paths`, including missing parents.
///
/// Existing directories are left untouched. Errors are returned unlogged: a
/// stage that cannot create its output directories cannot continue.
pub fn create_directories<P: AsRef<Path>>(paths: &[P], verbose: bool) -> Result<()> {
    for path in paths {
        let path = path.as_ref();
        fs::create_dir_all(path).map_err(|err| ArtifactError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
        if verbose {
            info!(path = %path.display(), "created directory");
        }
    }
    Ok(())
}
