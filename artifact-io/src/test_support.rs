//! Test-only helpers: log capture and on-disk fixtures.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;

use crate::logging;
use crate::paths::ProjectPaths;

pub const SAMPLE_CONFIG: &str = "\
artifacts_root: artifacts

data_ingestion:
  root_dir: artifacts/data_ingestion
  source_url: https://example.com/winequality.zip
  local_data_file: artifacts/data_ingestion/data.zip

model_trainer:
  root_dir: artifacts/model_trainer
  model_name: model.bin
";

pub const SAMPLE_PARAMS: &str = "\
ElasticNet:
  alpha: 0.2
  l1_ratio: 0.1
";

pub const SAMPLE_SCHEMA: &str = "\
COLUMNS:
  fixed acidity: float64
  pH: float64
  quality: int64

TARGET_COLUMN:
  name: quality
";

/// In-memory sink shared between a subscriber and the test reading it.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a scoped subscriber and return its result plus everything logged.
///
/// Uses the same line format as [`logging::init`], with no level filter.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::registry().with(logging::layer(buffer.clone()));
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}

/// Write `contents` to `dir/name`, creating parents, and return the path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture dir");
    }
    fs::write(&path, contents).expect("write fixture");
    path
}

/// Temporary project root with `config/config.yaml`, `params.yaml` and `schema.yaml`.
pub fn sample_project() -> (TempDir, ProjectPaths) {
    let temp = tempfile::tempdir().expect("tempdir");
    let paths = ProjectPaths::new(temp.path());
    write_fixture(temp.path(), "config/config.yaml", SAMPLE_CONFIG);
    write_fixture(temp.path(), "params.yaml", SAMPLE_PARAMS);
    write_fixture(temp.path(), "schema.yaml", SAMPLE_SCHEMA);
    (temp, paths)
}
