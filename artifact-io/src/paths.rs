//! Canonical project layout and stage-startup loading.

use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_FILE_PATH, LOG_DIR, LOG_FILE_NAME, PARAMS_FILE_PATH, SCHEMA_FILE_PATH,
};
use crate::document::Document;
use crate::error::Result;
use crate::io::read_yaml;

/// All conventional paths for a project root.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub params_path: PathBuf,
    pub schema_path: PathBuf,
    pub log_file: PathBuf,
}

/// The three YAML documents every stage reads at startup.
#[derive(Debug, Clone)]
pub struct ProjectDocuments {
    pub config: Document,
    pub params: Document,
    pub schema: Document,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_path: root.join(CONFIG_FILE_PATH),
            params_path: root.join(PARAMS_FILE_PATH),
            schema_path: root.join(SCHEMA_FILE_PATH),
            log_file: root.join(LOG_DIR).join(LOG_FILE_NAME),
            root,
        }
    }

    /// Resolve `relative` against the project root (absolute paths pass through).
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Read config, params and schema. The first failure is returned.
    pub fn load_documents(&self) -> Result<ProjectDocuments> {
        Ok(ProjectDocuments {
            config: read_yaml(&self.config_path)?,
            params: read_yaml(&self.params_path)?,
            schema: read_yaml(&self.schema_path)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::io::create_directories;
    use crate::test_support::sample_project;
    use serde_json::json;
    use std::fs;

    #[test]
    fn paths_are_stable() {
        let paths = ProjectPaths::new("/srv/project");
        assert_eq!(paths.config_path, Path::new("/srv/project/config/config.yaml"));
        assert_eq!(paths.params_path, Path::new("/srv/project/params.yaml"));
        assert_eq!(paths.schema_path, Path::new("/srv/project/schema.yaml"));
        assert_eq!(paths.log_file, Path::new("/srv/project/logs/running_log.log"));
        assert_eq!(paths.resolve("/abs/x"), Path::new("/abs/x"));
    }

    #[test]
    fn loads_all_stage_documents() {
        let (_temp, paths) = sample_project();
        let docs = paths.load_documents().expect("load");

        assert_eq!(docs.config["artifacts_root"], json!("artifacts"));
        assert_eq!(docs.params.path("ElasticNet.alpha").expect("alpha"), &json!(0.2));
        assert_eq!(
            docs.schema.path("TARGET_COLUMN.name").expect("target"),
            &json!("quality")
        );

        let root_dir = docs.config.path("data_ingestion.root_dir").expect("root_dir");
        let root_dir = paths.resolve(root_dir.as_str().expect("string"));
        create_directories(&[&root_dir], false).expect("mkdir");
        assert!(root_dir.is_dir());
    }

    #[test]
    fn empty_params_fails_whole_load() {
        let (_temp, paths) = sample_project();
        fs::write(&paths.params_path, "").expect("truncate");
        let err = paths.load_documents().expect_err("empty params");
        assert_eq!(err.kind(), ErrorKind::EmptyOrInvalidDocument);
        assert_eq!(err.path(), paths.params_path.as_path());
    }
}
