use crate::config::{get_index_base_path, AppConfig, IntegrityCheck};
use crate::constants::{INDEX_FILE_NAME, METADATA_FILE_NAME};
use crate::error::{Result, SemsearchError};
use crate::index::{FlatIndex, VectorIndex};
use crate::storage::{check_integrity, IndexMetadata, IndexStore};
use log::debug;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Index store backed by a directory tree:
///
/// ```text
/// <base_path>/<index_name>/index.json
/// <base_path>/<index_name>/metadata.json
/// ```
#[derive(Debug, Clone)]
pub struct FileIndexStorage {
    base_path: PathBuf,
    integrity_check: IntegrityCheck,
}

impl FileIndexStorage {
    /// Store rooted at `base_path`.
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
            integrity_check: IntegrityCheck::default(),
        }
    }

    /// Store rooted at the configured index directory, using the configured integrity policy.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let base_path = get_index_base_path(config)
            .map_err(|e| SemsearchError::ConfigurationError(e.to_string()))?;
        Ok(Self::new(base_path).with_integrity_check(config.integrity_check))
    }

    /// Set the load-time integrity policy.
    pub fn with_integrity_check(mut self, integrity_check: IntegrityCheck) -> Self {
        self.integrity_check = integrity_check;
        self
    }

    /// Root directory of the store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Directory of the named index. Names must be a single path component.
    pub fn index_dir(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(SemsearchError::InvalidParameter(format!(
                "invalid index name '{name}'"
            )));
        }
        Ok(self.base_path.join(name))
    }

    /// Names of the indexes in the store, sorted. A missing base directory holds none.
    pub fn list_indexes(&self) -> Result<Vec<String>> {
        if !self.base_path.is_dir() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let path = entry?.path();
            if path.join(INDEX_FILE_NAME).is_file() && path.join(METADATA_FILE_NAME).is_file() {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
        let content = fs::read_to_string(path).map_err(|source| SemsearchError::FileReadError {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|e| {
            SemsearchError::DeserializationError(format!("{}: {}", path.display(), e))
        })
    }
}

impl IndexStore for FileIndexStorage {
    fn load_index(&self, name: &str) -> Result<(Box<dyn VectorIndex>, IndexMetadata)> {
        let dir = self.index_dir(name)?;
        if !dir.is_dir() {
            return Err(SemsearchError::IndexNotFound(name.to_string()));
        }
        debug!("Loading index '{}' from {}", name, dir.display());

        let index: FlatIndex = Self::read_json(&dir.join(INDEX_FILE_NAME))?;
        index.validate()?;
        let metadata: IndexMetadata = Self::read_json(&dir.join(METADATA_FILE_NAME))?;

        check_integrity(name, index.len(), &metadata, self.integrity_check)?;

        Ok((Box::new(index), metadata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::write_index;
    use tempfile::tempdir;

    #[test]
    fn test_load_written_index() {
        let dir = tempdir().unwrap();
        write_index(dir.path(), "docs", &[vec![1.0, 0.0], vec![0.0, 1.0]], &["a.md", "b.md"], None);

        let storage = FileIndexStorage::new(dir.path());
        let (index, metadata) = storage.load_index("docs").unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.dimension(), 2);
        assert_eq!(metadata.files[1].file_path, "b.md");
    }

    #[test]
    fn test_missing_index_is_not_found() {
        let dir = tempdir().unwrap();
        let storage = FileIndexStorage::new(dir.path());
        let result = storage.load_index("nope");
        assert!(matches!(result, Err(SemsearchError::IndexNotFound(ref n)) if n == "nope"));
    }

    #[test]
    fn test_missing_metadata_file_is_read_error() {
        let dir = tempdir().unwrap();
        let index_dir = dir.path().join("half");
        fs::create_dir_all(&index_dir).unwrap();
        fs::write(index_dir.join(INDEX_FILE_NAME), r#"{"dimension":1,"vectors":[[1.0]]}"#).unwrap();

        let result = FileIndexStorage::new(dir.path()).load_index("half");
        assert!(matches!(result, Err(SemsearchError::FileReadError { .. })));
    }

    #[test]
    fn test_corrupt_index_is_deserialization_error() {
        let dir = tempdir().unwrap();
        let index_dir = dir.path().join("bad");
        fs::create_dir_all(&index_dir).unwrap();
        fs::write(index_dir.join(INDEX_FILE_NAME), "{ not json").unwrap();
        fs::write(index_dir.join(METADATA_FILE_NAME), "{}").unwrap();

        let result = FileIndexStorage::new(dir.path()).load_index("bad");
        assert!(matches!(result, Err(SemsearchError::DeserializationError(ref m)) if m.contains(INDEX_FILE_NAME)));
    }

    #[test]
    fn test_ragged_vectors_are_rejected() {
        let dir = tempdir().unwrap();
        let index_dir = dir.path().join("ragged");
        fs::create_dir_all(&index_dir).unwrap();
        fs::write(index_dir.join(INDEX_FILE_NAME), r#"{"dimension":2,"vectors":[[1.0,2.0],[3.0]]}"#).unwrap();
        fs::write(index_dir.join(METADATA_FILE_NAME), "{}").unwrap();

        let result = FileIndexStorage::new(dir.path()).load_index("ragged");
        assert!(matches!(result, Err(SemsearchError::DimensionMismatch { expected: 2, found: 1 })));
    }

    #[test]
    fn test_strict_integrity_rejects_mismatch() {
        let dir = tempdir().unwrap();
        write_index(dir.path(), "skewed", &[vec![1.0], vec![2.0]], &["only.txt"], None);

        let lenient = FileIndexStorage::new(dir.path());
        assert!(lenient.load_index("skewed").is_ok());

        let strict = FileIndexStorage::new(dir.path()).with_integrity_check(IntegrityCheck::Strict);
        assert!(matches!(strict.load_index("skewed"), Err(SemsearchError::IndexIntegrity(_))));
    }

    #[test]
    fn test_index_name_validation() {
        let storage = FileIndexStorage::new("/tmp");
        for bad in ["", ".", "..", "a/b", "..\\x"] {
            assert!(matches!(storage.index_dir(bad), Err(SemsearchError::InvalidParameter(_))), "{bad}");
        }
        assert_eq!(storage.index_dir("code").unwrap(), PathBuf::from("/tmp/code"));
    }

    #[test]
    fn test_list_indexes() {
        let dir = tempdir().unwrap();
        write_index(dir.path(), "zeta", &[vec![1.0]], &["z.txt"], None);
        write_index(dir.path(), "alpha", &[vec![1.0]], &["a.txt"], None);
        fs::create_dir_all(dir.path().join("empty-dir")).unwrap();

        let storage = FileIndexStorage::new(dir.path());
        assert_eq!(storage.list_indexes().unwrap(), vec!["alpha", "zeta"]);

        let missing = FileIndexStorage::new(dir.path().join("missing"));
        assert!(missing.list_indexes().unwrap().is_empty());
    }

    #[test]
    fn test_from_config_uses_configured_path() {
        let config = AppConfig {
            index_base_path: Some("/srv/semsearch".to_string()),
            integrity_check: IntegrityCheck::Strict,
            ..AppConfig::default()
        };
        let storage = FileIndexStorage::from_config(&config).unwrap();
        assert_eq!(storage.base_path(), Path::new("/srv/semsearch"));
    }
}
