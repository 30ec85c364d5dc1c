use crate::TrackStore;
use async_trait::async_trait;
use distortion_core::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Directory-backed store for local development.
///
/// Keys are file names under the configured root. Keys that would escape the
/// root (absolute paths, parent directory references) are rejected.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let path = Path::new(key);
        if path.is_absolute() {
            return Err(Error::Store(format!(
                "Absolute paths not allowed as store keys: '{}'",
                key
            )));
        }
        for component in path.components() {
            if component == Component::ParentDir {
                return Err(Error::Store(format!(
                    "Parent directory references (..) not allowed in store keys: '{}'",
                    key
                )));
            }
        }
        Ok(self.root.join(path))
    }
}

#[async_trait]
impl TrackStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Store(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_existing_key() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("music-data.json"), r#"[{"a":1}]"#).unwrap();

        let store = FileStore::new(dir.path());
        let value = store.get("music-data.json").await.unwrap();
        assert_eq!(value.as_deref(), Some(r#"[{"a":1}]"#));
    }

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.get("missing.json").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rejects_parent_dir_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        let result = store.get("../secret.json").await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Parent directory references")
        );
    }

    #[tokio::test]
    async fn test_rejects_absolute_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        let result = store.get("/etc/passwd").await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Absolute paths not allowed")
        );
    }
}
