use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use curio_core::ports::KeyValueStorePort;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

/// Key-value medium persisted as one JSON object file: `{ "<key>": "<value>" }`.
///
/// Writes go through a temporary file and a rename, so the file on disk is
/// always either the previous or the new full content.
pub struct FileKeyValueStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read store failed: {}", self.path.display()))
            }
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("parse store failed: {}", self.path.display()))
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create store dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp store failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp store to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries().await?.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value);
        let content = serde_json::to_string_pretty(&entries).context("serialize store failed")?;

        self.atomic_write(&content).await?;
        debug!(path = %self.path.display(), key, "store entry written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_reads_as_empty() -> Result<()> {
        let dir = TempDir::new()?;
        let store = FileKeyValueStore::new(dir.path().join("absent.json"));

        assert_eq!(store.get("catalog").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn set_creates_parent_dirs_and_keeps_other_keys() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("store.json");
        let store = FileKeyValueStore::new(&path);

        store.set("a", "1".to_string()).await?;
        store.set("b", "2".to_string()).await?;
        store.set("a", "3".to_string()).await?;

        assert_eq!(store.get("a").await?, Some("3".to_string()));
        assert_eq!(store.get("b").await?, Some("2".to_string()));
        assert!(!path.with_extension("json.tmp").exists());

        let reopened = FileKeyValueStore::new(&path);
        assert_eq!(reopened.get("b").await?, Some("2".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json")?;

        let err = FileKeyValueStore::new(&path).get("a").await.unwrap_err();
        assert!(err.to_string().contains("parse store failed"));
        Ok(())
    }
}
