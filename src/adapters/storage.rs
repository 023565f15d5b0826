use crate::domain::ports::{ConfigProvider, SnapshotStore};
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

/// Local key-value store backed by one JSON file per key under a data
/// directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn from_config(config: &impl ConfigProvider) -> Self {
        Self::new(config.data_dir())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl SnapshotStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read(path)?;
        Ok(Some(data))
    }

    fn write(&self, key: &str, data: &[u8]) -> Result<()> {
        let path = self.key_path(key);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, data)?;
        Ok(())
    }
}
