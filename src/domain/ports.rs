use crate::utils::error::Result;

/// Durable key-value boundary for the persisted cart snapshot. Implementors
/// are best-effort stores; callers decide whether a failure matters.
pub trait SnapshotStore: Send + Sync {
    /// Read the raw value under `key`, `None` when the key is absent.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write the raw value under `key`, replacing any previous value.
    fn write(&self, key: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &str;
    fn snapshot_key(&self) -> &str;
}
