use anyhow::Result;
use async_trait::async_trait;

/// Persistent key-value medium standing in for a backend.
///
/// Values are opaque strings. Several stores in the same process may share
/// one medium; the port itself gives no isolation between them.
#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Value stored under `key`, or `None` if the key was never written.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`.
    async fn set(&self, key: &str, value: String) -> Result<()>;
}
