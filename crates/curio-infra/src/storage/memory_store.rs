use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use curio_core::ports::KeyValueStorePort;
use tokio::sync::Mutex;

/// Process-local key-value medium.
///
/// Share one instance (behind an `Arc`) between several catalog stores to
/// simulate tabs of the same origin.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStorePort for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.entries.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}
