use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use curio_core::catalog::{sample_items, Item};
use curio_core::ports::{CatalogRepositoryPort, KeyValueStorePort};
use tracing::{debug, info};

pub const DEFAULT_STORAGE_KEY: &str = "catalog_items";

/// Catalog persisted as a single JSON array under one key of a key-value medium.
pub struct KvCatalogRepository {
    store: Arc<dyn KeyValueStorePort>,
    key: String,
}

impl KvCatalogRepository {
    pub fn new(store: Arc<dyn KeyValueStorePort>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    async fn write(&self, items: &[Item]) -> Result<()> {
        let json = serde_json::to_string(items).context("serialize catalog failed")?;
        self.store
            .set(&self.key, json)
            .await
            .with_context(|| format!("write catalog failed: key={}", self.key))
    }
}

#[async_trait]
impl CatalogRepositoryPort for KvCatalogRepository {
    async fn load_all(&self) -> Result<Vec<Item>> {
        let raw = self
            .store
            .get(&self.key)
            .await
            .with_context(|| format!("read catalog failed: key={}", self.key))?;

        match raw {
            Some(json) => {
                let items: Vec<Item> = serde_json::from_str(&json)
                    .with_context(|| format!("parse catalog failed: key={}", self.key))?;
                debug!(key = %self.key, count = items.len(), "catalog loaded");
                Ok(items)
            }
            None => {
                let seed = sample_items();
                self.write(&seed).await?;
                info!(key = %self.key, count = seed.len(), "empty medium seeded with sample catalog");
                Ok(seed)
            }
        }
    }

    async fn save_all(&self, items: &[Item]) -> Result<()> {
        self.write(items).await?;
        debug!(key = %self.key, count = items.len(), "catalog saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryKeyValueStore;
    use curio_core::ItemStatus;

    fn repo(store: Arc<InMemoryKeyValueStore>) -> KvCatalogRepository {
        KvCatalogRepository::new(store, DEFAULT_STORAGE_KEY)
    }

    #[tokio::test]
    async fn first_load_seeds_and_persists_sample_items() -> Result<()> {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let items = repo(store.clone()).load_all().await?;

        assert_eq!(items, sample_items());
        let raw = store.get(DEFAULT_STORAGE_KEY).await?.expect("seed persisted");
        let persisted: Vec<Item> = serde_json::from_str(&raw)?;
        assert_eq!(persisted, items);
        Ok(())
    }

    #[tokio::test]
    async fn existing_empty_array_is_not_reseeded() -> Result<()> {
        let store = Arc::new(InMemoryKeyValueStore::new());
        store.set(DEFAULT_STORAGE_KEY, "[]".to_string()).await?;

        assert!(repo(store).load_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn save_all_replaces_whole_collection() -> Result<()> {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let repo = repo(store);
        let mut items = repo.load_all().await?;
        items[0].status = ItemStatus::Enabled;
        items.truncate(2);

        repo.save_all(&items).await?;

        assert_eq!(repo.load_all().await?, items);
        Ok(())
    }

    #[tokio::test]
    async fn persisted_layout_uses_camel_case_fields() -> Result<()> {
        let store = Arc::new(InMemoryKeyValueStore::new());
        repo(store.clone()).load_all().await?;

        let raw = store.get(DEFAULT_STORAGE_KEY).await?.unwrap_or_default();
        let value: serde_json::Value = serde_json::from_str(&raw)?;
        let first = &value[0];
        assert_eq!(first["id"], "1");
        assert_eq!(first["status"], "inactive");
        assert!(first["imageUrl"].is_string());
        assert!(first["galleryUrls"].is_array());
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_value_is_reported_with_key() -> Result<()> {
        let store = Arc::new(InMemoryKeyValueStore::new());
        store.set("shop", "{".to_string()).await?;

        let err = KvCatalogRepository::new(store, "shop")
            .load_all()
            .await
            .unwrap_err();
        assert!(err.to_string().contains("key=shop"));
        Ok(())
    }
}
