mod kv_repository;

pub use kv_repository::{KvCatalogRepository, DEFAULT_STORAGE_KEY};
