pub mod catalog;
pub mod event;
pub mod storage;
pub mod time;

pub use catalog::KvCatalogRepository;
pub use event::BroadcastCatalogNotifier;
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
pub use time::{FixedClock, SystemClock, TokioLatency};
