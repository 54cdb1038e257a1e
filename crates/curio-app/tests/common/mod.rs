#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use curio_app::usecases::CatalogStore;
use curio_app::{App, AppDeps};
use curio_core::ports::{
    CatalogChangeNotifierPort, KeyValueStorePort, LatencyProfile, StorefrontViewPort,
};
use curio_core::{Item, SalesStatus, SalesWindow};
use curio_infra::{
    BroadcastCatalogNotifier, FixedClock, InMemoryKeyValueStore, KvCatalogRepository,
    TokioLatency,
};

/// June 2024: the 3rd is a Monday.
pub fn local(day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, day)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

/// One "tab": its own store over a shared medium and notifier.
pub fn store_on(
    medium: Arc<dyn KeyValueStorePort>,
    notifier: Arc<dyn CatalogChangeNotifierPort>,
    latency: LatencyProfile,
) -> Arc<CatalogStore> {
    Arc::new(CatalogStore::from_ports(
        Arc::new(KvCatalogRepository::new(medium, "catalog_items")),
        notifier,
        Arc::new(TokioLatency::new(latency)),
    ))
}

pub fn fresh_store() -> Arc<CatalogStore> {
    store_on(
        Arc::new(InMemoryKeyValueStore::new()),
        Arc::new(BroadcastCatalogNotifier::new()),
        LatencyProfile::none(),
    )
}

pub fn app_at(now: NaiveDateTime) -> (App, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(now));
    let app = App::new(AppDeps {
        catalog_repo: Arc::new(KvCatalogRepository::new(
            Arc::new(InMemoryKeyValueStore::new()),
            "catalog_items",
        )),
        change_notifier: Arc::new(BroadcastCatalogNotifier::new()),
        latency: Arc::new(TokioLatency::new(LatencyProfile::none())),
        clock: clock.clone(),
        sales_window: SalesWindow::default(),
    });
    (app, clock)
}

#[derive(Default)]
pub struct RecordingView {
    pub ticks: Mutex<Vec<SalesStatus>>,
    pub catalogs: Mutex<Vec<Vec<Item>>>,
}

impl RecordingView {
    pub fn tick_count(&self) -> usize {
        self.ticks.lock().unwrap().len()
    }

    pub fn catalog_count(&self) -> usize {
        self.catalogs.lock().unwrap().len()
    }

    pub fn last_catalog(&self) -> Option<Vec<Item>> {
        self.catalogs.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl StorefrontViewPort for RecordingView {
    async fn on_availability_tick(&self, status: &SalesStatus) -> Result<()> {
        self.ticks.lock().unwrap().push(status.clone());
        Ok(())
    }

    async fn on_catalog_changed(&self, items: &[Item]) -> Result<()> {
        self.catalogs.lock().unwrap().push(items.to_vec());
        Ok(())
    }
}
