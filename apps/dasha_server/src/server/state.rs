use chrono::{Local, NaiveDate};
use jyotish_config::ServerSettings;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::store::RecordStore;

/// Shared application state for the HTTP server
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    settings: ServerSettings,
    records: RwLock<RecordStore>,
    /// Pinned "today" for reproducible `is_current` flags.
    fixed_today: Option<NaiveDate>,
}

impl AppState {
    pub fn new(settings: ServerSettings, records: RecordStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                settings,
                records: RwLock::new(records),
                fixed_today: None,
            }),
        }
    }

    pub fn with_fixed_today(
        settings: ServerSettings,
        records: RecordStore,
        today: NaiveDate,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                settings,
                records: RwLock::new(records),
                fixed_today: Some(today),
            }),
        }
    }

    pub fn settings(&self) -> &ServerSettings {
        &self.inner.settings
    }

    pub fn records(&self) -> &RwLock<RecordStore> {
        &self.inner.records
    }

    pub fn today(&self) -> NaiveDate {
        self.inner
            .fixed_today
            .unwrap_or_else(|| Local::now().date_naive())
    }
}
