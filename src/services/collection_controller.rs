// src/services/collection_controller.rs
//
// Owns the current working collection.
//
// - Queries return fresh copies and never fail
// - Persistence is delegated to a CollectionStore
// - Fetching is delegated to a RecordSource

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::info;

use crate::domain::{Record, RecordType};
use crate::error::AppResult;
use crate::integrations::RecordSource;
use crate::repositories::CollectionStore;

pub struct CollectionController {
    source: Arc<dyn RecordSource>,
    store: Arc<dyn CollectionStore>,
    current: Mutex<Vec<Record>>,
}

impl CollectionController {
    pub fn new(source: Arc<dyn RecordSource>, store: Arc<dyn CollectionStore>) -> Self {
        Self {
            source,
            store,
            current: Mutex::new(Vec::new()),
        }
    }

    /// Fetch ids `1..=count` and make them the current collection.
    /// If every fetch fails the current collection ends up empty.
    pub async fn fetch_initial(&self, count: i64) {
        let records = self.source.fetch_range(count).await;
        info!("Initial fetch produced {} records", records.len());
        self.set_current(records);
    }

    pub fn set_current(&self, records: Vec<Record>) {
        *self.lock_current() = records;
    }

    pub fn current(&self) -> Vec<Record> {
        self.lock_current().clone()
    }

    pub fn len(&self) -> usize {
        self.lock_current().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_current().is_empty()
    }

    /// Case-insensitive substring match on the name.
    /// `None` or an empty term returns everything.
    pub fn search(&self, term: Option<&str>) -> Vec<Record> {
        let needle = match term {
            Some(t) if !t.is_empty() => t.to_lowercase(),
            _ => return self.current(),
        };

        self.lock_current()
            .iter()
            .filter(|r| r.name().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Stable, case-sensitive ordering by name. The stored order is untouched.
    pub fn sort_by_name(&self) -> Vec<Record> {
        let mut sorted = self.current();
        sorted.sort_by(|a, b| a.name().cmp(b.name()));
        sorted
    }

    /// Records carrying `record_type`. `None` returns everything.
    pub fn filter_by_type(&self, record_type: Option<RecordType>) -> Vec<Record> {
        let Some(wanted) = record_type else {
            return self.current();
        };

        self.lock_current()
            .iter()
            .filter(|r| r.has_type(wanted))
            .cloned()
            .collect()
    }

    pub fn find_by_id(&self, id: u32) -> Option<Record> {
        self.lock_current().iter().find(|r| r.id() == id).cloned()
    }

    /// Persist the current collection. An empty collection is a
    /// validation error, other failures come straight from the store.
    pub fn save(&self, filename: &str) -> AppResult<PathBuf> {
        let snapshot = self.current();
        let path = self.store.save(&snapshot, filename)?;
        self.source.remember(&snapshot);
        Ok(path)
    }

    /// Replace the current collection with the file's contents.
    /// On failure the current collection is left as it was.
    pub fn load(&self, filename: &str) -> AppResult<usize> {
        let records = self.store.load(filename)?;
        self.source.remember(&records);
        let count = records.len();
        self.set_current(records);
        Ok(count)
    }

    // Only whole-vector replacement happens under the lock.
    fn lock_current(&self) -> MutexGuard<'_, Vec<Record>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
