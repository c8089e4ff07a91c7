// src/application/state.rs

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::AppResult;
use crate::integrations::{CatalogFetcher, FetcherConfig, RecordSource};
use crate::repositories::{CollectionStore, JsonCollectionStore};
use crate::services::CollectionController;

/// Handles shared with the presentation layer.
/// All fields are Arc-wrapped so they can move onto background tasks.
pub struct AppState {
    pub fetcher: Arc<CatalogFetcher>,
    pub controller: Arc<CollectionController>,
}

impl AppState {
    /// Wire a fetcher for `config` and a JSON store rooted at `data_dir`
    /// (the working directory when `None`).
    pub fn new(config: FetcherConfig, data_dir: Option<PathBuf>) -> AppResult<Self> {
        let fetcher = Arc::new(CatalogFetcher::new(config)?);

        let store: Arc<dyn CollectionStore> = match data_dir {
            Some(dir) => Arc::new(JsonCollectionStore::with_base_dir(dir)),
            None => Arc::new(JsonCollectionStore::new()),
        };
        let source: Arc<dyn RecordSource> = fetcher.clone();

        let controller = Arc::new(CollectionController::new(source, store));

        Ok(Self {
            fetcher,
            controller,
        })
    }
}
