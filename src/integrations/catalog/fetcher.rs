// src/integrations/catalog/fetcher.rs
//
// Catalog fetcher
//
// - One GET per id against `{base_url}{id}`
// - Maps payloads to Records (see payload.rs)
// - Batch fetches are sequential and best effort
// - Keeps every record it has seen, keyed by id, for its whole lifetime

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Client, StatusCode};

use super::config::FetcherConfig;
use super::payload::parse_record;
use super::source::RecordSource;
use crate::domain::Record;
use crate::error::{AppError, AppResult, ErrorType};

/// Body the catalog sends for an unknown id
const NOT_FOUND_BODY: &str = "Not Found";

/// One failed id from a batch fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub id: u32,
    pub kind: ErrorType,
    pub message: String,
}

/// Outcome of a batch fetch: what arrived, in id order, and what did not
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    pub records: Vec<Record>,
    pub failures: Vec<FetchFailure>,
}

impl FetchReport {
    pub fn attempted(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

pub struct CatalogFetcher {
    config: FetcherConfig,
    http_client: Client,
    cache: Mutex<HashMap<u32, Record>>,
}

impl CatalogFetcher {
    pub fn new(config: FetcherConfig) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            config,
            http_client,
            cache: Mutex::new(HashMap::new()),
        })
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Fetch one record. Cached on success unless the id is already known.
    pub async fn fetch_by_id(&self, id: u32) -> AppResult<Record> {
        if id == 0 {
            return Err(AppError::Validation("Record id must be positive".to_string()));
        }

        let url = self.config.record_url(id);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Catalog request for id {} failed: {}", id, e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("No catalog record with id {}", id)));
        }
        if !status.is_success() {
            return Err(AppError::Transport(format!(
                "Catalog returned status {} for id {}",
                status, id
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to read catalog body for id {}: {}", id, e)))?;

        if body.trim() == NOT_FOUND_BODY {
            return Err(AppError::NotFound(format!("No catalog record with id {}", id)));
        }

        let record = parse_record(&body)?;
        self.insert_if_absent(record.clone());
        Ok(record)
    }

    /// Fetch ids `1..=count` one after another, skipping failures.
    pub async fn fetch_range(&self, count: i64) -> Vec<Record> {
        self.fetch_range_report(count).await.records
    }

    /// Like [`fetch_range`](Self::fetch_range), but also reports which ids failed.
    pub async fn fetch_range_report(&self, count: i64) -> FetchReport {
        let mut report = FetchReport::default();
        if count <= 0 {
            return report;
        }

        let upper = u32::try_from(count).unwrap_or(u32::MAX);
        for id in 1..=upper {
            match self.fetch_by_id(id).await {
                Ok(record) => report.records.push(record),
                Err(e) => {
                    warn!("Error fetching record {}: {}", id, e);
                    report.failures.push(FetchFailure {
                        id,
                        kind: e.kind(),
                        message: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Fetched {} of {} records ({} failed)",
            report.records.len(),
            report.attempted(),
            report.failures.len()
        );
        report
    }

    pub fn cached(&self, id: u32) -> Option<Record> {
        let cached = self.lock_cache().get(&id).cloned();
        if cached.is_some() {
            debug!("Cache hit for record {}", id);
        }
        cached
    }

    pub fn cache_len(&self) -> usize {
        self.lock_cache().len()
    }

    /// Insert each record whose id is not cached yet
    pub fn remember(&self, records: &[Record]) {
        let mut cache = self.lock_cache();
        for record in records {
            cache.entry(record.id()).or_insert_with(|| record.clone());
        }
    }

    fn insert_if_absent(&self, record: Record) {
        self.lock_cache().entry(record.id()).or_insert(record);
    }

    // Entries are only ever inserted whole, so a poisoned map is still consistent.
    fn lock_cache(&self) -> MutexGuard<'_, HashMap<u32, Record>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl RecordSource for CatalogFetcher {
    async fn fetch_by_id(&self, id: u32) -> AppResult<Record> {
        CatalogFetcher::fetch_by_id(self, id).await
    }

    async fn fetch_range(&self, count: i64) -> Vec<Record> {
        CatalogFetcher::fetch_range(self, count).await
    }

    fn remember(&self, records: &[Record]) {
        CatalogFetcher::remember(self, records)
    }
}
