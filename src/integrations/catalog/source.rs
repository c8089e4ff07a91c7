// src/integrations/catalog/source.rs

use async_trait::async_trait;

use crate::domain::Record;
use crate::error::AppResult;

/// Anything that can hand out catalog records by id.
///
/// The controller only talks to this seam, so it can run against the real
/// HTTP fetcher or a test double.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_by_id(&self, id: u32) -> AppResult<Record>;

    /// Best effort: failures are skipped, never returned
    async fn fetch_range(&self, count: i64) -> Vec<Record>;

    /// Feed records obtained elsewhere (a loaded file) into the cache
    fn remember(&self, records: &[Record]);
}
