pub mod config;
pub mod fetcher;
pub mod payload;
pub mod source;

pub use config::FetcherConfig;
pub use fetcher::{CatalogFetcher, FetchFailure, FetchReport};
pub use payload::parse_record;
pub use source::RecordSource;
