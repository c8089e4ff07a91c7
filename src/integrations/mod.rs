// src/integrations/mod.rs
//
// External integrations

pub mod catalog;

pub use catalog::{CatalogFetcher, FetchReport, FetcherConfig, RecordSource};
