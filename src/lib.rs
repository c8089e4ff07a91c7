// src/lib.rs
// Pokecatalog - catalog client and in-memory collection manager
//
// Architecture:
// - Domain: the immutable Record model and its invariants
// - Integrations: the remote catalog (HTTP fetch, payload parsing, cache)
// - Repositories: collection persistence as JSON files
// - Services: the current collection and its queries
// - Application: boundary for the presentation layer

pub mod application;
pub mod domain;
pub mod error;
pub mod integrations;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use application::{AppState, ErrorResponse};
pub use domain::{validate_record, DomainError, Record, RecordType, Stats};
pub use error::{AppError, AppResult, ErrorType};
pub use integrations::{CatalogFetcher, FetchReport, FetcherConfig, RecordSource};
pub use integrations::catalog::parse_record;
pub use repositories::{normalize_filename, CollectionStore, JsonCollectionStore};
pub use services::CollectionController;
