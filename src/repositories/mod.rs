// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - Repositories are DUMB data mappers
// - NO query logic
// - NO cache bookkeeping

pub mod collection_store;

pub use collection_store::{normalize_filename, CollectionStore, JsonCollectionStore};
