// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod collection_controller;

pub use collection_controller::CollectionController;
