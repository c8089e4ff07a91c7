// src/domain/mod.rs
//
// Domain root. All other modules import from `crate::domain::*`.

pub mod record;

pub use record::{validate_record, Record, RecordType, Stats};

use thiserror::Error;

/// Domain-level errors
/// These represent violations of record invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
