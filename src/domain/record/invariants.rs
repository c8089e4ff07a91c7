use super::entity::Record;
use crate::domain::{DomainError, DomainResult};

/// Validates the invariants a record coming from the catalog must hold.
pub fn validate_record(record: &Record) -> DomainResult<()> {
    validate_id(record.id())?;
    validate_name(record.name())?;
    Ok(())
}

fn validate_id(id: u32) -> DomainResult<()> {
    if id == 0 {
        return Err(DomainError::InvariantViolation(
            "Record id must be positive".to_string(),
        ));
    }
    Ok(())
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Record name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for a Record:
///
/// 1. Identity (id) is positive and never changes
/// 2. Name is not blank
/// 3. Stats are always present, possibly all zero
/// 4. Types may be empty; the set of tags is closed
