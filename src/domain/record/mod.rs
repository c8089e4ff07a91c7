pub mod entity;
pub mod invariants;

pub use entity::{Record, RecordType, Stats};
pub use invariants::validate_record;
