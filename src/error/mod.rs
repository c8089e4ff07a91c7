pub mod types;

pub use types::{AppError, AppResult, ErrorType};
