// src/application/mod.rs
//
// Application Layer
//
// - Boundary between the presentation layer and the services
// - Translates errors into UI-friendly responses

pub mod error_handling;
pub mod state;

pub use error_handling::{ErrorResponse, ToErrorResponse};
pub use state::AppState;
