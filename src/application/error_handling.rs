// src/application/error_handling.rs
//
// Error responses for the presentation layer
//
// - Maps AppError → a category-tagged, serializable response
// - The UI renders it; it never has to match on AppError itself

use log::error;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorType};

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        let error_type = error.kind();
        match error {
            AppError::Validation(message) | AppError::NotFound(message) => {
                Self::failure(error_type, message, None)
            }

            AppError::Parse(details) => Self::failure(
                error_type,
                "Data could not be read".to_string(),
                Some(details),
            ),

            AppError::Transport(details) => Self::failure(
                error_type,
                "Catalog service unavailable".to_string(),
                Some(details),
            ),

            AppError::Io(io_error) => {
                error!("IO error: {:?}", io_error);
                Self::failure(
                    error_type,
                    "File system operation failed".to_string(),
                    Some(io_error.to_string()),
                )
            }
        }
    }

    fn failure(error_type: ErrorType, message: String, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message,
            details,
        }
    }
}

/// Helper trait to convert Results to a serialized ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response)
                .unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = ErrorResponse::from_app_error(AppError::Validation(
            "Cannot save an empty collection".to_string(),
        ));
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.message, "Cannot save an empty collection");
        assert!(!error.success);
    }

    #[test]
    fn test_transport_error_keeps_details() {
        let error = ErrorResponse::from_app_error(AppError::Transport("connection refused".to_string()));
        assert_eq!(error.error_type, ErrorType::ExternalService);
        assert_eq!(error.details.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_serialization() {
        let result: Result<(), AppError> = Err(AppError::NotFound("File does not exist: a.json".to_string()));
        let json = result.to_error_response().unwrap_err();
        assert!(json.contains("not_found"));
        assert!(json.contains("a.json"));
    }
}
