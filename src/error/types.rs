// src/error/types.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error categories, so callers can branch without matching on payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Remote id or local file does not exist
    NotFound,

    /// Caller-supplied argument rejected
    Validation,

    /// Malformed or schema-violating JSON
    Parse,

    /// Remote catalog unreachable or misbehaving
    ExternalService,

    /// Local file system failure
    FileSystem,
}

impl AppError {
    pub fn kind(&self) -> ErrorType {
        match self {
            AppError::Transport(_) => ErrorType::ExternalService,
            AppError::NotFound(_) => ErrorType::NotFound,
            AppError::Parse(_) => ErrorType::Parse,
            AppError::Validation(_) => ErrorType::Validation,
            AppError::Io(_) => ErrorType::FileSystem,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(AppError::Transport("x".into()).kind(), ErrorType::ExternalService);
        assert_eq!(AppError::NotFound("x".into()).kind(), ErrorType::NotFound);
        assert_eq!(AppError::Parse("x".into()).kind(), ErrorType::Parse);
        assert_eq!(AppError::Validation("x".into()).kind(), ErrorType::Validation);
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(AppError::from(io).kind(), ErrorType::FileSystem);
    }

    #[test]
    fn test_record_invariant_failure_surfaces_as_parse() {
        let body = r#"{"id": 0, "name": "missingno", "types": [], "stats": []}"#;
        let err = crate::integrations::catalog::parse_record(body).unwrap_err();
        assert_eq!(err.kind(), ErrorType::Parse);
    }

    #[test]
    fn test_serializes_as_message() {
        let json = serde_json::to_string(&AppError::Validation("empty".into())).unwrap();
        assert_eq!(json, "\"Validation error: empty\"");
    }
}
