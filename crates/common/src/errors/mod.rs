//! Error types for ScholarTrack services
//!
//! Provides a comprehensive error handling system with:
//! - Distinct error types for different failure modes
//! - Machine-readable error codes for the transport layer
//! - A workflow-aware invalid-transition variant

use crate::db::models::{ApprovalStatus, ReviewAction};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Error codes for machine-readable error identification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation errors (1xxx)
    ValidationError,
    MissingField,

    // Authorization errors (2xxx)
    Unauthorized,
    NotRecordOwner,

    // Resource errors (4xxx)
    NotFound,

    // Workflow errors (5xxx)
    InvalidStateTransition,

    // Database errors (7xxx)
    DatabaseError,
    ConnectionError,

    // Internal errors (9xxx)
    InternalError,
    ConfigurationError,
    SerializationError,
}

impl ErrorCode {
    /// Get the numeric code for this error
    pub fn as_code(&self) -> u16 {
        match self {
            // Validation (1xxx)
            ErrorCode::ValidationError => 1001,
            ErrorCode::MissingField => 1002,

            // Authorization (2xxx)
            ErrorCode::Unauthorized => 2001,
            ErrorCode::NotRecordOwner => 2002,

            // Resources (4xxx)
            ErrorCode::NotFound => 4001,

            // Workflow (5xxx)
            ErrorCode::InvalidStateTransition => 5001,

            // Database (7xxx)
            ErrorCode::DatabaseError => 7001,
            ErrorCode::ConnectionError => 7002,

            // Internal (9xxx)
            ErrorCode::InternalError => 9001,
            ErrorCode::ConfigurationError => 9002,
            ErrorCode::SerializationError => 9003,
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("Required field missing: {field}")]
    MissingField { field: String },

    // Authorization errors
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Actor {actor_id} does not own record {record_id}")]
    NotRecordOwner { actor_id: String, record_id: String },

    // Resource errors
    #[error("Resource not found: {resource} with id {id}")]
    NotFound { resource: &'static str, id: String },

    // Workflow errors
    #[error("Cannot {action} a record in status {from}")]
    InvalidTransition {
        from: ApprovalStatus,
        action: ReviewAction,
    },

    #[error("Record is {status} and can no longer be modified by its owner")]
    RecordImmutable { status: ApprovalStatus },

    // Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Database connection error: {message}")]
    DatabaseConnection { message: String },

    // Internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Get the error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { .. } => ErrorCode::ValidationError,
            AppError::MissingField { .. } => ErrorCode::MissingField,
            AppError::Unauthorized { .. } => ErrorCode::Unauthorized,
            AppError::NotRecordOwner { .. } => ErrorCode::NotRecordOwner,
            AppError::NotFound { .. } => ErrorCode::NotFound,
            AppError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            AppError::RecordImmutable { .. } => ErrorCode::InvalidStateTransition,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::DatabaseConnection { .. } => ErrorCode::ConnectionError,
            AppError::Internal { .. } => ErrorCode::InternalError,
            AppError::Configuration { .. } => ErrorCode::ConfigurationError,
            AppError::Serialization(_) => ErrorCode::SerializationError,
            AppError::Other(_) => ErrorCode::InternalError,
        }
    }

    /// Check if this error was caused by the caller (bad input, bad actor,
    /// bad state) rather than by the system itself
    pub fn is_client_error(&self) -> bool {
        self.code().as_code() < 7000
    }

    /// Check if this error should be logged at error level
    pub fn is_server_error(&self) -> bool {
        !self.is_client_error()
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let field = err.field_errors().keys().next().map(|k| k.to_string());
        AppError::Validation {
            message: err.to_string(),
            field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_mapping() {
        let err = AppError::NotFound {
            resource: "journal",
            id: "test".into(),
        };
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.code().as_code(), 4001);
    }

    #[test]
    fn test_transition_errors_share_a_code() {
        let a = AppError::InvalidTransition {
            from: ApprovalStatus::Locked,
            action: ReviewAction::Approve,
        };
        let b = AppError::RecordImmutable {
            status: ApprovalStatus::Approved,
        };
        assert_eq!(a.code(), ErrorCode::InvalidStateTransition);
        assert_eq!(a.code(), b.code());
        assert!(a.is_client_error());
    }

    #[test]
    fn test_server_error() {
        let err = AppError::DatabaseConnection {
            message: "refused".into(),
        };
        assert!(err.is_server_error());
        assert!(!err.is_client_error());
    }
}
