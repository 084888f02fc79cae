// src/application/error_handling.rs
//
// Enhanced Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for UI
// - Never exposes internal implementation details
// - Logs errors for debugging

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found (404)
    NotFound,

    /// Invalid input/validation error (400)
    Validation,

    /// External API request failed (502)
    Network,

    /// Query returned zero results (not a technical failure)
    EmptyResult,

    /// Key-value store read/write failure (500)
    Storage,

    /// Stored value not valid JSON or wrong shape (500)
    Deserialization,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound => Self {
                success: false,
                error_type: ErrorType::NotFound,
                message: "Movie not found".to_string(),
                details: None,
            },

            AppError::EmptyResult => Self {
                success: false,
                error_type: ErrorType::EmptyResult,
                message: "No results".to_string(),
                details: None,
            },

            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: "Validation failed".to_string(),
                details: Some(domain_error.to_string()),
            },

            AppError::Network(message) => Self {
                success: false,
                error_type: ErrorType::Network,
                message: "External service error".to_string(),
                details: Some(message),
            },

            AppError::Database(db_error) => {
                // Log full error for debugging
                log::error!("Database error: {:?}", db_error);

                Self {
                    success: false,
                    error_type: ErrorType::Storage,
                    message: "Storage operation failed".to_string(),
                    details: Some("Check logs for details".to_string()),
                }
            }

            AppError::Pool(pool_error) => {
                log::error!("Connection pool error: {}", pool_error);

                Self {
                    success: false,
                    error_type: ErrorType::Storage,
                    message: "Storage connection failed".to_string(),
                    details: None,
                }
            }

            AppError::Deserialization(serde_error) => {
                log::error!("Deserialization error: {:?}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::Deserialization,
                    message: "Stored data could not be read".to_string(),
                    details: None,
                }
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "File system operation failed".to_string(),
                    details: Some(io_error.to_string()),
                }
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message,
                    details: None,
                }
            }
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            message,
            details: None,
        }
    }

    /// Serialize for the command boundary
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "Internal error".to_string())
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| ErrorResponse::from_app_error(e).to_json_string())
    }
}
