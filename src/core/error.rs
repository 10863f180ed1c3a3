//! Typed error handling for the bistro crate
//!
//! This module provides the error hierarchy surfaced by entity construction
//! and the HTTP layer. Clients can match on the category and on the specific
//! rule that fired rather than dealing with a generic error string.
//!
//! # Error Categories
//!
//! - [`EntityError`]: errors related to stored entities (lookups)
//! - [`ValidationError`]: field-constraint and cross-field rule violations
//! - [`RequestError`]: malformed HTTP requests (bad ids, bad bodies)
//!
//! All validation failures surface immediately at construction time; none
//! are retried or silently recovered.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the bistro crate
///
/// Each variant contains a more specific error type for that category.
#[derive(Debug)]
pub enum BistroError {
    /// Entity lookup errors
    Entity(EntityError),

    /// Input validation errors
    Validation(ValidationError),

    /// HTTP request errors
    Request(RequestError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for BistroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BistroError::Entity(e) => write!(f, "{}", e),
            BistroError::Validation(e) => write!(f, "{}", e),
            BistroError::Request(e) => write!(f, "{}", e),
            BistroError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for BistroError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BistroError::Entity(e) => Some(e),
            BistroError::Validation(e) => Some(e),
            BistroError::Request(e) => Some(e),
            BistroError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl BistroError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BistroError::Entity(e) => e.status_code(),
            BistroError::Validation(e) => e.status_code(),
            BistroError::Request(_) => StatusCode::BAD_REQUEST,
            BistroError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            BistroError::Entity(e) => e.error_code(),
            BistroError::Validation(e) => e.error_code(),
            BistroError::Request(e) => e.error_code(),
            BistroError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            BistroError::Entity(EntityError::NotFound { entity_type, id }) => {
                Some(serde_json::json!({
                    "entity_type": entity_type,
                    "id": id
                }))
            }
            BistroError::Validation(ValidationError::FieldConstraint { field, .. }) => {
                Some(serde_json::json!({ "field": field }))
            }
            BistroError::Validation(ValidationError::CrossFieldRule { rule, .. }) => {
                Some(serde_json::json!({ "rule": rule }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for BistroError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to stored entities
#[derive(Debug)]
pub enum EntityError {
    /// Entity was not found
    NotFound { entity_type: String, id: u64 },
}

impl EntityError {
    /// Shorthand for a not-found error
    pub fn not_found(entity_type: impl Into<String>, id: u64) -> Self {
        EntityError::NotFound {
            entity_type: entity_type.into(),
            id,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
        }
    }
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::NotFound { entity_type, id } => {
                write!(f, "{} with id '{}' not found", entity_type, id)
            }
        }
    }
}

impl std::error::Error for EntityError {}

impl From<EntityError> for BistroError {
    fn from(err: EntityError) -> Self {
        BistroError::Entity(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
///
/// The two rule classes from the entity validators are kept distinct:
/// field constraints cover a single field's length/range/pattern, while
/// cross-field rules depend on more than one field's value jointly.
#[derive(Debug)]
pub enum ValidationError {
    /// A single field violated a length/range/pattern constraint
    FieldConstraint { field: String, message: String },

    /// A rule depending on multiple fields jointly was violated
    CrossFieldRule { rule: &'static str, message: String },

    /// The payload was not valid JSON for the expected shape
    InvalidJson { message: String },
}

impl ValidationError {
    /// Shorthand for a field-constraint violation
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::FieldConstraint {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a cross-field rule violation
    pub fn cross_field(rule: &'static str, message: impl Into<String>) -> Self {
        ValidationError::CrossFieldRule {
            rule,
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ValidationError::FieldConstraint { .. } | ValidationError::CrossFieldRule { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ValidationError::InvalidJson { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldConstraint { .. } => "FIELD_CONSTRAINT",
            ValidationError::CrossFieldRule { .. } => "CROSS_FIELD_RULE",
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldConstraint { field, message } => {
                write!(f, "Validation error for field '{}': {}", field, message)
            }
            ValidationError::CrossFieldRule { rule, message } => {
                write!(f, "Validation rule '{}' violated: {}", rule, message)
            }
            ValidationError::InvalidJson { message } => {
                write!(f, "Invalid JSON: {}", message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for BistroError {
    fn from(err: ValidationError) -> Self {
        BistroError::Validation(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to HTTP requests
#[derive(Debug)]
pub enum RequestError {
    /// Invalid entity ID format in the path
    InvalidEntityId { id: String },

    /// Invalid request body
    InvalidBody { message: String },
}

impl RequestError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidEntityId { .. } => "INVALID_ENTITY_ID",
            RequestError::InvalidBody { .. } => "INVALID_BODY",
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidEntityId { id } => {
                write!(f, "Invalid entity ID format: '{}'", id)
            }
            RequestError::InvalidBody { message } => {
                write!(f, "Invalid request body: {}", message)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl From<RequestError> for BistroError {
    fn from(err: RequestError) -> Self {
        BistroError::Request(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for BistroError {
    fn from(err: serde_json::Error) -> Self {
        BistroError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for bistro operations
pub type BistroResult<T> = Result<T, BistroError>;

// =============================================================================
// Tests
// =============================================================================
