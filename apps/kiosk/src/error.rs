//! # API Error Type
//!
//! Unified error type for kiosk commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in ParcelPoint                            │
//! │                                                                         │
//! │  Presentation                 Rust Backend                              │
//! │  ────────────                 ────────────                              │
//! │                                                                         │
//! │  call register_business(...)                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │  Form invalid? ── StoreError::InvalidForm(map) ──┐              │  │
//! │  │         │                                        │              │  │
//! │  │  Unknown code? ── StoreError::Unknown* ───────── ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "VALIDATION_ERROR",                                          │
//! │    "message": "address is required; business name is required",         │
//! │    "fields": { "address": "...", "name": "..." } }                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is an expected, user-correctable condition; the message is
//! the string the presentation layer renders, and form failures also carry
//! the full field → message map.

use serde::Serialize;

use parcel_core::{CoreError, FieldErrors};
use parcel_store::StoreError;

/// API error returned from kiosk commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Field → message map, present for form validation failures so the
    /// caller can highlight every problem in one pass
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Reference key matched nothing (business code, pickup code, tracking id)
    NotFound,

    /// Input validation failed
    ValidationError,

    /// The package for this pickup code was already claimed
    AlreadyPickedUp,

    /// Business rule violation
    BusinessLogic,

    /// Unexpected internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            fields: None,
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, key: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, key))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a validation error carrying the full field map.
    pub fn form(errors: FieldErrors) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: errors.to_string(),
            fields: Some(errors),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidForm(errors) => ApiError::form(errors),
            StoreError::UnknownBusinessCode { .. } | StoreError::UnknownPickupCode { .. } => {
                ApiError::new(ErrorCode::NotFound, err.to_string())
            }
            StoreError::AlreadyPickedUp { .. } => {
                ApiError::new(ErrorCode::AlreadyPickedUp, err.to_string())
            }
            StoreError::CodeSpaceExhausted { .. } => {
                tracing::error!("code issuance exhausted: {}", err);
                ApiError::internal("Could not issue a unique code")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::SampleTooLarge { .. } => {
                ApiError::new(ErrorCode::BusinessLogic, err.to_string())
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_form_carries_field_map() {
        let errors = parcel_core::validation::RegistrationForm::new("", "")
            .validate()
            .unwrap_err();
        let api: ApiError = StoreError::InvalidForm(errors).into();

        assert!(matches!(api.code, ErrorCode::ValidationError));
        let fields = api.fields.expect("fields should be present");
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_unknown_codes_map_to_not_found() {
        let api: ApiError = StoreError::UnknownPickupCode {
            code: "WRONGCOD".to_string(),
        }
        .into();
        assert!(matches!(api.code, ErrorCode::NotFound));
        assert_eq!(api.message, "Invalid pickup code: WRONGCOD");
    }
}
