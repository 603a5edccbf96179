//! # Error Types
//!
//! Domain-specific error types for parcel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  parcel-core errors (this file)                                        │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Single-field validation failures               │
//! │                                                                         │
//! │  parcel-store errors (separate crate)                                  │
//! │  └── StoreError       - Registry/board operation failures              │
//! │                                                                         │
//! │  Kiosk API errors (in app)                                             │
//! │  └── ApiError         - What the presentation layer sees               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → UI        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, counts, etc.)
//! 3. Errors are enum variants, never bare Strings
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A directory sample was requested with more entries than the
    /// directory contains.
    ///
    /// ## When This Occurs
    /// - `sample_with_distances(rng, list, count)` with `count > list.len()`
    ///
    /// The original behavior let this propagate as a fault; here it is an
    /// explicit error so callers can decide how to surface it.
    #[error("cannot sample {requested} businesses from a directory of {available}")]
    SampleTooLarge { requested: usize, available: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Single-field validation errors.
///
/// These occur when one piece of user input doesn't meet requirements.
/// Form-level validation collects several of these into a
/// [`crate::validation::FieldErrors`] map rather than failing fast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty (after trimming).
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Invalid format (e.g., email shape, unknown status name).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Two fields that must agree do not (password vs confirmation).
    #[error("{field} does not match {other}")]
    Mismatch { field: String, other: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::SampleTooLarge {
            requested: 30,
            available: 25,
        };
        assert_eq!(
            err.to_string(),
            "cannot sample 30 businesses from a directory of 25"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "business name".to_string(),
        };
        assert_eq!(err.to_string(), "business name is required");

        let err = ValidationError::TooShort {
            field: "password".to_string(),
            min: 8,
        };
        assert_eq!(err.to_string(), "password must be at least 8 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "address".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
