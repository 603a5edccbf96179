//! # Store Error Types
//!
//! Error types for registry and board operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  FieldErrors / ValidationError (parcel-core)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds reference-key and lifecycle context   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in kiosk app) ← Serialized for the presentation layer       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  User-facing message string                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All variants are expected, user-correctable conditions; the `Display`
//! strings are the user-facing messages.

use thiserror::Error;

use parcel_core::FieldErrors;

/// Registry and board operation errors.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// One or more form fields failed validation.
    ///
    /// Carries the full field → message map so the caller can show every
    /// problem at once.
    #[error("{0}")]
    InvalidForm(FieldErrors),

    /// The supplied business location code matches no registration.
    #[error("Business location code not recognized: {code}")]
    UnknownBusinessCode { code: String },

    /// The supplied pickup code matches no recorded drop-off.
    #[error("Invalid pickup code: {code}")]
    UnknownPickupCode { code: String },

    /// The package for this pickup code was already claimed.
    ///
    /// The record is left unchanged; this is a no-op reported to the user.
    #[error("This package has already been picked up")]
    AlreadyPickedUp { recipient: String },

    /// Code issuance hit [`crate::MAX_CODE_ATTEMPTS`] collisions in a row.
    ///
    /// Unreachable with the full 36-character alphabet; exists for the
    /// shrunk-alphabet collision tests.
    #[error("could not issue a unique {length}-character code after {attempts} attempts")]
    CodeSpaceExhausted { length: usize, attempts: usize },
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_user_facing() {
        let err = StoreError::UnknownBusinessCode {
            code: "ZZZZZZ".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Business location code not recognized: ZZZZZZ"
        );

        let err = StoreError::AlreadyPickedUp {
            recipient: "Alex Rivera".to_string(),
        };
        assert_eq!(err.to_string(), "This package has already been picked up");
    }
}
