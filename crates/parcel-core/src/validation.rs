//! # Validation Module
//!
//! Input validation for ParcelPoint forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (external)                                      │
//! │  ├── Immediate feedback while typing                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Field checks: required, email shape, password policy              │
//! │  └── Form checks: collect EVERY violation into FieldErrors             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store (parcel-store)                                         │
//! │  └── Reference checks: business code exists, pickup code exists        │
//! │                                                                         │
//! │  Form validation is NOT fail-fast: all problems come back in one       │
//! │  field → message map so the caller renders them in a single pass.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::{MIN_EMAIL_LEN, MIN_PASSWORD_LEN};

// =============================================================================
// Field Errors
// =============================================================================

/// An ordered field → human-readable-message mapping.
///
/// Form validation collects every violation here instead of failing on the
/// first one. A `BTreeMap` keeps iteration order stable (alphabetical by
/// field), which keeps rendered output and tests deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation for `field`, overwriting any earlier message
    /// for the same field.
    pub fn insert(&mut self, field: impl Into<String>, error: &ValidationError) {
        self.0.insert(field.into(), error.to_string());
    }

    /// Runs a field check and records its error, if any.
    pub fn check(&mut self, field: &str, result: Result<(), ValidationError>) {
        if let Err(err) = result {
            self.insert(field, &err);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts into `Ok(())` when empty, `Err(self)` otherwise.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for message in self.0.values() {
            if !first {
                f.write_str("; ")?;
            }
            f.write_str(message)?;
            first = false;
        }
        Ok(())
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates that a required field is non-empty after trimming.
pub fn validate_required(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Checks whether a string looks like an email address.
///
/// ## Rules
/// The trimmed string must contain at least one `@`, at least one `.`, and
/// be at least 5 characters long. Deliberately loose - this is a shape
/// check, not RFC compliance, and `true` is not proof of a deliverable
/// address.
///
/// ## Example
/// ```rust
/// use parcel_core::validation::is_valid_email;
///
/// assert!(is_valid_email("a@b.co"));
/// assert!(!is_valid_email("abc"));
/// assert!(!is_valid_email("   "));
/// ```
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    value.len() >= MIN_EMAIL_LEN && value.contains('@') && value.contains('.')
}

/// Validates an email field, reporting missing vs malformed separately.
pub fn validate_email(field: &str, value: &str) -> Result<(), ValidationError> {
    validate_required(field, value)?;
    if !is_valid_email(value) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must look like an email address".to_string(),
        });
    }
    Ok(())
}

/// Validates the password policy applied at sign-up save time.
///
/// ## Rules
/// - Both password and confirmation must be non-empty
/// - They must be equal (exact, no trimming - whitespace is significant
///   in passwords)
/// - The password must be at least 8 characters
pub fn validate_password(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }
    if confirmation.is_empty() {
        return Err(ValidationError::Required {
            field: "password confirmation".to_string(),
        });
    }
    if password != confirmation {
        return Err(ValidationError::Mismatch {
            field: "password".to_string(),
            other: "password confirmation".to_string(),
        });
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

// =============================================================================
// Forms
// =============================================================================

/// The short register-a-location form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub name: String,
    pub address: String,
}

impl RegistrationForm {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        RegistrationForm {
            name: name.into(),
            address: address.into(),
        }
    }

    /// Validates the form, collecting every violation.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("name", validate_required("business name", &self.name));
        errors.check("address", validate_required("address", &self.address));
        errors.into_result()
    }
}

/// The long multi-step sign-up/contract form for a new partner business.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub business_name: String,
    pub address: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub employee_id: String,
    pub role: String,
}

impl SignupForm {
    /// Validates the whole form, collecting every violation so the caller
    /// can display all problems in one pass.
    ///
    /// ## Checks
    /// - business name, address, employee id, role: required (trimmed
    ///   non-empty)
    /// - email: required and plausible shape ([`is_valid_email`])
    /// - password: policy from [`validate_password`]
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            "businessName",
            validate_required("business name", &self.business_name),
        );
        errors.check("address", validate_required("address", &self.address));
        errors.check("email", validate_email("email", &self.email));
        errors.check(
            "employeeId",
            validate_required("employee ID", &self.employee_id),
        );
        errors.check("role", validate_required("role", &self.role));
        errors.check(
            "password",
            validate_password(&self.password, &self.confirm_password),
        );
        errors.into_result()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("  someone@example.com  "));

        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("   "));
        assert!(!is_valid_email("a@bco")); // no dot
        assert!(!is_valid_email("ab.co")); // no at
        assert!(!is_valid_email("a@.c")); // under 5 chars
    }

    #[test]
    fn test_validate_required_trims() {
        assert!(validate_required("name", "Corner Market").is_ok());
        assert!(validate_required("name", "").is_err());
        assert!(validate_required("name", "   \t").is_err());
    }

    #[test]
    fn test_password_policy() {
        assert!(validate_password("sufficient", "sufficient").is_ok());

        assert!(matches!(
            validate_password("", ""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_password("abcdefgh", ""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_password("abcdefgh", "abcdefgX"),
            Err(ValidationError::Mismatch { .. })
        ));
        assert!(matches!(
            validate_password("short", "short"),
            Err(ValidationError::TooShort { min: 8, .. })
        ));
    }

    #[test]
    fn test_registration_form_collects_both_errors() {
        let errors = RegistrationForm::new("", "  ").validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("business name is required"));
        assert_eq!(errors.get("address"), Some("address is required"));
    }

    #[test]
    fn test_registration_form_accepts_complete_input() {
        assert!(RegistrationForm::new("Corner Market", "12 Elm St")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_signup_form_reports_every_field_at_once() {
        let errors = SignupForm::default().validate().unwrap_err();
        // businessName, address, email, employeeId, role, password
        assert_eq!(errors.len(), 6);
        assert!(errors.get("email").is_some());
        assert!(errors.get("password").is_some());
    }

    #[test]
    fn test_signup_form_valid() {
        let form = SignupForm {
            business_name: "Corner Market".to_string(),
            address: "12 Elm St".to_string(),
            email: "owner@corner.example".to_string(),
            password: "hunter2hunter2".to_string(),
            confirm_password: "hunter2hunter2".to_string(),
            employee_id: "E-100".to_string(),
            role: "Manager".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_field_errors_display_joins_messages() {
        let errors = RegistrationForm::new("", "").validate().unwrap_err();
        assert_eq!(
            errors.to_string(),
            "address is required; business name is required"
        );
    }
}
