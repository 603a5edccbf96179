//! # Partner Commands
//!
//! The partner side of the kiosk: registering a business, signing in, and
//! the drop-off/pickup ledger.
//!
//! ## Partner Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Register a new business"                                             │
//! │     short form ──► register_business ──► code shown once               │
//! │     long form  ──► sign_up_business  ──► same, with contact email      │
//! │                                                                         │
//! │  "Sign in to existing business"                                        │
//! │     code ──► sign_in ──► business summary                              │
//! │     then: notify_dropoff ──► pickup code for the recipient             │
//! │           verify_pickup  ──► claims the package exactly once           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use parcel_core::validation::{RegistrationForm, SignupForm};
use parcel_core::BusinessRegistration;
use parcel_store::{DropoffReceipt, PickupConfirmation};

use crate::error::ApiError;
use crate::state::RegistryState;

/// What a successful registration returns.
///
/// The code is shown exactly once here; there is no recovery flow.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub code: String,
    pub name: String,
    pub message: String,
}

impl From<BusinessRegistration> for RegistrationResponse {
    fn from(reg: BusinessRegistration) -> Self {
        let message = format!("Registered '{}' with code: {}", reg.name, reg.code);
        RegistrationResponse {
            code: reg.code,
            name: reg.name,
            message,
        }
    }
}

/// Business details returned on sign-in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessSummary {
    pub code: String,
    pub name: String,
    pub address: String,
}

impl From<&BusinessRegistration> for BusinessSummary {
    fn from(reg: &BusinessRegistration) -> Self {
        BusinessSummary {
            code: reg.code.clone(),
            name: reg.name.clone(),
            address: reg.address.clone(),
        }
    }
}

/// Registers a business via the short register-a-location form.
pub fn register_business(
    registry: &RegistryState,
    form: &RegistrationForm,
) -> Result<RegistrationResponse, ApiError> {
    debug!(name = %form.name, "register_business command");
    let registration = registry.with_registry_mut(|reg, rng| reg.register(rng, form))?;
    Ok(registration.into())
}

/// Registers a business via the long sign-up/contract form.
pub fn sign_up_business(
    registry: &RegistryState,
    form: &SignupForm,
) -> Result<RegistrationResponse, ApiError> {
    debug!(name = %form.business_name, "sign_up_business command");
    let registration = registry.with_registry_mut(|reg, rng| reg.sign_up(rng, form))?;
    Ok(registration.into())
}

/// Signs a partner in by business code.
pub fn sign_in(registry: &RegistryState, code: &str) -> Result<BusinessSummary, ApiError> {
    debug!("sign_in command");
    registry.with_registry(|reg| {
        let registration = reg.sign_in(code)?;
        Ok(BusinessSummary::from(registration))
    })
}

/// Records a drop-off and returns the recipient's pickup code.
pub fn notify_dropoff(
    registry: &RegistryState,
    tracking: &str,
    business_code: &str,
    recipient: &str,
) -> Result<DropoffReceipt, ApiError> {
    debug!("notify_dropoff command");
    let receipt = registry
        .with_registry_mut(|reg, rng| reg.notify_dropoff(rng, tracking, business_code, recipient))?;
    Ok(receipt)
}

/// Verifies a pickup code, claiming the package exactly once.
pub fn verify_pickup(
    registry: &RegistryState,
    pickup_code: &str,
) -> Result<PickupConfirmation, ApiError> {
    debug!("verify_pickup command");
    let confirmation = registry.with_registry_mut(|reg, _rng| reg.verify_pickup(pickup_code))?;
    Ok(confirmation)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn registry() -> RegistryState {
        RegistryState::with_seed(55)
    }

    #[test]
    fn test_register_and_sign_in() {
        let state = registry();
        let response = register_business(
            &state,
            &RegistrationForm::new("Corner Market", "12 Elm St"),
        )
        .unwrap();
        assert_eq!(response.code.len(), 6);
        assert_eq!(
            response.message,
            format!("Registered 'Corner Market' with code: {}", response.code)
        );

        let summary = sign_in(&state, &response.code).unwrap();
        assert_eq!(summary.name, "Corner Market");
        assert_eq!(summary.address, "12 Elm St");
    }

    #[test]
    fn test_register_surfaces_field_errors() {
        let state = registry();
        let err = register_business(&state, &RegistrationForm::new("", "")).unwrap_err();
        assert!(matches!(err.code, ErrorCode::ValidationError));
        assert!(err.fields.is_some());
    }

    #[test]
    fn test_sign_in_unknown_code_is_not_found() {
        let state = registry();
        let err = sign_in(&state, "ZZZZZZ").unwrap_err();
        assert!(matches!(err.code, ErrorCode::NotFound));
    }

    #[test]
    fn test_dropoff_then_pickup_lifecycle() {
        let state = registry();
        let business = register_business(
            &state,
            &RegistrationForm::new("Corner Market", "12 Elm St"),
        )
        .unwrap();

        let receipt =
            notify_dropoff(&state, "1Z999AA1", &business.code, "Alex Rivera").unwrap();
        assert_eq!(receipt.pickup_code.len(), 8);
        assert_eq!(
            receipt.message(),
            format!(
                "Drop-off recorded. Pickup Code for recipient: {}",
                receipt.pickup_code
            )
        );

        let confirmation = verify_pickup(&state, &receipt.pickup_code).unwrap();
        assert_eq!(
            confirmation.message(),
            "Pickup verified for Alex Rivera (Tracking: 1Z999AA1)."
        );

        let err = verify_pickup(&state, &receipt.pickup_code).unwrap_err();
        assert!(matches!(err.code, ErrorCode::AlreadyPickedUp));
        assert_eq!(err.message, "This package has already been picked up");
    }

    #[test]
    fn test_dropoff_at_unknown_business() {
        let state = registry();
        let err = notify_dropoff(&state, "1Z999AA1", "NOPE42", "Alex Rivera").unwrap_err();
        assert!(matches!(err.code, ErrorCode::NotFound));
        assert_eq!(err.message, "Business location code not recognized: NOPE42");
    }
}
