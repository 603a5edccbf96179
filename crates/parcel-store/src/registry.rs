//! # Business Registry
//!
//! Registrations keyed by business code, plus the drop-off ledger keyed by
//! pickup code.
//!
//! ## Partner Flows
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Partner Flows                                     │
//! │                                                                         │
//! │  Register / Sign up                                                    │
//! │    form ──► validate (collect ALL errors) ──► issue 6-char code ──►    │
//! │    store registration ──► return it                                    │
//! │                                                                         │
//! │  Notify drop-off                                                       │
//! │    business code known? ──► tracking + recipient present? ──►          │
//! │    issue 8-char pickup code ──► ledger gets ONE record,                │
//! │    picked_up = false ──► receipt with the pickup code                  │
//! │                                                                         │
//! │  Verify pickup                                                         │
//! │    code in ledger? ──► already claimed? ──► flip picked_up once ──►    │
//! │    confirmation with recipient + tracking                              │
//! │                                                                         │
//! │  Code issuance runs a bounded generate-and-check loop, so a freshly    │
//! │  issued code never collides with one already in the map.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use parcel_core::codes::{generate_code_from, CODE_ALPHABET};
use parcel_core::validation::{validate_required, RegistrationForm, SignupForm};
use parcel_core::{
    BusinessRegistration, DropoffPackage, FieldErrors, BUSINESS_CODE_LEN, PICKUP_CODE_LEN,
};

use crate::error::{StoreError, StoreResult};
use crate::MAX_CODE_ATTEMPTS;

// =============================================================================
// Receipts
// =============================================================================

/// What a partner gets back after recording a drop-off.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropoffReceipt {
    /// The freshly issued 8-character pickup code for the recipient.
    pub pickup_code: String,
    pub tracking_number: String,
    pub recipient_name: String,
}

impl DropoffReceipt {
    /// User-facing confirmation line.
    pub fn message(&self) -> String {
        format!(
            "Drop-off recorded. Pickup Code for recipient: {}",
            self.pickup_code
        )
    }
}

/// What a successful pickup verification returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupConfirmation {
    pub recipient_name: String,
    pub tracking_number: String,
}

impl PickupConfirmation {
    /// User-facing confirmation line.
    pub fn message(&self) -> String {
        format!(
            "Pickup verified for {} (Tracking: {}).",
            self.recipient_name, self.tracking_number
        )
    }
}

// =============================================================================
// Registry
// =============================================================================

/// The business registry and drop-off ledger.
///
/// An explicitly constructed store: no ambient globals, `&mut self` for
/// every mutation, so each test builds its own instance and the app layer
/// decides how to share one.
#[derive(Debug)]
pub struct BusinessRegistry {
    /// Alphabet used for issued codes. The full A-Z0-9 set in production;
    /// tests shrink it to force collisions.
    alphabet: &'static [u8],
    /// Registrations keyed by business code.
    businesses: HashMap<String, BusinessRegistration>,
    /// Drop-off ledger keyed by pickup code.
    dropoffs: HashMap<String, DropoffPackage>,
}

impl BusinessRegistry {
    /// Creates an empty registry using the standard code alphabet.
    pub fn new() -> Self {
        Self::with_alphabet(CODE_ALPHABET)
    }

    /// Creates an empty registry over a custom code alphabet.
    ///
    /// A one-character alphabet makes the second issuance of a code collide
    /// every time, which is how the exhaustion path gets tested.
    pub fn with_alphabet(alphabet: &'static [u8]) -> Self {
        BusinessRegistry {
            alphabet,
            businesses: HashMap::new(),
            dropoffs: HashMap::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Registration & sign-in
    // -------------------------------------------------------------------------

    /// Registers a business via the short register-a-location form.
    ///
    /// ## Errors
    /// - [`StoreError::InvalidForm`] with every field problem collected
    /// - [`StoreError::CodeSpaceExhausted`] if code issuance keeps colliding
    pub fn register<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        form: &RegistrationForm,
    ) -> StoreResult<BusinessRegistration> {
        form.validate().map_err(StoreError::InvalidForm)?;
        self.insert_registration(rng, &form.name, &form.address, None)
    }

    /// Registers a business via the long sign-up/contract form.
    ///
    /// Same code issuance as [`register`](Self::register); additionally keeps
    /// the contact email on the registration. The password is checked by the
    /// form's policy and then discarded - this demo stores no credentials.
    pub fn sign_up<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        form: &SignupForm,
    ) -> StoreResult<BusinessRegistration> {
        form.validate().map_err(StoreError::InvalidForm)?;
        self.insert_registration(
            rng,
            &form.business_name,
            &form.address,
            Some(form.email.trim().to_string()),
        )
    }

    fn insert_registration<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        name: &str,
        address: &str,
        contact_email: Option<String>,
    ) -> StoreResult<BusinessRegistration> {
        let code = issue_code(rng, self.alphabet, BUSINESS_CODE_LEN, |c| {
            self.businesses.contains_key(c)
        })?;

        let registration = BusinessRegistration {
            id: Uuid::new_v4().to_string(),
            code: code.clone(),
            name: name.trim().to_string(),
            address: address.trim().to_string(),
            contact_email,
            registered_at: Utc::now(),
        };

        debug!(code = %code, name = %registration.name, "business registered");
        self.businesses.insert(code, registration.clone());
        Ok(registration)
    }

    /// Signs a partner in by business code.
    ///
    /// No password check: real identity verification is out of scope, the
    /// code IS the credential in this demo.
    pub fn sign_in(&self, code: &str) -> StoreResult<&BusinessRegistration> {
        let code = code.trim();
        self.businesses
            .get(code)
            .ok_or_else(|| StoreError::UnknownBusinessCode {
                code: code.to_string(),
            })
    }

    /// Looks up a registration by business code.
    pub fn find(&self, code: &str) -> Option<&BusinessRegistration> {
        self.businesses.get(code.trim())
    }

    /// Number of registered businesses.
    pub fn business_count(&self) -> usize {
        self.businesses.len()
    }

    // -------------------------------------------------------------------------
    // Drop-off & pickup
    // -------------------------------------------------------------------------

    /// Records a drop-off at a registered business.
    ///
    /// ## Check Order
    /// 1. The business code must match a registration (checked first, as the
    ///    original flow did) - on failure NO record is created
    /// 2. Tracking number and recipient name must be non-empty
    ///
    /// On success exactly one ledger record is created with
    /// `picked_up = false`, keyed by a fresh 8-character pickup code.
    pub fn notify_dropoff<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        tracking: &str,
        business_code: &str,
        recipient: &str,
    ) -> StoreResult<DropoffReceipt> {
        let business_code = business_code.trim();
        if !self.businesses.contains_key(business_code) {
            return Err(StoreError::UnknownBusinessCode {
                code: business_code.to_string(),
            });
        }

        let mut errors = FieldErrors::new();
        errors.check("tracking", validate_required("tracking number", tracking));
        errors.check("recipient", validate_required("recipient name", recipient));
        errors.into_result().map_err(StoreError::InvalidForm)?;

        let pickup_code = issue_code(rng, self.alphabet, PICKUP_CODE_LEN, |c| {
            self.dropoffs.contains_key(c)
        })?;

        let package = DropoffPackage {
            id: Uuid::new_v4().to_string(),
            pickup_code: pickup_code.clone(),
            tracking_number: tracking.trim().to_string(),
            recipient_name: recipient.trim().to_string(),
            business_code: business_code.to_string(),
            picked_up: false,
            dropped_off_at: Utc::now(),
        };

        let receipt = DropoffReceipt {
            pickup_code: pickup_code.clone(),
            tracking_number: package.tracking_number.clone(),
            recipient_name: package.recipient_name.clone(),
        };

        debug!(
            pickup_code = %pickup_code,
            business_code = %business_code,
            "drop-off recorded"
        );
        self.dropoffs.insert(pickup_code, package);
        Ok(receipt)
    }

    /// Verifies a pickup code and claims the package.
    ///
    /// Flips `picked_up` from `false` to `true` exactly once. A second call
    /// with the same code is a no-op surfaced as
    /// [`StoreError::AlreadyPickedUp`]; the record is left unchanged.
    pub fn verify_pickup(&mut self, pickup_code: &str) -> StoreResult<PickupConfirmation> {
        let pickup_code = pickup_code.trim();
        let package =
            self.dropoffs
                .get_mut(pickup_code)
                .ok_or_else(|| StoreError::UnknownPickupCode {
                    code: pickup_code.to_string(),
                })?;

        if package.picked_up {
            return Err(StoreError::AlreadyPickedUp {
                recipient: package.recipient_name.clone(),
            });
        }

        package.picked_up = true;
        debug!(pickup_code = %pickup_code, recipient = %package.recipient_name, "pickup verified");
        Ok(PickupConfirmation {
            recipient_name: package.recipient_name.clone(),
            tracking_number: package.tracking_number.clone(),
        })
    }

    /// Looks up a ledger record by pickup code.
    pub fn find_dropoff(&self, pickup_code: &str) -> Option<&DropoffPackage> {
        self.dropoffs.get(pickup_code.trim())
    }

    /// Number of recorded drop-offs.
    pub fn dropoff_count(&self) -> usize {
        self.dropoffs.len()
    }
}

impl Default for BusinessRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Code Issuance
// =============================================================================

/// Generates a code that `taken` does not already know, giving up after
/// [`MAX_CODE_ATTEMPTS`] collisions.
///
/// With the full alphabet the collision probability per attempt is on the
/// order of registrations / 36^length, so the loop effectively runs once.
fn issue_code<R: Rng + ?Sized>(
    rng: &mut R,
    alphabet: &[u8],
    length: usize,
    taken: impl Fn(&str) -> bool,
) -> StoreResult<String> {
    for _ in 0..MAX_CODE_ATTEMPTS {
        let code = generate_code_from(rng, alphabet, length);
        if !taken(&code) {
            return Ok(code);
        }
    }
    Err(StoreError::CodeSpaceExhausted {
        length,
        attempts: MAX_CODE_ATTEMPTS,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
