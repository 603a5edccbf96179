//! # Customer Commands
//!
//! The customer side of the kiosk: role selection, the test pickup code
//! demo, and the nearby-businesses lookup.
//!
//! ## Customer Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Pick "Customer" ──► choose_role(Customer)                             │
//! │                                                                         │
//! │  "Generate Test Pickup Code" ──► generate_test_code()                  │
//! │       └── code stored in session, shown on screen                      │
//! │                                                                         │
//! │  Type code, "Verify Pickup" ──► verify_test_pickup(entered)            │
//! │       └── trimmed, case-sensitive match against the session's code     │
//! │                                                                         │
//! │  Submit address ──► nearby_businesses(address)                         │
//! │       └── 10 random directory entries with simulated distances         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use parcel_core::directory::{local_businesses, sample_with_distances};
use parcel_core::validate_test_pickup_code;
use parcel_core::validation::validate_required;

use crate::error::ApiError;
use crate::state::{CodesState, Role, SessionState};

/// How many directory entries a customer sees per address submission.
pub const NEARBY_COUNT: usize = 10;

/// Records the visitor's role choice.
pub fn choose_role(session: &SessionState, role: Role) -> Role {
    debug!(?role, "choose_role command");
    session.with_session_mut(|s| s.role = Some(role));
    role
}

/// Issues a test pickup code and remembers it in the session.
///
/// The code is also recorded process-wide by the issuer; it never expires
/// and may be verified any number of times.
pub fn generate_test_code(codes: &CodesState, session: &SessionState) -> String {
    debug!("generate_test_code command");
    let code = codes.issue();
    session.with_session_mut(|s| s.test_code = Some(code.clone()));
    code
}

/// Outcome of a test pickup verification.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupAttempt {
    pub verified: bool,
    pub message: String,
}

/// Verifies an entered code against the session's generated test code.
///
/// Wrong codes are an expected condition, so this returns a rendered
/// attempt rather than an error.
pub fn verify_test_pickup(session: &SessionState, entered: &str) -> PickupAttempt {
    debug!("verify_test_pickup command");
    let verified = session.with_session(|s| match &s.test_code {
        Some(expected) => validate_test_pickup_code(entered, expected),
        None => false,
    });

    if verified {
        PickupAttempt {
            verified,
            message: format!("Pickup verified for code: {}", entered.trim()),
        }
    } else {
        PickupAttempt {
            verified,
            message: "Sorry, that's not a valid pickup code. Please try again!".to_string(),
        }
    }
}

/// Returns randomized nearby drop-off locations for a submitted address.
///
/// The address is only required to be non-empty - nothing is geocoded, the
/// distances are simulated. Fresh sample on every call.
pub fn nearby_businesses(codes: &CodesState, address: &str) -> Result<Vec<String>, ApiError> {
    debug!("nearby_businesses command");
    validate_required("address", address).map_err(|e| ApiError::validation(e.to_string()))?;

    let entries = codes
        .with_sampling_rng(|rng| sample_with_distances(rng, local_businesses(), NEARBY_COUNT))?;
    Ok(entries)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_role_sticks() {
        let session = SessionState::new();
        choose_role(&session, Role::Partner);
        assert_eq!(session.with_session(|s| s.role), Some(Role::Partner));
    }

    #[test]
    fn test_generate_then_verify_round_trip() {
        let codes = CodesState::with_seed(21);
        let session = SessionState::new();

        let code = generate_test_code(&codes, &session);
        assert_eq!(code.len(), 8);
        assert!(codes.was_issued(&code));

        let attempt = verify_test_pickup(&session, &format!("  {}  ", code));
        assert!(attempt.verified);
        assert_eq!(attempt.message, format!("Pickup verified for code: {}", code));
    }

    #[test]
    fn test_verify_rejects_wrong_and_missing_code() {
        let codes = CodesState::with_seed(22);
        let session = SessionState::new();

        // Nothing generated yet.
        assert!(!verify_test_pickup(&session, "ANYTHING").verified);

        let code = generate_test_code(&codes, &session);
        let wrong = verify_test_pickup(&session, &code.to_lowercase());
        assert!(!wrong.verified, "comparison must be case-sensitive");
    }

    #[test]
    fn test_nearby_businesses_requires_address() {
        let codes = CodesState::with_seed(23);
        let err = nearby_businesses(&codes, "   ").unwrap_err();
        assert_eq!(err.message, "address is required");
    }

    #[test]
    fn test_nearby_businesses_returns_ten_entries() {
        let codes = CodesState::with_seed(24);
        let entries = nearby_businesses(&codes, "12 Elm St").unwrap();
        assert_eq!(entries.len(), NEARBY_COUNT);
        assert!(entries.iter().all(|e| e.ends_with("miles away]")));
    }
}
