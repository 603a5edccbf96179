//! # Code Generation
//!
//! Alphanumeric code generation for business codes, pickup codes, and mock
//! tracking ids, plus the test pickup code issuer used by the customer demo
//! flow.
//!
//! ## Code Kinds
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Code Kinds                                      │
//! │                                                                         │
//! │  Business code   6 chars  A-Z0-9   sign-in key for a location          │
//! │  Pickup code     8 chars  A-Z0-9   handed to a recipient               │
//! │  Tracking id     PKG + 6 digits    mock dashboard records              │
//! │                                                                         │
//! │  None of these are cryptographically secure. Uniqueness is NOT         │
//! │  enforced at this level - the store layer runs a generate-and-check    │
//! │  retry loop where it matters.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Injected Randomness
//! Every function takes `&mut impl Rng`. Production passes a
//! `StdRng::from_entropy()`; tests pass `StdRng::seed_from_u64(n)` and get
//! reproducible codes.

use std::collections::HashSet;

use rand::Rng;

use crate::{BUSINESS_CODE_LEN, PICKUP_CODE_LEN};

/// The 36-character code alphabet: A-Z then 0-9.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Digits used for mock tracking ids.
const DIGITS: &[u8] = b"0123456789";

// =============================================================================
// Generators
// =============================================================================

/// Generates a code of `length` characters drawn independently and uniformly
/// from `alphabet`.
///
/// This is the primitive the specialized generators build on. It is exposed
/// so collision handling can be exercised against a deliberately tiny
/// alphabet in tests.
pub fn generate_code_from<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], length: usize) -> String {
    (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

/// Generates a code of `length` characters from the standard A-Z0-9 alphabet.
///
/// ## Example
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
/// use parcel_core::codes::generate_code;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let code = generate_code(&mut rng, 8);
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
/// ```
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    generate_code_from(rng, CODE_ALPHABET, length)
}

/// Generates a 6-character business location code.
pub fn business_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    generate_code(rng, BUSINESS_CODE_LEN)
}

/// Generates an 8-character pickup code.
pub fn pickup_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    generate_code(rng, PICKUP_CODE_LEN)
}

/// Generates a mock tracking id: `"PKG"` followed by 6 random digits.
pub fn mock_tracking_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("PKG{}", generate_code_from(rng, DIGITS, 6))
}

// =============================================================================
// Test Pickup Code Issuer
// =============================================================================

/// Issues throwaway pickup codes for the customer "test pickup" demo flow
/// and remembers every code it has handed out.
///
/// ## Semantics
/// - No expiry: an issued code stays valid for the process lifetime
/// - No single-use enforcement: a code may be verified any number of times
/// - Codes are compared by trimmed, case-sensitive equality
#[derive(Debug, Default)]
pub struct TestCodeIssuer {
    issued: HashSet<String>,
}

impl TestCodeIssuer {
    /// Creates an issuer with no codes outstanding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a fresh 8-character code and records it as issued.
    pub fn issue<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        let code = pickup_code(rng);
        self.issued.insert(code.clone());
        code
    }

    /// Whether `code` (trimmed) has been issued by this issuer.
    pub fn contains(&self, code: &str) -> bool {
        self.issued.contains(code.trim())
    }

    /// Number of distinct codes issued so far.
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Compares an entered pickup code against the expected one.
///
/// Both sides are trimmed of leading/trailing whitespace, then compared
/// exactly (case-sensitive). `"AB"` never matches `"ab"`. An empty entry
/// against an empty expectation does match; callers distinguish "no code
/// generated yet" before calling.
pub fn validate_test_pickup_code(entered: &str, expected: &str) -> bool {
    entered.trim() == expected.trim()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_code_length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(1);
        for n in [0, 1, 6, 8, 32] {
            let code = generate_code(&mut rng, n);
            assert_eq!(code.len(), n);
            assert!(code
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(generate_code(&mut a, 8), generate_code(&mut b, 8));
        assert_eq!(business_code(&mut a), business_code(&mut b));
    }

    #[test]
    fn test_mock_tracking_id_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let id = mock_tracking_id(&mut rng);
        assert_eq!(id.len(), 9);
        assert!(id.starts_with("PKG"));
        assert!(id[3..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_issuer_records_codes() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut issuer = TestCodeIssuer::new();
        assert!(issuer.is_empty());

        let code = issuer.issue(&mut rng);
        assert_eq!(code.len(), 8);
        assert!(issuer.contains(&code));
        assert!(issuer.contains(&format!("  {}  ", code)));
        assert_eq!(issuer.len(), 1);
    }

    #[test]
    fn test_validate_trims_both_sides() {
        assert!(validate_test_pickup_code("  ABC12345 ", "ABC12345"));
        assert!(validate_test_pickup_code("ABC12345", " ABC12345\n"));
    }

    #[test]
    fn test_validate_is_case_sensitive() {
        assert!(!validate_test_pickup_code("AB", "ab"));
        assert!(validate_test_pickup_code("ab", "ab"));
    }

    #[test]
    fn test_validate_reflexive_after_trim() {
        for x in ["", "   ", "ABCDEF12", " code "] {
            assert!(validate_test_pickup_code(x, x));
        }
    }
}
