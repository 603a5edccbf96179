//! # Codes State
//!
//! The test pickup code issuer for the customer demo flow, plus the RNG
//! used for directory sampling.
//!
//! The issuer is process-wide on purpose: every issued test code stays
//! valid for the process lifetime regardless of which session asked for it.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::SeedableRng;

use parcel_core::TestCodeIssuer;

struct CodesInner {
    issuer: TestCodeIssuer,
    rng: StdRng,
}

/// Kiosk-managed code issuer state.
#[derive(Clone)]
pub struct CodesState {
    inner: Arc<Mutex<CodesInner>>,
}

impl CodesState {
    /// Creates an issuer with an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates an issuer with a fixed seed, for deterministic tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        CodesState {
            inner: Arc::new(Mutex::new(CodesInner {
                issuer: TestCodeIssuer::new(),
                rng,
            })),
        }
    }

    /// Issues a fresh test pickup code and records it.
    pub fn issue(&self) -> String {
        let mut inner = self.inner.lock().expect("Codes mutex poisoned");
        let CodesInner { issuer, rng } = &mut *inner;
        issuer.issue(rng)
    }

    /// Whether a code has been issued by this process.
    pub fn was_issued(&self, code: &str) -> bool {
        let inner = self.inner.lock().expect("Codes mutex poisoned");
        inner.issuer.contains(code)
    }

    /// Number of distinct test codes issued so far.
    pub fn issued_count(&self) -> usize {
        let inner = self.inner.lock().expect("Codes mutex poisoned");
        inner.issuer.len()
    }

    /// Executes a function with the shared sampling RNG.
    pub fn with_sampling_rng<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut StdRng) -> R,
    {
        let mut inner = self.inner.lock().expect("Codes mutex poisoned");
        f(&mut inner.rng)
    }
}

impl Default for CodesState {
    fn default() -> Self {
        Self::new()
    }
}
