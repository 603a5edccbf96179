//! # Registry State
//!
//! Shared handle to the business registry plus the RNG that issues its
//! codes.
//!
//! ## Thread Safety
//! `Arc<Mutex<_>>` because commands can run from any thread and every
//! registration/drop-off is a read-modify-write over the maps. The RNG
//! lives inside the same lock so an issuance never interleaves with the
//! membership check it depends on.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::SeedableRng;

use parcel_store::BusinessRegistry;

struct RegistryInner {
    registry: BusinessRegistry,
    rng: StdRng,
}

/// Kiosk-managed registry state.
#[derive(Clone)]
pub struct RegistryState {
    inner: Arc<Mutex<RegistryInner>>,
}

impl RegistryState {
    /// Creates an empty registry with an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates an empty registry with a fixed seed, for deterministic tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        RegistryState {
            inner: Arc::new(Mutex::new(RegistryInner {
                registry: BusinessRegistry::new(),
                rng,
            })),
        }
    }

    /// Executes a function with read access to the registry.
    pub fn with_registry<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BusinessRegistry) -> R,
    {
        let inner = self.inner.lock().expect("Registry mutex poisoned");
        f(&inner.registry)
    }

    /// Executes a function with write access to the registry and its RNG.
    pub fn with_registry_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BusinessRegistry, &mut StdRng) -> R,
    {
        let mut inner = self.inner.lock().expect("Registry mutex poisoned");
        let RegistryInner { registry, rng } = &mut *inner;
        f(registry, rng)
    }
}

impl Default for RegistryState {
    fn default() -> Self {
        Self::new()
    }
}
