//! # Kiosk Configuration
//!
//! Startup configuration with sensible demo defaults. Read-only after
//! initialization, so no mutex.
//!
//! Core behavior is NOT governed by configuration: the business directory
//! and mock recipient lists are fixed constants in the library crates.

use serde::{Deserialize, Serialize};

use parcel_store::SeedCounts;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KioskConfig {
    /// Display name shown in the kiosk banner.
    pub store_name: String,

    /// How many mock packages to seed into each dashboard container.
    pub seed_counts: SeedCounts,
}

impl Default for KioskConfig {
    fn default() -> Self {
        KioskConfig {
            store_name: "ParcelPoint Community Pickup".to_string(),
            seed_counts: SeedCounts::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seeds_five_per_container() {
        let config = KioskConfig::default();
        assert_eq!(config.seed_counts.on_the_way, 5);
        assert_eq!(config.seed_counts.ready_for_pickup, 5);
        assert_eq!(config.seed_counts.picked_up, 5);
    }
}
