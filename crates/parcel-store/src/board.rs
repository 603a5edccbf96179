//! # Package Board
//!
//! The mock package collection behind the partner dashboard, partitioned by
//! lifecycle state.
//!
//! ## Board Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        PackageBoard                                     │
//! │                                                                         │
//! │  on_the_way          ready_for_pickup       picked_up                  │
//! │  ┌──────────────┐    ┌──────────────┐       ┌──────────────┐           │
//! │  │ PKG482913    │    │ PKG105577    │       │ PKG994030    │           │
//! │  │ PKG730204    │───►│ PKG482913    │──────►│ ...          │           │
//! │  │ ...          │    │ ...          │       │              │           │
//! │  └──────────────┘    └──────────────┘       └──────────────┘           │
//! │                                                                         │
//! │  • A package lives in exactly ONE container at a time                  │
//! │  • Containers keep insertion order                                     │
//! │  • move_package: remove from source, restamp, append to destination    │
//! │  • ANY from/to pair is accepted - the board deliberately keeps the     │
//! │    original system's permissiveness (no transition table); callers     │
//! │    wanting the forward path use PackageStatus::next()                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use parcel_core::codes::mock_tracking_id;
use parcel_core::{MockPackage, PackageSize, PackageStatus};

/// Fixed recipient names cycled through when seeding mock records.
const MOCK_RECIPIENTS: [&str; 10] = [
    "Alex Rivera",
    "Jordan Lee",
    "Sam Okafor",
    "Priya Natarajan",
    "Chris Dubois",
    "Taylor Kim",
    "Morgan Reyes",
    "Dana Whitfield",
    "Robin Castillo",
    "Jamie Okonkwo",
];

/// Weight bounds in pounds for generated mock packages.
const MIN_WEIGHT_LBS: f64 = 1.0;
const MAX_WEIGHT_LBS: f64 = 50.0;

// =============================================================================
// Seed Counts
// =============================================================================

/// How many mock records to seed into each container.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedCounts {
    pub on_the_way: usize,
    pub ready_for_pickup: usize,
    pub picked_up: usize,
}

impl SeedCounts {
    pub const fn uniform(count: usize) -> Self {
        SeedCounts {
            on_the_way: count,
            ready_for_pickup: count,
            picked_up: count,
        }
    }

    const fn for_status(&self, status: PackageStatus) -> usize {
        match status {
            PackageStatus::OnTheWay => self.on_the_way,
            PackageStatus::ReadyForPickup => self.ready_for_pickup,
            PackageStatus::PickedUp => self.picked_up,
        }
    }
}

impl Default for SeedCounts {
    fn default() -> Self {
        SeedCounts::uniform(5)
    }
}

// =============================================================================
// Package Board
// =============================================================================

/// Three ordered containers of mock packages, one per lifecycle state.
///
/// ## Invariant
/// A package belongs to exactly one container at a time, and each package's
/// `status` field matches the container holding it. [`move_package`]
/// maintains both.
///
/// [`move_package`]: Self::move_package
#[derive(Debug, Default)]
pub struct PackageBoard {
    on_the_way: Vec<MockPackage>,
    ready_for_pickup: Vec<MockPackage>,
    picked_up: Vec<MockPackage>,
}

impl PackageBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends freshly generated mock records to each container.
    ///
    /// Called once at startup. Deliberately NOT idempotent: a second call
    /// appends more records on top of the first batch. Callers own single
    /// invocation.
    pub fn seed<R: Rng + ?Sized>(&mut self, rng: &mut R, counts: SeedCounts) {
        for status in PackageStatus::ALL {
            for i in 0..counts.for_status(status) {
                let package = generate_mock_package(rng, status, i);
                self.container_mut(status).push(package);
            }
        }
        debug!(total = self.len(), "package board seeded");
    }

    /// Moves a package between containers by tracking id.
    ///
    /// ## Behavior
    /// - Linear search of `from` for a matching tracking id
    /// - On hit: remove from `from`, set `status = to`, refresh `updated_at`
    ///   to now, append to `to`, return `true`
    /// - On miss: return `false` with every container untouched
    ///
    /// Any from/to pair is accepted, including backwards moves and
    /// `from == to` - the original system's permissiveness, kept on purpose.
    pub fn move_package(
        &mut self,
        tracking_id: &str,
        from: PackageStatus,
        to: PackageStatus,
    ) -> bool {
        let source = self.container_mut(from);
        let Some(index) = source.iter().position(|p| p.tracking_id == tracking_id) else {
            debug!(tracking_id = %tracking_id, from = %from, "move_package: not found");
            return false;
        };

        let mut package = source.remove(index);
        package.status = to;
        package.updated_at = Utc::now();
        self.container_mut(to).push(package);

        debug!(tracking_id = %tracking_id, from = %from, to = %to, "package moved");
        true
    }

    /// Searches every container for packages whose tracking id or recipient
    /// name contains `query`, case-insensitively.
    ///
    /// ## Ordering
    /// Containers are scanned `on_the_way`, `ready_for_pickup`, `picked_up`;
    /// ties within a container keep insertion order. A trimmed-empty query
    /// returns an empty result - callers distinguish "no input" from "no
    /// matches" themselves.
    pub fn search(&self, query: &str) -> Vec<&MockPackage> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        PackageStatus::ALL
            .iter()
            .flat_map(|status| self.container(*status))
            .filter(|p| {
                p.tracking_id.to_lowercase().contains(&needle)
                    || p.name.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// The packages currently in `status`, in insertion order.
    pub fn packages(&self, status: PackageStatus) -> &[MockPackage] {
        self.container(status)
    }

    /// Total number of packages across all containers.
    pub fn len(&self) -> usize {
        self.on_the_way.len() + self.ready_for_pickup.len() + self.picked_up.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn container(&self, status: PackageStatus) -> &Vec<MockPackage> {
        match status {
            PackageStatus::OnTheWay => &self.on_the_way,
            PackageStatus::ReadyForPickup => &self.ready_for_pickup,
            PackageStatus::PickedUp => &self.picked_up,
        }
    }

    fn container_mut(&mut self, status: PackageStatus) -> &mut Vec<MockPackage> {
        match status {
            PackageStatus::OnTheWay => &mut self.on_the_way,
            PackageStatus::ReadyForPickup => &mut self.ready_for_pickup,
            PackageStatus::PickedUp => &mut self.picked_up,
        }
    }
}

/// Generates one mock record for `status`.
///
/// Names cycle through the fixed list so seeded boards stay readable; size
/// and weight are random, weight rounded to one decimal to match the
/// displayed precision.
fn generate_mock_package<R: Rng + ?Sized>(
    rng: &mut R,
    status: PackageStatus,
    index: usize,
) -> MockPackage {
    let weight = rng.gen_range(MIN_WEIGHT_LBS..=MAX_WEIGHT_LBS);
    MockPackage {
        id: Uuid::new_v4().to_string(),
        tracking_id: mock_tracking_id(rng),
        name: MOCK_RECIPIENTS[index % MOCK_RECIPIENTS.len()].to_string(),
        size: *PackageSize::ALL.choose(rng).unwrap_or(&PackageSize::Medium),
        weight_lbs: (weight * 10.0).round() / 10.0,
        status,
        updated_at: Utc::now(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_board() -> PackageBoard {
        let mut rng = StdRng::seed_from_u64(99);
        let mut board = PackageBoard::new();
        board.seed(&mut rng, SeedCounts::uniform(5));
        board
    }

    #[test]
    fn test_seed_fills_each_container_with_matching_status() {
        let board = seeded_board();
        assert_eq!(board.len(), 15);
        for status in PackageStatus::ALL {
            let packages = board.packages(status);
            assert_eq!(packages.len(), 5);
            assert!(packages.iter().all(|p| p.status == status));
            assert!(packages.iter().all(|p| p.tracking_id.starts_with("PKG")));
            assert!(packages
                .iter()
                .all(|p| (1.0..=50.0).contains(&p.weight_lbs)));
        }
    }

    #[test]
    fn test_seed_is_not_idempotent_by_design() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut board = PackageBoard::new();
        board.seed(&mut rng, SeedCounts::uniform(3));
        board.seed(&mut rng, SeedCounts::uniform(3));
        assert_eq!(board.len(), 18);
    }

    #[test]
    fn test_move_package_transfers_and_restamps() {
        let mut board = seeded_board();
        let tracking_id = board.packages(PackageStatus::OnTheWay)[2]
            .tracking_id
            .clone();
        let before = board.packages(PackageStatus::OnTheWay)[2].updated_at;

        let moved = board.move_package(
            &tracking_id,
            PackageStatus::OnTheWay,
            PackageStatus::ReadyForPickup,
        );
        assert!(moved);

        assert_eq!(board.packages(PackageStatus::OnTheWay).len(), 4);
        let ready = board.packages(PackageStatus::ReadyForPickup);
        assert_eq!(ready.len(), 6);

        // Appended at the destination's tail, with refreshed status/stamp.
        let package = ready.last().unwrap();
        assert_eq!(package.tracking_id, tracking_id);
        assert_eq!(package.status, PackageStatus::ReadyForPickup);
        assert!(package.updated_at >= before);
    }

    #[test]
    fn test_move_package_missing_id_changes_nothing() {
        let mut board = seeded_board();
        let on_the_way_before: Vec<String> = board
            .packages(PackageStatus::OnTheWay)
            .iter()
            .map(|p| p.tracking_id.clone())
            .collect();
        let ready_before: Vec<String> = board
            .packages(PackageStatus::ReadyForPickup)
            .iter()
            .map(|p| p.tracking_id.clone())
            .collect();

        let moved = board.move_package(
            "PKG000000",
            PackageStatus::OnTheWay,
            PackageStatus::ReadyForPickup,
        );
        assert!(!moved);

        let on_the_way_after: Vec<String> = board
            .packages(PackageStatus::OnTheWay)
            .iter()
            .map(|p| p.tracking_id.clone())
            .collect();
        let ready_after: Vec<String> = board
            .packages(PackageStatus::ReadyForPickup)
            .iter()
            .map(|p| p.tracking_id.clone())
            .collect();
        assert_eq!(on_the_way_before, on_the_way_after);
        assert_eq!(ready_before, ready_after);
    }

    #[test]
    fn test_move_package_allows_backward_moves() {
        // Permissiveness kept from the original: picked_up → on_the_way works.
        let mut board = seeded_board();
        let tracking_id = board.packages(PackageStatus::PickedUp)[0]
            .tracking_id
            .clone();

        assert!(board.move_package(
            &tracking_id,
            PackageStatus::PickedUp,
            PackageStatus::OnTheWay
        ));
        assert_eq!(board.packages(PackageStatus::OnTheWay).len(), 6);
        assert_eq!(board.packages(PackageStatus::PickedUp).len(), 4);
    }

    #[test]
    fn test_search_is_case_insensitive_and_container_ordered() {
        let board = seeded_board();
        let matches = board.search("pkg");
        assert_eq!(matches.len(), 15);

        // Results come back on_the_way, then ready_for_pickup, then picked_up.
        let statuses: Vec<PackageStatus> = matches.iter().map(|p| p.status).collect();
        let mut sorted = statuses.clone();
        sorted.sort_by_key(|s| PackageStatus::ALL.iter().position(|x| x == s));
        assert_eq!(statuses, sorted);
    }

    #[test]
    fn test_search_matches_names_too() {
        let board = seeded_board();
        let matches = board.search("rivera");
        assert!(!matches.is_empty());
        assert!(matches.iter().all(|p| p.name.contains("Rivera")));
    }

    #[test]
    fn test_search_empty_query_returns_nothing() {
        let board = seeded_board();
        assert!(board.search("").is_empty());
        assert!(board.search("   ").is_empty());
    }

    #[test]
    fn test_search_prefix_by_tracking_id() {
        let board = seeded_board();
        let full = board.packages(PackageStatus::OnTheWay)[0]
            .tracking_id
            .clone();
        // "PKG1" style prefix should hit every id starting with those digits.
        let prefix = &full[..4];
        let matches = board.search(&prefix.to_lowercase());
        assert!(matches.iter().any(|p| p.tracking_id == full));
        assert!(matches
            .iter()
            .all(|p| p.tracking_id.to_lowercase().contains(&prefix.to_lowercase())
                || p.name.to_lowercase().contains(&prefix.to_lowercase())));
    }
}
