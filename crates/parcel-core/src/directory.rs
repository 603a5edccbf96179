//! # Business Directory
//!
//! The fixed list of local drop-off businesses and the randomized distance
//! sampler shown to customers after they submit an address.
//!
//! ## How Sampling Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Customer submits address                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sample_with_distances(rng, local_businesses(), 10)                    │
//! │       │                                                                 │
//! │       ├── 10 distinct names, chosen without replacement                │
//! │       ├── each gets a distance uniform in [0.5, 10.0] miles            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ["Corner Market [3.2 miles away]", "Elm Street Pharmacy [0.7 ...]"]   │
//! │                                                                         │
//! │  No geocoding happens: the submitted address only gates the flow,      │
//! │  distances are simulated. Fresh sample and distances on every call.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::CoreError;

/// Distance bounds in miles for the simulated "miles away" figure.
pub const MIN_DISTANCE_MILES: f64 = 0.5;
pub const MAX_DISTANCE_MILES: f64 = 10.0;

/// Fixed reference list of local businesses.
///
/// Order-stable, used for deterministic testing. 25 entries.
const LOCAL_BUSINESSES: [&str; 25] = [
    "Corner Market",
    "Elm Street Pharmacy",
    "Riverside Hardware",
    "Maple Leaf Bakery",
    "Sunrise Laundromat",
    "Oakwood Books",
    "Harbor Coffee House",
    "Lakeside Florist",
    "Pine Hill Grocery",
    "Cedar Point Deli",
    "Willow Bend Tailor",
    "Juniper Pet Supply",
    "Granite Fitness",
    "Birchwood Stationery",
    "Foxglove Apothecary",
    "Stonebridge Cyclery",
    "Hilltop Diner",
    "Magnolia Dry Cleaners",
    "Clearwater Print Shop",
    "Ironside Locksmith",
    "Bluebird Toy Store",
    "Copper Kettle Tea Room",
    "Sycamore Shoe Repair",
    "Northgate Newsstand",
    "Meadowlark Music",
];

/// Returns the fixed reference list of local business names.
pub fn local_businesses() -> &'static [&'static str] {
    &LOCAL_BUSINESSES
}

/// Samples `count` distinct businesses and attaches simulated distances.
///
/// ## Behavior
/// - `count` names are chosen without replacement from `names`
/// - Each entry is formatted `"Name [D.D miles away]"` with the distance
///   drawn uniformly from [0.5, 10.0] and shown to one decimal place
/// - Every call produces a fresh sample and fresh distances
///
/// ## Errors
/// [`CoreError::SampleTooLarge`] when `count` exceeds `names.len()`.
pub fn sample_with_distances<R: Rng + ?Sized>(
    rng: &mut R,
    names: &[&str],
    count: usize,
) -> Result<Vec<String>, CoreError> {
    if count > names.len() {
        return Err(CoreError::SampleTooLarge {
            requested: count,
            available: names.len(),
        });
    }

    let chosen: Vec<&str> = names.choose_multiple(rng, count).copied().collect();
    Ok(chosen
        .into_iter()
        .map(|name| {
            let distance = rng.gen_range(MIN_DISTANCE_MILES..=MAX_DISTANCE_MILES);
            format!("{} [{:.1} miles away]", name, distance)
        })
        .collect())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_directory_is_stable() {
        assert_eq!(local_businesses().len(), 25);
        assert_eq!(local_businesses()[0], "Corner Market");
        assert_eq!(local_businesses()[24], "Meadowlark Music");
    }

    #[test]
    fn test_sample_returns_distinct_formatted_entries() {
        let mut rng = StdRng::seed_from_u64(11);
        let entries = sample_with_distances(&mut rng, local_businesses(), 10).unwrap();
        assert_eq!(entries.len(), 10);

        let mut seen = HashSet::new();
        for entry in &entries {
            // "Name [D.D miles away]"
            let open = entry.rfind(" [").expect("missing bracket");
            let name = &entry[..open];
            assert!(local_businesses().contains(&name), "unknown name {name}");
            assert!(seen.insert(name.to_string()), "duplicate name {name}");

            let suffix = &entry[open + 2..];
            let miles = suffix
                .strip_suffix(" miles away]")
                .expect("missing miles suffix");
            let value: f64 = miles.parse().expect("distance not a number");
            assert!((MIN_DISTANCE_MILES..=MAX_DISTANCE_MILES).contains(&value));
            // one decimal place
            assert_eq!(miles.split('.').nth(1).map(str::len), Some(1));
        }
    }

    #[test]
    fn test_sample_full_list_is_permutation() {
        let mut rng = StdRng::seed_from_u64(5);
        let entries = sample_with_distances(&mut rng, local_businesses(), 25).unwrap();
        assert_eq!(entries.len(), 25);
    }

    #[test]
    fn test_oversized_sample_is_an_error() {
        let mut rng = StdRng::seed_from_u64(2);
        let err = sample_with_distances(&mut rng, local_businesses(), 26).unwrap_err();
        assert!(matches!(
            err,
            CoreError::SampleTooLarge {
                requested: 26,
                available: 25
            }
        ));
    }

    #[test]
    fn test_seeded_sampling_is_deterministic() {
        let mut a = StdRng::seed_from_u64(77);
        let mut b = StdRng::seed_from_u64(77);
        assert_eq!(
            sample_with_distances(&mut a, local_businesses(), 10).unwrap(),
            sample_with_distances(&mut b, local_businesses(), 10).unwrap()
        );
    }
}
