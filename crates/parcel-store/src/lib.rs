//! # parcel-store: In-Memory Stores for ParcelPoint
//!
//! Owns all mutable state: the business registry with its drop-off ledger,
//! and the mock package board behind the partner dashboard.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    parcel-store (THIS CRATE)                            │
//! │                                                                         │
//! │  ┌───────────────────────────┐    ┌───────────────────────────────┐    │
//! │  │     BusinessRegistry      │    │         PackageBoard          │    │
//! │  │  ───────────────────────  │    │  ───────────────────────────  │    │
//! │  │  registrations by code    │    │  on_the_way:       Vec<...>   │    │
//! │  │  drop-offs by pickup code │    │  ready_for_pickup: Vec<...>   │    │
//! │  │                           │    │  picked_up:        Vec<...>   │    │
//! │  │  register / sign_up       │    │                               │    │
//! │  │  sign_in / find           │    │  seed / move_package          │    │
//! │  │  notify_dropoff           │    │  search / packages            │    │
//! │  │  verify_pickup            │    │                               │    │
//! │  └───────────────────────────┘    └───────────────────────────────┘    │
//! │                                                                         │
//! │  Both take &mut self - no interior mutability, no globals. The app     │
//! │  layer wraps each in Arc<Mutex<_>> for its own concurrency needs.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! Expected bad input (missing fields, wrong codes, already-claimed
//! packages) comes back as a typed [`StoreError`]; nothing here panics for
//! user-correctable conditions. Each operation either fully applies its
//! effect or applies none of it.

pub mod board;
pub mod error;
pub mod registry;

pub use board::{PackageBoard, SeedCounts};
pub use error::{StoreError, StoreResult};
pub use registry::{BusinessRegistry, DropoffReceipt, PickupConfirmation};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum generate-and-check attempts before code issuance gives up.
///
/// Over the real 36^6 / 36^8 code spaces this limit is unreachable in
/// practice; it exists so a shrunk-alphabet test can exercise the collision
/// path deterministically instead of looping forever.
pub const MAX_CODE_ATTEMPTS: usize = 16;
