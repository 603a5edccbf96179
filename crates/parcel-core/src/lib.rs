//! # parcel-core: Pure Business Logic for ParcelPoint
//!
//! This crate is the **heart** of ParcelPoint. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      ParcelPoint Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation Layer (external)                  │   │
//! │  │    Role Picker ──► Pickup Card ──► Partner Forms ──► Dashboard │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ function calls                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Kiosk Commands (apps/kiosk)                  │   │
//! │  │    register_business, notify_dropoff, move_package, etc.       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ parcel-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   codes   │  │ directory │  │ validation│  │   │
//! │  │   │  Package  │  │ generate  │  │  sampler  │  │   rules   │  │   │
//! │  │   │  Status   │  │  issuer   │  │ distances │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • CALLER-SUPPLIED RNG      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 parcel-store (In-Memory Stores)                 │   │
//! │  │           Business registry, drop-off ledger, package board     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (BusinessRegistration, MockPackage, PackageStatus)
//! - [`codes`] - Alphanumeric code generation and the test pickup code issuer
//! - [`directory`] - Local business directory and the randomized distance sampler
//! - [`validation`] - Form and field validation with collected errors
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Injected Randomness**: Nothing calls `thread_rng()` internally - every
//!    random choice flows through a caller-supplied `impl Rng`, so tests seed
//!    a `StdRng` and get deterministic output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: Expected bad input returns typed errors or a
//!    field→message map, never panics
//! 4. **Instants, Not Strings**: Timestamps are `DateTime<Utc>` internally and
//!    become display strings only at the presentation boundary

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codes;
pub mod directory;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use parcel_core::PackageStatus` instead of
// `use parcel_core::types::PackageStatus`

pub use codes::{validate_test_pickup_code, TestCodeIssuer};
pub use error::{CoreError, ValidationError};
pub use types::*;
pub use validation::FieldErrors;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Length of a business location code.
///
/// Six characters over a 36-character alphabet gives 36^6 (~2.2 billion)
/// possible codes - plenty for a demo-scale registry.
pub const BUSINESS_CODE_LEN: usize = 6;

/// Length of a pickup code handed to a recipient.
pub const PICKUP_CODE_LEN: usize = 8;

/// Minimum password length accepted at partner sign-up.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Minimum overall length for an email address to be considered plausible.
///
/// Together with the `@`/`.` checks this is a deliberately loose shape test,
/// not an RFC 5322 parser. A `true` result is not proof of a deliverable
/// address.
pub const MIN_EMAIL_LEN: usize = 5;
