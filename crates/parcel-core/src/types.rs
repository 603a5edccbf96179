//! # Domain Types
//!
//! Core domain types used throughout ParcelPoint.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐  ┌─────────────────────┐  ┌────────────────┐  │
//! │  │ BusinessRegistration│  │   DropoffPackage    │  │  MockPackage   │  │
//! │  │  ─────────────────  │  │  ─────────────────  │  │  ────────────  │  │
//! │  │  id (UUID)          │  │  id (UUID)          │  │  id (UUID)     │  │
//! │  │  code (business)    │  │  pickup_code (key)  │  │  tracking_id   │  │
//! │  │  name, address      │  │  tracking_number    │  │  name, size    │  │
//! │  │  contact_email      │  │  business_code (FK) │  │  status        │  │
//! │  │  registered_at      │  │  picked_up (bool)   │  │  updated_at    │  │
//! │  └─────────────────────┘  └─────────────────────┘  └────────────────┘  │
//! │                                                                         │
//! │  ┌─────────────────────┐  ┌─────────────────────┐                      │
//! │  │   PackageStatus     │  │    PackageSize      │                      │
//! │  │  ─────────────────  │  │  ─────────────────  │                      │
//! │  │  OnTheWay           │  │  Small              │                      │
//! │  │  ReadyForPickup     │  │  Medium             │                      │
//! │  │  PickedUp           │  │  Large              │                      │
//! │  └─────────────────────┘  └─────────────────────┘                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every stored record has:
//! - `id`: UUID v4 - immutable, for record identity
//! - Business key: (business code, pickup code, tracking id) - human-readable,
//!   what users actually type in

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// Package Status
// =============================================================================

/// Lifecycle state of a mock package on the partner dashboard.
///
/// ## State Flow
/// ```text
/// OnTheWay ──► ReadyForPickup ──► PickedUp
/// ```
/// [`PackageStatus::next`] encodes the forward path. The package board itself
/// accepts any from/to pair (see `parcel-store`), preserving the original
/// system's permissiveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageStatus {
    OnTheWay,
    ReadyForPickup,
    PickedUp,
}

impl PackageStatus {
    /// All statuses in dashboard display order.
    pub const ALL: [PackageStatus; 3] = [
        PackageStatus::OnTheWay,
        PackageStatus::ReadyForPickup,
        PackageStatus::PickedUp,
    ];

    /// Returns the canonical snake_case name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PackageStatus::OnTheWay => "on_the_way",
            PackageStatus::ReadyForPickup => "ready_for_pickup",
            PackageStatus::PickedUp => "picked_up",
        }
    }

    /// Returns the next forward state, or `None` from the terminal state.
    pub const fn next(&self) -> Option<PackageStatus> {
        match self {
            PackageStatus::OnTheWay => Some(PackageStatus::ReadyForPickup),
            PackageStatus::ReadyForPickup => Some(PackageStatus::PickedUp),
            PackageStatus::PickedUp => None,
        }
    }
}

impl fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "on_the_way" => Ok(PackageStatus::OnTheWay),
            "ready_for_pickup" => Ok(PackageStatus::ReadyForPickup),
            "picked_up" => Ok(PackageStatus::PickedUp),
            other => Err(ValidationError::InvalidFormat {
                field: "status".to_string(),
                reason: format!("unknown package status '{}'", other),
            }),
        }
    }
}

// =============================================================================
// Package Size
// =============================================================================

/// Physical size class of a mock package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageSize {
    Small,
    Medium,
    Large,
}

impl PackageSize {
    pub const ALL: [PackageSize; 3] = [
        PackageSize::Small,
        PackageSize::Medium,
        PackageSize::Large,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            PackageSize::Small => "Small",
            PackageSize::Medium => "Medium",
            PackageSize::Large => "Large",
        }
    }
}

impl fmt::Display for PackageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Business Registration
// =============================================================================

/// A registered drop-off location.
///
/// Immutable once created: the registration flow never updates these fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRegistration {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Business location code - what partners type to sign in.
    pub code: String,

    /// Business display name.
    pub name: String,

    /// Street address (free text, never geocoded).
    pub address: String,

    /// Contact email captured by the long sign-up flow, absent for the
    /// short register-a-location flow.
    pub contact_email: Option<String>,

    /// When the business was registered.
    pub registered_at: DateTime<Utc>,
}

// =============================================================================
// Drop-off Package
// =============================================================================

/// A real drop-off recorded by a partner, awaiting customer pickup.
///
/// Keyed by `pickup_code` in the registry's ledger. `picked_up` flips from
/// `false` to `true` exactly once; a second verification is reported as
/// already picked up and changes nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropoffPackage {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Pickup code handed to the recipient (8 characters).
    pub pickup_code: String,

    /// Carrier tracking number supplied by the partner.
    pub tracking_number: String,

    /// Recipient display name.
    pub recipient_name: String,

    /// Code of the registered business holding the package.
    pub business_code: String,

    /// Whether the package has been claimed.
    pub picked_up: bool,

    /// When the drop-off was recorded.
    pub dropped_off_at: DateTime<Utc>,
}

// =============================================================================
// Mock Package
// =============================================================================

/// A synthetic dashboard record, distinct from the tracking-number based
/// drop-off/pickup flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockPackage {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Tracking id in the shape `PKG` + 6 digits.
    pub tracking_id: String,

    /// Recipient display name.
    pub name: String,

    /// Size class.
    pub size: PackageSize,

    /// Weight in pounds, one meaningful decimal.
    pub weight_lbs: f64,

    /// Current lifecycle state. Matches the board container holding it.
    pub status: PackageStatus,

    /// When the package last changed state. Refreshed on every move.
    pub updated_at: DateTime<Utc>,
}

impl MockPackage {
    /// Formats `updated_at` as the 12-hour `HH:MM AM/PM` display string.
    ///
    /// The instant is kept internally; only the display boundary sees the
    /// formatted, non-sortable string.
    pub fn display_timestamp(&self) -> String {
        self.updated_at.format("%I:%M %p").to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_status_round_trip() {
        for status in PackageStatus::ALL {
            let parsed: PackageStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("in_orbit".parse::<PackageStatus>().is_err());
    }

    #[test]
    fn test_status_forward_chain() {
        assert_eq!(
            PackageStatus::OnTheWay.next(),
            Some(PackageStatus::ReadyForPickup)
        );
        assert_eq!(
            PackageStatus::ReadyForPickup.next(),
            Some(PackageStatus::PickedUp)
        );
        assert_eq!(PackageStatus::PickedUp.next(), None);
    }

    #[test]
    fn test_display_timestamp_is_twelve_hour() {
        let pkg = MockPackage {
            id: "test".to_string(),
            tracking_id: "PKG123456".to_string(),
            name: "Alex Rivera".to_string(),
            size: PackageSize::Small,
            weight_lbs: 2.5,
            status: PackageStatus::OnTheWay,
            updated_at: Utc.with_ymd_and_hms(2025, 3, 1, 15, 7, 0).unwrap(),
        };
        assert_eq!(pkg.display_timestamp(), "03:07 PM");
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&PackageStatus::ReadyForPickup).unwrap();
        assert_eq!(json, "\"ready_for_pickup\"");
    }
}
