//! # Dashboard Commands
//!
//! The partner dashboard over the mock package board: listing, searching,
//! and advancing packages between lifecycle states.

use serde::Serialize;
use tracing::debug;

use parcel_core::{MockPackage, PackageStatus};

use crate::error::ApiError;
use crate::state::BoardState;

/// A package as the dashboard renders it.
///
/// The stored instant becomes the 12-hour display string here, at the
/// presentation boundary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageView {
    pub tracking_id: String,
    pub name: String,
    pub size: String,
    pub weight_lbs: f64,
    pub status: PackageStatus,
    pub updated_at: String,
}

impl From<&MockPackage> for PackageView {
    fn from(package: &MockPackage) -> Self {
        PackageView {
            tracking_id: package.tracking_id.clone(),
            name: package.name.clone(),
            size: package.size.to_string(),
            weight_lbs: package.weight_lbs,
            status: package.status,
            updated_at: package.display_timestamp(),
        }
    }
}

/// The full dashboard: one column per lifecycle state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    pub on_the_way: Vec<PackageView>,
    pub ready_for_pickup: Vec<PackageView>,
    pub picked_up: Vec<PackageView>,
}

fn views(packages: &[MockPackage]) -> Vec<PackageView> {
    packages.iter().map(PackageView::from).collect()
}

/// Lists every package, grouped by lifecycle state.
pub fn list_packages(board: &BoardState) -> BoardResponse {
    debug!("list_packages command");
    board.with_board(|b| BoardResponse {
        on_the_way: views(b.packages(PackageStatus::OnTheWay)),
        ready_for_pickup: views(b.packages(PackageStatus::ReadyForPickup)),
        picked_up: views(b.packages(PackageStatus::PickedUp)),
    })
}

/// Moves a package between lifecycle states ("mark as moved").
///
/// ## Errors
/// `NotFound` when `tracking_id` is not in the `from` container; the board
/// is left unchanged in that case.
pub fn move_package(
    board: &BoardState,
    tracking_id: &str,
    from: PackageStatus,
    to: PackageStatus,
) -> Result<BoardResponse, ApiError> {
    debug!(tracking_id = %tracking_id, %from, %to, "move_package command");
    let moved = board.with_board_mut(|b| b.move_package(tracking_id, from, to));
    if !moved {
        return Err(ApiError::not_found("Package", tracking_id));
    }
    Ok(list_packages(board))
}

/// Searches packages by tracking id or recipient name.
///
/// An empty query returns an empty list; the caller distinguishes "no
/// input" from "no matches".
pub fn search_packages(board: &BoardState, query: &str) -> Vec<PackageView> {
    debug!(query = %query, "search_packages command");
    board.with_board(|b| b.search(query).into_iter().map(PackageView::from).collect())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use parcel_store::SeedCounts;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_state() -> BoardState {
        let state = BoardState::new();
        let mut rng = StdRng::seed_from_u64(7);
        state.with_board_mut(|b| b.seed(&mut rng, SeedCounts::uniform(4)));
        state
    }

    #[test]
    fn test_list_packages_groups_by_status() {
        let state = seeded_state();
        let response = list_packages(&state);
        assert_eq!(response.on_the_way.len(), 4);
        assert_eq!(response.ready_for_pickup.len(), 4);
        assert_eq!(response.picked_up.len(), 4);

        // Timestamps come out as display strings like "03:07 PM".
        let stamp = &response.on_the_way[0].updated_at;
        assert!(stamp.ends_with("AM") || stamp.ends_with("PM"));
    }

    #[test]
    fn test_move_package_advances_and_returns_board() {
        let state = seeded_state();
        let tracking_id = list_packages(&state).on_the_way[0].tracking_id.clone();

        let response = move_package(
            &state,
            &tracking_id,
            PackageStatus::OnTheWay,
            PackageStatus::ReadyForPickup,
        )
        .unwrap();
        assert_eq!(response.on_the_way.len(), 3);
        assert_eq!(response.ready_for_pickup.len(), 5);
        assert_eq!(
            response.ready_for_pickup.last().unwrap().tracking_id,
            tracking_id
        );
    }

    #[test]
    fn test_move_package_unknown_id_is_not_found() {
        let state = seeded_state();
        let err = move_package(
            &state,
            "PKG000000",
            PackageStatus::OnTheWay,
            PackageStatus::PickedUp,
        )
        .unwrap_err();
        assert!(matches!(err.code, ErrorCode::NotFound));

        let response = list_packages(&state);
        assert_eq!(response.on_the_way.len(), 4);
        assert_eq!(response.picked_up.len(), 4);
    }

    #[test]
    fn test_search_packages_case_insensitive() {
        let state = seeded_state();
        let matches = search_packages(&state, "pkg");
        assert_eq!(matches.len(), 12);
        assert!(search_packages(&state, "").is_empty());
    }
}
