//! # Board State
//!
//! Shared handle to the mock package board.
//!
//! ## Thread Safety
//! `Arc<Mutex<_>>` because `move_package` is a read-modify-write over two
//! containers; two interleaved moves of the same record would otherwise
//! race. Seeding needs an RNG, which the caller supplies - moves and
//! searches do not.

use std::sync::{Arc, Mutex};

use parcel_store::PackageBoard;

/// Kiosk-managed package board state.
#[derive(Clone, Default)]
pub struct BoardState {
    board: Arc<Mutex<PackageBoard>>,
}

impl BoardState {
    /// Creates an empty, unseeded board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the board.
    pub fn with_board<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&PackageBoard) -> R,
    {
        let board = self.board.lock().expect("Board mutex poisoned");
        f(&board)
    }

    /// Executes a function with write access to the board.
    pub fn with_board_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut PackageBoard) -> R,
    {
        let mut board = self.board.lock().expect("Board mutex poisoned");
        f(&mut board)
    }
}
