//! Constants for board geometry and game pacing.
//!
//! The grid side length is a runtime value passed to
//! [`crate::board::Board::new`]; only its bounds live here.

/// Default board side length when none is given on the command line.
pub const DEFAULT_SIZE: usize = 3;

/// Smallest playable board. Sizes below this are rejected at startup.
pub const MIN_SIZE: usize = 3;

/// The four axis orientations through a cell, as (row, col) steps.
/// Order: horizontal, vertical, main diagonal, anti-diagonal.
/// Each entry is walked in both signed directions during the win scan.
pub const LINE_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Cosmetic pause before the computer answers a move, in milliseconds.
/// Lives entirely in the console loop; the engine itself never waits.
pub const COMPUTER_MOVE_DELAY_MS: u64 = 200;
