//! Game orchestration: move validation, the random computer opponent, and
//! win/draw detection.
//!
//! [`Engine`] composes a [`Board`] and a [`TurnManager`] and is the only
//! place that knows the game rules. The win check scans just the four lines
//! through the most recent move: a line can only have been completed by the
//! cell that was just placed, so anchoring the scan there is sufficient and
//! avoids a full-board rescan.

use crate::board::{Board, Symbol};
use crate::constants::LINE_DIRECTIONS;
use crate::turn::TurnManager;

/// Outcome of [`Engine::check_state`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    /// The human completed a line.
    PlayerWin,
    /// The computer completed a line.
    ComputerWin,
    /// Board full, no line completed.
    Draw,
    /// Moves remain and nobody has won.
    Ongoing,
}

/// The game engine: one exclusively owned board and turn manager, plus the
/// coordinates of the last placed move and the random source for the
/// computer opponent.
///
/// Board and turn manager are reset between rounds rather than rebuilt, so
/// one engine instance serves a whole session of rounds at a fixed size.
pub struct Engine {
    board: Board,
    turns: TurnManager,
    last_move: Option<(usize, usize)>,
    rng: fastrand::Rng,
}

impl Engine {
    /// Create an engine for an N×N board with the human playing
    /// `player_role`.
    ///
    /// `size >= 3` is a precondition enforced at the CLI boundary; the
    /// engine does not re-validate it.
    pub fn new(size: usize, player_role: Symbol) -> Self {
        Self::from_rng(size, player_role, fastrand::Rng::new())
    }

    /// Like [`Engine::new`] but with a seeded random source, making the
    /// computer's play reproducible.
    pub fn with_seed(size: usize, player_role: Symbol, seed: u64) -> Self {
        Self::from_rng(size, player_role, fastrand::Rng::with_seed(seed))
    }

    fn from_rng(size: usize, player_role: Symbol, rng: fastrand::Rng) -> Self {
        Self {
            board: Board::new(size),
            turns: TurnManager::new(player_role),
            last_move: None,
            rng,
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Read access to the board, for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Attempt a human move at (row, col).
    ///
    /// Fails with `false` and no mutation if the coordinates are out of
    /// range, the cell is occupied, or it is not the human's turn. On
    /// success the current symbol is placed, the move is recorded as the
    /// win-scan anchor, and the turn flips.
    pub fn player_move(&mut self, row: usize, col: usize) -> bool {
        if self.board.out_of_range(row, col)
            || !self.board.is_cell_empty(row, col)
            || !self.turns.is_player_turn()
        {
            return false;
        }
        self.next_move(row, col);
        true
    }

    /// Play the computer's move on a uniformly random empty cell and return
    /// its coordinates.
    ///
    /// Returns `None` without mutating anything when it is the human's turn;
    /// callers must consult [`Engine::is_player_turn`] first. Selection is
    /// by rejection sampling: draw coordinate pairs until an empty cell
    /// turns up. Must not be called on a full board, where no draw can
    /// succeed.
    pub fn computer_move(&mut self) -> Option<(usize, usize)> {
        if self.turns.is_player_turn() {
            return None;
        }

        let size = self.board.size();
        let (row, col) = loop {
            let row = self.rng.usize(..size);
            let col = self.rng.usize(..size);
            if self.board.is_cell_empty(row, col) {
                break (row, col);
            }
        };

        self.next_move(row, col);
        Some((row, col))
    }

    /// Place the current role's symbol, record the anchor, flip the turn.
    /// Legality has already been established by the caller.
    fn next_move(&mut self, row: usize, col: usize) {
        self.board.place_move(row, col, self.turns.current_role());
        self.last_move = Some((row, col));
        self.turns.switch_turn();
    }

    /// Classify the current position.
    ///
    /// Only the four lines through the last placed cell are scanned. With no
    /// move yet (fresh engine or just after [`Engine::reset_grid`]) the
    /// result is [`GameState::Ongoing`].
    pub fn check_state(&self) -> GameState {
        let Some((row, col)) = self.last_move else {
            return GameState::Ongoing;
        };
        let Some(symbol) = self.board.get(row, col) else {
            return GameState::Ongoing;
        };

        let size = self.board.size();
        let completed = LINE_DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.line_run(row, col, dr, dc, symbol) == size);

        if completed {
            return if self.turns.role_is_player(symbol) {
                GameState::PlayerWin
            } else {
                GameState::ComputerWin
            };
        }
        if self.board.is_full() {
            GameState::Draw
        } else {
            GameState::Ongoing
        }
    }

    /// Length of the maximal run of `symbol` through (row, col) along one
    /// axis: the anchor cell plus the walks in both signed directions.
    fn line_run(&self, row: usize, col: usize, dr: isize, dc: isize, symbol: Symbol) -> usize {
        1 + self.count_from(row, col, dr, dc, symbol) + self.count_from(row, col, -dr, -dc, symbol)
    }

    /// Count matching cells walking from (row, col) in direction (dr, dc),
    /// excluding the starting cell itself.
    fn count_from(&self, row: usize, col: usize, dr: isize, dc: isize, symbol: Symbol) -> usize {
        let size = self.board.size() as isize;
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while r >= 0 && r < size && c >= 0 && c < size {
            if self.board.get(r as usize, c as usize) != Some(symbol) {
                break;
            }
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    /// Symbol of whichever party is due to move.
    pub fn current_role(&self) -> Symbol {
        self.turns.current_role()
    }

    /// True iff the human is due to move.
    pub fn is_player_turn(&self) -> bool {
        self.turns.is_player_turn()
    }

    /// Reassign the human's symbol and restart the turn order accordingly.
    pub fn set_role(&mut self, player_role: Symbol) {
        self.turns.set_role(player_role);
    }

    /// Clear the board for a new round.
    ///
    /// Also drops the last-move anchor so a stale coordinate from the
    /// previous round can never feed the win scan.
    pub fn reset_grid(&mut self) {
        self.board.reset();
        self.last_move = None;
    }
}
