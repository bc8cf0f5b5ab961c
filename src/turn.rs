//! Turn sequencing and role assignment.
//!
//! [`TurnManager`] tracks which symbol belongs to the human player and which
//! to the computer, and whose turn it currently is. It has no knowledge of
//! the board: the engine asks it who moves and tells it when a move landed.

use crate::board::Symbol;

/// Whose turn it is and who plays which symbol.
///
/// The two symbols are always the complement pair, and the party holding
/// [`Symbol::X`] always moves first.
pub struct TurnManager {
    player: Symbol,
    computer: Symbol,
    player_turn: bool,
}

impl TurnManager {
    /// Assign `player` to the human and the complement to the computer.
    /// The human opens the game iff they hold `X`.
    pub fn new(player: Symbol) -> Self {
        Self {
            player,
            computer: player.other(),
            player_turn: player == Symbol::X,
        }
    }

    /// Reassign roles, recomputing the turn flag from scratch.
    ///
    /// Used for role switching between rounds: the previous flag is
    /// discarded, never preserved.
    pub fn set_role(&mut self, player: Symbol) {
        *self = Self::new(player);
    }

    /// The symbol of whichever party is due to move.
    pub fn current_role(&self) -> Symbol {
        if self.player_turn {
            self.player
        } else {
            self.computer
        }
    }

    /// Flip the turn flag. No other effect.
    pub fn switch_turn(&mut self) {
        self.player_turn = !self.player_turn;
    }

    /// True iff the human is due to move.
    pub fn is_player_turn(&self) -> bool {
        self.player_turn
    }

    /// True iff `role` is the human's symbol.
    pub fn role_is_player(&self, role: Symbol) -> bool {
        role == self.player
    }
}
