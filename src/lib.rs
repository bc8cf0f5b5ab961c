//! Tictactoe-Rust: a generalized tic-tac-toe engine.
//!
//! This is a Rust reimplementation of a desktop tic-tac-toe game, keeping
//! the core rules engine and replacing the graphical shell with a console.
//! The board is N×N (N ≥ 3) and a line win means filling an entire row,
//! column, or diagonal. The computer opponent plays uniformly at random.
//!
//! ## Modules
//!
//! - [`constants`] - Board size bounds and engine parameters
//! - [`board`] - Grid storage and empty-cell bookkeeping
//! - [`turn`] - Turn sequencing and role assignment
//! - [`engine`] - Move validation, the random opponent, win/draw detection
//! - [`console`] - Interactive command-line front end
//!
//! ## Example
//!
//! ```
//! use tictactoe_rust::board::Symbol;
//! use tictactoe_rust::engine::{Engine, GameState};
//!
//! // A 3x3 game with the human playing X
//! let mut engine = Engine::new(3, Symbol::X);
//!
//! assert!(engine.player_move(1, 1));
//! let reply = engine.computer_move();
//! assert!(reply.is_some());
//! assert_eq!(engine.check_state(), GameState::Ongoing);
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod engine;
pub mod turn;
