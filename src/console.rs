//! Interactive console front end.
//!
//! A line-based command loop over stdin/stdout that drives the engine. All
//! game rules stay in [`crate::engine`]; this module only parses commands,
//! renders the board, and paces the computer's reply with a short cosmetic
//! delay, the way the original GUI did.
//!
//! ## Commands
//!
//! - `play <row> <col>` - place the human's symbol
//! - `new` - start a fresh round (same roles)
//! - `role <X|O>` - pick a symbol and start a fresh round
//! - `show` - print the board
//! - `state` - report the game state
//! - `help` - list commands
//! - `quit` - exit

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::board::Symbol;
use crate::constants::COMPUTER_MOVE_DELAY_MS;
use crate::engine::{Engine, GameState};

/// The list of known console commands.
const KNOWN_COMMANDS: &[&str] = &["help", "new", "play", "quit", "role", "show", "state"];

/// Console state: the engine plus the human's chosen symbol, kept so a new
/// round can re-arm the turn order for the same roles.
pub struct Console {
    engine: Engine,
    role: Symbol,
}

impl Console {
    /// Create a console for an N×N game with the human playing `role`.
    pub fn new(size: usize, role: Symbol) -> Self {
        Self {
            engine: Engine::new(size, role),
            role,
        }
    }

    /// Like [`Console::new`] but with a seeded engine for reproducible play.
    pub fn with_seed(size: usize, role: Symbol, seed: u64) -> Self {
        Self {
            engine: Engine::with_seed(size, role, seed),
            role,
        }
    }

    /// Run the command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        writeln!(
            stdout,
            "tic-tac-toe {0}x{0} - you play {1} ('help' lists commands)\n",
            self.engine.size(),
            self.role,
        )?;
        writeln!(stdout, "{}", self.engine.board())?;

        // If the human chose O, the computer opens
        self.pace_and_reply(&mut stdout)?;

        loop {
            write!(stdout, "> ")?;
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            if !message.is_empty() {
                if success {
                    writeln!(stdout, "{message}")?;
                } else {
                    writeln!(stdout, "error: {message}")?;
                }
            }
            if success && matches!(command.as_str(), "play" | "new" | "role") {
                writeln!(stdout, "{}", self.engine.board())?;
                self.announce(&mut stdout)?;
                self.pace_and_reply(&mut stdout)?;
            }

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Execute a console command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "play" => {
                if self.engine.check_state() != GameState::Ongoing {
                    return (false, "round is over, start another with 'new'".to_string());
                }
                let (Some(row), Some(col)) = (parse_coord(args, 0), parse_coord(args, 1)) else {
                    return (false, "usage: play <row> <col>".to_string());
                };
                if self.engine.player_move(row, col) {
                    (true, format!("you played ({row}, {col})"))
                } else {
                    (false, "illegal move".to_string())
                }
            }

            "new" => {
                // Re-arm the turn order as well: the last round's final move
                // left the flag flipped, and X must open the fresh round
                self.engine.reset_grid();
                self.engine.set_role(self.role);
                (true, "new round".to_string())
            }

            "role" => {
                let Some(role) = args.first().and_then(|s| s.parse::<Symbol>().ok()) else {
                    return (false, "usage: role <X|O>".to_string());
                };
                self.role = role;
                self.engine.reset_grid();
                self.engine.set_role(role);
                (true, format!("new round, you play {role}"))
            }

            "show" => (true, self.engine.board().to_string()),

            "state" => {
                let message = state_message(self.engine.check_state())
                    .unwrap_or("game in progress")
                    .to_string();
                (true, message)
            }

            "help" => (true, KNOWN_COMMANDS.join("\n")),

            "quit" => (true, String::new()),

            _ => (false, format!("unknown command: {command}")),
        }
    }

    /// Play the computer's reply if the round is ongoing and it is the
    /// computer's turn. Returns its announcement, or `None` if no reply
    /// was due.
    fn computer_reply(&mut self) -> Option<String> {
        if self.engine.check_state() != GameState::Ongoing || self.engine.is_player_turn() {
            return None;
        }
        let (row, col) = self.engine.computer_move()?;
        Some(format!("computer played ({row}, {col})"))
    }

    /// Pause for pacing, then print the computer's reply and the resulting
    /// board, if a reply was due.
    fn pace_and_reply(&mut self, stdout: &mut impl Write) -> anyhow::Result<()> {
        if self.engine.check_state() != GameState::Ongoing || self.engine.is_player_turn() {
            return Ok(());
        }
        thread::sleep(Duration::from_millis(COMPUTER_MOVE_DELAY_MS));
        if let Some(message) = self.computer_reply() {
            writeln!(stdout, "{message}")?;
            writeln!(stdout, "{}", self.engine.board())?;
            self.announce(stdout)?;
        }
        Ok(())
    }

    /// Print the terminal-state message, if the round just ended.
    fn announce(&mut self, stdout: &mut impl Write) -> anyhow::Result<()> {
        if let Some(message) = state_message(self.engine.check_state()) {
            writeln!(stdout, "{message}")?;
        }
        Ok(())
    }
}

/// Human-readable result for a terminal state, `None` while ongoing.
fn state_message(state: GameState) -> Option<&'static str> {
    match state {
        GameState::PlayerWin => Some("You Win!"),
        GameState::ComputerWin => Some("Computer Wins!"),
        GameState::Draw => Some("It's a Tie!"),
        GameState::Ongoing => None,
    }
}

fn parse_coord(args: &[&str], i: usize) -> Option<usize> {
    args.get(i).and_then(|s| s.parse::<usize>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_command() {
        let mut console = Console::with_seed(3, Symbol::X, 1);
        let (success, message) = console.execute("play", &["0", "0"]);
        assert!(success);
        assert_eq!(message, "you played (0, 0)");
    }

    #[test]
    fn test_play_rejects_bad_arguments() {
        let mut console = Console::with_seed(3, Symbol::X, 1);
        let (success, _) = console.execute("play", &["0"]);
        assert!(!success);
        let (success, _) = console.execute("play", &["a", "b"]);
        assert!(!success);
    }

    #[test]
    fn test_play_rejects_illegal_move() {
        let mut console = Console::with_seed(3, Symbol::X, 1);
        let (success, _) = console.execute("play", &["5", "5"]);
        assert!(!success);

        console.execute("play", &["0", "0"]);
        // Not the human's turn until the computer has replied
        let (success, message) = console.execute("play", &["1", "1"]);
        assert!(!success);
        assert_eq!(message, "illegal move");
    }

    #[test]
    fn test_role_command_restarts_round() {
        let mut console = Console::with_seed(3, Symbol::X, 1);
        console.execute("play", &["0", "0"]);

        let (success, _) = console.execute("role", &["o"]);
        assert!(success);
        // Fresh board, computer (X) to open
        let (_, board) = console.execute("show", &[]);
        assert!(!board.contains('X') && !board.contains('O'));
        assert!(console.computer_reply().is_some());
    }

    #[test]
    fn test_unknown_command() {
        let mut console = Console::with_seed(3, Symbol::X, 1);
        let (success, message) = console.execute("boardsize", &["9"]);
        assert!(!success);
        assert!(message.contains("unknown command"));
    }

    #[test]
    fn test_new_round_gives_x_human_the_opening_move() {
        let mut console = Console::with_seed(3, Symbol::X, 1);
        console.execute("play", &["0", "0"]);
        // The move flipped the turn to the computer; a fresh round must
        // re-arm it so the X-holder opens again
        console.execute("new", &[]);
        assert!(console.engine.is_player_turn());
        assert_eq!(console.engine.current_role(), Symbol::X);
        assert!(console.computer_reply().is_none());
    }

    #[test]
    fn test_new_round_keeps_o_human_waiting() {
        let mut console = Console::with_seed(3, Symbol::O, 1);
        // Computer opens; the reply flips the turn to the human
        console.computer_reply();
        assert!(console.engine.is_player_turn());

        console.execute("new", &[]);
        // X still opens and X belongs to the computer
        assert!(!console.engine.is_player_turn());
        assert_eq!(console.engine.current_role(), Symbol::X);
        assert!(console.computer_reply().is_some());
    }

    #[test]
    fn test_new_round_after_terminal_state() {
        let mut console = Console::with_seed(3, Symbol::X, 99);
        'game: for _ in 0..9 {
            for row in 0..3 {
                for col in 0..3 {
                    if console.execute("play", &[&row.to_string(), &col.to_string()]).0 {
                        break;
                    }
                }
            }
            if state_message(console.engine.check_state()).is_some() {
                break 'game;
            }
            console.computer_reply();
            if state_message(console.engine.check_state()).is_some() {
                break 'game;
            }
        }
        assert!(state_message(console.engine.check_state()).is_some());

        console.execute("new", &[]);
        assert_eq!(console.engine.check_state(), GameState::Ongoing);
        assert!(console.engine.is_player_turn());
        let (success, _) = console.execute("play", &["0", "0"]);
        assert!(success);
    }

    #[test]
    fn test_state_and_new_commands() {
        let mut console = Console::with_seed(3, Symbol::X, 1);
        let (success, message) = console.execute("state", &[]);
        assert!(success);
        assert_eq!(message, "game in progress");

        let (success, _) = console.execute("new", &[]);
        assert!(success);
    }

    #[test]
    fn test_no_reply_on_player_turn() {
        let mut console = Console::with_seed(3, Symbol::X, 1);
        assert!(console.computer_reply().is_none());
    }

    #[test]
    fn test_full_round_ends_and_gates_play() {
        let mut console = Console::with_seed(3, Symbol::X, 99);
        // Alternate scripted human moves with computer replies until the
        // round reaches a terminal state
        'game: for _ in 0..9 {
            for row in 0..3 {
                for col in 0..3 {
                    if console.execute("play", &[&row.to_string(), &col.to_string()]).0 {
                        break;
                    }
                }
            }
            if state_message(console.engine.check_state()).is_some() {
                break 'game;
            }
            console.computer_reply();
            if state_message(console.engine.check_state()).is_some() {
                break 'game;
            }
        }
        assert!(state_message(console.engine.check_state()).is_some());
        let (success, message) = console.execute("play", &["0", "0"]);
        assert!(!success);
        assert!(message.contains("round is over"));
    }
}
