//! Tictactoe-Rust: generalized tic-tac-toe against a random computer
//! opponent.
//!
//! ## Usage
//!
//! - `tictactoe-rust` - Play a 3x3 game in the console
//! - `tictactoe-rust --size 5 --role o` - Play 5x5 as O
//! - `tictactoe-rust demo` - Show a short scripted exchange

use clap::{Parser, Subcommand};

use tictactoe_rust::board::Symbol;
use tictactoe_rust::console::Console;
use tictactoe_rust::constants::{DEFAULT_SIZE, MIN_SIZE};
use tictactoe_rust::engine::Engine;

/// Tictactoe-Rust: N×N tic-tac-toe against a random opponent
#[derive(Parser)]
#[command(name = "tictactoe-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board side length
    #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = parse_size)]
    size: usize,

    /// Symbol played by the human (X moves first)
    #[arg(long, default_value = "X")]
    role: Symbol,

    /// Seed for the computer's random moves
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively in the console
    Play,
    /// Run a short scripted demo of the engine
    Demo,
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s
        .parse()
        .map_err(|_| format!("invalid size '{s}'"))?;
    if size < MIN_SIZE {
        return Err(format!("grid size must be at least {MIN_SIZE}"));
    }
    Ok(size)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo) => {
            run_demo(cli.size, cli.role, cli.seed);
            Ok(())
        }
        Some(Commands::Play) | None => {
            let mut console = match cli.seed {
                Some(seed) => Console::with_seed(cli.size, cli.role, seed),
                None => Console::new(cli.size, cli.role),
            };
            console.run()
        }
    }
}

fn run_demo(size: usize, role: Symbol, seed: Option<u64>) {
    println!("Tictactoe-Rust: {size}x{size} demo, you would play {role}\n");

    let mut engine = match seed {
        Some(seed) => Engine::with_seed(size, role, seed),
        None => Engine::new(size, role),
    };

    if engine.is_player_turn() {
        let center = size / 2;
        engine.player_move(center, center);
        println!("Human ({role}) plays ({center}, {center})");
    }
    if let Some((row, col)) = engine.computer_move() {
        println!("Computer ({}) plays ({row}, {col})", role.other());
    }

    println!("\n{}", engine.board());
    println!("State: {:?}", engine.check_state());
}
