//! Othello-Rust command-line front-end.
//!
//! ## Usage
//!
//! - `othello-rust` - Show a demo
//! - `othello-rust play` - Run the text protocol on stdin/stdout
//! - `othello-rust demo [MOVES...]` - Replay moves from the opening
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use othello_rust::board::Color;
use othello_rust::constants::DEMO_MOVES;
use othello_rust::game::{Game, Turn};
use othello_rust::position::parse_coord;
use othello_rust::protocol::Engine;

/// Othello-Rust: an Othello rules engine
#[derive(Parser)]
#[command(name = "othello-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the text protocol, reading commands from stdin
    Play {
        /// Name of the black player
        #[arg(long)]
        black: Option<String>,
        /// Name of the white player
        #[arg(long)]
        white: Option<String>,
    },
    /// Replay a sequence of moves from the opening, alternating colors
    Demo {
        /// Moves in vertex notation (e.g. f5 d6 c3)
        moves: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play { black, white }) => run_protocol(black, white),
        Some(Commands::Demo { moves }) => run_demo(&moves),
        None => run_demo(&[]),
    }
}

fn run_protocol(black: Option<String>, white: Option<String>) -> Result<()> {
    let mut game = Game::new();
    if let Some(name) = black {
        game.create_player(&name, Color::Black)
            .context("registering black player")?;
    }
    if let Some(name) = white {
        game.create_player(&name, Color::White)
            .context("registering white player")?;
    }

    let mut engine = Engine::with_game(game);
    engine.run(io::stdin().lock(), io::stdout().lock())
}

fn run_demo(moves: &[String]) -> Result<()> {
    println!("Othello-Rust demo\n");

    let mut game = Game::new();
    println!("{game}");

    let moves: Vec<&str> = if moves.is_empty() {
        DEMO_MOVES.to_vec()
    } else {
        moves.iter().map(String::as_str).collect()
    };

    for mv in moves {
        let Some(color) = game.to_move() else {
            println!("Game over, ignoring {mv}");
            break;
        };
        let legal: Vec<String> = game.legal_moves(color).iter().map(|p| p.to_string()).collect();
        println!("Legal for {color}: {}", legal.join(" "));

        let pos = parse_coord(mv).with_context(|| format!("parsing move {mv:?}"))?;
        match game.play(color, pos) {
            Ok(Turn::Moved { flipped }) => println!("{color} plays {pos}, flipping {flipped}\n"),
            Ok(Turn::Skipped) => println!("{color} has no valid moves\n"),
            Err(e) => {
                println!("{color} cannot play {pos}: {e}\n");
                continue;
            }
        }
        println!("{game}");
    }

    if let Some(text) = game.announcement() {
        println!("{text}");
    }
    Ok(())
}
