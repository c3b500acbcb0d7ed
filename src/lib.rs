//! Othello-Rust: an Othello (Reversi) rules engine.
//!
//! The core answers two questions for a board and a color: which cells are
//! legal placements, and what the board looks like after a placement flips
//! every bracketed run of opponent pieces.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, direction offsets, display symbols
//! - [`position`] - Coordinates and vertex notation
//! - [`board`] - Board state, the direction-scan primitive, move execution
//! - [`movegen`] - Legal move generation
//! - [`game`] - Game session: players, turns, end of game
//! - [`protocol`] - Line-oriented text protocol
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use othello_rust::board::Color;
//! use othello_rust::game::{Game, Turn};
//! use othello_rust::position::parse_coord;
//!
//! let mut game = Game::new();
//! game.create_player("Alice", Color::Black).unwrap();
//! game.create_player("Bob", Color::White).unwrap();
//!
//! assert_eq!(game.legal_moves(Color::Black).len(), 4);
//! let turn = game.play(Color::Black, parse_coord("c4").unwrap()).unwrap();
//! assert_eq!(turn, Turn::Moved { flipped: 1 });
//! assert_eq!(game.piece_counts(), (4, 1));
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod movegen;
pub mod position;
pub mod protocol;
