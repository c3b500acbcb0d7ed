//! Constants for board geometry, directions, and display symbols.
//!
//! The board uses a 1D array representation with a one-cell border ring so
//! that directional scans stop on a sentinel instead of checking bounds.
//!
//! ```text
//!   index = row * W + col      (row, col in 0..W)
//!   playable cells: row, col in 1..=N
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Playable board size (NxN).
pub const N: usize = 8;

/// Board width including the border on both sides.
pub const W: usize = N + 2;

/// Total board array size including the border ring.
pub const BOARDSIZE: usize = W * W;

/// Number of playable cells.
pub const NUM_SPACES: usize = N * N;

/// Upper bound on placements in one game (every empty cell filled once).
pub const MAX_MOVES: usize = NUM_SPACES - 4;

// =============================================================================
// Directions
// =============================================================================

/// Offsets to the 8 neighbors in the 1D board array.
/// Order: NW, N, NE, W, E, SW, S, SE
pub const DELTA: [isize; 8] = [
    -(W as isize) - 1, // NW
    -(W as isize),     // N (up one row)
    -(W as isize) + 1, // NE
    -1,                // W (left one column)
    1,                 // E (right one column)
    (W as isize) - 1,  // SW
    W as isize,        // S (down one row)
    (W as isize) + 1,  // SE
];

// =============================================================================
// Opening Layout
// =============================================================================

/// Black's starting cells as 1-indexed (row, col).
pub const START_BLACK: [(usize, usize); 2] = [(4, 5), (5, 4)];

/// White's starting cells as 1-indexed (row, col).
pub const START_WHITE: [(usize, usize); 2] = [(4, 4), (5, 5)];

// =============================================================================
// Display Symbols
// =============================================================================

/// Black piece.
pub const SYMBOL_BLACK: char = 'X';

/// White piece.
pub const SYMBOL_WHITE: char = 'O';

/// Empty cell.
pub const SYMBOL_EMPTY: char = '.';

/// Border sentinel.
pub const SYMBOL_BORDER: char = '*';

/// Column letters, left to right.
pub const COLUMN_LETTERS: &str = "abcdefgh";

// =============================================================================
// Text Protocol
// =============================================================================

/// Protocol version reported by `protocol_version`.
pub const PROTOCOL_VERSION: u32 = 1;

/// Engine name reported by `name`.
pub const ENGINE_NAME: &str = "othello-rust";

/// Opening played by the `demo` subcommand when no moves are given.
pub const DEMO_MOVES: [&str; 5] = ["f5", "d6", "c3", "d3", "c4"];
