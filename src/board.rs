//! Othello board state and move execution.
//!
//! This module provides the core game mechanics:
//! - Board representation using a 1D array with a border ring
//! - The direction-scan primitive shared by flipping and move generation
//! - Piece placement with capture flipping
//! - Piece counting and text rendering
//!
//! [`Board::apply_move`] checks only bounds and occupancy. Whether a move
//! captures anything is a legality question answered by [`crate::movegen`].

use std::fmt;
use std::str::FromStr;

use crate::constants::*;
use crate::error::{MoveError, ParseError};
use crate::position::{Point, Position};

/// One of the two sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The opposing color.
    pub const fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// The cell value a piece of this color occupies.
    pub const fn cell(self) -> Cell {
        match self {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        self.opponent()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Color::Black),
            "white" | "w" => Ok(Color::White),
            _ => Err(ParseError::Color(s.to_string())),
        }
    }
}

/// Contents of one array slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Border,
    Black,
    White,
}

impl Cell {
    /// The color of the piece in this cell, if any.
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
            Cell::Empty | Cell::Border => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => SYMBOL_EMPTY,
            Cell::Border => SYMBOL_BORDER,
            Cell::Black => SYMBOL_BLACK,
            Cell::White => SYMBOL_WHITE,
        }
    }
}

/// Per-cell answer from a direction-scan callback.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// Add this cell to the run and keep walking.
    Continue,
    /// Stop here and report this cell along with the run.
    Record,
    /// Stop here and report nothing.
    Stop,
}

/// An Othello board.
///
/// Cells are stored row-major in a `W * W` array. Row 0, row `W - 1`,
/// column 0 and column `W - 1` hold [`Cell::Border`].
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARDSIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A fresh board in the standard opening layout.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (row, col) in START_BLACK {
            board.cells[row * W + col] = Cell::Black;
        }
        for (row, col) in START_WHITE {
            board.cells[row * W + col] = Cell::White;
        }
        board
    }

    /// A board with no pieces, only the border ring.
    fn empty() -> Self {
        let mut cells = [Cell::Border; BOARDSIZE];
        for pos in Position::all() {
            cells[pos.row * W + pos.col] = Cell::Empty;
        }
        Self { cells }
    }

    /// Build a board from an 8-line diagram using `X`, `O` and `.`.
    ///
    /// Whitespace inside a line is ignored, so both `"..XO...."` and
    /// `". . X O . . . ."` are accepted.
    pub fn from_diagram(diagram: &str) -> Result<Self, ParseError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|l| l.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|l| !l.is_empty())
            .collect();
        if rows.len() != N {
            return Err(ParseError::Diagram(format!(
                "expected {N} rows, found {}",
                rows.len()
            )));
        }

        let mut board = Self::empty();
        for (r, line) in rows.iter().enumerate() {
            if line.len() != N {
                return Err(ParseError::Diagram(format!(
                    "row {} has {} cells, expected {N}",
                    r + 1,
                    line.len()
                )));
            }
            for (c, &ch) in line.iter().enumerate() {
                board.cells[(r + 1) * W + c + 1] = match ch.to_ascii_uppercase() {
                    SYMBOL_BLACK => Cell::Black,
                    SYMBOL_WHITE => Cell::White,
                    SYMBOL_EMPTY => Cell::Empty,
                    other => {
                        return Err(ParseError::Diagram(format!(
                            "unexpected symbol {other:?} in row {}",
                            r + 1
                        )));
                    }
                };
            }
        }
        Ok(board)
    }

    /// Read-only view of the whole bordered array.
    pub fn get_board(&self) -> &[Cell; BOARDSIZE] {
        &self.cells
    }

    /// The cell at a position. Off-board positions read as [`Cell::Border`].
    pub fn cell(&self, pos: Position) -> Cell {
        pos.to_point().map_or(Cell::Border, |pt| self.cells[pt])
    }

    /// Points on the playable region holding `color`, in ascending order.
    pub fn points_of(&self, color: Color) -> impl Iterator<Item = Point> + '_ {
        let target = color.cell();
        Position::all()
            .map(|p| p.row * W + p.col)
            .filter(move |&pt| self.cells[pt] == target)
    }

    /// Walk from `origin` in direction `delta`, one cell at a time.
    ///
    /// `decide` sees each cell together with the length of the run so far.
    /// Cells answered with [`Step::Continue`] are appended to the run. On
    /// [`Step::Record`] the terminal point and the run are returned; on
    /// [`Step::Stop`] nothing is. The walk never continues past
    /// [`Cell::Border`].
    ///
    /// `origin` must be a playable point; a border origin can index past the
    /// array.
    pub(crate) fn scan_direction<F>(&self, origin: Point, delta: isize, mut decide: F) -> Option<(Point, Vec<Point>)>
    where
        F: FnMut(Cell, usize) -> Step,
    {
        let mut run = Vec::new();
        let mut pt = origin;
        loop {
            pt = pt.wrapping_add_signed(delta);
            let cell = self.cells[pt];
            match decide(cell, run.len()) {
                Step::Continue if cell != Cell::Border => run.push(pt),
                Step::Record => return Some((pt, run)),
                Step::Continue | Step::Stop => return None,
            }
        }
    }

    /// Every point that placing `color` at `pos` would flip.
    ///
    /// All eight runs are read from the current board before anything is
    /// written. Returns an empty list for off-board or occupied targets.
    pub fn flips(&self, color: Color, pos: Position) -> Vec<Point> {
        let Some(origin) = pos.to_point() else {
            return Vec::new();
        };
        if self.cells[origin] != Cell::Empty {
            return Vec::new();
        }
        self.bracketed_runs(color, origin)
    }

    fn bracketed_runs(&self, color: Color, origin: Point) -> Vec<Point> {
        let own = color.cell();
        let opp = color.opponent().cell();
        let mut flipped = Vec::new();
        for delta in DELTA {
            let bracketed = self.scan_direction(origin, delta, |cell, len| {
                if cell == opp {
                    Step::Continue
                } else if cell == own && len > 0 {
                    Step::Record
                } else {
                    Step::Stop
                }
            });
            if let Some((_, run)) = bracketed {
                flipped.extend(run);
            }
        }
        flipped
    }

    /// Place a piece of `color` at `pos` and flip every bracketed run.
    ///
    /// Returns the number of flipped pieces. Legality is not checked: a
    /// placement that brackets nothing still writes the piece.
    ///
    /// # Errors
    /// - [`MoveError::OutOfBounds`] if `pos` is off the playable region
    /// - [`MoveError::CellOccupied`] if the target already holds a piece
    ///
    /// The board is unchanged on error.
    pub fn apply_move(&mut self, color: Color, pos: Position) -> Result<usize, MoveError> {
        let origin = pos.to_point().ok_or(MoveError::OutOfBounds(pos))?;
        if self.cells[origin] != Cell::Empty {
            return Err(MoveError::CellOccupied(pos));
        }

        let flipped = self.bracketed_runs(color, origin);
        let own = color.cell();
        self.cells[origin] = own;
        for &pt in &flipped {
            self.cells[pt] = own;
        }
        Ok(flipped.len())
    }

    /// Count pieces on the board as `(black, white)`.
    pub fn piece_counts(&self) -> (u32, u32) {
        let mut black = 0;
        let mut white = 0;
        for pos in Position::all() {
            match self.cells[pos.row * W + pos.col] {
                Cell::Black => black += 1,
                Cell::White => white += 1,
                Cell::Empty | Cell::Border => {}
            }
        }
        (black, white)
    }

    /// Number of empty playable cells.
    pub fn empty_count(&self) -> u32 {
        let (black, white) = self.piece_counts();
        NUM_SPACES as u32 - black - white
    }

    /// Render the full bordered array, one symbol per cell, two spaces apart.
    pub fn render_bordered(&self) -> String {
        let mut out = String::with_capacity(BOARDSIZE * 3 + W);
        for row in self.cells.chunks(W) {
            for cell in row {
                out.push(cell.symbol());
                out.push_str("  ");
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board\n{self}")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for letter in COLUMN_LETTERS.chars() {
            write!(f, " {letter}")?;
        }
        writeln!(f)?;
        for row in 1..=N {
            write!(f, "{row}")?;
            for col in 1..=N {
                write!(f, " {}", self.cells[row * W + col].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_board_opening() {
        let board = Board::new();
        assert_eq!(board.cell(pos("d4")), Cell::White);
        assert_eq!(board.cell(pos("e5")), Cell::White);
        assert_eq!(board.cell(pos("e4")), Cell::Black);
        assert_eq!(board.cell(pos("d5")), Cell::Black);
        assert_eq!(board.piece_counts(), (2, 2));
        assert_eq!(board.empty_count(), 60);
    }

    #[test]
    fn test_border_ring() {
        let board = Board::new();
        let cells = board.get_board();
        for i in 0..W {
            assert_eq!(cells[i], Cell::Border);
            assert_eq!(cells[(W - 1) * W + i], Cell::Border);
            assert_eq!(cells[i * W], Cell::Border);
            assert_eq!(cells[i * W + W - 1], Cell::Border);
        }
        assert_eq!(board.cell(Position::new(0, 4)), Cell::Border);
        assert_eq!(board.cell(Position::new(9, 9)), Cell::Border);
    }

    #[test]
    fn test_boards_are_independent() {
        let mut a = Board::new();
        let b = Board::new();
        a.apply_move(Color::Black, pos("c4")).unwrap();
        assert_ne!(a, b);
        assert_eq!(b.piece_counts(), (2, 2));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }

    #[test]
    fn test_color_parse() {
        assert_eq!("black".parse(), Ok(Color::Black));
        assert_eq!("WHITE".parse(), Ok(Color::White));
        assert_eq!("b".parse(), Ok(Color::Black));
        assert!("red".parse::<Color>().is_err());
    }

    #[test]
    fn test_apply_move_flips_single_run() {
        let mut board = Board::new();
        let flipped = board.apply_move(Color::Black, pos("c4")).unwrap();
        assert_eq!(flipped, 1);
        assert_eq!(board.cell(pos("c4")), Cell::Black);
        assert_eq!(board.cell(pos("d4")), Cell::Black);
        assert_eq!(board.piece_counts(), (4, 1));
    }

    #[test]
    fn test_apply_move_flips_multiple_directions() {
        // Black at d4 brackets white in three directions at once.
        let mut board = Board::from_diagram(
            "........
             .X.X.X..
             ..OOO...
             .XO.OX..
             ..OOO...
             .X.X.X..
             ........
             ........",
        )
        .unwrap();
        let flipped = board.apply_move(Color::Black, pos("d4")).unwrap();
        assert_eq!(flipped, 8);
        assert_eq!(board.piece_counts(), (17, 0));
    }

    #[test]
    fn test_apply_move_ignores_unbracketed_runs() {
        // The run toward the east edge has no black piece behind it.
        let mut board = Board::from_diagram(
            "........
             ........
             ........
             XOO.OOOO
             ........
             ........
             ........
             ........",
        )
        .unwrap();
        let flipped = board.apply_move(Color::Black, pos("d4")).unwrap();
        assert_eq!(flipped, 2);
        assert_eq!(board.cell(pos("b4")), Cell::Black);
        assert_eq!(board.cell(pos("c4")), Cell::Black);
        assert_eq!(board.cell(pos("e4")), Cell::White);
        assert_eq!(board.cell(pos("h4")), Cell::White);
    }

    #[test]
    fn test_run_ending_on_empty_is_not_flipped() {
        let mut board = Board::from_diagram(
            "........
             ........
             ........
             ...OO.X.
             ........
             ........
             ........
             ........",
        )
        .unwrap();
        let flipped = board.apply_move(Color::Black, pos("c4")).unwrap();
        assert_eq!(flipped, 0);
        assert_eq!(board.cell(pos("d4")), Cell::White);
    }

    #[test]
    fn test_apply_move_writes_without_capture() {
        let mut board = Board::new();
        assert_eq!(board.apply_move(Color::Black, pos("a1")), Ok(0));
        assert_eq!(board.cell(pos("a1")), Cell::Black);
        assert_eq!(board.piece_counts(), (3, 2));
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let mut board = Board::new();
        let before = board.clone();
        assert_eq!(
            board.apply_move(Color::Black, pos("d4")),
            Err(MoveError::CellOccupied(pos("d4")))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_rejects_out_of_bounds() {
        let mut board = Board::new();
        let before = board.clone();
        for p in [Position::new(0, 1), Position::new(1, 0), Position::new(9, 4), Position::new(4, 12)] {
            assert_eq!(board.apply_move(Color::White, p), Err(MoveError::OutOfBounds(p)));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_flips_is_read_only() {
        let board = Board::new();
        let flips = board.flips(Color::Black, pos("c4"));
        assert_eq!(flips, vec![pos("d4").to_point().unwrap()]);
        assert_eq!(board.piece_counts(), (2, 2));
        assert!(board.flips(Color::Black, pos("d4")).is_empty());
        assert!(board.flips(Color::Black, Position::new(0, 0)).is_empty());
    }

    #[test]
    fn test_scan_direction_stops_at_border() {
        let board = Board::new();
        let corner = pos("a1").to_point().unwrap();
        // Walking north-west from a1 hits the border immediately.
        let mut seen = Vec::new();
        let result = board.scan_direction(corner, DELTA[0], |cell, _| {
            seen.push(cell);
            Step::Continue
        });
        assert_eq!(result, None);
        assert_eq!(seen, vec![Cell::Border]);
    }

    #[test]
    fn test_scan_direction_records_run() {
        let board = Board::new();
        let c4 = pos("c4").to_point().unwrap();
        // East of c4: d4 (white), e4 (black).
        let result = board.scan_direction(c4, 1, |cell, len| match cell {
            Cell::White => Step::Continue,
            Cell::Black if len > 0 => Step::Record,
            _ => Step::Stop,
        });
        let e4 = pos("e4").to_point().unwrap();
        let d4 = pos("d4").to_point().unwrap();
        assert_eq!(result, Some((e4, vec![d4])));
    }

    #[test]
    fn test_from_diagram_errors() {
        assert!(Board::from_diagram("........").is_err());
        let bad_symbol = "........\n".repeat(7) + "...Z....";
        assert!(Board::from_diagram(&bad_symbol).is_err());
        let short_row = "........\n".repeat(7) + ".......";
        assert!(Board::from_diagram(&short_row).is_err());
    }

    #[test]
    fn test_from_diagram_matches_new() {
        let board = Board::from_diagram(
            "........
             ........
             ........
             ...OX...
             ...XO...
             ........
             ........
             ........",
        )
        .unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display() {
        let board = Board::new();
        let s = board.to_string();
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[4], "4 . . . O X . . .");
        assert_eq!(lines[5], "5 . . . X O . . .");
        assert_eq!(lines.len(), N + 1);
    }

    #[test]
    fn test_render_bordered() {
        let board = Board::new();
        let s = board.render_bordered();
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), W);
        assert!(lines[0].starts_with("*  *  *"));
        assert_eq!(lines[4].trim_end(), "*  .  .  .  O  X  .  .  .  *");
    }
}
