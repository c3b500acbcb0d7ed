//! Board coordinates and their text notation.
//!
//! A [`Position`] is a 1-indexed `(row, col)` pair; the playable region is
//! `1..=N` on both axes. Internally the board addresses cells by [`Point`],
//! an index into the bordered 1D array.
//!
//! Text notation puts the column letter first and the row number second,
//! so `"c4"` is row 4, column 3. A `"row,col"` pair is accepted as well.

use std::fmt;
use std::str::FromStr;

use crate::constants::{COLUMN_LETTERS, N, W};
use crate::error::ParseError;

/// An index into the bordered 1D board array.
pub type Point = usize;

/// A cell address, 1-indexed. Ordered by row, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this position lies inside the playable 8x8 region.
    pub const fn is_on_board(self) -> bool {
        self.row >= 1 && self.row <= N && self.col >= 1 && self.col <= N
    }

    /// The array index for this position, or `None` if it is off the board.
    pub fn to_point(self) -> Option<Point> {
        self.is_on_board().then(|| self.row * W + self.col)
    }

    /// Inverse of [`Position::to_point`] for playable points.
    pub const fn from_point(pt: Point) -> Self {
        Self {
            row: pt / W,
            col: pt % W,
        }
    }

    /// Iterate over all 64 playable positions in ascending order.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=N).flat_map(|row| (1..=N).map(move |col| Position::new(row, col)))
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Parse a vertex such as `"c4"`, `"C4"` or `"4,3"`.
pub fn parse_coord(s: &str) -> Result<Position, ParseError> {
    let s = s.trim();
    let err = || ParseError::Vertex(s.to_string());

    if let Some((row, col)) = s.split_once(',') {
        let row = row.trim().parse::<usize>().map_err(|_| err())?;
        let col = col.trim().parse::<usize>().map_err(|_| err())?;
        return Ok(Position::new(row, col));
    }

    let mut chars = s.chars();
    let col_char = chars.next().ok_or_else(err)?.to_ascii_lowercase();
    let col = COLUMN_LETTERS.find(col_char).ok_or_else(err)? + 1;
    let row = match chars.as_str().as_bytes() {
        [d @ b'1'..=b'9'] => usize::from(d - b'0'),
        _ => return Err(err()),
    };
    let pos = Position::new(row, col);
    if !pos.is_on_board() {
        return Err(err());
    }
    Ok(pos)
}

/// Convert a position to its vertex string (e.g. `"c4"`).
///
/// Off-board positions fall back to `"row,col"`.
pub fn str_coord(pos: Position) -> String {
    pos.to_string()
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coord(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "{},{}", self.row, self.col);
        }
        let letter = COLUMN_LETTERS
            .chars()
            .nth(self.col - 1)
            .ok_or(fmt::Error)?;
        write!(f, "{letter}{}", self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coord_letter_then_row() {
        assert_eq!(parse_coord("c4"), Ok(Position::new(4, 3)));
        assert_eq!(parse_coord("H8"), Ok(Position::new(8, 8)));
        assert_eq!(parse_coord("a1"), Ok(Position::new(1, 1)));
    }

    #[test]
    fn test_parse_coord_pair() {
        assert_eq!(parse_coord("4,3"), Ok(Position::new(4, 3)));
        // Pairs are not range checked; the board reports OutOfBounds.
        assert_eq!(parse_coord("0, 9"), Ok(Position::new(0, 9)));
    }

    #[test]
    fn test_parse_coord_rejects_garbage() {
        for s in ["", "i1", "a0", "a9", "a", "4", "zz", "c4x", "a,b", "c+4", "c04", "c 4", "a10"] {
            assert!(parse_coord(s).is_err(), "{s:?} should not parse");
        }
    }

    #[test]
    fn test_str_coord_roundtrip() {
        for pos in Position::all() {
            assert_eq!(parse_coord(&str_coord(pos)), Ok(pos));
        }
    }

    #[test]
    fn test_point_conversion() {
        let pos = Position::new(4, 3);
        let pt = pos.to_point().unwrap();
        assert_eq!(pt, 4 * W + 3);
        assert_eq!(Position::from_point(pt), pos);
        assert_eq!(Position::new(0, 3).to_point(), None);
        assert_eq!(Position::new(3, 9).to_point(), None);
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut v = vec![
            Position::new(5, 6),
            Position::new(3, 4),
            Position::new(6, 5),
            Position::new(4, 3),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                Position::new(3, 4),
                Position::new(4, 3),
                Position::new(5, 6),
                Position::new(6, 5),
            ]
        );
    }

    #[test]
    fn test_all_covers_board() {
        assert_eq!(Position::all().count(), N * N);
    }
}
