//! Error types for move validation, game flow, and text parsing.
//!
//! Every rejected operation leaves the board untouched; none of these are
//! fatal to a game session.

use crate::board::Color;
use crate::position::Position;

/// Why a placement was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("position {0} is outside the board")]
    OutOfBounds(Position),

    #[error("cell {0} is already occupied")]
    CellOccupied(Position),

    #[error("{position} is not a legal move (legal: {})", format_list(.legal))]
    IllegalMove {
        position: Position,
        legal: Vec<Position>,
    },
}

/// Errors raised by the game session on top of [`MoveError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("it is {expected}'s turn, not {got}'s")]
    OutOfTurn { expected: Color, got: Color },

    #[error("the game has ended")]
    GameOver,

    #[error("{0} has a legal move and cannot pass")]
    PassNotAllowed(Color),

    #[error("a player is already registered for {0}")]
    ColorTaken(Color),

    #[error("player name must not be empty")]
    EmptyName,
}

/// Errors from parsing colors, vertices, and board diagrams.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid color: {0:?}")]
    Color(String),

    #[error("invalid vertex: {0:?}")]
    Vertex(String),

    #[error("invalid board diagram: {0}")]
    Diagram(String),
}

fn format_list(legal: &[Position]) -> String {
    if legal.is_empty() {
        return "none".to_string();
    }
    legal
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_lists_alternatives() {
        let err = MoveError::IllegalMove {
            position: Position::new(1, 1),
            legal: vec![Position::new(3, 4), Position::new(4, 3)],
        };
        assert_eq!(err.to_string(), "a1 is not a legal move (legal: d3 c4)");
    }

    #[test]
    fn test_out_of_bounds_shows_raw_pair() {
        let err = MoveError::OutOfBounds(Position::new(0, 9));
        assert_eq!(err.to_string(), "position 0,9 is outside the board");
    }

    #[test]
    fn test_game_error_wraps_move_error() {
        let err: GameError = MoveError::CellOccupied(Position::new(4, 4)).into();
        assert_eq!(err.to_string(), "cell d4 is already occupied");
    }

    #[test]
    fn test_out_of_turn_display() {
        let err = GameError::OutOfTurn {
            expected: Color::Black,
            got: Color::White,
        };
        assert_eq!(err.to_string(), "it is black's turn, not white's");
    }
}
