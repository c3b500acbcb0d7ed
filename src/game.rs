//! Game session: players, turn order, and end-of-game detection.
//!
//! [`Game`] wraps a [`Board`] with the policy the board itself does not
//! enforce: only the awaited color may move, only legal moves are applied,
//! a color without moves skips its turn, and the game ends once neither
//! color can move.

use std::fmt;

use tracing::{debug, info};

use crate::board::{Board, Color};
use crate::error::{GameError, MoveError};
use crate::movegen::legal_moves;
use crate::position::Position;

/// A named participant playing one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    color: Color,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Final result, decided by strict piece-count comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Color),
    Tie,
}

impl Outcome {
    pub fn from_counts(black: u32, white: u32) -> Self {
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Outcome::Winner(Color::Black),
            std::cmp::Ordering::Less => Outcome::Winner(Color::White),
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingMove(Color),
    Ended(Outcome),
}

/// What a successful [`Game::play`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The piece was placed and `flipped` opponent pieces were captured.
    Moved { flipped: usize },
    /// The mover had no legal moves; the turn passed to the opponent.
    Skipped,
}

/// An Othello game session.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: Vec<Player>,
    state: GameState,
    moves_played: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game on a fresh board, Black to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::Black)
    }

    /// Start a session from an arbitrary board with `to_move` awaited.
    ///
    /// The state is evaluated immediately, so a board where neither color
    /// can move starts out ended.
    pub fn from_board(board: Board, to_move: Color) -> Self {
        let mut game = Self {
            board,
            players: Vec::new(),
            state: GameState::AwaitingMove(to_move),
            moves_played: 0,
        };
        game.advance(to_move);
        game
    }

    /// Reset to a fresh board, keeping registered players.
    pub fn clear(&mut self) {
        self.board = Board::new();
        self.state = GameState::AwaitingMove(Color::Black);
        self.moves_played = 0;
    }

    /// Register `name` as the player for `color`.
    pub fn create_player(&mut self, name: &str, color: Color) -> Result<(), GameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        if self.player(color).is_some() {
            return Err(GameError::ColorTaken(color));
        }
        debug!(%color, name, "registered player");
        self.players.push(Player::new(name, color));
        Ok(())
    }

    /// The registered player for `color`, if any.
    pub fn player(&self, color: Color) -> Option<&Player> {
        self.players.iter().find(|p| p.color == color)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The awaited color, or `None` once the game has ended.
    pub fn to_move(&self) -> Option<Color> {
        match self.state {
            GameState::AwaitingMove(color) => Some(color),
            GameState::Ended(_) => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, GameState::Ended(_))
    }

    /// Number of pieces placed since the opening.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Sorted legal moves for `color` on the current board.
    pub fn legal_moves(&self, color: Color) -> Vec<Position> {
        legal_moves(&self.board, color)
    }

    pub fn piece_counts(&self) -> (u32, u32) {
        self.board.piece_counts()
    }

    /// Write a piece without consulting turn order or legality.
    ///
    /// Bounds and occupancy are still checked by the board. Callers are
    /// expected to have confirmed the move with [`Game::legal_moves`]. On
    /// success the turn passes to the opponent, or the game ends if
    /// neither color can move.
    pub fn apply_move(&mut self, color: Color, pos: Position) -> Result<usize, MoveError> {
        let flipped = self.board.apply_move(color, pos)?;
        self.moves_played += 1;
        self.advance(color.opponent());
        Ok(flipped)
    }

    /// Play `pos` for `color` if it is legal and `color` is awaited.
    ///
    /// A mover with no legal moves gets [`Turn::Skipped`] regardless of
    /// `pos`, as long as `pos` is on the board. On any error the board and
    /// state are unchanged.
    pub fn play(&mut self, color: Color, pos: Position) -> Result<Turn, GameError> {
        self.check_turn(color)?;
        if !pos.is_on_board() {
            return Err(MoveError::OutOfBounds(pos).into());
        }

        let legal = self.legal_moves(color);
        if legal.is_empty() {
            debug!(%color, "no legal moves, skipping turn");
            self.advance(color.opponent());
            return Ok(Turn::Skipped);
        }
        if self.board.cell(pos).color().is_some() {
            return Err(MoveError::CellOccupied(pos).into());
        }
        if !legal.contains(&pos) {
            return Err(MoveError::IllegalMove {
                position: pos,
                legal,
            }
            .into());
        }

        let flipped = self.apply_move(color, pos)?;
        debug!(%color, %pos, flipped, "move applied");
        Ok(Turn::Moved { flipped })
    }

    /// Give up the turn. Only allowed when `color` has no legal move.
    pub fn pass(&mut self, color: Color) -> Result<(), GameError> {
        self.check_turn(color)?;
        if !self.legal_moves(color).is_empty() {
            return Err(GameError::PassNotAllowed(color));
        }
        debug!(%color, "passed");
        self.advance(color.opponent());
        Ok(())
    }

    fn check_turn(&self, color: Color) -> Result<(), GameError> {
        match self.state {
            GameState::Ended(_) => Err(GameError::GameOver),
            GameState::AwaitingMove(expected) if expected != color => {
                Err(GameError::OutOfTurn {
                    expected,
                    got: color,
                })
            }
            GameState::AwaitingMove(_) => Ok(()),
        }
    }

    /// Hand the turn to `next`, or end the game if neither side can move.
    fn advance(&mut self, next: Color) {
        let stuck = self.legal_moves(next).is_empty()
            && self.legal_moves(next.opponent()).is_empty();
        if stuck {
            let (black, white) = self.piece_counts();
            let outcome = Outcome::from_counts(black, white);
            info!(black, white, ?outcome, "game ended");
            self.state = GameState::Ended(outcome);
        } else {
            self.state = GameState::AwaitingMove(next);
        }
    }

    /// The outcome once the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::Ended(outcome) => Some(outcome),
            GameState::AwaitingMove(_) => None,
        }
    }

    /// The winning player, if the game ended with a winner who registered.
    pub fn winner(&self) -> Option<&Player> {
        match self.outcome()? {
            Outcome::Winner(color) => self.player(color),
            Outcome::Tie => None,
        }
    }

    /// End-of-game report: final counts followed by the winner line.
    pub fn announcement(&self) -> Option<String> {
        let outcome = self.outcome()?;
        let (black, white) = self.piece_counts();
        let verdict = match outcome {
            Outcome::Winner(color) => {
                let name = self.player(color).map_or("unnamed", Player::name);
                format!("Winner is {color} player: {name}")
            }
            Outcome::Tie => "It's a tie.".to_string(),
        };
        Some(format!(
            "The game has ended: {black} black pieces, {white} white pieces.\n{verdict}"
        ))
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        let (black, white) = self.piece_counts();
        match self.state {
            GameState::AwaitingMove(color) => {
                writeln!(f, "black {black} white {white}, {color} to move")
            }
            GameState::Ended(_) => writeln!(f, "black {black} white {white}, game over"),
        }
    }
}
