//! Line-oriented text protocol for driving a game.
//!
//! The framing follows GTP: a command line may start with a numeric id,
//! successful responses start with `=`, failures with `?`, and each
//! response is followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return protocol version
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `clear_board` - Start a fresh game, keeping players
//! - `player <color> <name>` - Register a player for a color
//! - `play <color> <vertex>` - Play a move
//! - `pass <color>` - Pass when no legal move exists
//! - `legal <color>` - List legal moves in ascending order
//! - `showboard` - Render the board
//! - `score` - Current piece counts
//! - `status` - Whose turn it is, or `ended`
//! - `winner` - End-of-game announcement
//!
//! ## Example
//!
//! ```
//! use othello_rust::protocol::Engine;
//!
//! let mut engine = Engine::new();
//! let mut out = Vec::new();
//! engine.run("play black d3\nscore\n".as_bytes(), &mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("= black 4 white 1"));
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::board::Color;
use crate::constants::{ENGINE_NAME, PROTOCOL_VERSION};
use crate::game::{Game, GameState, Turn};
use crate::position::{Position, parse_coord};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "known_command",
    "legal",
    "list_commands",
    "name",
    "pass",
    "play",
    "player",
    "protocol_version",
    "quit",
    "score",
    "showboard",
    "status",
    "version",
    "winner",
];

/// Protocol engine state.
#[derive(Debug, Default)]
pub struct Engine {
    game: Game,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing game, e.g. one with players already registered.
    pub fn with_game(game: Game) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("reading command")?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();
            debug!(%command, ?args, "received command");

            let (success, message) = self.execute(&command, args);
            if !success {
                warn!(%command, %message, "command failed");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n").context("writing response")?;
            output.flush().context("flushing response")?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end == 0 {
            return (None, trimmed);
        }
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, ENGINE_NAME.to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, PROTOCOL_VERSION.to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "clear_board" => {
                self.game.clear();
                (true, String::new())
            }

            "player" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let color = match parse_color(args[0]) {
                    Ok(c) => c,
                    Err(e) => return (false, e),
                };
                let name = args[1..].join(" ");
                match self.game.create_player(&name, color) {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let color = match parse_color(args[0]) {
                    Ok(c) => c,
                    Err(e) => return (false, e),
                };
                let pos = match parse_coord(args[1]) {
                    Ok(p) => p,
                    Err(e) => return (false, e.to_string()),
                };
                match self.game.play(color, pos) {
                    Ok(Turn::Moved { flipped }) => (true, format!("flipped {flipped}")),
                    Ok(Turn::Skipped) => (true, "no valid moves".to_string()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "pass" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let color = match parse_color(arg) {
                    Ok(c) => c,
                    Err(e) => return (false, e),
                };
                match self.game.pass(color) {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "legal" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match parse_color(arg) {
                    Ok(color) => (true, format_moves(&self.game.legal_moves(color))),
                    Err(e) => (false, e),
                }
            }

            "showboard" => (true, format!("\n{}", self.game.board())),

            "score" => {
                let (black, white) = self.game.piece_counts();
                (true, format!("black {black} white {white}"))
            }

            "status" => match self.game.state() {
                GameState::AwaitingMove(color) => (true, format!("to_move {color}")),
                GameState::Ended(_) => (true, "ended".to_string()),
            },

            "winner" => match self.game.announcement() {
                Some(text) => (true, text),
                None => (false, "game is still in progress".to_string()),
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

fn parse_color(s: &str) -> std::result::Result<Color, String> {
    s.parse::<Color>().map_err(|e| e.to_string())
}

fn format_moves(moves: &[Position]) -> String {
    moves
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
