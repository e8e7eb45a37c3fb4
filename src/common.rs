//! Common types: move directions, session commands, and game errors.

use core::fmt;

/// A direction in which the tiles can be slid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, used for terminal-state scans.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// A command read from the player. Movement is kept separate from control
/// commands so the engine is never handed a non-direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Move(Direction),
    /// Record the score and leave the game.
    Quit,
    /// Show the high-score table.
    HighScores,
}

impl SessionCommand {
    /// Parse one input token. Movement uses WASD; `exit` and `hs` are the
    /// two control tokens.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "w" => Some(SessionCommand::Move(Direction::Up)),
            "s" => Some(SessionCommand::Move(Direction::Down)),
            "a" => Some(SessionCommand::Move(Direction::Left)),
            "d" => Some(SessionCommand::Move(Direction::Right)),
            "exit" => Some(SessionCommand::Quit),
            "hs" => Some(SessionCommand::HighScores),
            _ => None,
        }
    }
}

/// Errors returned by game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The requested move would not change the board.
    IneffectiveMove,
    /// A tile spawn was requested on a board with no empty cell.
    NoEmptyCell,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IneffectiveMove => write!(f, "move does not change the board"),
            GameError::NoEmptyCell => write!(f, "no empty cell left to spawn a tile"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// What one accepted turn did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Sum of all merged-tile values created by the move.
    pub score_delta: u32,
    /// Cell (row, col) that received the spawned tile.
    pub spawned_at: (usize, usize),
    /// Value of the spawned tile (2 or 4).
    pub spawned_value: u32,
}
