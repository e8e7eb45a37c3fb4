//! Game session: board, score and move bookkeeping, and the turn protocol.

use crate::board::Board;
use crate::common::{Direction, GameError, TurnReport};
use rand::Rng;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// A tile reached the winning value.
    Won,
    /// No direction changes the board any more.
    GameOver,
}

/// Core game state owning the board for one session.
pub struct Game {
    board: Board,
    score: u32,
    moves: u32,
    status: GameStatus,
}

fn evaluate_status(board: &Board) -> GameStatus {
    // Win is checked before game-over, so a winning board that also has no
    // moves left still counts as a win.
    if board.has_win() {
        GameStatus::Won
    } else if board.has_no_moves() {
        GameStatus::GameOver
    } else {
        GameStatus::InProgress
    }
}

impl Game {
    /// Start a session with the two starting tiles placed by `rng`.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Game::from_board(Board::with_start_tiles(rng))
    }

    /// Resume from an explicit board with zeroed score and move count.
    pub fn from_board(board: Board) -> Self {
        let status = evaluate_status(&board);
        Game {
            board,
            score: 0,
            moves: 0,
            status,
        }
    }

    /// Immutable view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Total score accumulated this session.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of moves that changed the board.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the session has reached a terminal state.
    pub fn is_finished(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// True when sliding toward `dir` would change the board.
    pub fn is_move_effective(&self, dir: Direction) -> bool {
        self.board.is_move_effective(dir)
    }

    /// Play one full turn: slide toward `dir`, credit every merge into the
    /// score, spawn a random tile, then re-evaluate the status.
    ///
    /// A move that would leave the board unchanged is rejected with
    /// [`GameError::IneffectiveMove`] and mutates nothing, so a tile is
    /// never spawned after a no-op slide.
    pub fn turn<R: Rng>(&mut self, dir: Direction, rng: &mut R) -> Result<TurnReport, GameError> {
        let (next, score_delta) = self.board.shifted(dir);
        if next == self.board {
            return Err(GameError::IneffectiveMove);
        }
        self.board = next;
        self.score += score_delta;
        // An effective slide always frees at least one cell, so the spawn
        // precondition holds here.
        let (spawned_at, spawned_value) = self.board.spawn_random_tile(rng)?;
        self.moves += 1;
        self.status = evaluate_status(&self.board);
        #[cfg(feature = "std")]
        log::debug!(
            "move {:?}: +{} points, spawned {} at {:?}, status {:?}",
            dir,
            score_delta,
            spawned_value,
            spawned_at,
            self.status
        );
        Ok(TurnReport {
            score_delta,
            spawned_at,
            spawned_value,
        })
    }
}
