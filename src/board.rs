//! Board state and the slide-and-merge transition logic.

use crate::common::{Direction, GameError};
use crate::config::{BOARD_SIZE, SPAWN_VALUES, START_TILES, START_TILE_VALUE, WIN_TILE};
use core::fmt;
use rand::Rng;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// A 4x4 grid of tile values. Zero is an empty cell; every non-zero value
/// is a power of two. Plain value data, copied per move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board {
    grid: [[u32; BOARD_SIZE]; BOARD_SIZE],
}

/// Slide one line of four tiles toward one end, merging equal adjacent
/// pairs once. Tiles are scanned in low-to-high index order regardless of
/// the slide direction; a freshly merged tile is skipped so it cannot merge
/// again in the same pass. Returns the new line and the sum of merged-tile
/// values.
fn slide_line(line: [u32; BOARD_SIZE], toward_high: bool) -> ([u32; BOARD_SIZE], u32) {
    let mut vals = [0u32; BOARD_SIZE];
    let mut n = 0;
    for v in line {
        if v != 0 {
            vals[n] = v;
            n += 1;
        }
    }

    let mut packed = [0u32; BOARD_SIZE];
    let mut len = 0;
    let mut delta = 0;
    let mut i = 0;
    while i < n {
        if i + 1 < n && vals[i] == vals[i + 1] {
            let merged = vals[i] * 2;
            delta += merged;
            packed[len] = merged;
            i += 2;
        } else {
            packed[len] = vals[i];
            i += 1;
        }
        len += 1;
    }

    let mut out = [0u32; BOARD_SIZE];
    if toward_high {
        out[BOARD_SIZE - len..].copy_from_slice(&packed[..len]);
    } else {
        out[..len].copy_from_slice(&packed[..len]);
    }
    (out, delta)
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Board::default()
    }

    /// A board seeded with the two starting tiles on distinct random cells.
    pub fn with_start_tiles<R: Rng>(rng: &mut R) -> Self {
        let mut board = Board::new();
        let mut placed = 0;
        while placed < START_TILES {
            let r = rng.random_range(0..BOARD_SIZE);
            let c = rng.random_range(0..BOARD_SIZE);
            if board.grid[r][c] == 0 {
                board.grid[r][c] = START_TILE_VALUE;
                placed += 1;
            }
        }
        board
    }

    /// Build a board from explicit rows; used by tests and restoration.
    pub fn from_rows(grid: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { grid }
    }

    /// Value of the cell at `(row, col)`, zero-based.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.grid[row][col]
    }

    /// Read-only snapshot of all 16 cells in row-major order.
    pub fn tiles(&self) -> [u32; BOARD_SIZE * BOARD_SIZE] {
        let mut out = [0u32; BOARD_SIZE * BOARD_SIZE];
        for (r, row) in self.grid.iter().enumerate() {
            out[r * BOARD_SIZE..(r + 1) * BOARD_SIZE].copy_from_slice(row);
        }
        out
    }

    /// Coordinates of all empty cells, row-major.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if self.grid[r][c] == 0 {
                    cells.push((r, c));
                }
            }
        }
        cells
    }

    /// Largest tile currently on the board.
    pub fn max_tile(&self) -> u32 {
        self.grid.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values; invariant under [`Board::shifted`].
    pub fn tile_sum(&self) -> u32 {
        self.grid.iter().flatten().sum()
    }

    fn line(&self, dir: Direction, index: usize) -> [u32; BOARD_SIZE] {
        let mut line = [0u32; BOARD_SIZE];
        match dir {
            Direction::Left | Direction::Right => line.copy_from_slice(&self.grid[index]),
            Direction::Up | Direction::Down => {
                for (r, slot) in line.iter_mut().enumerate() {
                    *slot = self.grid[r][index];
                }
            }
        }
        line
    }

    fn set_line(&mut self, dir: Direction, index: usize, line: [u32; BOARD_SIZE]) {
        match dir {
            Direction::Left | Direction::Right => self.grid[index] = line,
            Direction::Up | Direction::Down => {
                for (r, v) in line.iter().enumerate() {
                    self.grid[r][index] = *v;
                }
            }
        }
    }

    /// The board after sliding every line toward `dir`, plus the sum of all
    /// merged-tile values. Pure and deterministic: no tile is spawned.
    ///
    /// Up and down act on the four columns, left and right on the four
    /// rows, each line independently. Up and left pack toward the low
    /// index, down and right toward the high index.
    pub fn shifted(&self, dir: Direction) -> (Board, u32) {
        let toward_high = matches!(dir, Direction::Down | Direction::Right);
        let mut next = *self;
        let mut delta = 0;
        for index in 0..BOARD_SIZE {
            let (line, d) = slide_line(self.line(dir, index), toward_high);
            next.set_line(dir, index, line);
            delta += d;
        }
        (next, delta)
    }

    /// True when sliding toward `dir` changes at least one cell.
    pub fn is_move_effective(&self, dir: Direction) -> bool {
        self.shifted(dir).0 != *self
    }

    /// True when some cell holds the winning tile.
    pub fn has_win(&self) -> bool {
        self.grid.iter().flatten().any(|&v| v == WIN_TILE)
    }

    /// True when no direction changes the board: the game-over condition.
    pub fn has_no_moves(&self) -> bool {
        Direction::ALL.iter().all(|&d| !self.is_move_effective(d))
    }

    /// Place a 2 (9 in 10) or a 4 (1 in 10) on a uniformly chosen empty
    /// cell. A full board is a caller logic error and is reported as
    /// [`GameError::NoEmptyCell`] rather than ignored.
    pub fn spawn_random_tile<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<((usize, usize), u32), GameError> {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return Err(GameError::NoEmptyCell);
        }
        let (row, col) = empty[rng.random_range(0..empty.len())];
        let value = SPAWN_VALUES[rng.random_range(0..SPAWN_VALUES.len())];
        self.grid[row][col] = value;
        Ok(((row, col), value))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for v in row {
                write!(f, "{:>5} ", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_packs_low_and_high() {
        assert_eq!(slide_line([0, 2, 0, 2], false), ([4, 0, 0, 0], 4));
        assert_eq!(slide_line([0, 2, 0, 2], true), ([0, 0, 0, 4], 4));
    }

    #[test]
    fn slide_merges_each_pair_once() {
        assert_eq!(slide_line([2, 2, 2, 2], false), ([4, 4, 0, 0], 8));
        assert_eq!(slide_line([4, 4, 8, 0], false), ([8, 8, 0, 0], 8));
        assert_eq!(slide_line([2, 2, 4, 0], false), ([4, 4, 0, 0], 4));
    }

    #[test]
    fn slide_keeps_relative_order_toward_high() {
        assert_eq!(slide_line([2, 4, 0, 0], true), ([0, 0, 2, 4], 0));
        assert_eq!(slide_line([4, 2, 2, 0], true), ([0, 0, 4, 4], 4));
    }

    #[test]
    fn slide_without_pairs_is_compaction_only() {
        assert_eq!(slide_line([2, 4, 2, 0], false), ([2, 4, 2, 0], 0));
        assert_eq!(slide_line([0, 2, 4, 2], true), ([0, 2, 4, 2], 0));
    }
}
