/// Side length of the (fixed) square board.
pub const BOARD_SIZE: usize = 4;
/// Number of tiles placed before the first move.
pub const START_TILES: usize = 2;
/// Value of the starting tiles.
pub const START_TILE_VALUE: u32 = 2;
/// Reaching this tile wins the game.
pub const WIN_TILE: u32 = 2048;
/// Discrete spawn distribution: a new tile is 2 with probability 9/10
/// and 4 with probability 1/10.
pub const SPAWN_VALUES: [u32; 10] = [2, 2, 2, 2, 2, 2, 2, 2, 2, 4];
