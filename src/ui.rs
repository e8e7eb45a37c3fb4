#![cfg(feature = "std")]

//! Terminal rendering and line input.

use std::io::{self, Write};

use crate::board::Board;
use crate::config::BOARD_SIZE;
use crate::game::Game;
use crate::highscore::HighScoreRecord;

/// Foreground color for a tile value, as RGB.
fn tile_color(value: u32) -> (u8, u8, u8) {
    match value {
        2 => (0xff, 0xff, 0xff),
        4 => (0xfc, 0xf3, 0xf2),
        8 => (0xfc, 0xe7, 0xe7),
        16 => (0xfc, 0xd6, 0xd3),
        32 => (0xea, 0xaa, 0xd9),
        64 => (0xd6, 0x83, 0xc3),
        128 => (0xcb, 0x5a, 0xb0),
        256 => (0xc1, 0x2d, 0x9f),
        512 => (0xce, 0xd1, 0xf6),
        1024 => (0xe7, 0xe6, 0xfb),
        2048 => (0xf3, 0xf4, 0xfd),
        _ => (0xff, 0xff, 0xff),
    }
}

fn render_cell(value: u32) -> String {
    if value == 0 {
        return format!("{:>5}", "");
    }
    let (r, g, b) = tile_color(value);
    format!("\x1b[38;2;{};{};{}m{:>5}\x1b[0m", r, g, b, value)
}

/// Render the board and score as a bordered grid with one colored,
/// 5-wide, right-aligned cell per tile. Empty cells are blank.
pub fn render_board(board: &Board, score: u32) -> String {
    let border = "-".repeat(BOARD_SIZE * 8 + 1);
    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            out.push_str("| ");
            out.push_str(&render_cell(board.get(row, col)));
            out.push(' ');
        }
        out.push_str("|\n");
        out.push_str(&border);
        out.push('\n');
    }
    out.push_str(&format!("Score: {:>10}\n", score));
    out
}

/// Clear the terminal and move the cursor home.
pub fn clear_screen() {
    print!("\x1b[2J\x1b[1;1H");
    let _ = io::stdout().flush();
}

/// Display the current board and score.
pub fn print_game(game: &Game) {
    print!("{}", render_board(game.board(), game.score()));
}

/// Print the high-score table header and rows.
pub fn print_high_scores(records: &[HighScoreRecord]) {
    println!(
        "{:>4}  {:<16} {:>8} {:>6}  {}",
        "id", "player", "score", "moves", "date"
    );
    for rec in records {
        println!(
            "{:>4}  {:<16} {:>8} {:>6}  {}",
            rec.id, rec.player, rec.score, rec.moves, rec.date
        );
    }
}

/// Print `prompt`, then read one line from stdin and return it trimmed.
pub fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
