#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use twentyfortyeight::{
    clear_screen, init_logging, print_game, print_high_scores, prompt_line, Game, GameError,
    GameStatus, HighScoreStore, SessionCommand,
};

/// Terminal 2048: merge tiles with WASD until you reach 2048.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Path to the high-score database file")]
    db: Option<PathBuf>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let db_path = cli.db.unwrap_or_else(HighScoreStore::default_path);
    let mut store = HighScoreStore::open(&db_path)?;

    let mut game = Game::new(&mut rng);
    let mut quit = false;

    println!("Move with w/a/s/d, `hs` for high scores, `exit` to quit.");
    while !game.is_finished() && !quit {
        clear_screen();
        print_game(&game);
        // Read input until one command takes effect, then redraw.
        loop {
            let line = prompt_line("")?;
            match SessionCommand::parse(&line) {
                Some(SessionCommand::Move(dir)) => match game.turn(dir, &mut rng) {
                    Ok(_) => break,
                    Err(GameError::IneffectiveMove) => println!("Invalid move"),
                    Err(err) => return Err(err.into()),
                },
                Some(SessionCommand::Quit) => {
                    quit = true;
                    break;
                }
                Some(SessionCommand::HighScores) => {
                    print_high_scores(&store.list(10)?);
                    prompt_line("Press Enter to continue")?;
                    break;
                }
                None => println!("Invalid move"),
            }
        }
    }

    clear_screen();
    print_game(&game);
    match game.status() {
        GameStatus::Won => println!("You win!"),
        GameStatus::GameOver => println!("Game over!"),
        GameStatus::InProgress => {}
    }

    let player = prompt_line("Input your name on the leaderboard: ")?;
    let id = store.record(&player, game.score(), game.moves())?;
    log::info!(
        "recorded high score #{}: {} points in {} moves",
        id,
        game.score(),
        game.moves()
    );
    Ok(())
}
