//! Mazedelve - Entry Point
//!
//! Loads the configuration, builds the maze, and plays one run on the
//! console.

use std::fs::OpenOptions;
use std::io;
use std::process::ExitCode;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use mazedelve::data::{load_narrative, GameConfig};
use mazedelve::ui::{ConsoleInput, ConsoleOutput};
use mazedelve::{generate_maze, Game, GameState};

/// Exit code for a run stopped with Ctrl-C
const INTERRUPTED_EXIT: i32 = 130;

fn main() -> ExitCode {
    init_logging();
    log::info!("Starting Mazedelve v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = ctrlc::set_handler(|| {
        log::warn!("interrupted by user");
        println!("\nGame interrupted by user. Exiting.");
        std::process::exit(INTERRUPTED_EXIT);
    }) {
        log::warn!("could not install interrupt handler: {}", e);
    }

    match run() {
        Ok(state) => {
            log::info!("Mazedelve finished: {:?}", state);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Game exited with error: {:#}", e);
            println!("An unexpected error occurred: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to a file so records never interleave with the narration
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("mazedelve.log")
    {
        Ok(file) => builder.target(env_logger::Target::Pipe(Box::new(file))),
        Err(_) => builder.target(env_logger::Target::Stderr),
    };

    builder.init();
}

fn run() -> Result<GameState> {
    let config = GameConfig::load()?;
    let narrative = load_narrative(config.narrative.as_deref());

    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let maze = generate_maze(&mut rng, config.width, config.height);
    let mut game = Game::new(maze, narrative, rng);

    let mut input = ConsoleInput::new(io::stdin().lock());
    let mut output = ConsoleOutput::new(io::stdout());
    Ok(game.run(&mut input, &mut output)?)
}
