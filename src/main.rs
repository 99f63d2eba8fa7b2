use std::fs::File;
use std::io;

use anyhow::Context;
use clap::Parser;
use log::info;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

use gridsnake::config::GameConfig;
use gridsnake::game::Game;
use gridsnake::render::TerminalRenderer;
use gridsnake::runner::{self, Outcome};

/// A classic grid-based snake game for the terminal.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Playfield width, in pixels of the rendered surface
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Playfield height, in pixels of the rendered surface
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Pixels per grid cell
    #[arg(long, default_value_t = 10)]
    block_size: u32,

    /// Initial snake length, in segments
    #[arg(long, default_value_t = 10)]
    snake_size: u32,

    /// Game speed: one tick every 2000/speed milliseconds
    #[arg(long, default_value_t = 10)]
    speed: u32,

    /// Points (and segments) gained per food item
    #[arg(long, default_value_t = 1)]
    food_value: u32,

    /// Never spawn food under the snake's body
    #[arg(long)]
    avoid_occupied_cells: bool,

    /// Where to write the game log
    #[arg(long, default_value = "gridsnake.log")]
    log_file: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("could not create log file {}", cli.log_file))?;
    WriteLogger::init(LevelFilter::Info, LogConfig::default(), log_file)?;

    let config = GameConfig {
        width: cli.width,
        height: cli.height,
        block_size: cli.block_size,
        initial_snake_size: cli.snake_size,
        speed: cli.speed,
        food_value: cli.food_value,
        avoid_occupied_cells: cli.avoid_occupied_cells,
    };
    let mut game = Game::new(&config)?;

    let mut renderer = TerminalRenderer::new(io::stdout());
    renderer.init().context("could not take over the terminal")?;
    let result = runner::run(&mut game, &mut renderer);
    renderer.restore()?;

    let score = game.state().score;
    match result? {
        Outcome::GameOver => println!("\nGame Over !! Score : {}", score),
        Outcome::Quit => println!("\nThanks for playing! Score : {}", score),
    }
    info!("exited with score {}", score);
    Ok(())
}
