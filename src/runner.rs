use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::info;
use rand::Rng;

use crate::game::{Game, GameStatus};
use crate::input::{self, InputAction};
use crate::render::Renderer;

/// How a run ended: the snake died, or the player walked away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    GameOver,
    Quit,
}

const INPUT_POLL: Duration = Duration::from_millis(50);

/// Drives one game to completion: polls the keyboard into the direction
/// mailbox and advances the simulation on a fixed interval. Returns as
/// soon as the game transitions to Over, so no further ticks run.
pub fn run<R: Rng>(game: &mut Game<R>, renderer: &mut dyn Renderer) -> Result<Outcome> {
    renderer.draw(game.state(), game.board())?;
    let mut last_update = Instant::now();

    loop {
        // Handle input
        if event::poll(INPUT_POLL)? {
            if let Event::Key(key) = event::read()? {
                match input::map_key(key) {
                    Some(InputAction::Turn(direction)) => {
                        game.turn(direction);
                    }
                    Some(InputAction::Quit) => {
                        info!("player quit with score {}", game.state().score);
                        return Ok(Outcome::Quit);
                    }
                    None => {}
                }
            }
        }

        if last_update.elapsed() >= game.tick_interval() {
            let status = game.tick()?;
            renderer.draw(game.state(), game.board())?;
            if status == GameStatus::Over {
                renderer.game_over(game.state(), game.board())?;
                return Ok(Outcome::GameOver);
            }
            last_update = Instant::now();
        }
    }
}
