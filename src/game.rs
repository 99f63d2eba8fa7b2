use std::time::Duration;

use log::info;
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::board::{self, Board};
use crate::config::{ConfigError, GameConfig};
use crate::food::{Food, FoodSpawner};
use crate::geometry::Direction;
use crate::snake::{Snake, SnakeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Over,
}

/// The complete mutable state of one game instance.
///
/// Owned by [`Game`] and handed by reference to the renderer; nothing
/// here lives in process-wide statics, so several games can run side
/// by side.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub direction: Direction,
    pub score: u32,
    pub status: GameStatus,
    /// Single-slot mailbox for direction intents: last accepted write
    /// wins, read once at the next tick.
    pending_direction: Direction,
}

/// The orchestrating state machine: one `tick()` per scheduled step,
/// direction intents folded in between ticks.
pub struct Game<R = ThreadRng> {
    board: Board,
    spawner: FoodSpawner<R>,
    state: GameState,
    tick_interval: Duration,
}

impl Game<ThreadRng> {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> Game<R> {
    /// Builds a game with an explicit RNG for the food spawner. Tests
    /// pass a seeded RNG here to get reproducible spawns.
    pub fn with_rng(config: &GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = config.board();
        let mut spawner = FoodSpawner::new(rng, config.food_value, config.avoid_occupied_cells);
        let snake = Snake::horizontal(config.initial_snake_size as usize);
        let food = spawner.spawn(board, &snake);
        info!(
            "new game: {}x{} grid, snake of {}, food at ({}, {})",
            board.columns,
            board.rows,
            snake.len(),
            food.position.x,
            food.position.y
        );
        Ok(Self {
            board,
            spawner,
            state: GameState {
                snake,
                food,
                direction: Direction::Right,
                score: 0,
                status: GameStatus::Running,
                pending_direction: Direction::Right,
            },
            tick_interval: config.tick_interval(),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access, for scenario setup in tests and embedders
    /// that drive the machine themselves.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Records a direction intent. An intent that would reverse the
    /// snake straight into its own neck is rejected; otherwise it
    /// overwrites any intent already pending for the next tick.
    pub fn turn(&mut self, intent: Direction) -> bool {
        if intent == self.state.direction.opposite() {
            return false;
        }
        self.state.pending_direction = intent;
        true
    }

    /// Advances the simulation by one step: move, then food, then the
    /// fatal collisions. Ticking a finished game is a no-op.
    pub fn tick(&mut self) -> Result<GameStatus, SnakeError> {
        if self.state.status == GameStatus::Over {
            return Ok(GameStatus::Over);
        }

        self.state.direction = self.state.pending_direction;
        self.state.snake.advance(self.state.direction);

        if board::food_collision(self.state.snake.head(), &self.state.food) {
            let value = self.state.food.value;
            self.state.snake.grow(value)?;
            self.state.score += value;
            self.state.food = self.spawner.spawn(self.board, &self.state.snake);
            info!(
                "food eaten, score {}, next food at ({}, {})",
                self.state.score, self.state.food.position.x, self.state.food.position.y
            );
        }

        let head = self.state.snake.head();
        if self.board.wall_collision(head) {
            info!("wall collision at ({}, {}), game over", head.x, head.y);
            self.state.status = GameStatus::Over;
        } else if board::self_collision(&self.state.snake) {
            info!("self collision at ({}, {}), game over", head.x, head.y);
            self.state.status = GameStatus::Over;
        }

        Ok(self.state.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Coordinate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_game() -> Game<StdRng> {
        let config = GameConfig {
            width: 100,
            height: 100,
            block_size: 10,
            initial_snake_size: 3,
            ..GameConfig::default()
        };
        Game::with_rng(&config, StdRng::seed_from_u64(1)).unwrap()
    }

    #[test]
    fn starts_running_with_snake_along_the_top_row() {
        let game = small_game();
        assert_eq!(game.state().status, GameStatus::Running);
        assert_eq!(game.state().score, 0);
        assert_eq!(game.state().snake.head(), Coordinate::new(2, 0));
        assert!(game.board().contains(game.state().food.position));
    }

    #[test]
    fn reversal_guard_rejects_opposite_direction() {
        let mut game = small_game();
        assert!(!game.turn(Direction::Left));
        game.tick().unwrap();
        assert_eq!(game.state().direction, Direction::Right);

        assert!(game.turn(Direction::Down));
        game.tick().unwrap();
        assert_eq!(game.state().direction, Direction::Down);
    }

    #[test]
    fn direction_mailbox_is_last_write_wins() {
        let mut game = small_game();
        assert!(game.turn(Direction::Up));
        assert!(game.turn(Direction::Down));
        game.tick().unwrap();
        assert_eq!(game.state().direction, Direction::Down);
    }

    #[test]
    fn guard_checks_travelled_direction_not_pending_intent() {
        let mut game = small_game();
        assert!(game.turn(Direction::Up));
        // Still travelling right until the next tick, so left stays
        // forbidden even though the pending intent is up.
        assert!(!game.turn(Direction::Left));
        game.tick().unwrap();
        assert_eq!(game.state().direction, Direction::Up);
    }

    #[test]
    fn plain_tick_moves_without_growing() {
        let mut game = small_game();
        game.state_mut().food = Food::new(Coordinate::new(9, 9), 1);
        game.tick().unwrap();
        let segments: Vec<Coordinate> = game.state().snake.segments().collect();
        assert_eq!(
            segments,
            vec![
                Coordinate::new(1, 0),
                Coordinate::new(2, 0),
                Coordinate::new(3, 0),
            ]
        );
        assert_eq!(game.state().score, 0);
    }

    #[test]
    fn eating_food_grows_scores_and_respawns() {
        let config = GameConfig {
            width: 100,
            height: 100,
            block_size: 10,
            initial_snake_size: 3,
            avoid_occupied_cells: true,
            ..GameConfig::default()
        };
        let mut game = Game::with_rng(&config, StdRng::seed_from_u64(1)).unwrap();
        game.state_mut().food = Food::new(Coordinate::new(3, 0), 1);
        let status = game.tick().unwrap();
        assert_eq!(status, GameStatus::Running);

        let segments: Vec<Coordinate> = game.state().snake.segments().collect();
        assert_eq!(
            segments,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(2, 0),
                Coordinate::new(3, 0),
            ]
        );
        assert_eq!(game.state().score, 1);
        // A fresh food item replaced the consumed one.
        assert_ne!(game.state().food.position, Coordinate::new(3, 0));
    }

    #[test]
    fn food_value_scales_growth_and_score() {
        let config = GameConfig {
            width: 200,
            height: 200,
            block_size: 10,
            initial_snake_size: 3,
            food_value: 5,
            ..GameConfig::default()
        };
        let mut game = Game::with_rng(&config, StdRng::seed_from_u64(3)).unwrap();
        game.state_mut().food = Food::new(Coordinate::new(3, 0), 5);
        game.tick().unwrap();
        assert_eq!(game.state().snake.len(), 8);
        assert_eq!(game.state().score, 5);
    }

    #[test]
    fn wall_collision_ends_the_game() {
        let mut game = small_game();
        game.state_mut().food = Food::new(Coordinate::new(9, 9), 1);
        // Head starts at x=2 on a 10-column grid; eight ticks put it at
        // x=10, one past the wall.
        for _ in 0..7 {
            assert_eq!(game.tick().unwrap(), GameStatus::Running);
        }
        assert_eq!(game.tick().unwrap(), GameStatus::Over);
    }

    #[test]
    fn self_collision_ends_the_game() {
        let mut game = small_game();
        game.state_mut().snake = Snake::from_segments([
            Coordinate::new(2, 0),
            Coordinate::new(2, 1),
            Coordinate::new(3, 1),
            Coordinate::new(4, 1),
            Coordinate::new(4, 0),
            Coordinate::new(3, 0),
        ]);
        game.state_mut().food = Food::new(Coordinate::new(9, 9), 1);
        game.turn(Direction::Down);
        // Moving down from (3, 0) lands on (3, 1), an occupied cell.
        assert_eq!(game.tick().unwrap(), GameStatus::Over);
    }

    #[test]
    fn finished_game_is_frozen() {
        let mut game = small_game();
        game.state_mut().status = GameStatus::Over;
        let snapshot = game.state().snake.clone();
        let score = game.state().score;
        assert_eq!(game.tick().unwrap(), GameStatus::Over);
        assert_eq!(game.state().snake, snapshot);
        assert_eq!(game.state().score, score);
    }
}
