use std::time::Duration;

use thiserror::Error;

use crate::board::Board;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("block size must be at least 1")]
    ZeroBlockSize,
    #[error("speed must be at least 1")]
    ZeroSpeed,
    #[error("initial snake size must be at least 2")]
    SnakeTooShort,
    #[error("width and height must each fit at least one block")]
    DegenerateGrid,
    #[error("a {columns}x{rows} grid cannot fit an initial snake of {size} segments")]
    SnakeDoesNotFit { columns: i32, rows: i32, size: u32 },
}

/// Game parameters, supplied once at construction.
///
/// `width` and `height` are in pixels of the rendered surface; the
/// playfield is `width / block_size` by `height / block_size` cells.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub block_size: u32,
    pub initial_snake_size: u32,
    pub speed: u32,
    pub food_value: u32,
    pub avoid_occupied_cells: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            block_size: 10,
            initial_snake_size: 10,
            speed: 10,
            food_value: 1,
            avoid_occupied_cells: false,
        }
    }
}

impl GameConfig {
    pub fn board(&self) -> Board {
        Board::new(
            (self.width / self.block_size) as i32,
            (self.height / self.block_size) as i32,
        )
    }

    /// Time between simulation steps: `2000 / speed` milliseconds.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(2000 / self.speed))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        if self.speed == 0 {
            return Err(ConfigError::ZeroSpeed);
        }
        // Growth needs a tail and a neighbor to infer its direction from.
        if self.initial_snake_size < 2 {
            return Err(ConfigError::SnakeTooShort);
        }
        let board = self.board();
        if board.columns == 0 || board.rows == 0 {
            return Err(ConfigError::DegenerateGrid);
        }
        // The initial snake is laid out horizontally along the top row.
        if self.initial_snake_size > board.columns as u32 {
            return Err(ConfigError::SnakeDoesNotFit {
                columns: board.columns,
                rows: board.rows,
                size: self.initial_snake_size,
            });
        }
        Ok(())
    }
}
