use rand::Rng;

use crate::board::Board;
use crate::geometry::Coordinate;
use crate::snake::Snake;

/// The single active food item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Coordinate,
    pub value: u32,
}

impl Food {
    pub fn new(position: Coordinate, value: u32) -> Self {
        Self { position, value }
    }
}

/// Places new food at a uniformly random grid cell.
///
/// By default the snake's own cells are not excluded, so food can land
/// under the body; `avoid_occupied` re-rolls until a free cell comes up.
#[derive(Debug)]
pub struct FoodSpawner<R> {
    rng: R,
    value: u32,
    avoid_occupied: bool,
}

impl<R: Rng> FoodSpawner<R> {
    pub fn new(rng: R, value: u32, avoid_occupied: bool) -> Self {
        Self {
            rng,
            value,
            avoid_occupied,
        }
    }

    pub fn spawn(&mut self, board: Board, snake: &Snake) -> Food {
        let mut food = self.roll(board);
        if self.avoid_occupied {
            // Make sure food doesn't spawn on the snake
            while snake.occupies(food.position) {
                food = self.roll(board);
            }
        }
        food
    }

    fn roll(&mut self, board: Board) -> Food {
        let position = Coordinate::new(
            self.rng.gen_range(0..board.columns),
            self.rng.gen_range(0..board.rows),
        );
        Food::new(position, self.value)
    }
}
