use crate::food::Food;
use crate::geometry::Coordinate;
use crate::snake::Snake;

/// Grid bounds in cells. Valid positions are `[0, columns) x [0, rows)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub columns: i32,
    pub rows: i32,
}

impl Board {
    pub fn new(columns: i32, rows: i32) -> Self {
        Self { columns, rows }
    }

    pub fn contains(&self, cell: Coordinate) -> bool {
        cell.x >= 0 && cell.x < self.columns && cell.y >= 0 && cell.y < self.rows
    }

    /// True when the head has left the playfield on either axis.
    pub fn wall_collision(&self, head: Coordinate) -> bool {
        !self.contains(head)
    }
}

/// True when the head occupies the same cell as any other segment.
///
/// Every segment but the head is checked, not just the neighbors:
/// growth can fold the body back onto cells far from the neck.
pub fn self_collision(snake: &Snake) -> bool {
    let head = snake.head();
    snake.segments().take(snake.len() - 1).any(|c| c == head)
}

pub fn food_collision(head: Coordinate, food: &Food) -> bool {
    head == food.position
}
