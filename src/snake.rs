use std::collections::VecDeque;

use thiserror::Error;

use crate::geometry::{Coordinate, Direction};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnakeError {
    #[error("cannot grow a snake shorter than two segments")]
    TooShort,
    #[error("tail at ({0}, {1}) is not adjacent to its neighbor at ({2}, {3})")]
    BrokenBody(i32, i32, i32, i32),
}

/// The snake body as an ordered sequence of grid cells, tail at the
/// front (index 0), head at the back.
///
/// Movement recycles the tail segment into the new head position, so a
/// plain move touches exactly one segment and never changes the length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Coordinate>,
}

impl Snake {
    /// Lays out `size` segments horizontally at `y = 0`, tail at the
    /// origin, head at `(size - 1, 0)`.
    pub fn horizontal(size: usize) -> Self {
        let body = (0..size).map(|x| Coordinate::new(x as i32, 0)).collect();
        Self { body }
    }

    /// Builds a snake from explicit segments, ordered tail first.
    pub fn from_segments(segments: impl IntoIterator<Item = Coordinate>) -> Self {
        let body: VecDeque<Coordinate> = segments.into_iter().collect();
        assert!(!body.is_empty(), "snake must have at least one segment");
        Self { body }
    }

    pub fn head(&self) -> Coordinate {
        *self.body.back().expect("snake body is never empty")
    }

    pub fn tail(&self) -> Coordinate {
        *self.body.front().expect("snake body is never empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Segments ordered tail to head.
    pub fn segments(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.body.iter().copied()
    }

    pub fn occupies(&self, cell: Coordinate) -> bool {
        self.body.contains(&cell)
    }

    /// Moves the snake one cell in `direction` by recycling the tail
    /// segment into the new head position.
    pub fn advance(&mut self, direction: Direction) {
        let new_head = self.head().step(direction);
        self.body.pop_front();
        self.body.push_back(new_head);
    }

    /// Extends the body by `amount` segments at the tail end, along the
    /// direction the tail is currently receding from.
    ///
    /// The retreat direction is inferred from the tail and its neighbor;
    /// each new segment is placed one unit past the current tail, so the
    /// head and all existing segments stay where they are.
    pub fn grow(&mut self, amount: u32) -> Result<(), SnakeError> {
        let (dx, dy) = self.tail_retreat()?;
        for _ in 0..amount {
            let tail = self.tail();
            self.body
                .push_front(Coordinate::new(tail.x + dx, tail.y + dy));
        }
        Ok(())
    }

    /// Unit delta pointing from the tail's neighbor to the tail, i.e.
    /// the direction the tail is receding from. Errors on a body too
    /// short to infer it, or on segments that have lost adjacency.
    fn tail_retreat(&self) -> Result<(i32, i32), SnakeError> {
        if self.body.len() < 2 {
            return Err(SnakeError::TooShort);
        }
        let tail = self.body[0];
        let neighbor = self.body[1];
        let dx = tail.x - neighbor.x;
        let dy = tail.y - neighbor.y;
        if dx.abs() + dy.abs() != 1 {
            return Err(SnakeError::BrokenBody(tail.x, tail.y, neighbor.x, neighbor.y));
        }
        Ok((dx, dy))
    }
}
