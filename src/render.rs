use std::io::Write;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::Print,
    terminal::{self, Clear, ClearType},
};

use crate::board::Board;
use crate::game::GameState;

/// Read-only consumer of game state: paints the playfield after every
/// tick and announces the end of the game.
pub trait Renderer {
    fn draw(&mut self, state: &GameState, board: Board) -> std::io::Result<()>;
    fn game_over(&mut self, state: &GameState, board: Board) -> std::io::Result<()>;
}

/// Crossterm renderer: one grid cell per terminal cell, a `#` frame
/// around the playfield, the score line underneath.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Takes over the terminal: raw mode, hidden cursor.
    pub fn init(&mut self) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.out, Hide)?;
        Ok(())
    }

    /// Hands the terminal back.
    pub fn restore(&mut self) -> std::io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.out, Show)?;
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, state: &GameState, board: Board) -> std::io::Result<()> {
        // The frame sits outside the playfield, so cell (x, y) lands at
        // terminal position (x + 1, y + 1).
        let right = (board.columns + 1) as u16;
        let bottom = (board.rows + 1) as u16;

        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;

        for x in 0..=right {
            execute!(self.out, MoveTo(x, 0), Print("#"), MoveTo(x, bottom), Print("#"))?;
        }
        for y in 1..bottom {
            execute!(self.out, MoveTo(0, y), Print("#"), MoveTo(right, y), Print("#"))?;
        }

        let food = state.food.position;
        execute!(
            self.out,
            MoveTo((food.x + 1) as u16, (food.y + 1) as u16),
            Print("*")
        )?;

        let head = state.snake.head();
        for segment in state.snake.segments() {
            // A freshly grown tail can trail off the grid for a few ticks.
            if !board.contains(segment) {
                continue;
            }
            let glyph = if segment == head { 'O' } else { 'o' };
            execute!(
                self.out,
                MoveTo((segment.x + 1) as u16, (segment.y + 1) as u16),
                Print(glyph)
            )?;
        }

        execute!(
            self.out,
            MoveTo(0, bottom + 1),
            Print(format!("Score : {}", state.score)),
            MoveTo(0, bottom + 2),
            Print("Use arrow keys to move, 'q' to quit")
        )?;

        self.out.flush()
    }

    fn game_over(&mut self, state: &GameState, board: Board) -> std::io::Result<()> {
        let bottom = (board.rows + 1) as u16;
        execute!(
            self.out,
            MoveTo(0, bottom + 3),
            Print(format!("Game Over !! Score : {}", state.score))
        )?;
        self.out.flush()
    }
}
