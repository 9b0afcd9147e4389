//! The rendering seam between a [`Simulation`](crate::Simulation) and whatever
//! displays the board.
//!
//! The simulation never draws. It tells a [`Renderer`] which cells to paint:
//! every living cell when a run starts, every changed cell after a step, and
//! every living cell (as dead) when the run is stopped.

use life_core::grid::Grid;

/// Receives per-cell paint instructions.
///
/// This trait is object-safe, so `Box<dyn Renderer>` works as a renderer.
pub trait Renderer {
    /// Called once before the initial cells of a run are painted.
    ///
    /// Renderers that keep their own board allocate a `side`×`side` one here.
    fn prepare(&mut self, _side: usize) {}

    /// Sets the visual state of the cell at `(row, col)`.
    fn paint(&mut self, row: usize, col: usize, alive: bool);
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn prepare(&mut self, side: usize) {
        (**self).prepare(side);
    }

    fn paint(&mut self, row: usize, col: usize, alive: bool) {
        (**self).paint(row, col, alive);
    }
}

/// A renderer that ignores every paint. Useful for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn paint(&mut self, _row: usize, _col: usize, _alive: bool) {}
}

/// A renderer that mirrors painted state into its own [`Grid`].
///
/// After any sequence of paints from a simulation, the buffer equals the
/// simulation's current generation.
#[derive(Debug, Default, Clone)]
pub struct FrameBuffer {
    board: Option<Grid>,
    paints: u64,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mirrored board, once [`Renderer::prepare`] has run.
    pub fn grid(&self) -> Option<&Grid> {
        self.board.as_ref()
    }

    /// Total number of paint calls received.
    pub fn paints(&self) -> u64 {
        self.paints
    }

    /// Renders the board as text, one line per row, `#` alive and `.` dead.
    pub fn to_text(&self) -> String {
        let Some(board) = &self.board else {
            return String::new();
        };
        let side = board.side();
        let mut out = String::with_capacity(side * (side + 1));
        for (_, col, alive) in board.iter() {
            out.push(if alive { '#' } else { '.' });
            if col + 1 == side {
                out.push('\n');
            }
        }
        out
    }
}

impl Renderer for FrameBuffer {
    fn prepare(&mut self, side: usize) {
        let reusable = self.board.as_ref().is_some_and(|b| b.side() == side);
        if !reusable {
            self.board = Grid::new(side).ok();
        }
    }

    fn paint(&mut self, row: usize, col: usize, alive: bool) {
        self.paints += 1;
        match self.board.as_mut() {
            Some(board) => board.set(row as isize, col as isize, alive),
            None => log::warn!("paint({row}, {col}) before the frame buffer was prepared"),
        }
    }
}
