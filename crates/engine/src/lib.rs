#![deny(unsafe_code)]
//! Toroidal Game of Life generation engine.
//!
//! [`GenerationEngine`] owns the current [`Grid`] and advances it one
//! generation at a time under the B3/S23 rules:
//! - a dead cell with exactly three living neighbors is born;
//! - a living cell with two or three living neighbors survives;
//! - every other living cell dies, every other dead cell stays dead.
//!
//! Each step reads the previous grid and writes a fresh one, then reports the
//! changed cells so a renderer only repaints what moved. Termination flags
//! (`all_dead`, `stable`) are reported, never acted on: stopping is the
//! caller's job.
//!
//! `stable` only detects period-1 fixed points. Oscillators such as the
//! blinker change every generation and never report `stable`.

use life_core::error::LifeError;
use life_core::grid::Grid;
use life_core::prng::Xorshift64;
use serde::Serialize;

/// One cell whose state differs between two consecutive generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellDelta {
    pub row: usize,
    pub col: usize,
    pub alive: bool,
}

/// Outcome of one [`GenerationEngine::step`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepResult {
    /// Generation number of the grid just produced.
    pub generation: u64,
    /// Cumulative alive→dead transitions since initialization.
    pub deaths: u64,
    /// Alive→dead transitions in this step alone.
    pub died: u64,
    /// Changed cells in row-major order.
    pub deltas: Vec<CellDelta>,
    /// No cell of the new generation is alive.
    pub all_dead: bool,
    /// The new generation is identical to the previous one.
    pub stable: bool,
}

impl StepResult {
    /// Dead→alive transitions in this step.
    pub fn born(&self) -> u64 {
        self.deltas.iter().filter(|d| d.alive).count() as u64
    }

    /// True when either termination flag is set.
    pub fn is_terminal(&self) -> bool {
        self.all_dead || self.stable
    }
}

/// Counters and termination flags of the current run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunState {
    pub generation: u64,
    pub deaths: u64,
    pub all_dead: bool,
    pub stable: bool,
}

/// Next state of a cell given its current state and living-neighbor count.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Advances a square toroidal grid one generation at a time.
#[derive(Debug, Default)]
pub struct GenerationEngine {
    grid: Option<Grid>,
    state: RunState,
}

impl GenerationEngine {
    /// Creates an engine with no grid. Call [`initialize`](Self::initialize)
    /// or [`load`](Self::load) before stepping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine whose generation 0 is `grid`.
    pub fn from_grid(grid: Grid) -> Self {
        let mut engine = Self::new();
        engine.load(grid);
        engine
    }

    /// Draws a random `size`×`size` generation 0.
    ///
    /// Cells are visited in row-major order and each is alive when a uniform
    /// sample from `Xorshift64::new(seed)` is `<= density`. `density` is
    /// clamped to [0, 1]. Counters restart at zero.
    ///
    /// Returns `LifeError::InvalidDimensions` if `size` is zero. The minimum
    /// grid side of a run is enforced by the caller's configuration.
    pub fn initialize(
        &mut self,
        size: usize,
        density: f64,
        seed: u64,
    ) -> Result<&Grid, LifeError> {
        let density = density.clamp(0.0, 1.0);
        let mut rng = Xorshift64::new(seed);
        let mut grid = Grid::new(size)?;
        for row in 0..size {
            for col in 0..size {
                if rng.chance(density) {
                    grid.set(row as isize, col as isize, true);
                }
            }
        }
        log::debug!(
            "initialized {size}x{size} grid with {} living cells (density {density}, seed {seed})",
            grid.population()
        );
        self.state = RunState::default();
        Ok(&*self.grid.insert(grid))
    }

    /// Installs `grid` as generation 0 and zeroes the counters.
    pub fn load(&mut self, grid: Grid) {
        self.state = RunState::default();
        self.grid = Some(grid);
    }

    /// Computes the next generation and replaces the current grid with it.
    ///
    /// On an engine without a grid this does nothing and returns an empty
    /// result with both termination flags set.
    pub fn step(&mut self) -> StepResult {
        let Some(prev) = self.grid.as_ref() else {
            log::warn!("step() called on an engine with no grid");
            return StepResult {
                generation: self.state.generation,
                deaths: self.state.deaths,
                died: 0,
                deltas: Vec::new(),
                all_dead: true,
                stable: true,
            };
        };

        let side = prev.side();
        let mut next = prev.clone();
        let mut deltas = Vec::new();
        let mut any_alive = false;
        let mut died = 0_u64;

        for row in 0..side {
            for col in 0..side {
                let alive = prev.get(row as isize, col as isize);
                let becomes = next_state(alive, prev.living_neighbors(row, col));

                if becomes != alive {
                    if alive {
                        died += 1;
                    }
                    next.set(row as isize, col as isize, becomes);
                    deltas.push(CellDelta {
                        row,
                        col,
                        alive: becomes,
                    });
                }
                any_alive |= becomes;
            }
        }

        self.grid = Some(next);
        self.state = RunState {
            generation: self.state.generation + 1,
            deaths: self.state.deaths + died,
            all_dead: !any_alive,
            stable: deltas.is_empty(),
        };

        let result = StepResult {
            generation: self.state.generation,
            deaths: self.state.deaths,
            died,
            deltas,
            all_dead: self.state.all_dead,
            stable: self.state.stable,
        };
        log::debug!(
            "generation {}: {} born, {} died, {} total deaths",
            result.generation,
            result.born(),
            result.died,
            result.deaths
        );
        result
    }

    /// Discards the grid and zeroes the counters and flags.
    pub fn reset(&mut self) {
        self.grid = None;
        self.state = RunState::default();
    }

    /// The current generation, if one is installed.
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Counters and flags of the current run.
    pub fn run_state(&self) -> RunState {
        self.state
    }

    /// Current generation number (0 for the initial grid).
    pub fn generation(&self) -> u64 {
        self.state.generation
    }

    /// Cumulative alive→dead transitions since initialization.
    pub fn deaths(&self) -> u64 {
        self.state.deaths
    }
}
