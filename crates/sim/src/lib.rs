#![deny(unsafe_code)]
//! Run orchestration for the toroidal Game of Life.
//!
//! [`Simulation`] owns one run: its configuration, the
//! [`GenerationEngine`], a [`Renderer`] and the run status. It decides when
//! the engine steps and when a run ends, which the engine never does itself.
//! [`driver::drive`] steps it on a fixed period.
//!
//! This crate also converts grids to RGBA pixels and, with the default `png`
//! feature, writes PNG snapshots.

pub mod driver;
pub mod pixel;
pub mod render;

#[cfg(feature = "png")]
pub mod snapshot;

use std::fmt;

use life_core::config::SimConfig;
use life_core::error::LifeError;
use life_core::grid::Grid;
use life_engine::{GenerationEngine, StepResult};
use serde::Serialize;

pub use render::{FrameBuffer, NullRenderer, Renderer};

/// Where a run stands, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// No run has been started.
    Idle,
    /// Generations are advancing.
    Running,
    /// The run was stopped by the user or hit its generation cap.
    Stopped,
    /// The run ended because every cell died.
    AllDead,
    /// The run ended because a generation repeated its predecessor.
    Stable,
}

impl RunStatus {
    pub fn is_running(self) -> bool {
        self == RunStatus::Running
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RunStatus::Idle => "idle",
            RunStatus::Running => "simulation started",
            RunStatus::Stopped => "simulation over",
            RunStatus::AllDead => "all cells are dead",
            RunStatus::Stable => "evolution has stopped",
        };
        f.write_str(text)
    }
}

/// Final counters of a run, captured by [`Simulation::stop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub generation: u64,
    pub deaths: u64,
    pub status: RunStatus,
}

/// One simulation run: configuration, engine, renderer and status.
pub struct Simulation<R: Renderer> {
    config: SimConfig,
    engine: GenerationEngine,
    renderer: R,
    status: RunStatus,
}

impl<R: Renderer> Simulation<R> {
    /// Creates an idle simulation. The configuration is normalized.
    pub fn new(config: SimConfig, renderer: R) -> Self {
        Self {
            config: config.normalized(),
            engine: GenerationEngine::new(),
            renderer,
            status: RunStatus::Idle,
        }
    }

    /// Starts a run from a random generation 0 drawn from the configuration.
    ///
    /// Returns `LifeError::AlreadyRunning` if a run is in progress.
    pub fn start(&mut self) -> Result<(), LifeError> {
        self.ensure_not_running()?;
        self.clear_board();
        let side = self.config.grid_size;
        self.renderer.prepare(side);
        let grid = self
            .engine
            .initialize(side, self.config.density, self.config.seed)?;
        paint_alive(&mut self.renderer, grid);
        self.begin();
        Ok(())
    }

    /// Starts a run whose generation 0 is `grid`.
    ///
    /// The grid's own side is used as-is.
    pub fn start_from(&mut self, grid: Grid) -> Result<(), LifeError> {
        self.ensure_not_running()?;
        self.clear_board();
        self.renderer.prepare(grid.side());
        paint_alive(&mut self.renderer, &grid);
        self.engine.load(grid);
        self.begin();
        Ok(())
    }

    fn ensure_not_running(&self) -> Result<(), LifeError> {
        if self.status.is_running() {
            return Err(LifeError::AlreadyRunning);
        }
        Ok(())
    }

    fn begin(&mut self) {
        self.status = RunStatus::Running;
        if let Some(grid) = self.engine.grid() {
            log::info!(
                "simulation started: {0}x{0} grid, {1} living cells",
                grid.side(),
                grid.population()
            );
        }
    }

    /// Advances one generation and relays the changed cells to the renderer.
    ///
    /// Returns `None` without stepping when no run is in progress. A result
    /// with `all_dead` (checked first) or `stable` ends the run; so does
    /// reaching `max_generations`.
    pub fn tick(&mut self) -> Option<StepResult> {
        if !self.status.is_running() {
            return None;
        }

        let result = self.engine.step();
        for d in &result.deltas {
            self.renderer.paint(d.row, d.col, d.alive);
        }

        if result.all_dead {
            self.finish(RunStatus::AllDead);
        } else if result.stable {
            self.finish(RunStatus::Stable);
        } else if self
            .config
            .max_generations
            .is_some_and(|cap| result.generation >= cap)
        {
            log::info!("generation cap {} reached", result.generation);
            self.finish(RunStatus::Stopped);
        }
        Some(result)
    }

    fn finish(&mut self, status: RunStatus) {
        log::info!(
            "{status} at generation {} ({} deaths)",
            self.engine.generation(),
            self.engine.deaths()
        );
        self.status = status;
    }

    /// Ends a running run without clearing the board, so the final grid
    /// stays readable until [`stop`](Self::stop).
    pub fn halt(&mut self) {
        if self.status.is_running() {
            self.finish(RunStatus::Stopped);
        }
    }

    /// Ends the run, clears the painted board and resets the engine.
    ///
    /// A running simulation ends as `Stopped`; an auto-terminated one keeps
    /// its `AllDead`/`Stable` status.
    pub fn stop(&mut self) -> RunSummary {
        self.halt();
        let summary = RunSummary {
            generation: self.engine.generation(),
            deaths: self.engine.deaths(),
            status: self.status,
        };
        self.clear_board();
        self.engine.reset();
        summary
    }

    /// Start/stop trigger: starts when no run is in progress, stops otherwise.
    pub fn toggle(&mut self) -> Result<Option<RunSummary>, LifeError> {
        if self.status.is_running() {
            Ok(Some(self.stop()))
        } else {
            self.start().map(|()| None)
        }
    }

    /// Paints every living cell of the current grid as dead.
    fn clear_board(&mut self) {
        if let Some(grid) = self.engine.grid() {
            for (row, col) in grid.alive_cells() {
                self.renderer.paint(row, col, false);
            }
        }
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }

    /// Current generation number of the run.
    pub fn generation(&self) -> u64 {
        self.engine.generation()
    }

    /// Cumulative deaths of the run.
    pub fn deaths(&self) -> u64 {
        self.engine.deaths()
    }

    /// The current generation, until the run is stopped.
    pub fn grid(&self) -> Option<&Grid> {
        self.engine.grid()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

fn paint_alive<R: Renderer>(renderer: &mut R, grid: &Grid) {
    for (row, col) in grid.alive_cells() {
        renderer.paint(row, col, true);
    }
}
