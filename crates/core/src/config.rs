//! Run configuration and the fixed constants of the simulation.
//!
//! A [`SimConfig`] captures everything needed to reproduce a run: grid side,
//! initial density, step interval, PRNG seed and an optional generation cap.
//! Out-of-range values are clamped, never rejected.

use crate::error::LifeError;
use crate::params::{param_f64, param_opt_u64, param_u64, param_usize};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Grid side used when nothing else is configured.
pub const DEFAULT_GRID_SIZE: usize = 100;
/// Smallest grid side a run may use.
pub const MIN_GRID_SIZE: usize = 10;
/// Milliseconds between generations.
pub const STEP_INTERVAL_MS: u64 = 500;
/// Probability that a cell starts alive.
pub const LIVING_CELL_DENSITY: f64 = 0.1;
/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// Clamps a requested grid side: absent or below [`MIN_GRID_SIZE`] becomes the minimum.
pub fn clamp_grid_size(requested: Option<usize>) -> usize {
    match requested {
        Some(size) if size >= MIN_GRID_SIZE => size,
        _ => MIN_GRID_SIZE,
    }
}

/// Parameters of one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimConfig {
    pub grid_size: usize,
    pub density: f64,
    pub interval_ms: u64,
    pub seed: u64,
    #[serde(default)]
    pub max_generations: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            density: LIVING_CELL_DENSITY,
            interval_ms: STEP_INTERVAL_MS,
            seed: DEFAULT_SEED,
            max_generations: None,
        }
    }
}

impl SimConfig {
    /// Reads overrides from a JSON object, falling back to defaults for missing keys.
    ///
    /// Recognized keys: `grid_size`, `density`, `interval_ms`, `seed`,
    /// `max_generations`. The result is not yet normalized.
    pub fn from_json(params: &Value) -> Result<Self, LifeError> {
        let defaults = Self::default();
        Ok(Self {
            grid_size: param_usize(params, "grid_size", defaults.grid_size)?,
            density: param_f64(params, "density", defaults.density)?,
            interval_ms: param_u64(params, "interval_ms", defaults.interval_ms)?,
            seed: param_u64(params, "seed", defaults.seed)?,
            max_generations: param_opt_u64(params, "max_generations")?,
        })
    }

    /// Returns a copy with every value forced into its valid range.
    ///
    /// Grid side is raised to [`MIN_GRID_SIZE`], density clamped to [0, 1]
    /// (NaN becomes the default density), and a zero interval raised to 1 ms.
    pub fn normalized(&self) -> Self {
        let grid_size = clamp_grid_size(Some(self.grid_size));
        if grid_size != self.grid_size {
            log::warn!(
                "grid size {} is below the minimum, using {grid_size}",
                self.grid_size
            );
        }
        let density = if self.density.is_nan() {
            log::warn!("density is NaN, using {LIVING_CELL_DENSITY}");
            LIVING_CELL_DENSITY
        } else {
            self.density.clamp(0.0, 1.0)
        };
        Self {
            grid_size,
            density,
            interval_ms: self.interval_ms.max(1),
            seed: self.seed,
            max_generations: self.max_generations,
        }
    }
}
