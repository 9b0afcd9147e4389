//! Error types for the life workspace.
//!
//! The generation algorithm itself cannot fail. These errors cover grid
//! construction, configuration overrides, run lifecycle misuse, and snapshot I/O.

use thiserror::Error;

/// Errors produced by grid, configuration and simulation operations.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Grid side was zero, or `side * side` overflowed `usize`.
    #[error("invalid dimensions: grid side must be non-zero and side * side must fit in usize")]
    InvalidDimensions,

    /// A cell buffer did not hold exactly `side * side` cells.
    #[error("dimension mismatch: expected {expected} cells, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A configuration key existed but had the wrong JSON type.
    #[error("parameter type mismatch for '{name}': expected {expected}, got {got}")]
    ParamTypeMismatch {
        name: String,
        expected: String,
        got: String,
    },

    /// `start()` was called on a simulation that is already running.
    #[error("simulation is already running")]
    AlreadyRunning,

    /// Writing a snapshot failed.
    #[error("i/o error: {0}")]
    Io(String),
}
