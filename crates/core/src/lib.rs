#![deny(unsafe_code)]
//! Core types for the toroidal Game of Life workspace.
//!
//! Provides the square toroidal `Grid`, run configuration (`SimConfig` and the
//! fixed constants), the `Xorshift64` PRNG used to seed generation 0, JSON
//! parameter helpers, and `LifeError`.

pub mod config;
pub mod error;
pub mod grid;
pub mod params;
pub mod prng;

pub use config::SimConfig;
pub use error::LifeError;
pub use grid::Grid;
pub use prng::Xorshift64;
