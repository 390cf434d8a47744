//! # Lifegrid Core
//!
//! The simulation engine for Lifegrid - Conway's Game of Life on a fixed toroidal grid.
//!
//! This crate contains the deterministic simulation logic, including:
//! - A double-buffered cell grid with wrap-around topology
//! - The B3/S23 transition rule
//! - A seeded linear-congruential initializer
//! - A zero-copy read-only view for rendering hosts
//! - Configuration, error types and structured logging shared by the hosts
//!
//! ## Example
//!
//! ```
//! use lifegrid_core::Grid;
//!
//! let mut grid = Grid::new();
//! grid.init_random(42);
//! grid.step();
//!
//! // The host reads the current generation in place.
//! let view = grid.view();
//! assert_eq!(view.len(), grid.size());
//! ```

/// Configuration management for the engine and its drivers
pub mod config;
/// Error types for configuration loading
pub mod error;
/// Double-buffered toroidal grid and the transition rule
pub mod grid;
/// Step metrics collection and logging setup
pub mod metrics;
/// Named seed patterns (glider, block, oscillators)
pub mod pattern;
/// Linear-congruential generator used by the initializer
pub mod rng;

pub use config::{AppConfig, DriverConfig, EngineConfig};
pub use error::{ConfigError, Result};
pub use grid::{Grid, GridView, DEFAULT_DENSITY, HEIGHT, SIZE, WIDTH};
pub use metrics::{init_file_logging, init_logging, Metrics};
pub use pattern::Pattern;
pub use rng::Lcg;
