//! Step metrics collection for the simulation.
//!
//! Provides structured logging and counters for monitoring how fast a
//! driver is advancing the grid.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Counters updated by a driver after each generation.
pub struct Metrics {
    step_count: AtomicU64,
    population: AtomicU64,
    step_nanos: AtomicU64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            step_count: AtomicU64::new(0),
            population: AtomicU64::new(0),
            step_nanos: AtomicU64::new(0),
        }
    }

    /// Records a completed generation with its duration.
    pub fn record_step(&self, duration: Duration, population: usize) {
        let steps = self.step_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.population.store(population as u64, Ordering::Relaxed);
        self.step_nanos
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);

        // Log at info level every 1000 generations
        if steps % 1000 == 0 {
            tracing::info!(
                steps = steps,
                population = population,
                avg_step_us = self.average_step().as_micros() as u64,
                "Simulation progress"
            );
        }
    }

    /// Clears every counter after the grid is reseeded or cleared.
    pub fn reset(&self) {
        self.step_count.store(0, Ordering::Relaxed);
        self.population.store(0, Ordering::Relaxed);
        self.step_nanos.store(0, Ordering::Relaxed);
    }

    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.step_count.load(Ordering::Relaxed)
    }

    /// Population after the most recent recorded step.
    #[must_use]
    pub fn population(&self) -> u64 {
        self.population.load(Ordering::Relaxed)
    }

    /// Mean wall time per recorded step.
    #[must_use]
    pub fn average_step(&self) -> Duration {
        let steps = self.step_count();
        if steps == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos(self.step_nanos.load(Ordering::Relaxed) / steps)
    }
}

/// Initialize tracing subscriber for logging to stderr.
///
/// Honours `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(default_filter())
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}

/// Initialize tracing to append to a file, for full-screen modes where stderr is the display.
pub fn init_file_logging(path: &std::path::Path) -> std::io::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(default_filter())
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .finish(),
    )
    .ok();
    Ok(())
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
