//! Headless driver: run to a limit or a cycle, then report.

use serde::Serialize;
use std::time::Instant;

use super::{App, ShutdownManager};

/// Generations run when no limit is configured.
pub const DEFAULT_HEADLESS_GENERATIONS: u64 = 1000;

/// Outcome of a headless run.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RunSummary {
    pub seed: u32,
    pub generations: u64,
    pub population: usize,
    pub cycle_period: Option<usize>,
    pub fingerprint: String,
    pub elapsed_ms: u64,
    pub avg_step_us: u64,
}

impl App {
    /// Steps until the generation limit, a detected cycle or shutdown.
    pub fn run_headless(&mut self, shutdown: &ShutdownManager) -> RunSummary {
        let limit = self
            .config
            .driver
            .max_generations
            .unwrap_or(DEFAULT_HEADLESS_GENERATIONS);
        let started = Instant::now();

        self.start();
        while !self.paused && self.generation < limit && !shutdown.is_shutdown_requested() {
            self.step_once();
        }
        self.pause();

        let summary = self.summary(started.elapsed().as_millis() as u64);
        tracing::info!(
            generations = summary.generations,
            population = summary.population,
            cycle_period = ?summary.cycle_period,
            "Headless run finished"
        );
        summary
    }

    pub fn summary(&self, elapsed_ms: u64) -> RunSummary {
        RunSummary {
            seed: self.seed,
            generations: self.generation,
            population: self.grid.population(),
            cycle_period: self.cycle_period,
            fingerprint: self.grid.fingerprint(),
            elapsed_ms,
            avg_step_us: self.metrics.average_step().as_micros() as u64,
        }
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "seed:        {}", self.seed)?;
        writeln!(f, "generations: {}", self.generations)?;
        writeln!(f, "population:  {}", self.population)?;
        match self.cycle_period {
            Some(period) => writeln!(f, "cycle:       period {period}")?,
            None => writeln!(f, "cycle:       none detected")?,
        }
        writeln!(f, "fingerprint: {}", self.fingerprint)?;
        write!(
            f,
            "time:        {} ms ({} us/step)",
            self.elapsed_ms, self.avg_step_us
        )
    }
}
