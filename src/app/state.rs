use anyhow::{anyhow, Result};
use ratatui::layout::Rect;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use lifegrid_core::pattern::{self, Pattern, PATTERNS};
use lifegrid_core::{AppConfig, Grid, Metrics};

/// Generations remembered for cycle detection.
const HISTORY_LEN: usize = 10;

/// Drives a [`Grid`]: owns the lifecycle state the engine deliberately lacks.
pub struct App {
    /// False once the user quits.
    pub running: bool,
    pub paused: bool,
    pub generation: u64,
    pub seed: u32,
    pub grid: Grid,
    pub config: AppConfig,
    pub metrics: Metrics,
    /// Period of the repeat that last auto-paused the run.
    pub cycle_period: Option<usize>,
    // FPS & Timing
    pub fps: f64,
    pub frame_count: u64,
    pub last_fps_update: Instant,
    // Layout tracking
    pub last_grid_rect: Rect,
    history: VecDeque<u64>,
    /// Index into [`PATTERNS`] of the last pattern stamped with `p`.
    last_pattern: Option<usize>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.engine.seed.unwrap_or_else(fresh_seed);
        let mut grid = Grid::new();
        grid.init_with_density(seed, config.engine.density);

        tracing::info!(
            seed = seed,
            population = grid.population(),
            config = %config.fingerprint(),
            "Simulation ready"
        );

        Ok(Self {
            running: true,
            paused: !config.driver.autostart,
            generation: 0,
            seed,
            grid,
            metrics: Metrics::new(),
            config,
            cycle_period: None,
            fps: 0.0,
            frame_count: 0,
            last_fps_update: Instant::now(),
            last_grid_rect: Rect::default(),
            history: VecDeque::with_capacity(HISTORY_LEN),
            last_pattern: None,
        })
    }

    /// Resumes stepping. Refused once the generation limit is reached;
    /// `reset` or `clear` lifts it.
    pub fn start(&mut self) {
        if self.limit_reached() {
            tracing::debug!(
                generation = self.generation,
                "Start refused at generation limit"
            );
            return;
        }
        if self.paused {
            self.paused = false;
            self.cycle_period = None;
            // A cycle already seen must not re-pause the run on its first step.
            self.history.clear();
            tracing::debug!(generation = self.generation, "Simulation started");
        }
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            tracing::debug!(generation = self.generation, "Simulation paused");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.start();
        } else {
            self.pause();
        }
    }

    /// Re-seeds the grid, or draws a fresh seed when `seed` is `None`.
    ///
    /// Generation goes back to zero and the driver pauses.
    pub fn reset(&mut self, seed: Option<u32>) {
        self.seed = seed.unwrap_or_else(fresh_seed);
        self.grid
            .init_with_density(self.seed, self.config.engine.density);
        self.generation = 0;
        self.paused = true;
        self.cycle_period = None;
        self.history.clear();
        self.metrics.reset();
        tracing::info!(seed = self.seed, "Simulation reset");
    }

    /// Kills every cell; generation goes back to zero.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.cycle_period = None;
        self.history.clear();
        self.metrics.reset();
    }

    /// Stamps a named pattern, centred on the grid, over the current cells.
    pub fn place_pattern(&mut self, name: &str) -> Result<()> {
        let pattern = pattern::by_name(name).ok_or_else(|| {
            let known: Vec<&str> = PATTERNS.iter().map(|p| p.name).collect();
            anyhow!("unknown pattern `{name}` (known: {})", known.join(", "))
        })?;
        self.stamp(pattern);
        Ok(())
    }

    /// Clears the grid and stamps the next pattern of the catalogue.
    pub fn next_pattern(&mut self) {
        let index = self.last_pattern.map_or(0, |i| (i + 1) % PATTERNS.len());
        self.clear();
        self.pause();
        self.stamp(&PATTERNS[index]);
        self.last_pattern = Some(index);
    }

    /// The pattern last stamped with [`next_pattern`](Self::next_pattern).
    #[must_use]
    pub fn current_pattern(&self) -> Option<&'static Pattern> {
        self.last_pattern.map(|i| &PATTERNS[i])
    }

    fn stamp(&mut self, pattern: &Pattern) {
        let x = (self.grid.width() / 2) as i32;
        let y = (self.grid.height() / 2) as i32;
        self.grid.place_pattern(pattern, x, y);
        self.history.clear();
        tracing::info!(pattern = pattern.name, x = x, y = y, "Pattern placed");
    }

    pub fn toggle_cell(&mut self, x: i32, y: i32) {
        self.grid.toggle_cell(x, y);
        self.history.clear();
    }

    /// True once `generation` has hit `driver.max_generations`.
    #[must_use]
    pub fn limit_reached(&self) -> bool {
        self.config
            .driver
            .max_generations
            .is_some_and(|limit| self.generation >= limit)
    }

    /// Advances one generation regardless of the paused flag, unless the
    /// generation limit is reached.
    pub fn step_once(&mut self) {
        if self.limit_reached() {
            return;
        }
        let start = Instant::now();
        self.grid.step();
        self.generation += 1;
        let population = self.grid.population();
        self.metrics.record_step(start.elapsed(), population);

        if let Some(limit) = self.config.driver.max_generations {
            if self.generation >= limit {
                tracing::info!(generation = self.generation, "Generation limit reached");
                self.pause();
            }
        }

        if self.config.driver.stop_on_cycle {
            self.check_for_cycle();
        }
    }

    /// Called once per frame: steps when running and keeps the FPS counter current.
    ///
    /// Returns how many generations were computed.
    pub fn tick(&mut self) -> u32 {
        let mut steps = 0;
        while !self.paused
            && !self.limit_reached()
            && steps < self.config.driver.steps_per_frame
        {
            self.step_once();
            steps += 1;
        }
        self.record_frame();
        steps
    }

    fn check_for_cycle(&mut self) {
        let hash = self.grid.state_hash();
        if let Some(pos) = self.history.iter().rposition(|&h| h == hash) {
            let period = self.history.len() - pos;
            self.cycle_period = Some(period);
            tracing::info!(
                generation = self.generation,
                period = period,
                population = self.grid.population(),
                "Cycle detected"
            );
            self.pause();
        }
        if self.history.len() == HISTORY_LEN {
            self.history.pop_front();
        }
        self.history.push_back(hash);
    }

    fn record_frame(&mut self) {
        self.frame_count += 1;
        let elapsed = self.last_fps_update.elapsed();
        if elapsed >= Duration::from_secs(1) {
            self.fps = self.frame_count as f64 / elapsed.as_secs_f64();
            self.frame_count = 0;
            self.last_fps_update = Instant::now();
        }
    }
}

fn fresh_seed() -> u32 {
    rand::random()
}
