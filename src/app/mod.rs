pub mod headless;
pub mod input;
pub mod render;
pub mod shutdown;
pub mod state;

pub use headless::RunSummary;
pub use shutdown::ShutdownManager;
pub use state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;

use lifegrid_tui::Tui;

impl App {
    /// Interactive loop: one frame per interval tick at `target_fps`.
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let shutdown = ShutdownManager::new();
        shutdown.listen_for_ctrl_c();

        let frame = Duration::from_secs_f64(1.0 / self.config.driver.target_fps as f64);
        let mut interval = tokio::time::interval(frame);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        while self.running && !shutdown.is_shutdown_requested() {
            interval.tick().await;

            // Drain input without blocking the frame
            while event::poll(Duration::ZERO)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            self.tick();

            tui.terminal.draw(|f| {
                self.draw(f);
            })?;
        }

        tracing::info!(
            generation = self.generation,
            population = self.grid.population(),
            "Interactive session ended"
        );
        Ok(())
    }
}
