use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use lifegrid_tui::{GridWidget, StatusWidget};

use super::App;

impl App {
    pub fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(f.area());

        self.last_grid_rect = chunks[0];
        f.render_widget(GridWidget::new(self.grid.view()), chunks[0]);
        f.render_widget(
            StatusWidget {
                generation: self.generation,
                population: self.grid.population(),
                fps: self.fps,
                running: !self.paused,
                seed: self.seed,
            },
            chunks[1],
        );
    }
}
