use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use lifegrid_tui::{GridWidget, HalfRow};

use super::App;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            KeyCode::Char(' ') => self.toggle_pause(),
            KeyCode::Char('n') => {
                self.pause();
                self.step_once();
            }
            KeyCode::Char('r') => self.reset(self.config.engine.seed),
            KeyCode::Char('R') => self.reset(None),
            KeyCode::Char('c') => self.clear(),
            KeyCode::Char('p') => self.next_pattern(),
            _ => {}
        }
    }

    /// Left click toggles the upper cell under the pointer; right click or
    /// shift+left toggles the lower one.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let half = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left)
                if mouse.modifiers.contains(KeyModifiers::SHIFT) =>
            {
                HalfRow::Lower
            }
            MouseEventKind::Down(MouseButton::Left) => HalfRow::Upper,
            MouseEventKind::Down(MouseButton::Right) => HalfRow::Lower,
            _ => return,
        };
        if let Some((x, y)) = GridWidget::cell_at(
            self.last_grid_rect,
            mouse.column,
            mouse.row,
            half,
            self.grid.width(),
            self.grid.height(),
        ) {
            self.toggle_cell(x, y);
        }
    }
}
