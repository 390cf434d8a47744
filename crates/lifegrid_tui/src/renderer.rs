use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use lifegrid_core::GridView;

const HALF_BLOCK: &str = "▀";

/// Which of the two grid rows sharing a terminal line is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalfRow {
    Upper,
    Lower,
}

/// Draws the current generation straight from the engine's borrowed buffer.
///
/// Each terminal line shows two grid rows: the upper half-block takes the top
/// row's colour as foreground and the bottom row's as background.
pub struct GridWidget<'a> {
    view: GridView<'a>,
    live_color: Color,
    dead_color: Color,
}

impl<'a> GridWidget<'a> {
    pub fn new(view: GridView<'a>) -> Self {
        Self {
            view,
            live_color: Color::Rgb(0, 200, 0),
            dead_color: Color::Rgb(40, 40, 40),
        }
    }

    pub fn get_inner_area(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    /// Maps a terminal position inside `area` to the grid cell drawn there.
    ///
    /// A terminal line covers two grid rows; `half` picks between them.
    pub fn cell_at(
        area: Rect,
        column: u16,
        row: u16,
        half: HalfRow,
        grid_width: usize,
        grid_height: usize,
    ) -> Option<(i32, i32)> {
        let inner = Self::get_inner_area(area);
        if column < inner.x || row < inner.y {
            return None;
        }
        let x = usize::from(column - inner.x);
        let y = usize::from(row - inner.y) * 2 + usize::from(half == HalfRow::Lower);
        if column >= inner.right() || row >= inner.bottom() {
            return None;
        }
        if x >= grid_width || y >= grid_height {
            return None;
        }
        Some((x as i32, y as i32))
    }

    fn color(&self, value: u8) -> Color {
        if value == 1 {
            self.live_color
        } else {
            self.dead_color
        }
    }
}

impl Widget for GridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {}x{} ", self.view.width(), self.view.height()));
        let inner = block.inner(area);
        block.render(area, buf);

        let columns = usize::from(inner.width).min(self.view.width());
        let lines = usize::from(inner.height).min(self.view.height().div_ceil(2));

        for line in 0..lines {
            let top = line * 2;
            for x in 0..columns {
                let upper = self.color(self.view.get(x, top));
                let lower = self.color(self.view.get(x, top + 1));
                let pos = (inner.x + x as u16, inner.y + line as u16);
                if let Some(cell) = buf.cell_mut(pos) {
                    cell.set_symbol(HALF_BLOCK).set_fg(upper).set_bg(lower);
                }
            }
        }
    }
}

/// One-line summary under the grid.
pub struct StatusWidget {
    pub generation: u64,
    pub population: usize,
    pub fps: f64,
    pub running: bool,
    pub seed: u32,
}

impl Widget for StatusWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (state, state_color) = if self.running {
            ("RUNNING", Color::Green)
        } else {
            ("PAUSED", Color::Yellow)
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" {state} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(state_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "  gen {}  pop {}  {:.0} fps  seed {}",
                self.generation, self.population, self.fps, self.seed
            )),
            Span::styled(
                "  [space] run/pause  [n] step  [r] reset  [c] clear  [p] pattern  [q] quit",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_core::Grid;

    #[test]
    fn test_grid_widget_draws_half_blocks() {
        let mut grid = Grid::new();
        grid.set_cell(0, 0, 1);
        grid.set_cell(1, 1, 1);

        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        GridWidget::new(grid.view()).render(area, &mut buf);

        let first = buf.cell((1, 1)).unwrap();
        assert_eq!(first.symbol(), HALF_BLOCK);
        assert_eq!(first.fg, Color::Rgb(0, 200, 0));
        assert_eq!(first.bg, Color::Rgb(40, 40, 40));

        let second = buf.cell((2, 1)).unwrap();
        assert_eq!(second.fg, Color::Rgb(40, 40, 40));
        assert_eq!(second.bg, Color::Rgb(0, 200, 0));
    }

    #[test]
    fn test_cell_at_maps_inside_border() {
        let area = Rect::new(0, 0, 122, 42);
        let upper = HalfRow::Upper;
        assert_eq!(GridWidget::cell_at(area, 1, 1, upper, 120, 80), Some((0, 0)));
        assert_eq!(GridWidget::cell_at(area, 5, 3, upper, 120, 80), Some((4, 4)));
        assert_eq!(
            GridWidget::cell_at(area, 5, 3, HalfRow::Lower, 120, 80),
            Some((4, 5))
        );
        assert_eq!(GridWidget::cell_at(area, 0, 0, upper, 120, 80), None);
        assert_eq!(GridWidget::cell_at(area, 121, 1, upper, 120, 80), None);
    }

    #[test]
    fn test_cell_at_reaches_every_cell() {
        let area = Rect::new(0, 0, 122, 42);
        let mut reached = std::collections::HashSet::new();
        for row in 0..area.height {
            for column in 0..area.width {
                for half in [HalfRow::Upper, HalfRow::Lower] {
                    if let Some(cell) = GridWidget::cell_at(area, column, row, half, 120, 80) {
                        reached.insert(cell);
                    }
                }
            }
        }
        assert_eq!(reached.len(), 120 * 80);
        assert!(reached.contains(&(0, 1)));
        assert!(reached.contains(&(119, 79)));
    }
}
