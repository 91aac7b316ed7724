//! Terminal rendering with `ratatui`: the visible part of the grid on the
//! left, the statistics panel on the right.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Viewport};
use crate::grid::Grid;

const ALIVE: char = '•';
const DEAD: char = ' ';

/// Lays out the grid and statistics panels and draws both.
///
/// Also stores the grid's inner area on `app`, which mouse input relies on
/// to map terminal positions back to cells.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)].as_ref())
        .split(f.size());

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Game of Life [Space/p: Play/Pause | Enter: Step | Mouse: Draw | c: Clear | r: Random | q: Quit]");
    app.set_grid_area(block.inner(chunks[0]));

    draw_grid(f, app, block, chunks[0]);
    draw_stats(f, app, chunks[1]);
}

/// Renders the `height` x `width` window of the grid starting at `viewport`,
/// one line per row. The window is cut short at the grid's edges.
pub fn visible_rows(grid: &Grid, viewport: Viewport, height: usize, width: usize) -> Vec<String> {
    let row_end = (viewport.row + height).min(grid.rows());
    let col_end = (viewport.col + width).min(grid.cols());
    (viewport.row..row_end)
        .map(|row| {
            (viewport.col..col_end)
                .map(|col| if grid.is_alive(row, col) { ALIVE } else { DEAD })
                .collect()
        })
        .collect()
}

/// Draws the visible part of the game grid.
fn draw_grid(f: &mut Frame, app: &App, block: Block, area: Rect) {
    let inner = app.grid_area();
    let cells = visible_rows(
        &app.grid,
        app.viewport,
        usize::from(inner.height),
        usize::from(inner.width),
    )
    .join("\n");

    let paragraph = Paragraph::new(cells)
        .style(Style::default().fg(Color::White))
        .block(block);

    f.render_widget(paragraph, area);
}

/// Draws the statistics panel.
fn draw_stats(f: &mut Frame, app: &App, area: Rect) {
    let (memory_used, memory_total) = app.memory_kb();
    let stats = &app.stats;

    let stats_text = format!(
        "Statistics:\n\
        Grid: {}x{}\n\
        Generation: {}\n\
        Current Population: {}\n\
        Cells Created: {}\n\
        Cells Destroyed: {}\n\
        Cells Placed: {}\n\
        Birth Rate: {:.2}/gen\n\
        Death Rate: {:.2}/gen\n\
        Memory Usage: {}KB/{:.2}MB\n\
        View: row {}, col {}\n\
        Status: {}\n",
        app.grid.rows(),
        app.grid.cols(),
        stats.generation,
        stats.current_population,
        stats.cells_created,
        stats.cells_destroyed,
        stats.cells_placed,
        stats.birth_rate(),
        stats.death_rate(),
        memory_used,
        memory_total as f64 / 1024.0,
        app.viewport.row,
        app.viewport.col,
        if app.running { "Running" } else { "Paused" }
    );

    let stats_widget = Paragraph::new(stats_text)
        .block(Block::default().borders(Borders::ALL).title("Statistics"))
        .wrap(Wrap { trim: true });

    f.render_widget(stats_widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &mut App, width: u16, height: u16) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
    }

    #[test]
    fn test_draw_records_grid_area_for_mouse_mapping() {
        let config = Config { rows: 30, cols: 100, density: 0.0, seed: Some(1), ..Config::default() };
        let mut app = App::new(&config).unwrap();
        assert_eq!(app.cell_at(1, 1), None);

        render(&mut app, 80, 20);
        let area = app.grid_area();
        // Inside the left panel's border.
        assert_eq!((area.x, area.y, area.height), (1, 1, 18));
        assert!(area.width > 0 && area.width < 79);

        assert_eq!(app.cell_at(1, 1), Some((0, 0)));
        assert_eq!(app.cell_at(3, 6), Some((5, 2)));
        assert_eq!(app.cell_at(0, 0), None);
        assert_eq!(app.cell_at(area.right(), 1), None);

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 6,
            modifiers: KeyModifiers::NONE,
        });
        assert!(app.grid.is_alive(5, 2));
    }

    #[test]
    fn test_draw_clamps_viewport_to_new_area() {
        let config = Config { rows: 30, cols: 100, density: 0.0, seed: Some(1), ..Config::default() };
        let mut app = App::new(&config).unwrap();
        app.viewport = Viewport { row: 29, col: 99 };

        render(&mut app, 80, 20);
        let area = app.grid_area();
        assert_eq!(app.viewport.row, 30 - usize::from(area.height));
        assert_eq!(app.viewport.col, 100 - usize::from(area.width));
    }

    #[test]
    fn test_visible_rows_window() {
        let mut grid = Grid::new(4, 6);
        grid.place_alive_cell(1, 2);
        grid.place_alive_cell(3, 5);

        let rows = visible_rows(&grid, Viewport { row: 1, col: 2 }, 2, 3);
        assert_eq!(rows, vec!["•  ".to_string(), "   ".to_string()]);
    }

    #[test]
    fn test_visible_rows_clipped_at_edge() {
        let mut grid = Grid::new(3, 3);
        grid.place_alive_cell(2, 2);

        let rows = visible_rows(&grid, Viewport { row: 1, col: 1 }, 10, 10);
        assert_eq!(rows, vec!["  ".to_string(), " •".to_string()]);
    }
}
