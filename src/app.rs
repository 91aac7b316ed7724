//! Application state for the terminal front end.
//!
//! `App` owns the [`Grid`] and drives it from key presses, mouse input and
//! timer ticks. It never touches cell state directly: cells are only placed
//! through [`Grid::place_alive_cell`] and advanced through
//! [`Grid::advance_generation`].

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::layout::Rect;
use sysinfo::{System, SystemExt};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::LifeError;
use crate::grid::Grid;
use crate::stats::Stats;

/// Cells moved per arrow key press.
const PAN_STEP: usize = 4;

/// What the event loop should do after handling an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Top-left grid cell shown in the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub row: usize,
    pub col: usize,
}

/// Main application state container for the Game of Life simulation.
pub struct App {
    /// The simulated grid
    pub grid: Grid,
    /// Indicates whether the simulation is currently running
    pub running: bool,
    /// Statistics tracking for the simulation
    pub stats: Stats,
    /// Part of the grid currently on screen
    pub viewport: Viewport,
    /// Terminal cells the grid was last drawn into
    grid_area: Rect,
    density: f64,
    rng: StdRng,
    /// System information for resource monitoring
    sys: System,
}

impl App {
    /// Builds the grid described by `config`: random fill at `config.density`,
    /// then the optional pattern stamped in the middle.
    pub fn new(config: &Config) -> Result<App, LifeError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut grid = Grid::new(config.rows, config.cols);
        grid.randomize(&mut rng, config.density);
        if let Some(kind) = config.pattern {
            kind.pattern().place_centered(&mut grid)?;
        }

        info!(
            rows = config.rows,
            cols = config.cols,
            seed = ?config.seed,
            density = config.density,
            population = grid.population(),
            "grid initialised"
        );

        let mut sys = System::new();
        sys.refresh_memory();

        Ok(App {
            stats: Stats::new(grid.population()),
            grid,
            running: false,
            viewport: Viewport::default(),
            grid_area: Rect::default(),
            density: config.density,
            rng,
            sys,
        })
    }

    /// Advances the grid by one generation and updates statistics.
    pub fn step(&mut self) {
        let report = self.grid.advance_generation();
        self.stats.record_generation(report, self.grid.population());
        self.sys.refresh_memory();
        debug!(
            generation = self.stats.generation,
            births = report.births,
            deaths = report.deaths,
            population = self.stats.current_population,
            "advanced generation"
        );
    }

    /// Called once per timer tick; steps only while playing.
    pub fn tick(&mut self) {
        if self.running {
            self.step();
        }
    }

    /// Toggles the simulation between running and paused states.
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Runs `generations` steps without any terminal attached.
    pub fn run_headless(&mut self, generations: u64) -> &Stats {
        for _ in 0..generations {
            self.step();
        }
        info!(
            generations = self.stats.generation,
            population = self.stats.current_population,
            created = self.stats.cells_created,
            destroyed = self.stats.cells_destroyed,
            "headless run completed"
        );
        &self.stats
    }

    /// Applies one key press.
    ///
    /// # Returns
    ///
    /// [`Control::Quit`] for `q`/`Esc`, otherwise [`Control::Continue`].
    pub fn handle_key(&mut self, code: KeyCode) -> Control {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char(' ') | KeyCode::Char('p') => self.toggle_running(),
            KeyCode::Enter | KeyCode::Char('n') => {
                if !self.running {
                    self.step();
                }
            }
            KeyCode::Char('c') => {
                self.grid.clear();
                self.stats.current_population = 0;
            }
            KeyCode::Char('r') => {
                self.grid.randomize(&mut self.rng, self.density);
                self.stats.current_population = self.grid.population() as u64;
            }
            KeyCode::Up => self.pan(-(PAN_STEP as isize), 0),
            KeyCode::Down => self.pan(PAN_STEP as isize, 0),
            KeyCode::Left => self.pan(0, -(PAN_STEP as isize)),
            KeyCode::Right => self.pan(0, PAN_STEP as isize),
            KeyCode::Home => self.viewport = Viewport::default(),
            _ => {}
        }
        Control::Continue
    }

    /// Left button (held or dragged) draws live cells, right click centers
    /// the view on the clicked cell.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        let Some((row, col)) = self.cell_at(event.column, event.row) else {
            return;
        };
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                let placed = self.grid.place_alive_cell(row, col);
                self.stats.record_placement(placed, self.grid.population());
            }
            MouseEventKind::Down(MouseButton::Right) => self.center_on(row, col),
            _ => {}
        }
    }

    /// Records where the grid is drawn so mouse positions can be mapped back
    /// to cells. Re-clamps the viewport to the new size.
    pub fn set_grid_area(&mut self, area: Rect) {
        self.grid_area = area;
        self.clamp_viewport();
    }

    /// Terminal area the grid was last drawn into.
    pub fn grid_area(&self) -> Rect {
        self.grid_area
    }

    /// Maps a terminal position to the grid cell drawn there, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        let area = self.grid_area;
        if column < area.x || column >= area.right() || row < area.y || row >= area.bottom() {
            return None;
        }
        let r = self.viewport.row + usize::from(row - area.y);
        let c = self.viewport.col + usize::from(column - area.x);
        self.grid.contains(r, c).then_some((r, c))
    }

    fn pan(&mut self, rows: isize, cols: isize) {
        self.viewport.row = self.viewport.row.saturating_add_signed(rows);
        self.viewport.col = self.viewport.col.saturating_add_signed(cols);
        self.clamp_viewport();
    }

    fn center_on(&mut self, row: usize, col: usize) {
        self.viewport.row = row.saturating_sub(usize::from(self.grid_area.height) / 2);
        self.viewport.col = col.saturating_sub(usize::from(self.grid_area.width) / 2);
        self.clamp_viewport();
    }

    fn clamp_viewport(&mut self) {
        let max_row = self.grid.rows().saturating_sub(usize::from(self.grid_area.height));
        let max_col = self.grid.cols().saturating_sub(usize::from(self.grid_area.width));
        self.viewport.row = self.viewport.row.min(max_row);
        self.viewport.col = self.viewport.col.min(max_col);
    }

    /// Used and total memory in KB.
    pub fn memory_kb(&self) -> (u64, u64) {
        (self.sys.used_memory() / 1024, self.sys.total_memory() / 1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn empty_app(rows: usize, cols: usize) -> App {
        let config = Config {
            rows,
            cols,
            density: 0.0,
            seed: Some(1),
            ..Config::default()
        };
        App::new(&config).unwrap()
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = Config { rows: 0, ..Config::default() };
        assert!(matches!(App::new(&config), Err(LifeError::EmptyGrid { .. })));
    }

    #[test]
    fn test_new_with_pattern() {
        let config = Config {
            rows: 9,
            cols: 9,
            density: 0.0,
            seed: Some(3),
            pattern: Some(crate::patterns::PatternKind::Glider),
            ..Config::default()
        };
        let app = App::new(&config).unwrap();
        assert_eq!(app.grid.population(), 5);
        assert_eq!(app.stats.current_population, 5);
    }

    #[test]
    fn test_same_seed_same_grid() {
        let config = Config { rows: 20, cols: 20, seed: Some(42), ..Config::default() };
        let a = App::new(&config).unwrap();
        let b = App::new(&config).unwrap();
        assert_eq!(a.grid, b.grid);
    }

    #[test]
    fn test_space_toggles_and_tick_steps_only_when_running() {
        let mut app = empty_app(5, 5);
        app.tick();
        assert_eq!(app.stats.generation, 0);

        assert_eq!(app.handle_key(KeyCode::Char(' ')), Control::Continue);
        assert!(app.running);
        app.tick();
        assert_eq!(app.stats.generation, 1);
    }

    #[test]
    fn test_p_toggles_auto_play() {
        let mut app = empty_app(5, 5);
        assert_eq!(app.handle_key(KeyCode::Char('p')), Control::Continue);
        assert!(app.running);
        app.tick();
        assert_eq!(app.stats.generation, 1);
        app.handle_key(KeyCode::Char('p'));
        assert!(!app.running);
    }

    #[test]
    fn test_enter_steps_only_while_paused() {
        let mut app = empty_app(5, 5);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.stats.generation, 1);

        app.toggle_running();
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.stats.generation, 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = empty_app(3, 3);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Control::Quit);
    }

    #[test]
    fn test_mouse_places_cells_inside_area_only() {
        let mut app = empty_app(10, 10);
        app.set_grid_area(Rect::new(1, 1, 5, 5));

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 3, 2));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 3, 2));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 4, 2));
        // On the border, outside the drawn grid.
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));

        assert_eq!(app.grid.iter_alive().collect::<Vec<_>>(), vec![(1, 2), (1, 3)]);
        assert_eq!(app.stats.cells_placed, 2);
        assert_eq!(app.stats.current_population, 2);
    }

    #[test]
    fn test_cell_at_beyond_grid_edge() {
        let mut app = empty_app(3, 3);
        app.set_grid_area(Rect::new(0, 0, 10, 10));
        assert_eq!(app.cell_at(2, 2), Some((2, 2)));
        assert_eq!(app.cell_at(3, 0), None);
        assert_eq!(app.cell_at(0, 9), None);
    }

    #[test]
    fn test_pan_is_clamped() {
        let mut app = empty_app(20, 30);
        app.set_grid_area(Rect::new(0, 0, 10, 10));

        app.handle_key(KeyCode::Up);
        assert_eq!(app.viewport, Viewport::default());

        for _ in 0..10 {
            app.handle_key(KeyCode::Down);
            app.handle_key(KeyCode::Right);
        }
        assert_eq!(app.viewport, Viewport { row: 10, col: 20 });

        app.handle_key(KeyCode::Home);
        assert_eq!(app.viewport, Viewport::default());
    }

    #[test]
    fn test_right_click_centers_view() {
        let mut app = empty_app(100, 100);
        app.set_grid_area(Rect::new(0, 0, 10, 10));
        app.viewport = Viewport { row: 40, col: 40 };
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 9, 9));
        assert_eq!(app.viewport, Viewport { row: 44, col: 44 });
        assert_eq!(app.grid.population(), 0);
    }

    #[test]
    fn test_mouse_after_pan_maps_to_offset_cell() {
        let mut app = empty_app(50, 50);
        app.set_grid_area(Rect::new(1, 1, 10, 10));
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Right);
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 1, 1));
        assert!(app.grid.is_alive(PAN_STEP, PAN_STEP));
    }

    #[test]
    fn test_clear_and_randomize_keys() {
        let config = Config { rows: 10, cols: 10, density: 0.5, seed: Some(5), ..Config::default() };
        let mut app = App::new(&config).unwrap();
        app.handle_key(KeyCode::Char('c'));
        assert_eq!(app.grid.population(), 0);
        assert_eq!(app.stats.current_population, 0);

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.stats.current_population, app.grid.population() as u64);
    }

    #[test]
    fn test_run_headless_tracks_generations() {
        let config = Config {
            rows: 7,
            cols: 7,
            density: 0.0,
            seed: Some(1),
            pattern: Some(crate::patterns::PatternKind::Blinker),
            ..Config::default()
        };
        let mut app = App::new(&config).unwrap();
        let stats = app.run_headless(4).clone();
        assert_eq!(stats.generation, 4);
        assert_eq!(stats.cells_created, 8);
        assert_eq!(stats.cells_destroyed, 8);
        assert_eq!(stats.current_population, 3);
    }
}
