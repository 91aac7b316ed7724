//! # Delta Life
//!
//! Terminal front end: parses the configuration, sets up logging and either
//! runs a headless batch or the interactive `ratatui` interface.
//!
//! ## Controls
//!
//! * Space / p: Play/Pause the simulation
//! * Enter / n: Step forward one generation (when paused)
//! * Left mouse: Draw live cells
//! * Right mouse: Center the view on the cursor
//! * Arrow keys / Home: Pan the view / reset it
//! * c / r: Clear / re-randomize the grid
//! * q / Esc: Quit

use std::{
    fs::File,
    io,
    sync::Mutex,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use delta_life::{
    app::{App, Control},
    config::Config,
    terminal::{self, Tui},
    ui,
};

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("invalid configuration")?;
    init_logging(&config)?;

    let mut app = App::new(&config).context("failed to set up the grid")?;

    if config.headless {
        let stats = app.run_headless(config.generations);
        println!(
            "generation {}: population {}, created {}, destroyed {}, birth rate {:.2}/gen, death rate {:.2}/gen",
            stats.generation,
            stats.current_population,
            stats.cells_created,
            stats.cells_destroyed,
            stats.birth_rate(),
            stats.death_rate(),
        );
        return Ok(());
    }

    run_terminal(&mut app, config.tick_rate())
}

/// Headless runs log to stderr. The terminal UI owns the screen, so there
/// logs only go to `--log-file` when one is given.
fn init_logging(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if config.headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else if let Some(path) = &config.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }
    Ok(())
}

fn run_terminal(app: &mut App, tick_rate: Duration) -> Result<()> {
    terminal::install_panic_hook();
    let mut tui = terminal::enter().context("failed to set up the terminal")?;

    let result = run_event_loop(&mut tui, app, tick_rate);

    terminal::restore();
    result
}

fn run_event_loop(tui: &mut Tui, app: &mut App, tick_rate: Duration) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        tui.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key.code) == Control::Quit {
                        break;
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
