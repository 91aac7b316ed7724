//! Raw-mode terminal setup and teardown for the interactive front end.
//!
//! Every way out of the UI (normal quit, a setup error, an error from the
//! event loop, a panic) goes through [`restore`], so the shell is never left
//! in raw mode on the alternate screen.

use std::{
    io::{self, Stdout, Write},
    panic,
};

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::error;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switches to raw mode on the alternate screen with mouse capture.
///
/// If any step after enabling raw mode fails, the terminal is restored
/// before the error is returned.
pub fn enter() -> io::Result<Tui> {
    enable_raw_mode()?;
    let terminal = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));
    if terminal.is_err() {
        restore();
    }
    terminal
}

/// Leaves raw mode and the alternate screen. Failures are logged, not
/// returned, since this also runs while panicking.
pub fn restore() {
    if let Err(err) = disable_raw_mode() {
        error!(?err, "failed to disable raw mode");
    }
    if let Err(err) = reset_screen(&mut io::stdout()) {
        error!(?err, "failed to leave alternate screen");
    }
}

/// Writes the escape sequences that undo [`enter`]'s screen changes.
pub fn reset_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)
}

/// Restores the terminal before the default panic message is printed, so
/// the message lands on the normal screen.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore();
        default_hook(info);
    }));
}
