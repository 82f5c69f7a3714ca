//! Terminal lifecycle: raw mode, alternate screen, cursor and window size
//!
//! [`TerminalController`] is the only place that changes terminal modes. It
//! restores them on [`TerminalController::restore`], on drop, and from a panic
//! hook, so every way out of the dashboard leaves a usable shell behind.

use std::io::{self, IsTerminal, Stdout};
use std::sync::Once;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tracing::debug;

use crate::error::{Error, Result};
use crate::ui::DisplayBudget;

/// Owns the raw-mode terminal for the lifetime of the dashboard
pub struct TerminalController {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl TerminalController {
    /// Switch to raw mode, enter the alternate screen and hide the cursor.
    ///
    /// Fails without touching the terminal if stdin is not a terminal or its
    /// attributes cannot be read.
    pub fn enter() -> Result<Self> {
        if !io::stdin().is_terminal() {
            return Err(Error::NotATerminal);
        }
        enable_raw_mode().map_err(Error::TerminalAttributes)?;
        install_panic_hook();

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide, MoveTo(0, 0)) {
            let _ = restore_terminal();
            return Err(e.into());
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = restore_terminal();
                return Err(e.into());
            }
        };

        debug!("entered raw mode and alternate screen");
        Ok(Self {
            terminal,
            active: true,
        })
    }

    /// Current terminal size, queried fresh on every call
    pub fn window_size(&self) -> io::Result<DisplayBudget> {
        let (cols, rows) = match terminal::size() {
            Ok(size) => size,
            Err(_) => {
                let size = self.terminal.size()?;
                (size.width, size.height)
            }
        };
        Ok(DisplayBudget { rows, cols })
    }

    /// Paint one frame
    pub fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render).map(|_| ())
    }

    /// Undo every mode change. Safe to call more than once.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        restore_terminal()
    }
}

impl Drop for TerminalController {
    fn drop(&mut self) {
        // Best-effort restore; errors have nowhere to go here
        let _ = self.restore();
    }
}

fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), Show, LeaveAlternateScreen);
    raw.and(screen)
}

/// Restore the terminal before the panic message is printed
fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            original_hook(info);
        }));
    });
}
