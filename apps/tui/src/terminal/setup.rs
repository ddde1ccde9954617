use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout, Write};

use crate::ui::screens::dashboard::WINDOW_TITLE;

pub type DashboardTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Switch to raw mode and the alternate screen, undoing each step if a
/// later one fails.
pub fn setup_terminal() -> Result<DashboardTerminal> {
    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    log::debug!("Terminal size: {width}x{height}");

    if let Err(e) = enable_raw_mode() {
        return Err(eyre!("Failed to enable raw mode: {e}"));
    }

    let mut stdout = stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, SetTitle(WINDOW_TITLE)) {
        let _ = disable_raw_mode();
        return Err(eyre!("Failed to enter alternate screen: {e}"));
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(term) => term,
        Err(e) => {
            let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(eyre!("Failed to create terminal: {e}"));
        }
    };

    // Not fatal
    if let Err(e) = terminal.clear() {
        log::warn!("Failed to clear terminal: {e}");
    }

    if let Err(e) = execute!(std::io::stdout(), cursor::Hide) {
        log::warn!("Failed to hide cursor: {e}");
    }

    log::debug!("Terminal setup completed");
    Ok(terminal)
}

/// Restore terminal to its initial state, logging but otherwise ignoring
/// failures.
pub fn cleanup_terminal_state(raw_mode: bool, alternate_screen: bool) {
    let mut stdout_handle = stdout();

    if let Err(e) = execute!(stdout_handle, cursor::Show) {
        log::warn!("Failed to show cursor: {e}");
    }

    if alternate_screen {
        if let Err(e) = execute!(stdout_handle, LeaveAlternateScreen) {
            log::warn!("Failed to leave alternate screen: {e}");
        }
    }

    if raw_mode {
        if let Err(e) = disable_raw_mode() {
            log::warn!("Failed to disable raw mode: {e}");
        }
    }

    // Force a newline to ensure the prompt appears correctly
    let _ = execute!(stdout_handle, cursor::MoveToNextLine(1));
    let _ = stdout_handle.flush();

    log::debug!("Terminal cleanup completed");
}
