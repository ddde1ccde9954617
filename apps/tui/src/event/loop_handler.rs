use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;

use crate::app::{handle_input, App};
use crate::terminal::DashboardTerminal;
use crate::ui;

/// Configure event poll timeout (ms)
const EVENT_POLL_TIMEOUT: u64 = 50;

/// Run the main application event loop.
///
/// Each key event is handled to completion, including the filter and plot
/// update it triggers, before the next one is read.
pub fn run(terminal: &mut DashboardTerminal, app: &mut App) -> Result<()> {
    log::info!("Dashboard started");

    while app.running {
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                handle_input(app, key.code);
            }
            Ok(Event::Resize(width, height)) => {
                log::debug!("Resized to {width}x{height}");
            }
            Ok(_) => {}
            Err(e) => {
                log::warn!("Failed to read terminal event: {e}");
            }
        }
    }

    log::info!("Dashboard closed after {} plot update(s)", app.binder.plot().revision());
    Ok(())
}
