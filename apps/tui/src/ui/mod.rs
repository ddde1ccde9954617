// UI module for insolation_dashboard
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    screens::dashboard::render_dashboard(app, f);
}
