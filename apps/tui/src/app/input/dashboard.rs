use crate::app::state::App;
use crossterm::event::KeyCode;

/// Grid steps moved by PageUp / PageDown.
const PAGE_STEPS: i32 = 5;

pub fn handle_dashboard_input(app: &mut App, key: KeyCode) {
    let focus = app.binder.panel().focus;

    match key {
        KeyCode::Up | KeyCode::BackTab => {
            app.binder.focus(focus.prev());
        }
        KeyCode::Down | KeyCode::Tab => {
            app.binder.focus(focus.next());
        }
        KeyCode::Left => {
            let outcome = app.binder.step(focus, -1);
            app.record(outcome);
        }
        KeyCode::Right => {
            let outcome = app.binder.step(focus, 1);
            app.record(outcome);
        }
        KeyCode::PageDown => {
            let outcome = app.binder.step(focus, -PAGE_STEPS);
            app.record(outcome);
        }
        KeyCode::PageUp => {
            let outcome = app.binder.step(focus, PAGE_STEPS);
            app.record(outcome);
        }
        KeyCode::Home => {
            let outcome = app.binder.to_min(focus);
            app.record(outcome);
        }
        KeyCode::End => {
            let outcome = app.binder.to_max(focus);
            app.record(outcome);
        }
        KeyCode::Char('r') => {
            let outcome = app.binder.reset();
            app.record(outcome);
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }
        _ => {}
    }
}
