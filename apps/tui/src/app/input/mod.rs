mod dashboard;

use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_input(app: &mut App, key: KeyCode) {
    if handle_help_toggle(app, key) {
        return;
    }

    dashboard::handle_dashboard_input(app, key);
}

fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if key == KeyCode::F(1) || key == KeyCode::Char('?') {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if key == KeyCode::Esc {
            app.show_help = false;
        }
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ControlPanel;
    use crate::dataset::{Dataset, InsolationRecord};
    use crate::domain::ControlId;
    use std::sync::Arc;

    fn app() -> App {
        let records = (1..=12)
            .map(|month| InsolationRecord::new(2005, 0.0, 0.0, f64::from(month)))
            .collect();
        App::new(Arc::new(Dataset::from_records(records)), ControlPanel::new())
    }

    #[test]
    fn help_popup_swallows_keys_until_closed() {
        let mut app = app();

        handle_input(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        handle_input(&mut app, KeyCode::Right);
        assert!(app.selection().latitude.abs() < f64::EPSILON);

        handle_input(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(app.running);
    }

    #[test]
    fn arrows_move_focus_and_value() {
        let mut app = app();

        handle_input(&mut app, KeyCode::Right);
        assert!((app.selection().latitude - 2.0).abs() < f64::EPSILON);

        handle_input(&mut app, KeyCode::Down);
        assert_eq!(app.binder.panel().focus, ControlId::Longitude);
        handle_input(&mut app, KeyCode::PageDown);
        assert!((app.selection().longitude + 10.0).abs() < f64::EPSILON);

        handle_input(&mut app, KeyCode::Up);
        handle_input(&mut app, KeyCode::Up);
        assert_eq!(app.binder.panel().focus, ControlId::Year);
        handle_input(&mut app, KeyCode::Home);
        assert_eq!(app.selection().year, 1983);

        handle_input(&mut app, KeyCode::Char('r'));
        assert_eq!(app.selection().year, 2005);
        assert!(app.selection().longitude.abs() < f64::EPSILON);
    }

    #[test]
    fn quit_keys_stop_the_app() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);

        let mut app = self::app();
        handle_input(&mut app, KeyCode::Esc);
        assert!(!app.running);
    }
}
