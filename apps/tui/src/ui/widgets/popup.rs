use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rectangle of the given percentage size centred in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let band = |direction: Direction, percent: u16, area: Rect| {
        let margin = (100 - percent.min(100)) / 2;
        Layout::default()
            .direction(direction)
            .constraints([
                Constraint::Percentage(margin),
                Constraint::Percentage(percent),
                Constraint::Percentage(margin),
            ])
            .split(area)[1]
    };

    band(
        Direction::Horizontal,
        percent_x,
        band(Direction::Vertical, percent_y, area),
    )
}
