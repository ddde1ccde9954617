use crate::app::controls::NumericControl;
use crate::app::App;
use crate::domain::ControlId;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Gauge};
use ratatui::Frame;

/// One gauge per selector, focused selector highlighted.
pub fn render_control_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let panel = app.binder.panel();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    for (index, control) in panel.controls().iter().enumerate() {
        let focused = control.id == panel.focus;
        f.render_widget(control_gauge(control, focused), rows[index]);
    }
}

fn control_gauge(control: &NumericControl, focused: bool) -> Gauge<'static> {
    let (border, bar) = if focused {
        (Color::Yellow, Color::Yellow)
    } else {
        (Color::Gray, Color::Cyan)
    };

    let title = format!(
        " {} [{} .. {}, step {}] ",
        control.id.label(),
        control.spec.min,
        control.spec.max,
        control.spec.step
    );

    let mut title_style = Style::default().fg(border);
    if focused {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    Gauge::default()
        .block(
            Block::default()
                .title(title)
                .title_style(title_style)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .gauge_style(Style::default().fg(bar).bg(Color::Black))
        .ratio(control.ratio())
        .label(Span::styled(
            value_label(control),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
}

fn value_label(control: &NumericControl) -> String {
    match control.id {
        ControlId::Year => format!("{}", control.value()),
        ControlId::Latitude | ControlId::Longitude => format!("{}°", control.value()),
    }
}
