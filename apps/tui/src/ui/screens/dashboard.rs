use crate::app::App;
use crate::ui::widgets::charts::render_insolation_chart;
use crate::ui::widgets::controls::render_control_panel;
use crate::ui::widgets::popup::centered_rect;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub const WINDOW_TITLE: &str = "Solar Insolation Data";

pub fn render_dashboard(app: &App, f: &mut Frame<'_>) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title area
            Constraint::Min(10),   // Controls + chart
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_title_section(app, f, main_layout[0]);
    render_content_section(app, f, main_layout[1]);
    render_status_section(app, f, main_layout[2]);
    f.render_widget(Paragraph::new(shortcuts_line()), main_layout[3]);

    if app.show_help {
        let area = f.area();
        render_help_popup(f, area);
    }
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let selection = app.selection();
    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            WINDOW_TITLE,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  year {}  lat {}  lon {}",
                selection.year, selection.latitude, selection.longitude
            ),
            Style::default().fg(Color::White),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(title, area);
}

fn render_content_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(32), Constraint::Percentage(68)])
        .split(area);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(3)])
        .split(columns[0]);

    render_control_panel(app, f, side[0]);
    render_dataset_panel(app, f, side[1]);
    render_insolation_chart(app.binder.plot(), f, columns[1]);
}

fn render_dataset_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let summary = &app.summary;
    let label_style = Style::default().fg(Color::Gray);
    let value_style = Style::default().fg(Color::White);

    let years = match (summary.first_year, summary.last_year) {
        (Some(first), Some(last)) => format!("{first} - {last}"),
        _ => "-".to_string(),
    };

    let mut lines = vec![
        info_line("Rows", &summary.rows.to_string(), label_style, value_style),
        info_line("Locations", &summary.keys.to_string(), label_style, value_style),
        info_line("Years", &years, label_style, value_style),
    ];

    if !summary.issues.is_empty() {
        lines.push(info_line(
            "Incomplete",
            &summary.issues.len().to_string(),
            label_style,
            Style::default().fg(Color::Yellow),
        ));
    }

    let series = app.binder.plot().series();
    lines.push(TextLine::from(""));
    lines.push(info_line(
        "Months shown",
        &series.len().to_string(),
        label_style,
        value_style,
    ));

    let panel = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .title(" Dataset ")
            .title_style(Style::default().fg(Color::Green))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );

    f.render_widget(panel, area);
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let plot = app.binder.plot();
    let updated = plot
        .updated_at()
        .map(|at| at.format("%H:%M:%S").to_string())
        .unwrap_or_default();

    let status_style = if app.status_message.starts_with("Error") {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    };

    let status = Paragraph::new(TextLine::from(vec![
        Span::styled(app.status_message.clone(), status_style),
        Span::styled(
            format!("  (update #{} {updated})", plot.revision()),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(
        Block::default()
            .title(" Status ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray)),
    );

    f.render_widget(status, area);
}

fn info_line(
    label: &str,
    value: &str,
    label_style: Style,
    value_style: Style,
) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(format!("{label}: "), label_style),
        Span::styled(value.to_string(), value_style),
    ])
}

fn key_span(key: &'static str) -> Span<'static> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

fn shortcuts_line() -> TextLine<'static> {
    let hint = |text: &'static str| Span::styled(text, Style::default().fg(Color::Gray));

    TextLine::from(vec![
        key_span("?"),
        hint(": Help | "),
        key_span("Up/Down"),
        hint(": Select | "),
        key_span("Left/Right"),
        hint(": Step | "),
        key_span("PgUp/PgDn"),
        hint(": Step x5 | "),
        key_span("Home/End"),
        hint(": Min/Max | "),
        key_span("r"),
        hint(": Reset | "),
        key_span("q"),
        hint(": Quit"),
    ])
}

fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(70, 70, area);
    f.render_widget(Clear, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(TextLine::from(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };

    f.render_widget(hint, hint_area);
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let shortcut = |key: &'static str, text: &'static str| {
        TextLine::from(vec![key_span(key), Span::raw(format!(" - {text}"))])
    };

    let mut lines = vec![
        TextLine::from(Span::styled(
            WINDOW_TITLE,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(
            "Monthly solar insolation (kWh/m^2-day) for the selected year, latitude and longitude.",
        ),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        shortcut("  ? / F1", "Toggle this help popup"),
        shortcut("  Up / Down / Tab", "Select latitude, longitude or year"),
        shortcut("  Left / Right", "Move the selected control by one step"),
        shortcut("  PgUp / PgDn", "Move by five steps"),
        shortcut("  Home / End", "Jump to the minimum / maximum"),
        shortcut("  r", "Reset all controls to their defaults"),
        shortcut("  q / Esc", "Quit application"),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "CLI Options:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let help_text = crate::cli::CliArgs::help_text();
    for line in help_text.lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        lines.push(TextLine::from(line.to_string()));
    }

    lines
}
