use crate::app::plot::{PlotState, PLOT_TITLE, X_AXIS_TITLE, Y_AXIS_TITLE};
use crate::dataset::month_label;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset as ChartDataset, GraphType};
use ratatui::Frame;

/// Scatter of the current series inside the fixed axis frame.
pub fn render_insolation_chart(plot: &PlotState, f: &mut Frame<'_>, area: Rect) {
    let series = plot.series();
    let bounds = plot.bounds();
    let points = series.points();

    let title = if series.is_empty() {
        format!(" {PLOT_TITLE} (no data) ")
    } else {
        format!(" {PLOT_TITLE} ")
    };

    let datasets = vec![ChartDataset::default()
        .name("Insolation")
        .marker(Marker::Dot)
        .graph_type(GraphType::Scatter)
        .style(Style::default().fg(Color::Yellow))
        .data(&points)];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(title)
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .x_axis(
            Axis::default()
                .title(X_AXIS_TITLE)
                .style(Style::default().fg(Color::Gray))
                .bounds(bounds.x())
                .labels(x_labels()),
        )
        .y_axis(
            Axis::default()
                .title(Y_AXIS_TITLE)
                .style(Style::default().fg(Color::Gray))
                .bounds(bounds.y())
                .labels(y_labels(bounds.y())),
        );

    f.render_widget(chart, area);
}

/// One label per integer tick from 0 to 13, months in between.
fn x_labels() -> Vec<Span<'static>> {
    (0_u8..=13)
        .map(|tick| Span::raw(month_label(tick).unwrap_or("")))
        .collect()
}

fn y_labels([low, high]: [f64; 2]) -> Vec<Span<'static>> {
    let middle = (low + high) / 2.0;
    [low, middle, high]
        .iter()
        .map(|value| Span::raw(format!("{value:.1}")))
        .collect()
}
