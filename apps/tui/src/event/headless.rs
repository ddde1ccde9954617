use color_eyre::Result;
use serde::Serialize;

use crate::app::plot::{PLOT_TITLE, Y_AXIS_TITLE};
use crate::app::App;
use crate::dataset::{month_label, AxisBounds, DatasetSummary, SeriesView};
use crate::domain::Selection;

#[derive(Debug, Serialize)]
pub struct HeadlessReport {
    pub title: &'static str,
    pub source: Option<String>,
    pub selection: Selection,
    pub bounds: AxisBounds,
    pub series: SeriesView,
    pub summary: DatasetSummary,
}

pub fn build_report(app: &App) -> HeadlessReport {
    HeadlessReport {
        title: PLOT_TITLE,
        source: app
            .binder
            .dataset()
            .source()
            .map(|path| path.display().to_string()),
        selection: app.selection(),
        bounds: app.binder.plot().bounds(),
        series: app.binder.plot().series().clone(),
        summary: app.summary.clone(),
    }
}

/// Print the current series without opening the terminal UI.
pub fn run_headless(app: &App, json: bool) -> Result<()> {
    let report = build_report(app);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}

fn render_text(report: &HeadlessReport) -> String {
    let mut out = String::new();
    let heading = format!(
        "{} - year {}, latitude {}, longitude {}",
        report.title, report.selection.year, report.selection.latitude, report.selection.longitude
    );
    out.push_str(&format!("\n{heading}\n{}\n", "=".repeat(heading.len())));

    if let Some(source) = &report.source {
        out.push_str(&format!("Dataset: {source}\n"));
    }
    out.push_str(&format!(
        "Rows: {} | Locations: {} | Incomplete groups: {}\n\n",
        report.summary.rows,
        report.summary.keys,
        report.summary.issues.len()
    ));

    if report.series.is_empty() {
        out.push_str("No data for this selection.\n");
        return out;
    }

    out.push_str(&format!("Month  {Y_AXIS_TITLE}\n"));
    for (month, value) in report.series.months.iter().zip(&report.series.values) {
        let label = month_label(*month).unwrap_or("?");
        out.push_str(&format!("{label:<5}  {value:.2}\n"));
    }

    out
}
