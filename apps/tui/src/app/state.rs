use crate::app::binder::ReactiveBinder;
use crate::app::controls::ControlPanel;
use crate::dataset::{summarize, Dataset, DatasetSummary, MONTHS_PER_SERIES};
use crate::domain::Selection;
use std::sync::Arc;

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub status_message: String,
    pub binder: ReactiveBinder,
    pub summary: DatasetSummary,
}

impl App {
    /// Wires the dataset into a fresh binder and plots the initial selection.
    pub fn new(dataset: Arc<Dataset>, panel: ControlPanel) -> Self {
        let summary = summarize(&dataset);
        let mut app = Self {
            running: true,
            show_help: false,
            status_message: String::new(),
            binder: ReactiveBinder::new(dataset, panel),
            summary,
        };
        app.refresh();
        app
    }

    pub fn selection(&self) -> Selection {
        self.binder.selection()
    }

    pub fn refresh(&mut self) {
        match self.binder.refresh() {
            Ok(()) => self.describe_series(),
            Err(e) => self.report(&e),
        }
    }

    /// Records the outcome of a binder call in the status line.
    pub fn record<T>(&mut self, outcome: Result<T, crate::app::StateTransitionError>) {
        match outcome {
            Ok(_) => self.describe_series(),
            Err(e) => self.report(&e),
        }
    }

    fn describe_series(&mut self) {
        let selection = self.selection();
        let points = self.binder.plot().series().len();
        self.status_message = match points {
            0 => format!(
                "No data for {} at ({}, {})",
                selection.year, selection.latitude, selection.longitude
            ),
            MONTHS_PER_SERIES => format!(
                "Showing {} at ({}, {})",
                selection.year, selection.latitude, selection.longitude
            ),
            n => format!(
                "Only {n} month(s) for {} at ({}, {})",
                selection.year, selection.latitude, selection.longitude
            ),
        };
    }

    fn report(&mut self, error: &crate::app::StateTransitionError) {
        log::error!("Plot update failed: {error}");
        self.status_message = format!("Error: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::InsolationRecord;
    use crate::domain::ControlId;

    fn app() -> App {
        let records = (1..=12)
            .map(|month| InsolationRecord::new(2005, 0.0, 0.0, f64::from(month)))
            .chain(std::iter::once(InsolationRecord::new(2005, 2.0, 0.0, 1.0)))
            .collect();
        App::new(Arc::new(Dataset::from_records(records)), ControlPanel::new())
    }

    #[test]
    fn new_plots_defaults_immediately() {
        let app = app();

        assert_eq!(app.binder.plot().series().len(), 12);
        assert_eq!(app.status_message, "Showing 2005 at (0, 0)");
        assert_eq!(app.summary.issues.len(), 1);
    }

    #[test]
    fn status_describes_short_and_empty_series() {
        let mut app = app();

        let outcome = app.binder.step(ControlId::Latitude, 1);
        app.record(outcome);
        assert_eq!(app.status_message, "Only 1 month(s) for 2005 at (2, 0)");

        let outcome = app.binder.step(ControlId::Latitude, 1);
        app.record(outcome);
        assert_eq!(app.status_message, "No data for 2005 at (4, 0)");
    }
}
