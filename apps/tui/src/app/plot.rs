use crate::dataset::{AxisBounds, SeriesView};
use chrono::{DateTime, Local};

pub const PLOT_TITLE: &str = "Solar Insolation";
pub const X_AXIS_TITLE: &str = "Month";
pub const Y_AXIS_TITLE: &str = "Insolation (kWh/m^2-day)";

/// What the chart currently shows.
#[derive(Debug, Clone)]
pub struct PlotState {
    series: SeriesView,
    bounds: AxisBounds,
    revision: u64,
    updated_at: Option<DateTime<Local>>,
}

impl Default for PlotState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotState {
    pub fn new() -> Self {
        Self {
            series: SeriesView::default(),
            bounds: AxisBounds::FIXED,
            revision: 0,
            updated_at: None,
        }
    }

    /// Swaps in a new series in one assignment and reasserts the fixed frame.
    pub fn update(&mut self, view: SeriesView) {
        self.series = view;
        self.bounds = AxisBounds::FIXED;
        self.revision += 1;
        self.updated_at = Some(Local::now());
    }

    pub const fn series(&self) -> &SeriesView {
        &self.series
    }

    pub const fn bounds(&self) -> AxisBounds {
        self.bounds
    }

    /// Number of updates applied so far.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    pub fn updated_at(&self) -> Option<DateTime<Local>> {
        self.updated_at
    }
}
