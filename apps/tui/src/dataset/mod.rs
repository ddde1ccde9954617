pub mod error;
pub mod loader;
pub mod models;
pub mod queries;

pub use error::{DatasetError, ErrorKind};
pub use loader::{Dataset, REQUIRED_COLUMNS};
pub use models::InsolationRecord;
pub use queries::{
    filter, filter_selection, month_label, summarize, AxisBounds, DatasetSummary, GroupIssue,
    SeriesView, MONTHS_PER_SERIES,
};
