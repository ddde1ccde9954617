// Export our modules for use in the binary and tests
pub mod app;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod event;
pub mod terminal;
pub mod ui;

pub use dataset::{filter, Dataset, DatasetError, SeriesView};
pub use domain::{ControlEvent, ControlId, Selection};
