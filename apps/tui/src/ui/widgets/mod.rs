pub mod charts;
pub mod controls;
pub mod popup;
