// App module for insolation_dashboard
// Handles selector state, the plot model and the binding between them

pub mod binder;
pub mod controls;
pub mod input;
pub mod plot;
pub mod state;

pub use binder::{BinderState, ReactiveBinder, StateTransitionError};
pub use controls::{ControlPanel, ControlSpec, NumericControl};
pub use input::handle_input;
pub use plot::PlotState;
pub use state::App;
