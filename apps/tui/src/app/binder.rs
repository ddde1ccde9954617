use crate::app::controls::ControlPanel;
use crate::app::plot::PlotState;
use crate::dataset::{filter_selection, Dataset};
use crate::domain::{ControlEvent, ControlId, Selection};
use std::convert::TryFrom;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BinderState {
    Idle,
    Updating,
}

impl fmt::Display for BinderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Updating => write!(f, "Updating"),
        }
    }
}

#[derive(Clone, Debug)]
pub enum BinderEvent {
    Changed(ControlEvent),
    Refresh,
    Applied,
}

impl fmt::Display for BinderEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Changed(event) => {
                write!(f, "Changed({}={})", event.control.as_str(), event.value)
            }
            Self::Refresh => write!(f, "Refresh"),
            Self::Applied => write!(f, "Applied"),
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid transition from {from} with event {event}")]
pub struct StateTransitionError {
    pub from: BinderState,
    pub event: BinderEvent,
}

struct NextState(BinderState);

impl TryFrom<(BinderState, &BinderEvent)> for NextState {
    type Error = StateTransitionError;

    fn try_from(value: (BinderState, &BinderEvent)) -> Result<Self, Self::Error> {
        let (current_state, event) = value;

        match (current_state, event) {
            (BinderState::Idle, BinderEvent::Changed(_) | BinderEvent::Refresh) => {
                Ok(Self(BinderState::Updating))
            }
            (BinderState::Updating, BinderEvent::Applied) => Ok(Self(BinderState::Idle)),
            _ => Err(StateTransitionError {
                from: current_state,
                event: event.clone(),
            }),
        }
    }
}

#[derive(Debug)]
struct BinderMachine {
    state: BinderState,
}

impl BinderMachine {
    const fn new() -> Self {
        Self {
            state: BinderState::Idle,
        }
    }

    fn process_event(&mut self, event: &BinderEvent) -> Result<(), StateTransitionError> {
        let next_state = NextState::try_from((self.state, event))?;
        self.state = next_state.0;
        Ok(())
    }
}

/// Connects selector changes to the filter and the filter to the plot.
///
/// Every change event of a bound control runs one complete cycle: read all
/// three selector values, filter the dataset, replace the plotted series.
/// Events are never merged.
#[derive(Debug)]
pub struct ReactiveBinder {
    dataset: Arc<Dataset>,
    panel: ControlPanel,
    plot: PlotState,
    machine: BinderMachine,
    bound: [bool; 3],
}

impl ReactiveBinder {
    /// Binds all three selectors.
    pub fn new(dataset: Arc<Dataset>, panel: ControlPanel) -> Self {
        let mut binder = Self::unbound(dataset, panel);
        for control in ControlId::ALL {
            binder.bind(control);
        }
        binder
    }

    pub fn unbound(dataset: Arc<Dataset>, panel: ControlPanel) -> Self {
        Self {
            dataset,
            panel,
            plot: PlotState::new(),
            machine: BinderMachine::new(),
            bound: [false; 3],
        }
    }

    pub fn bind(&mut self, control: ControlId) {
        self.bound[control.index()] = true;
    }

    pub fn unbind(&mut self, control: ControlId) {
        self.bound[control.index()] = false;
    }

    pub const fn is_bound(&self, control: ControlId) -> bool {
        self.bound[control.index()]
    }

    pub const fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    pub const fn plot(&self) -> &PlotState {
        &self.plot
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub const fn state(&self) -> BinderState {
        self.machine.state
    }

    pub fn selection(&self) -> Selection {
        self.panel.selection()
    }

    pub fn focus(&mut self, control: ControlId) {
        self.panel.focus = control;
    }

    /// Applies a `{control_id, new_value}` message from the host UI.
    /// Returns whether the plot was redrawn.
    pub fn submit(&mut self, event: ControlEvent) -> Result<bool, StateTransitionError> {
        self.apply(|panel| panel.set(event.control, event.value))
    }

    pub fn step(&mut self, control: ControlId, steps: i32) -> Result<bool, StateTransitionError> {
        self.apply(|panel| panel.step_by(control, steps))
    }

    pub fn to_min(&mut self, control: ControlId) -> Result<bool, StateTransitionError> {
        self.apply(|panel| panel.to_min(control))
    }

    pub fn to_max(&mut self, control: ControlId) -> Result<bool, StateTransitionError> {
        self.apply(|panel| panel.to_max(control))
    }

    /// Restores defaults. Each control that moved triggers its own cycle.
    pub fn reset(&mut self) -> Result<usize, StateTransitionError> {
        let mut redraws = 0;
        for event in self.panel.reset() {
            if self.notify(event)? {
                redraws += 1;
            }
        }
        Ok(redraws)
    }

    /// Recomputes the plot for the current selection without a change event.
    pub fn refresh(&mut self) -> Result<(), StateTransitionError> {
        self.run_cycle(&BinderEvent::Refresh)
    }

    fn apply<F>(&mut self, change: F) -> Result<bool, StateTransitionError>
    where
        F: FnOnce(&mut ControlPanel) -> Option<ControlEvent>,
    {
        match change(&mut self.panel) {
            Some(event) => self.notify(event),
            None => Ok(false),
        }
    }

    fn notify(&mut self, event: ControlEvent) -> Result<bool, StateTransitionError> {
        if !self.is_bound(event.control) {
            log::debug!("{} changed but is not bound", event.control.as_str());
            return Ok(false);
        }

        self.run_cycle(&BinderEvent::Changed(event))?;
        Ok(true)
    }

    fn run_cycle(&mut self, trigger: &BinderEvent) -> Result<(), StateTransitionError> {
        self.machine.process_event(trigger)?;

        let selection = self.panel.selection();
        let view = filter_selection(&self.dataset, &selection);
        log::debug!(
            "{trigger}: year={} lat={} lon={} -> {} value(s)",
            selection.year,
            selection.latitude,
            selection.longitude,
            view.len()
        );
        self.plot.update(view);

        self.machine.process_event(&BinderEvent::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{AxisBounds, InsolationRecord};

    fn dataset() -> Arc<Dataset> {
        let mut records = Vec::new();
        for month in 1..=12 {
            records.push(InsolationRecord::new(2005, 0.0, 0.0, f64::from(month)));
        }
        for month in 1..=12 {
            records.push(InsolationRecord::new(2004, 0.0, 0.0, f64::from(month) * 0.5));
        }
        records.push(InsolationRecord::new(2005, 2.0, 0.0, 7.5));
        Arc::new(Dataset::from_records(records))
    }

    #[test]
    fn refresh_plots_the_default_selection() {
        let mut binder = ReactiveBinder::new(dataset(), ControlPanel::new());

        binder.refresh().unwrap();

        assert_eq!(binder.plot().series().len(), 12);
        assert_eq!(binder.plot().revision(), 1);
        assert_eq!(binder.state(), BinderState::Idle);
    }

    #[test]
    fn change_reads_the_full_selection() {
        let mut binder = ReactiveBinder::new(dataset(), ControlPanel::new());
        binder.refresh().unwrap();

        let redrawn = binder
            .submit(ControlEvent {
                control: ControlId::Latitude,
                value: 2.0,
            })
            .unwrap();

        assert!(redrawn);
        assert_eq!(binder.plot().series().values, vec![7.5]);
        assert_eq!(binder.state(), BinderState::Idle);

        binder.step(ControlId::Latitude, -1).unwrap();
        binder.step(ControlId::Year, -1).unwrap();
        assert_eq!(binder.plot().series().values[11], 6.0);
    }

    #[test]
    fn every_event_runs_its_own_cycle() {
        let mut binder = ReactiveBinder::new(dataset(), ControlPanel::new());

        for _ in 0..3 {
            binder.step(ControlId::Longitude, 1).unwrap();
        }

        assert_eq!(binder.plot().revision(), 3);
    }

    #[test]
    fn unchanged_value_does_not_redraw() {
        let mut binder = ReactiveBinder::new(dataset(), ControlPanel::new());

        assert!(!binder.to_max(ControlId::Year).unwrap());
        assert_eq!(binder.plot().revision(), 0);
    }

    #[test]
    fn unbound_control_updates_value_without_redraw() {
        let mut binder = ReactiveBinder::new(dataset(), ControlPanel::new());
        binder.unbind(ControlId::Year);

        assert!(!binder.step(ControlId::Year, -1).unwrap());
        assert_eq!(binder.selection().year, 2004);
        assert_eq!(binder.plot().revision(), 0);

        binder.bind(ControlId::Year);
        assert!(binder.step(ControlId::Year, -1).unwrap());
    }

    #[test]
    fn bounds_survive_any_sequence_of_changes() {
        let mut binder = ReactiveBinder::new(dataset(), ControlPanel::new());
        binder.refresh().unwrap();

        binder.to_min(ControlId::Latitude).unwrap();
        assert_eq!(binder.plot().bounds(), AxisBounds::FIXED);
        binder.to_max(ControlId::Longitude).unwrap();
        assert_eq!(binder.plot().bounds(), AxisBounds::FIXED);
        binder.reset().unwrap();
        assert_eq!(binder.plot().bounds(), AxisBounds::FIXED);
        assert_eq!(binder.plot().series().len(), 12);
    }

    #[test]
    fn reset_counts_one_redraw_per_moved_control() {
        let mut binder = ReactiveBinder::new(dataset(), ControlPanel::new());
        binder.step(ControlId::Latitude, 3).unwrap();
        binder.step(ControlId::Year, -2).unwrap();

        assert_eq!(binder.reset().unwrap(), 2);
        assert_eq!(binder.reset().unwrap(), 0);
    }

    #[test]
    fn machine_rejects_out_of_order_events() {
        let mut machine = BinderMachine::new();

        let err = machine.process_event(&BinderEvent::Applied).unwrap_err();
        assert_eq!(err.from, BinderState::Idle);

        machine.process_event(&BinderEvent::Refresh).unwrap();
        assert!(machine.process_event(&BinderEvent::Refresh).is_err());
        assert_eq!(machine.state, BinderState::Updating);
    }
}
