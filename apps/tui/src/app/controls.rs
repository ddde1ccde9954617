use crate::domain::{ControlEvent, ControlId, Selection};

/// Range and default for one selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSpec {
    pub default: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ControlSpec {
    pub const LATITUDE: Self = Self {
        default: 0.0,
        min: -90.0,
        max: 90.0,
        step: 2.0,
    };

    pub const LONGITUDE: Self = Self {
        default: 0.0,
        min: -180.0,
        max: 180.0,
        step: 2.0,
    };

    pub const YEAR: Self = Self {
        default: 2005.0,
        min: 1983.0,
        max: 2005.0,
        step: 1.0,
    };

    pub const fn for_control(control: ControlId) -> Self {
        match control {
            ControlId::Year => Self::YEAR,
            ControlId::Latitude => Self::LATITUDE,
            ControlId::Longitude => Self::LONGITUDE,
        }
    }

    /// Highest grid index that still lies inside `[min, max]`.
    fn last_step(&self) -> f64 {
        ((self.max - self.min) / self.step).floor()
    }

    /// Clamps to the range and snaps to the grid anchored at `min`.
    pub fn snap(&self, value: f64) -> f64 {
        let steps = ((value - self.min) / self.step)
            .round()
            .clamp(0.0, self.last_step());
        self.step.mul_add(steps, self.min)
    }
}

/// A bounded numeric selector.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericControl {
    pub id: ControlId,
    pub spec: ControlSpec,
    value: f64,
}

impl NumericControl {
    pub fn new(id: ControlId) -> Self {
        let spec = ControlSpec::for_control(id);
        Self {
            id,
            spec,
            value: spec.snap(spec.default),
        }
    }

    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Stores the snapped value. Returns the change event only if the stored
    /// value moved; non-finite input is ignored.
    pub fn set(&mut self, value: f64) -> Option<ControlEvent> {
        if !value.is_finite() {
            log::debug!("Ignoring non-finite value for {}", self.id.as_str());
            return None;
        }

        let snapped = self.spec.snap(value);
        if snapped.to_bits() == self.value.to_bits() {
            return None;
        }

        self.value = snapped;
        Some(ControlEvent {
            control: self.id,
            value: snapped,
        })
    }

    pub fn step_by(&mut self, steps: i32) -> Option<ControlEvent> {
        self.set(self.spec.step.mul_add(f64::from(steps), self.value))
    }

    /// Position of the value inside the range, 0.0..=1.0.
    pub fn ratio(&self) -> f64 {
        let span = self.spec.max - self.spec.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.value - self.spec.min) / span).clamp(0.0, 1.0)
    }
}

/// The three selectors plus keyboard focus.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPanel {
    controls: [NumericControl; 3],
    pub focus: ControlId,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self {
            controls: ControlId::ALL.map(NumericControl::new),
            focus: ControlId::ALL[0],
        }
    }

    pub const fn control(&self, id: ControlId) -> &NumericControl {
        &self.controls[id.index()]
    }

    pub const fn controls(&self) -> &[NumericControl; 3] {
        &self.controls
    }

    pub fn value(&self, id: ControlId) -> f64 {
        self.control(id).value()
    }

    pub fn set(&mut self, id: ControlId, value: f64) -> Option<ControlEvent> {
        self.controls[id.index()].set(value)
    }

    pub fn step_by(&mut self, id: ControlId, steps: i32) -> Option<ControlEvent> {
        self.controls[id.index()].step_by(steps)
    }

    pub fn to_min(&mut self, id: ControlId) -> Option<ControlEvent> {
        let min = self.control(id).spec.min;
        self.set(id, min)
    }

    pub fn to_max(&mut self, id: ControlId) -> Option<ControlEvent> {
        let max = self.control(id).spec.max;
        self.set(id, max)
    }

    /// Restores every default; returns one event per control that moved.
    pub fn reset(&mut self) -> Vec<ControlEvent> {
        self.controls
            .iter_mut()
            .filter_map(|control| control.set(control.spec.default))
            .collect()
    }

    /// Current values of all three selectors.
    #[allow(clippy::cast_possible_truncation)]
    pub fn selection(&self) -> Selection {
        // the year grid has integer min and step, so the value is integral
        Selection::new(
            self.value(ControlId::Year) as i32,
            self.value(ControlId::Latitude),
            self.value(ControlId::Longitude),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_configuration() {
        let panel = ControlPanel::new();

        assert_eq!(panel.selection(), Selection::new(2005, 0.0, 0.0));
        assert_eq!(panel.focus, ControlId::Latitude);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut panel = ControlPanel::new();

        panel.set(ControlId::Latitude, -120.0);
        panel.set(ControlId::Longitude, 400.0);
        panel.set(ControlId::Year, 1900.0);
        assert_eq!(panel.selection(), Selection::new(1983, -90.0, 180.0));

        panel.set(ControlId::Latitude, 91.0);
        panel.set(ControlId::Longitude, -181.0);
        panel.set(ControlId::Year, 2100.0);
        assert_eq!(panel.selection(), Selection::new(2005, 90.0, -180.0));
    }

    #[test]
    fn values_snap_to_the_step_grid() {
        let mut panel = ControlPanel::new();

        panel.set(ControlId::Latitude, 35.0);
        panel.set(ControlId::Longitude, 80.9);
        panel.set(ControlId::Year, 1994.4);

        let selection = panel.selection();
        assert_eq!(selection.year, 1994);
        assert!((selection.latitude - 36.0).abs() < f64::EPSILON);
        assert!((selection.longitude - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn grid_never_overshoots_an_unaligned_max() {
        let spec = ControlSpec {
            default: 0.0,
            min: 0.0,
            max: 5.0,
            step: 2.0,
        };

        assert!((spec.snap(5.0) - 4.0).abs() < f64::EPSILON);
        assert!((spec.snap(100.0) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn set_emits_only_on_change() {
        let mut panel = ControlPanel::new();

        assert_eq!(panel.set(ControlId::Year, 2005.0), None);
        assert_eq!(panel.set(ControlId::Year, 2010.0), None);
        assert_eq!(
            panel.set(ControlId::Year, 2000.0),
            Some(ControlEvent {
                control: ControlId::Year,
                value: 2000.0,
            })
        );
    }

    #[test]
    fn non_finite_values_are_ignored() {
        let mut panel = ControlPanel::new();

        assert_eq!(panel.set(ControlId::Latitude, f64::NAN), None);
        assert_eq!(panel.set(ControlId::Latitude, f64::INFINITY), None);
        assert!(panel.value(ControlId::Latitude).abs() < f64::EPSILON);
    }

    #[test]
    fn step_by_moves_along_the_grid() {
        let mut panel = ControlPanel::new();

        panel.step_by(ControlId::Latitude, 5);
        assert!((panel.value(ControlId::Latitude) - 10.0).abs() < f64::EPSILON);

        panel.step_by(ControlId::Year, -3);
        assert_eq!(panel.selection().year, 2002);

        assert_eq!(panel.step_by(ControlId::Year, 10).map(|e| e.value), Some(2005.0));
        assert_eq!(panel.step_by(ControlId::Year, 1), None);
    }

    #[test]
    fn reset_reports_each_moved_control() {
        let mut panel = ControlPanel::new();
        panel.to_min(ControlId::Latitude);
        panel.to_max(ControlId::Longitude);

        let events = panel.reset();

        assert_eq!(events.len(), 2);
        assert_eq!(panel.selection(), Selection::new(2005, 0.0, 0.0));
    }

    #[test]
    fn ratio_spans_the_range() {
        let mut panel = ControlPanel::new();
        assert!((panel.control(ControlId::Latitude).ratio() - 0.5).abs() < f64::EPSILON);

        panel.to_max(ControlId::Latitude);
        assert!((panel.control(ControlId::Latitude).ratio() - 1.0).abs() < f64::EPSILON);
        assert!((panel.control(ControlId::Year).ratio() - 1.0).abs() < f64::EPSILON);
    }
}
