use serde::Serialize;

/// One of the three selectors on the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlId {
    Year,
    Latitude,
    Longitude,
}

impl ControlId {
    /// Display order on the control panel.
    pub const ALL: [Self; 3] = [Self::Latitude, Self::Longitude, Self::Year];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Latitude => 0,
            Self::Longitude => 1,
            Self::Year => 2,
        }
    }

    /// Next selector in display order, wrapping after the last.
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous selector in display order, wrapping before the first.
    pub const fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Latitude => "Latitude",
            Self::Longitude => "Longitude",
        }
    }
}

/// The `{control_id, new_value}` message emitted when a selector changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ControlEvent {
    pub control: ControlId,
    pub value: f64,
}

/// The live (year, latitude, longitude) triple that drives the query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Selection {
    pub year: i32,
    pub latitude: f64,
    pub longitude: f64,
}

impl Selection {
    pub const fn new(year: i32, latitude: f64, longitude: f64) -> Self {
        Self {
            year,
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_display_order() {
        for (index, control) in ControlId::ALL.iter().enumerate() {
            assert_eq!(control.index(), index);
        }
    }

    #[test]
    fn focus_order_wraps_both_ways() {
        assert_eq!(ControlId::Latitude.next(), ControlId::Longitude);
        assert_eq!(ControlId::Longitude.next(), ControlId::Year);
        assert_eq!(ControlId::Year.next(), ControlId::Latitude);

        assert_eq!(ControlId::Latitude.prev(), ControlId::Year);
        assert_eq!(ControlId::Year.prev(), ControlId::Longitude);
        assert_eq!(ControlId::Longitude.prev(), ControlId::Latitude);
    }
}
