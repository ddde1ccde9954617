use crate::dataset::loader::Dataset;
use crate::dataset::models::InsolationRecord;
use crate::domain::Selection;
use serde::Serialize;
use std::collections::HashMap;

/// Months in a complete series.
pub const MONTHS_PER_SERIES: usize = 12;

const MONTH_LABELS: [&str; MONTHS_PER_SERIES] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short name for a 1-based month number.
pub fn month_label(month: u8) -> Option<&'static str> {
    MONTH_LABELS.get(usize::from(month).checked_sub(1)?).copied()
}

/// Fixed plot frame. Never derived from the data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisBounds {
    pub const FIXED: Self = Self {
        x_min: 0.0,
        x_max: 13.0,
        y_min: -0.5,
        y_max: 15.0,
    };

    pub const fn x(self) -> [f64; 2] {
        [self.x_min, self.x_max]
    }

    pub const fn y(self) -> [f64; 2] {
        [self.y_min, self.y_max]
    }
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self::FIXED
    }
}

/// Monthly values for one selection. `months[i]` is `i + 1`; both vectors
/// always have the same length, which is below 12 when the table holds fewer
/// matching rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeriesView {
    pub months: Vec<u8>,
    pub values: Vec<f64>,
}

impl SeriesView {
    fn from_values(values: Vec<f64>) -> Self {
        let months = (1_u8..).take(values.len()).collect();
        Self { months, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.values.len() == MONTHS_PER_SERIES
    }

    /// `(month, insolation)` pairs for the plotting surface.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.months
            .iter()
            .zip(&self.values)
            .map(|(month, value)| (f64::from(*month), *value))
            .collect()
    }
}

/// Selects rows whose year, latitude and longitude equal the arguments
/// exactly, in file order, and keeps the first twelve as January..December.
pub fn filter(dataset: &Dataset, year: i32, latitude: f64, longitude: f64) -> SeriesView {
    let values = dataset
        .records()
        .iter()
        .filter(|record| record.matches(year, latitude, longitude))
        .take(MONTHS_PER_SERIES)
        .map(|record| record.insolation)
        .collect();

    SeriesView::from_values(values)
}

pub fn filter_selection(dataset: &Dataset, selection: &Selection) -> SeriesView {
    filter(
        dataset,
        selection.year,
        selection.latitude,
        selection.longitude,
    )
}

/// A key whose rows do not form a clean January..December run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupIssue {
    pub year: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub rows: usize,
    /// A `Month` column exists and disagrees with row position.
    pub months_out_of_order: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub keys: usize,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    pub issues: Vec<GroupIssue>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct GroupKey(i32, u64, u64);

impl GroupKey {
    /// Hashes coordinates the way `filter` compares them: `-0.0 == 0.0`.
    fn of(record: &InsolationRecord) -> Self {
        Self(
            record.year,
            (record.latitude + 0.0).to_bits(),
            (record.longitude + 0.0).to_bits(),
        )
    }
}

struct GroupTally {
    year: i32,
    latitude: f64,
    longitude: f64,
    rows: usize,
    months_out_of_order: bool,
}

/// Scans the table for groups that would render as a short or misordered
/// series. Nothing is rejected; the result is informational.
pub fn summarize(dataset: &Dataset) -> DatasetSummary {
    let mut order: Vec<GroupKey> = Vec::new();
    let mut groups: HashMap<GroupKey, GroupTally> = HashMap::new();

    for record in dataset.records() {
        let key = GroupKey::of(record);
        let tally = groups.entry(key).or_insert_with_key(|key| {
            order.push(*key);
            GroupTally {
                year: record.year,
                latitude: record.latitude,
                longitude: record.longitude,
                rows: 0,
                months_out_of_order: false,
            }
        });

        tally.rows += 1;
        if let Some(month) = record.month {
            if usize::from(month) != tally.rows {
                tally.months_out_of_order = true;
            }
        }
    }

    let issues = order
        .iter()
        .filter_map(|key| groups.get(key))
        .filter(|tally| tally.rows != MONTHS_PER_SERIES || tally.months_out_of_order)
        .map(|tally| GroupIssue {
            year: tally.year,
            latitude: tally.latitude,
            longitude: tally.longitude,
            rows: tally.rows,
            months_out_of_order: tally.months_out_of_order,
        })
        .collect();

    let years = dataset.records().iter().map(|record| record.year);

    DatasetSummary {
        rows: dataset.len(),
        keys: groups.len(),
        first_year: years.clone().min(),
        last_year: years.max(),
        issues,
    }
}
