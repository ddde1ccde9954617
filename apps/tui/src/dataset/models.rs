use serde::{Deserialize, Serialize};

/// One monthly reading for a (year, latitude, longitude) cell.
///
/// The month a row stands for is its position inside the group of rows that
/// share the same key. `month` is carried only when the file has a `Month`
/// column and is never used for ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsolationRecord {
    pub year: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub month: Option<u8>,
    /// kWh/m²/day
    pub insolation: f64,
}

impl InsolationRecord {
    pub const fn new(year: i32, latitude: f64, longitude: f64, insolation: f64) -> Self {
        Self {
            year,
            latitude,
            longitude,
            month: None,
            insolation,
        }
    }

    #[allow(clippy::float_cmp)]
    pub fn matches(&self, year: i32, latitude: f64, longitude: f64) -> bool {
        self.year == year && self.latitude == latitude && self.longitude == longitude
    }
}

/// Row layout as it appears in the CSV. Unknown columns are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct CsvRow {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Month", default, deserialize_with = "csv::invalid_option")]
    pub month: Option<u8>,
    #[serde(rename = "Insolation")]
    pub insolation: f64,
}

impl From<CsvRow> for InsolationRecord {
    fn from(row: CsvRow) -> Self {
        Self {
            year: row.year,
            latitude: row.latitude,
            longitude: row.longitude,
            month: row.month,
            insolation: row.insolation,
        }
    }
}
