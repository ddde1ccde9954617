use crate::dataset::error::{DatasetError, Result};
use crate::dataset::models::{CsvRow, InsolationRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Headers that must be present in the insolation CSV.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Year", "Latitude", "Longitude", "Insolation"];

/// The insolation table, loaded once and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<InsolationRecord>,
    source: Option<PathBuf>,
}

impl Dataset {
    /// Reads the CSV at `path` into memory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading dataset from {}", path.display());

        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut dataset = Self::from_reader(file)?;
        dataset.source = Some(path.to_path_buf());

        log::info!(
            "Loaded {} insolation records from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Parses CSV content from any reader. Rows keep file order.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        check_columns(&headers)?;

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map_or(0, csv::Position::line);
            let row: CsvRow = record
                .deserialize(Some(&headers))
                .map_err(|source| DatasetError::InvalidRow { line, source })?;
            records.push(row.into());
        }

        Ok(Self {
            records,
            source: None,
        })
    }

    /// Builds a dataset from already-parsed records.
    pub const fn from_records(records: Vec<InsolationRecord>) -> Self {
        Self {
            records,
            source: None,
        }
    }

    pub fn records(&self) -> &[InsolationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn check_columns(headers: &StringRecord) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| (*column).to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DatasetError::MissingColumns(missing))
    }
}
