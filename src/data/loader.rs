use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{Penguin, PenguinDataset};

/// The published Palmer penguins table (CC0), 344 rows.
pub const BUNDLED_CSV: &str = include_str!("../../assets/penguins.csv");

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("CSV row {row}")]
    Record {
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("CSV row {row}: missing {field}")]
    MissingField { row: usize, field: &'static str },
    #[error("dataset contains no rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Data source
// ---------------------------------------------------------------------------

/// Where the dataset comes from. Read once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DataSource {
    /// The copy compiled into the binary, see [`BUNDLED_CSV`].
    #[default]
    Bundled,
    /// A `penguins.csv` file in the published layout.
    Csv(PathBuf),
}

impl DataSource {
    pub fn load(&self) -> Result<PenguinDataset, LoadError> {
        match self {
            DataSource::Bundled => {
                let dataset = read_csv(BUNDLED_CSV.as_bytes())?;
                log::info!("Loaded {} penguins from the bundled dataset", dataset.len());
                Ok(dataset)
            }
            DataSource::Csv(path) => load_csv(path),
        }
    }
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// One record of the published CSV:
///
/// ```text
/// species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex,year
/// Adelie,Torgersen,39.1,18.7,181,3750,male,2007
/// Adelie,Torgersen,NA,NA,NA,NA,NA,2007
/// ```
///
/// Unparsable numeric cells (`NA`, empty) become `None`. Unknown columns are
/// ignored.
#[derive(Debug, Deserialize)]
struct PenguinRecord {
    #[serde(default)]
    species: String,
    #[serde(default)]
    island: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    bill_length_mm: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    bill_depth_mm: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    flipper_length_mm: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    body_mass_g: Option<f64>,
    #[serde(default)]
    sex: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    year: Option<i32>,
}

impl PenguinRecord {
    fn into_penguin(self, row: usize) -> Result<Penguin, LoadError> {
        let species = required(self.species, row, "species")?;
        let island = required(self.island, row, "island")?;
        Ok(Penguin {
            species,
            island,
            bill_length_mm: self.bill_length_mm,
            bill_depth_mm: self.bill_depth_mm,
            flipper_length_mm: self.flipper_length_mm,
            body_mass_g: self.body_mass_g,
            sex: self.sex.and_then(present),
            year: self.year,
        })
    }
}

fn present(s: String) -> Option<String> {
    let s = s.trim();
    (!s.is_empty() && s != "NA").then(|| s.to_string())
}

fn required(value: String, row: usize, field: &'static str) -> Result<String, LoadError> {
    present(value).ok_or(LoadError::MissingField { row, field })
}

/// Load a penguins CSV file from disk.
pub fn load_csv(path: &Path) -> Result<PenguinDataset, LoadError> {
    let reader = csv::Reader::from_path(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = read_records(reader)?;
    log::info!("Loaded {} penguins from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Parse penguins CSV text from any reader.
pub fn read_csv<R: io::Read>(input: R) -> Result<PenguinDataset, LoadError> {
    read_records(csv::Reader::from_reader(input))
}

fn read_records<R: io::Read>(mut reader: csv::Reader<R>) -> Result<PenguinDataset, LoadError> {
    let mut rows = Vec::new();
    for (i, result) in reader.deserialize::<PenguinRecord>().enumerate() {
        // 1-based data rows, header excluded.
        let row = i + 1;
        let record = result.map_err(|source| LoadError::Record { row, source })?;
        rows.push(record.into_penguin(row)?);
    }
    if rows.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(PenguinDataset::from_rows(rows))
}
