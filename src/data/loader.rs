//! CSV ingestion for the news dataset
//!
//! Validates required columns up front, then deserializes rows. A missing
//! required column is fatal and surfaces before any row is parsed.

use super::types::{EnrichedRecord, NewsRecord};
use csv::{Reader, Writer};
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Columns every input file must carry.
pub const REQUIRED_COLUMNS: &[&str] = &["headline", "date", "publisher"];

/// Errors raised while loading or saving the dataset
#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("required column missing from input: {0}")]
    MissingColumn(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Load news records from a CSV file.
///
/// Returns [`DataError::MissingColumn`] if any of [`REQUIRED_COLUMNS`] is
/// absent from the header row. The optional `stock` column is tolerated in
/// either direction.
pub fn load_news<P: AsRef<Path>>(path: P) -> Result<Vec<NewsRecord>, DataError> {
    let file = File::open(&path).map_err(|source| DataError::Io {
        path: format!("{:?}", path.as_ref()),
        source,
    })?;

    let mut reader = Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *required) {
            return Err(DataError::MissingColumn(required.to_string()));
        }
    }

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: NewsRecord = result?;
        records.push(record);
    }

    Ok(records)
}

/// Save enriched records to a CSV file.
pub fn save_enriched<P: AsRef<Path>>(
    records: &[EnrichedRecord],
    path: P,
) -> Result<(), DataError> {
    let file = File::create(&path).map_err(|source| DataError::Io {
        path: format!("{:?}", path.as_ref()),
        source,
    })?;

    let mut writer = Writer::from_writer(file);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|source| DataError::Io {
        path: format!("{:?}", path.as_ref()),
        source,
    })?;

    Ok(())
}
