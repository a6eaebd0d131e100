//! Dataset loading
//!
//! The dataset is a JSON array of records, read once at startup from a
//! fixed path. The read is the application's sole suspension point; there
//! is no retry, no re-fetch, no watching.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::record::{Record, RecordId};

/// The loaded, immutable record collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Wrap an already-materialized record list (tests, fixtures)
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Read and parse the dataset file.
    ///
    /// No schema validation beyond serde deserialization; sparse entries
    /// load with empty text slots.
    pub async fn load(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::DatasetNotFound {
                    path: PathBuf::from(path),
                }
            } else {
                Error::dataset_load(path, e.to_string())
            }
        })?;

        let records: Vec<Record> = serde_json::from_str(&raw)
            .map_err(|e| Error::dataset_load(path, e.to_string()))?;

        tracing::info!("loaded {} records from {}", records.len(), path.display());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id. Dataset order is preserved from the file;
    /// ids are assumed unique, the first match wins.
    pub fn find(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// First record in dataset order (the default desktop selection)
    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }
}
