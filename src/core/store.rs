//! Run-wide destination records.
//!
//! The store maps a destination to the most recent scan of it. Writers are the
//! functional tests (possibly in separate processes, one per test file); the
//! single reader is the report pass, which only runs after every writer has
//! finished. `put` always replaces an existing record for the destination.

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use crate::issues::Defect;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationRecord {
    pub destination_id: String,
    pub defects: Vec<Defect>,
    pub origin_test_label: String,
}

impl DestinationRecord {
    pub fn has_defects(&self) -> bool {
        !self.defects.is_empty()
    }
}

pub trait ResultStore {
    /// Store the latest scan of `destination_id`, replacing any earlier one.
    fn put(
        &mut self,
        destination_id: &str,
        defects: Vec<Defect>,
        origin_label: &str,
    ) -> Result<()>;

    /// Snapshot of every record. Order is unspecified.
    fn get_all(&self) -> Result<Vec<DestinationRecord>>;

    fn clear(&mut self) -> Result<()>;
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, DestinationRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for MemoryStore {
    fn put(
        &mut self,
        destination_id: &str,
        defects: Vec<Defect>,
        origin_label: &str,
    ) -> Result<()> {
        self.records.insert(
            destination_id.to_string(),
            DestinationRecord {
                destination_id: destination_id.to_string(),
                defects,
                origin_test_label: origin_label.to_string(),
            },
        );
        Ok(())
    }

    fn get_all(&self) -> Result<Vec<DestinationRecord>> {
        Ok(self.records.values().cloned().collect())
    }

    fn clear(&mut self) -> Result<()> {
        self.records.clear();
        Ok(())
    }
}

/// JSON file store shared by every process of a run.
///
/// Each `put` rewrites the whole file through a temporary file in the same
/// directory, so a reader never sees a half-written store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, DestinationRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|source| Error::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, records: &BTreeMap<String, DestinationRecord>) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;

        let json = serde_json::to_string_pretty(records).map_err(|source| Error::Json {
            path: self.path.clone(),
            source,
        })?;

        let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        temp.write_all(json.as_bytes())
            .map_err(|e| self.io_error(e))?;
        temp.persist(&self.path)
            .map_err(|e| self.io_error(e.error))?;

        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> Error {
        Error::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ResultStore for FileStore {
    fn put(
        &mut self,
        destination_id: &str,
        defects: Vec<Defect>,
        origin_label: &str,
    ) -> Result<()> {
        let mut records = self.load()?;
        records.insert(
            destination_id.to_string(),
            DestinationRecord {
                destination_id: destination_id.to_string(),
                defects,
                origin_test_label: origin_label.to_string(),
            },
        );
        self.save(&records)?;

        tracing::debug!(
            "Stored scan of {} in {}",
            destination_id,
            self.path.display()
        );
        Ok(())
    }

    fn get_all(&self) -> Result<Vec<DestinationRecord>> {
        Ok(self.load()?.into_values().collect())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}
