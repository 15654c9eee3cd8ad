//! Flat-file JSON persistence for the watch list.

use std::fs;
use std::path::PathBuf;

use crate::domain::entities::watch_item::WatchItem;
use crate::domain::error::DomainError;
use crate::domain::ports::watch_repository::WatchRepository;

pub struct JsonWatchFile {
    path: PathBuf,
}

impl JsonWatchFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WatchRepository for JsonWatchFile {
    fn load(&self) -> Result<Vec<WatchItem>, DomainError> {
        // A missing file is an empty list, not an error.
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| DomainError::Storage(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| DomainError::Parse(e.to_string()))
    }

    fn save(&self, items: &[WatchItem]) -> Result<(), DomainError> {
        let raw = serde_json::to_string_pretty(items)
            .map_err(|e| DomainError::Parse(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| DomainError::Storage(e.to_string()))
    }
}
