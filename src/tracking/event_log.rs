use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    PageView,
    LinkClick,
    HeroView,
    HeroClick,
}

/// One observed interaction. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub id: String,
    pub at: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed")]
    WriteFailed,
}

/// Seam over the durable key/value store backing the log.
pub trait RecordStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Append-only record of tracked events, kept in the browser as one
/// serialized JSON array. Unreadable or corrupt storage reads as an empty
/// log, and write failures are swallowed; the log is best effort. Entries
/// are never pruned.
pub struct EventLog<S> {
    store: S,
}

impl<S: RecordStore> EventLog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn append(&self, kind: EventKind, id: &str) {
        let mut records = self.read_all();
        records.push(EventRecord {
            kind,
            id: id.to_string(),
            at: Utc::now().to_rfc3339(),
        });
        if let Ok(serialized) = serde_json::to_string(&records) {
            let _ = self.store.save(config::EVENT_LOG_KEY, &serialized);
        }
    }

    pub fn read_all(&self) -> Vec<EventRecord> {
        match self.store.load(config::EVENT_LOG_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}

/// localStorage-backed store used by the running page.
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)
    }
}

impl RecordStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StoreError::Unavailable)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StoreError::WriteFailed)
    }
}
