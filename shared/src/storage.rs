use std::collections::HashMap;

use crate::constants::HISTORY_STORAGE_KEY;
use crate::error::StorageError;
use crate::prize_pool::DrawHistory;

/// String key-value store the draw history is persisted in.
pub trait HistoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store, used natively and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(history: &[String]) -> Self {
        let mut store = Self::new();
        if let Ok(raw) = serde_json::to_string(history) {
            store.entries.insert(HISTORY_STORAGE_KEY.to_string(), raw);
        }
        store
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl HistoryStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn serialize_history(history: &[String]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(history)?)
}

pub fn deserialize_history(raw: &str) -> Result<DrawHistory, StorageError> {
    Ok(serde_json::from_str(raw)?)
}

/// Reads the persisted history; a missing key is an empty history.
pub fn load_history<S: HistoryStore + ?Sized>(store: &S) -> Result<DrawHistory, StorageError> {
    match store.get(HISTORY_STORAGE_KEY)? {
        Some(raw) => deserialize_history(&raw),
        None => Ok(DrawHistory::new()),
    }
}

pub fn save_history<S: HistoryStore + ?Sized>(
    store: &mut S,
    history: &[String],
) -> Result<(), StorageError> {
    let raw = serialize_history(history)?;
    store.set(HISTORY_STORAGE_KEY, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_empty_history() {
        let store = MemoryStore::new();
        assert!(load_history(&store).unwrap().is_empty());
    }

    #[test]
    fn test_history_survives_store() {
        let mut store = MemoryStore::new();
        let history = vec!["Mug".to_string(), "Grand \"prize\"".to_string(), "奖品".to_string()];
        save_history(&mut store, &history).unwrap();
        assert_eq!(load_history(&store).unwrap(), history);
    }

    #[test]
    fn test_stored_format_is_json_array() {
        let mut store = MemoryStore::new();
        save_history(&mut store, &["A".to_string(), "B".to_string()]).unwrap();
        assert_eq!(store.raw(HISTORY_STORAGE_KEY), Some(r#"["A","B"]"#));
    }

    #[test]
    fn test_corrupt_history_is_an_error() {
        let mut store = MemoryStore::new();
        store.set(HISTORY_STORAGE_KEY, "{not json").unwrap();
        assert!(matches!(load_history(&store), Err(StorageError::Corrupt(_))));
    }
}
