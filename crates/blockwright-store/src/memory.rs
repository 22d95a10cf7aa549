// SPDX-License-Identifier: AGPL-3.0-or-later
//! In-memory store with an optional byte quota

use std::collections::HashMap;

use crate::{KeyValueStore, Result, StoreError};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes once keys plus values would exceed `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(quota) = self.quota {
            let available = quota.saturating_sub(self.used_bytes_without(key));
            let needed = key.len() + value.len();
            if needed > available {
                return Err(StoreError::QuotaExceeded { needed, available });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut store = MemoryStore::new();
        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
        store.remove("a").unwrap();
    }

    #[test]
    fn test_quota() {
        let mut store = MemoryStore::with_quota(10);
        store.set("key", "1234").unwrap();
        // Overwriting the same key only counts the new value
        store.set("key", "1234567").unwrap();
        let err = store.set("other", "xxxxxx").unwrap_err();
        assert!(matches!(
            err,
            StoreError::QuotaExceeded {
                needed: 11,
                available: 0
            }
        ));
        assert_eq!(store.len(), 1);
    }
}
