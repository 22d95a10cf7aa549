// SPDX-License-Identifier: AGPL-3.0-or-later
//! Blockwright Store - Local key-value persistence
//!
//! Provides:
//! - A string key-value store abstraction with in-memory and file backends
//! - The draft store: auto-saved drafts, the finalized document, preferences

pub mod drafts;
pub mod file;
pub mod memory;

pub use drafts::{ChatHandoff, DraftStore, StoredDraft};
pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage quota exceeded: {needed} bytes needed, {available} available")]
    QuotaExceeded { needed: usize, available: usize },

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Durable string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
