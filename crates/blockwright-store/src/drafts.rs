// SPDX-License-Identifier: AGPL-3.0-or-later
//! Draft store: the editor's view of local persistence
//!
//! Key layout is fixed so drafts written by earlier sessions keep loading:
//! the latest auto-saved snapshot, the time it was written, the snapshot of
//! the last explicit save, the dark-mode preference and the chat hand-off.

use blockwright_core::{Document, Status};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{KeyValueStore, Result};

pub const DRAFT_KEY: &str = "documentDraft";
pub const LAST_AUTO_SAVE_KEY: &str = "lastAutoSave";
pub const CURRENT_DOCUMENT_KEY: &str = "currentDocument";
pub const DARK_MODE_KEY: &str = "darkMode";
pub const CHAT_HANDOFF_KEY: &str = "editorChatData";

/// A draft as read back from storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDraft {
    pub document: Document,
    /// Missing when the timestamp key was never written
    pub saved_at: Option<DateTime<Utc>>,
}

impl StoredDraft {
    /// True when the draft was saved no earlier than `max_age` before `now`
    ///
    /// A window reaching past the earliest representable instant covers
    /// every timestamp.
    pub fn is_recent(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        let Some(at) = self.saved_at else {
            return false;
        };
        now.checked_sub_signed(max_age)
            .map_or(true, |cutoff| at > cutoff)
    }
}

/// Document summary handed to the dashboard chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHandoff {
    pub source: String,
    pub document: HandoffDocument,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoffDocument {
    pub title: String,
    pub character: String,
    pub brand_voice: String,
    pub template_type: String,
    pub word_count: usize,
    pub status: Status,
}

impl ChatHandoff {
    pub fn from_document(source: &str, doc: &Document, at: DateTime<Utc>) -> Self {
        Self {
            source: source.to_string(),
            document: HandoffDocument {
                title: doc.title.clone(),
                character: doc.character.clone(),
                brand_voice: doc.brand_voice.clone(),
                template_type: doc.category_label().to_string(),
                word_count: doc.word_count,
                status: doc.status,
            },
            timestamp: at,
        }
    }
}

/// Typed access to the editor's keys in a [`KeyValueStore`]
#[derive(Debug)]
pub struct DraftStore<S> {
    store: S,
}

impl<S: KeyValueStore> DraftStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Write the draft snapshot and its timestamp
    pub fn save_draft(&mut self, doc: &Document, at: DateTime<Utc>) -> Result<()> {
        let json = serde_json::to_string(doc)?;
        self.store.set(DRAFT_KEY, &json)?;
        self.store.set(LAST_AUTO_SAVE_KEY, &at.to_rfc3339())?;
        tracing::debug!(bytes = json.len(), "draft saved");
        Ok(())
    }

    pub fn load_draft(&self) -> Result<Option<StoredDraft>> {
        let Some(json) = self.store.get(DRAFT_KEY)? else {
            return Ok(None);
        };
        let document: Document = serde_json::from_str(&json)?;
        let saved_at = match self.store.get(LAST_AUTO_SAVE_KEY)? {
            Some(raw) => Some(DateTime::parse_from_rfc3339(raw.trim())?.with_timezone(&Utc)),
            None => None,
        };
        Ok(Some(StoredDraft { document, saved_at }))
    }

    /// The stored draft, if it was saved within `max_age` of `now`
    pub fn recent_draft(&self, now: DateTime<Utc>, max_age: Duration) -> Result<Option<Document>> {
        Ok(self
            .load_draft()?
            .filter(|draft| draft.is_recent(now, max_age))
            .map(|draft| draft.document))
    }

    /// Write the finalized snapshot of an explicit save
    pub fn save_current(&mut self, doc: &Document) -> Result<()> {
        let json = serde_json::to_string(doc)?;
        self.store.set(CURRENT_DOCUMENT_KEY, &json)
    }

    pub fn load_current(&self) -> Result<Option<Document>> {
        self.store
            .get(CURRENT_DOCUMENT_KEY)?
            .map(|json| serde_json::from_str(&json))
            .transpose()
            .map_err(Into::into)
    }

    pub fn dark_mode(&self) -> Result<bool> {
        Ok(self.store.get(DARK_MODE_KEY)?.as_deref() == Some("true"))
    }

    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<()> {
        self.store
            .set(DARK_MODE_KEY, if enabled { "true" } else { "false" })
    }

    pub fn save_handoff(&mut self, handoff: &ChatHandoff) -> Result<()> {
        let json = serde_json::to_string(handoff)?;
        self.store.set(CHAT_HANDOFF_KEY, &json)
    }
}
