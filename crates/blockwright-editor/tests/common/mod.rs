// SPDX-License-Identifier: AGPL-3.0-or-later
#![allow(dead_code)]

use blockwright_editor::{
    Confirm, Editor, EditorConfig, ExportSink, ManualClock, NotificationKind, Notifier,
};
use blockwright_core::ExportArtifact;
use blockwright_store::drafts::DRAFT_KEY;
use blockwright_store::{KeyValueStore, MemoryStore};
use chrono::{DateTime, TimeZone, Utc};

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap()
}

/// Memory store that counts draft writes
#[derive(Debug, Default)]
pub struct CountingStore {
    pub inner: MemoryStore,
    pub draft_writes: usize,
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> blockwright_store::Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> blockwright_store::Result<()> {
        if key == DRAFT_KEY {
            self.draft_writes += 1;
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> blockwright_store::Result<()> {
        self.inner.remove(key)
    }
}

#[derive(Debug, Default)]
pub struct Toasts(pub Vec<(NotificationKind, String)>);

impl Toasts {
    pub fn last(&self) -> Option<&(NotificationKind, String)> {
        self.0.last()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(kind, _)| *kind == NotificationKind::Error)
            .map(|(_, message)| message.as_str())
            .collect()
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, kind: NotificationKind, message: &str) {
        self.0.push((kind, message.to_string()));
    }
}

/// Records every question and answers with `answer`
#[derive(Debug)]
pub struct ScriptedConfirm {
    pub answer: bool,
    pub asked: Vec<String>,
}

impl ScriptedConfirm {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Vec::new(),
        }
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.answer
    }
}

#[derive(Debug, Default)]
pub struct CollectingSink(pub Vec<ExportArtifact>);

impl ExportSink for CollectingSink {
    fn offer(&mut self, artifact: &ExportArtifact) {
        self.0.push(artifact.clone());
    }
}

pub type TestEditor<S = CountingStore> = Editor<S, ManualClock, Toasts>;

pub fn editor_with<S: KeyValueStore>(store: S) -> (TestEditor<S>, ManualClock) {
    configured_editor(store, EditorConfig::default())
}

/// Editor built from a config that skipped TOML validation
pub fn configured_editor<S: KeyValueStore>(
    store: S,
    config: EditorConfig,
) -> (TestEditor<S>, ManualClock) {
    let clock = ManualClock::new(t0());
    let editor = Editor::new(store, clock.clone(), Toasts::default(), config);
    (editor, clock)
}

pub fn editor() -> (TestEditor, ManualClock) {
    editor_with(CountingStore::default())
}
