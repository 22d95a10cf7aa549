// SPDX-License-Identifier: AGPL-3.0-or-later
//! The editor controller
//!
//! [`Editor`] owns the document model, the draft store, the auto-save
//! scheduler, the clock and the notifier. Hosts forward UI events to its
//! methods and call [`Editor::tick`] from their event loop.

use blockwright_bridges::{NotionBridge, RemoteStore};
use blockwright_core::model::{describe_issues, validate};
use blockwright_core::{
    export, render_preview, Category, Document, DocumentModel, ExportError, ExportFormat, Field,
    TemplateBlock,
};
use blockwright_store::{ChatHandoff, DraftStore, KeyValueStore};
use chrono::{DateTime, Utc};

use crate::clock::{Clock, SystemClock};
use crate::collaborators::{Confirm, ExportSink, LogNotifier, NotificationKind, Notifier};
use crate::config::EditorConfig;
use crate::scheduler::{AutosaveScheduler, TimerFire};
use crate::{EditorError, Result};

pub const RESTORE_PROMPT: &str = "Found a recent draft. Would you like to restore it?";
pub const NEW_DOCUMENT_PROMPT: &str = "You have unsaved changes. Create new document anyway?";
pub const UNLOAD_WARNING: &str = "You have unsaved changes. Are you sure you want to leave?";
pub const FAULT_NOTICE: &str = "An unexpected error occurred. Your work has been auto-saved.";
pub const LOCAL_SAVE_FAILED: &str = "Error saving document. Please try again.";

/// `source` field of the dashboard chat hand-off
pub const HANDOFF_SOURCE: &str = "Blockwright Editor";

pub struct Editor<S, C = SystemClock, N = LogNotifier> {
    model: DocumentModel,
    drafts: DraftStore<S>,
    scheduler: AutosaveScheduler,
    clock: C,
    notifier: N,
    config: EditorConfig,
    dark_mode: bool,
    last_autosave: Option<DateTime<Utc>>,
}

impl<S: KeyValueStore, C: Clock, N: Notifier> Editor<S, C, N> {
    pub fn new(store: S, clock: C, notifier: N, config: EditorConfig) -> Self {
        let scheduler = AutosaveScheduler::new(
            config.autosave.debounce(),
            config.autosave.interval(),
            clock.now(),
        );
        Self {
            model: DocumentModel::new(),
            drafts: DraftStore::new(store),
            scheduler,
            clock,
            notifier,
            config,
            dark_mode: false,
            last_autosave: None,
        }
    }

    /// Load preferences and offer to restore a recent draft
    ///
    /// Returns true when a draft was restored.
    pub fn start(&mut self, confirm: &mut dyn Confirm) -> bool {
        match self.drafts.dark_mode() {
            Ok(enabled) => self.dark_mode = enabled,
            Err(e) => tracing::warn!(error = %e, "could not read dark-mode preference"),
        }

        let now = self.clock.now();
        let draft = match self
            .drafts
            .recent_draft(now, self.config.autosave.draft_max_age())
        {
            Ok(draft) => draft,
            Err(e) => {
                tracing::warn!(error = %e, "could not load draft");
                return false;
            }
        };

        let Some(draft) = draft else {
            return false;
        };
        if !confirm.confirm(RESTORE_PROMPT) {
            tracing::debug!("draft restore declined");
            return false;
        }

        self.model.restore(draft);
        self.notifier
            .notify(NotificationKind::Success, "Draft restored successfully");
        true
    }

    pub fn model(&self) -> &DocumentModel {
        &self.model
    }

    /// Model access for observer registration
    pub fn model_mut(&mut self) -> &mut DocumentModel {
        &mut self.model
    }

    pub fn document(&self) -> &Document {
        self.model.document()
    }

    pub fn drafts(&self) -> &DraftStore<S> {
        &self.drafts
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn scheduler(&self) -> &AutosaveScheduler {
        &self.scheduler
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// When the last successful auto-save happened
    pub fn last_autosave(&self) -> Option<DateTime<Utc>> {
        self.last_autosave
    }

    /// Write one field and re-arm the debounce timer
    pub fn edit(&mut self, field: Field, value: &str) -> Result<()> {
        self.model.set_field(field, value)?;
        self.scheduler.touch(self.clock.now());
        Ok(())
    }

    pub fn select_category(&mut self, category: Option<Category>) {
        self.model.set_category(category);
        self.scheduler.touch(self.clock.now());
        if let Some(category) = category {
            self.notifier.notify(
                NotificationKind::Success,
                &format!("Template blocks loaded for {category}"),
            );
        }
    }

    pub fn insert_block(&mut self, index: usize) -> Result<&'static TemplateBlock> {
        let block = self.model.insert_block(index)?;
        self.scheduler.touch(self.clock.now());
        self.notifier.notify(
            NotificationKind::Success,
            &format!("{} block inserted", block.name),
        );
        Ok(block)
    }

    /// Run whichever auto-save timers are due
    pub fn tick(&mut self) -> Vec<TimerFire> {
        let fired = self.scheduler.poll(self.clock.now());
        for fire in &fired {
            let wanted = match fire {
                TimerFire::Debounce => self.model.has_content(),
                TimerFire::Periodic => self.model.is_dirty() && self.model.has_content(),
            };
            if wanted {
                tracing::trace!(?fire, "auto-save timer");
                self.autosave();
            }
        }
        fired
    }

    /// Snapshot the document to the draft store
    ///
    /// Failures are logged and otherwise ignored; returns whether the save
    /// succeeded.
    pub fn autosave(&mut self) -> bool {
        let now = self.clock.now();
        match self.drafts.save_draft(self.model.document(), now) {
            Ok(()) => {
                self.model.mark_clean();
                self.last_autosave = Some(now);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "auto-save failed");
                false
            }
        }
    }

    /// Replace the document with an empty one
    ///
    /// Unsaved changes are only discarded once `confirm` approves. Returns
    /// whether the reset happened.
    pub fn new_document(&mut self, confirm: &mut dyn Confirm) -> bool {
        if self.model.is_dirty() && !confirm.confirm(NEW_DOCUMENT_PROMPT) {
            return false;
        }
        self.model.reset();
        self.scheduler.cancel_debounce();
        self.notifier
            .notify(NotificationKind::Success, "New document created");
        true
    }

    /// Explicit save
    ///
    /// Validates first; with a remote store the record is created there,
    /// otherwise the finalized snapshot is kept locally. The model is only
    /// stamped and marked clean on success.
    pub async fn save(&mut self, remote: Option<&dyn RemoteStore>) -> Result<()> {
        let issues = validate(self.model.document());
        if !issues.is_empty() {
            self.notifier
                .notify(NotificationKind::Error, &describe_issues(&issues));
            return Err(EditorError::Validation(issues));
        }

        let now = self.clock.now();
        let mut record = self.model.snapshot();
        record.last_modified = Some(now);

        match remote {
            Some(remote) => {
                if let Err(e) = remote.create_record(&record).await {
                    tracing::warn!(bridge = remote.name(), error = %e, "remote save failed");
                    self.notifier.notify(
                        NotificationKind::Error,
                        &format!("Error saving document: {e}"),
                    );
                    return Err(e.into());
                }
            }
            None => {
                if let Err(e) = self.drafts.save_current(&record) {
                    tracing::warn!(error = %e, "local save failed");
                    self.notifier.notify(NotificationKind::Error, LOCAL_SAVE_FAILED);
                    return Err(e.into());
                }
                self.last_autosave = Some(now);
            }
        }

        self.model.touch_last_modified(now);
        self.model.mark_clean();
        self.notifier
            .notify(NotificationKind::Success, "Document saved successfully!");
        Ok(())
    }

    /// The remote bridge described by configuration, if one is configured
    pub fn remote_bridge(&self) -> Result<Option<NotionBridge>> {
        Ok(self
            .config
            .configured_remote()
            .map(|remote| remote.bridge())
            .transpose()?)
    }

    pub fn export(&mut self, format: ExportFormat, sink: &mut dyn ExportSink) -> Result<()> {
        match export(self.model.document(), format) {
            Ok(artifact) => {
                sink.offer(&artifact);
                self.notifier.notify(
                    NotificationKind::Success,
                    &format!("Document exported as {}", format.label()),
                );
                Ok(())
            }
            Err(e) => {
                let message = match e {
                    ExportError::EmptyContent => e.to_string(),
                    _ => format!("Export failed: {e}"),
                };
                self.notifier.notify(NotificationKind::Error, &message);
                Err(e.into())
            }
        }
    }

    /// HTML for the preview panel
    pub fn preview(&self) -> Result<String> {
        Ok(render_preview(self.model.document())?)
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        if let Err(e) = self.drafts.set_dark_mode(self.dark_mode) {
            tracing::warn!(error = %e, "could not store dark-mode preference");
        }
        let message = if self.dark_mode {
            "Dark mode activated"
        } else {
            "Light mode activated"
        };
        self.notifier.notify(NotificationKind::Info, message);
        self.dark_mode
    }

    /// Store a summary for the dashboard chat and return the URL to open
    pub fn share_to_dashboard(&mut self) -> String {
        let handoff = ChatHandoff::from_document(
            HANDOFF_SOURCE,
            self.model.document(),
            self.clock.now(),
        );
        if let Err(e) = self.drafts.save_handoff(&handoff) {
            tracing::warn!(error = %e, "could not store chat hand-off");
        }
        self.notifier
            .notify(NotificationKind::Info, "Opening dashboard chat...");
        format!("{}?source=editor", self.config.dashboard.chat_url)
    }

    /// Best-effort draft save after a fault, then a generic notice
    pub fn recover_from_fault(&mut self, fault: &dyn std::error::Error) {
        tracing::error!(error = %fault, "editor fault");
        self.autosave();
        self.notifier.notify(NotificationKind::Error, FAULT_NOTICE);
    }

    /// Called when the host is about to close
    ///
    /// Saves a draft if there is unsaved content and returns true when the
    /// host should warn with [`UNLOAD_WARNING`].
    pub fn before_unload(&mut self) -> bool {
        if self.model.is_dirty() && self.model.has_content() {
            self.autosave();
            return true;
        }
        false
    }
}

impl<S, C, N> std::fmt::Debug for Editor<S, C, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("model", &self.model)
            .field("scheduler", &self.scheduler)
            .field("dark_mode", &self.dark_mode)
            .field("last_autosave", &self.last_autosave)
            .finish_non_exhaustive()
    }
}
