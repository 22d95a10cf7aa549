// SPDX-License-Identifier: AGPL-3.0-or-later
//! Document model: the single owner of editing state
//!
//! Every mutation goes through [`DocumentModel`], which keeps the derived
//! metrics in step with the body, tracks whether anything changed since the
//! last save, and tells registered observers what happened.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::document::{Document, Field, Status, UnknownStatus};
use crate::metrics::Metrics;
use crate::templates::{Category, TemplateBlock, UnknownCategory};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),

    #[error(transparent)]
    UnknownStatus(#[from] UnknownStatus),

    #[error("No category selected; template blocks are unavailable")]
    NoCategory,

    #[error("{category} has no template block #{index}")]
    NoSuchBlock { category: Category, index: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;

/// A reason the document cannot be persisted yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationIssue {
    MissingTitle,
    MissingCharacter,
    MissingCategory,
    EmptyBody,
}

impl ValidationIssue {
    /// The field the issue is about
    pub const fn field(&self) -> Field {
        match self {
            Self::MissingTitle => Field::Title,
            Self::MissingCharacter => Field::Character,
            Self::MissingCategory => Field::Category,
            Self::EmptyBody => Field::Body,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingTitle => "Document title is required",
            Self::MissingCharacter => "Character profile must be selected",
            Self::MissingCategory => "Template type must be selected",
            Self::EmptyBody => "Content cannot be empty",
        })
    }
}

/// Join issues into one user-facing sentence list
pub fn describe_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(". ")
}

/// What happened to the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelEvent {
    /// A field was written; `metrics` is set when the body changed
    FieldChanged {
        field: Field,
        metrics: Option<Metrics>,
    },
    /// The model was returned to defaults
    Reset,
    /// A stored draft replaced the current state
    Restored,
}

/// Receives model events
pub trait ModelObserver {
    fn on_event(&mut self, event: &ModelEvent);
}

/// Owned editing state
pub struct DocumentModel {
    document: Document,
    dirty: bool,
    observers: Vec<Box<dyn ModelObserver>>,
}

impl DocumentModel {
    pub fn new() -> Self {
        Self {
            document: Document::default(),
            dirty: false,
            observers: Vec::new(),
        }
    }

    /// Register an observer for every subsequent event
    pub fn subscribe(&mut self, observer: Box<dyn ModelObserver>) {
        self.observers.push(observer);
    }

    /// Read-only view of the current state
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Owned copy, independent of the live model
    pub fn snapshot(&self) -> Document {
        self.document.clone()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag after a successful save
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// True when the title or body holds anything other than whitespace
    pub fn has_content(&self) -> bool {
        !self.document.title.trim().is_empty() || !self.document.body.trim().is_empty()
    }

    /// Write one field from its textual value
    ///
    /// Category and status values are parsed; an empty category clears it.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<()> {
        let doc = &mut self.document;
        match field {
            Field::Title => doc.title = value.to_string(),
            Field::Body => doc.body = value.to_string(),
            Field::Character => doc.character = value.to_string(),
            Field::BrandVoice => doc.brand_voice = value.to_string(),
            Field::Label => doc.label = value.to_string(),
            Field::Prompt => doc.prompt = value.to_string(),
            Field::Category => {
                doc.category = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                }
            }
            Field::Status => doc.status = value.parse()?,
        }
        self.after_write(field);
        Ok(())
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.document.category = category;
        self.after_write(Field::Category);
    }

    pub fn set_status(&mut self, status: Status) {
        self.document.status = status;
        self.after_write(Field::Status);
    }

    /// Template blocks for the selected category
    pub fn available_blocks(&self) -> &'static [TemplateBlock] {
        self.document
            .category
            .map(|c| c.blocks())
            .unwrap_or_default()
    }

    /// Append the selected category's block `index` to the body
    ///
    /// Existing content is separated from the block by a blank line.
    pub fn insert_block(&mut self, index: usize) -> Result<&'static TemplateBlock> {
        let category = self.document.category.ok_or(ModelError::NoCategory)?;
        let block = category
            .blocks()
            .get(index)
            .ok_or(ModelError::NoSuchBlock { category, index })?;

        let body = &mut self.document.body;
        if !body.is_empty() {
            body.push_str("\n\n");
        }
        body.push_str(block.template);
        self.after_write(Field::Body);
        Ok(block)
    }

    /// Derive word count and reading time from the body
    pub fn recompute_metrics(&mut self) -> Metrics {
        let metrics = Metrics::of(&self.document.body);
        self.document.word_count = metrics.word_count;
        self.document.reading_time_minutes = metrics.reading_time_minutes;
        metrics
    }

    /// Stamp the save time; only explicit saves call this
    pub fn touch_last_modified(&mut self, at: DateTime<Utc>) {
        self.document.last_modified = Some(at);
    }

    /// Return to defaults and notify observers
    pub fn reset(&mut self) {
        self.document = Document::default();
        self.dirty = false;
        self.notify(&ModelEvent::Reset);
    }

    /// Replace the current state with a stored draft
    pub fn restore(&mut self, draft: Document) {
        self.document = draft;
        self.recompute_metrics();
        self.dirty = false;
        self.notify(&ModelEvent::Restored);
    }

    /// Every reason the document cannot be persisted, in field order
    pub fn validate_for_persistence(&self) -> Vec<ValidationIssue> {
        validate(&self.document)
    }

    fn after_write(&mut self, field: Field) {
        let metrics = (field == Field::Body).then(|| self.recompute_metrics());
        self.dirty = true;
        self.notify(&ModelEvent::FieldChanged { field, metrics });
    }

    fn notify(&mut self, event: &ModelEvent) {
        for observer in &mut self.observers {
            observer.on_event(event);
        }
    }
}

impl Default for DocumentModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DocumentModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentModel")
            .field("document", &self.document)
            .field("dirty", &self.dirty)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Persistence requirements for any document record
pub fn validate(doc: &Document) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if doc.title.trim().is_empty() {
        issues.push(ValidationIssue::MissingTitle);
    }
    if doc.character.trim().is_empty() {
        issues.push(ValidationIssue::MissingCharacter);
    }
    if doc.category.is_none() {
        issues.push(ValidationIssue::MissingCategory);
    }
    if doc.body.trim().is_empty() {
        issues.push(ValidationIssue::EmptyBody);
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<ModelEvent>>>);

    impl ModelObserver for Recorder {
        fn on_event(&mut self, event: &ModelEvent) {
            self.0.borrow_mut().push(event.clone());
        }
    }

    fn complete_model() -> DocumentModel {
        let mut model = DocumentModel::new();
        model.set_field(Field::Title, "Launch").unwrap();
        model.set_field(Field::Character, "Anica").unwrap();
        model.set_field(Field::Category, "Blog Posts").unwrap();
        model.set_field(Field::Body, "Some words here").unwrap();
        model
    }

    #[test]
    fn test_body_write_recomputes_metrics() {
        let mut model = DocumentModel::new();
        model.set_field(Field::Body, "one two three").unwrap();
        assert_eq!(model.document().word_count, 3);
        assert_eq!(model.document().reading_time_minutes, 1);
        assert!(model.is_dirty());

        model.set_field(Field::Body, "   ").unwrap();
        assert_eq!(model.document().word_count, 0);
        assert_eq!(model.document().reading_time_minutes, 0);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut model = complete_model();
        let first = model.recompute_metrics();
        let second = model.recompute_metrics();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut model = DocumentModel::new();
        let err = model.set_field(Field::Category, "Podcasts").unwrap_err();
        assert!(matches!(err, ModelError::UnknownCategory(_)));
        assert!(!model.is_dirty());
    }

    #[test]
    fn test_validation_reports_all_issues_in_order() {
        let model = DocumentModel::new();
        assert_eq!(
            model.validate_for_persistence(),
            vec![
                ValidationIssue::MissingTitle,
                ValidationIssue::MissingCharacter,
                ValidationIssue::MissingCategory,
                ValidationIssue::EmptyBody,
            ]
        );
    }

    #[test]
    fn test_validation_only_title_missing() {
        let mut model = complete_model();
        model.set_field(Field::Title, "  ").unwrap();
        let issues = model.validate_for_persistence();
        assert_eq!(issues, vec![ValidationIssue::MissingTitle]);
        assert_eq!(issues[0].field(), Field::Title);
        assert_eq!(describe_issues(&issues), "Document title is required");
    }

    #[test]
    fn test_complete_document_is_valid() {
        assert!(complete_model().validate_for_persistence().is_empty());
    }

    #[test]
    fn test_insert_block_separates_with_blank_line() {
        let mut model = DocumentModel::new();
        model.set_category(Some(Category::CustomTemplates));
        model.insert_block(0).unwrap();
        assert_eq!(model.document().body, "# [Your Custom Header]\n\n");

        model.insert_block(2).unwrap();
        assert_eq!(
            model.document().body,
            "# [Your Custom Header]\n\n\n\n[Your custom call-to-action]\n\n"
        );
        assert_eq!(model.document().word_count, 7);
    }

    #[test]
    fn test_insert_block_errors() {
        let mut model = DocumentModel::new();
        assert_eq!(model.insert_block(0).unwrap_err(), ModelError::NoCategory);
        model.set_category(Some(Category::CustomTemplates));
        assert_eq!(
            model.insert_block(99).unwrap_err(),
            ModelError::NoSuchBlock {
                category: Category::CustomTemplates,
                index: 99
            }
        );
    }

    #[test]
    fn test_snapshot_does_not_alias() {
        let mut model = complete_model();
        let snapshot = model.snapshot();
        model.set_field(Field::Title, "Changed").unwrap();
        assert_eq!(snapshot.title, "Launch");
    }

    #[test]
    fn test_observers_see_changes_and_reset() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut model = DocumentModel::new();
        model.subscribe(Box::new(Recorder(events.clone())));

        model.set_field(Field::Title, "x").unwrap();
        model.set_field(Field::Body, "a b").unwrap();
        model.reset();

        let events = events.borrow();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            ModelEvent::FieldChanged {
                field: Field::Title,
                metrics: None
            }
        );
        assert!(matches!(
            events[1],
            ModelEvent::FieldChanged {
                field: Field::Body,
                metrics: Some(Metrics { word_count: 2, .. })
            }
        ));
        assert_eq!(events[2], ModelEvent::Reset);
        assert_eq!(model.document(), &Document::default());
        assert!(!model.is_dirty());
    }

    #[test]
    fn test_restore_recomputes_metrics() {
        let mut model = DocumentModel::new();
        model.restore(Document {
            body: "four words right here".to_string(),
            word_count: 999,
            ..Document::default()
        });
        assert_eq!(model.document().word_count, 4);
        assert!(!model.is_dirty());
    }
}
