// SPDX-License-Identifier: AGPL-3.0-or-later
//! Auto-save timing through the editor

mod common;

use blockwright_core::Field;
use blockwright_editor::config::AutosaveConfig;
use blockwright_editor::{EditorConfig, TimerFire};
use blockwright_store::MemoryStore;
use chrono::Duration;
use common::{configured_editor, editor, editor_with, CountingStore, ScriptedConfirm};
use pretty_assertions::assert_eq;

#[test]
fn three_quick_edits_save_once() {
    let (mut editor, clock) = editor();

    editor.edit(Field::Body, "one").unwrap();
    assert!(editor.tick().is_empty());
    clock.advance(Duration::milliseconds(500));
    editor.edit(Field::Body, "one two").unwrap();
    assert!(editor.tick().is_empty());
    clock.advance(Duration::milliseconds(500));
    editor.edit(Field::Body, "one two three").unwrap();
    assert!(editor.tick().is_empty());

    clock.advance(Duration::milliseconds(1999));
    assert!(editor.tick().is_empty());
    clock.advance(Duration::milliseconds(1));
    assert_eq!(editor.tick(), vec![TimerFire::Debounce]);

    clock.advance(Duration::seconds(5));
    editor.tick();

    assert_eq!(editor.drafts().inner().draft_writes, 1);
    let draft = editor.drafts().load_draft().unwrap().unwrap();
    assert_eq!(draft.document.body, "one two three");
    assert_eq!(draft.document.word_count, 3);
    assert_eq!(draft.saved_at, Some(common::t0() + Duration::seconds(3)));
    assert!(!editor.model().is_dirty());
}

#[test]
fn debounce_skips_empty_document() {
    let (mut editor, clock) = editor();
    editor.edit(Field::Character, "Anica").unwrap();
    clock.advance(Duration::seconds(2));
    assert_eq!(editor.tick(), vec![TimerFire::Debounce]);
    assert_eq!(editor.drafts().inner().draft_writes, 0);
}

#[test]
fn periodic_saves_only_dirty_content() {
    let (mut editor, clock) = editor();
    editor.edit(Field::Title, "Launch").unwrap();
    clock.advance(Duration::seconds(2));
    editor.tick();
    assert_eq!(editor.drafts().inner().draft_writes, 1);

    // A change that bypassed the debounce is still picked up periodically
    editor
        .model_mut()
        .set_field(Field::Body, "late change")
        .unwrap();
    clock.advance(Duration::seconds(28));
    assert_eq!(editor.tick(), vec![TimerFire::Periodic]);
    assert_eq!(editor.drafts().inner().draft_writes, 2);

    clock.advance(Duration::seconds(30));
    assert_eq!(editor.tick(), vec![TimerFire::Periodic]);
    assert_eq!(editor.drafts().inner().draft_writes, 2);
}

#[test]
fn storage_failure_is_quiet() {
    let (mut editor, clock) = editor_with(MemoryStore::with_quota(32));
    editor
        .edit(Field::Body, "far too much text for such a small quota")
        .unwrap();
    clock.advance(Duration::seconds(2));
    editor.tick();

    assert!(editor.last_autosave().is_none());
    assert!(editor.notifier().0.is_empty());
    assert!(editor.model().is_dirty());

    editor.edit(Field::Title, "still editing").unwrap();
    assert_eq!(editor.document().title, "still editing");
}

#[test]
fn before_unload_saves_unsaved_content() {
    let (mut editor, _clock) = editor();
    assert!(!editor.before_unload());

    editor.edit(Field::Body, "unsaved").unwrap();
    assert!(editor.before_unload());
    assert_eq!(editor.drafts().inner().draft_writes, 1);
    assert!(!editor.before_unload());
}

#[test]
fn fault_recovery_saves_and_notifies() {
    let (mut editor, _clock) = editor();
    editor.edit(Field::Body, "keep me").unwrap();

    let fault = std::io::Error::other("renderer crashed");
    editor.recover_from_fault(&fault);

    assert_eq!(editor.drafts().inner().draft_writes, 1);
    assert_eq!(
        editor.notifier().errors(),
        vec![blockwright_editor::editor::FAULT_NOTICE]
    );
}

#[test]
fn explicit_save_satisfies_periodic_timer() {
    let (mut editor, clock) = editor();
    editor.edit(Field::Title, "Launch").unwrap();
    editor.edit(Field::Character, "Anica").unwrap();
    editor.edit(Field::Category, "Blog Posts").unwrap();
    editor
        .model_mut()
        .set_field(Field::Body, "ready to go")
        .unwrap();

    tokio_test::block_on(editor.save(None)).unwrap();
    assert!(!editor.model().is_dirty());

    // The pending debounce still saves a draft; the periodic timer finds nothing new
    clock.advance(Duration::seconds(30));
    assert_eq!(
        editor.tick(),
        vec![TimerFire::Debounce, TimerFire::Periodic]
    );
    assert_eq!(editor.drafts().inner().draft_writes, 1);
}

#[test]
fn zero_periods_from_code_still_tick() {
    let config = EditorConfig {
        autosave: AutosaveConfig {
            debounce_ms: 0,
            interval_ms: 0,
            draft_max_age_hours: 24,
        },
        ..EditorConfig::default()
    };
    let (mut editor, clock) = configured_editor(CountingStore::default(), config);
    editor.edit(Field::Body, "quick").unwrap();

    clock.advance(Duration::seconds(1));
    assert_eq!(
        editor.tick(),
        vec![TimerFire::Debounce, TimerFire::Periodic]
    );
    assert_eq!(editor.drafts().inner().draft_writes, 1);
}

#[test]
fn unbounded_autosave_values_do_not_overflow() {
    let config = EditorConfig {
        autosave: AutosaveConfig {
            debounce_ms: u64::MAX,
            interval_ms: 18_000_000_000_000_000,
            draft_max_age_hours: 4_000_000_000,
        },
        ..EditorConfig::default()
    };
    let mut drafts = blockwright_store::DraftStore::new(CountingStore::default());
    let old = blockwright_core::Document {
        body: "from long ago".to_string(),
        ..blockwright_core::Document::default()
    };
    drafts.save_draft(&old, common::t0() - Duration::days(3650)).unwrap();

    let (mut editor, clock) = configured_editor(drafts.into_inner(), config);
    assert!(editor.start(&mut ScriptedConfirm::answering(true)));
    assert_eq!(editor.document().body, "from long ago");

    editor.edit(Field::Body, "still here").unwrap();
    clock.advance(Duration::days(365));
    assert!(editor.tick().is_empty());
}
