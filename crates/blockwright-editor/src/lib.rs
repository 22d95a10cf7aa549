// SPDX-License-Identifier: AGPL-3.0-or-later
//! Blockwright Editor - The controller hosts drive
//!
//! Provides:
//! - [`Editor`]: owns the document model and routes UI events
//! - Debounced and periodic auto-save against an injectable clock
//! - Collaborator traits for confirmation, notification and export delivery
//! - TOML configuration and log setup

pub mod clock;
pub mod collaborators;
pub mod config;
pub mod editor;
pub mod logging;
pub mod scheduler;

pub use clock::{Clock, ManualClock, SystemClock};
pub use collaborators::{Confirm, ExportSink, FixedAnswer, LogNotifier, NotificationKind, Notifier};
pub use config::EditorConfig;
pub use editor::Editor;
pub use scheduler::{AutosaveScheduler, TimerFire};

use blockwright_core::model::describe_issues;
use blockwright_core::{ConversionError, ExportError, ModelError, ValidationIssue};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("{}", describe_issues(.0))]
    Validation(Vec<ValidationIssue>),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Store(#[from] blockwright_store::StoreError),

    #[error(transparent)]
    Bridge(#[from] blockwright_bridges::BridgeError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

pub type Result<T> = std::result::Result<T, EditorError>;
