// SPDX-License-Identifier: AGPL-3.0-or-later
//! Host-provided collaborators
//!
//! The editor asks, tells and hands off through these traits; dialogs,
//! toasts and file downloads belong to the host.

use blockwright_core::ExportArtifact;

/// Yes/no question to the user
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

/// Transient user-facing messages
pub trait Notifier {
    fn notify(&mut self, kind: NotificationKind, message: &str);
}

/// Receives finished exports (download, write to disk, ...)
pub trait ExportSink {
    fn offer(&mut self, artifact: &ExportArtifact);
}

/// Answers every question the same way
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&mut self, _message: &str) -> bool {
        self.0
    }
}

/// Routes notifications to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Error => tracing::error!(%message, "notification"),
            NotificationKind::Success | NotificationKind::Info => {
                tracing::info!(?kind, %message, "notification")
            }
        }
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&mut self, kind: NotificationKind, message: &str) {
        (**self).notify(kind, message)
    }
}
