// SPDX-License-Identifier: AGPL-3.0-or-later
//! Auto-save timers
//!
//! Two independent deadlines, both polled against caller-supplied instants:
//! a debounce that each qualifying edit pushes back, and a fixed-period
//! timer. Nothing here sleeps or spawns; the host calls [`poll`] from its own
//! loop (or from `Editor::tick`).
//!
//! Periods shorter than a millisecond are raised to one. A deadline that
//! would land past the last representable instant is never due.
//!
//! [`poll`]: AutosaveScheduler::poll

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerFire {
    /// Quiet period after the last edit elapsed
    Debounce,
    /// Periodic interval elapsed
    Periodic,
}

#[derive(Debug, Clone)]
pub struct AutosaveScheduler {
    debounce: Duration,
    interval: Duration,
    debounce_deadline: Option<DateTime<Utc>>,
    next_periodic: Option<DateTime<Utc>>,
}

fn at_least_one_ms(period: Duration) -> Duration {
    period.max(Duration::milliseconds(1))
}

impl AutosaveScheduler {
    pub fn new(debounce: Duration, interval: Duration, now: DateTime<Utc>) -> Self {
        let interval = at_least_one_ms(interval);
        Self {
            debounce: at_least_one_ms(debounce),
            interval,
            debounce_deadline: None,
            next_periodic: now.checked_add_signed(interval),
        }
    }

    /// Re-arm the debounce timer; any pending deadline is replaced
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.debounce_deadline = now.checked_add_signed(self.debounce);
    }

    pub fn cancel_debounce(&mut self) {
        self.debounce_deadline = None;
    }

    pub fn debounce_pending(&self) -> bool {
        self.debounce_deadline.is_some()
    }

    /// Earliest instant at which [`poll`](Self::poll) will report something
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        match (self.debounce_deadline, self.next_periodic) {
            (Some(d), Some(p)) => Some(d.min(p)),
            (d, p) => d.or(p),
        }
    }

    /// Timers due at `now`, debounce first
    ///
    /// A periodic timer that missed several intervals fires once and is
    /// rescheduled past `now`.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Vec<TimerFire> {
        let mut fired = Vec::new();

        if self.debounce_deadline.is_some_and(|d| d <= now) {
            self.debounce_deadline = None;
            fired.push(TimerFire::Debounce);
        }

        if self.next_periodic.is_some_and(|p| p <= now) {
            fired.push(TimerFire::Periodic);
            while let Some(p) = self.next_periodic.filter(|p| *p <= now) {
                self.next_periodic = p.checked_add_signed(self.interval);
            }
        }

        fired
    }
}
