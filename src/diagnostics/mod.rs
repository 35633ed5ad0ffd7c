// SPDX-License-Identifier: MPL-2.0
//! In-memory activity log.
//!
//! The client has no log files. Noteworthy activity is kept in a
//! memory-bounded circular buffer. The most recent entries appear in the
//! application's `Debug` output, and `[diagnostics] log_to_stderr` echoes
//! each entry to stderr as it is recorded.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped entry
//! - [`ActivityLog`]: Buffer of entries owned by the application root
//!
//! # Privacy
//!
//! Credentials and login outcomes are never recorded. The only session
//! entries are the open/close transitions themselves.

mod buffer;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{DiagnosticEvent, DiagnosticEventKind};

use std::time::Instant;

/// Bounded record of recent application activity.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    buffer: CircularBuffer<DiagnosticEvent>,
    echo_to_stderr: bool,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl ActivityLog {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
            echo_to_stderr: false,
        }
    }

    /// Enables printing every recorded entry to stderr.
    #[must_use]
    pub fn with_stderr_echo(mut self, enabled: bool) -> Self {
        self.echo_to_stderr = enabled;
        self
    }

    #[must_use]
    pub fn echoes_to_stderr(&self) -> bool {
        self.echo_to_stderr
    }

    /// Records an entry stamped with the current time.
    pub fn record(&mut self, kind: DiagnosticEventKind) {
        self.record_at(kind, Instant::now());
    }

    /// Records an entry with an explicit timestamp.
    pub fn record_at(&mut self, kind: DiagnosticEventKind, timestamp: Instant) {
        if self.echo_to_stderr {
            eprintln!("[activity] {kind:?}");
        }
        self.buffer
            .push(DiagnosticEvent::with_timestamp(kind, timestamp));
    }

    /// Returns entries oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Returns up to `count` of the newest entry kinds, oldest first.
    pub fn recent(&self, count: usize) -> Vec<&DiagnosticEventKind> {
        let skip = self.buffer.len().saturating_sub(count);
        self.kinds().skip(skip).collect()
    }

    /// Returns entry kinds oldest first.
    pub fn kinds(&self) -> impl Iterator<Item = &DiagnosticEventKind> {
        self.buffer.iter().map(|event| &event.kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::EventId;
    use std::time::Duration;

    #[test]
    fn records_in_chronological_order() {
        let mut log = ActivityLog::default();
        let start = Instant::now();
        log.record_at(DiagnosticEventKind::AppStarted, start);
        log.record_at(
            DiagnosticEventKind::SessionStarted,
            start + Duration::from_secs(1),
        );

        let kinds: Vec<_> = log.kinds().cloned().collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::AppStarted,
                DiagnosticEventKind::SessionStarted
            ]
        );

        let stamps: Vec<_> = log.entries().map(|e| e.timestamp).collect();
        assert!(stamps[0] < stamps[1]);
    }

    #[test]
    fn capacity_bounds_memory() {
        let mut log = ActivityLog::new(BufferCapacity::new(0));
        let min = log.capacity();
        for id in 0..(min as u32 + 5) {
            log.record(DiagnosticEventKind::EventDetailsOpened {
                event_id: EventId::new(id),
            });
        }

        assert_eq!(log.len(), min);
        assert_eq!(
            log.kinds().next(),
            Some(&DiagnosticEventKind::EventDetailsOpened {
                event_id: EventId::new(5)
            })
        );
    }

    #[test]
    fn recent_returns_newest_tail() {
        let mut log = ActivityLog::default();
        let now = Instant::now();
        log.record_at(DiagnosticEventKind::AppStarted, now);
        log.record_at(DiagnosticEventKind::SessionStarted, now);
        log.record_at(DiagnosticEventKind::SessionEnded, now);

        assert_eq!(
            log.recent(2),
            vec![
                &DiagnosticEventKind::SessionStarted,
                &DiagnosticEventKind::SessionEnded
            ]
        );
        assert_eq!(log.recent(10).len(), 3);
    }

    #[test]
    fn stderr_echo_is_opt_in() {
        assert!(!ActivityLog::default().echoes_to_stderr());
        assert!(ActivityLog::default()
            .with_stderr_echo(true)
            .echoes_to_stderr());
    }
}
