// SPDX-License-Identifier: MPL-2.0
//! One-shot delayed actions driven by the application tick.
//!
//! Nothing here reads the clock. Callers pass the current `Instant` in, so
//! tests can move time forward without sleeping.

use crate::domain::auth::SessionGrant;
use std::time::{Duration, Instant};

/// Handle returned by [`Scheduler::schedule`], used to cancel a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

/// Work performed when a task comes due.
#[derive(Debug, PartialEq, Eq)]
pub enum ScheduledAction {
    /// Switch to the signed-in screen.
    EnterSession(SessionGrant),
}

#[derive(Debug)]
struct ScheduledTask {
    id: TaskId,
    due: Instant,
    action: ScheduledAction,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `action` to fire once `delay` has elapsed after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, action: ScheduledAction) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            id,
            due: now + delay,
            action,
        });
        id
    }

    /// Drops a pending task. Returns `false` if it already fired or never
    /// existed.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Removes and returns every action due at `now`, earliest first.
    pub fn fire_due(&mut self, now: Instant) -> Vec<ScheduledAction> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.tasks)
            .into_iter()
            .partition(|task| task.due <= now);
        self.tasks = pending;

        due.sort_by_key(|task| task.due);
        due.into_iter().map(|task| task.action).collect()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.iter().map(|task| task.due).min()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::LoginOutcome;

    fn enter_session() -> ScheduledAction {
        ScheduledAction::EnterSession(LoginOutcome::Success.grant().expect("success grants"))
    }

    #[test]
    fn nothing_fires_before_the_deadline() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, Duration::from_secs(1), enter_session());

        assert!(scheduler.fire_due(start).is_empty());
        assert!(scheduler
            .fire_due(start + Duration::from_millis(999))
            .is_empty());
        assert!(scheduler.has_pending());
    }

    #[test]
    fn task_fires_exactly_once() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, Duration::from_secs(1), enter_session());

        let fired = scheduler.fire_due(start + Duration::from_secs(1));
        assert_eq!(fired.len(), 1);
        assert!(!scheduler.has_pending());
        assert!(scheduler.fire_due(start + Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn cancelled_task_never_fires() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(start, Duration::from_secs(1), enter_session());

        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.fire_due(start + Duration::from_secs(2)).is_empty());
    }

    #[test]
    fn next_deadline_tracks_earliest_task() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        assert_eq!(scheduler.next_deadline(), None);

        scheduler.schedule(start, Duration::from_secs(3), enter_session());
        let early = scheduler.schedule(start, Duration::from_secs(1), enter_session());
        assert_eq!(
            scheduler.next_deadline(),
            Some(start + Duration::from_secs(1))
        );

        scheduler.cancel(early);
        assert_eq!(
            scheduler.next_deadline(),
            Some(start + Duration::from_secs(3))
        );
    }

    #[test]
    fn task_ids_are_distinct() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let a = scheduler.schedule(start, Duration::ZERO, enter_session());
        let b = scheduler.schedule(start, Duration::ZERO, enter_session());
        assert_ne!(a, b);
        assert_eq!(scheduler.fire_due(start).len(), 2);
    }
}
