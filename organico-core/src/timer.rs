//! One-shot timer port.
//!
//! The controller asks a [`Scheduler`] for a timer and keeps the returned
//! handle; dropping the intent to dismiss means calling [`TimerHandle::cancel`].
//! When a timer fires, whoever owns the scheduler hands the [`DismissToken`]
//! back to [`crate::ViewController::dismiss`].
//!
//! [`ManualClock`] is a virtual clock used by tests and the CLI simulator.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Identifies one scheduled banner dismissal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DismissToken(pub u64);

/// Owned handle to a pending timer.
pub trait TimerHandle {
    /// Prevent the timer from firing. Cancelling a timer that already fired is
    /// a no-op.
    fn cancel(self);
}

/// Something that can run a one-shot timer.
pub trait Scheduler {
    type Handle: TimerHandle;

    /// Arrange for `token` to be delivered back after `delay`.
    fn schedule(&mut self, delay: Duration, token: DismissToken) -> Self::Handle;
}

#[derive(Debug)]
struct PendingTimer {
    id: u64,
    deadline: Duration,
    token: DismissToken,
}

#[derive(Debug, Default)]
struct ClockInner {
    now: Duration,
    next_id: u64,
    timers: Vec<PendingTimer>,
}

/// Virtual clock. Clones share the same timeline.
///
/// Time only moves when [`ManualClock::advance`] is called, which returns the
/// tokens whose deadline has passed.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    inner: Rc<RefCell<ClockInner>>,
}

/// Handle returned by [`ManualClock`] when scheduling.
#[derive(Debug)]
pub struct ManualTimer {
    clock: ManualClock,
    id: u64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of timers that are scheduled and not cancelled.
    pub fn pending(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    /// Move time forward and collect every token that came due, ordered by
    /// deadline then by scheduling order.
    pub fn advance(&self, by: Duration) -> Vec<DismissToken> {
        let mut inner = self.inner.borrow_mut();
        inner.now = inner.now.saturating_add(by);
        let now = inner.now;

        let (mut due, waiting): (Vec<_>, Vec<_>) = inner
            .timers
            .drain(..)
            .partition(|timer| timer.deadline <= now);
        inner.timers = waiting;

        due.sort_by_key(|timer| (timer.deadline, timer.id));
        due.into_iter().map(|timer| timer.token).collect()
    }
}

impl Scheduler for ManualClock {
    type Handle = ManualTimer;

    fn schedule(&mut self, delay: Duration, token: DismissToken) -> ManualTimer {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let deadline = inner.now.saturating_add(delay);
        inner.timers.push(PendingTimer { id, deadline, token });
        ManualTimer {
            clock: self.clone(),
            id,
        }
    }
}

impl TimerHandle for ManualTimer {
    fn cancel(self) {
        self.clock
            .inner
            .borrow_mut()
            .timers
            .retain(|timer| timer.id != self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_at_deadline_not_before() {
        let mut clock = ManualClock::new();
        let _timer = clock.schedule(ms(3000), DismissToken(1));

        assert!(clock.advance(ms(2999)).is_empty());
        assert_eq!(clock.advance(ms(1)), vec![DismissToken(1)]);
        assert_eq!(clock.pending(), 0);
        assert_eq!(clock.now(), ms(3000));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut clock = ManualClock::new();
        let timer = clock.schedule(ms(10), DismissToken(7));
        timer.cancel();
        assert!(clock.advance(ms(100)).is_empty());
    }

    #[test]
    fn due_tokens_are_ordered_by_deadline() {
        let mut clock = ManualClock::new();
        let _late = clock.schedule(ms(50), DismissToken(2));
        let _early = clock.schedule(ms(20), DismissToken(1));
        let _tie = clock.schedule(ms(50), DismissToken(3));

        assert_eq!(
            clock.advance(ms(60)),
            vec![DismissToken(1), DismissToken(2), DismissToken(3)]
        );
    }

    #[test]
    fn cancel_after_fire_is_noop() {
        let mut clock = ManualClock::new();
        let timer = clock.schedule(ms(5), DismissToken(1));
        let _other = clock.schedule(ms(50), DismissToken(2));
        clock.advance(ms(5));
        timer.cancel();
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn clock_saturates_instead_of_overflowing() {
        let mut clock = ManualClock::new();
        clock.advance(Duration::MAX);
        clock.advance(Duration::MAX);
        assert_eq!(clock.now(), Duration::MAX);

        let _timer = clock.schedule(ms(3000), DismissToken(1));
        assert_eq!(clock.advance(ms(1)), vec![DismissToken(1)]);
    }
}
