//! Cancellable deferred actions on the frame clock.
//!
//! Quiz flows need "after the answer finishes drawing, reveal its name" —
//! an action scheduled for later that the user can invalidate by restarting
//! or replaying first. This scheduler is single-threaded and cooperative:
//! the host advances it with the same per-frame elapsed time it feeds the
//! animator, and due actions fire during [`Scheduler::tick`].
//!
//! Cancellation is checked at fire time, not delivered preemptively: a
//! token cancelled between ticks simply makes the entry a no-op when its
//! deadline comes around.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Handle to a scheduled action. Cloneable; any clone can cancel.
#[derive(Debug, Clone)]
pub struct ActionToken {
    cancelled: Rc<Cell<bool>>,
}

impl ActionToken {
    /// Invalidate the action. If it has not fired yet, it never will.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

struct Entry {
    due_at: f64,
    cancelled: Rc<Cell<bool>>,
    action: Box<dyn FnOnce()>,
}

/// A frame-driven timer queue.
#[derive(Default)]
pub struct Scheduler {
    now: f64,
    pending: Vec<Entry>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to run once `delay` has elapsed on this
    /// scheduler's clock.
    pub fn after(&mut self, delay: Duration, action: impl FnOnce() + 'static) -> ActionToken {
        let cancelled = Rc::new(Cell::new(false));
        self.pending.push(Entry {
            due_at: self.now + delay.as_secs_f64(),
            cancelled: Rc::clone(&cancelled),
            action: Box::new(action),
        });
        ActionToken { cancelled }
    }

    /// Advance the clock and fire every due, still-valid action.
    ///
    /// Actions fire in deadline order. An action scheduling new work from
    /// inside its callback is not supported (the queue is borrowed while
    /// firing); schedule follow-ups from the host loop instead.
    pub fn tick(&mut self, elapsed: Duration) {
        self.now += elapsed.as_secs_f64();
        let now = self.now;

        let mut due: Vec<Entry> = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due_at <= now {
                due.push(self.pending.swap_remove(i));
            } else {
                i += 1;
            }
        }

        due.sort_by(|a, b| a.due_at.total_cmp(&b.due_at));

        for entry in due {
            if entry.cancelled.get() {
                log::debug!("scheduler: dropping cancelled action");
                continue;
            }
            (entry.action)();
        }
    }

    /// Number of actions still waiting (cancelled ones included until
    /// their deadline passes).
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Drop every pending action without firing it.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
