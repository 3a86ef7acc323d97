//! Timer host abstraction.
//!
//! Every delayed or repeating action in the calculator goes through
//! [`TimerHost`]. A timer stays armed for as long as its handle is alive;
//! dropping the handle cancels it, which is how [`gloo_timers`] behaves in
//! the browser.
//!
//! - [`BrowserTimers`] schedules real `setTimeout` / `setInterval` timers.
//! - [`ManualTimers`] runs on a virtual clock that only moves when
//!   [`ManualTimers::advance`] is called, so timing behaviour can be checked
//!   deterministically off the browser.

use gloo_timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

/// Source of single-shot and repeating timers.
pub trait TimerHost: Clone + 'static {
    /// Keeps the timer armed; dropping it cancels the timer.
    type Handle: 'static;

    /// Run `callback` once after `millis`.
    fn timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;

    /// Run `callback` every `millis`, first firing one period from now.
    fn interval(&self, millis: u32, callback: Box<dyn FnMut()>) -> Self::Handle;
}

// ──────────────────────────────────────────────────────────────────────────────
// Browser

/// Timers backed by `window.setTimeout` / `window.setInterval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

/// Live gloo timer; dropping it clears the underlying browser timer.
pub enum BrowserTimer {
    Timeout(Timeout),
    Interval(Interval),
}

impl TimerHost for BrowserTimers {
    type Handle = BrowserTimer;

    fn timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> BrowserTimer {
        BrowserTimer::Timeout(Timeout::new(millis, callback))
    }

    fn interval(&self, millis: u32, callback: Box<dyn FnMut()>) -> BrowserTimer {
        BrowserTimer::Interval(Interval::new(millis, callback))
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Virtual clock

enum Task {
    Once(Box<dyn FnOnce()>),
    Repeat(Box<dyn FnMut()>),
}

struct Entry {
    due: u64,
    period: Option<u64>,
    // Taken out while the callback runs.
    task: Option<Task>,
}

#[derive(Default)]
struct Clock {
    now: u64,
    next_id: u64,
    entries: BTreeMap<u64, Entry>,
}

/// Deterministic timer host driven by [`ManualTimers::advance`].
///
/// Timers due at the same instant fire in the order they were scheduled.
#[derive(Clone, Default)]
pub struct ManualTimers {
    clock: Rc<RefCell<Clock>>,
}

/// Handle for a [`ManualTimers`] timer; dropping it cancels the timer.
pub struct ManualTimer {
    id: u64,
    clock: Weak<RefCell<Clock>>,
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            // The removed entry may own other handles; drop it after the borrow ends.
            let removed = clock.borrow_mut().entries.remove(&self.id);
            drop(removed);
        }
    }
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed on the virtual clock.
    pub fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    /// Number of armed timers.
    pub fn pending(&self) -> usize {
        self.clock.borrow().entries.len()
    }

    /// Move the clock forward by `millis`, firing every timer that falls due
    /// on the way, in due order.
    pub fn advance(&self, millis: u64) {
        let target = self.clock.borrow().now + millis;
        while let Some((id, task)) = self.take_next_due(target) {
            match task {
                Task::Once(callback) => callback(),
                Task::Repeat(mut callback) => {
                    callback();
                    // Put the callback back unless the timer was cancelled while running.
                    let leftover = {
                        let mut clock = self.clock.borrow_mut();
                        match clock.entries.get_mut(&id) {
                            Some(entry) => {
                                entry.task = Some(Task::Repeat(callback));
                                None
                            }
                            None => Some(callback),
                        }
                    };
                    drop(leftover);
                }
            }
        }
        self.clock.borrow_mut().now = target;
    }

    fn take_next_due(&self, target: u64) -> Option<(u64, Task)> {
        let mut clock = self.clock.borrow_mut();
        let (id, due) = clock
            .entries
            .iter()
            .filter(|(_, entry)| entry.task.is_some() && entry.due <= target)
            .map(|(&id, entry)| (id, entry.due))
            .min_by_key(|&(id, due)| (due, id))?;

        clock.now = due;
        let period = clock.entries.get(&id)?.period;
        match period {
            Some(period) => {
                let entry = clock.entries.get_mut(&id)?;
                entry.due = due + period;
                entry.task.take().map(|task| (id, task))
            }
            None => clock.entries.remove(&id).and_then(|e| e.task).map(|task| (id, task)),
        }
    }

    fn schedule(&self, delay: u32, period: Option<u64>, task: Task) -> ManualTimer {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + u64::from(delay);
        clock.entries.insert(
            id,
            Entry {
                due,
                period,
                task: Some(task),
            },
        );
        ManualTimer {
            id,
            clock: Rc::downgrade(&self.clock),
        }
    }
}

impl TimerHost for ManualTimers {
    type Handle = ManualTimer;

    fn timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> ManualTimer {
        self.schedule(millis, None, Task::Once(callback))
    }

    fn interval(&self, millis: u32, callback: Box<dyn FnMut()>) -> ManualTimer {
        // Browsers treat a zero interval as the minimum delay; never spin in place.
        let period = u64::from(millis.max(1));
        self.schedule(millis.max(1), Some(period), Task::Repeat(callback))
    }
}
