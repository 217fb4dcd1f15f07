//! Cancellable delayed tasks.
//!
//! The browser layer implements [`Scheduler`] over `setTimeout`; tests use
//! [`ManualScheduler`], which only advances when told to.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

pub trait TaskHandle {
    /// Prevent the task from running. No-op if it already ran.
    fn cancel(self);
}

pub trait Scheduler: Clone + 'static {
    type Handle: TaskHandle + 'static;

    /// Run `task` once after `delay`. Must not run it synchronously.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

type TaskKey = (Duration, u64);

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_id: u64,
    tasks: BTreeMap<TaskKey, Box<dyn FnOnce()>>,
}

/// Deterministic scheduler driven by [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ManualState>>,
}

pub struct ManualHandle {
    key: TaskKey,
    state: Weak<RefCell<ManualState>>,
}

impl TaskHandle for ManualHandle {
    fn cancel(self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().tasks.remove(&self.key);
        }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ManualHandle {
        let mut state = self.state.borrow_mut();
        let key = (state.now + delay, state.next_id);
        state.next_id += 1;
        state.tasks.insert(key, task);
        ManualHandle {
            key,
            state: Rc::downgrade(&self.state),
        }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Tasks scheduled and not yet run or cancelled.
    pub fn pending(&self) -> usize {
        self.state.borrow().tasks.len()
    }

    /// Move the clock forward, running due tasks in deadline order.
    ///
    /// Tasks scheduled by running tasks also run if they fall due within the
    /// window. Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut ran = 0;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let due = state
                    .tasks
                    .first_key_value()
                    .map(|(key, _)| *key)
                    .filter(|(deadline, _)| *deadline <= target);
                match due {
                    Some(key) => {
                        state.now = key.0;
                        state.tasks.remove(&key)
                    }
                    None => None,
                }
            };
            // Borrow released before the task can schedule more work.
            match next {
                Some(task) => {
                    task();
                    ran += 1;
                }
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
        ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_runs_in_deadline_order() {
        let sched = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (ms, tag) in [(30, "c"), (10, "a"), (20, "b")] {
            let log = log.clone();
            sched.schedule(
                Duration::from_millis(ms),
                Box::new(move || log.borrow_mut().push(tag)),
            );
        }
        assert_eq!(sched.advance(Duration::from_millis(25)), 2);
        assert_eq!(*log.borrow(), vec!["a", "b"]);
        assert_eq!(sched.pending(), 1);
        sched.advance(Duration::from_millis(5));
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_cancel() {
        let sched = ManualScheduler::new();
        let hit = Rc::new(Cell::new(false));
        let h = {
            let hit = hit.clone();
            sched.schedule(Duration::from_millis(5), Box::new(move || hit.set(true)))
        };
        h.cancel();
        sched.advance(Duration::from_secs(1));
        assert!(!hit.get());
    }

    #[test]
    fn test_nested_schedule_within_window() {
        let sched = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        {
            let inner_sched = sched.clone();
            let hits = hits.clone();
            sched.schedule(
                Duration::from_millis(10),
                Box::new(move || {
                    hits.set(hits.get() + 1);
                    let hits = hits.clone();
                    inner_sched.schedule(
                        Duration::from_millis(10),
                        Box::new(move || hits.set(hits.get() + 1)),
                    );
                }),
            );
        }
        assert_eq!(sched.advance(Duration::from_millis(20)), 2);
        assert_eq!(hits.get(), 2);
        assert_eq!(sched.now(), Duration::from_millis(20));
    }
}
