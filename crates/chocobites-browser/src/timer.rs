//! `setTimeout`-backed scheduling.

use std::time::Duration;

use chocobites_core::{Scheduler, TaskHandle};
use gloo_timers::callback::Timeout;

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

/// A pending `setTimeout`. Dropping it clears the timeout as well.
pub struct TimeoutHandle(Timeout);

impl TaskHandle for TimeoutHandle {
    fn cancel(self) {
        drop(self.0.cancel());
    }
}

impl Scheduler for TimeoutScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimeoutHandle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        TimeoutHandle(Timeout::new(millis, task))
    }
}
