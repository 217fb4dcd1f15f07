use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::scheduler::{Scheduler, TaskHandle};
use super::visibility::{VisibilityAction, VisibilityTracker};

struct ActivatorState<S: Scheduler> {
    tracker: VisibilityTracker,
    pending: Option<S::Handle>,
}

/// Turns raw intersection reports into debounced load requests for one post.
///
/// Dropping the last clone drops any pending timer handle with it.
pub struct PostActivator<S: Scheduler> {
    state: Rc<RefCell<ActivatorState<S>>>,
    scheduler: S,
    debounce: Duration,
    is_loaded: Rc<dyn Fn() -> bool>,
    on_request: Rc<dyn Fn()>,
}

impl<S: Scheduler> Clone for PostActivator<S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            scheduler: self.scheduler.clone(),
            debounce: self.debounce,
            is_loaded: self.is_loaded.clone(),
            on_request: self.on_request.clone(),
        }
    }
}

impl<S: Scheduler> PostActivator<S> {
    pub fn new(
        scheduler: S,
        debounce: Duration,
        is_loaded: impl Fn() -> bool + 'static,
        on_request: impl Fn() + 'static,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(ActivatorState {
                tracker: VisibilityTracker::new(),
                pending: None,
            })),
            scheduler,
            debounce,
            is_loaded: Rc::new(is_loaded),
            on_request: Rc::new(on_request),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().tracker.is_visible()
    }

    /// Report an intersection change from the observer.
    pub fn set_visible(&self, intersecting: bool) {
        let loaded = (self.is_loaded)();
        let action = self.state.borrow_mut().tracker.observe(intersecting, loaded);
        match action {
            VisibilityAction::ArmDebounce { epoch } => self.arm(epoch),
            VisibilityAction::CancelDebounce => {
                let pending = self.state.borrow_mut().pending.take();
                if let Some(handle) = pending {
                    handle.cancel();
                }
            }
            VisibilityAction::None => {}
        }
    }

    fn arm(&self, epoch: u64) {
        let weak = Rc::downgrade(&self.state);
        let is_loaded = self.is_loaded.clone();
        let on_request = self.on_request.clone();
        let handle = self.scheduler.schedule(
            self.debounce,
            Box::new(move || {
                let Some(state) = weak.upgrade() else {
                    return;
                };
                let fire = {
                    let mut state = state.borrow_mut();
                    state.pending = None;
                    state.tracker.debounce_elapsed(epoch, is_loaded())
                };
                if fire {
                    on_request();
                }
            }),
        );
        let previous = self.state.borrow_mut().pending.replace(handle);
        if let Some(previous) = previous {
            previous.cancel();
        }
    }
}
