use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use smol_str::SmolStr;

use super::feed::{EmbedFeed, ProcessOutcome, RetryTicket};
use super::runtime::EmbedRuntime;
use super::scheduler::{Scheduler, TaskHandle};
use super::state::{FeedStatus, InitializationState, LoadedSet, PostLoadState};
use crate::EmbedError;

/// Copy of the feed's observable state, handed to the UI after every change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedSnapshot {
    pub init: InitializationState,
    pub loaded: LoadedSet,
    pub unavailable: BTreeSet<SmolStr>,
}

impl FeedSnapshot {
    pub fn status(&self) -> FeedStatus {
        self.init.status()
    }

    pub fn is_loaded(&self, identifier: &str) -> bool {
        self.loaded.contains(identifier)
    }

    pub fn post_state(&self, identifier: &str) -> PostLoadState {
        if self.loaded.contains(identifier) {
            PostLoadState::Loaded
        } else if self.unavailable.contains(identifier) {
            PostLoadState::Unavailable
        } else {
            PostLoadState::Pending
        }
    }
}

/// What the host still has to do after [`FeedController::retry_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryAction {
    /// The runtime was present and initialization already ran.
    Reinitialized,
    /// The runtime never appeared. The embed script must be fetched again;
    /// its callbacks report back through `script_loaded`/`script_failed`.
    ReacquireScript,
}

type Listener = Rc<dyn Fn(&FeedSnapshot)>;

struct Shared<R, S: Scheduler> {
    feed: EmbedFeed<R>,
    pending: BTreeMap<u64, S::Handle>,
    next_task: u64,
}

/// Drives an [`EmbedFeed`] with real timers.
///
/// Retry tickets are scheduled on `S`; every pending handle is cancelled by
/// [`FeedController::retry_load`]. Cloning shares the same feed.
pub struct FeedController<R, S: Scheduler> {
    shared: Rc<RefCell<Shared<R, S>>>,
    scheduler: S,
    listener: Option<Listener>,
}

impl<R, S: Scheduler> Clone for FeedController<R, S> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
            scheduler: self.scheduler.clone(),
            listener: self.listener.clone(),
        }
    }
}

impl<R: EmbedRuntime + 'static, S: Scheduler> FeedController<R, S> {
    pub fn new(feed: EmbedFeed<R>, scheduler: S) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                feed,
                pending: BTreeMap::new(),
                next_task: 0,
            })),
            scheduler,
            listener: None,
        }
    }

    /// Called with a fresh snapshot after every state change.
    pub fn with_listener(mut self, listener: impl Fn(&FeedSnapshot) + 'static) -> Self {
        self.listener = Some(Rc::new(listener));
        self
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        let shared = self.shared.borrow();
        FeedSnapshot {
            init: shared.feed.init_state(),
            loaded: shared.feed.loaded().clone(),
            unavailable: shared.feed.unavailable().clone(),
        }
    }

    pub fn pending_retries(&self) -> usize {
        self.shared.borrow().pending.len()
    }

    pub fn retry_count(&self) -> u32 {
        self.shared.borrow().feed.retry_count()
    }

    /// Entry point for a post that has become visible.
    pub fn process_embed(&self, identifier: &str) -> Result<ProcessOutcome, EmbedError> {
        let outcome = self.shared.borrow_mut().feed.process_embed(identifier)?;
        self.after(&outcome);
        Ok(outcome)
    }

    /// Load callback of the embed script.
    pub fn script_loaded(&self) {
        self.shared.borrow_mut().feed.initialize_embeds();
        self.notify();
    }

    /// Error callback of the embed script.
    pub fn script_failed(&self, error: &EmbedError) {
        self.shared.borrow_mut().feed.script_failed(error);
        self.notify();
    }

    /// User-triggered full retry. Pending retries from the previous cycle are cancelled.
    pub fn retry_load(&self) -> RetryAction {
        let (pending, action) = {
            let mut shared = self.shared.borrow_mut();
            let pending = std::mem::take(&mut shared.pending);
            let status = shared.feed.retry_load();
            let action = if status == FeedStatus::Initializing && !shared.feed.runtime().is_ready()
            {
                RetryAction::ReacquireScript
            } else {
                RetryAction::Reinitialized
            };
            (pending, action)
        };
        let cancelled = pending.len();
        for handle in pending.into_values() {
            handle.cancel();
        }
        if cancelled > 0 {
            tracing::debug!(cancelled, "cancelled pending embed retries");
        }
        self.notify();
        action
    }

    fn fire(&self, ticket: RetryTicket) {
        let result = self.shared.borrow_mut().feed.fire_retry(&ticket);
        match result {
            Ok(outcome) => self.after(&outcome),
            Err(e) => tracing::warn!("retry for {} failed: {e}", ticket.identifier),
        }
    }

    fn after(&self, outcome: &ProcessOutcome) {
        match outcome {
            ProcessOutcome::RetryScheduled(ticket) => self.schedule_retry(ticket.clone()),
            ProcessOutcome::Stale => return,
            _ => {}
        }
        self.notify();
    }

    fn schedule_retry(&self, ticket: RetryTicket) {
        let task_id = {
            let mut shared = self.shared.borrow_mut();
            let id = shared.next_task;
            shared.next_task += 1;
            id
        };
        let weak = Rc::downgrade(&self.shared);
        let scheduler = self.scheduler.clone();
        let listener = self.listener.clone();
        let delay = ticket.delay;

        let handle = self.scheduler.schedule(
            delay,
            Box::new(move || {
                let Some(shared) = weak.upgrade() else {
                    return;
                };
                // Drop the handle outside the borrow.
                let finished = shared.borrow_mut().pending.remove(&task_id);
                drop(finished);
                let controller = FeedController {
                    shared,
                    scheduler,
                    listener,
                };
                controller.fire(ticket);
            }),
        );
        self.shared.borrow_mut().pending.insert(task_id, handle);
    }

    fn notify(&self) {
        if let Some(listener) = &self.listener {
            let snapshot = self.snapshot();
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::Duration;

    use super::*;
    use crate::embed::scheduler::ManualScheduler;
    use crate::embed::testing::MockRuntime;
    use crate::{EmbedConfig, INSTAGRAM_POSTS};

    const A: &str = "https://www.instagram.com/p/DF4vlC_tZfP/";
    const B: &str = "https://www.instagram.com/p/DFKUccpojRe/";

    fn controller(
        runtime: MockRuntime,
    ) -> (
        FeedController<MockRuntime, ManualScheduler>,
        ManualScheduler,
        Rc<RefCell<Vec<FeedSnapshot>>>,
    ) {
        let sched = ManualScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let feed = EmbedFeed::new(&INSTAGRAM_POSTS, runtime, &EmbedConfig::default());
        let log = seen.clone();
        let ctl = FeedController::new(feed, sched.clone())
            .with_listener(move |snap| log.borrow_mut().push(snap.clone()));
        (ctl, sched, seen)
    }

    #[test]
    fn test_present_runtime_schedules_no_timer() {
        let (ctl, sched, seen) = controller(MockRuntime::ready());
        ctl.process_embed(A).unwrap();
        assert!(ctl.snapshot().is_loaded(A));
        assert_eq!(sched.pending(), 0);
        assert_eq!(ctl.pending_retries(), 0);
        assert!(seen.borrow().last().unwrap().is_loaded(A));
    }

    #[test]
    fn test_retries_fire_after_backoff() {
        let runtime = MockRuntime::default();
        let (ctl, sched, _) = controller(runtime.clone());
        ctl.process_embed(A).unwrap();
        assert_eq!(ctl.pending_retries(), 1);

        sched.advance(Duration::from_millis(999));
        assert_eq!(ctl.retry_count(), 1);

        runtime.ready.set(true);
        sched.advance(Duration::from_millis(1));
        assert!(ctl.snapshot().is_loaded(A));
        assert_eq!(ctl.pending_retries(), 0);
    }

    #[test]
    fn test_absent_runtime_gives_up_quietly() {
        let (ctl, sched, _) = controller(MockRuntime::default());
        ctl.process_embed(B).unwrap();
        sched.advance(Duration::from_secs(10));
        let snap = ctl.snapshot();
        assert_eq!(ctl.retry_count(), 3);
        assert!(!snap.is_loaded(B));
        assert_eq!(snap.post_state(B), PostLoadState::Unavailable);
        assert!(!snap.init.has_error);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_script_error_independent_of_retries() {
        let (ctl, sched, _) = controller(MockRuntime::default());
        ctl.process_embed(A).unwrap();
        ctl.script_failed(&EmbedError::script_load("u", "network"));
        let snap = ctl.snapshot();
        assert!(snap.init.has_error);
        assert!(!snap.init.is_initializing);
        // The in-flight retry still runs and does not clear the error.
        sched.advance(Duration::from_secs(1));
        assert_eq!(ctl.snapshot().status(), FeedStatus::Error);
    }

    #[test]
    fn test_retry_load_cancels_stale_retries() {
        let runtime = MockRuntime::default();
        let (ctl, sched, _) = controller(runtime.clone());
        ctl.process_embed(A).unwrap();
        ctl.process_embed(B).unwrap();
        assert_eq!(sched.pending(), 2);

        ctl.script_failed(&EmbedError::script_load("u", "network"));
        assert_eq!(ctl.retry_load(), RetryAction::ReacquireScript);
        let snap = ctl.snapshot();
        assert!(snap.loaded.is_empty());
        assert!(snap.init.is_initializing);
        assert!(!snap.init.has_error);
        assert_eq!(sched.pending(), 0);

        runtime.ready.set(true);
        sched.advance(Duration::from_secs(5));
        assert!(ctl.snapshot().loaded.is_empty());
    }

    #[test]
    fn test_failed_script_can_fail_again_after_retry() {
        let (ctl, sched, seen) = controller(MockRuntime::default());
        ctl.script_failed(&EmbedError::script_load("u", "network"));
        assert_eq!(ctl.snapshot().status(), FeedStatus::Error);

        assert_eq!(ctl.retry_load(), RetryAction::ReacquireScript);
        assert_eq!(ctl.snapshot().status(), FeedStatus::Initializing);

        // Posts keep asking while the new script is in flight.
        for post in INSTAGRAM_POSTS.iter() {
            ctl.process_embed(post.identifier).unwrap();
        }
        sched.advance(Duration::from_secs(60));
        assert_eq!(ctl.snapshot().status(), FeedStatus::Initializing);

        // The re-fetched script fails too: the error and its retry come back.
        ctl.script_failed(&EmbedError::script_load("u", "network"));
        assert_eq!(ctl.snapshot().status(), FeedStatus::Error);
        assert_eq!(seen.borrow().last().map(FeedSnapshot::status), Some(FeedStatus::Error));
        assert_eq!(ctl.retry_load(), RetryAction::ReacquireScript);
    }

    #[test]
    fn test_failed_script_then_successful_refetch() {
        let runtime = MockRuntime::default();
        let (ctl, _, _) = controller(runtime.clone());
        ctl.script_failed(&EmbedError::script_load("u", "network"));
        assert_eq!(ctl.retry_load(), RetryAction::ReacquireScript);

        runtime.ready.set(true);
        ctl.script_loaded();
        assert_eq!(ctl.snapshot().status(), FeedStatus::Ready);
        ctl.process_embed(A).unwrap();
        assert!(ctl.snapshot().is_loaded(A));
    }

    #[test]
    fn test_retry_with_runtime_present_needs_no_script() {
        let runtime = MockRuntime::ready();
        runtime.fail.set(true);
        let (ctl, _, _) = controller(runtime.clone());
        ctl.script_loaded();
        assert_eq!(ctl.snapshot().status(), FeedStatus::Error);

        runtime.fail.set(false);
        assert_eq!(ctl.retry_load(), RetryAction::Reinitialized);
        assert_eq!(ctl.snapshot().status(), FeedStatus::Ready);
    }

    #[test]
    fn test_script_loaded_initializes() {
        let runtime = MockRuntime::ready();
        let (ctl, _, seen) = controller(runtime.clone());
        ctl.script_loaded();
        assert_eq!(ctl.snapshot().status(), FeedStatus::Ready);
        assert_eq!(runtime.calls.get(), 1);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_listener_may_reenter() {
        let sched = ManualScheduler::new();
        let feed = EmbedFeed::new(&INSTAGRAM_POSTS, MockRuntime::ready(), &EmbedConfig::default());
        let slot: Rc<RefCell<Option<FeedController<MockRuntime, ManualScheduler>>>> =
            Rc::new(RefCell::new(None));
        let reads = Rc::new(Cell::new(0));
        let ctl = {
            let slot = slot.clone();
            let reads = reads.clone();
            FeedController::new(feed, sched).with_listener(move |_| {
                if let Some(ctl) = slot.borrow().as_ref() {
                    ctl.snapshot();
                    reads.set(reads.get() + 1);
                }
            })
        };
        *slot.borrow_mut() = Some(ctl.clone());
        ctl.process_embed(A).unwrap();
        assert_eq!(reads.get(), 1);
    }
}
