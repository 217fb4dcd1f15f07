use std::collections::BTreeSet;
use std::time::Duration;

use smol_str::SmolStr;

use super::runtime::EmbedRuntime;
use super::state::{FeedStatus, InitializationState, LoadedSet, PostLoadState};
use crate::{EmbedConfig, EmbedError, Post};

/// A deferred re-attempt of [`EmbedFeed::process_embed`].
///
/// Tickets remember the generation they were issued under; a ticket that
/// outlives a [`EmbedFeed::retry_load`] is stale and does nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryTicket {
    pub identifier: SmolStr,
    pub generation: u64,
    /// 1-based value of the retry counter when this ticket was issued.
    pub attempt: u32,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// The runtime processed the embed. `newly` is false if it was already loaded.
    Loaded { newly: bool },
    /// Runtime not ready; the caller should fire the ticket after its delay.
    RetryScheduled(RetryTicket),
    /// Runtime not ready and the retry ceiling was reached.
    GaveUp,
    /// The runtime threw; the feed is now in its error state.
    Failed(EmbedError),
    /// The ticket belonged to an earlier retry cycle.
    Stale,
}

/// Load-state machine for the social feed.
///
/// Owns the loaded set, the script initialization flags and the retry counter.
/// It never sleeps: retries come back as [`RetryTicket`]s for a driver to schedule.
pub struct EmbedFeed<R> {
    posts: &'static [Post],
    runtime: R,
    loaded: LoadedSet,
    unavailable: BTreeSet<SmolStr>,
    init: InitializationState,
    retries: u32,
    max_retries: u32,
    retry_delay: Duration,
    generation: u64,
}

impl<R: EmbedRuntime> EmbedFeed<R> {
    pub fn new(posts: &'static [Post], runtime: R, config: &EmbedConfig) -> Self {
        Self {
            posts,
            runtime,
            loaded: LoadedSet::new(),
            unavailable: BTreeSet::new(),
            init: InitializationState::default(),
            retries: 0,
            max_retries: config.max_retries,
            retry_delay: config.retry_delay,
            generation: 0,
        }
    }

    pub fn posts(&self) -> &'static [Post] {
        self.posts
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    pub fn loaded(&self) -> &LoadedSet {
        &self.loaded
    }

    pub fn unavailable(&self) -> &BTreeSet<SmolStr> {
        &self.unavailable
    }

    pub fn init_state(&self) -> InitializationState {
        self.init
    }

    pub fn status(&self) -> FeedStatus {
        self.init.status()
    }

    pub fn retry_count(&self) -> u32 {
        self.retries
    }

    pub fn generation(&self) -> u64 {
        self.generation
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

    fn known(&self, identifier: &str) -> Option<&'static Post> {
        self.posts.iter().find(|p| p.identifier == identifier)
    }

    /// Materialise one post's embed, or hand back a retry ticket.
    pub fn process_embed(&mut self, identifier: &str) -> Result<ProcessOutcome, EmbedError> {
        let post = self
            .known(identifier)
            .ok_or_else(|| EmbedError::UnknownPost(identifier.into()))?;

        if self.runtime.is_ready() {
            if let Err(e) = self.runtime.process() {
                tracing::error!(identifier, "embed processing failed: {e}");
                self.init.has_error = true;
                self.init.is_initializing = false;
                return Ok(ProcessOutcome::Failed(e));
            }
            let newly = self.loaded.insert(post.identifier);
            self.unavailable.remove(identifier);
            tracing::debug!(identifier, newly, "embed loaded");
            return Ok(ProcessOutcome::Loaded { newly });
        }

        if self.retries < self.max_retries {
            self.retries += 1;
            tracing::debug!(identifier, attempt = self.retries, "embed runtime not ready, retrying");
            return Ok(ProcessOutcome::RetryScheduled(RetryTicket {
                identifier: SmolStr::new_static(post.identifier),
                generation: self.generation,
                attempt: self.retries,
                delay: self.retry_delay,
            }));
        }

        // Per-post give-up is deliberately not a feed error.
        tracing::warn!(identifier, "embed runtime never became ready, keeping fallback");
        self.unavailable.insert(SmolStr::new_static(post.identifier));
        Ok(ProcessOutcome::GaveUp)
    }

    /// Run a retry ticket issued by [`Self::process_embed`].
    pub fn fire_retry(&mut self, ticket: &RetryTicket) -> Result<ProcessOutcome, EmbedError> {
        if ticket.generation != self.generation {
            tracing::debug!(
                identifier = %ticket.identifier,
                ticket_generation = ticket.generation,
                generation = self.generation,
                "dropping stale retry"
            );
            return Ok(ProcessOutcome::Stale);
        }
        self.process_embed(&ticket.identifier)
    }

    /// Called once the embed script reports a successful load.
    pub fn initialize_embeds(&mut self) -> FeedStatus {
        if !self.runtime.is_ready() {
            tracing::debug!("embed script loaded but runtime global is missing");
            return self.status();
        }
        match self.runtime.process() {
            Ok(()) => {
                self.init.is_initializing = false;
                tracing::debug!("embeds initialized");
            }
            Err(e) => {
                tracing::error!("failed to initialize embeds: {e}");
                self.init.has_error = true;
                self.init.is_initializing = false;
            }
        }
        self.status()
    }

    /// The script tag fired its error event.
    pub fn script_failed(&mut self, error: &EmbedError) {
        tracing::error!("{error}");
        self.init.has_error = true;
        self.init.is_initializing = false;
    }

    /// User-triggered "Try Again": reset everything and initialize again.
    pub fn retry_load(&mut self) -> FeedStatus {
        self.loaded.clear();
        self.unavailable.clear();
        self.retries = 0;
        self.init = InitializationState::default();
        self.generation += 1;
        tracing::info!(generation = self.generation, "retrying embed feed");
        self.initialize_embeds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::INSTAGRAM_POSTS;
    use crate::embed::testing::MockRuntime;

    const A: &str = "https://www.instagram.com/p/DF4vlC_tZfP/";
    const B: &str = "https://www.instagram.com/p/DFKUccpojRe/";

    fn feed(runtime: MockRuntime) -> EmbedFeed<MockRuntime> {
        EmbedFeed::new(&INSTAGRAM_POSTS, runtime, &EmbedConfig::default())
    }

    #[test]
    fn test_initial_state() {
        let feed = feed(MockRuntime::default());
        assert_eq!(feed.status(), FeedStatus::Initializing);
        assert!(feed.loaded().is_empty());
        assert_eq!(feed.retry_count(), 0);
    }

    #[test]
    fn test_ready_runtime_loads_synchronously() {
        let mut feed = feed(MockRuntime::ready());
        let outcome = feed.process_embed(A).unwrap();
        assert_eq!(outcome, ProcessOutcome::Loaded { newly: true });
        assert!(feed.is_loaded(A));
        assert_eq!(feed.retry_count(), 0);
        assert_eq!(feed.runtime().calls.get(), 1);

        // Re-adding is a no-op on the set.
        let outcome = feed.process_embed(A).unwrap();
        assert_eq!(outcome, ProcessOutcome::Loaded { newly: false });
        assert_eq!(feed.loaded().len(), 1);
    }

    #[test]
    fn test_unknown_post_rejected() {
        let mut feed = feed(MockRuntime::ready());
        let err = feed.process_embed("https://example.com/nope").unwrap_err();
        assert!(matches!(err, EmbedError::UnknownPost(_)));
        assert!(feed.loaded().is_empty());
    }

    #[test]
    fn test_absent_runtime_retries_at_most_three_times() {
        let mut feed = feed(MockRuntime::default());
        let mut tickets = 0;
        let mut outcome = feed.process_embed(B).unwrap();
        while let ProcessOutcome::RetryScheduled(ticket) = outcome {
            tickets += 1;
            assert_eq!(ticket.attempt, tickets);
            assert_eq!(ticket.delay, Duration::from_secs(1));
            outcome = feed.fire_retry(&ticket).unwrap();
        }
        assert_eq!(outcome, ProcessOutcome::GaveUp);
        assert_eq!(tickets, 3);
        assert_eq!(feed.retry_count(), 3);
        assert!(!feed.is_loaded(B));
        assert_eq!(feed.post_state(B), PostLoadState::Unavailable);
        // No feed-level error for a single post.
        assert!(!feed.init_state().has_error);
    }

    #[test]
    fn test_retry_counter_is_shared_across_posts() {
        let mut feed = feed(MockRuntime::default());
        assert!(matches!(
            feed.process_embed(A).unwrap(),
            ProcessOutcome::RetryScheduled(_)
        ));
        assert!(matches!(
            feed.process_embed(B).unwrap(),
            ProcessOutcome::RetryScheduled(_)
        ));
        assert!(matches!(
            feed.process_embed(A).unwrap(),
            ProcessOutcome::RetryScheduled(_)
        ));
        assert_eq!(feed.process_embed(B).unwrap(), ProcessOutcome::GaveUp);
    }

    #[test]
    fn test_runtime_becomes_ready_during_retries() {
        let runtime = MockRuntime::default();
        let mut feed = feed(runtime.clone());
        let ProcessOutcome::RetryScheduled(ticket) = feed.process_embed(A).unwrap() else {
            panic!("expected a retry");
        };
        runtime.ready.set(true);
        assert_eq!(
            feed.fire_retry(&ticket).unwrap(),
            ProcessOutcome::Loaded { newly: true }
        );
        assert_eq!(feed.post_state(A), PostLoadState::Loaded);
    }

    #[test]
    fn test_processing_exception_is_feed_error() {
        let runtime = MockRuntime::ready();
        runtime.fail.set(true);
        let mut feed = feed(runtime);
        let outcome = feed.process_embed(A).unwrap();
        assert!(matches!(outcome, ProcessOutcome::Failed(EmbedError::Processing(_))));
        assert_eq!(feed.status(), FeedStatus::Error);
        assert!(!feed.is_loaded(A));
    }

    #[test]
    fn test_initialize_embeds() {
        let runtime = MockRuntime::default();
        let mut feed = feed(runtime.clone());

        // Script loaded, but the global is not there yet: nothing changes.
        assert_eq!(feed.initialize_embeds(), FeedStatus::Initializing);

        runtime.ready.set(true);
        assert_eq!(feed.initialize_embeds(), FeedStatus::Ready);
        assert!(!feed.init_state().is_initializing);
    }

    #[test]
    fn test_initialize_embeds_exception() {
        let runtime = MockRuntime::ready();
        runtime.fail.set(true);
        let mut feed = feed(runtime);
        assert_eq!(feed.initialize_embeds(), FeedStatus::Error);
        assert_eq!(
            feed.init_state(),
            InitializationState {
                is_initializing: false,
                has_error: true
            }
        );
    }

    #[test]
    fn test_script_failure() {
        let mut feed = feed(MockRuntime::default());
        let ProcessOutcome::RetryScheduled(_) = feed.process_embed(A).unwrap() else {
            panic!("expected a retry");
        };
        feed.script_failed(&EmbedError::script_load("https://x/embed.js", "404"));
        assert!(feed.init_state().has_error);
        assert!(!feed.init_state().is_initializing);
    }

    #[test]
    fn test_retry_load_resets_and_reinitializes() {
        let runtime = MockRuntime::ready();
        let mut feed = feed(runtime.clone());
        feed.process_embed(A).unwrap();
        feed.script_failed(&EmbedError::script_load("u", "boom"));
        assert_eq!(feed.status(), FeedStatus::Error);
        let calls_before = runtime.calls.get();

        runtime.ready.set(false);
        let status = feed.retry_load();
        assert!(feed.loaded().is_empty());
        assert_eq!(status, FeedStatus::Initializing);
        assert!(!feed.init_state().has_error);
        assert!(feed.init_state().is_initializing);
        assert_eq!(feed.generation(), 1);
        assert_eq!(runtime.calls.get(), calls_before);

        // With the runtime present, initialization completes inside retry_load.
        runtime.ready.set(true);
        feed.script_failed(&EmbedError::script_load("u", "boom"));
        assert_eq!(feed.retry_load(), FeedStatus::Ready);
        assert_eq!(runtime.calls.get(), calls_before + 1);
    }

    #[test]
    fn test_stale_ticket_ignored_after_retry_load() {
        let runtime = MockRuntime::default();
        let mut feed = feed(runtime.clone());
        let ProcessOutcome::RetryScheduled(ticket) = feed.process_embed(A).unwrap() else {
            panic!("expected a retry");
        };
        feed.retry_load();
        runtime.ready.set(true);
        assert_eq!(feed.fire_retry(&ticket).unwrap(), ProcessOutcome::Stale);
        assert!(feed.loaded().is_empty());
        assert_eq!(feed.retry_count(), 0);
    }

    #[test]
    fn test_loaded_set_stays_within_posts() {
        let mut feed = feed(MockRuntime::ready());
        for post in INSTAGRAM_POSTS.iter() {
            feed.process_embed(post.identifier).unwrap();
        }
        let _ = feed.process_embed("stranger");
        assert!(
            feed.loaded()
                .iter()
                .all(|id| INSTAGRAM_POSTS.iter().any(|p| p.identifier == id))
        );
        for post in INSTAGRAM_POSTS.iter() {
            assert_eq!(
                feed.is_loaded(post.identifier),
                feed.loaded().contains(post.identifier)
            );
        }
    }
}
