//! Lifecycle management for third-party embeds.
//!
//! The pure state machines (`EmbedFeed`, `VisibilityTracker`) never touch a
//! timer. The drivers (`FeedController`, `PostActivator`) pair them with a
//! `Scheduler` so the browser layer only has to supply timers, the runtime
//! binding and the DOM observers.

mod activator;
mod controller;
mod feed;
mod runtime;
mod scheduler;
mod state;
mod visibility;

pub use activator::PostActivator;
pub use controller::{FeedController, FeedSnapshot, RetryAction};
pub use feed::{EmbedFeed, ProcessOutcome, RetryTicket};
pub use runtime::{EmbedRuntime, NoRuntime};
pub use scheduler::{ManualHandle, ManualScheduler, Scheduler, TaskHandle};
pub use state::{FeedStatus, InitializationState, LoadedSet, PostLoadState};
pub use visibility::{VisibilityAction, VisibilityTracker};
