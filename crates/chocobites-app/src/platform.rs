//! Target-specific wiring.
//!
//! In the browser the feed talks to the real embed runtime and `setTimeout`.
//! Elsewhere (desktop builds, `cargo test`) it gets the null runtime and a
//! scheduler nobody advances, so the feed simply stays in its loading state.

use chocobites_core::{FeedController, ScrollState};
use dioxus::prelude::*;

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub type Runtime = chocobites_browser::InstagramRuntime;
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub type Timers = chocobites_browser::TimeoutScheduler;

#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
pub type Runtime = chocobites_core::NoRuntime;
#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
pub type Timers = chocobites_core::ManualScheduler;

pub type SiteFeed = FeedController<Runtime, Timers>;

pub fn embed_runtime() -> Runtime {
    Runtime::default()
}

pub fn timers() -> Timers {
    Timers::default()
}

/// Window scroll position folded into the site's threshold flags.
#[allow(unused_mut)]
pub fn use_scroll_state() -> Signal<ScrollState> {
    let mut state = use_signal(ScrollState::default);

    // Listener lives in a signal so it detaches when the component unmounts
    #[cfg(all(target_family = "wasm", target_os = "unknown"))]
    {
        use chocobites_browser::{ScrollWatcher, scroll_y};

        let mut watcher: Signal<Option<ScrollWatcher>> = use_signal(|| None);
        use_effect(move || {
            state.set(ScrollState::from_offset(scroll_y()));
            let listener = ScrollWatcher::new(move |y| {
                let next = ScrollState::from_offset(y);
                if *state.peek() != next {
                    state.set(next);
                }
            });
            if listener.is_none() {
                tracing::warn!("no window to watch for scrolling");
            }
            watcher.set(listener);
        });
    }

    state
}

pub fn scroll_to_top() {
    #[cfg(all(target_family = "wasm", target_os = "unknown"))]
    chocobites_browser::scroll_to_top();
}

/// Open `url` in a new tab.
pub fn open_external(url: &str) {
    #[cfg(all(target_family = "wasm", target_os = "unknown"))]
    if let Err(e) = chocobites_browser::open_in_new_tab(url) {
        tracing::warn!("failed to open {url}: {e}");
    }
    #[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
    tracing::info!("open external link: {url}");
}
