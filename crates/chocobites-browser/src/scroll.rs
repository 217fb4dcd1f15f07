//! Window scroll tracking.

use gloo_events::EventListener;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Current vertical scroll offset, 0 if unavailable.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Calls back with the new offset on every window scroll. Detaches on drop.
pub struct ScrollWatcher {
    _listener: EventListener,
}

impl ScrollWatcher {
    pub fn new(mut on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let listener = EventListener::new(&window, "scroll", move |_| on_scroll(scroll_y()));
        Some(Self {
            _listener: listener,
        })
    }
}

pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
