//! Visibility reporting over `IntersectionObserver`.

use chocobites_core::EmbedError;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::js_error_message;

/// Observes one element. Disconnects on drop.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    /// Start observing `element`, calling `on_change` with `isIntersecting`
    /// each time a threshold is crossed.
    pub fn observe(
        element: &Element,
        thresholds: &[f64],
        root_margin: &str,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> Result<Self, EmbedError> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _: IntersectionObserver| {
                // Batched entries for the same target: the last one is current.
                let Some(entry) = entries.iter().last() else {
                    return;
                };
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_change(entry.is_intersecting());
            },
        );

        let threshold = Array::new();
        for t in thresholds {
            threshold.push(&JsValue::from_f64(*t));
        }
        let init = IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        init.set_threshold(&threshold);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| EmbedError::Browser(js_error_message(&e)))?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
