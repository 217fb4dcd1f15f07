//! One-shot injection of the embed script.
//!
//! The script tag is appended to `<head>` at most once per page, or once per
//! explicit retry. A second feed instance (after client-side navigation, say)
//! finds the existing tag and either reuses its completed load or waits on the
//! in-flight one.
//!
//! Each injected tag records its own outcome as an attribute, through
//! listeners that live as long as the tag. A later caller can therefore tell a
//! finished load or a failed one apart from an in-flight one, even when the
//! caller that injected the tag is long gone.

use chocobites_core::{EmbedError, EmbedRuntime};
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::js_error_message;
use crate::runtime::InstagramRuntime;

/// Marks tags this crate injected.
const SCRIPT_MARKER: &str = "data-chocobites-embed";
/// Set on the tag once its load event has fired.
const LOADED_MARKER: &str = "data-chocobites-loaded";
/// Set on the tag once its error event has fired.
const FAILED_MARKER: &str = "data-chocobites-failed";

/// Keeps the load and error listeners alive. Dropping detaches them without
/// removing the script tag.
pub struct ScriptHandle {
    _load: EventListener,
    _error: EventListener,
}

pub enum ScriptAcquisition {
    /// The script is loading; exactly one of the callbacks will run.
    Loading(ScriptHandle),
    /// The runtime is installed, or a previous tag finished loading. No
    /// callback will run.
    AlreadyLoaded,
}

/// Make sure the script at `url` is on the page and hear when it is ready.
///
/// A tag that failed earlier is replaced by a fresh one.
pub fn acquire_script(
    url: &str,
    on_load: impl FnOnce() + 'static,
    on_error: impl FnOnce(EmbedError) + 'static,
) -> Result<ScriptAcquisition, EmbedError> {
    acquire(url, false, on_load, on_error)
}

/// Like [`acquire_script`], but also replaces a tag that loaded without
/// installing the runtime. Used by the feed's explicit retry.
pub fn reacquire_script(
    url: &str,
    on_load: impl FnOnce() + 'static,
    on_error: impl FnOnce(EmbedError) + 'static,
) -> Result<ScriptAcquisition, EmbedError> {
    acquire(url, true, on_load, on_error)
}

fn acquire(
    url: &str,
    replace_loaded: bool,
    on_load: impl FnOnce() + 'static,
    on_error: impl FnOnce(EmbedError) + 'static,
) -> Result<ScriptAcquisition, EmbedError> {
    if InstagramRuntime::new().is_ready() {
        tracing::debug!(url, "embed runtime already installed");
        return Ok(ScriptAcquisition::AlreadyLoaded);
    }

    let window = web_sys::window().ok_or_else(|| EmbedError::Browser("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| EmbedError::Browser("no document".into()))?;

    let existing = match find_script(&document, url)? {
        Some(script) if script.has_attribute(FAILED_MARKER) => {
            tracing::debug!(url, "replacing failed embed script");
            script.remove();
            None
        }
        Some(script) if script.has_attribute(LOADED_MARKER) => {
            if !replace_loaded {
                tracing::debug!(url, "embed script already loaded");
                return Ok(ScriptAcquisition::AlreadyLoaded);
            }
            tracing::debug!(url, "embed script loaded without a runtime, replacing");
            script.remove();
            None
        }
        other => other,
    };

    let script = match existing {
        Some(script) => script,
        None => inject(&document, url)?,
    };

    let load = EventListener::once(&script, "load", move |_| on_load());
    let failed_url = url.to_owned();
    let error = EventListener::once(&script, "error", move |_| {
        on_error(EmbedError::script_load(&failed_url, "network error"));
    });

    Ok(ScriptAcquisition::Loading(ScriptHandle {
        _load: load,
        _error: error,
    }))
}

fn inject(document: &web_sys::Document, url: &str) -> Result<HtmlScriptElement, EmbedError> {
    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(|e| EmbedError::Browser(js_error_message(&e)))?
        .dyn_into()
        .map_err(|_| EmbedError::Browser("created element is not a script".into()))?;
    script.set_src(url);
    script.set_async(true);
    script.set_defer(true);
    script
        .set_attribute(SCRIPT_MARKER, "")
        .map_err(|e| EmbedError::Browser(js_error_message(&e)))?;

    // Outcome markers outlive any caller's handle. Registered before the
    // caller's listeners, so the marker is set by the time those run.
    let marker = script.clone();
    EventListener::once(&script, "load", move |_| {
        let _ = marker.set_attribute(LOADED_MARKER, "");
    })
    .forget();
    let marker = script.clone();
    EventListener::once(&script, "error", move |_| {
        let _ = marker.set_attribute(FAILED_MARKER, "");
    })
    .forget();

    let parent = document
        .head()
        .map(Into::<web_sys::Element>::into)
        .or_else(|| document.body().map(Into::into))
        .ok_or_else(|| EmbedError::Browser("no head or body".into()))?;
    parent
        .append_child(&script)
        .map_err(|e| EmbedError::Browser(js_error_message(&e)))?;
    tracing::debug!(url, "injected embed script");
    Ok(script)
}

fn find_script(
    document: &web_sys::Document,
    url: &str,
) -> Result<Option<HtmlScriptElement>, EmbedError> {
    let selector = format!("script[{SCRIPT_MARKER}]");
    let found = document
        .query_selector_all(&selector)
        .map_err(|e| EmbedError::Browser(js_error_message(&e)))?;
    for i in 0..found.length() {
        let Some(node) = found.item(i) else {
            continue;
        };
        let Ok(script) = node.dyn_into::<HtmlScriptElement>() else {
            continue;
        };
        if script.get_attribute("src").as_deref() == Some(url) {
            return Ok(Some(script));
        }
    }
    Ok(None)
}

/// Number of tags this crate injected for `url`.
pub fn script_count(url: &str) -> u32 {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return 0;
    };
    let Ok(found) = document.query_selector_all(&format!("script[{SCRIPT_MARKER}]")) else {
        return 0;
    };
    (0..found.length())
        .filter_map(|i| found.item(i))
        .filter_map(|node| node.dyn_into::<HtmlScriptElement>().ok())
        .filter(|script| script.get_attribute("src").as_deref() == Some(url))
        .count() as u32
}
