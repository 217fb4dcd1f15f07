//! Browser DOM layer for the c_hoco_bites site.
//!
//! Implements the core crate's seams over real browser APIs. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `runtime`: the third-party embed runtime (`window.instgrm`)
//! - `script`: injection of the embed script, once per page or per retry
//! - `timer`: `setTimeout`-backed [`Scheduler`]
//! - `observer`: `IntersectionObserver` wrapper reporting visibility
//! - `scroll`: window scroll tracking and smooth scroll-to-top
//! - `storage`: theme persistence and application
//! - `media`: muted autoplay for the hero video
//! - `window`: outbound links
//!
//! # Re-exports
//!
//! This crate re-exports `chocobites-core` for convenience, so consumers
//! only need to depend on `chocobites-browser`.

pub use chocobites_core;
pub use chocobites_core::*;

pub mod media;
pub mod observer;
pub mod runtime;
pub mod script;
pub mod scroll;
pub mod storage;
pub mod timer;
pub mod window;

pub use observer::VisibilityObserver;
pub use runtime::InstagramRuntime;
pub use script::{ScriptAcquisition, ScriptHandle, acquire_script, reacquire_script, script_count};
pub use scroll::{ScrollWatcher, scroll_to_top, scroll_y};
pub use timer::{TimeoutHandle, TimeoutScheduler};
pub use window::{element_by_id, open_in_new_tab};

use smol_str::{SmolStr, ToSmolStr};
use wasm_bindgen::JsValue;

/// Best-effort readable message from a thrown JS value.
pub(crate) fn js_error_message(value: &JsValue) -> SmolStr {
    if let Some(s) = value.as_string() {
        return s.into();
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .map(SmolStr::from)
        .unwrap_or_else(|| format!("{value:?}").to_smolstr())
}
