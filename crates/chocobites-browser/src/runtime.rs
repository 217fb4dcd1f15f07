//! The Instagram embed runtime installed by `embed.js`.
//!
//! The script defines `window.instgrm.Embeds.process()`, which scans the
//! document for `blockquote.instagram-media` elements and replaces them with
//! iframes. Nothing here assumes the script has run; every lookup is
//! re-done on each call since the global appears asynchronously.

use chocobites_core::{EmbedError, EmbedRuntime};
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::js_error_message;

const RUNTIME_GLOBAL: &str = "instgrm";

#[derive(Debug, Clone, Copy, Default)]
pub struct InstagramRuntime;

impl InstagramRuntime {
    pub fn new() -> Self {
        Self
    }

    /// `window.instgrm.Embeds`, if the script has installed it.
    fn embeds() -> Option<JsValue> {
        let window = web_sys::window()?;
        let global = Reflect::get(&window, &JsValue::from_str(RUNTIME_GLOBAL)).ok()?;
        if global.is_undefined() || global.is_null() {
            return None;
        }
        let embeds = Reflect::get(&global, &JsValue::from_str("Embeds")).ok()?;
        (!embeds.is_undefined() && !embeds.is_null()).then_some(embeds)
    }
}

impl EmbedRuntime for InstagramRuntime {
    fn is_ready(&self) -> bool {
        Self::embeds().is_some()
    }

    fn process(&self) -> Result<(), EmbedError> {
        let embeds = Self::embeds().ok_or(EmbedError::RuntimeUnavailable)?;
        let process = Reflect::get(&embeds, &JsValue::from_str("process"))
            .map_err(|e| EmbedError::Processing(js_error_message(&e)))?;
        let process: Function = process
            .dyn_into()
            .map_err(|_| EmbedError::Processing("Embeds.process is not a function".into()))?;
        process
            .call0(&embeds)
            .map_err(|e| EmbedError::Processing(js_error_message(&e)))?;
        Ok(())
    }
}
