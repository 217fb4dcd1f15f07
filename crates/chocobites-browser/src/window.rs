//! Window-level navigation helpers.

use chocobites_core::EmbedError;

use crate::js_error_message;

/// Open `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) -> Result<(), EmbedError> {
    let window = web_sys::window().ok_or_else(|| EmbedError::Browser("no window".into()))?;
    window
        .open_with_url_and_target(url, "_blank")
        .map_err(|e| EmbedError::Browser(js_error_message(&e)))?;
    Ok(())
}

pub fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}
