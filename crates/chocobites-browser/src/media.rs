//! Muted autoplay for background video.

use chocobites_core::EmbedError;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;

use crate::js_error_message;

/// `HTMLMediaElement.HAVE_FUTURE_DATA`.
const HAVE_FUTURE_DATA: u16 = 3;

pub fn video_by_id(id: &str) -> Option<HtmlVideoElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into()
        .ok()
}

/// Whether enough data is buffered that `canplay` has already fired.
pub fn can_play(video: &HtmlVideoElement) -> bool {
    video.ready_state() >= HAVE_FUTURE_DATA
}

/// Mute and start playback. Browsers reject unmuted autoplay, and some reject
/// muted autoplay too (low-power mode), which surfaces here as an error.
pub async fn play_muted(video: &HtmlVideoElement) -> Result<(), EmbedError> {
    video.set_default_muted(true);
    video.set_muted(true);
    let promise = video
        .play()
        .map_err(|e| EmbedError::Browser(js_error_message(&e)))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| EmbedError::Browser(js_error_message(&e)))?;
    Ok(())
}
