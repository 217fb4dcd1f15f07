//! Theme persistence.

use chocobites_core::Theme;
use chocobites_core::theme::THEME_STORAGE_KEY;
use gloo_storage::{LocalStorage, Storage};

/// CSS class toggled on `<html>` for the dark palette.
pub const DARK_CLASS: &str = "dark";

/// Stored theme, or the default if nothing valid is stored.
pub fn load_theme() -> Theme {
    LocalStorage::get::<String>(THEME_STORAGE_KEY)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}

pub fn save_theme(theme: Theme) {
    if let Err(e) = LocalStorage::set(THEME_STORAGE_KEY, theme.as_str()) {
        tracing::warn!("failed to persist theme: {e}");
    }
}

/// Reflect `theme` on the document root.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(e) = root
        .class_list()
        .toggle_with_force(DARK_CLASS, theme == Theme::Dark)
    {
        tracing::warn!("failed to apply theme: {e:?}");
    }
}
