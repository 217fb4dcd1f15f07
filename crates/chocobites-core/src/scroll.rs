//! Scroll-position driven UI flags.

/// Header turns opaque past this offset.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;
/// Menu category bar gains its floating style past this offset.
pub const STICKY_FILTER_THRESHOLD: f64 = 300.0;
/// Back-to-top button appears past this offset.
pub const BACK_TO_TOP_THRESHOLD: f64 = 400.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub header_scrolled: bool,
    pub filter_sticky: bool,
    pub show_back_to_top: bool,
}

impl ScrollState {
    /// All thresholds are strict: exactly at the threshold is still "not past".
    pub fn from_offset(scroll_y: f64) -> Self {
        Self {
            header_scrolled: scroll_y > HEADER_SCROLL_THRESHOLD,
            filter_sticky: scroll_y > STICKY_FILTER_THRESHOLD,
            show_back_to_top: scroll_y > BACK_TO_TOP_THRESHOLD,
        }
    }
}
