//! Hero video state: show the poster image until the video can play, and
//! fall back to it for good if playback fails.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeroMediaState {
    pub video_loaded: bool,
    pub has_error: bool,
}

impl HeroMediaState {
    /// The media element reported `canplay`.
    pub fn can_play(&mut self) {
        self.video_loaded = true;
    }

    /// `play()` resolved.
    pub fn playing(&mut self) {
        self.has_error = false;
    }

    /// `play()` rejected, e.g. blocked by an autoplay policy.
    pub fn play_failed(&mut self) {
        self.has_error = true;
    }

    /// The media element fired `error`.
    pub fn media_error(&mut self) {
        self.has_error = true;
        self.video_loaded = false;
    }

    pub fn show_video(&self) -> bool {
        !self.has_error
    }

    pub fn show_fallback(&self) -> bool {
        !(self.video_loaded && !self.has_error)
    }
}
