use std::time::Duration;

use smol_str::SmolStr;

pub const DEFAULT_EMBED_SCRIPT_URL: &str = "https://www.instagram.com/embed.js";

/// Tunables for the social feed.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedConfig {
    /// Script that installs the embed runtime global.
    pub script_url: SmolStr,
    /// How many times a not-ready runtime is retried before a post gives up.
    pub max_retries: u32,
    /// Delay between those retries.
    pub retry_delay: Duration,
    /// How long a post must stay visible before it asks to be loaded.
    pub visibility_debounce: Duration,
    pub visibility_thresholds: [f64; 5],
    /// CSS margin applied around the viewport, so posts report visible early.
    pub root_margin: SmolStr,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            script_url: SmolStr::new_static(DEFAULT_EMBED_SCRIPT_URL),
            max_retries: 3,
            retry_delay: Duration::from_millis(1000),
            visibility_debounce: Duration::from_millis(100),
            visibility_thresholds: [0.0, 0.25, 0.5, 0.75, 1.0],
            root_margin: SmolStr::new_static("50px"),
        }
    }
}

impl EmbedConfig {
    pub fn with_script_url(mut self, url: impl Into<SmolStr>) -> Self {
        let url = url.into();
        if !url.is_empty() {
            self.script_url = url;
        }
        self
    }
}
