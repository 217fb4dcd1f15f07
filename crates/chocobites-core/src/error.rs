//! Error types for the embed lifecycle.

use miette::Diagnostic;
use smol_str::SmolStr;

/// Failures surfaced by the embed runtime, script loader and feed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum EmbedError {
    /// The embed script tag fired its error event or could not be inserted.
    #[error("failed to load embed script {url}: {reason}")]
    #[diagnostic(
        code(chocobites::embed::script),
        help("check the network tab; content blockers commonly drop embed scripts")
    )]
    ScriptLoad { url: SmolStr, reason: SmolStr },

    /// The runtime threw while processing embeds.
    #[error("embed processing failed: {0}")]
    #[diagnostic(code(chocobites::embed::processing))]
    Processing(SmolStr),

    /// The runtime global is not present yet.
    #[error("embed runtime is not available")]
    #[diagnostic(code(chocobites::embed::unavailable))]
    RuntimeUnavailable,

    /// A load was requested for a post the feed does not own.
    #[error("unknown post: {0}")]
    #[diagnostic(code(chocobites::embed::unknown_post))]
    UnknownPost(SmolStr),

    /// A required DOM node or browser API was missing.
    #[error("browser api unavailable: {0}")]
    #[diagnostic(code(chocobites::browser))]
    Browser(SmolStr),
}

impl EmbedError {
    pub fn script_load(url: impl Into<SmolStr>, reason: impl Into<SmolStr>) -> Self {
        EmbedError::ScriptLoad {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
