use std::rc::Rc;

use crate::EmbedError;

/// Capability handle for the third-party embed runtime.
///
/// The browser implementation binds the global installed by the embed
/// script; tests and non-browser targets use a double or [`NoRuntime`].
pub trait EmbedRuntime {
    /// Whether the runtime global has been installed.
    fn is_ready(&self) -> bool;

    /// Ask the runtime to materialise every unprocessed embed on the page.
    fn process(&self) -> Result<(), EmbedError>;
}

impl<R: EmbedRuntime + ?Sized> EmbedRuntime for Rc<R> {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn process(&self) -> Result<(), EmbedError> {
        (**self).process()
    }
}

/// A runtime that never becomes ready.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRuntime;

impl EmbedRuntime for NoRuntime {
    fn is_ready(&self) -> bool {
        false
    }

    fn process(&self) -> Result<(), EmbedError> {
        Err(EmbedError::RuntimeUnavailable)
    }
}
