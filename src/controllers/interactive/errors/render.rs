use thiserror::Error;

/// A regeneration that produced no frame. The message is ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("generation {generation} failed: {message}")]
pub struct RenderError {
    pub generation: u64,
    pub message: String,
}
