//! Error types for the engine.

use thiserror::Error;

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while driving a game.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Content failed validation at build time.
    #[error(transparent)]
    Story(#[from] skein_core::StoryError),

    /// Player state names a scene the story does not declare. Reachable
    /// only through a restored save; content-internal references are
    /// validated at build time.
    #[error("scene not found: \"{0}\"")]
    SceneNotFound(String),

    /// The presentation surface failed.
    #[error("surface error: {0}")]
    Io(#[from] std::io::Error),
}
