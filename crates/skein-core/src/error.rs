use crate::action::ActionKey;

/// Alias for `Result<T, StoryError>`.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors raised while building a story from its documents.
///
/// Every variant is a content-authoring error: all of them are detected
/// eagerly during [`Story::build`](crate::story::Story::build), before any
/// turn executes. Nothing here is recoverable at runtime.
#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    /// Two actions in the same scene normalize to the same key.
    #[error("duplicate action key {key} in scene \"{scene}\"")]
    DuplicateActionKey {
        /// The scene containing the collision.
        scene: String,
        /// The colliding normalized key.
        key: ActionKey,
    },

    /// Two scenes in the document share a key.
    #[error("duplicate scene key: \"{0}\"")]
    DuplicateScene(String),

    /// A requirement type tag outside the closed set.
    #[error("unknown requirement type: \"{0}\"")]
    UnknownRequirementType(String),

    /// A mutator type tag outside the closed set.
    #[error("unknown mutator type: \"{0}\"")]
    UnknownMutatorType(String),

    /// A mutator tag that needs a target was declared with an empty target list.
    #[error("mutator \"{0}\" requires a target")]
    MissingMutatorTarget(String),

    /// A scene key referenced by a mutator target or story metadata names no
    /// declared scene.
    #[error("unknown scene \"{scene}\" referenced from {referenced_from}")]
    UnknownScene {
        /// The missing scene key.
        scene: String,
        /// Where the reference appeared (metadata field or scene/mutator).
        referenced_from: String,
    },
}
