//! Content model for Skein: scenes, actions, outcomes, and validation.
//!
//! This crate defines the data model a story document compiles into. It is
//! independent of any front end — you can construct a [`Story`]
//! programmatically or deserialize the document records from JSON. All
//! content errors (duplicate keys, unknown type tags, dangling scene
//! references) are rejected eagerly at [`Story::build`] time, so a broken
//! story never reaches play.

/// Action keys and actions.
pub mod action;
/// Document records stories and lexicons are loaded from.
pub mod doc;
/// Error types used throughout the crate.
pub mod error;
/// Input normalization into canonical action keys.
pub mod lexicon;
/// Mutators: effects over game state.
pub mod mutator;
/// Outcomes: candidate resolutions of an action.
pub mod outcome;
/// Player state: location, inventory, flags, visit history.
pub mod player;
/// Requirement predicates gating outcomes.
pub mod requirement;
/// Scenes: key-indexed action tables.
pub mod scene;
/// The fully loaded, validated content model.
pub mod story;

/// Re-export action types.
pub use action::{ARRIVE_TOKEN, Action, ActionKey, NO_MATCH_TOKEN};
/// Re-export document records.
pub use doc::{ActionDoc, LexiconDoc, OutcomeDoc, SceneDoc, StoryDoc};
/// Re-export error types.
pub use error::{StoryError, StoryResult};
/// Re-export the lexicon.
pub use lexicon::Lexicon;
/// Re-export the mutator enum.
pub use mutator::Mutator;
/// Re-export the outcome type.
pub use outcome::Outcome;
/// Re-export the player state.
pub use player::Player;
/// Re-export the requirement enum.
pub use requirement::Requirement;
/// Re-export the scene type.
pub use scene::Scene;
/// Re-export the story model.
pub use story::{Story, StoryMeta};
