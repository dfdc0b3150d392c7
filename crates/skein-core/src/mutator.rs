//! Mutators: the effects an outcome applies to game state.

use serde::{Deserialize, Serialize};

use crate::error::{StoryError, StoryResult};

/// A data-only effect over game state, applied when an outcome is chosen.
///
/// Variants carry their target key; application lives in the engine so the
/// content model stays serializable and free of captured state. The tag set
/// is closed: an unrecognized tag is rejected by [`Mutator::from_tag`] at
/// load time and can never surface mid-turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mutator {
    /// Reassign the player's current scene.
    MoveTo(String),
    /// Record the target scene in the player's visit history.
    Arrive(String),
    /// Add an item to the inventory.
    AddItem(String),
    /// Remove an item from the inventory (absent item is a no-op).
    RemoveItem(String),
    /// Set a state flag.
    AddState(String),
    /// Clear a state flag.
    RemoveState(String),
    /// End the game: `in_progress` goes false, once, terminally.
    EndGame,
}

impl Mutator {
    /// Map a declared type tag and optional target to a variant.
    ///
    /// Every tag except `game_end` requires a target; `game_end` ignores
    /// one if given.
    pub fn from_tag(tag: &str, target: Option<&str>) -> StoryResult<Self> {
        let require_target = |tag: &str| {
            target
                .map(str::to_string)
                .ok_or_else(|| StoryError::MissingMutatorTarget(tag.to_string()))
        };
        match tag {
            "player_move_to" => Ok(Self::MoveTo(require_target(tag)?)),
            "player_arrive" => Ok(Self::Arrive(require_target(tag)?)),
            "add_item" => Ok(Self::AddItem(require_target(tag)?)),
            "remove_item" => Ok(Self::RemoveItem(require_target(tag)?)),
            "add_state" => Ok(Self::AddState(require_target(tag)?)),
            "remove_state" => Ok(Self::RemoveState(require_target(tag)?)),
            "game_end" => Ok(Self::EndGame),
            other => Err(StoryError::UnknownMutatorType(other.to_string())),
        }
    }

    /// Whether this mutator moves the player to another scene.
    ///
    /// Outcomes containing a scene move clear the presentation surface
    /// before rendering.
    pub fn is_scene_move(&self) -> bool {
        matches!(self, Self::MoveTo(_))
    }

    /// The scene key this mutator references, if any. Used by load-time
    /// validation to reject dangling scene references.
    pub fn scene_target(&self) -> Option<&str> {
        match self {
            Self::MoveTo(scene) | Self::Arrive(scene) => Some(scene),
            _ => None,
        }
    }
}
