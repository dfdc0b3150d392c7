//! Requirement predicates gating outcomes.

use serde::{Deserialize, Serialize};

use crate::error::{StoryError, StoryResult};
use crate::player::Player;

/// A read-only predicate over [`Player`] state.
///
/// Built from a type tag and target key at load time; the tag set is
/// closed, and an unrecognized tag is a fatal content error surfaced by
/// [`Requirement::from_tag`], never at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Requirement {
    /// The player carries the item.
    HasItem(String),
    /// The player does not carry the item.
    NotHasItem(String),
    /// The state flag is set.
    HasState(String),
    /// The state flag is not set.
    NotHasState(String),
    /// The player has arrived at the scene before.
    HasVisited(String),
    /// The player has never arrived at the scene.
    NotHasVisited(String),
}

impl Requirement {
    /// Map a declared type tag and target to a variant.
    pub fn from_tag(tag: &str, target: impl Into<String>) -> StoryResult<Self> {
        let target = target.into();
        match tag {
            "has_item" => Ok(Self::HasItem(target)),
            "not_has_item" => Ok(Self::NotHasItem(target)),
            "has_state" => Ok(Self::HasState(target)),
            "not_has_state" => Ok(Self::NotHasState(target)),
            "has_visited" => Ok(Self::HasVisited(target)),
            "not_has_visited" => Ok(Self::NotHasVisited(target)),
            other => Err(StoryError::UnknownRequirementType(other.to_string())),
        }
    }

    /// Evaluate the predicate against the player. Pure; no side effects.
    pub fn check(&self, player: &Player) -> bool {
        match self {
            Self::HasItem(item) => player.has_item(item),
            Self::NotHasItem(item) => !player.has_item(item),
            Self::HasState(state) => player.has_state(state),
            Self::NotHasState(state) => !player.has_state(state),
            Self::HasVisited(scene) => player.has_visited(scene),
            Self::NotHasVisited(scene) => !player.has_visited(scene),
        }
    }
}
