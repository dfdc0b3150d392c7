//! Outcomes: one candidate resolution of an action.

use serde::{Deserialize, Serialize};

use crate::mutator::Mutator;
use crate::player::Player;
use crate::requirement::Requirement;

/// One candidate resolution of an action: requirements that gate it,
/// mutators it applies, and the paragraphs it renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Requirements combined with implicit AND. Empty means always matches.
    pub requirements: Vec<Requirement>,
    /// Mutators applied in authored order, not atomically.
    pub mutators: Vec<Mutator>,
    /// Narrative paragraphs rendered when the outcome is chosen.
    pub text: Vec<String>,
    /// Whether choosing this outcome clears the presentation surface.
    /// Derived at construction: true iff any mutator is a scene move.
    pub clear: bool,
}

impl Outcome {
    /// Create an outcome, deriving the `clear` flag from its mutators.
    pub fn new(requirements: Vec<Requirement>, mutators: Vec<Mutator>, text: Vec<String>) -> Self {
        let clear = mutators.iter().any(Mutator::is_scene_move);
        Self {
            requirements,
            mutators,
            text,
            clear,
        }
    }

    /// Whether all requirements hold against the player. An outcome with no
    /// requirements always matches.
    pub fn requirements_met(&self, player: &Player) -> bool {
        self.requirements.iter().all(|req| req.check(player))
    }
}
