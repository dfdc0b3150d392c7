//! Player state: location, inventory, flags, and visit history.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The player's mutable state.
///
/// Mutated exclusively by mutator application during a turn; read by
/// requirement evaluation and by the turn controller. All collection
/// operations have set semantics: adding a present entry and removing an
/// absent one are silent no-ops, never errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Key of the scene the player is currently in.
    pub current_scene: String,
    /// Item keys the player is carrying.
    pub inventory: BTreeSet<String>,
    /// Arbitrary state flags set by story content.
    pub states: BTreeSet<String>,
    /// Keys of scenes the player has arrived at.
    pub visited_scenes: BTreeSet<String>,
}

impl Player {
    /// Create a fresh player standing in `start_scene` with nothing else.
    pub fn new(start_scene: impl Into<String>) -> Self {
        Self {
            current_scene: start_scene.into(),
            inventory: BTreeSet::new(),
            states: BTreeSet::new(),
            visited_scenes: BTreeSet::new(),
        }
    }

    /// Whether the player carries an item.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.contains(item)
    }

    /// Add an item to the inventory.
    pub fn add_item(&mut self, item: &str) {
        self.inventory.insert(item.to_string());
    }

    /// Remove an item from the inventory.
    pub fn remove_item(&mut self, item: &str) {
        self.inventory.remove(item);
    }

    /// Whether a state flag is set.
    pub fn has_state(&self, state: &str) -> bool {
        self.states.contains(state)
    }

    /// Set a state flag.
    pub fn add_state(&mut self, state: &str) {
        self.states.insert(state.to_string());
    }

    /// Clear a state flag.
    pub fn remove_state(&mut self, state: &str) {
        self.states.remove(state);
    }

    /// Whether the player has arrived at a scene before.
    pub fn has_visited(&self, scene: &str) -> bool {
        self.visited_scenes.contains(scene)
    }

    /// Record an arrival at a scene.
    pub fn mark_visited(&mut self, scene: &str) {
        self.visited_scenes.insert(scene.to_string());
    }
}
