//! Scenes: key-indexed action tables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionKey};
use crate::error::{StoryError, StoryResult};

/// A location in the story, owning the actions available there.
///
/// Immutable after construction; owned exclusively by the story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// The scene's unique key.
    pub key: String,
    actions: HashMap<ActionKey, Action>,
}

impl Scene {
    /// Build a scene from actions in authored order.
    ///
    /// Fails with [`StoryError::DuplicateActionKey`] if two actions share a
    /// normalized key; the collision is a content error, detected here so a
    /// broken scene never reaches play.
    pub fn new(key: impl Into<String>, actions: Vec<Action>) -> StoryResult<Self> {
        let key = key.into();
        let mut table = HashMap::with_capacity(actions.len());
        for action in actions {
            if table.contains_key(&action.key) {
                return Err(StoryError::DuplicateActionKey {
                    scene: key,
                    key: action.key,
                });
            }
            table.insert(action.key.clone(), action);
        }
        Ok(Self {
            key,
            actions: table,
        })
    }

    /// Exact lookup of an action by normalized key.
    pub fn action(&self, key: &ActionKey) -> Option<&Action> {
        self.actions.get(key)
    }

    /// The scene's `{_no_match}` default action, if declared.
    pub fn default_action(&self) -> Option<&Action> {
        self.actions.get(&ActionKey::no_match())
    }

    /// Iterate over the scene's actions (no meaningful order).
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.actions.values()
    }

    /// Number of actions declared in the scene.
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome;

    fn action(tokens: &[&str]) -> Action {
        Action::new(
            ActionKey::from_tokens(tokens.iter().copied()),
            vec![Outcome::new(vec![], vec![], vec!["ok".to_string()])],
        )
    }

    #[test]
    fn lookup_by_key() {
        let scene = Scene::new("beach", vec![action(&["look"]), action(&["go", "north"])]).unwrap();
        assert_eq!(scene.action_count(), 2);
        assert!(scene.action(&ActionKey::from_tokens(["look"])).is_some());
        assert!(
            scene
                .action(&ActionKey::from_tokens(["north", "go"]))
                .is_some()
        );
        assert!(scene.action(&ActionKey::from_tokens(["jump"])).is_none());
    }

    #[test]
    fn duplicate_keys_rejected() {
        let err = Scene::new("beach", vec![action(&["look"]), action(&["look"])]).unwrap_err();
        assert!(matches!(
            err,
            StoryError::DuplicateActionKey { scene, .. } if scene == "beach"
        ));
    }

    #[test]
    fn default_action_lookup() {
        let scene = Scene::new("beach", vec![action(&["look"])]).unwrap();
        assert!(scene.default_action().is_none());

        let scene = Scene::new("beach", vec![action(&["look"]), action(&["_no_match"])]).unwrap();
        assert!(scene.default_action().is_some());
    }
}
