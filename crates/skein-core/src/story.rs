//! The story: the fully loaded, validated content model.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::doc::StoryDoc;
use crate::error::{StoryError, StoryResult};
use crate::lexicon::Lexicon;
use crate::mutator::Mutator;
use crate::outcome::Outcome;
use crate::requirement::Requirement;
use crate::scene::Scene;

/// Story metadata: the title and the entry point of play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryMeta {
    /// Title shown on the welcome screen.
    pub title: String,
    /// Key of the scene the player starts in.
    pub first_scene: String,
    /// Free-text action run as the first turn.
    pub first_action: String,
}

/// The immutable content model: metadata plus the scene graph.
///
/// Built once at startup from document records; every content error —
/// duplicate keys, unknown type tags, dangling scene references — is
/// rejected here, before any turn executes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Story metadata.
    pub meta: StoryMeta,
    scenes: HashMap<String, Scene>,
}

impl Story {
    /// Build and validate a story from its document.
    ///
    /// The lexicon computes every action's key from the document's free
    /// text, so content can say `"go north"` while matching stays
    /// set-based.
    pub fn build(doc: StoryDoc, lexicon: &Lexicon) -> StoryResult<Self> {
        let mut scenes = HashMap::with_capacity(doc.scenes.len());
        for scene_doc in doc.scenes {
            let mut actions = Vec::with_capacity(scene_doc.actions.len());
            for action_doc in scene_doc.actions {
                let key = lexicon.normalize(&action_doc.key);
                let mut outcomes = Vec::with_capacity(action_doc.outcomes.len());
                for outcome_doc in action_doc.outcomes {
                    let mut requirements = Vec::new();
                    for (tag, targets) in outcome_doc.reqs {
                        for target in targets {
                            requirements.push(Requirement::from_tag(&tag, target)?);
                        }
                    }
                    let mut mutators = Vec::new();
                    for (tag, targets) in outcome_doc.mutators {
                        if targets.is_empty() {
                            mutators.push(Mutator::from_tag(&tag, None)?);
                        } else {
                            for target in targets {
                                mutators.push(Mutator::from_tag(&tag, Some(target.as_str()))?);
                            }
                        }
                    }
                    outcomes.push(Outcome::new(requirements, mutators, outcome_doc.text));
                }
                actions.push(Action::new(key, outcomes));
            }
            let scene = Scene::new(scene_doc.key, actions)?;
            if scenes.contains_key(&scene.key) {
                return Err(StoryError::DuplicateScene(scene.key));
            }
            scenes.insert(scene.key.clone(), scene);
        }

        let story = Self {
            meta: StoryMeta {
                title: doc.title,
                first_scene: doc.first_scene,
                first_action: doc.first_action,
            },
            scenes,
        };
        story.check_scene_references()?;
        Ok(story)
    }

    /// Look up a scene by key.
    pub fn scene(&self, key: &str) -> Option<&Scene> {
        self.scenes.get(key)
    }

    /// Iterate over all scenes (no meaningful order).
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.values()
    }

    /// Number of scenes in the story.
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Total number of actions across all scenes.
    pub fn action_count(&self) -> usize {
        self.scenes.values().map(Scene::action_count).sum()
    }

    /// Total number of outcomes across all actions.
    pub fn outcome_count(&self) -> usize {
        self.scenes
            .values()
            .flat_map(Scene::actions)
            .map(|action| action.outcomes.len())
            .sum()
    }

    /// Reject dangling scene references: `first_scene` and every
    /// scene-targeting mutator must name a declared scene.
    fn check_scene_references(&self) -> StoryResult<()> {
        if !self.scenes.contains_key(&self.meta.first_scene) {
            return Err(StoryError::UnknownScene {
                scene: self.meta.first_scene.clone(),
                referenced_from: "first_scene".to_string(),
            });
        }
        for scene in self.scenes.values() {
            for action in scene.actions() {
                for outcome in &action.outcomes {
                    for mutator in &outcome.mutators {
                        if let Some(target) = mutator.scene_target()
                            && !self.scenes.contains_key(target)
                        {
                            return Err(StoryError::UnknownScene {
                                scene: target.to_string(),
                                referenced_from: format!("scene \"{}\"", scene.key),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
