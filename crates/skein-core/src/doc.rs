//! Document records: the ingestion shape stories and lexicons arrive in.
//!
//! These mirror the authored content format one-to-one. The core never
//! opens files itself; a front end deserializes these records (JSON via
//! serde) and hands them to [`Story::build`](crate::story::Story::build).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

/// Top-level story document: title, entry point, and scene records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryDoc {
    /// Title shown on the welcome screen.
    pub title: String,
    /// Key of the scene the player starts in.
    pub first_scene: String,
    /// Free-text action fed through the normal pipeline as the first turn,
    /// typically `"_arrive"`.
    pub first_action: String,
    /// Scene records, in authored order.
    #[serde(default)]
    pub scenes: Vec<SceneDoc>,
}

/// One scene record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDoc {
    /// The scene's unique key.
    pub key: String,
    /// Action records, in authored order.
    #[serde(default)]
    pub actions: Vec<ActionDoc>,
}

/// One action record. The key is free text (`"go north"`); it is
/// normalized through the lexicon at build time so matching stays
/// set-based.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionDoc {
    /// Free-text action key.
    pub key: String,
    /// Outcome records, in authored order (first match wins).
    #[serde(default)]
    pub outcomes: Vec<OutcomeDoc>,
}

/// One outcome record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutcomeDoc {
    /// Narrative paragraphs.
    #[serde(default)]
    pub text: Vec<String>,
    /// Requirement-type tag to target keys.
    #[serde(default)]
    pub reqs: BTreeMap<String, Vec<String>>,
    /// Mutator-type tag to target keys. `game_end` takes an empty list.
    #[serde(default)]
    pub mutators: BTreeMap<String, Vec<String>>,
}

/// Lexicon document: stop words and synonym mappings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexiconDoc {
    /// Words dropped during normalization.
    #[serde(default)]
    pub stop_words: Vec<String>,
    /// Synonym to canonical-form mappings.
    #[serde(default)]
    pub synonyms: BTreeMap<String, String>,
}

impl From<LexiconDoc> for Lexicon {
    fn from(doc: LexiconDoc) -> Self {
        Lexicon::new(doc.stop_words, doc.synonyms.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionKey;

    #[test]
    fn story_doc_from_json() {
        let doc: StoryDoc = serde_json::from_str(
            r#"{
                "title": "The Driftwood Shore",
                "first_scene": "beach",
                "first_action": "_arrive",
                "scenes": [
                    {
                        "key": "beach",
                        "actions": [
                            {
                                "key": "look",
                                "outcomes": [
                                    { "text": ["Sand, as far as you can see."] }
                                ]
                            }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.title, "The Driftwood Shore");
        assert_eq!(doc.scenes.len(), 1);
        assert_eq!(doc.scenes[0].actions[0].key, "look");
        assert!(doc.scenes[0].actions[0].outcomes[0].reqs.is_empty());
    }

    #[test]
    fn outcome_doc_fields_default() {
        let doc: OutcomeDoc = serde_json::from_str("{}").unwrap();
        assert!(doc.text.is_empty());
        assert!(doc.reqs.is_empty());
        assert!(doc.mutators.is_empty());
    }

    #[test]
    fn lexicon_doc_converts() {
        let doc: LexiconDoc = serde_json::from_str(
            r#"{ "stop_words": ["the"], "synonyms": { "take": "get" } }"#,
        )
        .unwrap();
        let lexicon = Lexicon::from(doc);
        assert_eq!(
            lexicon.normalize("take the knife"),
            ActionKey::from_tokens(["get", "knife"])
        );
    }
}
