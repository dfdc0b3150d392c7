//! Input normalization: raw command text to canonical action keys.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::action::ActionKey;

/// Stop words and synonym mappings used to normalize player input.
///
/// Normalization is a pure function of the lexicon and the input text:
/// tokens are lowercased, stop words dropped, and every surviving token is
/// mapped through the synonym table to its canonical form. Two inputs that
/// differ only in stop words, synonym spelling, word order, or spacing
/// normalize to the same [`ActionKey`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    stop_words: HashSet<String>,
    synonyms: HashMap<String, String>,
}

impl Lexicon {
    /// Build a lexicon. Stop words and synonym keys are lowercased so that
    /// lookups agree with the lowercasing done during normalization.
    pub fn new<I, S>(stop_words: I, synonyms: HashMap<String, String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stop_words: stop_words
                .into_iter()
                .map(|w| w.into().to_lowercase())
                .collect(),
            synonyms: synonyms
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v.to_lowercase()))
                .collect(),
        }
    }

    /// Normalize raw text into an [`ActionKey`].
    ///
    /// An input consisting entirely of stop words yields the empty key,
    /// which matches no authored action and falls through to default
    /// handling.
    pub fn normalize(&self, raw: &str) -> ActionKey {
        ActionKey::from_tokens(
            raw.split_whitespace()
                .map(str::to_lowercase)
                .filter(|token| !self.stop_words.contains(token))
                .map(|token| self.synonyms.get(&token).cloned().unwrap_or(token)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lexicon() -> Lexicon {
        Lexicon::new(
            ["a", "an", "the", "to", "at"],
            HashMap::from([
                ("take".to_string(), "get".to_string()),
                ("grab".to_string(), "get".to_string()),
            ]),
        )
    }

    #[test]
    fn splits_on_whitespace() {
        let lex = lexicon();
        assert_eq!(lex.normalize("go north"), lex.normalize("go  north"));
        assert_eq!(lex.normalize("go north"), lex.normalize("  go\tnorth "));
    }

    #[test]
    fn order_insensitive() {
        let lex = lexicon();
        assert_eq!(lex.normalize("go north"), lex.normalize("north go"));
    }

    #[test]
    fn stop_words_dropped() {
        let lex = lexicon();
        assert_eq!(lex.normalize("the north go"), lex.normalize("go north"));
        assert_eq!(
            lex.normalize("go to the north"),
            ActionKey::from_tokens(["go", "north"])
        );
    }

    #[test]
    fn synonyms_canonicalized() {
        let lex = lexicon();
        assert_eq!(lex.normalize("take knife"), lex.normalize("get knife"));
        assert_eq!(lex.normalize("grab the knife"), lex.normalize("get knife"));
    }

    #[test]
    fn lowercases_input() {
        let lex = lexicon();
        assert_eq!(lex.normalize("GO North"), lex.normalize("go north"));
    }

    #[test]
    fn all_stop_words_yield_empty_key() {
        let lex = lexicon();
        assert!(lex.normalize("the a an").is_empty());
        assert!(lex.normalize("").is_empty());
    }

    #[test]
    fn sentinel_tokens_pass_through() {
        let lex = lexicon();
        assert_eq!(lex.normalize("_arrive"), ActionKey::arrive());
    }

    proptest! {
        #[test]
        fn normalization_ignores_token_order(
            tokens in proptest::collection::vec("[a-z]{1,8}", 1..6)
        ) {
            let lex = lexicon();
            let forward = lex.normalize(&tokens.join(" "));
            let mut reversed = tokens.clone();
            reversed.reverse();
            prop_assert_eq!(forward, lex.normalize(&reversed.join(" ")));
        }

        #[test]
        fn normalization_ignores_repeated_whitespace(
            tokens in proptest::collection::vec("[a-z]{1,8}", 1..6)
        ) {
            let lex = lexicon();
            prop_assert_eq!(
                lex.normalize(&tokens.join(" ")),
                lex.normalize(&tokens.join("   "))
            );
        }
    }
}
