//! Action keys and actions.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// Token reserved for a scene's default action, matched when nothing else is.
pub const NO_MATCH_TOKEN: &str = "_no_match";

/// Token reserved for the action invoked automatically on scene entry.
pub const ARRIVE_TOKEN: &str = "_arrive";

/// A normalized, unordered set of canonical tokens identifying a player
/// intent within a scene.
///
/// Keys are used only for equality and lookup; token order never carries
/// meaning. `"go north"` and `"north go"` produce the same key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActionKey(BTreeSet<String>);

impl ActionKey {
    /// Build a key from canonical tokens. Duplicates collapse.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    /// The sentinel key for a scene's default action.
    pub fn no_match() -> Self {
        Self::from_tokens([NO_MATCH_TOKEN])
    }

    /// The sentinel key for the automatic scene-entry action.
    pub fn arrive() -> Self {
        Self::from_tokens([ARRIVE_TOKEN])
    }

    /// Whether the key carries no tokens at all (every input token was a
    /// stop word). Legal, and guaranteed to match no authored action.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of canonical tokens in the key.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the key contains a canonical token.
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }
}

impl fmt::Display for ActionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        write!(f, "}}")
    }
}

/// One thing the player can attempt in a scene: a key to match against and
/// an ordered list of candidate outcomes.
///
/// Outcome order is semantically significant; resolution takes the first
/// outcome whose requirements hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// The normalized key this action is matched by.
    pub key: ActionKey,
    /// Candidate outcomes, in authored order.
    pub outcomes: Vec<Outcome>,
}

impl Action {
    /// Create an action.
    pub fn new(key: ActionKey, outcomes: Vec<Outcome>) -> Self {
        Self { key, outcomes }
    }
}
