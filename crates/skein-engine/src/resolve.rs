//! Action matching and outcome selection.
//!
//! Both functions are deterministic, side-effect-free scans over the
//! content model; neither mutates player state. Selection is separated
//! from effect application so resolution is unit-testable against a
//! frozen player.

use skein_core::{Action, ActionKey, Outcome, Player, Scene};

/// Find the action a normalized key refers to within a scene.
///
/// Exact lookup first; if nothing matches, fall back to the scene's
/// `{_no_match}` default action if one is declared. `None` means the turn
/// renders the generic refusal without consulting any outcome.
pub fn match_action<'a>(scene: &'a Scene, key: &ActionKey) -> Option<&'a Action> {
    scene.action(key).or_else(|| scene.default_action())
}

/// Select the applicable outcome for an action.
///
/// Scans outcomes in authored order and returns the first whose
/// requirements all evaluate true against the player; an outcome with no
/// requirements always matches. `None` if no outcome qualifies.
pub fn resolve_outcome<'a>(action: &'a Action, player: &Player) -> Option<&'a Outcome> {
    action
        .outcomes
        .iter()
        .find(|outcome| outcome.requirements_met(player))
}
