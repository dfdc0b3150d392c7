//! The turn controller: one full turn, and the loop that drives them.

use std::collections::VecDeque;

use skein_core::{ActionKey, Lexicon, Mutator, Player, Story};

use crate::error::{EngineError, EngineResult};
use crate::resolve::{match_action, resolve_outcome};
use crate::surface::{Alignment, Surface};

/// Rendered when no action matches or no outcome's requirements hold.
pub const REFUSAL: &str = "You cannot do that now.";

const HOW_TO_PLAY: &str =
    "To play the game, enter simple commands such as 'look', 'go north' or 'give apple to man'.";

/// A running game: the immutable story, the lexicon, the player, and the
/// one-shot `in_progress` flag.
///
/// Strictly single-threaded and sequential: one turn executes to
/// completion before the next is considered, and the only blocking wait
/// is the surface's `read_line`.
#[derive(Debug)]
pub struct Game {
    story: Story,
    lexicon: Lexicon,
    player: Player,
    in_progress: bool,
}

impl Game {
    /// Start a new game with a fresh player standing in the story's first
    /// scene.
    pub fn new(story: Story, lexicon: Lexicon) -> Self {
        let player = Player::new(story.meta.first_scene.clone());
        Self {
            story,
            lexicon,
            player,
            in_progress: true,
        }
    }

    /// Resume a game with an existing player, e.g. one restored from a
    /// save file.
    ///
    /// Fails with [`EngineError::SceneNotFound`] if the player's current
    /// scene is not declared by this story.
    pub fn with_player(story: Story, lexicon: Lexicon, player: Player) -> EngineResult<Self> {
        if story.scene(&player.current_scene).is_none() {
            return Err(EngineError::SceneNotFound(player.current_scene));
        }
        Ok(Self {
            story,
            lexicon,
            player,
            in_progress: true,
        })
    }

    /// The story being played.
    pub fn story(&self) -> &Story {
        &self.story
    }

    /// The player's current state.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Whether the game is still running. Transitions true to false
    /// exactly once, via the `game_end` mutator; false is terminal.
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    /// Drive a whole session: title sequence, first turn, then the input
    /// loop until the game ends.
    pub fn run(&mut self, surface: &mut dyn Surface) -> EngineResult<()> {
        surface.clear()?;
        surface.render(
            &["Welcome to".to_string(), self.story.meta.title.clone()],
            Alignment::Centre,
        )?;
        surface.render(&[HOW_TO_PLAY.to_string()], Alignment::Left)?;
        surface.pause()?;
        surface.clear()?;

        self.start(surface)?;
        while self.in_progress {
            let line = surface.read_line()?;
            self.turn(&line, surface)?;
        }
        Ok(())
    }

    /// Run the special-cased initial turn: the story's `first_action` is
    /// fed through the normal pipeline in place of player input, so a new
    /// game always begins with the start scene's arrival outcome.
    pub fn start(&mut self, surface: &mut dyn Surface) -> EngineResult<()> {
        let first_action = self.story.meta.first_action.clone();
        self.turn(&first_action, surface)
    }

    /// Execute one full turn from raw player input.
    ///
    /// Normalize, match, resolve, render, apply — and, when an outcome
    /// moves the player, chase it with exactly one `{_arrive}` turn
    /// against the new scene before returning to the caller.
    pub fn turn(&mut self, input: &str, surface: &mut dyn Surface) -> EngineResult<()> {
        let key = self.lexicon.normalize(input);

        // Scene-change re-entry runs through a pending queue rather than
        // recursive turn invocation, so the chain stays inspectable and
        // strictly bounded to one arrival per move.
        let mut pending = VecDeque::from([key]);
        while let Some(key) = pending.pop_front() {
            let scene_before = self.player.current_scene.clone();

            let Some((clear, text, mutators)) = self.select(&key)? else {
                surface.render(&[REFUSAL.to_string()], Alignment::Left)?;
                continue;
            };

            if clear {
                surface.clear()?;
            }
            surface.render(&text, Alignment::Left)?;
            self.apply(&mutators);

            if self.in_progress && self.player.current_scene != scene_before {
                pending.push_back(ActionKey::arrive());
            }
        }
        Ok(())
    }

    /// Match and resolve a key against the current scene.
    ///
    /// Requirements are evaluated here, before any mutator of the chosen
    /// outcome runs, so evaluation is always against pre-turn state. The
    /// outcome's pieces are copied out to keep selection borrow-free of
    /// the mutation that follows.
    fn select(&self, key: &ActionKey) -> EngineResult<Option<(bool, Vec<String>, Vec<Mutator>)>> {
        let scene = self
            .story
            .scene(&self.player.current_scene)
            .ok_or_else(|| EngineError::SceneNotFound(self.player.current_scene.clone()))?;

        Ok(match_action(scene, key)
            .and_then(|action| resolve_outcome(action, &self.player))
            .map(|outcome| {
                (
                    outcome.clear,
                    outcome.text.clone(),
                    outcome.mutators.clone(),
                )
            }))
    }

    /// Apply mutators strictly in authored order. Not transactional, not
    /// interruptible; set operations are safe no-ops on absent targets.
    fn apply(&mut self, mutators: &[Mutator]) {
        for mutator in mutators {
            match mutator {
                Mutator::MoveTo(scene) => self.player.current_scene = scene.clone(),
                Mutator::Arrive(scene) => self.player.mark_visited(scene),
                Mutator::AddItem(item) => self.player.add_item(item),
                Mutator::RemoveItem(item) => self.player.remove_item(item),
                Mutator::AddState(state) => self.player.add_state(state),
                Mutator::RemoveState(state) => self.player.remove_state(state),
                Mutator::EndGame => self.in_progress = false,
            }
        }
    }
}
