//! Play a story in the terminal.

use std::path::Path;

use skein_engine::Game;

use crate::saves;
use crate::shell::Shell;

/// Load the story, restore or create the player, and run the session.
///
/// With `--save`, an existing save file is restored before play (its scene
/// must still exist in the story) and the player is written back when the
/// session ends, however it ends.
pub fn run(
    story_path: &Path,
    lexicon_path: &Path,
    save_path: Option<&Path>,
    width: Option<u16>,
) -> Result<(), String> {
    let (story, lexicon) = super::load_story(story_path, lexicon_path)?;

    let mut game = match save_path {
        Some(path) if path.exists() => {
            let player = saves::load_player(path)
                .map_err(|e| format!("cannot load save {}: {e}", path.display()))?;
            Game::with_player(story, lexicon, player).map_err(|e| e.to_string())?
        }
        _ => Game::new(story, lexicon),
    };

    let mut shell = Shell::new(width);
    let result = game.run(&mut shell).map_err(|e| e.to_string());

    if let Some(path) = save_path {
        saves::save_player(path, game.player())
            .map_err(|e| format!("cannot write save {}: {e}", path.display()))?;
    }

    result
}
