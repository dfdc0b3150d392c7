//! Player save files: a JSON envelope around the player state.

use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use skein_core::Player;

/// What actually lands on disk: the player plus a save timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveFile {
    /// When the save was written.
    pub saved_at: DateTime<Utc>,
    /// The saved player state.
    pub player: Player,
}

/// Write the player to `path` as pretty-printed JSON.
pub fn save_player(path: &Path, player: &Player) -> io::Result<()> {
    let save = SaveFile {
        saved_at: Utc::now(),
        player: player.clone(),
    };
    let json = serde_json::to_string_pretty(&save).map_err(io::Error::other)?;
    fs::write(path, json)
}

/// Read a player back from `path`.
pub fn load_player(path: &Path) -> io::Result<Player> {
    let json = fs::read_to_string(path)?;
    let save: SaveFile = serde_json::from_str(&json).map_err(io::Error::other)?;
    Ok(save.player)
}
