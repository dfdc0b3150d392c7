//! Subcommand implementations.

pub mod check;
pub mod play;

use std::fs;
use std::path::Path;

use skein_core::{Lexicon, LexiconDoc, Story, StoryDoc};

/// Load the lexicon, then load and validate the story against it.
///
/// All content errors — unreadable files, malformed JSON, duplicate keys,
/// unknown type tags, dangling scene references — surface here, before any
/// turn runs.
pub fn load_story(story_path: &Path, lexicon_path: &Path) -> Result<(Story, Lexicon), String> {
    let lexicon = load_lexicon(lexicon_path)?;

    let text = fs::read_to_string(story_path)
        .map_err(|e| format!("cannot read {}: {e}", story_path.display()))?;
    let doc: StoryDoc =
        serde_json::from_str(&text).map_err(|e| format!("{}: {e}", story_path.display()))?;
    let story =
        Story::build(doc, &lexicon).map_err(|e| format!("{}: {e}", story_path.display()))?;

    Ok((story, lexicon))
}

fn load_lexicon(path: &Path) -> Result<Lexicon, String> {
    let text =
        fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let doc: LexiconDoc =
        serde_json::from_str(&text).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(Lexicon::from(doc))
}
