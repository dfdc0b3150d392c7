//! Validate a story document without playing it.

use std::path::Path;

use colored::Colorize;

/// Load and validate the story, then print a summary.
pub fn run(story_path: &Path, lexicon_path: &Path) -> Result<(), String> {
    let (story, _) = super::load_story(story_path, lexicon_path)?;

    println!(
        "  {} All checks passed for '{}'.",
        "ok".green(),
        story.meta.title
    );
    println!(
        "  {} scenes, {} actions, {} outcomes",
        story.scene_count(),
        story.action_count(),
        story.outcome_count()
    );
    println!("  first scene: {}", story.meta.first_scene);

    Ok(())
}
