//! CLI frontend for the Skein interactive fiction engine.

mod commands;
mod saves;
mod shell;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "skein",
    about = "Skein — a turn-based interactive fiction player",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a story
    Play {
        /// Story document (JSON)
        story: PathBuf,

        /// Lexicon document with stop words and synonyms (JSON)
        #[arg(short, long, default_value = "stories/lexicon.json")]
        lexicon: PathBuf,

        /// Save file to restore from, and to write back when the session ends
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Override the detected terminal width used for wrapping
        #[arg(short, long)]
        width: Option<u16>,
    },

    /// Validate a story document without playing it
    Check {
        /// Story document (JSON)
        story: PathBuf,

        /// Lexicon document with stop words and synonyms (JSON)
        #[arg(short, long, default_value = "stories/lexicon.json")]
        lexicon: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            story,
            lexicon,
            save,
            width,
        } => commands::play::run(&story, &lexicon, save.as_deref(), width),
        Commands::Check { story, lexicon } => commands::check::run(&story, &lexicon),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
