//! The presentation surface: the engine's only view of the outside world.

use std::collections::VecDeque;
use std::io;

/// Horizontal alignment of rendered paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Flush left (narrative text).
    Left,
    /// Centred (title screens).
    Centre,
}

/// What the engine needs from a presentation layer.
///
/// The engine calls these only at turn boundaries and knows nothing of
/// terminal widths, wrapping, or OS clear commands. Implementations decide
/// all of that.
pub trait Surface {
    /// Render paragraphs with the given alignment.
    fn render(&mut self, paragraphs: &[String], alignment: Alignment) -> io::Result<()>;

    /// Clear the surface.
    fn clear(&mut self) -> io::Result<()>;

    /// Block until the player signals to continue.
    fn pause(&mut self) -> io::Result<()>;

    /// Block for the player's next command.
    fn read_line(&mut self) -> io::Result<String>;
}

/// One observable interaction with a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// Paragraphs were rendered.
    Rendered(Vec<String>, Alignment),
    /// The surface was cleared.
    Cleared,
    /// The surface paused for a keypress.
    Paused,
}

/// A scripted, in-memory surface for headless runs and tests.
///
/// `read_line` pops from a pre-loaded script and fails with
/// [`io::ErrorKind::UnexpectedEof`] once the script runs dry, so a game
/// loop that outlives its script errors out instead of spinning.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    script: VecDeque<String>,
    /// Everything rendered, cleared, and paused, in order.
    pub events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    /// Create a surface with no scripted input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface that will serve the given lines to `read_line`.
    pub fn scripted<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: lines.into_iter().map(Into::into).collect(),
            events: Vec::new(),
        }
    }

    /// All rendered paragraphs, flattened in render order.
    pub fn rendered_text(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Rendered(paragraphs, _) => Some(paragraphs),
                _ => None,
            })
            .flatten()
            .map(String::as_str)
            .collect()
    }

    /// How many times a paragraph equal to `text` was rendered.
    pub fn times_rendered(&self, text: &str) -> usize {
        self.rendered_text()
            .into_iter()
            .filter(|line| *line == text)
            .count()
    }
}

impl Surface for RecordingSurface {
    fn render(&mut self, paragraphs: &[String], alignment: Alignment) -> io::Result<()> {
        self.events
            .push(SurfaceEvent::Rendered(paragraphs.to_vec(), alignment));
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.events.push(SurfaceEvent::Cleared);
        Ok(())
    }

    fn pause(&mut self) -> io::Result<()> {
        self.events.push(SurfaceEvent::Paused);
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.script.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted")
        })
    }
}
