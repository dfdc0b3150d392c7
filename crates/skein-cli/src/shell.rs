//! Terminal shell: the presentation surface for real play.
//!
//! Owns everything the engine refuses to know about: terminal width,
//! paragraph wrapping, alignment, screen clearing, and input reading.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType, disable_raw_mode, enable_raw_mode};

use skein_engine::{Alignment, Surface};

const INDENT: &str = "    ";
const MIN_USABLE_WIDTH: usize = 16;

/// A line-oriented terminal implementation of [`Surface`].
pub struct Shell {
    usable_width: usize,
}

impl Shell {
    /// Create a shell. With no explicit width, the terminal is asked and
    /// 80 columns assumed if it will not say.
    pub fn new(width: Option<u16>) -> Self {
        let width = width.map_or_else(
            || terminal::size().map_or(80, |(w, _)| usize::from(w)),
            usize::from,
        );
        Self {
            usable_width: width.saturating_sub(2 * INDENT.len()).max(MIN_USABLE_WIDTH),
        }
    }
}

impl Surface for Shell {
    fn render(&mut self, paragraphs: &[String], alignment: Alignment) -> io::Result<()> {
        let mut stdout = io::stdout();
        for paragraph in paragraphs {
            for line in wrap_paragraph(paragraph, self.usable_width) {
                match alignment {
                    Alignment::Left => writeln!(stdout, "{INDENT}{line}")?,
                    Alignment::Centre => {
                        writeln!(stdout, "{INDENT}{}", centre_line(&line, self.usable_width))?;
                    }
                }
            }
            writeln!(stdout)?; // pad bottom of paragraph
        }
        stdout.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        println!(); // pad top of screen
        Ok(())
    }

    fn pause(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        write!(
            stdout,
            "{INDENT}{}",
            "Press any key to continue...".dimmed()
        )?;
        stdout.flush()?;

        enable_raw_mode()?;
        let result = wait_for_key();
        disable_raw_mode()?;
        println!();
        println!();
        result
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut stdout = io::stdout();
        let stdin = io::stdin();
        loop {
            write!(stdout, "{INDENT}{} ", ">".bold())?;
            stdout.flush()?;

            let mut raw = String::new();
            if stdin.lock().read_line(&mut raw)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "end of input",
                ));
            }
            let cleaned = sanitize(&raw);
            if !cleaned.is_empty() {
                println!(); // pad below the player's input
                return Ok(cleaned);
            }
        }
    }
}

/// Block until any key press arrives, swallowing other terminal events.
fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(());
        }
    }
}

/// Lowercase and strip everything but letters, digits, and spaces.
fn sanitize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Greedy word wrap to `width` columns. Words longer than the width get a
/// line of their own rather than being split.
fn wrap_paragraph(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new()); // an empty paragraph still takes a line
    }
    lines
}

/// Centre a line in `width` columns, biasing the extra column rightward.
fn centre_line(line: &str, width: usize) -> String {
    let padding = width.saturating_sub(line.len());
    let left = padding / 2;
    format!("{}{line}", " ".repeat(left))
}
