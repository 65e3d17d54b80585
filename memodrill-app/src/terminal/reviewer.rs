use crate::terminal::keys::{Key, KeySource};
use crate::terminal::theme;
use crate::terminal::viewer::Viewer;
use memodrill_core::{Item, Quality, Reviewer};
use std::io::{self, Write};

/// Line-oriented review prompts: `Q:`, any key to reveal, `A:`, then a single
/// digit 0-5 as the grade.
pub struct TerminalReviewer<W, K> {
    out: W,
    keys: K,
    viewer: Option<Viewer>,
}

impl<W: Write, K: KeySource> TerminalReviewer<W, K> {
    pub fn new(out: W, keys: K, viewer: Option<Viewer>) -> Self {
        Self { out, keys, viewer }
    }
}

impl<W: Write, K: KeySource> Reviewer for TerminalReviewer<W, K> {
    type Error = io::Error;

    fn show_prompt(&mut self, item: &Item) -> io::Result<bool> {
        writeln!(self.out, "{} {}", theme::label("Q:"), item.prompt)?;
        self.out.flush()?;
        if let Some(v) = &self.viewer {
            v.open(&item.prompt);
        }
        Ok(self.keys.next_key()? != Key::Quit)
    }

    fn show_response(&mut self, item: &Item) -> io::Result<()> {
        writeln!(self.out, "{} {}", theme::label("A:"), item.response)
    }

    fn read_quality(&mut self) -> io::Result<Option<Quality>> {
        loop {
            write!(self.out, "{} ", theme::label("?:"))?;
            self.out.flush()?;
            match self.keys.next_key()? {
                Key::Quit => {
                    writeln!(self.out)?;
                    return Ok(None);
                }
                Key::Char(c) => match Quality::from_digit(c) {
                    Some(q) => {
                        writeln!(self.out, "{}\n", theme::grade(q, c))?;
                        return Ok(Some(q));
                    }
                    None if c.is_control() => writeln!(self.out)?,
                    None => writeln!(self.out, "{c}")?,
                },
                Key::Other => writeln!(self.out)?,
            }
        }
    }
}
