use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Quit,
    Other,
}

pub trait KeySource {
    fn next_key(&mut self) -> io::Result<Key>;
}

/// Restores cooked mode when dropped.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        disable_raw_mode().ok();
    }
}

/// Reads one key press at a time from the controlling terminal. Raw mode is
/// held only for the duration of a single read.
pub struct RawKeys;

impl KeySource for RawKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        let _raw = RawMode::enable()?;
        loop {
            if let Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) = event::read()?
            {
                if let Some(key) = map_key(code, modifiers) {
                    return Ok(key);
                }
            }
        }
    }
}

/// `None` for chords that are swallowed, such as Ctrl-Z: raw mode turns job
/// control keys into plain input and they must not count as an answer.
pub fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let key = match code {
        // Ctrl-\ arrives as Ctrl-4 on most terminals
        KeyCode::Char('c' | '\\' | '4') if ctrl => Key::Quit,
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char('q') | KeyCode::Esc => Key::Quit,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Char('\n'),
        _ => Key::Other,
    };
    Some(key)
}
