use crossterm::style::{StyledContent, Stylize};
use memodrill_core::Quality;

pub fn label(s: &str) -> StyledContent<&str> {
    s.blue()
}

/// Weak grades in red, good ones in green.
pub fn grade(q: Quality, key: char) -> StyledContent<char> {
    if q.is_correct() {
        key.green()
    } else {
        key.red()
    }
}
