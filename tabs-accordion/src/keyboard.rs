//! Keyboard handling for accordion titles.

use tabdom::Key;

/// What a key press over a title asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// SPACE or ENTER: activate the focused title.
    Activate,
    /// LEFT or UP.
    Previous,
    /// RIGHT or DOWN.
    Next,
}

impl KeyIntent {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char(' ') | Key::Enter => Some(Self::Activate),
            Key::Left | Key::Up => Some(Self::Previous),
            Key::Right | Key::Down => Some(Self::Next),
            _ => None,
        }
    }
}

/// Index before `position`, wrapping to the last tab.
pub fn previous_index(position: usize, count: usize) -> usize {
    if position == 0 || position > count {
        count.saturating_sub(1)
    } else {
        position - 1
    }
}

/// Index after `position`, wrapping to the first tab.
pub fn next_index(position: usize, count: usize) -> usize {
    let next = position + 1;
    if next >= count { 0 } else { next }
}
