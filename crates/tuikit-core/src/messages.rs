//! Input events: [`Key`].

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A decoded keypress.
///
/// Platform byte patterns (ANSI escape sequences, Windows console scan
/// codes) all collapse into this one enumeration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    /// A decimal digit, `0..=9`.
    Digit(u8),
    Enter,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    /// Any other printable (or unmapped) character.
    Char(char),
    /// The platform interrupt byte (Ctrl-C).
    Interrupt,
}

impl Key {
    /// The numeric value of a [`Key::Digit`].
    #[inline]
    pub const fn digit(self) -> Option<u8> {
        match self {
            Self::Digit(d) => Some(d),
            _ => None,
        }
    }

    /// Whether this is one of the four arrow keys.
    #[inline]
    pub const fn is_arrow(self) -> bool {
        matches!(self, Self::Up | Self::Down | Self::Left | Self::Right)
    }
}

impl From<char> for Key {
    /// Map a character to a key without any terminal context: digits become
    /// [`Key::Digit`], `'\r'` becomes [`Key::Enter`], everything else is a
    /// [`Key::Char`].
    fn from(ch: char) -> Self {
        match ch {
            '0'..='9' => Self::Digit(ch as u8 - b'0'),
            '\r' => Self::Enter,
            _ => Self::Char(ch),
        }
    }
}
