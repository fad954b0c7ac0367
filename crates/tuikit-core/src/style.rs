//! Visual styling: [`Style`] and [`style_to_code`].

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Resets every attribute.
pub const RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// A set of SGR (Select Graphic Rendition) codes in `0..128`.
///
/// Each code is one bit, so combining styles with `|` merges them without
/// duplicates and the resulting escape sequence is independent of the
/// order the parts were combined in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style(pub u128);

impl Style {
    /// No codes: renders without any prefix.
    pub const NONE: Self = Self(0);

    pub const REGULAR: Self = Self::code(0);
    pub const BOLD: Self = Self::code(1);
    pub const DIMMED: Self = Self::code(2);
    pub const ITALIC: Self = Self::code(3);
    pub const UNDERSCORE_INTERSECT: Self = Self::code(4);
    pub const FLASHING: Self = Self::code(5);
    pub const INVERTED: Self = Self::code(7);
    pub const STRIKETHROUGH: Self = Self::code(9);
    pub const DOUBLE_UNDERSCORE_INTERSECT: Self = Self::code(21);
    pub const UNDERSCORE: Self = Self::code(53);

    pub const BLACK: Self = Self::code(30);
    pub const RED: Self = Self::code(31);
    pub const GREEN: Self = Self::code(32);
    pub const YELLOW: Self = Self::code(33);
    pub const BLUE: Self = Self::code(34);
    pub const PURPLE: Self = Self::code(35);
    pub const LIGHTBLUE: Self = Self::code(36);

    pub const GRAY_BRIGHT: Self = Self::code(90);
    pub const RED_BRIGHT: Self = Self::code(91);
    pub const GREEN_BRIGHT: Self = Self::code(92);
    pub const YELLOW_BRIGHT: Self = Self::code(93);
    pub const BLUE_BRIGHT: Self = Self::code(94);
    pub const PURPLE_BRIGHT: Self = Self::code(95);
    pub const TURQUOISE: Self = Self::code(96);
    pub const WHITE_BRIGHT: Self = Self::code(97);

    pub const BG_GRAY: Self = Self::code(100);
    pub const BG_RED: Self = Self::code(101);
    pub const BG_GREEN: Self = Self::code(102);
    pub const BG_YELLOW: Self = Self::code(103);
    pub const BG_CYAN: Self = Self::code(104);
    pub const BG_PURPLE: Self = Self::code(105);
    pub const BG_TURQUOISE: Self = Self::code(106);
    pub const BG_WHITE: Self = Self::code(107);

    /// A style holding the single SGR code `n`.
    ///
    /// Panics if `n >= 128`.
    #[inline]
    pub const fn code(n: u8) -> Self {
        assert!(n < 128, "SGR code out of range");
        Self(1 << n)
    }

    /// Whether this style contains all the codes from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether the style is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The SGR codes in ascending order.
    pub fn codes(self) -> impl Iterator<Item = u8> {
        (0u8..128).filter(move |&n| self.0 & (1 << n) != 0)
    }
}

impl BitOr for Style {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Style {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Style {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl FromIterator<Style> for Style {
    fn from_iter<I: IntoIterator<Item = Style>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, BitOr::bitor)
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Style")
            .field(&self.codes().collect::<Vec<_>>())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Escape codes
// ---------------------------------------------------------------------------

/// The terminal formatting prefix for `style`: `ESC [ 0 ; c1 ; c2 ... m`.
///
/// The leading `0` resets whatever was active before. An empty style yields
/// an empty string.
pub fn style_to_code(style: Style) -> String {
    if style.is_empty() {
        return String::new();
    }
    let mut out = String::from("\x1b[0");
    for n in style.codes() {
        out.push(';');
        out.push_str(&n.to_string());
    }
    out.push('m');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_code() {
        assert_eq!(style_to_code(Style::RED), "\x1b[0;31m");
        assert_eq!(style_to_code(Style::REGULAR), "\x1b[0;0m");
        assert_eq!(style_to_code(Style::NONE), "");
    }

    #[test]
    fn composite_is_a_set() {
        let a = Style::BOLD | Style::RED | Style::BOLD;
        let b = Style::RED | Style::BOLD;
        assert_eq!(a, b);
        assert_eq!(style_to_code(a), "\x1b[0;1;31m");
        assert_eq!(a.codes().collect::<Vec<_>>(), vec![1, 31]);
    }

    #[test]
    fn contains_and_collect() {
        let s: Style = [Style::INVERTED, Style::BG_WHITE, Style::INVERTED]
            .into_iter()
            .collect();
        assert!(s.contains(Style::INVERTED));
        assert!(s.contains(Style::BG_WHITE));
        assert!(!s.contains(Style::BOLD));
        assert_eq!(s & Style::BG_WHITE, Style::BG_WHITE);
        assert_eq!(style_to_code(s), "\x1b[0;7;107m");
    }

    #[test]
    fn high_codes_fit() {
        let s = Style::code(127) | Style::WHITE_BRIGHT;
        assert_eq!(style_to_code(s), "\x1b[0;97;127m");
    }
}
