//! Color indices.
//!
//! The eight standard colors of `ncurses.h`, available both as raw
//! constants (as passed to `init_pair`) and as a [`Color`] enum. The
//! [`colour`] module carries the British spelling used by some callers.

use crate::error::{Error, Result};
use libc::c_short;

/// Black.
pub const COLOR_BLACK: c_short = 0;
/// Red.
pub const COLOR_RED: c_short = 1;
/// Green.
pub const COLOR_GREEN: c_short = 2;
/// Yellow.
pub const COLOR_YELLOW: c_short = 3;
/// Blue.
pub const COLOR_BLUE: c_short = 4;
/// Magenta.
pub const COLOR_MAGENTA: c_short = 5;
/// Cyan.
pub const COLOR_CYAN: c_short = 6;
/// White.
pub const COLOR_WHITE: c_short = 7;

/// Short names and British spelling for the color indices.
pub mod colour {
    pub use super::{
        COLOR_BLACK as BLACK, COLOR_BLACK as COLOUR_BLACK, COLOR_BLUE as BLUE,
        COLOR_BLUE as COLOUR_BLUE, COLOR_CYAN as CYAN, COLOR_CYAN as COLOUR_CYAN,
        COLOR_GREEN as GREEN, COLOR_GREEN as COLOUR_GREEN, COLOR_MAGENTA as MAGENTA,
        COLOR_MAGENTA as COLOUR_MAGENTA, COLOR_RED as RED, COLOR_RED as COLOUR_RED,
        COLOR_WHITE as WHITE, COLOR_WHITE as COLOUR_WHITE, COLOR_YELLOW as YELLOW,
        COLOR_YELLOW as COLOUR_YELLOW,
    };
}

/// Standard color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum Color {
    /// Color 0.
    Black = COLOR_BLACK,
    /// Color 1.
    Red = COLOR_RED,
    /// Color 2.
    Green = COLOR_GREEN,
    /// Color 3.
    Yellow = COLOR_YELLOW,
    /// Color 4.
    Blue = COLOR_BLUE,
    /// Color 5.
    Magenta = COLOR_MAGENTA,
    /// Color 6.
    Cyan = COLOR_CYAN,
    /// Color 7.
    White = COLOR_WHITE,
}

/// British spelling of [`Color`].
pub type Colour = Color;

impl Color {
    /// All standard colors in index order.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Look up a color by its index.
    pub fn from_index(index: c_short) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Native color index.
    pub const fn index(self) -> c_short {
        self as c_short
    }
}

impl From<Color> for c_short {
    fn from(color: Color) -> Self {
        color.index()
    }
}

impl TryFrom<c_short> for Color {
    type Error = Error;

    fn try_from(value: c_short) -> Result<Self> {
        Color::from_index(value).ok_or(Error::Status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i as c_short);
            assert_eq!(Color::from_index(i as c_short), Some(*color));
        }
        assert_eq!(Color::from_index(8), None);
        assert_eq!(Color::from_index(-1), None);
    }

    #[test]
    fn test_colour_aliases() {
        assert_eq!(colour::RED, COLOR_RED);
        assert_eq!(colour::COLOUR_WHITE, 7);
        assert_eq!(Colour::Cyan, Color::Cyan);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Color::try_from(4i16), Ok(Color::Blue));
        assert!(Color::try_from(9i16).is_err());
    }
}
