//! Video attribute masks as defined in `ncurses.h`.
//!
//! Attributes live above the character byte of a `chtype`; every mask is
//! produced by [`ncurses_bits`] exactly as the C header's `NCURSES_BITS`
//! macro does, so values can be passed straight to `attron`, `wattrset`,
//! `waddch` and friends.

use crate::types::{attr_t, chtype};

/// Number of low bits reserved for the character.
pub const NCURSES_ATTR_SHIFT: u32 = 8;

/// `NCURSES_BITS(mask, shift)`.
#[inline]
pub const fn ncurses_bits(mask: chtype, shift: u32) -> chtype {
    mask << (shift + NCURSES_ATTR_SHIFT)
}

/// Normal display (no attributes).
pub const A_NORMAL: attr_t = 1 - 1;
/// Every attribute bit, color included.
pub const A_ATTRIBUTES: attr_t = ncurses_bits(!(1 - 1), 0);
/// Character portion of a `chtype`.
pub const A_CHARTEXT: attr_t = ncurses_bits(1, 0) - 1;
/// Color pair portion of a `chtype`.
pub const A_COLOR: attr_t = ncurses_bits((1 << 8) - 1, 0);
/// Best highlighting mode available.
pub const A_STANDOUT: attr_t = ncurses_bits(1, 8);
/// Underlined text.
pub const A_UNDERLINE: attr_t = ncurses_bits(1, 9);
/// Reverse video.
pub const A_REVERSE: attr_t = ncurses_bits(1, 10);
/// Blinking text.
pub const A_BLINK: attr_t = ncurses_bits(1, 11);
/// Half-bright text.
pub const A_DIM: attr_t = ncurses_bits(1, 12);
/// Extra bright or bold text.
pub const A_BOLD: attr_t = ncurses_bits(1, 13);
/// Alternate character set.
pub const A_ALTCHARSET: attr_t = ncurses_bits(1, 14);
/// Invisible text.
pub const A_INVIS: attr_t = ncurses_bits(1, 15);
/// Protected text.
pub const A_PROTECT: attr_t = ncurses_bits(1, 16);
/// Horizontal highlight.
pub const A_HORIZONTAL: attr_t = ncurses_bits(1, 17);
/// Left highlight.
pub const A_LEFT: attr_t = ncurses_bits(1, 18);
/// Low highlight.
pub const A_LOW: attr_t = ncurses_bits(1, 19);
/// Right highlight.
pub const A_RIGHT: attr_t = ncurses_bits(1, 20);
/// Top highlight.
pub const A_TOP: attr_t = ncurses_bits(1, 21);
/// Vertical highlight.
pub const A_VERTICAL: attr_t = ncurses_bits(1, 22);

// X/Open wide-character names share the same bits.
pub use self::{
    A_ALTCHARSET as WA_ALTCHARSET, A_ATTRIBUTES as WA_ATTRIBUTES, A_BLINK as WA_BLINK,
    A_BOLD as WA_BOLD, A_CHARTEXT as WA_CHARTEXT, A_COLOR as WA_COLOR, A_DIM as WA_DIM,
    A_HORIZONTAL as WA_HORIZONTAL, A_INVIS as WA_INVIS, A_LEFT as WA_LEFT, A_LOW as WA_LOW,
    A_NORMAL as WA_NORMAL, A_PROTECT as WA_PROTECT, A_REVERSE as WA_REVERSE,
    A_RIGHT as WA_RIGHT, A_STANDOUT as WA_STANDOUT, A_TOP as WA_TOP,
    A_UNDERLINE as WA_UNDERLINE, A_VERTICAL as WA_VERTICAL,
};

/// `COLOR_PAIR(n)`: the attribute bits selecting color pair `n`.
///
/// Computed locally; the native `COLOR_PAIR` entry point is also bound for
/// libraries that export it.
///
/// ```rust
/// use ncurses::attr::{color_pair, pair_number, A_BOLD};
///
/// let attrs = color_pair(3) | A_BOLD;
/// assert_eq!(pair_number(attrs), 3);
/// ```
#[inline]
pub const fn color_pair(n: i16) -> attr_t {
    ncurses_bits(n as chtype, 0) & A_COLOR
}

/// `PAIR_NUMBER(a)`: the color pair selected by an attribute value.
#[inline]
pub const fn pair_number(attrs: attr_t) -> i16 {
    ((attrs & A_COLOR) >> NCURSES_ATTR_SHIFT) as i16
}

bitflags::bitflags! {
    /// Attribute masks as a typed set.
    ///
    /// Color and character bits are not part of the set; combine with
    /// [`color_pair`] through [`Attribute::with_color_pair`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Attribute: attr_t {
        /// Standout.
        const STANDOUT = A_STANDOUT;
        /// Underline.
        const UNDERLINE = A_UNDERLINE;
        /// Reverse video.
        const REVERSE = A_REVERSE;
        /// Blink.
        const BLINK = A_BLINK;
        /// Dim.
        const DIM = A_DIM;
        /// Bold.
        const BOLD = A_BOLD;
        /// Alternate character set.
        const ALTCHARSET = A_ALTCHARSET;
        /// Invisible.
        const INVIS = A_INVIS;
        /// Protected.
        const PROTECT = A_PROTECT;
        /// Horizontal highlight.
        const HORIZONTAL = A_HORIZONTAL;
        /// Left highlight.
        const LEFT = A_LEFT;
        /// Low highlight.
        const LOW = A_LOW;
        /// Right highlight.
        const RIGHT = A_RIGHT;
        /// Top highlight.
        const TOP = A_TOP;
        /// Vertical highlight.
        const VERTICAL = A_VERTICAL;
    }
}

impl Attribute {
    /// Raw attribute value including the bits for color pair `pair`.
    #[must_use]
    pub const fn with_color_pair(self, pair: i16) -> attr_t {
        self.bits() | color_pair(pair)
    }
}

impl From<attr_t> for Attribute {
    fn from(attrs: attr_t) -> Self {
        Attribute::from_bits_truncate(attrs & !(A_COLOR | A_CHARTEXT))
    }
}

impl From<Attribute> for attr_t {
    fn from(attrs: Attribute) -> Self {
        attrs.bits()
    }
}
