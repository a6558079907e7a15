//! Standard-screen functions rebuilt from their windowed equivalents.
//!
//! Some curses implementations (PDCurses' XCurses among them) define
//! `getch`, `refresh` and similar only as macros over `wgetch(stdscr)` and
//! friends. When such a function is missing but its windowed form attached,
//! the binding calls the windowed form with the current `stdscr`.

use crate::registry::UnattachedRegistry;

/// A function that can be emulated through its windowed equivalent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowedFallback {
    /// Exported name of the standard-screen function.
    pub missing: &'static str,
    /// Exported name of the windowed function called with `stdscr`.
    pub windowed: &'static str,
}

const fn fallback(missing: &'static str, windowed: &'static str) -> WindowedFallback {
    WindowedFallback { missing, windowed }
}

/// Every emulation the binding knows.
pub static WINDOWED_FALLBACKS: &[WindowedFallback] = &[
    fallback("getch", "wgetch"),
    fallback("refresh", "wrefresh"),
    fallback("clear", "wclear"),
    fallback("erase", "werase"),
    fallback("addch", "waddch"),
    fallback("addstr", "waddstr"),
    fallback("mv", "wmove"),
];

/// Fallbacks in effect for a library: the function is missing and its
/// windowed form is present.
pub fn active(unattached: &UnattachedRegistry) -> impl Iterator<Item = &'static WindowedFallback> + '_ {
    WINDOWED_FALLBACKS
        .iter()
        .filter(move |f| unattached.contains(f.missing) && !unattached.contains(f.windowed))
}
