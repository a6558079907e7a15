//! Key codes returned by `getch` when keypad mode is on.
//!
//! Values are those of `ncurses.h`; the native `keyname` gives the display
//! name for any code, [`key_constant`] gives the name of the constant.

use libc::c_int;

macro_rules! key_codes {
    ($( $(#[$doc:meta])* $name:ident = $value:expr; )*) => {
        $(
            $(#[$doc])*
            pub const $name: c_int = $value;
        )*

        /// Every named key code and its constant name.
        pub static KEY_CODES: &[(&str, c_int)] = &[$( (stringify!($name), $name) ),*];
    };
}

key_codes! {
    /// A wide character holds a key code rather than a character.
    KEY_CODE_YES = 0o400;
    /// Smallest key code.
    KEY_MIN = 0o401;
    /// Break.
    KEY_BREAK = 0o401;
    /// Down arrow.
    KEY_DOWN = 0o402;
    /// Up arrow.
    KEY_UP = 0o403;
    /// Left arrow.
    KEY_LEFT = 0o404;
    /// Right arrow.
    KEY_RIGHT = 0o405;
    /// Home.
    KEY_HOME = 0o406;
    /// Backspace.
    KEY_BACKSPACE = 0o407;
    /// Function key 0; see [`key_f`].
    KEY_F0 = 0o410;
    /// Delete line.
    KEY_DL = 0o510;
    /// Insert line.
    KEY_IL = 0o511;
    /// Delete character.
    KEY_DC = 0o512;
    /// Insert character or enter insert mode.
    KEY_IC = 0o513;
    /// Exit insert mode.
    KEY_EIC = 0o514;
    /// Clear screen.
    KEY_CLEAR = 0o515;
    /// Clear to end of screen.
    KEY_EOS = 0o516;
    /// Clear to end of line.
    KEY_EOL = 0o517;
    /// Scroll forward.
    KEY_SF = 0o520;
    /// Scroll backward.
    KEY_SR = 0o521;
    /// Next page.
    KEY_NPAGE = 0o522;
    /// Previous page.
    KEY_PPAGE = 0o523;
    /// Set tab.
    KEY_STAB = 0o524;
    /// Clear tab.
    KEY_CTAB = 0o525;
    /// Clear all tabs.
    KEY_CATAB = 0o526;
    /// Enter or send.
    KEY_ENTER = 0o527;
    /// Soft reset.
    KEY_SRESET = 0o530;
    /// Hard reset.
    KEY_RESET = 0o531;
    /// Print.
    KEY_PRINT = 0o532;
    /// Home down.
    KEY_LL = 0o533;
    /// Keypad upper left.
    KEY_A1 = 0o534;
    /// Keypad upper right.
    KEY_A3 = 0o535;
    /// Keypad center.
    KEY_B2 = 0o536;
    /// Keypad lower left.
    KEY_C1 = 0o537;
    /// Keypad lower right.
    KEY_C3 = 0o540;
    /// Back tab.
    KEY_BTAB = 0o541;
    /// Begin.
    KEY_BEG = 0o542;
    /// Cancel.
    KEY_CANCEL = 0o543;
    /// Close.
    KEY_CLOSE = 0o544;
    /// Command.
    KEY_COMMAND = 0o545;
    /// Copy.
    KEY_COPY = 0o546;
    /// Create.
    KEY_CREATE = 0o547;
    /// End.
    KEY_END = 0o550;
    /// Exit.
    KEY_EXIT = 0o551;
    /// Find.
    KEY_FIND = 0o552;
    /// Help.
    KEY_HELP = 0o553;
    /// Mark.
    KEY_MARK = 0o554;
    /// Message.
    KEY_MESSAGE = 0o555;
    /// Move.
    KEY_MOVE = 0o556;
    /// Next.
    KEY_NEXT = 0o557;
    /// Open.
    KEY_OPEN = 0o560;
    /// Options.
    KEY_OPTIONS = 0o561;
    /// Previous.
    KEY_PREVIOUS = 0o562;
    /// Redo.
    KEY_REDO = 0o563;
    /// Reference.
    KEY_REFERENCE = 0o564;
    /// Refresh.
    KEY_REFRESH = 0o565;
    /// Replace.
    KEY_REPLACE = 0o566;
    /// Restart.
    KEY_RESTART = 0o567;
    /// Resume.
    KEY_RESUME = 0o570;
    /// Save.
    KEY_SAVE = 0o571;
    /// Shifted begin.
    KEY_SBEG = 0o572;
    /// Shifted cancel.
    KEY_SCANCEL = 0o573;
    /// Shifted command.
    KEY_SCOMMAND = 0o574;
    /// Shifted copy.
    KEY_SCOPY = 0o575;
    /// Shifted create.
    KEY_SCREATE = 0o576;
    /// Shifted delete character.
    KEY_SDC = 0o577;
    /// Shifted delete line.
    KEY_SDL = 0o600;
    /// Select.
    KEY_SELECT = 0o601;
    /// Shifted end.
    KEY_SEND = 0o602;
    /// Shifted clear line.
    KEY_SEOL = 0o603;
    /// Shifted exit.
    KEY_SEXIT = 0o604;
    /// Shifted find.
    KEY_SFIND = 0o605;
    /// Shifted help.
    KEY_SHELP = 0o606;
    /// Shifted home.
    KEY_SHOME = 0o607;
    /// Shifted insert character.
    KEY_SIC = 0o610;
    /// Shifted left arrow.
    KEY_SLEFT = 0o611;
    /// Shifted message.
    KEY_SMESSAGE = 0o612;
    /// Shifted move.
    KEY_SMOVE = 0o613;
    /// Shifted next.
    KEY_SNEXT = 0o614;
    /// Shifted options.
    KEY_SOPTIONS = 0o615;
    /// Shifted previous.
    KEY_SPREVIOUS = 0o616;
    /// Shifted print.
    KEY_SPRINT = 0o617;
    /// Shifted redo.
    KEY_SREDO = 0o620;
    /// Shifted replace.
    KEY_SREPLACE = 0o621;
    /// Shifted right arrow.
    KEY_SRIGHT = 0o622;
    /// Shifted resume.
    KEY_SRSUME = 0o623;
    /// Shifted save.
    KEY_SSAVE = 0o624;
    /// Shifted suspend.
    KEY_SSUSPEND = 0o625;
    /// Shifted undo.
    KEY_SUNDO = 0o626;
    /// Suspend.
    KEY_SUSPEND = 0o627;
    /// Undo.
    KEY_UNDO = 0o630;
    /// Mouse event pending; read it with `getmouse`.
    KEY_MOUSE = 0o631;
    /// Terminal was resized.
    KEY_RESIZE = 0o632;
    /// Largest key code.
    KEY_MAX = 0o777;
}

/// `KEY_F(n)`.
#[inline]
pub const fn key_f(n: c_int) -> c_int {
    KEY_F0 + n
}

/// Name of the constant for `code`, e.g. `KEY_LEFT`.
///
/// Function keys are reported as `KEY_F0`; aliases resolve to the first
/// name declared (`KEY_MIN` is reported for `KEY_BREAK`).
pub fn key_constant(code: c_int) -> Option<&'static str> {
    if (KEY_F0..=key_f(63)).contains(&code) {
        return Some("KEY_F0");
    }
    KEY_CODES
        .iter()
        .find(|(name, value)| *value == code && *name != "KEY_CODE_YES")
        .map(|(name, _)| *name)
}

/// A decoded `getch` result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Plain byte input.
    Char(u8),
    /// Function key `F(n)`.
    F(u8),
    /// Any other key code.
    Code(c_int),
    /// `ERR`: no input (timeout or nodelay).
    None,
}

impl Key {
    /// Decode a value returned by `getch`/`wgetch`.
    pub fn from_code(code: c_int) -> Self {
        match code {
            crate::types::ERR => Key::None,
            0..=255 => Key::Char(code as u8),
            c if (KEY_F0..=key_f(63)).contains(&c) => Key::F((c - KEY_F0) as u8),
            c => Key::Code(c),
        }
    }
}

impl From<c_int> for Key {
    fn from(code: c_int) -> Self {
        Key::from_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_f() {
        assert_eq!(key_f(1), 0o411);
        assert_eq!(key_f(12), KEY_F0 + 12);
    }

    #[test]
    fn test_decode() {
        assert_eq!(Key::from_code(-1), Key::None);
        assert_eq!(Key::from_code(b'q' as c_int), Key::Char(b'q'));
        assert_eq!(Key::from_code(key_f(5)), Key::F(5));
        assert_eq!(Key::from_code(KEY_RESIZE), Key::Code(KEY_RESIZE));
    }

    #[test]
    fn test_constant_names() {
        assert_eq!(key_constant(KEY_LEFT), Some("KEY_LEFT"));
        assert_eq!(key_constant(KEY_BREAK), Some("KEY_MIN"));
        assert_eq!(key_constant(key_f(3)), Some("KEY_F0"));
        assert_eq!(key_constant(KEY_CODE_YES), None);
        assert_eq!(key_constant(65), None);
    }
}
