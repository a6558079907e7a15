//! Exported screen variables: `stdscr`, `curscr` and `newscr`.
//!
//! A data symbol resolves to the address of the variable, not to its value,
//! so every read goes through one more pointer indirection. The value is
//! read on each access because ncurses replaces it on `initscr`,
//! `newterm` and `set_term`.

use crate::config::Capabilities;
use crate::error::{Error, Result};
use crate::library::SymbolSource;
use crate::types::WINDOW;
use log::{debug, warn};
use std::ptr::NonNull;

/// One of the global window variables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenSymbol {
    /// The default window.
    Stdscr,
    /// What is currently on the terminal.
    Curscr,
    /// The next screen image being built by `doupdate`.
    Newscr,
}

impl ScreenSymbol {
    /// All screen symbols in lookup order.
    pub const ALL: [ScreenSymbol; 3] = [Self::Stdscr, Self::Curscr, Self::Newscr];

    /// Native symbol name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stdscr => "stdscr",
            Self::Curscr => "curscr",
            Self::Newscr => "newscr",
        }
    }
}

/// Resolved addresses of the screen variables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenSymbols {
    stdscr: Option<NonNull<*mut WINDOW>>,
    curscr: Option<NonNull<*mut WINDOW>>,
    newscr: Option<NonNull<*mut WINDOW>>,
}

impl ScreenSymbols {
    /// Look up every screen variable in `source`.
    ///
    /// Nothing is resolved unless `capabilities` allows symbol lookup.
    pub fn resolve<S: SymbolSource + ?Sized>(source: &S, capabilities: Capabilities) -> Self {
        if !capabilities.contains(Capabilities::SYMBOL_LOOKUP) {
            debug!("symbol lookup disabled; screen variables are not resolved");
            return Self::default();
        }
        let lookup = |which: ScreenSymbol| {
            let addr = source.symbol(which.name()).map(NonNull::cast);
            if addr.is_none() {
                warn!("screen variable `{}` not exported by library", which.name());
            }
            addr
        };
        Self {
            stdscr: lookup(ScreenSymbol::Stdscr),
            curscr: lookup(ScreenSymbol::Curscr),
            newscr: lookup(ScreenSymbol::Newscr),
        }
    }

    /// Address of the variable, when it was resolved.
    pub fn address(&self, which: ScreenSymbol) -> Option<NonNull<*mut WINDOW>> {
        match which {
            ScreenSymbol::Stdscr => self.stdscr,
            ScreenSymbol::Curscr => self.curscr,
            ScreenSymbol::Newscr => self.newscr,
        }
    }

    /// Current value of the variable.
    pub fn read(&self, which: ScreenSymbol) -> Result<*mut WINDOW> {
        let addr = self
            .address(which)
            .ok_or(Error::Unavailable(which.name()))?;
        // SAFETY: SymbolSource guarantees the address holds a `WINDOW *`.
        Ok(unsafe { addr.as_ptr().read() })
    }
}
