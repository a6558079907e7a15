//! The `Ncurses` binding object.
//!
//! This module ties the loaded library, the attached function table, the
//! screen variables and the platform fixups into one value. Build it once
//! with [`Ncurses::load`] and pass it by reference.
//!
//! Every native entry point is reachable through `Deref<Target = Functions>`.
//! The methods defined here shadow a handful of them to apply fixups:
//! windowed emulation for standard-screen functions, `WINDOW` structure
//! reads for window macros, and the `stdscr` slot for `initscr`.

use crate::config::{Capabilities, LoaderConfig};
use crate::emulation::{self, WindowedFallback};
use crate::error::{Error, IntoResult, Result};
use crate::functions::{descriptor, Functions, FUNCTIONS};
use crate::library::{self, SymbolSource};
use crate::mouse::MEVENT;
use crate::registry::UnattachedRegistry;
use crate::symbols::{ScreenSymbol, ScreenSymbols};
use crate::types::{chtype, ERR, FALSE, TRUE, WINDOW};
use crate::winstruct::window_macro;
use libc::{c_char, c_int};
use log::{debug, info};
use std::cell::Cell;
use std::ffi::{CStr, CString};
use std::ops::Deref;

/// A loaded ncurses library.
///
/// The binding is neither `Send` nor `Sync`: ncurses keeps process-wide
/// state and must be driven from a single thread.
///
/// # Example
///
/// ```rust,no_run
/// use ncurses::*;
///
/// fn main() -> Result<()> {
///     let nc = Ncurses::load_from_env()?;
///     unsafe {
///         nc.initscr()?;
///         nc.addstr_str("Hello, ncurses!")?;
///         nc.refresh()?;
///         nc.getch()?;
///         nc.endwin()?;
///     }
///     Ok(())
/// }
/// ```
pub struct Ncurses {
    /// Candidate name the library was loaded from.
    library_name: String,

    /// Fixups in effect.
    capabilities: Capabilities,

    /// Attached entry points.
    functions: Functions,

    /// Entries whose symbol was not found.
    unattached: UnattachedRegistry,

    /// Addresses of `stdscr`, `curscr` and `newscr`.
    screens: ScreenSymbols,

    /// `stdscr` as returned by `initscr`, for libraries whose variables
    /// cannot be looked up.
    stdscr_slot: Cell<*mut WINDOW>,

    /// Keeps the library mapped for as long as the function pointers live.
    _source: Box<dyn SymbolSource>,
}

impl Ncurses {
    /// Load the library selected by `config` and attach every entry point.
    pub fn load(config: &LoaderConfig) -> Result<Self> {
        let (library, name) = library::load(config)?;
        Ok(Self::from_source(library, name, config.capabilities))
    }

    /// [`Ncurses::load`] with the configuration read from the environment.
    pub fn load_from_env() -> Result<Self> {
        Self::load(&LoaderConfig::from_env()?)
    }

    /// Attach every entry point from an arbitrary symbol source.
    pub fn from_source<S>(source: S, name: impl Into<String>, capabilities: Capabilities) -> Self
    where
        S: SymbolSource + 'static,
    {
        let library_name = name.into();
        let mut unattached = UnattachedRegistry::default();
        let functions = Functions::attach(&source, &mut unattached);
        let screens = ScreenSymbols::resolve(&source, capabilities);

        info!(
            "attached {} of {} entry points from `{}` ({:?})",
            FUNCTIONS.len() - unattached.len(),
            FUNCTIONS.len(),
            library_name,
            capabilities,
        );
        for fallback in emulation::active(&unattached) {
            debug!("`{}` emulated through `{}`", fallback.missing, fallback.windowed);
        }

        Self {
            library_name,
            capabilities,
            functions,
            unattached,
            screens,
            stdscr_slot: Cell::new(std::ptr::null_mut()),
            _source: Box::new(source),
        }
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Candidate name the library was loaded from.
    pub fn library_name(&self) -> &str {
        &self.library_name
    }

    /// Fixups in effect.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// The raw attached table, without fixups.
    pub fn functions(&self) -> &Functions {
        &self.functions
    }

    /// Entries whose native symbol was not found.
    pub fn unattached(&self) -> &UnattachedRegistry {
        &self.unattached
    }

    /// Whether `name` is a declared entry whose symbol was found.
    pub fn is_attached(&self, name: &str) -> bool {
        descriptor(name).is_some() && !self.unattached.contains(name)
    }

    /// Whether calling `name` can succeed, natively or through a fixup.
    pub fn is_available(&self, name: &str) -> bool {
        if self.is_attached(name) {
            return true;
        }
        if self.capabilities.contains(Capabilities::WINDOW_STRUCT) && window_macro(name).is_some() {
            return true;
        }
        self.emulations().any(|f| f.missing == name)
    }

    /// Windowed emulations in effect.
    pub fn emulations(&self) -> impl Iterator<Item = &'static WindowedFallback> + '_ {
        emulation::active(&self.unattached)
    }

    // ========================================================================
    // Screens
    // ========================================================================

    /// Current `stdscr`.
    ///
    /// Read from the library variable when it can be looked up, otherwise
    /// the value last returned by [`Ncurses::initscr`]. Null before
    /// initialization.
    pub fn stdscr(&self) -> Result<*mut WINDOW> {
        match self.screens.read(ScreenSymbol::Stdscr) {
            Err(Error::Unavailable(_)) => Ok(self.stdscr_slot.get()),
            other => other,
        }
    }

    /// Current `curscr`.
    pub fn curscr(&self) -> Result<*mut WINDOW> {
        self.screens.read(ScreenSymbol::Curscr)
    }

    /// Current `newscr`.
    pub fn newscr(&self) -> Result<*mut WINDOW> {
        self.screens.read(ScreenSymbol::Newscr)
    }

    /// Native `initscr`.
    ///
    /// When `stdscr` cannot be looked up the returned window is remembered
    /// and served by [`Ncurses::stdscr`].
    ///
    /// # Safety
    ///
    /// Same contract as the native call.
    pub unsafe fn initscr(&self) -> Result<*mut WINDOW> {
        let win = unsafe { self.functions.raw_initscr()? };
        if self.screens.address(ScreenSymbol::Stdscr).is_none() {
            self.stdscr_slot.set(win);
        }
        Ok(win)
    }

    // ========================================================================
    // Window macros
    // ========================================================================

    unsafe fn window_field(&self, name: &'static str, win: *mut WINDOW, native: Result<c_int>) -> Result<c_int> {
        match native {
            Err(Error::Unavailable(_)) if self.capabilities.contains(Capabilities::WINDOW_STRUCT) => {
                let field = window_macro(name).ok_or(Error::Unavailable(name))?.field;
                Ok(unsafe { field.read(win) })
            }
            other => other,
        }
    }

    /// Background of `win`, from the native function or the structure.
    ///
    /// # Safety
    ///
    /// `win` must be null or a live window.
    pub unsafe fn getbkgd(&self, win: *mut WINDOW) -> Result<chtype> {
        let native = unsafe { self.functions.getbkgd(win) }.map(|b| b as c_int);
        unsafe { self.window_field("getbkgd", win, native) }.map(|b| b as chtype)
    }

    /// Whether `leaveok` is set on `win`.
    ///
    /// # Safety
    ///
    /// `win` must be null or a live window.
    pub unsafe fn is_leaveok(&self, win: *mut WINDOW) -> Result<bool> {
        let native = unsafe { self.functions.is_leaveok(win) }.map(c_int::from);
        unsafe { self.window_field("is_leaveok", win, native) }.map(|v| v != FALSE)
    }

    // ========================================================================
    // Pair accessors
    // ========================================================================

    /// `getyx`: cursor position of `win` as `(y, x)`.
    ///
    /// # Safety
    ///
    /// `win` must be null or a live window.
    pub unsafe fn getyx(&self, win: *mut WINDOW) -> Result<(c_int, c_int)> {
        unsafe { Ok((self.getcury(win)?, self.getcurx(win)?)) }
    }

    /// `getbegyx`: screen origin of `win` as `(y, x)`.
    ///
    /// # Safety
    ///
    /// `win` must be null or a live window.
    pub unsafe fn getbegyx(&self, win: *mut WINDOW) -> Result<(c_int, c_int)> {
        unsafe { Ok((self.getbegy(win)?, self.getbegx(win)?)) }
    }

    /// `getparyx`: origin of `win` relative to its parent as `(y, x)`.
    ///
    /// `(-1, -1)` for a window that is not a subwindow.
    ///
    /// # Safety
    ///
    /// `win` must be null or a live window.
    pub unsafe fn getparyx(&self, win: *mut WINDOW) -> Result<(c_int, c_int)> {
        unsafe { Ok((self.getpary(win)?, self.getparx(win)?)) }
    }

    /// `getmaxyx`: size of `win` as `(rows, columns)`.
    ///
    /// # Safety
    ///
    /// `win` must be null or a live window.
    pub unsafe fn getmaxyx(&self, win: *mut WINDOW) -> Result<(c_int, c_int)> {
        unsafe { Ok((self.getmaxy(win)?, self.getmaxx(win)?)) }
    }

    /// `getsyx`: virtual screen cursor as `(y, x)`.
    ///
    /// `(-1, -1)` when `leaveok` is set on `newscr`. Fails with
    /// [`Error::NullPointer`] before initialization.
    ///
    /// # Safety
    ///
    /// Must be called after `initscr` or `newterm`.
    pub unsafe fn getsyx(&self) -> Result<(c_int, c_int)> {
        let newscr = self.newscr()?;
        if newscr.is_null() {
            return Err(Error::NullPointer);
        }
        if unsafe { self.is_leaveok(newscr)? } {
            Ok((-1, -1))
        } else {
            unsafe { self.getyx(newscr) }
        }
    }

    /// `setsyx`: move the virtual screen cursor.
    ///
    /// `(-1, -1)` sets `leaveok` on `newscr`; any other position clears it
    /// and moves there. Does nothing before initialization.
    ///
    /// # Safety
    ///
    /// Must be called after `initscr` or `newterm`.
    pub unsafe fn setsyx(&self, y: c_int, x: c_int) -> Result<()> {
        let newscr = self.newscr()?;
        if newscr.is_null() {
            return Ok(());
        }
        unsafe {
            if y == -1 && x == -1 {
                self.functions.leaveok(newscr, TRUE).into_result()?;
            } else {
                self.functions.leaveok(newscr, FALSE).into_result()?;
                self.functions.wmove(newscr, y, x).into_result()?;
            }
        }
        Ok(())
    }

    // ========================================================================
    // Standard-screen emulation
    // ========================================================================

    /// Use `direct` unless `name` is unattached, then call `windowed` with
    /// `stdscr`. Errors from the windowed path keep the requested name.
    unsafe fn or_windowed<T>(
        &self,
        name: &'static str,
        direct: impl FnOnce(&Functions) -> Result<T>,
        windowed: impl FnOnce(&Functions, *mut WINDOW) -> Result<T>,
    ) -> Result<T> {
        if !self.unattached.contains(name) {
            return direct(&self.functions);
        }
        self.stdscr()
            .and_then(|win| windowed(&self.functions, win))
            .map_err(|err| match err {
                Error::Unavailable(_) => Error::Unavailable(name),
                err => err,
            })
    }

    /// `getch`, falling back to `wgetch(stdscr)`.
    ///
    /// # Safety
    ///
    /// Same contract as the native call.
    pub unsafe fn getch(&self) -> Result<c_int> {
        unsafe { self.or_windowed("getch", |f| f.getch(), |f, w| f.wgetch(w)) }
    }

    /// `refresh`, falling back to `wrefresh(stdscr)`.
    ///
    /// # Safety
    ///
    /// Same contract as the native call.
    pub unsafe fn refresh(&self) -> Result<c_int> {
        unsafe { self.or_windowed("refresh", |f| f.refresh(), |f, w| f.wrefresh(w)) }
    }

    /// `clear`, falling back to `wclear(stdscr)`.
    ///
    /// # Safety
    ///
    /// Same contract as the native call.
    pub unsafe fn clear(&self) -> Result<c_int> {
        unsafe { self.or_windowed("clear", |f| f.clear(), |f, w| f.wclear(w)) }
    }

    /// `erase`, falling back to `werase(stdscr)`.
    ///
    /// # Safety
    ///
    /// Same contract as the native call.
    pub unsafe fn erase(&self) -> Result<c_int> {
        unsafe { self.or_windowed("erase", |f| f.erase(), |f, w| f.werase(w)) }
    }

    /// `addch`, falling back to `waddch(stdscr, ch)`.
    ///
    /// # Safety
    ///
    /// Same contract as the native call.
    pub unsafe fn addch(&self, ch: chtype) -> Result<c_int> {
        unsafe { self.or_windowed("addch", |f| f.addch(ch), |f, w| f.waddch(w, ch)) }
    }

    /// `addstr`, falling back to `waddstr(stdscr, s)`.
    ///
    /// # Safety
    ///
    /// `s` must be a NUL-terminated string.
    pub unsafe fn addstr(&self, s: *const c_char) -> Result<c_int> {
        unsafe { self.or_windowed("addstr", |f| f.addstr(s), |f, w| f.waddstr(w, s)) }
    }

    /// `move`, falling back to `wmove(stdscr, y, x)`.
    ///
    /// # Safety
    ///
    /// Same contract as the native call.
    pub unsafe fn mv(&self, y: c_int, x: c_int) -> Result<c_int> {
        unsafe { self.or_windowed("mv", |f| f.mv(y, x), |f, w| f.wmove(w, y, x)) }
    }

    // ========================================================================
    // String helpers
    // ========================================================================

    /// `addstr` with a Rust string.
    ///
    /// # Safety
    ///
    /// Same contract as the native call.
    pub unsafe fn addstr_str(&self, s: &str) -> Result<c_int> {
        let s = CString::new(s)?;
        unsafe { self.addstr(s.as_ptr()).into_result() }
    }

    /// `waddstr` with a Rust string.
    ///
    /// # Safety
    ///
    /// `win` must be a live window.
    pub unsafe fn waddstr_str(&self, win: *mut WINDOW, s: &str) -> Result<c_int> {
        let s = CString::new(s)?;
        unsafe { self.functions.waddstr(win, s.as_ptr()).into_result() }
    }

    /// `mvwaddstr` with a Rust string.
    ///
    /// # Safety
    ///
    /// `win` must be a live window.
    pub unsafe fn mvwaddstr_str(&self, win: *mut WINDOW, y: c_int, x: c_int, s: &str) -> Result<c_int> {
        let s = CString::new(s)?;
        unsafe { self.functions.mvwaddstr(win, y, x, s.as_ptr()).into_result() }
    }

    /// `printw("%s", s)`. The text is never interpreted as a format.
    ///
    /// # Safety
    ///
    /// Same contract as the native call.
    pub unsafe fn printw_str(&self, s: &str) -> Result<c_int> {
        let printw = self.functions.printw()?;
        let s = CString::new(s)?;
        unsafe { printw(c"%s".as_ptr(), s.as_ptr()).into_result() }
    }

    /// Printable name of key `code`.
    pub fn keyname_str(&self, code: c_int) -> Result<String> {
        // SAFETY: keyname only reads its own tables.
        let name = unsafe { self.functions.keyname(code)? };
        owned_string(name)
    }

    /// Version string of the loaded library, e.g. `ncurses 6.4.20221231`.
    pub fn curses_version_str(&self) -> Result<String> {
        // SAFETY: curses_version returns a static string.
        let version = unsafe { self.functions.curses_version()? };
        owned_string(version)
    }

    // ========================================================================
    // Mouse
    // ========================================================================

    /// Next mouse event, `None` when the queue is empty.
    ///
    /// # Safety
    ///
    /// Mouse reporting must have been enabled with `mousemask`.
    pub unsafe fn getmouse_event(&self) -> Result<Option<MEVENT>> {
        let mut event = MEVENT::default();
        let status = unsafe { self.functions.getmouse((&mut event as *mut MEVENT).cast())? };
        Ok((status != ERR).then_some(event))
    }
}

macro_rules! window_queries {
    ($( $name:ident: $what:literal; )*) => {
        impl Ncurses {
            $(
                #[doc = concat!("`", stringify!($name), "`: ", $what, " of `win`.")]
                ///
                /// Read from the `WINDOW` structure when the function is not
                /// exported and the window-struct fixup is enabled.
                ///
                /// # Safety
                ///
                /// `win` must be null or a live window.
                pub unsafe fn $name(&self, win: *mut WINDOW) -> Result<c_int> {
                    unsafe {
                        let native = self.functions.$name(win);
                        self.window_field(stringify!($name), win, native)
                    }
                }
            )*
        }
    };
}

window_queries! {
    getcury: "cursor row";
    getcurx: "cursor column";
    getbegy: "screen row of the origin";
    getbegx: "screen column of the origin";
    getmaxy: "number of rows";
    getmaxx: "number of columns";
    getpary: "row relative to the parent";
    getparx: "column relative to the parent";
    getattrs: "current attributes";
}

fn owned_string(ptr: *const c_char) -> Result<String> {
    if ptr.is_null() {
        return Err(Error::NullPointer);
    }
    // SAFETY: non-null strings returned by ncurses are NUL-terminated.
    Ok(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

impl Deref for Ncurses {
    type Target = Functions;

    fn deref(&self) -> &Functions {
        &self.functions
    }
}

impl std::fmt::Debug for Ncurses {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ncurses")
            .field("library_name", &self.library_name)
            .field("capabilities", &self.capabilities)
            .field("unattached", &self.unattached.len())
            .field("screens", &self.screens)
            .finish_non_exhaustive()
    }
}
