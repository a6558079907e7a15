//! Native library loading and symbol lookup.
//!
//! [`Library`] wraps `dlopen`/`dlsym`. Candidate selection is separated from
//! the actual open call in [`load_with`], so the search order can be driven
//! by any opener.

use crate::config::LoaderConfig;
use crate::error::{Error, LoadAttempt, Result};
use libc::c_void;
use log::{debug, info};
use std::ffi::{CStr, CString};
use std::ptr::NonNull;

/// Anything that can resolve a symbol name to an address.
///
/// Implemented by [`Library`]; tests and embedders can provide their own
/// source (for example a table of in-process functions).
///
/// # Safety
///
/// A returned address must point to an item of the type the name has in
/// the ncurses headers: functions with the declared signature, and for
/// `stdscr`, `curscr` and `newscr` a readable `WINDOW *` variable.
pub unsafe trait SymbolSource {
    /// Address of `name`, or `None` when the symbol is not exported.
    fn symbol(&self, name: &str) -> Option<NonNull<c_void>>;
}

unsafe impl<S: SymbolSource + ?Sized> SymbolSource for &S {
    fn symbol(&self, name: &str) -> Option<NonNull<c_void>> {
        (**self).symbol(name)
    }
}

unsafe impl<S: SymbolSource + ?Sized> SymbolSource for Box<S> {
    fn symbol(&self, name: &str) -> Option<NonNull<c_void>> {
        (**self).symbol(name)
    }
}

/// A native shared library opened with `dlopen`.
///
/// The handle is never closed: window and screen pointers handed out by
/// ncurses stay valid for the rest of the process.
#[derive(Debug)]
pub struct Library {
    handle: NonNull<c_void>,
    path: String,
}

impl Library {
    /// Open `name`.
    ///
    /// A bare name such as `ncursesw` is first tried as the platform file
    /// name (`libncursesw.so`, `libncursesw.dylib`), then as given. Paths
    /// and names that already carry a library suffix are tried as given.
    pub fn open(name: &str) -> std::result::Result<Library, String> {
        let mut last_error = String::from("no file name to try");
        for file in file_names(name) {
            match dlopen(&file) {
                Ok(handle) => return Ok(Library { handle, path: file }),
                Err(reason) => {
                    debug!("dlopen({file}) failed: {reason}");
                    last_error = reason;
                }
            }
        }
        Err(last_error)
    }

    /// File name that was successfully opened.
    pub fn path(&self) -> &str {
        &self.path
    }
}

// SAFETY: dlsym returns the library's own exports.
unsafe impl SymbolSource for Library {
    fn symbol(&self, name: &str) -> Option<NonNull<c_void>> {
        let name = CString::new(name).ok()?;
        // SAFETY: the handle came from a successful dlopen and is never closed.
        NonNull::new(unsafe { libc::dlsym(self.handle.as_ptr(), name.as_ptr()) })
    }
}

fn dlopen(file: &str) -> std::result::Result<NonNull<c_void>, String> {
    let c_file = CString::new(file).map_err(|e| e.to_string())?;
    // SAFETY: c_file is a valid NUL-terminated string.
    let handle = unsafe { libc::dlopen(c_file.as_ptr(), libc::RTLD_LAZY | libc::RTLD_LOCAL) };
    NonNull::new(handle).ok_or_else(dlerror)
}

fn dlerror() -> String {
    // SAFETY: dlerror returns null or a NUL-terminated string owned by libc.
    let msg = unsafe { libc::dlerror() };
    if msg.is_null() {
        "unknown dlopen error".to_string()
    } else {
        unsafe { CStr::from_ptr(msg) }.to_string_lossy().into_owned()
    }
}

#[cfg(target_os = "macos")]
const LIBRARY_SUFFIX: &str = ".dylib";
#[cfg(not(target_os = "macos"))]
const LIBRARY_SUFFIX: &str = ".so";

/// Concrete file names tried for one candidate.
///
/// The unversioned `lib<name>.so` is usually a link installed only by
/// development packages (on Debian a linker script `dlopen` rejects), so
/// its failure reason often appears in [`Error::Load`] even when a
/// versioned soname later in the candidate list opens.
pub fn file_names(name: &str) -> Vec<String> {
    let bare = !name.contains('/') && !name.contains(".so") && !name.ends_with(".dylib");
    if bare {
        let stem = name.strip_prefix("lib").unwrap_or(name);
        vec![format!("lib{stem}{LIBRARY_SUFFIX}"), name.to_string()]
    } else {
        vec![name.to_string()]
    }
}

/// Run the candidate search of `config` through `open`.
///
/// With an explicit library only that name is attempted. Otherwise the
/// candidates are attempted in order and the search stops at the first one
/// that opens. Returns the opened handle and the candidate name.
pub fn load_with<T, F>(config: &LoaderConfig, mut open: F) -> Result<(T, String)>
where
    F: FnMut(&str) -> std::result::Result<T, String>,
{
    let mut attempts = Vec::new();
    for name in config.search_order() {
        debug!("trying ncurses library candidate `{name}`");
        match open(name) {
            Ok(handle) => {
                info!("loaded ncurses library `{name}`");
                return Ok((handle, name.to_string()));
            }
            Err(reason) => attempts.push(LoadAttempt {
                name: name.to_string(),
                reason,
            }),
        }
    }
    Err(Error::Load { attempts })
}

/// Open the configured native library.
pub fn load(config: &LoaderConfig) -> Result<(Library, String)> {
    load_with(config, Library::open)
}
