//! # ncurses-ffi
//!
//! Runtime bindings to the system ncurses library.
//!
//! The native library is located with `dlopen` when the binding is built,
//! and each entry point of the ncurses C API is attached by name. Entry
//! points missing from the loaded library are recorded rather than
//! failing the load; calling one yields [`Error::Unavailable`].
//!
//! ## Configuration
//!
//! - `NCURSES_FFI_LIB`: load exactly this library instead of searching
//!   `ncursesw`, `ncurses`, `libncursesw.so.6`, `libncurses.so.6`,
//!   `libncurses.so.5` and `XCurses` in order.
//! - `NCURSES_FFI_PROFILE`: force a capability profile (`standard`,
//!   `no-symbols`, `window-struct`).
//!
//! ## Example
//!
//! ```rust,no_run
//! use ncurses::*;
//!
//! fn main() -> Result<()> {
//!     let nc = Ncurses::load_from_env()?;
//!
//!     unsafe {
//!         let win = nc.initscr()?;
//!         nc.start_color()?;
//!         nc.init_pair(1, COLOR_RED, COLOR_BLACK)?;
//!         nc.attron(color_pair(1) | A_BOLD)?;
//!         nc.addstr_str("Hello, ncurses!")?;
//!
//!         let (rows, cols) = nc.getmaxyx(win)?;
//!         nc.mvwaddstr_str(win, rows - 1, 0, &format!("{rows}x{cols}"))?;
//!
//!         nc.refresh()?;
//!         nc.getch()?;
//!         nc.endwin()?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ncurses is not thread-safe; [`Ncurses`] is neither `Send` nor `Sync`.

#![warn(missing_docs)]

pub mod attr;
pub mod binding;
pub mod color;
pub mod config;
pub mod emulation;
pub mod error;
pub mod functions;
pub mod key;
pub mod library;
pub mod mouse;
pub mod registry;
pub mod signature;
pub mod symbols;
pub mod types;
pub mod winstruct;

pub use attr::*;
pub use binding::Ncurses;
pub use color::*;
pub use config::{Capabilities, LoaderConfig};
pub use error::{Error, IntoResult, Result};
pub use functions::{descriptor, Functions, FUNCTIONS};
pub use key::*;
pub use library::{Library, SymbolSource};
pub use mouse::*;
pub use registry::UnattachedRegistry;
pub use signature::{FunctionDescriptor, NativeKind};
pub use types::*;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
