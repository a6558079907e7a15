//! Window queries answered from the `WINDOW` structure.
//!
//! Some ncurses builds (notably the one shipped with Mac OS X) implement
//! `getcurx`, `getmaxy` and the other window queries only as header macros
//! that read the structure directly, so there is no symbol to attach. This
//! table lists those macros and the structure field each one reads.

use crate::attr::A_NORMAL;
use crate::types::{WindowStruct, ERR, FALSE, WINDOW};
use libc::c_int;

/// Structure field read by a window macro.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowField {
    /// `_cury`.
    CurY,
    /// `_curx`.
    CurX,
    /// `_begy`.
    BegY,
    /// `_begx`.
    BegX,
    /// `_maxy + 1`.
    MaxY,
    /// `_maxx + 1`.
    MaxX,
    /// `_pary`.
    ParY,
    /// `_parx`.
    ParX,
    /// `_attrs`.
    Attrs,
    /// `_bkgd`.
    Bkgd,
    /// `_leaveok`.
    LeaveOk,
}

impl WindowField {
    /// Value the header macro yields for a null window.
    pub const fn null_value(self) -> c_int {
        match self {
            WindowField::Attrs => A_NORMAL as c_int,
            WindowField::Bkgd => 0,
            WindowField::LeaveOk => FALSE,
            _ => ERR,
        }
    }

    /// Read the field the way the header macro does.
    ///
    /// `_attrs` and `_bkgd` are returned bit-for-bit as `int`.
    ///
    /// # Safety
    ///
    /// `win` must be null or point to a live ncurses `WINDOW`.
    pub unsafe fn read(self, win: *const WINDOW) -> c_int {
        let Some(w) = (unsafe { win.cast::<WindowStruct>().as_ref() }) else {
            return self.null_value();
        };
        match self {
            WindowField::CurY => c_int::from(w.cury),
            WindowField::CurX => c_int::from(w.curx),
            WindowField::BegY => c_int::from(w.begy),
            WindowField::BegX => c_int::from(w.begx),
            WindowField::MaxY => c_int::from(w.maxy) + 1,
            WindowField::MaxX => c_int::from(w.maxx) + 1,
            WindowField::ParY => w.pary,
            WindowField::ParX => w.parx,
            WindowField::Attrs => w.attrs as c_int,
            WindowField::Bkgd => w.bkgd as c_int,
            WindowField::LeaveOk => c_int::from(w.leaveok != 0),
        }
    }
}

/// A header macro standing in for an exported function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MacroDescriptor {
    /// Exported name of the function it replaces.
    pub exported: &'static str,
    /// Field read.
    pub field: WindowField,
}

/// Window macros, keyed by the function they stand in for.
pub static WINDOW_MACROS: &[MacroDescriptor] = &[
    MacroDescriptor { exported: "getcury", field: WindowField::CurY },
    MacroDescriptor { exported: "getcurx", field: WindowField::CurX },
    MacroDescriptor { exported: "getbegy", field: WindowField::BegY },
    MacroDescriptor { exported: "getbegx", field: WindowField::BegX },
    MacroDescriptor { exported: "getmaxy", field: WindowField::MaxY },
    MacroDescriptor { exported: "getmaxx", field: WindowField::MaxX },
    MacroDescriptor { exported: "getpary", field: WindowField::ParY },
    MacroDescriptor { exported: "getparx", field: WindowField::ParX },
    MacroDescriptor { exported: "getattrs", field: WindowField::Attrs },
    MacroDescriptor { exported: "getbkgd", field: WindowField::Bkgd },
    MacroDescriptor { exported: "is_leaveok", field: WindowField::LeaveOk },
];

/// Macro standing in for `exported`, if any.
pub fn window_macro(exported: &str) -> Option<&'static MacroDescriptor> {
    WINDOW_MACROS.iter().find(|m| m.exported == exported)
}
