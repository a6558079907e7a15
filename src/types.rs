//! Native type definitions.
//!
//! Aliases for the C types that appear in the ncurses headers, the opaque
//! handle types, and the layout of the `WINDOW` structure for platforms
//! where window queries are header macros rather than exported functions.

#![allow(non_camel_case_types)]

use libc::{c_int, c_short, c_uchar, c_uint, c_void};

/// Character type with embedded attributes.
///
/// Bits 0-7 hold the character, bits 8-31 hold attributes and the color pair.
pub type chtype = c_uint;

/// Attribute type. Same width as `chtype`.
pub type attr_t = chtype;

/// Mouse event mask type.
pub type mmask_t = c_uint;

/// Native boolean as returned by the `is_*` queries.
pub type NCURSES_BOOL = c_uchar;

/// Opaque native window.
///
/// Always handled through `*mut WINDOW`; the binding never owns one.
pub type WINDOW = c_void;

/// Opaque native screen (terminal) handle.
pub type SCREEN = c_void;

/// OK return value (success).
pub const OK: c_int = 0;

/// ERR return value (failure).
pub const ERR: c_int = -1;

/// Native TRUE.
pub const TRUE: c_int = 1;

/// Native FALSE.
pub const FALSE: c_int = 0;

/// Size type used for window coordinates inside `WINDOW`.
pub type NCURSES_SIZE_T = c_short;

/// Padding information of a pad window.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PadData {
    /// Pad row shown at the top of the refresh area.
    pub pad_y: NCURSES_SIZE_T,
    /// Pad column shown at the left of the refresh area.
    pub pad_x: NCURSES_SIZE_T,
    /// Screen row of the refresh area.
    pub pad_top: NCURSES_SIZE_T,
    /// Screen column of the refresh area.
    pub pad_left: NCURSES_SIZE_T,
    /// Last screen row of the refresh area.
    pub pad_bottom: NCURSES_SIZE_T,
    /// Last screen column of the refresh area.
    pub pad_right: NCURSES_SIZE_T,
}

/// Leading fields of the ncurses `struct _win_st`.
///
/// Only the prefix that the window macros read is mirrored; the native
/// structure continues past `yoffset`, so values of this type must only be
/// read through pointers handed out by the library.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct WindowStruct {
    /// Cursor row.
    pub cury: NCURSES_SIZE_T,
    /// Cursor column.
    pub curx: NCURSES_SIZE_T,
    /// Last row index (height - 1).
    pub maxy: NCURSES_SIZE_T,
    /// Last column index (width - 1).
    pub maxx: NCURSES_SIZE_T,
    /// Screen row of the upper-left corner.
    pub begy: NCURSES_SIZE_T,
    /// Screen column of the upper-left corner.
    pub begx: NCURSES_SIZE_T,
    /// Window state flags.
    pub flags: c_short,
    /// Current attributes for non-blank characters.
    pub attrs: attr_t,
    /// Background character and attributes.
    pub bkgd: chtype,
    /// No timeout on function-key entry.
    pub notimeout: NCURSES_BOOL,
    /// Clear on next refresh.
    pub clear: NCURSES_BOOL,
    /// Cursor may be left anywhere after refresh.
    pub leaveok: NCURSES_BOOL,
    /// Scrolling enabled.
    pub scroll: NCURSES_BOOL,
    /// Hardware insert/delete line allowed.
    pub idlok: NCURSES_BOOL,
    /// Hardware insert/delete character allowed.
    pub idcok: NCURSES_BOOL,
    /// Immediate refresh mode.
    pub immed: NCURSES_BOOL,
    /// Sync with ancestors on change.
    pub sync: NCURSES_BOOL,
    /// Function keys are translated to `KEY_*` codes.
    pub use_keypad: NCURSES_BOOL,
    /// Input delay: 0 nodelay, negative blocking, positive milliseconds.
    pub delay: c_int,
    /// Line data.
    pub line: *mut c_void,
    /// Top line of the scrolling region.
    pub regtop: NCURSES_SIZE_T,
    /// Bottom line of the scrolling region.
    pub regbottom: NCURSES_SIZE_T,
    /// Column relative to the parent window.
    pub parx: c_int,
    /// Row relative to the parent window.
    pub pary: c_int,
    /// Parent window, null unless this is a subwindow.
    pub parent: *mut WINDOW,
    /// Pad refresh area.
    pub pad: PadData,
    /// Offset of the window from the physical screen top.
    pub yoffset: NCURSES_SIZE_T,
}

impl Default for WindowStruct {
    fn default() -> Self {
        Self {
            cury: 0,
            curx: 0,
            maxy: 0,
            maxx: 0,
            begy: 0,
            begx: 0,
            flags: 0,
            attrs: 0,
            bkgd: 0,
            notimeout: 0,
            clear: 0,
            leaveok: 0,
            scroll: 0,
            idlok: 0,
            idcok: 0,
            immed: 0,
            sync: 0,
            use_keypad: 0,
            delay: -1,
            line: std::ptr::null_mut(),
            regtop: 0,
            regbottom: 0,
            parx: -1,
            pary: -1,
            parent: std::ptr::null_mut(),
            pad: PadData::default(),
            yoffset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn test_window_struct_prefix_layout() {
        assert_eq!(offset_of!(WindowStruct, flags), 12);
        assert_eq!(offset_of!(WindowStruct, attrs), 16);
        assert_eq!(offset_of!(WindowStruct, bkgd), 20);
        assert_eq!(offset_of!(WindowStruct, leaveok), 26);
        assert_eq!(offset_of!(WindowStruct, delay), 36);
    }

    #[test]
    fn test_native_widths() {
        assert_eq!(size_of::<chtype>(), 4);
        assert_eq!(size_of::<NCURSES_BOOL>(), 1);
        assert_eq!(size_of::<*mut WINDOW>(), size_of::<usize>());
    }
}
