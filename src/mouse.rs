//! Mouse events and button masks.
//!
//! Masks follow the version 2 mouse interface of ncurses 6, where each
//! button owns five bits and the modifiers sit above button 5.

use crate::types::mmask_t;
use libc::{c_int, c_short};

/// `MEVENT`, filled in by `getmouse`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MEVENT {
    /// Device id.
    pub id: c_short,
    /// Column.
    pub x: c_int,
    /// Row.
    pub y: c_int,
    /// Unused by ncurses.
    pub z: c_int,
    /// Button state bits.
    pub bstate: mmask_t,
}

impl MEVENT {
    /// True when any bit of `mask` is set in the event.
    pub fn has(&self, mask: mmask_t) -> bool {
        self.bstate & mask != 0
    }
}

const RELEASED: mmask_t = 0o01;
const PRESSED: mmask_t = 0o02;
const CLICKED: mmask_t = 0o04;
const DOUBLE_CLICKED: mmask_t = 0o10;
const TRIPLE_CLICKED: mmask_t = 0o20;

/// `NCURSES_MOUSE_MASK(b, m)`. Buttons are numbered from 1; 6 selects the
/// modifier and motion bits.
const fn mouse_mask_bits(button: u32, mask: mmask_t) -> mmask_t {
    mask << ((button - 1) * 5)
}

macro_rules! button_masks {
    ($( $button:literal => $released:ident $pressed:ident $clicked:ident $double:ident $triple:ident; )*) => {
        $(
            #[doc = concat!("Button ", $button, " released.")]
            pub const $released: mmask_t = mouse_mask_bits($button, RELEASED);
            #[doc = concat!("Button ", $button, " pressed.")]
            pub const $pressed: mmask_t = mouse_mask_bits($button, PRESSED);
            #[doc = concat!("Button ", $button, " clicked.")]
            pub const $clicked: mmask_t = mouse_mask_bits($button, CLICKED);
            #[doc = concat!("Button ", $button, " double clicked.")]
            pub const $double: mmask_t = mouse_mask_bits($button, DOUBLE_CLICKED);
            #[doc = concat!("Button ", $button, " triple clicked.")]
            pub const $triple: mmask_t = mouse_mask_bits($button, TRIPLE_CLICKED);
        )*
    };
}

button_masks! {
    1 => BUTTON1_RELEASED BUTTON1_PRESSED BUTTON1_CLICKED BUTTON1_DOUBLE_CLICKED BUTTON1_TRIPLE_CLICKED;
    2 => BUTTON2_RELEASED BUTTON2_PRESSED BUTTON2_CLICKED BUTTON2_DOUBLE_CLICKED BUTTON2_TRIPLE_CLICKED;
    3 => BUTTON3_RELEASED BUTTON3_PRESSED BUTTON3_CLICKED BUTTON3_DOUBLE_CLICKED BUTTON3_TRIPLE_CLICKED;
    4 => BUTTON4_RELEASED BUTTON4_PRESSED BUTTON4_CLICKED BUTTON4_DOUBLE_CLICKED BUTTON4_TRIPLE_CLICKED;
    5 => BUTTON5_RELEASED BUTTON5_PRESSED BUTTON5_CLICKED BUTTON5_DOUBLE_CLICKED BUTTON5_TRIPLE_CLICKED;
}

/// Control held.
pub const BUTTON_CTRL: mmask_t = mouse_mask_bits(6, 0o01);
/// Shift held.
pub const BUTTON_SHIFT: mmask_t = mouse_mask_bits(6, 0o02);
/// Alt held.
pub const BUTTON_ALT: mmask_t = mouse_mask_bits(6, 0o04);
/// Motion reports.
pub const REPORT_MOUSE_POSITION: mmask_t = mouse_mask_bits(6, 0o10);
/// Every button event and modifier, without motion reports.
pub const ALL_MOUSE_EVENTS: mmask_t = REPORT_MOUSE_POSITION - 1;
