//! The native entry point table.
//!
//! Each line declares one ncurses function: the name it is exported under,
//! optionally the native symbol when that differs (`box` and `move` are
//! Rust keywords), the parameters and the return kind. From this single
//! declaration the macro generates the [`FUNCTIONS`] descriptor slice, a
//! typed `Option<fn>` slot in [`Functions`], and a calling method that
//! returns [`Error::Unavailable`] when the symbol was not found.
//!
//! Kinds: `int`, `uint` (chtype, attr_t, mmask_t), `short`, `char`, `bool`,
//! `pointer`, `string`, `void`. Variadic functions are exposed as typed
//! C-variadic function pointers since Rust methods cannot forward varargs.

use crate::error::{Error, Result};
use crate::library::SymbolSource;
use crate::registry::UnattachedRegistry;
use crate::signature::{native_kind, native_name, native_ty, FunctionDescriptor};
use libc::c_void;
use log::debug;
use std::ptr::NonNull;

fn resolve<S: SymbolSource + ?Sized>(
    source: &S,
    native: &'static str,
    exported: &'static str,
    unattached: &mut UnattachedRegistry,
) -> Option<NonNull<c_void>> {
    let addr = source.symbol(native);
    if addr.is_none() {
        debug!("`{exported}` not attached: symbol `{native}` not found");
        unattached.insert(exported);
    }
    addr
}

macro_rules! ncurses_functions {
    (
        fixed {
            $( $name:ident $(= $native:literal)? ( $($arg:ident : $kind:ident),* ) -> $ret:ident; )*
        }
        variadic {
            $( $vname:ident ( $($varg:ident : $vkind:ident,)+ ... ) -> $vret:ident; )*
        }
    ) => {
        /// Descriptor of every entry point, in declaration order.
        pub static FUNCTIONS: &[FunctionDescriptor] = &[
            $(
                FunctionDescriptor {
                    native: native_name!($name $(, $native)?),
                    exported: stringify!($name),
                    params: &[$(native_kind!($kind)),*],
                    ret: native_kind!($ret),
                    variadic: false,
                },
            )*
            $(
                FunctionDescriptor {
                    native: stringify!($vname),
                    exported: stringify!($vname),
                    params: &[$(native_kind!($vkind)),+],
                    ret: native_kind!($vret),
                    variadic: true,
                },
            )*
        ];

        /// Entry points attached from a native library.
        ///
        /// Each method calls straight through to the native function. All
        /// of them are `unsafe`: pointers are passed unchecked and most
        /// functions require `initscr` or `newterm` to have been called.
        #[allow(non_snake_case)]
        #[derive(Default)]
        pub struct Functions {
            $( $name: Option<unsafe extern "C" fn($(native_ty!($kind)),*) -> native_ty!($ret)>, )*
            $( $vname: Option<unsafe extern "C" fn($(native_ty!($vkind),)+ ...) -> native_ty!($vret)>, )*
        }

        impl Functions {
            /// Attach every entry of [`FUNCTIONS`] from `source`.
            ///
            /// Missing symbols leave their slot empty and are recorded in
            /// `unattached`; they never stop the remaining entries.
            pub fn attach<S: SymbolSource + ?Sized>(
                source: &S,
                unattached: &mut UnattachedRegistry,
            ) -> Self {
                let mut table = Self::default();
                $(
                    table.$name = resolve(source, native_name!($name $(, $native)?), stringify!($name), unattached)
                        // SAFETY: the declaration above is the native signature.
                        .map(|addr| unsafe { std::mem::transmute::<*mut c_void, _>(addr.as_ptr()) });
                )*
                $(
                    table.$vname = resolve(source, stringify!($vname), stringify!($vname), unattached)
                        // SAFETY: the declaration above is the native signature.
                        .map(|addr| unsafe { std::mem::transmute::<*mut c_void, _>(addr.as_ptr()) });
                )*
                table
            }

            $(
                #[doc = concat!("Native `", stringify!($name), "`.")]
                ///
                /// # Safety
                ///
                /// Arguments are passed to ncurses unchecked.
                #[allow(non_snake_case, clippy::too_many_arguments, clippy::unused_unit)]
                pub unsafe fn $name(&self, $($arg: native_ty!($kind)),*) -> Result<native_ty!($ret)> {
                    match self.$name {
                        Some(f) => Ok(unsafe { f($($arg),*) }),
                        None => Err(Error::Unavailable(stringify!($name))),
                    }
                }
            )*

            $(
                #[doc = concat!("Native variadic `", stringify!($vname), "` as a callable pointer.")]
                pub fn $vname(
                    &self,
                ) -> Result<unsafe extern "C" fn($(native_ty!($vkind),)+ ...) -> native_ty!($vret)> {
                    self.$vname.ok_or(Error::Unavailable(stringify!($vname)))
                }
            )*
        }
    };
}

ncurses_functions! {
    fixed {
        COLOR_PAIR(n: int) -> int;
        PAIR_NUMBER(attrs: int) -> int;
        add_wchnstr(wchstr: pointer, n: int) -> int;
        add_wch(wch: pointer) -> int;
        add_wchstr(wchstr: pointer) -> int;
        addchnstr(chstr: pointer, n: int) -> int;
        addchstr(chstr: pointer) -> int;
        addch(ch: uint) -> int;
        addnstr(s: string, n: int) -> int;
        addstr(s: string) -> int;
        assume_default_colors(fg: int, bg: int) -> int;
        attr_get(attrs: pointer, pair: pointer, opts: pointer) -> int;
        attr_off(attrs: uint, opts: pointer) -> int;
        attr_on(attrs: uint, opts: pointer) -> int;
        attr_set(attrs: uint, pair: short, opts: pointer) -> int;
        attroff(attrs: uint) -> int;
        attron(attrs: uint) -> int;
        attrset(attrs: uint) -> int;
        baudrate() -> int;
        beep() -> int;
        bkgdset(ch: uint) -> void;
        bkgd(ch: uint) -> int;
        bkgrnd(wch: pointer) -> int;
        bkgrndset(wch: pointer) -> void;
        border_set(ls: pointer, rs: pointer, ts: pointer, bs: pointer, tl: pointer, tr: pointer, bl: pointer, br: pointer) -> int;
        border(ls: uint, rs: uint, ts: uint, bs: uint, tl: uint, tr: uint, bl: uint, br: uint) -> int;
        box_set(win: pointer, verch: pointer, horch: pointer) -> int;
        box_ = "box"(win: pointer, verch: uint, horch: uint) -> int;
        can_change_color() -> int;
        cbreak() -> int;
        chgat(n: int, attrs: uint, pair: short, opts: pointer) -> int;
        clear() -> int;
        clearok(win: pointer, bf: int) -> int;
        clrtobot() -> int;
        clrtoeol() -> int;
        color_content(color: short, r: pointer, g: pointer, b: pointer) -> int;
        color_set(pair: short, opts: pointer) -> int;
        copywin(srcwin: pointer, dstwin: pointer, sminrow: int, smincol: int, dminrow: int, dmincol: int, dmaxrow: int, dmaxcol: int, overlay: int) -> int;
        curs_set(visibility: int) -> int;
        curses_version() -> string;
        def_prog_mode() -> int;
        def_shell_mode() -> int;
        define_key(definition: string, keycode: int) -> int;
        delay_output(ms: int) -> int;
        delch() -> int;
        deleteln() -> int;
        delscreen(sp: pointer) -> void;
        delwin(win: pointer) -> int;
        derwin(orig: pointer, nlines: int, ncols: int, begin_y: int, begin_x: int) -> pointer;
        doupdate() -> int;
        dupwin(win: pointer) -> pointer;
        echo_wchar(wch: pointer) -> int;
        echochar(ch: uint) -> int;
        echo() -> int;
        endwin() -> int;
        erasechar() -> char;
        erase() -> int;
        filter() -> void;
        flash() -> int;
        flushinp() -> int;
        getbkgd(win: pointer) -> uint;
        getbkgrnd(wch: pointer) -> int;
        getch() -> int;
        getattrs(win: pointer) -> int;
        getcurx(win: pointer) -> int;
        getcury(win: pointer) -> int;
        getbegx(win: pointer) -> int;
        getbegy(win: pointer) -> int;
        getmaxx(win: pointer) -> int;
        getmaxy(win: pointer) -> int;
        getparx(win: pointer) -> int;
        getpary(win: pointer) -> int;
        getmouse(event: pointer) -> int;
        getnstr(s: string, n: int) -> int;
        getstr(s: string) -> int;
        getwin(filep: pointer) -> pointer;
        halfdelay(tenths: int) -> int;
        has_colors() -> int;
        has_ic() -> int;
        has_il() -> int;
        has_key(keycode: int) -> int;
        has_mouse() -> bool;
        hline_set(wch: pointer, n: int) -> int;
        hline(ch: uint, n: int) -> int;
        idcok(win: pointer, bf: int) -> void;
        idlok(win: pointer, bf: int) -> int;
        immedok(win: pointer, bf: int) -> void;
        in_wchnstr(wchstr: pointer, n: int) -> int;
        in_wch(wch: pointer) -> int;
        in_wchstr(wchstr: pointer) -> int;
        inchnstr(chstr: pointer, n: int) -> int;
        inchstr(chstr: pointer) -> int;
        inch() -> uint;
        init_color(color: short, r: short, g: short, b: short) -> int;
        init_pair(pair: short, fg: short, bg: short) -> int;
        raw_initscr = "initscr"() -> pointer;
        innstr(s: string, n: int) -> int;
        ins_wch(wch: pointer) -> int;
        insch(ch: uint) -> int;
        insdelln(n: int) -> int;
        insertln() -> int;
        insnstr(s: string, n: int) -> int;
        insstr(s: string) -> int;
        instr(s: string) -> int;
        intrflush(win: pointer, bf: int) -> int;
        is_idcok(win: pointer) -> bool;
        is_idlok(win: pointer) -> bool;
        is_immedok(win: pointer) -> bool;
        is_keypad(win: pointer) -> bool;
        is_leaveok(win: pointer) -> bool;
        is_linetouched(win: pointer, line: int) -> int;
        is_nodelay(win: pointer) -> bool;
        is_notimeout(win: pointer) -> bool;
        is_pad(win: pointer) -> bool;
        is_scrollok(win: pointer) -> bool;
        is_subwin(win: pointer) -> bool;
        is_syncok(win: pointer) -> bool;
        is_term_resized(lines: int, cols: int) -> int;
        is_wintouched(win: pointer) -> int;
        isendwin() -> int;
        key_defined(definition: string) -> int;
        keybound(keycode: int, count: int) -> string;
        keyname(c: int) -> string;
        keyok(keycode: int, enable: int) -> int;
        keypad(win: pointer, bf: int) -> int;
        killchar() -> char;
        leaveok(win: pointer, bf: int) -> int;
        longname() -> string;
        mcprint(data: string, len: int) -> int;
        meta(win: pointer, bf: int) -> int;
        mouse_trafo(py: pointer, px: pointer, to_screen: int) -> int;
        mouseinterval(erval: int) -> int;
        mousemask(newmask: uint, oldmask: pointer) -> uint;
        mv = "move"(y: int, x: int) -> int;
        mvadd_wch(y: int, x: int, wch: pointer) -> int;
        mvadd_wchnstr(y: int, x: int, wchstr: pointer, n: int) -> int;
        mvadd_wchstr(y: int, x: int, wchstr: pointer) -> int;
        mvaddch(y: int, x: int, ch: uint) -> int;
        mvaddchnstr(y: int, x: int, chstr: pointer, n: int) -> int;
        mvaddchstr(y: int, x: int, chstr: pointer) -> int;
        mvaddnstr(y: int, x: int, s: string, n: int) -> int;
        mvaddstr(y: int, x: int, s: string) -> int;
        mvchgat(y: int, x: int, n: int, attrs: uint, pair: short, opts: pointer) -> int;
        mvcur(oldrow: int, oldcol: int, newrow: int, newcol: int) -> int;
        mvdelch(y: int, x: int) -> int;
        mvderwin(win: pointer, par_y: int, par_x: int) -> int;
        mvgetch(y: int, x: int) -> int;
        mvgetnstr(y: int, x: int, s: string, n: int) -> int;
        mvgetstr(y: int, x: int, s: string) -> int;
        mvhline_set(y: int, x: int, wch: pointer, n: int) -> int;
        mvhline(y: int, x: int, ch: uint, n: int) -> int;
        mvin_wch(y: int, x: int, wch: pointer) -> int;
        mvin_wchnstr(y: int, x: int, wchstr: pointer, n: int) -> int;
        mvin_wchstr(y: int, x: int, wchstr: pointer) -> int;
        mvinch(y: int, x: int) -> uint;
        mvinchnstr(y: int, x: int, chstr: pointer, n: int) -> int;
        mvinchstr(y: int, x: int, chstr: pointer) -> int;
        mvinnstr(y: int, x: int, s: string, n: int) -> int;
        mvins_wch(y: int, x: int, wch: pointer) -> int;
        mvinsch(y: int, x: int, ch: uint) -> int;
        mvinsnstr(y: int, x: int, s: string, n: int) -> int;
        mvinsstr(y: int, x: int, s: string) -> int;
        mvinstr(y: int, x: int, s: string) -> int;
        mvvline_set(y: int, x: int, wch: pointer, n: int) -> int;
        mvvline(y: int, x: int, ch: uint, n: int) -> int;
        mvwadd_wchnstr(win: pointer, y: int, x: int, wchstr: pointer, n: int) -> int;
        mvwadd_wch(win: pointer, y: int, x: int, wch: pointer) -> int;
        mvwadd_wchstr(win: pointer, y: int, x: int, wchstr: pointer) -> int;
        mvwaddchnstr(win: pointer, y: int, x: int, chstr: pointer, n: int) -> int;
        mvwaddch(win: pointer, y: int, x: int, ch: uint) -> int;
        mvwaddchstr(win: pointer, y: int, x: int, chstr: pointer) -> int;
        mvwaddnstr(win: pointer, y: int, x: int, s: string, n: int) -> int;
        mvwaddstr(win: pointer, y: int, x: int, s: string) -> int;
        mvwchgat(win: pointer, y: int, x: int, n: int, attrs: uint, pair: short, opts: pointer) -> int;
        mvwdelch(win: pointer, y: int, x: int) -> int;
        mvwgetch(win: pointer, y: int, x: int) -> int;
        mvwgetnstr(win: pointer, y: int, x: int, s: string, n: int) -> int;
        mvwgetstr(win: pointer, y: int, x: int, s: string) -> int;
        mvwhline_set(win: pointer, y: int, x: int, wch: pointer, n: int) -> int;
        mvwhline(win: pointer, y: int, x: int, ch: uint, n: int) -> int;
        mvwin_wchnstr(win: pointer, y: int, x: int, wchstr: pointer, n: int) -> int;
        mvwin_wch(win: pointer, y: int, x: int, wch: pointer) -> int;
        mvwin_wchstr(win: pointer, y: int, x: int, wchstr: pointer) -> int;
        mvwinchnstr(win: pointer, y: int, x: int, chstr: pointer, n: int) -> int;
        mvwinch(win: pointer, y: int, x: int) -> uint;
        mvwinchstr(win: pointer, y: int, x: int, chstr: pointer) -> int;
        mvwinnstr(win: pointer, y: int, x: int, s: string, n: int) -> int;
        mvwin(win: pointer, y: int, x: int) -> int;
        mvwins_wch(win: pointer, y: int, x: int, wch: pointer) -> int;
        mvwinsch(win: pointer, y: int, x: int, ch: uint) -> int;
        mvwinsnstr(win: pointer, y: int, x: int, s: string, n: int) -> int;
        mvwinsstr(win: pointer, y: int, x: int, s: string) -> int;
        mvwinstr(win: pointer, y: int, x: int, s: string) -> int;
        mvwvline_set(win: pointer, y: int, x: int, wch: pointer, n: int) -> int;
        mvwvline(win: pointer, y: int, x: int, ch: uint, n: int) -> int;
        napms(ms: int) -> int;
        newpad(nlines: int, ncols: int) -> pointer;
        newterm(term_type: string, outfd: pointer, infd: pointer) -> pointer;
        newwin(nlines: int, ncols: int, begin_y: int, begin_x: int) -> pointer;
        nl() -> int;
        nocbreak() -> int;
        nodelay(win: pointer, bf: int) -> int;
        noecho() -> int;
        nonl() -> int;
        noqiflush() -> void;
        noraw() -> int;
        notimeout(win: pointer, bf: int) -> int;
        overlay(srcwin: pointer, dstwin: pointer) -> int;
        overwrite(srcwin: pointer, dstwin: pointer) -> int;
        pair_content(pair: short, fg: pointer, bg: pointer) -> int;
        pecho_wchar(pad: pointer, wch: pointer) -> int;
        pechochar(pad: pointer, ch: uint) -> int;
        pnoutrefresh(pad: pointer, pminrow: int, pmincol: int, sminrow: int, smincol: int, smaxrow: int, smaxcol: int) -> int;
        prefresh(pad: pointer, pminrow: int, pmincol: int, sminrow: int, smincol: int, smaxrow: int, smaxcol: int) -> int;
        putp(s: string) -> int;
        putwin(win: pointer, filep: pointer) -> int;
        qiflush() -> void;
        raw() -> int;
        redrawwin(win: pointer) -> int;
        refresh() -> int;
        reset_prog_mode() -> int;
        reset_shell_mode() -> int;
        resetty() -> int;
        resize_term(lines: int, cols: int) -> int;
        resizeterm(lines: int, cols: int) -> int;
        ripoffline(line: int, init: pointer) -> int;
        savetty() -> int;
        scr_dump(filename: string) -> int;
        scr_init(filename: string) -> int;
        scr_restore(filename: string) -> int;
        scr_set(filename: string) -> int;
        scrl(n: int) -> int;
        scrollok(win: pointer, bf: int) -> int;
        scroll(win: pointer) -> int;
        set_term(new: pointer) -> pointer;
        setscrreg(top: int, bot: int) -> int;
        slk_attr_off(attrs: uint, opts: pointer) -> int;
        slk_attr_on(attrs: uint, opts: pointer) -> int;
        slk_attr_set(attrs: uint, pair: short, opts: pointer) -> int;
        slk_attroff(attrs: uint) -> int;
        slk_attron(attrs: uint) -> int;
        slk_attrset(attrs: uint) -> int;
        slk_attr() -> uint;
        slk_clear() -> int;
        slk_color(pair: short) -> int;
        slk_init(fmt: int) -> int;
        slk_label(labnum: int) -> string;
        slk_noutrefresh() -> int;
        slk_refresh() -> int;
        slk_restore() -> int;
        slk_set(labnum: int, label: string, fmt: int) -> int;
        slk_touch() -> int;
        standend() -> int;
        standout() -> int;
        start_color() -> int;
        subpad(orig: pointer, nlines: int, ncols: int, begin_y: int, begin_x: int) -> pointer;
        subwin(orig: pointer, nlines: int, ncols: int, begin_y: int, begin_x: int) -> pointer;
        syncok(win: pointer, bf: int) -> int;
        term_attrs() -> uint;
        termattrs() -> uint;
        termname() -> string;
        tigetflag(capname: string) -> int;
        tigetnum(capname: string) -> int;
        tigetstr(capname: string) -> string;
        timeout(delay: int) -> void;
        touchline(win: pointer, start: int, count: int) -> int;
        touchwin(win: pointer) -> int;
        typeahead(fd: int) -> int;
        ungetch(ch: int) -> int;
        ungetmouse(event: pointer) -> int;
        untouchwin(win: pointer) -> int;
        use_default_colors() -> int;
        use_env(bf: int) -> void;
        use_extended_names(enable: int) -> int;
        vid_attr(attrs: uint, pair: short, opts: pointer) -> int;
        vid_puts(attrs: uint, pair: short, opts: pointer, putc: pointer) -> int;
        vidattr(attrs: uint) -> int;
        vidputs(attrs: uint, putc: pointer) -> int;
        vline_set(wch: pointer, n: int) -> int;
        vline(ch: uint, n: int) -> int;
        wadd_wchnstr(win: pointer, wchstr: pointer, n: int) -> int;
        wadd_wch(win: pointer, wch: pointer) -> int;
        wadd_wchstr(win: pointer, wchstr: pointer) -> int;
        waddchnstr(win: pointer, chstr: pointer, n: int) -> int;
        waddch(win: pointer, ch: uint) -> int;
        waddchstr(win: pointer, chstr: pointer) -> int;
        waddnstr(win: pointer, s: string, n: int) -> int;
        waddstr(win: pointer, s: string) -> int;
        wattr_get(win: pointer, attrs: pointer, pair: pointer, opts: pointer) -> int;
        wattr_off(win: pointer, attrs: uint, opts: pointer) -> int;
        wattr_on(win: pointer, attrs: uint, opts: pointer) -> int;
        wattr_set(win: pointer, attrs: uint, pair: short, opts: pointer) -> int;
        wattroff(win: pointer, attrs: int) -> int;
        wattron(win: pointer, attrs: int) -> int;
        wattrset(win: pointer, attrs: int) -> int;
        wbkgd(win: pointer, ch: uint) -> int;
        wbkgdset(win: pointer, ch: uint) -> void;
        wbkgrnd(win: pointer, wch: pointer) -> int;
        wbkgrndset(win: pointer, wch: pointer) -> void;
        wborder_set(win: pointer, ls: pointer, rs: pointer, ts: pointer, bs: pointer, tl: pointer, tr: pointer, bl: pointer, br: pointer) -> int;
        wborder(win: pointer, ls: uint, rs: uint, ts: uint, bs: uint, tl: uint, tr: uint, bl: uint, br: uint) -> int;
        wchgat(win: pointer, n: int, attrs: uint, pair: short, opts: pointer) -> int;
        wclear(win: pointer) -> int;
        wclrtobot(win: pointer) -> int;
        wclrtoeol(win: pointer) -> int;
        wcolor_set(win: pointer, pair: short, opts: pointer) -> int;
        wcursyncup(win: pointer) -> void;
        wdelch(win: pointer) -> int;
        wdeleteln(win: pointer) -> int;
        wecho_wchar(win: pointer, wch: pointer) -> int;
        wechochar(win: pointer, ch: uint) -> int;
        wenclose(win: pointer, y: int, x: int) -> int;
        werase(win: pointer) -> int;
        wgetbkgrnd(win: pointer, wch: pointer) -> int;
        wgetch(win: pointer) -> int;
        wgetnstr(win: pointer, s: string, n: int) -> int;
        wgetparent(win: pointer) -> pointer;
        wgetstr(win: pointer, s: string) -> int;
        whline_set(win: pointer, wch: pointer, n: int) -> int;
        whline(win: pointer, ch: uint, n: int) -> int;
        win_wchnstr(win: pointer, wchstr: pointer, n: int) -> int;
        win_wch(win: pointer, wch: pointer) -> int;
        win_wchstr(win: pointer, wchstr: pointer) -> int;
        winchnstr(win: pointer, chstr: pointer, n: int) -> int;
        winch(win: pointer) -> uint;
        winchstr(win: pointer, chstr: pointer) -> int;
        winnstr(win: pointer, s: string, n: int) -> int;
        wins_wch(win: pointer, wch: pointer) -> int;
        winsch(win: pointer, ch: uint) -> int;
        winsdelln(win: pointer, n: int) -> int;
        winsertln(win: pointer) -> int;
        winsnstr(win: pointer, s: string, n: int) -> int;
        winsstr(win: pointer, s: string) -> int;
        winstr(win: pointer, s: string) -> int;
        wmouse_trafo(win: pointer, py: pointer, px: pointer, to_screen: int) -> bool;
        wmove(win: pointer, y: int, x: int) -> int;
        wnoutrefresh(win: pointer) -> int;
        wredrawln(win: pointer, beg_line: int, num_lines: int) -> int;
        wrefresh(win: pointer) -> int;
        wresize(win: pointer, lines: int, cols: int) -> int;
        wscrl(win: pointer, n: int) -> int;
        wsetscrreg(win: pointer, top: int, bot: int) -> int;
        wstandend(win: pointer) -> int;
        wstandout(win: pointer) -> int;
        wsyncdown(win: pointer) -> void;
        wsyncup(win: pointer) -> void;
        wtimeout(win: pointer, delay: int) -> void;
        wtouchln(win: pointer, y: int, n: int, changed: int) -> int;
        wvline_set(win: pointer, wch: pointer, n: int) -> int;
        wvline(win: pointer, ch: uint, n: int) -> int;
    }
    variadic {
        mvprintw(y: int, x: int, fmt: string, ...) -> int;
        mvscanw(y: int, x: int, fmt: string, ...) -> int;
        mvwprintw(win: pointer, y: int, x: int, fmt: string, ...) -> int;
        mvwscanw(win: pointer, y: int, x: int, fmt: string, ...) -> int;
        printw(fmt: string, ...) -> int;
        scanw(fmt: string, ...) -> int;
        tparm(s: string, ...) -> string;
        wprintw(win: pointer, fmt: string, ...) -> int;
        wscanw(win: pointer, fmt: string, ...) -> int;
    }
}

impl std::fmt::Debug for Functions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Functions")
            .field("declared", &FUNCTIONS.len())
            .finish_non_exhaustive()
    }
}

/// Descriptor of the entry point exported as `name`.
pub fn descriptor(name: &str) -> Option<&'static FunctionDescriptor> {
    FUNCTIONS.iter().find(|d| d.exported == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::NativeKind;
    use std::collections::HashSet;

    struct Nothing;

    unsafe impl SymbolSource for Nothing {
        fn symbol(&self, _name: &str) -> Option<NonNull<c_void>> {
            None
        }
    }

    #[test]
    fn test_exported_names_unique_and_non_empty() {
        let mut seen = HashSet::new();
        for desc in FUNCTIONS {
            assert!(!desc.exported.is_empty());
            assert!(!desc.native.is_empty());
            assert!(seen.insert(desc.exported), "duplicate {}", desc.exported);
        }
    }

    #[test]
    fn test_renamed_entries() {
        assert_eq!(descriptor("box_").unwrap().native, "box");
        assert_eq!(descriptor("mv").unwrap().native, "move");
        assert_eq!(descriptor("raw_initscr").unwrap().native, "initscr");
        assert!(descriptor("box").is_none());
    }

    #[test]
    fn test_declared_kinds() {
        let wmove = descriptor("wmove").unwrap();
        assert_eq!(
            wmove.params,
            &[NativeKind::Pointer, NativeKind::Int, NativeKind::Int]
        );
        assert_eq!(descriptor("erasechar").unwrap().ret, NativeKind::Char);
        assert_eq!(descriptor("timeout").unwrap().ret, NativeKind::Void);
        assert_eq!(descriptor("keyname").unwrap().ret, NativeKind::String);

        let printw = descriptor("mvwprintw").unwrap();
        assert!(printw.variadic);
        assert_eq!(printw.params.len(), 4);
        assert!(FUNCTIONS.iter().filter(|d| d.variadic).all(|d| !d.params.is_empty()));
    }

    #[test]
    fn test_attach_against_empty_source() {
        let mut unattached = UnattachedRegistry::default();
        let functions = Functions::attach(&Nothing, &mut unattached);
        assert_eq!(unattached.len(), FUNCTIONS.len());
        assert_eq!(
            unsafe { functions.beep() },
            Err(Error::Unavailable("beep"))
        );
        assert_eq!(functions.printw().err(), Some(Error::Unavailable("printw")));
    }
}
