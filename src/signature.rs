//! Function descriptors.
//!
//! Every native entry point is described by its native symbol name, the
//! name it is exported under, and the ordered kinds of its parameters and
//! return value. The descriptor table in [`crate::functions`] is generated
//! from the same declarations as the typed function pointers, so the two
//! cannot drift apart.

/// Semantic type of a parameter or return value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NativeKind {
    /// `int`.
    Int,
    /// `unsigned int` (`chtype`, `attr_t`, `mmask_t`).
    UInt,
    /// `short` (colors and pairs).
    Short,
    /// `char`.
    Char,
    /// `bool` as returned by the `is_*` queries.
    Bool,
    /// Any pointer (windows, screens, buffers, out-parameters).
    Pointer,
    /// NUL-terminated C string.
    String,
    /// No value. Only valid as a return kind.
    Void,
}

impl NativeKind {
    /// Name as written in the declaration tables.
    pub const fn as_str(self) -> &'static str {
        match self {
            NativeKind::Int => "int",
            NativeKind::UInt => "uint",
            NativeKind::Short => "short",
            NativeKind::Char => "char",
            NativeKind::Bool => "bool",
            NativeKind::Pointer => "pointer",
            NativeKind::String => "string",
            NativeKind::Void => "void",
        }
    }
}

/// Static description of one native entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FunctionDescriptor {
    /// Symbol looked up in the native library.
    pub native: &'static str,
    /// Name the entry point is exposed under.
    pub exported: &'static str,
    /// Fixed parameters in call order.
    pub params: &'static [NativeKind],
    /// Return kind.
    pub ret: NativeKind,
    /// Whether C varargs follow the fixed parameters.
    pub variadic: bool,
}

impl FunctionDescriptor {
    /// C-like rendering of the signature, e.g. `int wmove(pointer, int, int)`.
    pub fn signature(&self) -> String {
        let mut params: Vec<&str> = self.params.iter().map(|k| k.as_str()).collect();
        if self.variadic {
            params.push("...");
        }
        format!("{} {}({})", self.ret.as_str(), self.native, params.join(", "))
    }
}

/// Rust type used for a declaration kind.
macro_rules! native_ty {
    (int) => { ::libc::c_int };
    (uint) => { ::libc::c_uint };
    (short) => { ::libc::c_short };
    (char) => { ::libc::c_char };
    (bool) => { $crate::types::NCURSES_BOOL };
    (pointer) => { *mut ::libc::c_void };
    (string) => { *const ::libc::c_char };
    (void) => { () };
}

/// [`NativeKind`] for a declaration kind.
macro_rules! native_kind {
    (int) => { $crate::signature::NativeKind::Int };
    (uint) => { $crate::signature::NativeKind::UInt };
    (short) => { $crate::signature::NativeKind::Short };
    (char) => { $crate::signature::NativeKind::Char };
    (bool) => { $crate::signature::NativeKind::Bool };
    (pointer) => { $crate::signature::NativeKind::Pointer };
    (string) => { $crate::signature::NativeKind::String };
    (void) => { $crate::signature::NativeKind::Void };
}

/// Native symbol for an entry: the exported name unless overridden.
macro_rules! native_name {
    ($name:ident) => {
        stringify!($name)
    };
    ($name:ident, $native:literal) => {
        $native
    };
}

pub(crate) use native_kind;
pub(crate) use native_name;
pub(crate) use native_ty;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_rendering() {
        let desc = FunctionDescriptor {
            native: "wmove",
            exported: "wmove",
            params: &[NativeKind::Pointer, NativeKind::Int, NativeKind::Int],
            ret: NativeKind::Int,
            variadic: false,
        };
        assert_eq!(desc.signature(), "int wmove(pointer, int, int)");

        let printw = FunctionDescriptor {
            native: "printw",
            exported: "printw",
            params: &[NativeKind::String],
            ret: NativeKind::Int,
            variadic: true,
        };
        assert_eq!(printw.signature(), "int printw(string, ...)");
    }

    #[test]
    fn test_kind_macros() {
        assert_eq!(native_kind!(uint), NativeKind::UInt);
        assert_eq!(native_name!(mv, "move"), "move");
        assert_eq!(native_name!(wmove), "wmove");
        let value: native_ty!(short) = 3;
        assert_eq!(value, 3i16);
    }
}
