//! Error types for the ncurses binding.

use std::ffi::NulError;
use std::ptr::NonNull;

/// Result type alias for binding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// One failed attempt to open a native library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadAttempt {
    /// Candidate name as configured.
    pub name: String,
    /// Reason reported by the dynamic loader.
    pub reason: String,
}

/// Errors produced by the binding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No candidate native library could be opened.
    #[error("unable to load an ncurses library (tried {})", format_attempts(.attempts))]
    Load {
        /// Every candidate that was tried, in order.
        attempts: Vec<LoadAttempt>,
    },

    /// The named entry point was not found in the loaded library.
    #[error("`{0}` is not available on this platform")]
    Unavailable(&'static str),

    /// A native call returned `ERR`.
    #[error("ncurses call returned ERR")]
    Status,

    /// A native call returned a null pointer.
    #[error("ncurses call returned a null pointer")]
    NullPointer,

    /// A string passed to the native side contained an interior NUL byte.
    #[error("string contains an interior NUL byte at offset {0}")]
    InvalidString(usize),

    /// An unknown capability profile name was configured.
    #[error("unknown capability profile: {0}")]
    InvalidProfile(String),
}

fn format_attempts(attempts: &[LoadAttempt]) -> String {
    if attempts.is_empty() {
        return "no candidates".to_string();
    }
    attempts
        .iter()
        .map(|a| format!("{}: {}", a.name, a.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<NulError> for Error {
    fn from(err: NulError) -> Self {
        Error::InvalidString(err.nul_position())
    }
}

/// Trait for converting native return values to `Result`.
pub trait IntoResult {
    /// The success type.
    type Output;

    /// Convert to a Result.
    fn into_result(self) -> Result<Self::Output>;
}

impl IntoResult for i32 {
    type Output = i32;

    fn into_result(self) -> Result<Self::Output> {
        if self == crate::types::ERR {
            Err(Error::Status)
        } else {
            Ok(self)
        }
    }
}

impl<T> IntoResult for *mut T {
    type Output = NonNull<T>;

    fn into_result(self) -> Result<Self::Output> {
        NonNull::new(self).ok_or(Error::NullPointer)
    }
}

impl<T> IntoResult for Result<T>
where
    T: IntoResult,
{
    type Output = T::Output;

    fn into_result(self) -> Result<Self::Output> {
        self.and_then(IntoResult::into_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn test_status_conversion() {
        assert_eq!(0i32.into_result(), Ok(0));
        assert_eq!(42i32.into_result(), Ok(42));
        assert_eq!((-1i32).into_result(), Err(Error::Status));
    }

    #[test]
    fn test_pointer_conversion() {
        let mut value = 7u8;
        assert!((&mut value as *mut u8).into_result().is_ok());
        assert_eq!(
            std::ptr::null_mut::<u8>().into_result(),
            Err(Error::NullPointer)
        );
    }

    #[test]
    fn test_nested_result_conversion() {
        let unavailable: Result<i32> = Err(Error::Unavailable("beep"));
        assert_eq!(unavailable.into_result(), Err(Error::Unavailable("beep")));
        let failed: Result<i32> = Ok(-1);
        assert_eq!(failed.into_result(), Err(Error::Status));
    }

    #[test]
    fn test_nul_error() {
        let err: Error = CString::new("ab\0cd").unwrap_err().into();
        assert_eq!(err, Error::InvalidString(2));
    }

    #[test]
    fn test_load_error_message() {
        let err = Error::Load {
            attempts: vec![LoadAttempt {
                name: "ncurses".into(),
                reason: "not found".into(),
            }],
        };
        assert_eq!(
            err.to_string(),
            "unable to load an ncurses library (tried ncurses: not found)"
        );
        assert_eq!(
            Error::Unavailable("getch").to_string(),
            "`getch` is not available on this platform"
        );
    }
}
