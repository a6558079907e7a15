//! Loader configuration and platform capability profiles.

use crate::error::{Error, Result};
use std::env;

/// Environment variable naming one explicit native library.
pub const LIBRARY_ENV: &str = "NCURSES_FFI_LIB";

/// Environment variable forcing a capability profile.
pub const PROFILE_ENV: &str = "NCURSES_FFI_PROFILE";

/// Libraries tried, in order, when no explicit library is configured.
pub const DEFAULT_CANDIDATES: &[&str] = &[
    "ncursesw",
    "ncurses",
    "libncursesw.so.6",
    "libncurses.so.6",
    "libncurses.so.5",
    "XCurses",
];

bitflags::bitflags! {
    /// What the runtime can do against the loaded library.
    ///
    /// Platform fixups are selected from these flags rather than from the
    /// operating system name at each call site.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Exported variables (`stdscr`, `curscr`, `newscr`) can be looked
        /// up by name. Without it `stdscr` is remembered from `initscr`.
        const SYMBOL_LOOKUP = 0x01;
        /// Window queries such as `getcurx` may be header macros; read the
        /// `WINDOW` structure when the function is not exported.
        const WINDOW_STRUCT = 0x02;
    }
}

impl Capabilities {
    /// Profile for the platform this crate was compiled for.
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Capabilities::SYMBOL_LOOKUP | Capabilities::WINDOW_STRUCT
        } else {
            Capabilities::SYMBOL_LOOKUP
        }
    }

    /// Parse a profile name: `standard`, `no-symbols` or `window-struct`.
    pub fn from_profile(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Capabilities::SYMBOL_LOOKUP),
            "no-symbols" => Ok(Capabilities::empty()),
            "window-struct" => Ok(Capabilities::SYMBOL_LOOKUP | Capabilities::WINDOW_STRUCT),
            _ => Err(Error::InvalidProfile(name.to_string())),
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities::detect()
    }
}

/// Which library to load and how to treat it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Explicit library; disables the candidate search when set.
    pub library: Option<String>,
    /// Ordered fallback candidates.
    pub candidates: Vec<String>,
    /// Capability profile applied after loading.
    pub capabilities: Capabilities,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            library: None,
            candidates: DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect(),
            capabilities: Capabilities::detect(),
        }
    }
}

impl LoaderConfig {
    /// Configuration from [`LIBRARY_ENV`] and [`PROFILE_ENV`].
    ///
    /// Empty values count as unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();
        config.library = set(LIBRARY_ENV);
        if let Some(profile) = set(PROFILE_ENV) {
            config.capabilities = Capabilities::from_profile(&profile)?;
        }
        Ok(config)
    }

    /// Load exactly `name`.
    #[must_use]
    pub fn with_library(mut self, name: impl Into<String>) -> Self {
        self.library = Some(name.into());
        self
    }

    /// Replace the fallback candidates.
    #[must_use]
    pub fn with_candidates<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidates = candidates.into_iter().map(Into::into).collect();
        self
    }

    /// Override the capability profile.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Names attempted by the loader, in order.
    pub fn search_order(&self) -> impl Iterator<Item = &str> {
        let explicit = self.library.as_deref();
        let fallback = self
            .candidates
            .iter()
            .map(String::as_str)
            .filter(move |_| explicit.is_none());
        explicit.into_iter().chain(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_search_order() {
        let config = LoaderConfig::default();
        let order: Vec<&str> = config.search_order().collect();
        assert_eq!(order, DEFAULT_CANDIDATES);
    }

    #[test]
    fn test_explicit_library_disables_fallback() {
        let config = LoaderConfig::default().with_library("XCurses");
        let order: Vec<&str> = config.search_order().collect();
        assert_eq!(order, vec!["XCurses"]);
    }

    #[test]
    fn test_from_lookup() {
        let config =
            LoaderConfig::from_lookup(lookup(&[(LIBRARY_ENV, "ncursesw"), (PROFILE_ENV, "no-symbols")]))
                .unwrap();
        assert_eq!(config.library.as_deref(), Some("ncursesw"));
        assert_eq!(config.capabilities, Capabilities::empty());
    }

    #[test]
    fn test_empty_override_is_unset() {
        let config = LoaderConfig::from_lookup(lookup(&[(LIBRARY_ENV, "  ")])).unwrap();
        assert_eq!(config.library, None);
        assert_eq!(config.capabilities, Capabilities::detect());
    }

    #[test]
    fn test_profile_names() {
        assert_eq!(
            Capabilities::from_profile("Window-Struct").unwrap(),
            Capabilities::SYMBOL_LOOKUP | Capabilities::WINDOW_STRUCT
        );
        assert_eq!(
            Capabilities::from_profile("standard").unwrap(),
            Capabilities::SYMBOL_LOOKUP
        );
        assert!(matches!(
            Capabilities::from_profile("jruby"),
            Err(Error::InvalidProfile(name)) if name == "jruby"
        ));
    }

    #[test]
    fn test_profile_names_do_not_shadow_flag_names() {
        assert_eq!(
            Capabilities::from_name("WINDOW_STRUCT"),
            Some(Capabilities::WINDOW_STRUCT)
        );
        assert_eq!(Capabilities::from_name("window-struct"), None);
        assert!(Capabilities::from_profile("WINDOW_STRUCT").is_err());
    }

    #[test]
    fn test_invalid_profile_from_lookup() {
        let result = LoaderConfig::from_lookup(lookup(&[(PROFILE_ENV, "jruby")]));
        assert_eq!(result, Err(Error::InvalidProfile("jruby".to_string())));
    }
}
