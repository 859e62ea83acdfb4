//! Light/dark/system theme selection and its persistence

use derive_more::Display;
use leptos::logging::warn;

/// Storage key for the persisted theme choice
pub const THEME_STORAGE_KEY: &str = "prestige-academy-theme";

/// Media query for the OS-level dark color scheme preference
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Settings shared by the theme provider and the pre-paint script, so both
/// read the same key and agree on whether the OS preference counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeSettings {
    pub storage_key: &'static str,
    /// Let [`Theme::System`] follow the OS preference
    pub enable_system: bool,
    /// Animate color changes between themes
    pub enable_transitions: bool,
}

impl ThemeSettings {
    pub const DEFAULT: Self = Self {
        storage_key: THEME_STORAGE_KEY,
        enable_system: true,
        enable_transitions: true,
    };
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The user's explicit theme choice
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display)]
pub enum Theme {
    #[display("light")]
    Light,
    #[display("dark")]
    Dark,
    #[default]
    #[display("system")]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Parse a persisted value; unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "system" => Some(Theme::System),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Mode Terang",
            Theme::Dark => "Mode Gelap",
            Theme::System => "Ikuti Sistem",
        }
    }
}

/// The theme actually painted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display)]
pub enum ResolvedTheme {
    #[default]
    #[display("light")]
    Light,
    #[display("dark")]
    Dark,
}

impl ResolvedTheme {
    pub fn is_dark(&self) -> bool {
        matches!(self, ResolvedTheme::Dark)
    }

    pub fn opposite(&self) -> Self {
        match self {
            ResolvedTheme::Light => ResolvedTheme::Dark,
            ResolvedTheme::Dark => ResolvedTheme::Light,
        }
    }

    /// Explicit choice that paints this theme.
    pub fn as_theme(&self) -> Theme {
        match self {
            ResolvedTheme::Light => Theme::Light,
            ResolvedTheme::Dark => Theme::Dark,
        }
    }
}

/// Errors raised by durable theme storage
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,

    #[error("failed to read storage: {0}")]
    Read(String),

    #[error("failed to write storage: {0}")]
    Write(String),
}

/// Durable key-value storage for the theme choice.
pub trait ThemeStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn store(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Theme state: explicit choice plus the current system preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemePolicy {
    theme: Theme,
    system_prefers_dark: bool,
}

impl ThemePolicy {
    pub fn new(theme: Theme, system_prefers_dark: bool) -> Self {
        Self {
            theme,
            system_prefers_dark,
        }
    }

    /// Restore the persisted choice. Missing, unreadable or unknown values
    /// fall back to [`Theme::System`].
    pub fn load<S: ThemeStorage>(storage: &S, key: &str, system_prefers_dark: bool) -> Self {
        let theme = match storage.load(key) {
            Ok(Some(value)) => Theme::parse(&value).unwrap_or_else(|| {
                warn!("Ignoring unknown persisted theme '{}'", value);
                Theme::System
            }),
            Ok(None) => Theme::System,
            Err(err) => {
                warn!("Could not restore theme: {}", err);
                Theme::System
            }
        };
        Self::new(theme, system_prefers_dark)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn system_prefers_dark(&self) -> bool {
        self.system_prefers_dark
    }

    pub fn resolved_theme(&self) -> ResolvedTheme {
        match self.theme {
            Theme::Light => ResolvedTheme::Light,
            Theme::Dark => ResolvedTheme::Dark,
            Theme::System if self.system_prefers_dark => ResolvedTheme::Dark,
            Theme::System => ResolvedTheme::Light,
        }
    }

    pub fn set_system_preference(&mut self, prefers_dark: bool) {
        self.system_prefers_dark = prefers_dark;
    }

    /// Select `theme` and persist it.
    ///
    /// The in-memory choice is updated even when persisting fails; the
    /// error is returned for the caller to report.
    pub fn set_theme<S: ThemeStorage>(
        &mut self,
        theme: Theme,
        storage: &S,
        key: &str,
    ) -> Result<(), StorageError> {
        self.theme = theme;
        storage.store(key, theme.as_str())
    }

    /// Flip between light and dark based on what is currently painted.
    pub fn toggle<S: ThemeStorage>(&mut self, storage: &S, key: &str) -> Result<(), StorageError> {
        let next = self.resolved_theme().opposite().as_theme();
        self.set_theme(next, storage, key)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::{StorageError, ThemeStorage};

    /// In-memory storage that can be switched into failure mode.
    #[derive(Default)]
    pub struct MemoryStorage {
        pub values: RefCell<HashMap<String, String>>,
        pub fail_writes: bool,
        pub fail_reads: bool,
    }

    impl ThemeStorage for MemoryStorage {
        fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
            if self.fail_reads {
                return Err(StorageError::Read("read denied".to_string()));
            }
            Ok(self.values.borrow().get(key).cloned())
        }

        fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Write("quota exceeded".to_string()));
            }
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
