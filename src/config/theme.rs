//! Persisted theme preference.
//!
//! Read once on startup, written back whenever it changes. Nothing in the
//! browsing core depends on it.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::warn;

use super::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

/// Theme actually applied once `System` is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTheme {
    Light,
    Dark,
}

impl ThemeMode {
    /// light -> dark -> system -> light
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    pub fn resolve(self, system: ActiveTheme) -> ActiveTheme {
        match self {
            ThemeMode::Light => ActiveTheme::Light,
            ThemeMode::Dark => ActiveTheme::Dark,
            ThemeMode::System => system,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("Unknown theme mode: {}. Use light, dark or system", other)),
        }
    }
}

impl fmt::Display for ActiveTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveTheme::Light => f.write_str("light"),
            ActiveTheme::Dark => f.write_str("dark"),
        }
    }
}

pub struct ThemeStore {
    path: PathBuf,
    mode: ThemeMode,
}

impl ThemeStore {
    /// Open the store at `~/.local/share/libris/theme` (platform data dir).
    pub fn open_default() -> Result<Self, ConfigError> {
        let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
        Ok(Self::open(data_dir.join("libris").join("theme")))
    }

    /// Load the saved mode. A missing or unreadable file yields the default.
    pub fn open(path: PathBuf) -> Self {
        let mode = match fs::read_to_string(&path) {
            Ok(content) => content.parse().unwrap_or_else(|e| {
                warn!("Ignoring theme preference at {}: {}", path.display(), e);
                ThemeMode::default()
            }),
            Err(_) => ThemeMode::default(),
        };
        Self { path, mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set(&mut self, mode: ThemeMode) -> Result<(), ConfigError> {
        self.mode = mode;
        self.persist()
    }

    pub fn toggle(&mut self) -> Result<ThemeMode, ConfigError> {
        self.set(self.mode.next())?;
        Ok(self.mode)
    }

    fn persist(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        fs::write(&self.path, self.mode.as_str()).map_err(|e| ConfigError::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle() {
        assert_eq!(ThemeMode::Light.next(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.next(), ThemeMode::System);
        assert_eq!(ThemeMode::System.next(), ThemeMode::Light);
    }

    #[test]
    fn test_resolve_system() {
        assert_eq!(ThemeMode::System.resolve(ActiveTheme::Light), ActiveTheme::Light);
        assert_eq!(ThemeMode::Dark.resolve(ActiveTheme::Light), ActiveTheme::Dark);
    }

    #[test]
    fn test_missing_file_defaults_to_dark() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::open(dir.path().join("theme"));
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_garbage_file_defaults_to_dark() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");
        fs::write(&path, "sepia").unwrap();
        assert_eq!(ThemeStore::open(path).mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("libris").join("theme");

        let mut store = ThemeStore::open(path.clone());
        assert_eq!(store.toggle().unwrap(), ThemeMode::System);

        let reopened = ThemeStore::open(path.clone());
        assert_eq!(reopened.mode(), ThemeMode::System);
        assert_eq!(fs::read_to_string(path).unwrap(), "system");
    }
}
