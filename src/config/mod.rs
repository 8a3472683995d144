//! Configuration management for libris.
//!
//! Configuration is read from `~/.config/libris/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod theme;

pub use theme::{ActiveTheme, ThemeMode, ThemeStore};

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::catalog::{COVERS_BASE_URL, DEFAULT_SEARCH_LIMIT, DEFAULT_SUBJECT_LIMIT};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub browse: BrowseConfig,
}

/// Remote catalog connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub base_url: String,
    pub covers_url: String,
    /// Whole-request budget in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openlibrary.org".to_string(),
            covers_url: COVERS_BASE_URL.to_string(),
            timeout_secs: 20,
            user_agent: concat!("libris/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// A subject section on the trending page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HomeSection {
    pub title: String,
    pub subject: String,
}

impl HomeSection {
    fn new(title: &str, subject: &str) -> Self {
        Self {
            title: title.to_string(),
            subject: subject.to_string(),
        }
    }
}

/// Page sizes and the sections shown on the trending page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrowseConfig {
    pub trending_limit: usize,
    pub section_limit: usize,
    pub search_limit: usize,
    pub discovery_limit: usize,
    pub home_sections: Vec<HomeSection>,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            trending_limit: 12,
            section_limit: 6,
            search_limit: DEFAULT_SEARCH_LIMIT,
            discovery_limit: DEFAULT_SUBJECT_LIMIT,
            home_sections: vec![
                HomeSection::new("Popular Fiction", "fiction"),
                HomeSection::new("Science & Technology", "science"),
                HomeSection::new("History & Biography", "history"),
            ],
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/libris/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("libris").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# libris configuration

[catalog]
# Catalog API root; a path prefix such as https://mirror.example/api/ is kept
base_url = "https://openlibrary.org"

# Cover image host
covers_url = "https://covers.openlibrary.org"

# Request timeout in seconds (no retries)
timeout_secs = 20

[browse]
# Items shown in the trending section
trending_limit = 12

# Items requested and shown per subject section
section_limit = 6

# Results requested per search
search_limit = 24

# Books requested per "surprise me" round
discovery_limit = 12

# Subject sections on the trending page, in display order
[[browse.home_sections]]
title = "Popular Fiction"
subject = "fiction"

[[browse.home_sections]]
title = "Science & Technology"
subject = "science"

[[browse.home_sections]]
title = "History & Biography"
subject = "history"
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
