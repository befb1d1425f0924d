//! Persisted UI preference.
//!
//! The theme is the only state Tradelens keeps between runs. It lives in a
//! small TOML file (`~/.config/tradelens/prefs.toml` by default) owned by a
//! [`ThemeStore`] that callers pass around explicitly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tl_core::enums::Theme;

use crate::error::ConfigError;

#[derive(Debug, Serialize, Deserialize)]
struct StoredPrefs {
    theme: Theme,
}

/// Owner of the persisted theme preference.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
    theme: Theme,
}

impl ThemeStore {
    /// Open the store at `path`.
    ///
    /// A missing file yields `fallback`. An unreadable or corrupt file also
    /// yields `fallback` and is overwritten on the next [`set`](Self::set).
    #[must_use]
    pub fn open(path: impl Into<PathBuf>, fallback: Theme) -> Self {
        let path = path.into();
        let theme = match std::fs::read_to_string(&path) {
            Ok(raw) => match toml::from_str::<StoredPrefs>(&raw) {
                Ok(prefs) => prefs.theme,
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "ignoring corrupt preference file");
                    fallback
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => fallback,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to read preference file");
                fallback
            }
        };
        Self { path, theme }
    }

    /// Open the store at the default user-level location.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] if the platform has no config dir.
    pub fn open_default(fallback: Theme) -> Result<Self, ConfigError> {
        let path = Self::default_path().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::open(path, fallback))
    }

    /// Default location of the preference file.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tradelens").join("prefs.toml"))
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Change the theme and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file or its parent directory cannot
    /// be written, or [`ConfigError::Encode`] if serialization fails.
    pub fn set(&mut self, theme: Theme) -> Result<(), ConfigError> {
        let encoded = toml::to_string(&StoredPrefs { theme })?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&self.path, encoded).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(theme = %theme, path = %self.path.display(), "theme preference saved");
        self.theme = theme;
        Ok(())
    }
}
