//! Persisted UI preferences

use crate::error::ThumbError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const APP_DIR: &str = "ytthumb";
const PREFS_FILE: &str = "preferences.json";

/// User preferences surviving across runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Dark terminal theme
    #[serde(default)]
    pub dark_mode: bool,
}

impl Preferences {
    /// Load from the default location. Missing or corrupt files yield
    /// defaults instead of an error.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from a specific path
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!("Ignoring corrupt preferences file: {}", e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save to the default location
    pub fn save(&self) -> Result<(), ThumbError> {
        let path = Self::default_path().ok_or_else(|| {
            ThumbError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no user config directory",
            ))
        })?;
        self.save_to(&path)
    }

    /// Save to a specific path, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), ThumbError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        debug!("Saved preferences to {}", path.display());
        Ok(())
    }

    /// Flip the dark-mode flag, returning the new value
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    /// Default preferences path under the user config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(PREFS_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let prefs = Preferences { dark_mode: true };
        prefs.save_to(&path).unwrap();

        assert_eq!(Preferences::load_from(&path), prefs);
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load_from(&dir.path().join("missing.json"));
        assert!(!prefs.dark_mode);
    }

    #[test]
    fn test_load_corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert_eq!(Preferences::load_from(&path), Preferences::default());
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let mut prefs = Preferences::default();
        let original = prefs.dark_mode;

        assert!(prefs.toggle_dark_mode());
        prefs.save_to(&path).unwrap();
        assert!(!prefs.toggle_dark_mode());
        prefs.save_to(&path).unwrap();

        assert_eq!(Preferences::load_from(&path).dark_mode, original);
    }
}
