//! Persisted recent files settings.
//!
//! The record is small: the ordered list of paths and its bound. It is
//! serialized to TOML and stored in the user's config directory, next to the
//! rest of the IDE preferences.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RecentFilesError, Result};
use crate::state::DEFAULT_MAX_ENTRIES;

/// File name of the recent files settings inside the config directory.
pub const SETTINGS_FILE_NAME: &str = "recentfiles.toml";

/// Persisted recent files record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentFilesSettings {
    /// Recent suite paths, most recent first.
    pub recent_files: Vec<PathBuf>,

    /// Maximum number of recent files to remember.
    pub max_number_of_files: usize,
}

impl Default for RecentFilesSettings {
    fn default() -> Self {
        Self {
            recent_files: Vec::new(),
            max_number_of_files: DEFAULT_MAX_ENTRIES,
        }
    }
}

/// Storage for [`RecentFilesSettings`], owned by the host application.
pub trait SettingsStore {
    /// Read the stored record, or the defaults when nothing is stored yet.
    fn load(&self) -> Result<RecentFilesSettings>;

    /// Replace the stored record.
    fn save(&mut self, settings: &RecentFilesSettings) -> Result<()>;
}

// =============================================================================
// TOML FILE STORE
// =============================================================================

/// Settings stored as a TOML file.
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    /// Store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by the default config file.
    pub fn open_default() -> Self {
        Self::new(Self::default_path())
    }

    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("org", "robotframework", "RIDE")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for TomlSettingsStore {
    fn load(&self) -> Result<RecentFilesSettings> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no settings file, using defaults");
            return Ok(RecentFilesSettings::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| RecentFilesError::Io {
            operation: "read",
            path: self.path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| RecentFilesError::SettingsParse {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Writes a temp file next to the target and renames it into place.
    fn save(&mut self, settings: &RecentFilesSettings) -> Result<()> {
        let content = toml::to_string_pretty(settings)
            .map_err(|e| RecentFilesError::SettingsSerialize { source: e })?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| RecentFilesError::Io {
                operation: "create directory for",
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let temp_path = self.path.with_extension("toml.tmp");

        let mut file = File::create(&temp_path).map_err(|e| RecentFilesError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(content.as_bytes())
            .map_err(|e| RecentFilesError::Io {
                operation: "write",
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| RecentFilesError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| RecentFilesError::Io {
            operation: "replace",
            path: self.path.clone(),
            source: e,
        })?;

        tracing::debug!(
            path = %self.path.display(),
            entries = settings.recent_files.len(),
            "saved recent files"
        );
        Ok(())
    }
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// Settings kept in memory, for hosts that persist elsewhere and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    settings: Option<RecentFilesSettings>,
    saves: usize,
}

impl MemorySettingsStore {
    /// Store that starts out with `settings` already saved.
    pub fn with_settings(settings: RecentFilesSettings) -> Self {
        Self {
            settings: Some(settings),
            saves: 0,
        }
    }

    /// Last saved record, if any.
    pub fn saved(&self) -> Option<&RecentFilesSettings> {
        self.settings.as_ref()
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<RecentFilesSettings> {
        Ok(self.settings.clone().unwrap_or_default())
    }

    fn save(&mut self, settings: &RecentFilesSettings) -> Result<()> {
        self.settings = Some(settings.clone());
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let store = TomlSettingsStore::new(dir.path().join(SETTINGS_FILE_NAME));
        assert_eq!(store.load().unwrap(), RecentFilesSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE_NAME);
        let mut store = TomlSettingsStore::new(&path);

        let settings = RecentFilesSettings {
            recent_files: vec![PathBuf::from("/suites/a.robot"), PathBuf::from("/suites/b")],
            max_number_of_files: 6,
        };
        store.save(&settings).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());
        assert_eq!(store.load().unwrap(), settings);
    }

    #[test]
    fn test_partial_file_uses_defaults_for_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "recent_files = [\"/suites/a.robot\"]\n").unwrap();

        let settings = TomlSettingsStore::new(&path).load().unwrap();
        assert_eq!(settings.recent_files, vec![PathBuf::from("/suites/a.robot")]);
        assert_eq!(settings.max_number_of_files, DEFAULT_MAX_ENTRIES);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "recent_files = 12\n").unwrap();

        let error = TomlSettingsStore::new(&path).load().unwrap_err();
        assert!(matches!(error, RecentFilesError::SettingsParse { .. }));
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let mut store = MemorySettingsStore::default();
        assert!(store.saved().is_none());
        assert_eq!(store.load().unwrap(), RecentFilesSettings::default());

        store.save(&RecentFilesSettings::default()).unwrap();
        assert_eq!(store.save_count(), 1);
        assert!(store.saved().is_some());
    }
}
