//! In-memory recent files list.
//!
//! [`RecentFilesState`] holds the ordered entries, their bound and the
//! new-project confirmation flow. It knows nothing about persistence or menus;
//! [`crate::RecentFilesTracker`] wraps it and performs the side effects.

use std::path::{Path, PathBuf};

use crate::error::{RecentFilesError, Result};
use crate::path::normalize_path;
use crate::settings::RecentFilesSettings;

/// Default maximum number of recent files.
pub const DEFAULT_MAX_ENTRIES: usize = 4;

/// Progress of a newly created project towards the recent list.
///
/// A new project only becomes a recent file once it has been saved. Opening
/// any suite in the meantime abandons it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NewProjectFlow {
    /// No project is waiting for its first save.
    #[default]
    Idle,
    /// A project was created at this path and has not been saved yet.
    PendingConfirmation(PathBuf),
}

/// Ordered, bounded, de-duplicated list of recently used suites.
///
/// Entries are normalized and most-recently-used first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentFilesState {
    entries: Vec<PathBuf>,
    max_entries: usize,
    new_project: NewProjectFlow,
}

impl Default for RecentFilesState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            max_entries: DEFAULT_MAX_ENTRIES,
            new_project: NewProjectFlow::Idle,
        }
    }
}

impl RecentFilesState {
    /// Create an empty list with the given bound.
    pub fn with_max_entries(max_entries: usize) -> Result<Self> {
        if max_entries == 0 {
            return Err(RecentFilesError::InvalidMaxEntries { value: 0 });
        }
        Ok(Self {
            max_entries,
            ..Self::default()
        })
    }

    /// Build the list from persisted settings.
    ///
    /// Stored paths are normalized again, empty and duplicate entries are
    /// dropped and the result is truncated to the bound. A zero bound falls
    /// back to [`DEFAULT_MAX_ENTRIES`].
    pub fn from_settings(settings: &RecentFilesSettings) -> Self {
        let max_entries = if settings.max_number_of_files == 0 {
            tracing::warn!(
                default = DEFAULT_MAX_ENTRIES,
                "max_number_of_files is 0, using the default"
            );
            DEFAULT_MAX_ENTRIES
        } else {
            settings.max_number_of_files
        };

        let mut entries: Vec<PathBuf> = Vec::with_capacity(settings.recent_files.len());
        for stored in &settings.recent_files {
            if stored.as_os_str().is_empty() {
                continue;
            }
            let path = normalize_path(stored);
            if !entries.contains(&path) {
                entries.push(path);
            }
        }
        if entries.len() != settings.recent_files.len() {
            tracing::warn!(
                stored = settings.recent_files.len(),
                kept = entries.len(),
                "dropped empty or duplicate recent files"
            );
        }
        entries.truncate(max_entries);

        Self {
            entries,
            max_entries,
            new_project: NewProjectFlow::Idle,
        }
    }

    /// Snapshot of the persisted fields.
    pub fn to_settings(&self) -> RecentFilesSettings {
        RecentFilesSettings {
            recent_files: self.entries.clone(),
            max_number_of_files: self.max_entries,
        }
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether `path` is tracked (after normalization).
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains(&normalize_path(path))
    }

    /// Current state of the new-project flow.
    pub fn new_project(&self) -> &NewProjectFlow {
        &self.new_project
    }

    /// Path of the project awaiting its first save, if any.
    pub fn pending_new_project(&self) -> Option<&Path> {
        match &self.new_project {
            NewProjectFlow::Idle => None,
            NewProjectFlow::PendingConfirmation(path) => Some(path),
        }
    }

    /// Move `path` to the front, inserting it if needed.
    ///
    /// Returns `false` without touching the list when `path` is empty.
    pub fn push_front(&mut self, path: &Path) -> bool {
        if path.as_os_str().is_empty() {
            return false;
        }
        let path = normalize_path(path);
        self.entries.retain(|existing| existing != &path);
        self.entries.insert(0, path);
        self.entries.truncate(self.max_entries);
        true
    }

    /// Replace `old` with `new` in place.
    ///
    /// Returns `false` when `old` is empty or not tracked. If `new` was already
    /// tracked at another position, that occurrence is dropped.
    pub fn replace(&mut self, old: &Path, new: &Path) -> bool {
        if old.as_os_str().is_empty() {
            return false;
        }
        let old = normalize_path(old);
        let new = normalize_path(new);
        let Some(index) = self.entries.iter().position(|entry| entry == &old) else {
            return false;
        };
        self.entries[index] = new.clone();

        let mut position = 0;
        self.entries.retain(|entry| {
            let keep = position == index || entry != &new;
            position += 1;
            keep
        });
        true
    }

    /// Remove every entry. Returns `false` if the list was already empty.
    pub fn clear(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.entries.clear();
        true
    }

    /// Keep only the entries matching `keep`, returning the removed ones.
    pub fn retain<F>(&mut self, mut keep: F) -> Vec<PathBuf>
    where
        F: FnMut(&Path) -> bool,
    {
        let mut removed = Vec::new();
        self.entries.retain(|entry| {
            if keep(entry.as_path()) {
                true
            } else {
                removed.push(entry.clone());
                false
            }
        });
        removed
    }

    /// Change the bound, truncating the list if it shrinks.
    pub fn set_max_entries(&mut self, max_entries: usize) -> Result<()> {
        if max_entries == 0 {
            return Err(RecentFilesError::InvalidMaxEntries { value: max_entries });
        }
        self.max_entries = max_entries;
        self.entries.truncate(max_entries);
        Ok(())
    }

    /// Start waiting for the first save of a project created at `path`.
    ///
    /// Replaces any project already waiting.
    pub fn note_new_project(&mut self, path: PathBuf) {
        self.new_project = NewProjectFlow::PendingConfirmation(path);
    }

    /// Abandon the project waiting for its first save.
    pub fn clear_pending_new_project(&mut self) {
        self.new_project = NewProjectFlow::Idle;
    }

    /// Take the project waiting for its first save, returning to `Idle`.
    pub fn take_pending_new_project(&mut self) -> Option<PathBuf> {
        match std::mem::take(&mut self.new_project) {
            NewProjectFlow::Idle => None,
            NewProjectFlow::PendingConfirmation(path) => Some(path),
        }
    }
}
