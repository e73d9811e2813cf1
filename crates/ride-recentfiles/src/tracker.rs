//! Recent files tracker.
//!
//! [`RecentFilesTracker`] applies list operations to a [`RecentFilesState`]
//! and, after every change, saves the settings and then rebuilds the menu
//! entries. Operations that change nothing (empty path, untracked rename)
//! return `Ok(false)` and touch neither the settings nor the menu.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::host::{ActionId, MenuHost};
use crate::menu::build_menu_entries;
use crate::settings::SettingsStore;
use crate::state::RecentFilesState;

/// Owns the recent files list, its settings store and its menu entries.
#[derive(Debug)]
pub struct RecentFilesTracker<S: SettingsStore> {
    state: RecentFilesState,
    store: S,
    registered: Vec<ActionId>,
}

impl<S: SettingsStore> RecentFilesTracker<S> {
    /// Tracker with an explicit starting state. Nothing is read or written.
    pub fn new(state: RecentFilesState, store: S) -> Self {
        Self {
            state,
            store,
            registered: Vec::new(),
        }
    }

    /// Tracker seeded from the settings in `store`.
    pub fn load(store: S) -> Result<Self> {
        let settings = store.load()?;
        Ok(Self::new(RecentFilesState::from_settings(&settings), store))
    }

    /// Re-read the list from the store, keeping menu registrations.
    ///
    /// Any project waiting for its first save is forgotten.
    pub fn reload(&mut self) -> Result<()> {
        let settings = self.store.load()?;
        self.state = RecentFilesState::from_settings(&settings);
        Ok(())
    }

    pub fn state(&self) -> &RecentFilesState {
        &self.state
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[PathBuf] {
        self.state.entries()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Menu entries currently registered by this tracker.
    pub fn registered_actions(&self) -> &[ActionId] {
        &self.registered
    }

    /// Move an opened suite to the front of the list.
    ///
    /// `None` and empty paths are ignored.
    pub fn record_opened(&mut self, path: Option<&Path>, menu: &mut dyn MenuHost) -> Result<bool> {
        let Some(path) = path else {
            tracing::debug!("ignoring open without a path");
            return Ok(false);
        };
        if !self.state.push_front(path) {
            tracing::debug!("ignoring open with an empty path");
            return Ok(false);
        }
        tracing::info!(path = %path.display(), "recorded recent file");
        self.save_and_refresh(menu)?;
        Ok(true)
    }

    /// Follow a file to its new path, keeping its position in the list.
    ///
    /// Renames of untracked files are ignored.
    pub fn rename_entry(
        &mut self,
        old_path: Option<&Path>,
        new_path: &Path,
        menu: &mut dyn MenuHost,
    ) -> Result<bool> {
        let Some(old_path) = old_path else {
            return Ok(false);
        };
        if !self.state.replace(old_path, new_path) {
            tracing::debug!(old = %old_path.display(), "rename of untracked file ignored");
            return Ok(false);
        }
        tracing::info!(
            old = %old_path.display(),
            new = %new_path.display(),
            "renamed recent file"
        );
        self.save_and_refresh(menu)?;
        Ok(true)
    }

    /// Remember a project that becomes recent once it is saved.
    pub fn note_new_project(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        tracing::debug!(path = %path.display(), "new project awaiting first save");
        self.state.note_new_project(path);
    }

    /// Abandon the project awaiting its first save.
    pub fn clear_pending_new_project(&mut self) {
        self.state.clear_pending_new_project();
    }

    /// Take the project awaiting its first save without recording it.
    pub fn take_pending_new_project(&mut self) -> Option<PathBuf> {
        self.state.take_pending_new_project()
    }

    /// Record the project awaiting its first save, if there is one.
    pub fn confirm_save(&mut self, menu: &mut dyn MenuHost) -> Result<bool> {
        match self.state.take_pending_new_project() {
            Some(path) => self.record_opened(Some(path.as_path()), menu),
            None => Ok(false),
        }
    }

    /// Forget every entry.
    pub fn clear(&mut self, menu: &mut dyn MenuHost) -> Result<bool> {
        if !self.state.clear() {
            return Ok(false);
        }
        tracing::info!("cleared recent files");
        self.save_and_refresh(menu)?;
        Ok(true)
    }

    /// Drop entries whose path no longer exists, returning them.
    pub fn prune_missing(&mut self, menu: &mut dyn MenuHost) -> Result<Vec<PathBuf>> {
        let removed = self.state.retain(Path::exists);
        if !removed.is_empty() {
            tracing::info!(count = removed.len(), "pruned missing recent files");
            self.save_and_refresh(menu)?;
        }
        Ok(removed)
    }

    /// Change how many files are remembered.
    pub fn set_max_entries(&mut self, max_entries: usize, menu: &mut dyn MenuHost) -> Result<()> {
        self.state.set_max_entries(max_entries)?;
        self.save_and_refresh(menu)
    }

    /// Replace the registered menu entries with ones for the current list.
    pub fn refresh_menu(&mut self, menu: &mut dyn MenuHost) -> Result<()> {
        self.unregister_menu(menu)?;
        for entry in build_menu_entries(self.state.entries()) {
            let id = menu.register_action(&entry)?;
            self.registered.push(id);
        }
        tracing::debug!(entries = self.state.len(), "rebuilt recent files menu");
        Ok(())
    }

    /// Remove every menu entry this tracker registered.
    ///
    /// An id is only forgotten once the host has removed its entry, so a
    /// failed call can be retried.
    pub fn unregister_menu(&mut self, menu: &mut dyn MenuHost) -> Result<()> {
        while let Some(&id) = self.registered.last() {
            menu.unregister_action(id)?;
            self.registered.pop();
        }
        Ok(())
    }

    fn save_and_refresh(&mut self, menu: &mut dyn MenuHost) -> Result<()> {
        self.store.save(&self.state.to_settings())?;
        self.refresh_menu(menu)
    }
}
