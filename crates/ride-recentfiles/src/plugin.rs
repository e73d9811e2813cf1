//! Recent files plugin lifecycle.
//!
//! Handles:
//! - Enable: load settings, seed the loaded suite, build the menu, subscribe
//! - Disable: remove menu entries, unsubscribe
//! - Event dispatch for suite-opened, format-changed, new-project and saved
//! - Deferred menu updates from event-bus callbacks

use std::path::Path;

use crate::error::Result;
use crate::event::{Delivery, EventKind, RideEvent};
use crate::host::{EventBus, MenuHost};
use crate::queue::{UiTask, UiTaskQueue, UiTaskSender};
use crate::settings::SettingsStore;
use crate::state::RecentFilesState;
use crate::tracker::RecentFilesTracker;

/// Adds recently opened suites to the File menu.
#[derive(Debug)]
pub struct RecentFilesPlugin<S: SettingsStore> {
    tracker: RecentFilesTracker<S>,
    queue: UiTaskQueue,
    enabled: bool,
}

impl<S: SettingsStore> RecentFilesPlugin<S> {
    /// Create a disabled plugin. Settings are read on [`Self::enable`].
    pub fn new(store: S) -> Self {
        Self {
            tracker: RecentFilesTracker::new(RecentFilesState::default(), store),
            queue: UiTaskQueue::new(),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn tracker(&self) -> &RecentFilesTracker<S> {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut RecentFilesTracker<S> {
        &mut self.tracker
    }

    /// Handle for posting UI tasks from event-delivery threads.
    pub fn ui_sender(&self) -> UiTaskSender {
        self.queue.sender()
    }

    /// Number of tasks waiting for the next UI tick.
    pub fn pending_tasks(&self) -> usize {
        self.queue.len()
    }

    /// Load the list, add the loaded suite, build the menu and subscribe.
    ///
    /// Tasks posted through a [`UiTaskSender`] while disabled are dropped.
    pub fn enable<H>(&mut self, host: &mut H, current_suite: Option<&Path>) -> Result<()>
    where
        H: MenuHost + EventBus,
    {
        let stale = self.queue.discard();
        if stale > 0 {
            tracing::debug!(stale, "dropped tasks posted while disabled");
        }
        self.tracker.reload()?;
        let recorded = self.tracker.record_opened(current_suite, host)?;
        if !recorded {
            self.tracker.refresh_menu(host)?;
        }
        for kind in EventKind::ALL {
            host.subscribe(kind);
        }
        self.enabled = true;
        tracing::info!(entries = self.tracker.entries().len(), "recent files enabled");
        Ok(())
    }

    /// Remove the menu entries and unsubscribe from every event.
    ///
    /// Tasks still queued for the next UI tick are dropped.
    pub fn disable<H>(&mut self, host: &mut H) -> Result<()>
    where
        H: MenuHost + EventBus,
    {
        self.tracker.unregister_menu(host)?;
        for kind in EventKind::ALL {
            host.unsubscribe(kind);
        }
        let dropped = self.queue.discard();
        self.tracker.clear_pending_new_project();
        self.enabled = false;
        tracing::info!(dropped, "recent files disabled");
        Ok(())
    }

    /// React to an application event.
    ///
    /// With [`Delivery::Deferred`], every list change (record or rename) is
    /// queued for [`Self::run_deferred`] and the menu is left alone; the
    /// new-project marker is still updated right away so later events see
    /// the current flow state.
    pub fn handle_event(
        &mut self,
        event: &RideEvent,
        delivery: Delivery,
        menu: &mut dyn MenuHost,
    ) -> Result<()> {
        if !self.enabled {
            tracing::debug!(kind = ?event.kind(), "plugin disabled, ignoring event");
            return Ok(());
        }

        match event {
            RideEvent::SuiteOpened { path } => {
                self.tracker.clear_pending_new_project();
                match delivery {
                    Delivery::Immediate => {
                        self.tracker.record_opened(path.as_deref(), menu)?;
                    }
                    Delivery::Deferred => {
                        if let Some(path) = path {
                            self.queue.post(UiTask::RecordOpened(path.clone()));
                        }
                    }
                }
            }
            RideEvent::FormatChanged { old_path, new_path } => {
                self.tracker.clear_pending_new_project();
                match delivery {
                    Delivery::Immediate => {
                        self.tracker.rename_entry(old_path.as_deref(), new_path, menu)?;
                    }
                    Delivery::Deferred => {
                        if let Some(old) = old_path {
                            self.queue.post(UiTask::Rename {
                                old: old.clone(),
                                new: new_path.clone(),
                            });
                        }
                    }
                }
            }
            RideEvent::NewProjectCreated { path } => {
                self.tracker.note_new_project(path.clone());
            }
            RideEvent::Saved => match delivery {
                Delivery::Immediate => {
                    self.tracker.confirm_save(menu)?;
                }
                Delivery::Deferred => {
                    if let Some(path) = self.tracker.take_pending_new_project() {
                        self.queue.post(UiTask::RecordOpened(path));
                    }
                }
            },
        }
        Ok(())
    }

    /// Apply the tasks queued since the last UI tick, in order.
    ///
    /// Returns the number of tasks applied. Does nothing while disabled.
    pub fn run_deferred(&mut self, menu: &mut dyn MenuHost) -> Result<usize> {
        if !self.enabled {
            return Ok(0);
        }
        let mut applied = 0;
        while let Some(task) = self.queue.next_task() {
            match task {
                UiTask::RecordOpened(path) => {
                    self.tracker.record_opened(Some(path.as_path()), menu)?;
                }
                UiTask::Rename { old, new } => {
                    self.tracker.rename_entry(Some(old.as_path()), &new, menu)?;
                }
            }
            applied += 1;
        }
        Ok(applied)
    }
}
