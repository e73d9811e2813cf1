//! Shared test doubles for the host collaborators.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use ride_recentfiles::{
    ActionId, EventBus, EventKind, FileMenu, MemorySettingsStore, MenuEntry, MenuHost,
    RecentFilesSettings, Result, SettingsStore, SuiteOpener,
};

/// Calls made to the collaborators, in order.
pub type CallLog = Rc<RefCell<Vec<&'static str>>>;

/// In-memory store that also logs every save.
pub struct LoggingStore {
    pub inner: MemorySettingsStore,
    log: CallLog,
}

impl LoggingStore {
    pub fn new(log: &CallLog) -> Self {
        Self {
            inner: MemorySettingsStore::default(),
            log: Rc::clone(log),
        }
    }

    pub fn with_settings(log: &CallLog, settings: RecentFilesSettings) -> Self {
        Self {
            inner: MemorySettingsStore::with_settings(settings),
            log: Rc::clone(log),
        }
    }
}

impl SettingsStore for LoggingStore {
    fn load(&self) -> Result<RecentFilesSettings> {
        self.inner.load()
    }

    fn save(&mut self, settings: &RecentFilesSettings) -> Result<()> {
        self.log.borrow_mut().push("save");
        self.inner.save(settings)
    }
}

/// Host with a File menu, an event bus and a suite opener.
pub struct TestHost {
    pub menu: FileMenu,
    pub subscriptions: HashSet<EventKind>,
    pub opened: Vec<PathBuf>,
    log: CallLog,
}

impl TestHost {
    pub fn new(log: &CallLog) -> Self {
        Self {
            menu: FileMenu::standard(),
            subscriptions: HashSet::new(),
            opened: Vec::new(),
            log: Rc::clone(log),
        }
    }

    /// Menu labels of the recent file entries (or the placeholder).
    pub fn recent_labels(&self) -> Vec<String> {
        self.menu
            .items()
            .iter()
            .filter(|item| item.id.is_some())
            .filter_map(|item| item.entry.as_action())
            .map(|action| action.label.clone())
            .collect()
    }
}

impl MenuHost for TestHost {
    fn register_action(&mut self, entry: &MenuEntry) -> Result<ActionId> {
        self.log.borrow_mut().push("register");
        self.menu.register_action(entry)
    }

    fn unregister_action(&mut self, id: ActionId) -> Result<()> {
        self.log.borrow_mut().push("unregister");
        self.menu.unregister_action(id)
    }
}

impl EventBus for TestHost {
    fn subscribe(&mut self, kind: EventKind) {
        self.subscriptions.insert(kind);
    }

    fn unsubscribe(&mut self, kind: EventKind) {
        self.subscriptions.remove(&kind);
    }
}

impl SuiteOpener for TestHost {
    fn open_suite(&mut self, path: &Path) -> Result<()> {
        self.opened.push(path.to_path_buf());
        Ok(())
    }
}

pub fn new_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn paths(values: &[&str]) -> Vec<PathBuf> {
    values.iter().map(PathBuf::from).collect()
}
