//! Recently opened suites for the RIDE File menu.
//!
//! This crate keeps the "recent files" list shown in the File menu of the
//! Robot Framework IDE. It reacts to application events, keeps an ordered,
//! bounded and de-duplicated list of suite paths, persists the list to the
//! user settings and rebuilds the matching menu entries.
//!
//! # Architecture
//!
//! - `path` - Path normalization (initializer files collapse to their directory)
//! - `state` - The in-memory list and the new-project confirmation flow
//! - `settings` - Persisted settings record and stores (TOML file, in-memory)
//! - `menu` - Pure translation of the list into menu descriptors
//! - `tracker` - Applies list operations, then persists and rebuilds the menu
//! - `plugin` - Enable/disable lifecycle and event dispatch
//! - `queue` - "Run on next UI tick" queue for updates from event callbacks
//! - `file_menu` - In-memory File menu model implementing [`MenuHost`]
//! - `native` - Menu event ids and the optional `muda` adapter
//! - `host` - Traits for the collaborators owned by the host application
//!
//! # Example
//!
//! ```ignore
//! use ride_recentfiles::{FileMenu, RecentFilesTracker, TomlSettingsStore};
//!
//! let store = TomlSettingsStore::open_default();
//! let mut tracker = RecentFilesTracker::load(store)?;
//! let mut menu = FileMenu::standard();
//!
//! tracker.record_opened(Some(Path::new("/work/suites/login.robot")), &mut menu)?;
//! ```

mod error;
mod event;
mod file_menu;
mod host;
mod menu;
pub mod native;
mod path;
mod plugin;
mod queue;
mod settings;
mod state;
mod tracker;

pub use error::{RecentFilesError, Result};
pub use event::{Delivery, EventKind, RideEvent};
pub use file_menu::{FileMenu, FileMenuItem};
pub use host::{ActionId, EventBus, MenuHost, SuiteOpener};
pub use menu::{
    ActionInfo, EXIT_ACTION, FILE_MENU, MenuEntry, MenuEntryBuilder, MenuPosition,
    NO_RECENT_FILES, OpenRecentFile, SeparatorInfo, build_menu_entries,
};
pub use path::{INITIALIZER_PREFIX, display_name, is_initializer_file, normalize_path};
pub use plugin::RecentFilesPlugin;
pub use queue::{UiTask, UiTaskQueue, UiTaskSender};
pub use settings::{
    MemorySettingsStore, RecentFilesSettings, SETTINGS_FILE_NAME, SettingsStore,
    TomlSettingsStore,
};
pub use state::{DEFAULT_MAX_ENTRIES, NewProjectFlow, RecentFilesState};
pub use tracker::RecentFilesTracker;
