//! Application events the recent files list reacts to.

use std::path::PathBuf;

/// Kind of application event, used for subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    SuiteOpened,
    FormatChanged,
    NewProjectCreated,
    Saved,
}

impl EventKind {
    /// Every event the plugin subscribes to on enable.
    pub const ALL: [EventKind; 4] = [
        Self::SuiteOpened,
        Self::FormatChanged,
        Self::NewProjectCreated,
        Self::Saved,
    ];
}

/// Application event published by the IDE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RideEvent {
    /// A suite or project finished opening.
    SuiteOpened { path: Option<PathBuf> },

    /// A file was saved in another format, changing its path.
    FormatChanged {
        old_path: Option<PathBuf>,
        new_path: PathBuf,
    },

    /// A new project was created but not saved yet.
    NewProjectCreated { path: PathBuf },

    /// A save completed.
    Saved,
}

impl RideEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::SuiteOpened { .. } => EventKind::SuiteOpened,
            Self::FormatChanged { .. } => EventKind::FormatChanged,
            Self::NewProjectCreated { .. } => EventKind::NewProjectCreated,
            Self::Saved => EventKind::Saved,
        }
    }
}

/// Where an event is being handled.
///
/// Bus callbacks may run while a menu interaction is still in progress, so
/// menu-affecting work from them is postponed to the next UI tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delivery {
    /// Already on the UI thread, outside any menu interaction.
    Immediate,
    /// Delivered by the event bus; menu updates wait for the next UI tick.
    #[default]
    Deferred,
}
