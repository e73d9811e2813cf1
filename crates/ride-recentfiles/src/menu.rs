//! Menu descriptors for the recent files list.
//!
//! [`MenuEntryBuilder`] is a pure translation from the list to the entries
//! the host should show: one action per recent file (or a disabled
//! placeholder) followed by a separator, all placed just above `Exit`.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::host::SuiteOpener;
use crate::path::display_name;

/// Menu the recent files are listed in.
pub const FILE_MENU: &str = "File";

/// Action the recent files are inserted before.
pub const EXIT_ACTION: &str = "Exit";

/// Label of the placeholder shown when the list is empty.
pub const NO_RECENT_FILES: &str = "No recent files";

/// Where an entry goes inside its menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuPosition {
    /// Immediately before the action with this name.
    Before(String),
    /// After every existing entry.
    End,
}

impl MenuPosition {
    pub fn before(action: impl Into<String>) -> Self {
        Self::Before(action.into())
    }
}

/// Activation handler of a recent file entry.
///
/// The path is captured when the menu is built, so later list changes do not
/// affect what an already-built entry opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRecentFile {
    index: usize,
    path: PathBuf,
}

impl OpenRecentFile {
    pub fn new(index: usize, path: PathBuf) -> Self {
        Self { index, path }
    }

    /// 1-based position shown as the mnemonic.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ask the host to open the captured path.
    pub fn activate(&self, opener: &mut dyn SuiteOpener) -> Result<()> {
        tracing::info!(path = %self.path.display(), "opening recent file");
        opener.open_suite(&self.path)
    }
}

/// A menu action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionInfo {
    pub menu_name: String,
    pub label: String,
    /// Description shown as tooltip or status-bar help.
    pub doc: Option<String>,
    pub handler: Option<OpenRecentFile>,
    pub enabled: bool,
    pub position: MenuPosition,
}

impl ActionInfo {
    /// Enabled action without handler, appended at the end of `menu_name`.
    pub fn new(menu_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            menu_name: menu_name.into(),
            label: label.into(),
            doc: None,
            handler: None,
            enabled: true,
            position: MenuPosition::End,
        }
    }

    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    #[must_use]
    pub fn with_handler(mut self, handler: OpenRecentFile) -> Self {
        self.handler = Some(handler);
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    #[must_use]
    pub fn positioned(mut self, position: MenuPosition) -> Self {
        self.position = position;
        self
    }

    /// Label without `&` mnemonic markers.
    pub fn plain_label(&self) -> String {
        self.label.replace('&', "")
    }
}

/// A menu separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorInfo {
    pub menu_name: String,
    pub position: MenuPosition,
}

/// Entry to register with the host menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Action(ActionInfo),
    Separator(SeparatorInfo),
}

impl MenuEntry {
    pub fn menu_name(&self) -> &str {
        match self {
            Self::Action(action) => &action.menu_name,
            Self::Separator(separator) => &separator.menu_name,
        }
    }

    pub fn position(&self) -> &MenuPosition {
        match self {
            Self::Action(action) => &action.position,
            Self::Separator(separator) => &separator.position,
        }
    }

    pub fn as_action(&self) -> Option<&ActionInfo> {
        match self {
            Self::Action(action) => Some(action),
            Self::Separator(_) => None,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Separator(_))
    }
}

/// Builds the File menu entries for the recent files list.
pub struct MenuEntryBuilder;

impl MenuEntryBuilder {
    /// Entries for `files`, in registration order.
    pub fn build(files: &[PathBuf]) -> Vec<MenuEntry> {
        let mut entries = Vec::with_capacity(files.len() + 1);

        if files.is_empty() {
            entries.push(MenuEntry::Action(
                ActionInfo::new(FILE_MENU, NO_RECENT_FILES)
                    .disabled()
                    .positioned(MenuPosition::before(EXIT_ACTION)),
            ));
        } else {
            for (n, file) in files.iter().enumerate() {
                entries.push(MenuEntry::Action(Self::recent_file_action(n + 1, file)));
            }
        }

        entries.push(MenuEntry::Separator(SeparatorInfo {
            menu_name: FILE_MENU.to_string(),
            position: MenuPosition::before(EXIT_ACTION),
        }));
        entries
    }

    fn recent_file_action(index: usize, file: &Path) -> ActionInfo {
        ActionInfo::new(FILE_MENU, format!("&{}: {}", index, display_name(file)))
            .with_doc(format!("Open {}", file.display()))
            .with_handler(OpenRecentFile::new(index, file.to_path_buf()))
            .positioned(MenuPosition::before(EXIT_ACTION))
    }
}

/// Shorthand for [`MenuEntryBuilder::build`].
pub fn build_menu_entries(files: &[PathBuf]) -> Vec<MenuEntry> {
    MenuEntryBuilder::build(files)
}
