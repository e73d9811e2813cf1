//! In-memory File menu.
//!
//! [`FileMenu`] mirrors what a desktop menu framework does with registered
//! entries: it keeps an ordered item list and honours `before` placement. It
//! backs the command-line preview and can stand in for the real menu when the
//! host renders menus itself.

use std::collections::BTreeMap;

use crate::error::{RecentFilesError, Result};
use crate::host::{ActionId, MenuHost};
use crate::menu::{
    ActionInfo, EXIT_ACTION, FILE_MENU, MenuEntry, MenuPosition, OpenRecentFile, SeparatorInfo,
};

/// Item currently shown in a [`FileMenu`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMenuItem {
    /// `None` for the menu's built-in items.
    pub id: Option<ActionId>,
    pub entry: MenuEntry,
}

/// Ordered model of one menu.
#[derive(Debug, Clone)]
pub struct FileMenu {
    name: String,
    items: Vec<FileMenuItem>,
    next_id: u64,
}

impl FileMenu {
    /// Empty menu called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// The IDE's File menu with its built-in items.
    pub fn standard() -> Self {
        let mut menu = Self::new(FILE_MENU);
        for label in [
            "&New Project",
            "&Open Test Suite",
            "Open &Directory",
            "&Save",
            "Save &All",
        ] {
            menu.push_builtin(MenuEntry::Action(ActionInfo::new(FILE_MENU, label)));
        }
        menu.push_builtin(MenuEntry::Separator(SeparatorInfo {
            menu_name: FILE_MENU.to_string(),
            position: MenuPosition::End,
        }));
        menu.push_builtin(MenuEntry::Action(ActionInfo::new(FILE_MENU, EXIT_ACTION)));
        menu
    }

    /// Append an item that is not managed through [`MenuHost`].
    pub fn push_builtin(&mut self, entry: MenuEntry) {
        self.items.push(FileMenuItem { id: None, entry });
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[FileMenuItem] {
        &self.items
    }

    /// Entries registered through [`MenuHost`], keyed by their id.
    pub fn registered(&self) -> BTreeMap<ActionId, &MenuEntry> {
        self.items
            .iter()
            .filter_map(|item| item.id.map(|id| (id, &item.entry)))
            .collect()
    }

    /// Recent file handlers in menu order.
    pub fn recent_files(&self) -> Vec<&OpenRecentFile> {
        self.items
            .iter()
            .filter_map(|item| item.entry.as_action())
            .filter_map(|action| action.handler.as_ref())
            .collect()
    }

    /// Index of the action whose label, without mnemonics, is `name`.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| {
            item.entry
                .as_action()
                .is_some_and(|action| action.plain_label() == name)
        })
    }

    fn insertion_index(&self, position: &MenuPosition) -> usize {
        match position {
            MenuPosition::Before(name) => self.position_of(name).unwrap_or_else(|| {
                tracing::warn!(menu = %self.name, action = %name, "anchor not found, appending");
                self.items.len()
            }),
            MenuPosition::End => self.items.len(),
        }
    }
}

impl MenuHost for FileMenu {
    fn register_action(&mut self, entry: &MenuEntry) -> Result<ActionId> {
        if entry.menu_name() != self.name {
            return Err(RecentFilesError::menu(format!(
                "no menu named '{}'",
                entry.menu_name()
            )));
        }
        let id = ActionId(self.next_id);
        self.next_id += 1;

        let index = self.insertion_index(entry.position());
        self.items.insert(
            index,
            FileMenuItem {
                id: Some(id),
                entry: entry.clone(),
            },
        );
        Ok(id)
    }

    fn unregister_action(&mut self, id: ActionId) -> Result<()> {
        let Some(index) = self.items.iter().position(|item| item.id == Some(id)) else {
            return Err(RecentFilesError::menu(format!(
                "action {} is not registered",
                id.0
            )));
        };
        self.items.remove(index);
        Ok(())
    }
}
