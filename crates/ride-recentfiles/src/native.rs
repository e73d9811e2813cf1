//! Native menu support.
//!
//! Menu frameworks such as `muda` identify clicked items by a string id, so
//! each recent file gets an id that carries its path. With the `native-menu`
//! feature, [`NativeFileMenu`] drives a `muda::Submenu` as a [`MenuHost`].
//!
//! [`MenuHost`]: crate::MenuHost

use std::path::{Path, PathBuf};

use base64::Engine;

use crate::host::SuiteOpener;

/// Menu item identifiers.
pub mod ids {
    /// Prefix for recent file items (followed by the encoded path).
    pub const RECENT_FILE_PREFIX: &str = "recent_file:";

    /// Placeholder when no recent files exist.
    pub const NO_RECENT_FILES: &str = "no_recent_files";

    /// Exit/Quit the application.
    pub const EXIT: &str = "exit";
}

/// Menu item id for the recent file at `path`.
pub fn recent_file_id(path: &Path) -> String {
    format!("{}{}", ids::RECENT_FILE_PREFIX, encode_path(path))
}

/// Path of the recent file a menu event refers to, if it is one.
pub fn menu_event_to_path(event_id: &str) -> Option<PathBuf> {
    event_id
        .strip_prefix(ids::RECENT_FILE_PREFIX)
        .and_then(decode_path)
}

/// Open the recent file a menu event refers to.
///
/// Returns `Ok(false)` for events that are not recent file clicks.
pub fn open_from_menu_event(event_id: &str, opener: &mut dyn SuiteOpener) -> crate::Result<bool> {
    let Some(path) = menu_event_to_path(event_id) else {
        return Ok(false);
    };
    tracing::info!(path = %path.display(), "opening recent file from menu");
    opener.open_suite(&path)?;
    Ok(true)
}

/// Encode a path as a URL-safe base64 string of its raw OS bytes.
fn encode_path(path: &Path) -> String {
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(os_bytes::to_bytes(path))
}

/// Decode a URL-safe base64 string back to the exact path.
fn decode_path(encoded: &str) -> Option<PathBuf> {
    base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(encoded)
        .ok()
        .and_then(os_bytes::from_bytes)
}

/// Lossless conversion between paths and bytes.
#[cfg(unix)]
mod os_bytes {
    use std::ffi::OsString;
    use std::os::unix::ffi::{OsStrExt, OsStringExt};
    use std::path::{Path, PathBuf};

    pub(super) fn to_bytes(path: &Path) -> Vec<u8> {
        path.as_os_str().as_bytes().to_vec()
    }

    pub(super) fn from_bytes(bytes: Vec<u8>) -> Option<PathBuf> {
        Some(PathBuf::from(OsString::from_vec(bytes)))
    }
}

/// Lossless conversion between paths and bytes (UTF-16 code units, little endian).
#[cfg(windows)]
mod os_bytes {
    use std::ffi::OsString;
    use std::os::windows::ffi::{OsStrExt, OsStringExt};
    use std::path::{Path, PathBuf};

    pub(super) fn to_bytes(path: &Path) -> Vec<u8> {
        path.as_os_str()
            .encode_wide()
            .flat_map(u16::to_le_bytes)
            .collect()
    }

    pub(super) fn from_bytes(bytes: Vec<u8>) -> Option<PathBuf> {
        if bytes.len() % 2 != 0 {
            return None;
        }
        let wide: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Some(PathBuf::from(OsString::from_wide(&wide)))
    }
}

#[cfg(not(any(unix, windows)))]
mod os_bytes {
    use std::path::{Path, PathBuf};

    pub(super) fn to_bytes(path: &Path) -> Vec<u8> {
        path.to_string_lossy().into_owned().into_bytes()
    }

    pub(super) fn from_bytes(bytes: Vec<u8>) -> Option<PathBuf> {
        String::from_utf8(bytes).ok().map(PathBuf::from)
    }
}

#[cfg(feature = "native-menu")]
pub use self::muda_menu::NativeFileMenu;

#[cfg(feature = "native-menu")]
mod muda_menu {
    use std::collections::HashMap;

    use muda::{MenuId, MenuItem, PredefinedMenuItem, Submenu};

    use super::{ids, recent_file_id};
    use crate::error::{RecentFilesError, Result};
    use crate::host::{ActionId, MenuHost};
    use crate::menu::{EXIT_ACTION, MenuEntry, MenuPosition};

    enum NativeItem {
        Item(MenuItem),
        Separator(PredefinedMenuItem),
    }

    /// A `muda` File submenu driven as a [`MenuHost`].
    ///
    /// `muda::Submenu` is not `Send`; keep this on the main thread.
    pub struct NativeFileMenu {
        submenu: Submenu,
        exit_id: MenuId,
        items: HashMap<ActionId, NativeItem>,
        next_id: u64,
    }

    impl NativeFileMenu {
        /// Wrap `submenu`; entries placed before `Exit` go above the item with `exit_id`.
        pub fn new(submenu: Submenu, exit_id: impl Into<MenuId>) -> Self {
            Self {
                submenu,
                exit_id: exit_id.into(),
                items: HashMap::new(),
                next_id: 1,
            }
        }

        /// Wrap `submenu`, using the standard exit id.
        pub fn with_default_exit(submenu: Submenu) -> Self {
            Self::new(submenu, ids::EXIT)
        }

        pub fn submenu(&self) -> &Submenu {
            &self.submenu
        }

        fn insertion_index(&self, position: &MenuPosition) -> usize {
            let items = self.submenu.items();
            match position {
                MenuPosition::Before(name) if name == EXIT_ACTION => items
                    .iter()
                    .position(|item| item.id() == &self.exit_id)
                    .unwrap_or(items.len()),
                MenuPosition::Before(_) | MenuPosition::End => items.len(),
            }
        }
    }

    impl MenuHost for NativeFileMenu {
        fn register_action(&mut self, entry: &MenuEntry) -> Result<ActionId> {
            let index = self.insertion_index(entry.position());
            let item = match entry {
                MenuEntry::Action(action) => {
                    let id = match &action.handler {
                        Some(handler) => recent_file_id(handler.path()),
                        None => ids::NO_RECENT_FILES.to_string(),
                    };
                    let item = MenuItem::with_id(id, &action.label, action.enabled, None);
                    self.submenu
                        .insert(&item, index)
                        .map_err(|e| RecentFilesError::menu(e.to_string()))?;
                    NativeItem::Item(item)
                }
                MenuEntry::Separator(_) => {
                    let separator = PredefinedMenuItem::separator();
                    self.submenu
                        .insert(&separator, index)
                        .map_err(|e| RecentFilesError::menu(e.to_string()))?;
                    NativeItem::Separator(separator)
                }
            };

            let id = ActionId(self.next_id);
            self.next_id += 1;
            self.items.insert(id, item);
            Ok(id)
        }

        fn unregister_action(&mut self, id: ActionId) -> Result<()> {
            let item = self
                .items
                .remove(&id)
                .ok_or_else(|| RecentFilesError::menu(format!("action {} is not registered", id.0)))?;
            let removed = match &item {
                NativeItem::Item(item) => self.submenu.remove(item),
                NativeItem::Separator(separator) => self.submenu.remove(separator),
            };
            removed.map_err(|e| RecentFilesError::menu(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Opener(Vec<PathBuf>);

    impl SuiteOpener for Opener {
        fn open_suite(&mut self, path: &Path) -> crate::Result<()> {
            self.0.push(path.to_path_buf());
            Ok(())
        }
    }

    #[test]
    fn test_recent_file_id_round_trips_path() {
        let path = Path::new("/suites/login tests/__init__.robot");
        let id = recent_file_id(path);
        assert!(id.starts_with(ids::RECENT_FILE_PREFIX));
        assert_eq!(menu_event_to_path(&id), Some(path.to_path_buf()));
    }

    #[cfg(unix)]
    #[test]
    fn test_recent_file_id_keeps_non_utf8_bytes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"/suites/caf\xe9.robot"));
        let decoded = menu_event_to_path(&recent_file_id(path)).unwrap();
        assert_eq!(decoded.as_os_str().as_bytes(), b"/suites/caf\xe9.robot");

        let mut opener = Opener(Vec::new());
        assert!(open_from_menu_event(&recent_file_id(path), &mut opener).unwrap());
        assert_eq!(opener.0, vec![path.to_path_buf()]);
    }

    #[test]
    fn test_other_events_are_not_recent_files() {
        assert_eq!(menu_event_to_path(ids::EXIT), None);
        assert_eq!(menu_event_to_path("recent_file:!!"), None);
    }

    #[test]
    fn test_open_from_menu_event() {
        let mut opener = Opener(Vec::new());
        let id = recent_file_id(Path::new("/suites/smoke.robot"));

        assert!(open_from_menu_event(&id, &mut opener).unwrap());
        assert!(!open_from_menu_event(ids::NO_RECENT_FILES, &mut opener).unwrap());
        assert_eq!(opener.0, vec![PathBuf::from("/suites/smoke.robot")]);
    }
}
