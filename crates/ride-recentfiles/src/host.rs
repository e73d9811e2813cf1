//! Collaborators provided by the host application.
//!
//! The IDE owns its menu framework, event bus and suite loader. The recent
//! files code only calls into them through these traits.

use std::path::Path;

use crate::error::Result;
use crate::event::EventKind;
use crate::menu::MenuEntry;

/// Handle of a menu entry registered with a [`MenuHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(pub u64);

/// Menu framework of the host application.
pub trait MenuHost {
    /// Add an entry to the menu it names, at the position it requests.
    fn register_action(&mut self, entry: &MenuEntry) -> Result<ActionId>;

    /// Remove a previously registered entry.
    fn unregister_action(&mut self, id: ActionId) -> Result<()>;
}

/// Event bus of the host application.
pub trait EventBus {
    fn subscribe(&mut self, kind: EventKind);

    fn unsubscribe(&mut self, kind: EventKind);
}

/// Suite loader of the host application.
pub trait SuiteOpener {
    /// Open the suite at `path` in the editor.
    fn open_suite(&mut self, path: &Path) -> Result<()>;
}
