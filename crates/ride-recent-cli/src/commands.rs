//! Subcommand implementations.
//!
//! Each command loads the list from the settings file, applies its change
//! through the tracker (which saves before rebuilding the menu) and returns
//! the text to print.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use ride_recentfiles::{FileMenu, RecentFilesTracker, TomlSettingsStore};

use crate::cli::Command;
use crate::render::{render_menu, render_recent_files};

/// Settings file to use: the explicit one, or the RIDE default.
pub fn resolve_settings_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(TomlSettingsStore::default_path)
}

/// Run `command` against the settings at `settings_path`.
pub fn execute(command: &Command, settings_path: &Path) -> Result<String> {
    debug!(settings = %settings_path.display(), "loading recent files");
    let mut tracker = RecentFilesTracker::load(TomlSettingsStore::new(settings_path))
        .with_context(|| format!("load recent files from {}", settings_path.display()))?;
    let mut menu = FileMenu::standard();

    let output = match command {
        Command::List => render_recent_files(tracker.entries(), tracker.state().max_entries()),
        Command::Add(args) => {
            tracker
                .record_opened(Some(args.path.as_path()), &mut menu)
                .context("record recent file")?;
            render_recent_files(tracker.entries(), tracker.state().max_entries())
        }
        Command::Rename(args) => {
            let renamed = tracker
                .rename_entry(Some(args.old_path.as_path()), &args.new_path, &mut menu)
                .context("rename recent file")?;
            if renamed {
                render_recent_files(tracker.entries(), tracker.state().max_entries())
            } else {
                format!(
                    "{} is not a recent file; nothing changed.",
                    args.old_path.display()
                )
            }
        }
        Command::Clear => {
            let cleared = tracker.clear(&mut menu).context("clear recent files")?;
            if cleared {
                "Cleared recent files.".to_string()
            } else {
                "No recent files to clear.".to_string()
            }
        }
        Command::Prune => {
            let removed = tracker.prune_missing(&mut menu).context("prune recent files")?;
            info!(removed = removed.len(), "prune finished");
            if removed.is_empty() {
                "Every recent file still exists.".to_string()
            } else {
                let mut lines = vec![format!("Removed {} missing file(s):", removed.len())];
                lines.extend(removed.iter().map(|path| format!("  {}", path.display())));
                lines.join("\n")
            }
        }
        Command::SetMax(args) => {
            tracker
                .set_max_entries(args.max, &mut menu)
                .context("change maximum number of recent files")?;
            render_recent_files(tracker.entries(), tracker.state().max_entries())
        }
        Command::Menu => {
            tracker
                .refresh_menu(&mut menu)
                .context("build recent files menu")?;
            render_menu(&menu)
        }
    };
    Ok(output)
}
