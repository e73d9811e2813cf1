//! Terminal output for the recent files list and the File menu preview.

use std::path::PathBuf;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ride_recentfiles::{FileMenu, MenuEntry, display_name};

/// Table of recent files, most recent first.
pub fn render_recent_files(entries: &[PathBuf], max_entries: usize) -> String {
    if entries.is_empty() {
        return format!("No recent files (keeping up to {max_entries}).");
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Name"),
        header_cell("Path"),
        header_cell("Exists"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for (index, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(display_name(entry)),
            Cell::new(entry.display()),
            exists_cell(entry.exists()),
        ]);
    }
    format!("{table}\n{} of {max_entries} recent files", entries.len())
}

/// Plain-text outline of `menu`, one item per line.
///
/// Separators print as `----` and disabled items get a ` [disabled]` suffix.
pub fn render_menu(menu: &FileMenu) -> String {
    let mut lines = vec![menu.name().to_string()];
    lines.extend(menu.items().iter().map(|item| match &item.entry {
        MenuEntry::Separator(_) => "  ----".to_string(),
        MenuEntry::Action(action) => {
            let mut line = format!("  {}", action.label);
            if !action.enabled {
                line.push_str(" [disabled]");
            }
            if let Some(doc) = &action.doc {
                line.push_str(&format!("  ({doc})"));
            }
            line
        }
    }));
    lines.join("\n")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn exists_cell(exists: bool) -> Cell {
    if exists {
        Cell::new("yes").fg(Color::Green)
    } else {
        Cell::new("missing").fg(Color::Red)
    }
}
