//! Tests for the recent files tracker.

mod common;

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use common::{LoggingStore, TestHost, new_log, paths};
use ride_recentfiles::{
    FileMenu, MemorySettingsStore, NO_RECENT_FILES, RecentFilesState, RecentFilesTracker,
    build_menu_entries,
};

fn tracker_with_max(max: usize) -> RecentFilesTracker<MemorySettingsStore> {
    RecentFilesTracker::new(
        RecentFilesState::with_max_entries(max).unwrap(),
        MemorySettingsStore::default(),
    )
}

fn record_all(
    tracker: &mut RecentFilesTracker<MemorySettingsStore>,
    menu: &mut FileMenu,
    values: &[&str],
) {
    for value in values {
        tracker.record_opened(Some(Path::new(value)), menu).unwrap();
    }
}

#[test]
fn record_keeps_most_recent_within_bound() {
    let mut tracker = tracker_with_max(4);
    let mut menu = FileMenu::standard();
    record_all(&mut tracker, &mut menu, &["/a", "/b", "/c", "/d", "/e"]);

    assert_eq!(tracker.entries(), paths(&["/e", "/d", "/c", "/b"]).as_slice());
    assert_eq!(
        tracker.store().saved().unwrap().recent_files,
        paths(&["/e", "/d", "/c", "/b"])
    );
}

#[test]
fn record_existing_moves_to_front() {
    let mut tracker = tracker_with_max(4);
    let mut menu = FileMenu::standard();
    record_all(&mut tracker, &mut menu, &["/a", "/b", "/c", "/a"]);

    assert_eq!(tracker.entries(), paths(&["/a", "/c", "/b"]).as_slice());
}

#[test]
fn record_empty_or_missing_path_is_ignored() {
    let mut tracker = tracker_with_max(4);
    let mut menu = FileMenu::standard();
    record_all(&mut tracker, &mut menu, &["/a"]);

    assert!(!tracker.record_opened(Some(Path::new("")), &mut menu).unwrap());
    assert!(!tracker.record_opened(None, &mut menu).unwrap());
    assert_eq!(tracker.entries(), paths(&["/a"]).as_slice());
    assert_eq!(tracker.store().save_count(), 1);
}

#[test]
fn rename_keeps_position() {
    let mut tracker = tracker_with_max(4);
    let mut menu = FileMenu::standard();
    record_all(&mut tracker, &mut menu, &["/b", "/a"]);

    assert!(
        tracker
            .rename_entry(Some(Path::new("/b")), Path::new("/b2"), &mut menu)
            .unwrap()
    );
    assert_eq!(tracker.entries(), paths(&["/a", "/b2"]).as_slice());

    let labels: Vec<String> = menu
        .recent_files()
        .iter()
        .map(|handler| handler.path().display().to_string())
        .collect();
    assert_eq!(labels, vec!["/a", "/b2"]);
}

#[test]
fn rename_of_untracked_file_is_ignored() {
    let mut tracker = tracker_with_max(4);
    let mut menu = FileMenu::standard();
    record_all(&mut tracker, &mut menu, &["/a"]);

    assert!(
        !tracker
            .rename_entry(Some(Path::new("/other")), Path::new("/other2"), &mut menu)
            .unwrap()
    );
    assert_eq!(tracker.entries(), paths(&["/a"]).as_slice());
    assert_eq!(tracker.store().save_count(), 1);
}

#[test]
fn initializer_file_and_directory_are_one_entry() {
    let mut tracker = tracker_with_max(4);
    let mut menu = FileMenu::standard();
    record_all(
        &mut tracker,
        &mut menu,
        &["/suites/login/__init__.robot", "/other.robot", "/suites/login"],
    );

    assert_eq!(
        tracker.entries(),
        paths(&["/suites/login", "/other.robot"]).as_slice()
    );
    let first = menu.recent_files()[0].path().to_path_buf();
    assert_eq!(first, PathBuf::from("/suites/login"));
}

#[test]
fn confirm_save_records_pending_project() {
    let mut tracker = tracker_with_max(4);
    let mut menu = FileMenu::standard();
    record_all(&mut tracker, &mut menu, &["/a"]);

    tracker.note_new_project("/p");
    assert!(tracker.confirm_save(&mut menu).unwrap());
    assert_eq!(tracker.entries()[0], PathBuf::from("/p"));
    assert!(tracker.state().pending_new_project().is_none());
}

#[test]
fn abandoned_project_is_never_recorded() {
    let mut tracker = tracker_with_max(4);
    let mut menu = FileMenu::standard();

    tracker.note_new_project("/p");
    tracker.clear_pending_new_project();
    record_all(&mut tracker, &mut menu, &["/q"]);

    assert!(!tracker.confirm_save(&mut menu).unwrap());
    assert_eq!(tracker.entries(), paths(&["/q"]).as_slice());
}

#[test]
fn empty_list_shows_placeholder() {
    let mut tracker = tracker_with_max(4);
    let mut menu = FileMenu::standard();
    tracker.refresh_menu(&mut menu).unwrap();

    let registered = menu.registered();
    assert_eq!(registered.len(), 2);
    let placeholder = registered.values().find_map(|entry| entry.as_action()).unwrap();
    assert_eq!(placeholder.label, NO_RECENT_FILES);
    assert!(!placeholder.enabled);

    let exit = menu.position_of("Exit").unwrap();
    let placeholder_index = menu.position_of(NO_RECENT_FILES).unwrap();
    assert_eq!(placeholder_index + 2, exit);
    assert!(menu.items()[exit - 1].entry.is_separator());
}

#[test]
fn handlers_open_the_path_captured_at_build_time() {
    let log = new_log();
    let mut host = TestHost::new(&log);
    let entries = build_menu_entries(&paths(&["/a.robot", "/b.robot"]));
    let handler = entries[1].as_action().unwrap().handler.clone().unwrap();

    // the list moving on does not change what the built entry opens
    let mut tracker = tracker_with_max(4);
    let mut menu = FileMenu::standard();
    record_all(&mut tracker, &mut menu, &["/c.robot", "/d.robot"]);

    handler.activate(&mut host).unwrap();
    assert_eq!(host.opened, paths(&["/b.robot"]));
}

#[test]
fn every_change_saves_before_rebuilding() {
    let log = new_log();
    let mut host = TestHost::new(&log);
    let mut tracker = RecentFilesTracker::load(LoggingStore::new(&log)).unwrap();

    tracker.record_opened(Some(Path::new("/a")), &mut host).unwrap();
    assert_eq!(*log.borrow(), vec!["save", "register", "register"]);

    log.borrow_mut().clear();
    tracker.record_opened(Some(Path::new("/b")), &mut host).unwrap();
    assert_eq!(
        *log.borrow(),
        vec![
            "save",
            "unregister",
            "unregister",
            "register",
            "register",
            "register"
        ]
    );

    log.borrow_mut().clear();
    tracker.record_opened(None, &mut host).unwrap();
    tracker
        .rename_entry(Some(Path::new("/nope")), Path::new("/x"), &mut host)
        .unwrap();
    assert!(log.borrow().is_empty());

    assert_eq!(host.recent_labels(), vec!["&1: b", "&2: a"]);
}

#[test]
fn clear_and_prune() {
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().join("kept.robot");
    std::fs::write(&existing, "*** Test Cases ***\n").unwrap();
    let missing = dir.path().join("gone.robot");

    let mut tracker = tracker_with_max(4);
    let mut menu = FileMenu::standard();
    tracker.record_opened(Some(missing.as_path()), &mut menu).unwrap();
    tracker.record_opened(Some(existing.as_path()), &mut menu).unwrap();

    let removed = tracker.prune_missing(&mut menu).unwrap();
    assert_eq!(removed, vec![missing]);
    assert_eq!(tracker.entries(), &[existing]);

    assert!(tracker.clear(&mut menu).unwrap());
    assert!(tracker.entries().is_empty());
    assert_eq!(menu.recent_files().len(), 0);
    assert!(menu.position_of(NO_RECENT_FILES).is_some());
}

proptest! {
    #[test]
    fn record_never_exceeds_bound_or_duplicates(
        max in 1usize..6,
        picks in proptest::collection::vec(0usize..8, 0..40),
    ) {
        let mut tracker = tracker_with_max(max);
        let mut menu = FileMenu::standard();
        for pick in &picks {
            let path = PathBuf::from(format!("/suite{pick}.robot"));
            tracker.record_opened(Some(path.as_path()), &mut menu).unwrap();

            let entries = tracker.entries();
            prop_assert!(entries.len() <= max);
            prop_assert_eq!(&entries[0], &path);
            for (i, entry) in entries.iter().enumerate() {
                prop_assert!(!entries[i + 1..].contains(entry));
            }
        }
        prop_assert_eq!(menu.recent_files().len(), tracker.entries().len());
    }
}
