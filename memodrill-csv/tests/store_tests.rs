use chrono::NaiveDate;
use memodrill_core::{Collection, Item, Quality, Sink};
use memodrill_csv::{CsvStore, StoreError};
use std::fs;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
}

#[test]
fn missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvStore::new(dir.path().join("deck.csv"));
    let loaded = store.load(day(1)).unwrap();
    assert!(loaded.collection.is_empty());
    assert_eq!(loaded.fresh, 0);
}

#[test]
fn save_then_load_keeps_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.csv");
    fs::write(&path, "Capital of Canada?,Ottawa\nCapital of Ontario?,Toronto\n").unwrap();

    let mut store = CsvStore::new(&path);
    let mut c = store.load(day(1)).unwrap().collection;
    c.get_mut(0).unwrap().assess(Quality::new(5).unwrap(), day(2));
    store.save(&c).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "Capital of Canada?,Ottawa,2.600000,1,1,2024-07-02\n\
         Capital of Ontario?,Toronto,2.500000,0,0,2024-07-01\n"
    );

    let reloaded = CsvStore::new(&path).load(day(9)).unwrap().collection;
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.get(0).unwrap().interval(), 1);
    assert_eq!(reloaded.get(1).unwrap().last_reviewed(), day(1));
}

#[test]
fn fresh_rows_keep_their_creation_day_once_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.csv");
    fs::write(&path, "Capital of Canada?,Ottawa\n").unwrap();

    let mut store = CsvStore::new(&path);
    let loaded = store.load(day(1)).unwrap();
    assert_eq!(loaded.fresh, 1);
    assert!(loaded.collection.due_items(day(1)).is_empty());
    store.save(&loaded.collection).unwrap();

    let later = CsvStore::new(&path).load(day(2)).unwrap();
    assert_eq!(later.fresh, 0);
    let item = later.collection.get(0).unwrap();
    assert_eq!(item.last_reviewed(), day(1));
    assert!(item.is_due(day(2)));
}

#[test]
fn fresh_rows_reloaded_unsaved_are_redated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.csv");
    fs::write(&path, "q,a\n").unwrap();

    // nothing written back, so the row is new again on the next load
    let later = CsvStore::new(&path).load(day(5)).unwrap();
    assert_eq!(later.fresh, 1);
    assert_eq!(later.collection.get(0).unwrap().last_reviewed(), day(5));
}

#[test]
fn first_save_backs_up_previous_file_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.csv");
    fs::write(&path, "q,a\n").unwrap();

    let mut store = CsvStore::new(&path);
    let c = store.load(day(1)).unwrap().collection;
    store.save(&c).unwrap();
    store.save(&c).unwrap();

    let backups: Vec<_> = fs::read_dir(store.backups_dir())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(backups.len(), 1);
    assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "q,a\n");
}

#[test]
fn no_backup_for_new_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = CsvStore::new(dir.path().join("fresh.csv"));
    let c: Collection = vec![Item::create("q", "a", day(3))].into();
    Sink::save(&mut store, &c).unwrap();

    assert!(store.path().exists());
    assert!(!store.backups_dir().exists());
}

#[test]
fn backups_are_pruned() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.csv");
    let backups = dir.path().join("bk");
    fs::create_dir_all(&backups).unwrap();
    for i in 0..4 {
        fs::write(backups.join(format!("deck-2000010{i}-000000.csv")), "old").unwrap();
    }
    fs::write(backups.join("unrelated.txt"), "keep me").unwrap();
    fs::write(&path, "q,a\n").unwrap();

    let mut store = CsvStore::with_backups(&path, &backups, 2);
    store.save(&Collection::new()).unwrap();

    let mut names: Vec<_> = fs::read_dir(&backups)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names.len(), 3);
    assert!(names.contains(&"unrelated.txt".to_string()));
}

#[test]
fn bad_row_is_reported_with_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.csv");
    fs::write(&path, "q,a\nq,a,easy,0,0,2024-01-01\n").unwrap();

    let err = CsvStore::new(&path).load(day(1)).unwrap_err();
    assert!(matches!(err, StoreError::Row { line: 2, .. }));
    assert!(err.to_string().starts_with("line 2: invalid easiness"));
}
