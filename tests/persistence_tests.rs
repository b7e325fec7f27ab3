// Integration tests for state that outlives a session

use std::fs;
use std::path::Path;

use rpntty::engine::calculator::{Calculator, EngineConfig, MenuState};
use rpntty::engine::dispatch::Key;
use rpntty::memory::real::Real;
use rpntty::persist::records::{self, QUEUE_INDEX_RECORD, QUEUE_RECORD, THEME_RECORD};
use rpntty::persist::{FileStore, KeyValueStore, MemoryStore, StoreError};

fn config() -> EngineConfig {
    EngineConfig {
        theme_count: 4,
        ..EngineConfig::default()
    }
}

fn open(dir: &Path) -> Calculator {
    let store = FileStore::open(dir).expect("open store");
    Calculator::new(Box::new(store), config())
}

fn push(calc: &mut Calculator, text: &str) {
    for c in text.chars() {
        calc.append(c).unwrap();
    }
    calc.commit().unwrap();
}

#[test]
fn test_queue_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut calc = open(dir.path());
    push(&mut calc, "1.5");
    calc.store().unwrap();
    push(&mut calc, "4");
    calc.store().unwrap();
    drop(calc);

    assert!(dir.path().join("QUEUE.bin").exists());
    assert!(dir.path().join("QUEUEINDEX.bin").exists());

    let mut calc = open(dir.path());
    assert_eq!(calc.queue().values(), &[Real::new(1.5), Real::new(4.0)]);
    assert!(calc.stack().is_empty());

    calc.recall().unwrap();
    assert_eq!(calc.stack().values(), &[Real::new(1.5), Real::new(4.0)]);
    drop(calc);

    // Recall emptied the queue, and that was saved too
    let calc = open(dir.path());
    assert!(calc.queue().is_empty());
}

#[test]
fn test_theme_selection_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut calc = open(dir.path());
    assert_eq!(calc.theme_index(), 0);
    calc.handle_key(Key::Alpha);
    calc.handle_key(Key::Window);
    assert_eq!(calc.menu_state(), MenuState::Selecting);
    calc.handle_key(Key::Up);
    calc.handle_key(Key::Up);
    calc.handle_key(Key::Enter);
    assert_eq!(calc.menu_state(), MenuState::Closed);
    assert_eq!(calc.theme_index(), 2);
    drop(calc);

    let calc = open(dir.path());
    assert_eq!(calc.theme_index(), 2);
}

#[test]
fn test_previewed_theme_is_not_saved() {
    let dir = tempfile::tempdir().unwrap();

    let mut calc = open(dir.path());
    calc.handle_key(Key::Alpha);
    calc.handle_key(Key::Window);
    calc.handle_key(Key::Up);
    calc.handle_key(Key::Alpha);
    assert_eq!(calc.menu_state(), MenuState::Closed);
    drop(calc);

    assert!(!dir.path().join("RPNTHEME.bin").exists());
    assert_eq!(open(dir.path()).theme_index(), 0);
}

#[test]
fn test_corrupt_records_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("QUEUE.bin"), [1u8, 2, 3]).unwrap();
    fs::write(dir.path().join("QUEUEINDEX.bin"), 1u32.to_le_bytes()).unwrap();
    fs::write(dir.path().join("RPNTHEME.bin"), 9u32.to_le_bytes()).unwrap();

    let mut calc = open(dir.path());
    assert!(calc.queue().is_empty());
    assert_eq!(calc.theme_index(), 0);

    // The next store overwrites the broken records
    push(&mut calc, "7");
    calc.store().unwrap();
    drop(calc);

    let calc = open(dir.path());
    assert_eq!(calc.queue().values(), &[Real::new(7.0)]);
}

#[test]
fn test_half_written_queue_is_ignored() {
    let mut store = MemoryStore::new();
    store.write(QUEUE_INDEX_RECORD, &3u32.to_le_bytes()).unwrap();

    let calc = Calculator::new(Box::new(store), config());
    assert!(calc.queue().is_empty());
}

#[test]
fn test_undo_rewrites_queue_record() {
    let mut calc = Calculator::new(Box::new(MemoryStore::new()), config());
    push(&mut calc, "3");
    calc.store().unwrap();
    calc.restore().unwrap();
    assert!(calc.queue().is_empty());
    assert_eq!(calc.stack().values(), &[Real::new(3.0)]);

    let store = calc.into_store();
    let queue = records::load_queue(store.as_ref())
        .unwrap()
        .expect("queue record written");
    assert!(queue.is_empty());
}

#[test]
fn test_memory_store_carries_over_sessions() {
    let mut calc = Calculator::new(Box::new(MemoryStore::new()), config());
    push(&mut calc, "2");
    calc.store().unwrap();

    let store = calc.into_store();
    assert!(store.read(QUEUE_RECORD).unwrap().is_some());
    assert!(store.read(THEME_RECORD).unwrap().is_none());

    let calc = Calculator::new(store, config());
    assert_eq!(calc.queue().values(), &[Real::new(2.0)]);
}

#[test]
fn test_file_store_rejects_bad_names() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();

    assert!(matches!(
        store.write("../escape", b"x"),
        Err(StoreError::InvalidName(_))
    ));
    assert!(matches!(store.read(""), Err(StoreError::InvalidName(_))));

    store.write("SCRATCH_1", b"abc").unwrap();
    assert_eq!(store.read("SCRATCH_1").unwrap(), Some(b"abc".to_vec()));
    assert_eq!(store.read("MISSING").unwrap(), None);
}

#[test]
fn test_file_store_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let store = FileStore::open(&nested).unwrap();
    assert!(nested.is_dir());
    assert_eq!(store.dir(), nested.as_path());
}

/// A store whose disk is gone: every read and write fails
struct FailingStore;

impl KeyValueStore for FailingStore {
    fn read(&self, _name: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read denied").into())
    }

    fn write(&mut self, _name: &str, _data: &[u8]) -> Result<(), StoreError> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "write denied").into())
    }
}

#[test]
fn test_store_failures_are_not_fatal() {
    let mut calc = Calculator::new(Box::new(FailingStore), config());
    assert!(calc.queue().is_empty());
    assert_eq!(calc.theme_index(), 0);

    push(&mut calc, "5");
    push(&mut calc, "6");
    assert_eq!(calc.store(), Ok(()));
    assert_eq!(calc.queue().values(), &[Real::new(6.0)]);
    assert_eq!(calc.stack().values(), &[Real::new(5.0)]);

    assert_eq!(calc.recall(), Ok(()));
    assert!(calc.queue().is_empty());
    assert_eq!(calc.stack().values(), &[Real::new(5.0), Real::new(6.0)]);

    assert_eq!(calc.restore(), Ok(()));
    assert_eq!(calc.queue().values(), &[Real::new(6.0)]);

    calc.handle_key(Key::Alpha);
    calc.handle_key(Key::Window);
    calc.handle_key(Key::Up);
    calc.handle_key(Key::Enter);
    assert_eq!(calc.menu_state(), MenuState::Closed);
    assert_eq!(calc.theme_index(), 1);
}
