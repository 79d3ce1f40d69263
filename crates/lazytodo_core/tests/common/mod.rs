#![allow(dead_code)]

use lazytodo_core::{Clock, Locale, TaskListView, TaskStore};
use rusqlite::Connection;
use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::Rc;

/// Clock that advances by `step` milliseconds on every read.
pub struct SteppingClock {
    next: Cell<i64>,
    step: i64,
}

impl SteppingClock {
    pub fn starting_at(start: i64, step: i64) -> Self {
        Self {
            next: Cell::new(start),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now_epoch_ms(&self) -> i64 {
        let now = self.next.get();
        self.next.set(now + self.step);
        now
    }
}

pub type Renders = Rc<RefCell<Vec<TaskListView>>>;

/// Store with a deterministic clock and a sink recording every render.
pub fn recording_store(locale: Locale) -> (TaskStore<SteppingClock>, Renders) {
    let renders: Renders = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&renders);
    let store = TaskStore::with_clock(
        SteppingClock::starting_at(1_700_000_000_000, 1),
        locale,
        move |view: &TaskListView| sink.borrow_mut().push(view.clone()),
    );
    (store, renders)
}

/// Makes every UPDATE on `tasks` abort, so upserts of existing ids fail.
pub fn fail_updates(path: &Path) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        "CREATE TRIGGER fail_task_updates BEFORE UPDATE ON tasks
         BEGIN
            SELECT RAISE(ABORT, 'injected update failure');
         END;",
    )
    .unwrap();
}

/// Makes every DELETE on `tasks` abort.
pub fn fail_deletes(path: &Path) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        "CREATE TRIGGER fail_task_deletes BEFORE DELETE ON tasks
         BEGIN
            SELECT RAISE(ABORT, 'injected delete failure');
         END;",
    )
    .unwrap();
}

/// Writes a `user_version` newer than any supported schema.
pub fn write_future_schema(path: &Path) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
}

/// Inserts a row directly, bypassing task validation.
pub fn insert_raw_task(path: &Path, id: i64, text: &str) {
    let conn = Connection::open(path).unwrap();
    conn.execute(
        "INSERT INTO tasks (id, text, completed, created_at) VALUES (?1, ?2, 0, ?1);",
        rusqlite::params![id, text],
    )
    .unwrap();
}

/// Number of rows currently stored, read through a separate connection.
pub fn stored_row_count(path: &Path) -> i64 {
    let conn = Connection::open(path).unwrap();
    conn.query_row("SELECT COUNT(*) FROM tasks;", [], |row| row.get(0))
        .unwrap()
}
