mod common;

use lazytodo_core::db::migrations::latest_version;
use lazytodo_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_task_store() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(latest_version(), 1);
    assert_eq!(schema_version(&conn), 1);
    assert_eq!(columns(&conn, "tasks"), ["id", "text", "completed", "created_at"]);
}

#[test]
fn created_at_index_is_not_unique() {
    let conn = open_db_in_memory().unwrap();

    let (name, unique): (String, i64) = conn
        .query_row(
            "SELECT name, \"unique\" FROM pragma_index_list('tasks')
             WHERE name = 'idx_tasks_created_at';",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(name, "idx_tasks_created_at");
    assert_eq!(unique, 0);
}

#[test]
fn reopening_existing_file_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lazytodo.sqlite3");

    let first = open_db(&path).unwrap();
    first
        .execute(
            "INSERT INTO tasks (id, text, completed, created_at) VALUES (1, 'keep me', 0, 1);",
            [],
        )
        .unwrap();
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(schema_version(&second), latest_version());
    let count: i64 = second
        .query_row("SELECT COUNT(*) FROM tasks;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");
    common::write_future_schema(&path);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn opening_a_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(open_db(dir.path()), Err(DbError::Sqlite(_))));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn columns(conn: &Connection, table: &str) -> Vec<String> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({table});"))
        .unwrap();
    let mut rows = stmt.query([]).unwrap();
    let mut names = Vec::new();
    while let Some(row) = rows.next().unwrap() {
        names.push(row.get::<_, String>(1).unwrap());
    }
    names
}
