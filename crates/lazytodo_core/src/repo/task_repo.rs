//! Task repository contract and SQLite implementation.
//!
//! # Invariants
//! - `put` is an upsert keyed by `id`; there is no separate create/update path.
//! - `delete_by_id` succeeds when the id is absent.
//! - Each call is one statement and therefore one transaction.

use crate::db::DbError;
use crate::model::task::{Task, TaskId, TaskValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TASK_SELECT_SQL: &str = "SELECT id, text, completed, created_at FROM tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(TaskValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage contract for the task record store.
pub trait TaskRepository {
    /// Returns every stored task. Order is unspecified.
    fn get_all(&self) -> RepoResult<Vec<Task>>;
    /// Inserts the task or overwrites the row with the same id.
    fn put(&self, task: &Task) -> RepoResult<()>;
    fn delete_by_id(&self, id: TaskId) -> RepoResult<()>;
    fn clear(&self) -> RepoResult<()>;
}

/// SQLite-backed task repository owning its connection.
///
/// Owning the connection lets the repository move onto the storage writer
/// thread.
pub struct SqliteTaskRepository {
    conn: Connection,
}

impl SqliteTaskRepository {
    /// Wraps a connection returned by [`crate::db::open_db`] or
    /// [`crate::db::open_db_in_memory`].
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl TaskRepository for SqliteTaskRepository {
    fn get_all(&self) -> RepoResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!("{TASK_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();

        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn put(&self, task: &Task) -> RepoResult<()> {
        task.validate()?;

        self.conn.execute(
            "INSERT INTO tasks (id, text, completed, created_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
                text = excluded.text,
                completed = excluded.completed,
                created_at = excluded.created_at;",
            params![
                task.id,
                task.text.as_str(),
                bool_to_int(task.completed),
                task.created_at,
            ],
        )?;

        Ok(())
    }

    fn delete_by_id(&self, id: TaskId) -> RepoResult<()> {
        self.conn.execute("DELETE FROM tasks WHERE id = ?1;", [id])?;
        Ok(())
    }

    fn clear(&self) -> RepoResult<()> {
        self.conn.execute("DELETE FROM tasks;", [])?;
        Ok(())
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let id: TaskId = row.get("id")?;
    let completed = match row.get::<_, i64>("completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid completed value `{other}` in tasks.completed for id {id}"
            )));
        }
    };

    let task = Task {
        id,
        text: row.get("text")?,
        completed,
        created_at: row.get("created_at")?,
    };
    task.validate().map_err(|err| {
        RepoError::InvalidData(format!("task {id} failed validation: {err}"))
    })?;
    Ok(task)
}

fn bool_to_int(value: bool) -> i64 {
    i64::from(value)
}
