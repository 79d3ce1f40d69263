use super::error::{StorageError, StorageResult};
use super::pending::{PendingWrite, WriteOp};
use super::writer::{self, StorageCommand, Writer};
use crate::db::{open_db, open_db_in_memory};
use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{RepoResult, SqliteTaskRepository, TaskRepository};
use log::{error, info};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;
use tokio::sync::{mpsc, oneshot};

/// Where the task database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    File(PathBuf),
    InMemory,
}

/// Handle to the storage writer.
///
/// Cloning the handle shares the same writer and queue. Dropping the last
/// handle closes the queue and blocks until the writer has applied every
/// command still in it.
#[derive(Debug, Clone)]
pub struct StorageAdapter {
    inner: Arc<WriterHandle>,
}

#[derive(Debug)]
struct WriterHandle {
    sender: Option<mpsc::UnboundedSender<StorageCommand>>,
    thread: Option<JoinHandle<()>>,
}

impl Drop for WriterHandle {
    fn drop(&mut self) {
        drop(self.sender.take());

        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                error!(
                    "event=storage_close module=storage status=error error_code=storage_writer_panicked"
                );
            } else {
                info!("event=storage_close module=storage status=ok");
            }
        }
    }
}

impl StorageAdapter {
    /// Opens (or creates) the SQLite task database at `location`.
    ///
    /// # Errors
    /// Returns `StorageError::Repo` wrapping the database error when the file
    /// cannot be opened or its schema is newer than supported.
    pub async fn open(location: StorageLocation) -> StorageResult<Self> {
        Self::open_with(move || {
            let conn = match &location {
                StorageLocation::File(path) => open_db(path)?,
                StorageLocation::InMemory => open_db_in_memory()?,
            };
            Ok(SqliteTaskRepository::new(conn))
        })
        .await
    }

    /// Starts a writer over a repository built by `open` on the writer thread.
    pub async fn open_with<R, F>(open: F) -> StorageResult<Self>
    where
        R: TaskRepository + 'static,
        F: FnOnce() -> RepoResult<R> + Send + 'static,
    {
        let Writer { sender, thread } = writer::spawn(open).await?;
        Ok(Self {
            inner: Arc::new(WriterHandle {
                sender: Some(sender),
                thread: Some(thread),
            }),
        })
    }

    /// Returns every stored task in unspecified order.
    ///
    /// Runs behind every write enqueued before this call.
    pub async fn get_all(&self) -> StorageResult<Vec<Task>> {
        let (respond_to, response) = oneshot::channel();
        self.send(StorageCommand::GetAll { respond_to })?;
        response
            .await
            .map_err(|_| StorageError::WriterGone)?
            .map_err(StorageError::from)
    }

    /// Resolves once every command enqueued before this call has been applied.
    ///
    /// Individual write failures are reported on their own handles, not here.
    pub async fn flush(&self) -> StorageResult<()> {
        let (respond_to, response) = oneshot::channel();
        self.send(StorageCommand::Flush { respond_to })?;
        response.await.map_err(|_| StorageError::WriterGone)
    }

    /// Inserts or overwrites `task` by id.
    pub fn put(&self, task: Task) -> PendingWrite {
        self.submit(WriteOp::Put(task))
    }

    /// Removes the task with `id`; absent ids succeed.
    pub fn delete_by_id(&self, id: TaskId) -> PendingWrite {
        self.submit(WriteOp::Delete(id))
    }

    /// Removes every stored task.
    pub fn clear(&self) -> PendingWrite {
        self.submit(WriteOp::Clear)
    }

    /// Places `op` at the back of the writer queue.
    pub fn submit(&self, op: WriteOp) -> PendingWrite {
        let (respond_to, response) = oneshot::channel();
        let command = StorageCommand::Write {
            op: op.clone(),
            respond_to,
        };

        if self.send(command).is_err() {
            error!(
                "event=storage_enqueue module=storage status=error op={} error_code=storage_writer_gone",
                op.label()
            );
            return PendingWrite::rejected(op, StorageError::WriterGone);
        }

        PendingWrite::queued(op, response)
    }

    fn send(&self, command: StorageCommand) -> StorageResult<()> {
        match &self.inner.sender {
            Some(sender) => sender.send(command).map_err(|_| StorageError::WriterGone),
            None => Err(StorageError::WriterGone),
        }
    }
}
