//! Background writer owning the task repository.

use super::error::{StorageError, StorageResult};
use super::pending::WriteOp;
use crate::model::task::Task;
use crate::repo::task_repo::{RepoResult, TaskRepository};
use log::{debug, error, info};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tokio::sync::{mpsc, oneshot};

const WRITER_THREAD_NAME: &str = "lazytodo-storage";

pub(crate) enum StorageCommand {
    GetAll {
        respond_to: oneshot::Sender<RepoResult<Vec<Task>>>,
    },
    Write {
        op: WriteOp,
        respond_to: oneshot::Sender<RepoResult<()>>,
    },
    /// Answered once every command queued before it has been applied.
    Flush {
        respond_to: oneshot::Sender<()>,
    },
}

/// Queue sender plus the thread draining it.
pub(crate) struct Writer {
    pub(crate) sender: mpsc::UnboundedSender<StorageCommand>,
    pub(crate) thread: JoinHandle<()>,
}

/// Starts the writer thread and waits until `open` has produced a repository.
///
/// The repository is built on the writer thread, so it never crosses threads.
/// The thread exits after the returned sender is dropped and the queue drained.
pub(crate) async fn spawn<R, F>(open: F) -> StorageResult<Writer>
where
    R: TaskRepository + 'static,
    F: FnOnce() -> RepoResult<R> + Send + 'static,
{
    let (sender, receiver) = mpsc::unbounded_channel();
    let (ready_tx, ready_rx) = oneshot::channel::<RepoResult<()>>();

    let handle = thread::Builder::new()
        .name(WRITER_THREAD_NAME.into())
        .spawn(move || match open() {
            Ok(repo) => {
                let _ = ready_tx.send(Ok(()));
                run(&repo, receiver);
            }
            Err(err) => {
                let _ = ready_tx.send(Err(err));
            }
        })
        .map_err(StorageError::Spawn)?;

    ready_rx.await.map_err(|_| StorageError::WriterGone)??;
    Ok(Writer {
        sender,
        thread: handle,
    })
}

fn run<R: TaskRepository>(repo: &R, mut receiver: mpsc::UnboundedReceiver<StorageCommand>) {
    info!("event=storage_writer module=storage status=start");

    while let Some(command) = receiver.blocking_recv() {
        match command {
            StorageCommand::GetAll { respond_to } => {
                let result = repo.get_all();
                match &result {
                    Ok(tasks) => debug!(
                        "event=storage_get_all module=storage status=ok count={}",
                        tasks.len()
                    ),
                    Err(err) => error!(
                        "event=storage_get_all module=storage status=error error_code=storage_read_failed error={err}"
                    ),
                }
                let _ = respond_to.send(result);
            }
            StorageCommand::Write { op, respond_to } => {
                let result = apply(repo, &op);
                let _ = respond_to.send(result);
            }
            StorageCommand::Flush { respond_to } => {
                let _ = respond_to.send(());
            }
        }
    }

    info!("event=storage_writer module=storage status=stopped");
}

fn apply<R: TaskRepository>(repo: &R, op: &WriteOp) -> RepoResult<()> {
    let started_at = Instant::now();
    let result = match op {
        WriteOp::Put(task) => repo.put(task),
        WriteOp::Delete(id) => repo.delete_by_id(*id),
        WriteOp::Clear => repo.clear(),
    };

    let task_id = op
        .task_id()
        .map_or_else(|| "none".to_string(), |id| id.to_string());
    match &result {
        Ok(()) => debug!(
            "event=storage_write module=storage status=ok op={} task_id={} duration_ms={}",
            op.label(),
            task_id,
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=storage_write module=storage status=error op={} task_id={} duration_ms={} error_code=storage_write_failed error={}",
            op.label(),
            task_id,
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}
