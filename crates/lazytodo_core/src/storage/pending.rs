use super::error::{StorageError, StorageResult};
use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::RepoResult;
use tokio::sync::oneshot;

/// A mutation queued for the storage writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOp {
    Put(Task),
    Delete(TaskId),
    Clear,
}

impl WriteOp {
    /// Short operation name used in log events.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Put(_) => "put",
            Self::Delete(_) => "delete",
            Self::Clear => "clear",
        }
    }

    /// Record touched by this operation, `None` for `Clear`.
    pub fn task_id(&self) -> Option<TaskId> {
        match self {
            Self::Put(task) => Some(task.id),
            Self::Delete(id) => Some(*id),
            Self::Clear => None,
        }
    }
}

/// Completion handle of one queued write.
///
/// Dropping the handle does not cancel the write. Failures are logged by the
/// writer either way; waiting only lets the caller observe the outcome.
#[derive(Debug)]
#[must_use = "drop the handle explicitly to fire and forget"]
pub struct PendingWrite {
    op: WriteOp,
    state: PendingState,
}

#[derive(Debug)]
enum PendingState {
    Queued(oneshot::Receiver<RepoResult<()>>),
    Rejected(StorageError),
}

impl PendingWrite {
    pub(crate) fn queued(op: WriteOp, receiver: oneshot::Receiver<RepoResult<()>>) -> Self {
        Self {
            op,
            state: PendingState::Queued(receiver),
        }
    }

    pub(crate) fn rejected(op: WriteOp, error: StorageError) -> Self {
        Self {
            op,
            state: PendingState::Rejected(error),
        }
    }

    pub fn op(&self) -> &WriteOp {
        &self.op
    }

    /// Waits until the writer has applied (or failed) this operation.
    pub async fn wait(self) -> StorageResult<()> {
        match self.state {
            PendingState::Queued(receiver) => match receiver.await {
                Ok(result) => result.map_err(StorageError::from),
                Err(_) => Err(StorageError::WriterGone),
            },
            PendingState::Rejected(err) => Err(err),
        }
    }
}
