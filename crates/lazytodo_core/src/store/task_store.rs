use crate::model::clock::{Clock, SystemClock};
use crate::model::filter::FilterKind;
use crate::model::task::{Task, TaskId};
use crate::storage::{
    PendingWrite, StorageAdapter, StorageError, StorageLocation, StorageResult, WriteOp,
};
use crate::view::{self, Locale, TaskListView};
use log::{debug, error, info};

/// Receives the freshly rendered view after every state change.
pub trait RenderSink {
    fn render(&mut self, view: &TaskListView);
}

impl<F: FnMut(&TaskListView)> RenderSink for F {
    fn render(&mut self, view: &TaskListView) {
        self(view)
    }
}

/// Whether mutations reach durable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    Persistent,
    /// Storage could not be opened; data is lost on restart.
    MemoryOnly,
}

/// Authoritative task list plus current filter.
///
/// Operations are synchronous for memory and rendering. Persistence is
/// queued and reported through the returned [`PendingWrite`], which callers
/// may await or drop.
pub struct TaskStore<C = SystemClock> {
    tasks: Vec<Task>,
    filter: FilterKind,
    locale: Locale,
    storage: Option<StorageAdapter>,
    clock: C,
    sink: Box<dyn RenderSink>,
}

impl TaskStore<SystemClock> {
    pub fn new(locale: Locale, sink: impl RenderSink + 'static) -> Self {
        Self::with_clock(SystemClock, locale, sink)
    }
}

impl<C: Clock> TaskStore<C> {
    /// Creates an empty, memory-only store using `clock` for new task ids.
    pub fn with_clock(clock: C, locale: Locale, sink: impl RenderSink + 'static) -> Self {
        Self {
            tasks: Vec::new(),
            filter: FilterKind::default(),
            locale,
            storage: None,
            clock,
            sink: Box::new(sink),
        }
    }

    /// Opens storage at `location` and loads every stored task.
    ///
    /// Never fails: when storage cannot be opened the store stays empty and
    /// keeps working in memory only. Renders once in every case.
    pub async fn initialize(&mut self, location: StorageLocation) -> StoreMode {
        let opened = StorageAdapter::open(location).await;
        self.initialize_with(opened).await
    }

    /// Same as [`TaskStore::initialize`] for an adapter opened by the caller.
    pub async fn initialize_with(&mut self, opened: StorageResult<StorageAdapter>) -> StoreMode {
        let storage = match opened {
            Ok(storage) => storage,
            Err(err) => {
                error!(
                    "event=store_init module=store status=error error_code=storage_open_failed error={err}"
                );
                self.tasks.clear();
                self.storage = None;
                self.render();
                return StoreMode::MemoryOnly;
            }
        };

        match storage.get_all().await {
            Ok(tasks) => {
                info!(
                    "event=store_init module=store status=ok mode=persistent count={}",
                    tasks.len()
                );
                self.tasks = tasks;
            }
            Err(err) => {
                error!(
                    "event=store_init module=store status=error error_code=storage_load_failed error={err}"
                );
                self.tasks.clear();
            }
        }
        self.storage = Some(storage);
        self.render();
        StoreMode::Persistent
    }

    /// Appends a task built from `raw_text`.
    ///
    /// Returns `None` and changes nothing when the trimmed text is empty.
    pub fn add(&mut self, raw_text: &str) -> Option<PendingWrite> {
        let task = Task::from_input(raw_text, self.clock.now_epoch_ms())?;
        debug!("event=task_add module=store status=ok task_id={}", task.id);

        self.tasks.push(task.clone());
        self.render();
        Some(self.persist(WriteOp::Put(task)))
    }

    /// Flips completion of the first task with `id`.
    ///
    /// Returns `None` when no task has that id.
    pub fn toggle_completion(&mut self, id: TaskId) -> Option<PendingWrite> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.toggle();
        let updated = task.clone();
        debug!(
            "event=task_toggle module=store status=ok task_id={id} completed={}",
            updated.completed
        );

        self.render();
        Some(self.persist(WriteOp::Put(updated)))
    }

    /// Removes every task with `id` and queues the storage delete.
    ///
    /// The delete is queued even when nothing matched in memory.
    pub fn delete(&mut self, id: TaskId) -> PendingWrite {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        debug!(
            "event=task_delete module=store status=ok task_id={id} removed={}",
            before - self.tasks.len()
        );

        self.render();
        self.persist(WriteOp::Delete(id))
    }

    pub fn set_filter(&mut self, kind: FilterKind) {
        self.filter = kind;
        self.render();
    }

    /// Waits until every write queued so far has reached storage.
    ///
    /// Memory-only stores have nothing queued and return immediately.
    pub async fn flush(&self) -> StorageResult<()> {
        match &self.storage {
            Some(storage) => storage.flush().await,
            None => Ok(()),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> FilterKind {
        self.filter
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn mode(&self) -> StoreMode {
        if self.storage.is_some() {
            StoreMode::Persistent
        } else {
            StoreMode::MemoryOnly
        }
    }

    pub fn storage(&self) -> Option<&StorageAdapter> {
        self.storage.as_ref()
    }

    /// Current view without notifying the sink.
    pub fn view(&self) -> TaskListView {
        view::render(&self.tasks, self.filter, self.locale)
    }

    fn render(&mut self) {
        let view = self.view();
        self.sink.render(&view);
    }

    fn persist(&self, op: WriteOp) -> PendingWrite {
        match &self.storage {
            Some(storage) => storage.submit(op),
            None => {
                error!(
                    "event=task_persist module=store status=error op={} error_code=storage_unavailable",
                    op.label()
                );
                PendingWrite::rejected(op, StorageError::Unavailable)
            }
        }
    }
}
