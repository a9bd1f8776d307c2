use std::future::Future;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use futures::task::{LocalSpawn, LocalSpawnExt};
use tracing::{debug, error, warn};

use crate::core::error::StoreError;
use crate::core::models::{IdGenerator, Task, TaskId, TaskStatus};
use super::storage::{decode_tasks, encode_tasks, KeyValueStorage};

/// Tasks of `tasks` in one column, in insertion order.
pub fn filter_by_status(tasks: &[Task], status: TaskStatus) -> impl Iterator<Item = &Task> {
    tasks.iter().filter(move |task| task.status == status)
}

async fn read_tasks(storage: Rc<dyn KeyValueStorage>, key: String) -> Result<Vec<Task>, StoreError> {
    match storage.get_item(&key).await.map_err(StoreError::Read)? {
        Some(raw) if !raw.is_empty() => Ok(decode_tasks(&raw)?),
        _ => Ok(Vec::new()),
    }
}

/// Owns the board's task list and keeps storage in step with it.
///
/// Every mutation returns the full new list and schedules a write of that
/// snapshot on the spawner. Writes are never awaited: a failed write is
/// logged and the in-memory list keeps the change.
pub struct TaskStore {
    storage: Rc<dyn KeyValueStorage>,
    spawner: Rc<dyn LocalSpawn>,
    key: String,
    tasks: Vec<Task>,
    loading: bool,
    ids: IdGenerator,
    clock: fn() -> DateTime<Utc>,
}

impl TaskStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>, spawner: Rc<dyn LocalSpawn>, key: impl Into<String>) -> Self {
        Self {
            storage,
            spawner,
            key: key.into(),
            tasks: Vec::new(),
            loading: true,
            ids: IdGenerator::default(),
            clock: Utc::now,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks_with_status(&self, status: TaskStatus) -> impl Iterator<Item = &Task> {
        filter_by_status(&self.tasks, status)
    }

    /// The three columns in board order.
    pub fn partition_by_status(&self) -> [(TaskStatus, Vec<&Task>); 3] {
        TaskStatus::all().map(|status| (status, self.tasks_with_status(status).collect()))
    }

    /// Reads and decodes the saved list without borrowing the store, so a
    /// caller can await it and hand the result to [`TaskStore::finish_load`].
    pub fn begin_load(&self) -> impl Future<Output = Result<Vec<Task>, StoreError>> + 'static {
        read_tasks(Rc::clone(&self.storage), self.key.clone())
    }

    pub fn finish_load(&mut self, result: Result<Vec<Task>, StoreError>) -> &[Task] {
        match result {
            Ok(tasks) => {
                for task in &tasks {
                    self.ids.observe(task.id);
                }
                if !self.tasks.is_empty() {
                    warn!(key = %self.key, discarded = self.tasks.len(), "tasks added before load finished were replaced");
                }
                debug!(key = %self.key, count = tasks.len(), "loaded tasks");
                self.tasks = tasks;
            }
            Err(err) => {
                error!(key = %self.key, kind = ?err.kind(), "failed to load tasks: {}", err);
            }
        }
        self.loading = false;
        &self.tasks
    }

    pub async fn load(&mut self) -> &[Task] {
        let result = self.begin_load().await;
        self.finish_load(result)
    }

    /// Schedules a write of the current list. Failures are logged only.
    pub fn persist(&self) {
        if let Err(err) = self.schedule_save() {
            error!(key = %self.key, kind = ?err.kind(), "failed to save tasks: {}", err);
        }
    }

    fn schedule_save(&self) -> Result<(), StoreError> {
        let snapshot = encode_tasks(&self.tasks).map_err(StoreError::Encode)?;
        let storage = Rc::clone(&self.storage);
        let key = self.key.clone();
        let count = self.tasks.len();

        self.spawner.spawn_local(async move {
            match storage.set_item(&key, &snapshot).await {
                Ok(()) => debug!(key = %key, count, "saved tasks"),
                Err(err) => {
                    let err = StoreError::Write(err);
                    error!(key = %key, kind = ?err.kind(), "failed to save tasks: {}", err);
                }
            }
        })?;
        Ok(())
    }

    /// Appends a new `Todo` task. A blank title leaves the list untouched and
    /// writes nothing.
    pub fn add(&mut self, title: impl Into<String>, description: impl Into<String>) -> &[Task] {
        let title = title.into();
        if title.trim().is_empty() {
            return &self.tasks;
        }

        let now = (self.clock)();
        let Some(id) = self.ids.next(now) else {
            error!(key = %self.key, "no task id left below {}, task not added", TaskId::MAX);
            return &self.tasks;
        };
        let task = Task::new(id, title, description.into(), now);
        debug!(id = %task.id, "added task");
        self.tasks.push(task);

        self.persist();
        &self.tasks
    }

    pub fn delete(&mut self, task_id: TaskId) -> &[Task] {
        self.tasks.retain(|task| task.id != task_id);
        self.persist();
        &self.tasks
    }

    /// Puts a task into `new_status`. Unknown ids are ignored.
    pub fn move_task(&mut self, task_id: TaskId, new_status: TaskStatus) -> &[Task] {
        match self.tasks.iter_mut().find(|task| task.id == task_id) {
            Some(task) => task.status = new_status,
            None => debug!(id = %task_id, "no task to move"),
        }
        self.persist();
        &self.tasks
    }
}
