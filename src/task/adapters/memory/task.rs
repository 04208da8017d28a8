//! Thread-safe in-memory task repository.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{
        ActivityId, Actor, CommentId, NewTask, Priority, ReferenceId, ReferenceType, Task, TaskId,
        UserId,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Tasks live in a map behind a reader-writer lock; identifier counters
/// are atomic so concurrent creations never allocate duplicates. The
/// activity counter is shared by all tasks' activities; comments use
/// their own counter. Secondary lookups scan the map, which is bounded by
/// the task-kind catalog per reference. Updates overwrite whole records,
/// so concurrent load-mutate-update sequences on one task are
/// last-writer-wins.
#[derive(Debug)]
pub struct InMemoryTaskRepository<C> {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
    task_ids: Arc<AtomicU64>,
    activity_ids: Arc<AtomicU64>,
    comment_ids: Arc<AtomicU64>,
    clock: Arc<C>,
}

impl<C> Clone for InMemoryTaskRepository<C> {
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            task_ids: Arc::clone(&self.task_ids),
            activity_ids: Arc::clone(&self.activity_ids),
            comment_ids: Arc::clone(&self.comment_ids),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty repository stamping timestamps from `clock`.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(HashMap::new())),
            task_ids: Arc::new(AtomicU64::new(0)),
            activity_ids: Arc::new(AtomicU64::new(0)),
            comment_ids: Arc::new(AtomicU64::new(0)),
            clock,
        }
    }

    fn next_task_id(&self) -> TaskId {
        TaskId::new(self.task_ids.fetch_add(1, Ordering::Relaxed) + 1)
    }

    fn assign_record_ids(&self, task: &mut Task) {
        task.assign_record_ids(
            || ActivityId::new(self.activity_ids.fetch_add(1, Ordering::Relaxed) + 1),
            || CommentId::new(self.comment_ids.fetch_add(1, Ordering::Relaxed) + 1),
        );
    }
}

fn lock_poisoned(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<C> TaskRepository for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn create(&self, new_task: NewTask) -> TaskRepositoryResult<Task> {
        let id = self.next_task_id();
        let created_at = self.clock.utc().timestamp_millis();
        let mut task = Task::from_new(id, new_task, created_at);
        task.record_activity("Task created", &Actor::system(), &*self.clock);
        self.assign_record_ids(&mut task);

        let mut tasks = self.tasks.write().map_err(lock_poisoned)?;
        tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut updated = task.clone();
        // Counter allocation happens outside the map lock.
        self.assign_record_ids(&mut updated);

        let mut tasks = self.tasks.write().map_err(lock_poisoned)?;
        if !tasks.contains_key(&updated.id()) {
            return Err(TaskRepositoryError::NotFound(updated.id()));
        }
        tasks.insert(updated.id(), updated.clone());
        Ok(updated)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.tasks.read().map_err(lock_poisoned)?;
        Ok(tasks.get(&id).cloned())
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(lock_poisoned)?;
        Ok(tasks.values().cloned().collect())
    }

    async fn find_by_reference(
        &self,
        reference_id: ReferenceId,
        reference_type: ReferenceType,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(lock_poisoned)?;
        Ok(tasks
            .values()
            .filter(|task| {
                task.reference_id() == reference_id && task.reference_type() == reference_type
            })
            .cloned()
            .collect())
    }

    async fn find_by_assignees(&self, assignee_ids: &[UserId]) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(lock_poisoned)?;
        Ok(tasks
            .values()
            .filter(|task| assignee_ids.contains(&task.assignee_id()))
            .cloned()
            .collect())
    }

    async fn find_by_priority(&self, priority: Priority) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(lock_poisoned)?;
        Ok(tasks
            .values()
            .filter(|task| task.priority() == Some(priority))
            .cloned()
            .collect())
    }
}
