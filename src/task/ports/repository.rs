//! Repository port for task persistence, lookup, and id allocation.

use crate::task::domain::{NewTask, Priority, ReferenceId, ReferenceType, Task, TaskId, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// The repository is the sole source of truth and mutation point for
/// tasks. Creation and update are distinct operations: only `create`
/// allocates the task identifier and seeds the creation audit entry, so
/// that side effect can never re-fire on a later save.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Materialises and stores a new task.
    ///
    /// Allocates the task identifier from a monotonically increasing
    /// counter, stamps the creation timestamp, seeds a "Task created"
    /// activity attributed to the system actor, and assigns identifiers
    /// to all audit records before storing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    async fn create(&self, new_task: NewTask) -> TaskRepositoryResult<Task>;

    /// Persists changes to an existing task.
    ///
    /// Assigns identifiers to any activity or comment lacking one, then
    /// overwrites the stored record. Never touches the task identifier or
    /// the creation activity.
    ///
    /// The overwrite is last-writer-wins: two callers that each load,
    /// mutate, and update the same task concurrently can lose one
    /// another's audit entries. Serialise updates to a given task when
    /// that matters.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all stored tasks.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns all tasks serving the given business reference.
    async fn find_by_reference(
        &self,
        reference_id: ReferenceId,
        reference_type: ReferenceType,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns all tasks assigned to any of the given users.
    async fn find_by_assignees(&self, assignee_ids: &[UserId]) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns all tasks with the given priority.
    async fn find_by_priority(&self, priority: Priority) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
