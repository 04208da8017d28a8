//! Service layer for task creation, field updates, and lookups.

use crate::task::{
    domain::{
        Actor, NewTask, Priority, ReferenceId, ReferenceType, Task, TaskId, TaskKind, TaskStatus,
        UserId,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Request payload for creating one task directly, bypassing
/// reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskItem {
    reference_id: ReferenceId,
    reference_type: ReferenceType,
    kind: TaskKind,
    assignee_id: UserId,
    deadline_at: i64,
    priority: Option<Priority>,
}

impl CreateTaskItem {
    /// Creates a request item with required fields.
    #[must_use]
    pub const fn new(
        reference_id: ReferenceId,
        reference_type: ReferenceType,
        kind: TaskKind,
        assignee_id: UserId,
        deadline_at: i64,
    ) -> Self {
        Self {
            reference_id,
            reference_type,
            kind,
            assignee_id,
            deadline_at,
            priority: None,
        }
    }

    /// Sets the initial priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    fn into_new_task(self) -> NewTask {
        let new_task = NewTask::new(
            self.reference_id,
            self.reference_type,
            self.kind,
            self.assignee_id,
            self.deadline_at,
        );
        match self.priority {
            Some(priority) => new_task.with_priority(priority),
            None => new_task,
        }
    }
}

/// Request payload for updating one task's status and/or description.
///
/// Absent fields are left untouched; a present description fires an audit
/// entry even when the value is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskItem {
    task_id: TaskId,
    status: Option<TaskStatus>,
    description: Option<String>,
}

impl UpdateTaskItem {
    /// Creates an empty update for the given task.
    #[must_use]
    pub const fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            status: None,
            description: None,
        }
    }

    /// Sets the target status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the new description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The referenced task does not exist. Terminal and non-retryable.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task lifecycle orchestration service.
#[derive(Debug)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not
    /// exist.
    pub async fn find_by_id(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Creates tasks directly from the given request items.
    ///
    /// Each task starts as [`TaskStatus::Assigned`] with a seeded
    /// creation activity.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create_tasks(
        &self,
        items: Vec<CreateTaskItem>,
    ) -> TaskServiceResult<Vec<Task>> {
        debug!(count = items.len(), "creating tasks");
        let mut created = Vec::with_capacity(items.len());
        for item in items {
            created.push(self.repository.create(item.into_new_task()).await?);
        }
        Ok(created)
    }

    /// Applies status and description updates to the referenced tasks.
    ///
    /// Each item is loaded, mutated through the domain audit rules, and
    /// persisted once, so a single logical operation contributes each
    /// audit entry exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when any referenced task is
    /// missing.
    pub async fn update_tasks(
        &self,
        items: Vec<UpdateTaskItem>,
        actor: &Actor,
    ) -> TaskServiceResult<Vec<Task>> {
        let mut updated = Vec::with_capacity(items.len());
        for item in items {
            let mut task = self.find_by_id(item.task_id).await?;
            if let Some(status) = item.status {
                task.change_status(status, actor, &*self.clock);
            }
            if let Some(description) = item.description {
                task.change_description(description, actor, &*self.clock);
            }
            updated.push(self.repository.update(&task).await?);
        }
        Ok(updated)
    }

    /// Changes a task's priority with a manager-attributed audit entry.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task is missing.
    pub async fn update_priority(
        &self,
        task_id: TaskId,
        priority: Priority,
        actor: &Actor,
    ) -> TaskServiceResult<Task> {
        let mut task = self.find_by_id(task_id).await?;
        task.change_priority(priority, actor, &*self.clock);
        Ok(self.repository.update(&task).await?)
    }

    /// Appends a comment to a task, attributed to its author.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task is missing.
    pub async fn add_comment(
        &self,
        task_id: TaskId,
        text: impl Into<String> + Send,
        author_id: UserId,
        author_name: impl Into<String> + Send,
    ) -> TaskServiceResult<Task> {
        let mut task = self.find_by_id(task_id).await?;
        let author = Actor::named(author_id, author_name);
        task.add_comment(text, &author, &*self.clock);
        Ok(self.repository.update(&task).await?)
    }

    /// Returns all tasks with the given priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn find_by_priority(&self, priority: Priority) -> TaskServiceResult<Vec<Task>> {
        let result: TaskRepositoryResult<Vec<Task>> =
            self.repository.find_by_priority(priority).await;
        Ok(result?)
    }

    /// Returns all stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn find_all(&self) -> TaskServiceResult<Vec<Task>> {
        let result: TaskRepositoryResult<Vec<Task>> = self.repository.find_all().await;
        Ok(result?)
    }
}
