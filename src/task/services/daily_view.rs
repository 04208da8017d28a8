//! Smart daily view: date-window task selection with still-active
//! semantics.

use super::TaskServiceResult;
use crate::task::{
    domain::{Task, UserId},
    ports::{TaskRepository, TaskRepositoryResult},
};
use std::sync::Arc;
use tracing::debug;

/// Date-window task selection service.
///
/// Rather than a naive creation-date range filter, the view also
/// surfaces tasks that predate the window but are still pending or in
/// progress, and unconditionally hides cancelled tasks. The selection
/// rules live on [`Task::is_relevant_to_window`].
#[derive(Debug)]
pub struct DailyViewService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for DailyViewService<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> DailyViewService<R>
where
    R: TaskRepository,
{
    /// Creates a new daily view service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the given assignees' tasks relevant to the window
    /// `[start, end]` (inclusive epoch-millisecond bounds).
    ///
    /// Result order is unspecified; callers should treat the result as a
    /// set.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] when the lookup
    /// fails.
    pub async fn fetch_by_date(
        &self,
        assignee_ids: &[UserId],
        start: i64,
        end: i64,
    ) -> TaskServiceResult<Vec<Task>> {
        let result: TaskRepositoryResult<Vec<Task>> =
            self.repository.find_by_assignees(assignee_ids).await;
        let tasks = result?;
        let selected: Vec<Task> = tasks
            .into_iter()
            .filter(|task| task.is_relevant_to_window(start, end))
            .collect();
        debug!(
            assignees = assignee_ids.len(),
            selected = selected.len(),
            "daily view selection"
        );
        Ok(selected)
    }
}
