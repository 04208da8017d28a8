//! Assignment reconciliation: one active task per reference and kind.

use crate::task::{
    domain::{
        Actor, NewTask, Priority, ReferenceId, ReferenceType, Task, TaskKind, TaskStatus, UserId,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Defaults applied when the reconciler has to create a task itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentDefaults {
    /// Offset added to the current time to form the deadline, in
    /// milliseconds.
    pub deadline_offset_ms: i64,
    /// Priority given to reconciler-created tasks.
    pub priority: Priority,
}

impl Default for AssignmentDefaults {
    fn default() -> Self {
        Self {
            deadline_offset_ms: 24 * 60 * 60 * 1000,
            priority: Priority::Medium,
        }
    }
}

/// A task kind whose reconciliation failed, with the underlying cause.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {source}")]
pub struct KindFailure {
    /// The kind being reconciled when the failure occurred.
    pub kind: TaskKind,
    /// The repository failure.
    pub source: TaskRepositoryError,
}

/// Errors returned by assignment reconciliation.
#[derive(Debug, Error)]
pub enum AssignmentError {
    /// The existing tasks for the reference could not be fetched.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// One or more task kinds failed to reconcile. Kinds are processed
    /// independently, so the remaining kinds completed normally.
    #[error("reconciliation failed for reference {reference_id} on {} kind(s)", failures.len())]
    Reconciliation {
        /// The reference being reconciled.
        reference_id: ReferenceId,
        /// The per-kind failures, in catalog order.
        failures: Vec<KindFailure>,
    },
}

/// Assignment reconciliation service.
///
/// For each task kind applicable to a reference's category, the service
/// ensures exactly one non-terminal task carries the requested assignee:
/// an existing live task is reassigned and its live siblings cancelled,
/// or a fresh task is created when no live task exists.
#[derive(Debug)]
pub struct AssignmentService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    defaults: AssignmentDefaults,
}

impl<R, C> Clone for AssignmentService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            defaults: self.defaults,
        }
    }
}

impl<R, C> AssignmentService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates an assignment service with default creation settings.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_defaults(repository, clock, AssignmentDefaults::default())
    }

    /// Creates an assignment service with explicit creation settings.
    #[must_use]
    pub const fn with_defaults(
        repository: Arc<R>,
        clock: Arc<C>,
        defaults: AssignmentDefaults,
    ) -> Self {
        Self {
            repository,
            clock,
            defaults,
        }
    }

    /// Reconciles every applicable task kind for a reference onto one
    /// assignee.
    ///
    /// Each kind is processed independently; a failure in one kind does
    /// not abort the others. Returns a human-readable confirmation when
    /// all kinds reconciled.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::Repository`] when the existing tasks
    /// cannot be fetched, or [`AssignmentError::Reconciliation`]
    /// aggregating the kinds that failed.
    pub async fn assign_by_reference(
        &self,
        reference_id: ReferenceId,
        reference_type: ReferenceType,
        assignee_id: UserId,
    ) -> Result<String, AssignmentError> {
        info!(%reference_id, %reference_type, %assignee_id, "reconciling assignment");
        let existing = self
            .repository
            .find_by_reference(reference_id, reference_type)
            .await?;

        let mut failures = Vec::new();
        for kind in TaskKind::for_reference(reference_type) {
            if let Err(source) = self
                .reconcile_kind(reference_id, reference_type, *kind, assignee_id, &existing)
                .await
            {
                warn!(%reference_id, kind = %kind, error = %source, "kind reconciliation failed");
                failures.push(KindFailure {
                    kind: *kind,
                    source,
                });
            }
        }

        if failures.is_empty() {
            Ok(format!(
                "Tasks assigned successfully for reference {reference_id}"
            ))
        } else {
            Err(AssignmentError::Reconciliation {
                reference_id,
                failures,
            })
        }
    }

    /// Reconciles a single kind.
    ///
    /// Candidates are the reference's non-completed tasks of this kind;
    /// already-cancelled candidates stay in the set as prior
    /// reconciliation state but are never chosen as the target. The first
    /// live candidate by ascending id is reassigned, every other live
    /// candidate is cancelled, and when no live candidate exists a new
    /// task is created.
    async fn reconcile_kind(
        &self,
        reference_id: ReferenceId,
        reference_type: ReferenceType,
        kind: TaskKind,
        assignee_id: UserId,
        existing: &[Task],
    ) -> Result<(), TaskRepositoryError> {
        let mut candidates: Vec<&Task> = existing
            .iter()
            .filter(|task| task.kind() == kind && task.status() != TaskStatus::Completed)
            .collect();
        candidates.sort_by_key(|task| task.id());

        let Some(target) = candidates
            .iter()
            .find(|task| task.status() != TaskStatus::Cancelled)
        else {
            // No live task of this kind: all candidates (if any) are
            // already cancelled, so create a fresh assignment.
            debug!(%reference_id, %kind, "no live task, creating");
            let deadline_at =
                self.clock.utc().timestamp_millis() + self.defaults.deadline_offset_ms;
            let new_task = NewTask::new(reference_id, reference_type, kind, assignee_id, deadline_at)
                .with_priority(self.defaults.priority)
                .with_description("Task assigned via reference");
            self.repository.create(new_task).await?;
            return Ok(());
        };

        let target_id = target.id();
        debug!(%reference_id, %kind, %target_id, "reassigning live task");
        let mut reassigned = (*target).clone();
        reassigned.reassign(assignee_id, &Actor::manager(), &*self.clock);
        self.repository.update(&reassigned).await?;

        // Cancel every other live candidate so exactly one active task of
        // this kind survives. Already-cancelled siblings are left alone:
        // no mutation, no audit entry.
        for sibling in candidates
            .iter()
            .filter(|task| task.id() != target_id && task.status() != TaskStatus::Cancelled)
        {
            let mut cancelled = (*sibling).clone();
            cancelled.cancel_for_reassignment(&Actor::system(), &*self.clock);
            self.repository.update(&cancelled).await?;
        }
        Ok(())
    }
}
