//! Task aggregate root and its audited mutation rules.

use super::{
    Activity, Actor, ActivityId, Comment, CommentId, ParsePriorityError, ParseTaskStatusError,
    ReferenceId, ReferenceType, TaskId, TaskKind, UserId,
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been assigned but work has not started.
    Assigned,
    /// Task is being worked on.
    Started,
    /// Task work has finished.
    Completed,
    /// Task has been cancelled.
    Cancelled,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::Started => "started",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns `true` for statuses that end the task's lifecycle.
    ///
    /// Terminal tasks are never selected as reconciliation targets.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "assigned" => Ok(Self::Assigned),
            "started" => Ok(Self::Started),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task urgency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Low urgency.
    Low,
    /// Medium urgency.
    Medium,
    /// High urgency.
    High,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audit label for a priority that may not have been set yet.
const fn priority_label(priority: Option<Priority>) -> &'static str {
    match priority {
        Some(value) => value.as_str(),
        None => "unset",
    }
}

/// Pre-persistence shape of a task.
///
/// A `NewTask` carries no identifier, timestamps, or audit log; the
/// repository's `create` operation materialises it into a [`Task`],
/// allocating the identifier and seeding the creation activity. Keeping
/// creation distinct from update guarantees the creation side effect can
/// never re-fire on a later save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    reference_id: ReferenceId,
    reference_type: ReferenceType,
    kind: TaskKind,
    assignee_id: UserId,
    deadline_at: i64,
    priority: Option<Priority>,
    description: String,
}

impl NewTask {
    /// Creates a new-task request with required fields.
    ///
    /// The deadline is an epoch-millisecond timestamp. Status always
    /// begins at [`TaskStatus::Assigned`].
    #[must_use]
    pub fn new(
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
            description: "New task created.".to_owned(),
        }
    }

    /// Sets the initial priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the initial description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Task aggregate root.
///
/// A task owns its append-only activity and comment sequences; they are
/// never shared between tasks. Every audited mutation appends exactly one
/// [`Activity`] in the same call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    reference_id: ReferenceId,
    reference_type: ReferenceType,
    kind: TaskKind,
    description: String,
    status: TaskStatus,
    assignee_id: UserId,
    deadline_at: i64,
    priority: Option<Priority>,
    created_at: i64,
    started_at: Option<i64>,
    activities: Vec<Activity>,
    comments: Vec<Comment>,
}

impl Task {
    /// Materialises a [`NewTask`] into a persisted task.
    ///
    /// Intended for repository implementations: the caller supplies the
    /// allocated identifier and the creation timestamp, and remains
    /// responsible for seeding the creation activity.
    #[must_use]
    pub fn from_new(id: TaskId, new_task: NewTask, created_at: i64) -> Self {
        Self {
            id,
            reference_id: new_task.reference_id,
            reference_type: new_task.reference_type,
            kind: new_task.kind,
            description: new_task.description,
            status: TaskStatus::Assigned,
            assignee_id: new_task.assignee_id,
            deadline_at: new_task.deadline_at,
            priority: new_task.priority,
            created_at,
            started_at: None,
            activities: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the identifier of the business reference this task serves.
    #[must_use]
    pub const fn reference_id(&self) -> ReferenceId {
        self.reference_id
    }

    /// Returns the category of the business reference.
    #[must_use]
    pub const fn reference_type(&self) -> ReferenceType {
        self.reference_type
    }

    /// Returns the kind of work this task represents.
    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the assigned user.
    #[must_use]
    pub const fn assignee_id(&self) -> UserId {
        self.assignee_id
    }

    /// Returns the deadline in epoch milliseconds.
    #[must_use]
    pub const fn deadline_at(&self) -> i64 {
        self.deadline_at
    }

    /// Returns the priority, or `None` when it has not been set.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the creation timestamp in epoch milliseconds.
    #[must_use]
    pub const fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Returns the timestamp of the first transition into
    /// [`TaskStatus::Started`], if it has happened.
    #[must_use]
    pub const fn started_at(&self) -> Option<i64> {
        self.started_at
    }

    /// Returns the append-only audit activity sequence, in insertion
    /// order.
    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Returns the append-only comment sequence, in insertion order.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Appends a timestamped, attributed audit entry.
    ///
    /// This is the sole audit append point; it never persists the task.
    /// Callers persist once after all edits of a logical operation to
    /// avoid duplicating entries across redundant saves.
    pub fn record_activity(
        &mut self,
        description: impl Into<String>,
        actor: &Actor,
        clock: &impl Clock,
    ) {
        self.activities
            .push(Activity::record(self.id, description, actor, clock));
    }

    /// Sets the lifecycle status and logs the transition.
    ///
    /// Setting the current status again still logs (the operation is
    /// idempotent on state but not on the audit trail). The first
    /// transition into [`TaskStatus::Started`] stamps `started_at`; the
    /// stamp is never overwritten afterwards.
    pub fn change_status(&mut self, new_status: TaskStatus, actor: &Actor, clock: &impl Clock) {
        let old_status = self.status;
        self.status = new_status;
        self.record_activity(
            format!("Status changed from {old_status} to {new_status}"),
            actor,
            clock,
        );
        if new_status == TaskStatus::Started && self.started_at.is_none() {
            self.started_at = Some(clock.utc().timestamp_millis());
        }
    }

    /// Sets the description and logs the update.
    ///
    /// The log fires whenever a description is supplied, even when the
    /// value is unchanged; the update is unconditional on presence, not
    /// on change.
    pub fn change_description(
        &mut self,
        description: impl Into<String>,
        actor: &Actor,
        clock: &impl Clock,
    ) {
        self.description = description.into();
        self.record_activity("Description updated", actor, clock);
    }

    /// Sets the priority and logs the change.
    pub fn change_priority(&mut self, new_priority: Priority, actor: &Actor, clock: &impl Clock) {
        let old_label = priority_label(self.priority);
        self.priority = Some(new_priority);
        self.record_activity(
            format!("Priority changed from {old_label} to {new_priority}"),
            actor,
            clock,
        );
    }

    /// Reassigns the task to another user and logs the handover.
    pub fn reassign(&mut self, assignee_id: UserId, actor: &Actor, clock: &impl Clock) {
        self.assignee_id = assignee_id;
        self.record_activity(format!("Task reassigned to user {assignee_id}"), actor, clock);
    }

    /// Forces the status to [`TaskStatus::Cancelled`] because another task
    /// of the same kind took over the reference, and logs the cancellation.
    ///
    /// Callers skip tasks that are already cancelled: no mutation, no
    /// audit entry.
    pub fn cancel_for_reassignment(&mut self, actor: &Actor, clock: &impl Clock) {
        self.status = TaskStatus::Cancelled;
        self.record_activity("Task cancelled due to reassignment", actor, clock);
    }

    /// Appends a comment and logs its addition, attributed to the author.
    pub fn add_comment(&mut self, text: impl Into<String>, author: &Actor, clock: &impl Clock) {
        self.comments
            .push(Comment::record(self.id, text, author, clock));
        self.record_activity(
            format!("Comment added by {}", author.display_name()),
            author,
            clock,
        );
    }

    /// Reports whether the task belongs in a date-window view over
    /// `[start, end]` (inclusive epoch-millisecond bounds).
    ///
    /// Cancelled tasks are excluded unconditionally. A task is included
    /// when it was created or started inside the window, or when it
    /// predates the window but is still pending or in progress.
    #[must_use]
    pub fn is_relevant_to_window(&self, start: i64, end: i64) -> bool {
        if self.status == TaskStatus::Cancelled {
            return false;
        }
        if (start..=end).contains(&self.created_at) {
            return true;
        }
        if self
            .started_at
            .is_some_and(|started| (start..=end).contains(&started))
        {
            return true;
        }
        self.created_at < start
            && matches!(self.status, TaskStatus::Assigned | TaskStatus::Started)
    }

    /// Assigns persistence identifiers to any activity or comment that
    /// lacks one.
    ///
    /// Intended for repository implementations; the supplied closures
    /// allocate the next identifier from the store's counters and are
    /// invoked only for records without an identifier.
    pub fn assign_record_ids(
        &mut self,
        mut next_activity_id: impl FnMut() -> ActivityId,
        mut next_comment_id: impl FnMut() -> CommentId,
    ) {
        for activity in &mut self.activities {
            if activity.id().is_none() {
                activity.assign_id(next_activity_id());
            }
        }
        for comment in &mut self.comments {
            if comment.id().is_none() {
                comment.assign_id(next_comment_id());
            }
        }
    }
}
