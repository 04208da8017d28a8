//! Immutable audit and comment records owned by a task.

use super::{Actor, ActivityId, CommentId, TaskId, UserId};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Append-only audit entry describing a single change to a task.
///
/// Activities are never mutated or deleted after creation. The identifier
/// is absent until the owning task is persisted, at which point the
/// repository assigns one exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    id: Option<ActivityId>,
    task_id: TaskId,
    description: String,
    user_id: UserId,
    user_name: String,
    recorded_at: i64,
}

impl Activity {
    /// Records a new activity entry at the current clock time.
    #[must_use]
    pub fn record(
        task_id: TaskId,
        description: impl Into<String>,
        actor: &Actor,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: None,
            task_id,
            description: description.into(),
            user_id: actor.user_id(),
            user_name: actor.display_name().to_owned(),
            recorded_at: clock.utc().timestamp_millis(),
        }
    }

    /// Returns the persistence identifier, if one has been assigned.
    #[must_use]
    pub const fn id(&self) -> Option<ActivityId> {
        self.id
    }

    /// Returns the identifier of the owning task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the free-text description of the change.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the identifier of the acting user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the display name of the acting user.
    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Returns the recording timestamp in epoch milliseconds.
    #[must_use]
    pub const fn recorded_at(&self) -> i64 {
        self.recorded_at
    }

    pub(crate) const fn assign_id(&mut self, id: ActivityId) {
        self.id = Some(id);
    }
}

/// Immutable user note attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: Option<CommentId>,
    task_id: TaskId,
    text: String,
    author_id: UserId,
    author_name: String,
    recorded_at: i64,
}

impl Comment {
    /// Records a new comment at the current clock time.
    #[must_use]
    pub fn record(
        task_id: TaskId,
        text: impl Into<String>,
        author: &Actor,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: None,
            task_id,
            text: text.into(),
            author_id: author.user_id(),
            author_name: author.display_name().to_owned(),
            recorded_at: clock.utc().timestamp_millis(),
        }
    }

    /// Returns the persistence identifier, if one has been assigned.
    #[must_use]
    pub const fn id(&self) -> Option<CommentId> {
        self.id
    }

    /// Returns the identifier of the owning task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the comment text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the identifier of the comment author.
    #[must_use]
    pub const fn author_id(&self) -> UserId {
        self.author_id
    }

    /// Returns the display name of the comment author.
    #[must_use]
    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    /// Returns the recording timestamp in epoch milliseconds.
    #[must_use]
    pub const fn recorded_at(&self) -> i64 {
        self.recorded_at
    }

    pub(crate) const fn assign_id(&mut self, id: CommentId) {
        self.id = Some(id);
    }
}
