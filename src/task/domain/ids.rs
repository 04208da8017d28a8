//! Identifier newtypes for the task domain.
//!
//! All identifiers are plain numeric values allocated by the repository
//! from monotonically increasing counters. An identifier, once assigned,
//! is stable for the lifetime of the record it names.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! numeric_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a raw numeric identifier.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the underlying numeric value.
            #[must_use]
            pub const fn value(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id! {
    /// Unique identifier for a task record.
    TaskId
}

numeric_id! {
    /// Unique identifier for an audit activity entry.
    ActivityId
}

numeric_id! {
    /// Unique identifier for a task comment.
    CommentId
}

numeric_id! {
    /// Identifier of a user (assignee, actor, or comment author).
    UserId
}

numeric_id! {
    /// Identifier of the business reference a task serves.
    ReferenceId
}
