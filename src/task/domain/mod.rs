//! Domain model for workforce task lifecycle management.
//!
//! The task domain models audited task records, the catalog of task kinds
//! per reference category, and the pure selection and mutation rules,
//! while keeping all infrastructure concerns outside of the domain
//! boundary.

mod activity;
mod actor;
mod catalog;
mod error;
mod ids;
mod task;

pub use activity::{Activity, Comment};
pub use actor::Actor;
pub use catalog::{ReferenceType, TaskKind};
pub use error::{
    ParsePriorityError, ParseReferenceTypeError, ParseTaskKindError, ParseTaskStatusError,
};
pub use ids::{ActivityId, CommentId, ReferenceId, TaskId, UserId};
pub use task::{NewTask, Priority, Task, TaskStatus};
