//! Application services for task lifecycle orchestration.

mod assignment;
mod daily_view;
mod lifecycle;

pub use assignment::{AssignmentDefaults, AssignmentError, AssignmentService, KindFailure};
pub use daily_view::DailyViewService;
pub use lifecycle::{
    CreateTaskItem, TaskLifecycleService, TaskServiceError, TaskServiceResult, UpdateTaskItem,
};
