//! Unit tests for domain parsing, the kind catalog, and audited
//! mutations.

use crate::task::domain::{
    Actor, NewTask, Priority, ReferenceId, ReferenceType, Task, TaskId, TaskKind, TaskStatus,
    UserId,
};
use crate::task::tests::support::{BASE_MS, FixedClock, HOUR_MS};
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> FixedClock {
    FixedClock::at(BASE_MS)
}

#[fixture]
fn task() -> Task {
    let new_task = NewTask::new(
        ReferenceId::new(101),
        ReferenceType::Order,
        TaskKind::CreateInvoice,
        UserId::new(1),
        BASE_MS + 24 * HOUR_MS,
    )
    .with_priority(Priority::High);
    Task::from_new(TaskId::new(1), new_task, BASE_MS)
}

#[rstest]
#[case(TaskStatus::Assigned, "assigned")]
#[case(TaskStatus::Started, "started")]
#[case(TaskStatus::Completed, "completed")]
#[case(TaskStatus::Cancelled, "cancelled")]
fn task_status_round_trips_through_storage_text(
    #[case] status: TaskStatus,
    #[case] text: &str,
) {
    assert_eq!(status.as_str(), text);
    assert_eq!(TaskStatus::try_from(text), Ok(status));
}

#[rstest]
fn task_status_rejects_unknown_text() {
    assert!(TaskStatus::try_from("paused").is_err());
}

#[rstest]
#[case(Priority::Low, "low")]
#[case(Priority::Medium, "medium")]
#[case(Priority::High, "high")]
fn priority_round_trips_through_storage_text(#[case] priority: Priority, #[case] text: &str) {
    assert_eq!(priority.as_str(), text);
    assert_eq!(Priority::try_from(text), Ok(priority));
}

#[rstest]
#[case(TaskKind::CreateInvoice, "create_invoice")]
#[case(TaskKind::ArrangePickup, "arrange_pickup")]
#[case(TaskKind::CollectPayment, "collect_payment")]
#[case(TaskKind::AssignCustomerToSalesPerson, "assign_customer_to_sales_person")]
fn task_kind_round_trips_through_storage_text(#[case] kind: TaskKind, #[case] text: &str) {
    assert_eq!(kind.as_str(), text);
    assert_eq!(TaskKind::try_from(text), Ok(kind));
}

#[rstest]
fn catalog_maps_each_reference_type_to_its_kinds() {
    assert_eq!(
        TaskKind::for_reference(ReferenceType::Order),
        &[
            TaskKind::CreateInvoice,
            TaskKind::ArrangePickup,
            TaskKind::CollectPayment,
        ],
    );
    assert_eq!(
        TaskKind::for_reference(ReferenceType::Entity),
        &[TaskKind::AssignCustomerToSalesPerson],
    );
}

#[rstest]
#[case(TaskStatus::Assigned, false)]
#[case(TaskStatus::Started, false)]
#[case(TaskStatus::Completed, true)]
#[case(TaskStatus::Cancelled, true)]
fn terminal_statuses_are_completed_and_cancelled(
    #[case] status: TaskStatus,
    #[case] terminal: bool,
) {
    assert_eq!(status.is_terminal(), terminal);
}

#[rstest]
fn status_change_logs_old_and_new_status(mut task: Task, clock: FixedClock) {
    task.change_status(TaskStatus::Started, &Actor::system(), &clock);

    let activity = task.activities().last().expect("activity appended");
    assert_eq!(
        activity.description(),
        "Status changed from assigned to started"
    );
    assert_eq!(activity.user_name(), "System");
    assert_eq!(activity.recorded_at(), BASE_MS);
    assert_eq!(task.status(), TaskStatus::Started);
}

#[rstest]
fn first_transition_into_started_stamps_start_time(mut task: Task, clock: FixedClock) {
    task.change_status(TaskStatus::Started, &Actor::system(), &clock);
    assert_eq!(task.started_at(), Some(BASE_MS));
}

#[rstest]
fn start_time_is_never_overwritten(mut task: Task, clock: FixedClock) {
    task.change_status(TaskStatus::Started, &Actor::system(), &clock);
    clock.set(BASE_MS + HOUR_MS);
    task.change_status(TaskStatus::Assigned, &Actor::system(), &clock);
    task.change_status(TaskStatus::Started, &Actor::system(), &clock);

    assert_eq!(task.started_at(), Some(BASE_MS));
}

#[rstest]
fn idempotent_status_set_still_logs(mut task: Task, clock: FixedClock) {
    task.change_status(TaskStatus::Assigned, &Actor::system(), &clock);

    let activity = task.activities().last().expect("activity appended");
    assert_eq!(
        activity.description(),
        "Status changed from assigned to assigned"
    );
}

#[rstest]
fn description_update_logs_even_when_value_is_unchanged(mut task: Task, clock: FixedClock) {
    let unchanged = task.description().to_owned();
    task.change_description(unchanged.clone(), &Actor::system(), &clock);

    assert_eq!(task.description(), unchanged);
    let activity = task.activities().last().expect("activity appended");
    assert_eq!(activity.description(), "Description updated");
}

#[rstest]
fn priority_change_logs_old_and_new_value(mut task: Task, clock: FixedClock) {
    task.change_priority(Priority::Low, &Actor::manager(), &clock);

    let activity = task.activities().last().expect("activity appended");
    assert_eq!(activity.description(), "Priority changed from high to low");
    assert_eq!(activity.user_name(), "Manager");
    assert_eq!(task.priority(), Some(Priority::Low));
}

#[rstest]
fn unset_priority_renders_as_unset_in_audit_text(clock: FixedClock) {
    let new_task = NewTask::new(
        ReferenceId::new(102),
        ReferenceType::Order,
        TaskKind::CollectPayment,
        UserId::new(2),
        BASE_MS + 24 * HOUR_MS,
    );
    let mut task = Task::from_new(TaskId::new(2), new_task, BASE_MS);
    task.change_priority(Priority::Medium, &Actor::manager(), &clock);

    let activity = task.activities().last().expect("activity appended");
    assert_eq!(
        activity.description(),
        "Priority changed from unset to medium"
    );
}

#[rstest]
fn reassignment_logs_the_new_assignee(mut task: Task, clock: FixedClock) {
    task.reassign(UserId::new(5), &Actor::manager(), &clock);

    assert_eq!(task.assignee_id(), UserId::new(5));
    let activity = task.activities().last().expect("activity appended");
    assert_eq!(activity.description(), "Task reassigned to user 5");
    assert_eq!(activity.user_name(), "Manager");
}

#[rstest]
fn cancellation_for_reassignment_is_terminal_and_logged(mut task: Task, clock: FixedClock) {
    task.cancel_for_reassignment(&Actor::system(), &clock);

    assert_eq!(task.status(), TaskStatus::Cancelled);
    assert!(task.status().is_terminal());
    let activity = task.activities().last().expect("activity appended");
    assert_eq!(activity.description(), "Task cancelled due to reassignment");
}

#[rstest]
fn comment_is_appended_and_logged_with_author_attribution(mut task: Task, clock: FixedClock) {
    let author = Actor::named(UserId::new(9), "Priya");
    task.add_comment("Customer asked for an itemised invoice", &author, &clock);

    let comment = task.comments().last().expect("comment appended");
    assert_eq!(comment.text(), "Customer asked for an itemised invoice");
    assert_eq!(comment.author_id(), UserId::new(9));
    assert_eq!(comment.author_name(), "Priya");

    let activity = task.activities().last().expect("activity appended");
    assert_eq!(activity.description(), "Comment added by Priya");
    assert_eq!(activity.user_id(), UserId::new(9));
}

#[rstest]
fn every_mutation_appends_exactly_one_activity(mut task: Task, clock: FixedClock) {
    let mut expected_len = task.activities().len();

    task.change_status(TaskStatus::Started, &Actor::system(), &clock);
    expected_len += 1;
    assert_eq!(task.activities().len(), expected_len);

    task.change_description("Expedite", &Actor::system(), &clock);
    expected_len += 1;
    assert_eq!(task.activities().len(), expected_len);

    task.change_priority(Priority::Medium, &Actor::manager(), &clock);
    expected_len += 1;
    assert_eq!(task.activities().len(), expected_len);

    task.reassign(UserId::new(3), &Actor::manager(), &clock);
    expected_len += 1;
    assert_eq!(task.activities().len(), expected_len);
}
