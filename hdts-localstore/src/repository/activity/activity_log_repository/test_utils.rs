use hdts_db::models::activity::{ActionKind, NewActivityLog};

pub fn create_test_activity(user_id: i64, user_name: &str) -> NewActivityLog {
    NewActivityLog::new(
        user_id,
        user_name,
        ActionKind::CommentAdded,
        "ticket",
        "TCKT-1001",
        "Test comment on TCKT-1001",
    )
}

pub fn create_test_activity_for_target(
    user_id: i64,
    user_name: &str,
    target_type: &str,
    target_id: &str,
) -> NewActivityLog {
    NewActivityLog::new(
        user_id,
        user_name,
        ActionKind::StatusChanged,
        target_type,
        target_id,
        "Test status change",
    )
}
