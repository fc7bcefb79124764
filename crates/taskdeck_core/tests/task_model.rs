use taskdeck_core::{CategoryFilter, Priority, Task, TaskValidationError};

#[test]
fn new_task_sets_defaults() {
    let task = Task::new(1, "write report", Priority::Medium).unwrap();

    assert_eq!(task.id, 1);
    assert_eq!(task.text, "write report");
    assert_eq!(task.priority, Priority::Medium);
    assert!(!task.completed);
}

#[test]
fn new_task_trims_text_and_rejects_empty_input() {
    let task = Task::new(1, "  padded  ", Priority::Low).unwrap();
    assert_eq!(task.text, "padded");

    let err = Task::new(2, "", Priority::Low).unwrap_err();
    assert_eq!(err, TaskValidationError::EmptyText);

    let err = Task::new(3, "   ", Priority::Low).unwrap_err();
    assert_eq!(err, TaskValidationError::EmptyText);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task = Task::new(1_700_000_000_123, "ship release", Priority::High).unwrap();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], 1_700_000_000_123_i64);
    assert_eq!(json["text"], "ship release");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["completed"], false);

    // Creation time is stored under the historical `timestamp` name as an
    // ISO-8601 string.
    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(timestamp.contains('T'), "not ISO-8601: {timestamp}");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn priority_parse_is_case_insensitive_and_closed() {
    assert_eq!(Priority::parse("HIGH"), Some(Priority::High));
    assert_eq!(Priority::parse(" medium "), Some(Priority::Medium));
    assert_eq!(Priority::parse("low"), Some(Priority::Low));
    assert_eq!(Priority::parse("urgent"), None);
    assert_eq!(Priority::parse(""), None);
}

#[test]
fn priority_labels_are_capitalized() {
    assert_eq!(Priority::Low.label(), "Low");
    assert_eq!(Priority::Medium.label(), "Medium");
    assert_eq!(Priority::High.label(), "High");
}

#[test]
fn category_filter_parse_accepts_known_names_only() {
    assert_eq!(CategoryFilter::parse("all"), Ok(CategoryFilter::All));
    assert_eq!(
        CategoryFilter::parse("Pending"),
        Ok(CategoryFilter::Pending)
    );
    assert_eq!(
        CategoryFilter::parse(" COMPLETED "),
        Ok(CategoryFilter::Completed)
    );

    let err = CategoryFilter::parse("archived").unwrap_err();
    assert_eq!(
        err,
        TaskValidationError::UnknownCategory("archived".to_string())
    );
}

#[test]
fn category_filter_defaults_to_all() {
    assert_eq!(CategoryFilter::default(), CategoryFilter::All);
}
