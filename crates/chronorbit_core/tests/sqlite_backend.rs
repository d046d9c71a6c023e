use chronorbit_core::{
    BackendError, PlannerConfig, PlannerService, ScheduleBackend, ScheduleInsert,
    SqliteScheduleBackend,
};
use chrono::NaiveDate;
use rusqlite::Connection;

fn record(title: &str, start: &str, end: &str) -> ScheduleInsert {
    ScheduleInsert {
        title: title.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
    }
}

#[test]
fn insert_then_list_preserves_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let backend = SqliteScheduleBackend::new(dir.path().join("schedules.db"));

    let work = record("Work", "2025-06-15 09:00:00", "2025-06-15 11:00:00");
    let lunch = record("Lunch", "2025-06-15 11:00:00", "2025-06-15 12:00:00");
    backend.insert(&work).unwrap();
    backend.insert(&lunch).unwrap();

    assert_eq!(backend.list_records().unwrap(), vec![work, lunch]);
}

#[test]
fn schema_rejection_surfaces_as_db_error() {
    let dir = tempfile::tempdir().unwrap();
    let backend = SqliteScheduleBackend::new(dir.path().join("schedules.db"));

    let err = backend.insert(&record("", "a", "b")).unwrap_err();
    assert!(matches!(err, BackendError::Db(_)));
    assert!(backend.list_records().unwrap().is_empty());
}

#[test]
fn unsupported_database_is_reported_through_planner() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let backend = SqliteScheduleBackend::new(&path);
    let mut planner = PlannerService::new(&backend, PlannerConfig::default());
    let day = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

    let outcome = planner
        .add_schedule(
            "Work",
            day.and_hms_opt(9, 0, 0).unwrap(),
            day.and_hms_opt(11, 0, 0).unwrap(),
        )
        .unwrap();

    assert!(!outcome.persistence.is_confirmed());
    assert!(outcome.persistence.message().contains("newer than supported"));
    assert_eq!(planner.schedules().len(), 1);
}

#[test]
fn planner_writes_through_to_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let backend = SqliteScheduleBackend::new(dir.path().join("schedules.db"));
    let mut planner = PlannerService::new(&backend, PlannerConfig::default());
    let day = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

    planner
        .add_schedule(
            "",
            day.and_hms_opt(8, 0, 0).unwrap(),
            day.and_hms_opt(10, 0, 0).unwrap(),
        )
        .unwrap();

    assert_eq!(
        backend.list_records().unwrap(),
        vec![record("Untitled", "2025-06-15 08:00:00", "2025-06-15 10:00:00")]
    );
}
