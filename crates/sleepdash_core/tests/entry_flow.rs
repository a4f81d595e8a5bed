use chrono::NaiveDate;
use sleepdash_core::{
    EntryDecision, EntryError, EntryService, JsonFileStore, LogStore, RecordOutcome,
};
use std::fs;

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[test]
fn startup_flow_records_today_once_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sleep_data.json");
    let service = EntryService::new(JsonFileStore::new(&path));

    let mut log = service.open_log().unwrap();
    assert!(log.is_empty());

    let today = d("2023-01-15");
    let outcome = service
        .record_once(&mut log, today, EntryDecision::Value(7.5))
        .unwrap();
    assert_eq!(outcome, RecordOutcome::Recorded { hours: Some(7.5) });

    // A second run finds the entry and performs no write.
    let reopened = EntryService::new(JsonFileStore::new(&path));
    let mut second_run = reopened.open_log().unwrap();
    let outcome = reopened
        .record_once(&mut second_run, today, EntryDecision::Value(9.0))
        .unwrap();
    assert_eq!(outcome, RecordOutcome::AlreadyRecorded { hours: Some(7.5) });
    assert_eq!(second_run.entry(today), Some(Some(7.5)));
}

#[test]
fn skipped_prompt_persists_an_explicit_null() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sleep_data.json");
    let service = EntryService::new(JsonFileStore::new(&path));

    let mut log = service.open_log().unwrap();
    service
        .record_once(&mut log, d("2023-01-15"), EntryDecision::Skipped)
        .unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["2023-01-15"], serde_json::Value::Null);

    // The null entry still counts as recorded on the next run.
    let reloaded = JsonFileStore::new(&path).load_or_init().unwrap();
    assert_eq!(reloaded.entry(d("2023-01-15")), Some(None));
}

#[test]
fn out_of_range_value_never_reaches_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sleep_data.json");
    let service = EntryService::new(JsonFileStore::new(&path));

    let mut log = service.open_log().unwrap();
    let err = service
        .record_once(&mut log, d("2023-01-15"), EntryDecision::Value(-1.0))
        .unwrap_err();
    assert!(matches!(err, EntryError::Validation(_)));

    let reloaded = JsonFileStore::new(&path).load_or_init().unwrap();
    assert!(reloaded.is_empty());
}
