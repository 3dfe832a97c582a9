// crates/logging/tests/log_file_format.rs
use logging::{SubscriberConfig, subscriber};
use serde_json::Value;
use std::fs;
use tempfile::tempdir;
use tracing::info;

#[test]
fn json_log_file_carries_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("log.json");
    let cfg = SubscriberConfig::builder()
        .verbose(1)
        .log_file(Some((path.clone(), Some("json".to_string()))))
        .build();
    let subscriber = subscriber(cfg).unwrap();
    tracing::subscriber::with_default(subscriber, || {
        info!(target: "test", from = "/a", relative = "../b", "hello");
    });
    let contents = fs::read_to_string(path).unwrap();
    let v: Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
    assert_eq!(v["fields"]["message"], "hello");
    assert_eq!(v["fields"]["from"], "/a");
    assert_eq!(v["fields"]["relative"], "../b");
}

#[test]
fn token_layout_expands_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("log.txt");
    let cfg = SubscriberConfig::builder()
        .verbose(1)
        .log_file(Some((path.clone(), Some("%o %f -> %d = %n".to_string()))))
        .build();
    let subscriber = subscriber(cfg).unwrap();
    tracing::subscriber::with_default(subscriber, || {
        info!(op = "relative", from = "/x/y", to = "/x/z", relative = "../z", "computed");
    });
    let contents = fs::read_to_string(path).unwrap();
    assert!(
        contents.trim_end().ends_with("relative /x/y -> /x/z = ../z"),
        "{contents}"
    );
}

#[test]
fn missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("log.txt");
    let cfg = SubscriberConfig::builder()
        .log_file(Some((path, None)))
        .build();
    assert!(subscriber(cfg).is_err());
}
