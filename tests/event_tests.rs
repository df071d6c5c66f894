//! Fixture-driven tests for the event and file models.

use std::fs;
use std::path::PathBuf;

use release_pr::{Error, Event, RepoFile};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_release_event_fixture() {
    let event = Event::from_path(fixture("release.json")).expect("should parse");

    assert_eq!(event.repository.name, "Hello-World");
    assert!(event.is_release());
    assert_eq!(
        event.base_url(),
        "https://api.github.com/repos/Codertocat/Hello-World"
    );

    let release = event.release.expect("release present");
    assert_eq!(release.tag_name, "0.0.1");
    assert_eq!(release.id, 11248810);
}

#[test]
fn test_push_event_fixture() {
    let event = Event::from_path(fixture("push.json")).expect("should parse");

    assert_eq!(event.repository.name, "Hello-World");
    assert!(!event.is_release());
    assert_eq!(
        event.base_url(),
        "https://api.github.com/repos/Codertocat/Hello-World"
    );
}

#[test]
fn test_missing_event_file_is_io_error() {
    let err = Event::from_path(fixture("no-such-event.json")).expect_err("should fail");
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_file_fixture_decode() {
    let text = fs::read_to_string(fixture("get_file.json")).expect("fixture readable");
    let file: RepoFile = serde_json::from_str(&text).expect("should deserialize");

    assert_eq!(file.text().expect("should decode"), "my updated file contents");
    assert_eq!(file.sha, "3d21ec53a331a6f037a91c368710b99387d012c1");
}

#[test]
fn test_file_fixture_encode() {
    let text = fs::read_to_string(fixture("get_file.json")).expect("fixture readable");
    let mut file: RepoFile = serde_json::from_str(&text).expect("should deserialize");

    file.set_text("my new file contents");
    assert_eq!(file.content, "bXkgbmV3IGZpbGUgY29udGVudHM=");
}
