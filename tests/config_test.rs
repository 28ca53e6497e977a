//! Tests for loading match configuration from TOML.

use std::io::Write;
use tictactoe_match::{DrawStarter, MatchConfig};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config("win_threshold = 3\ndraw_starter = \"keep\"\nseed = 99\n");
    let config = MatchConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.win_threshold(), 3);
    assert_eq!(*config.draw_starter(), DrawStarter::Keep);
    assert_eq!(*config.seed(), Some(99));
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("");
    assert_eq!(MatchConfig::from_file(file.path()).unwrap(), MatchConfig::default());
}

#[test]
fn test_zero_threshold_rejected() {
    let file = write_config("win_threshold = 0\n");
    let err = MatchConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("win_threshold"));
}

#[test]
fn test_negative_threshold_fails_to_parse() {
    let file = write_config("win_threshold = -2\n");
    let err = MatchConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = MatchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
