//! Tests for loading game configuration.

use std::io::Write;
use tictac_agent::{GameConfig, HeuristicRule, Board};

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(*config.seed(), None);
    assert_eq!(*config.thinking_delay_ms(), 500);
    assert!(*config.show_positions());
}

#[test]
fn test_load_full_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 42\nthinking_delay_ms = 0\nshow_positions = false").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.seed(), Some(42));
    assert_eq!(*config.thinking_delay_ms(), 0);
    assert!(!*config.show_positions());
}

#[test]
fn test_missing_fields_use_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 7").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();

    assert_eq!(config, GameConfig::default().with_seed(Some(7)));
}

#[test]
fn test_unknown_field_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "difficulty = \"hard\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    assert_eq!(GameConfig::load_or_default(&path).unwrap(), GameConfig::default());
    assert!(GameConfig::from_file(&path).is_err());
}

#[test]
fn test_seed_makes_agent_deterministic() {
    let config = GameConfig::default().with_seed(Some(99));
    let board = {
        let mut b = Board::new();
        b.set(4, tictac_agent::Mark::Player).unwrap();
        b
    };
    let mut a = config.build_agent();
    let mut b = config.build_agent();
    let first = a.choose_cell(&board).unwrap();
    assert_eq!(first, b.choose_cell(&board).unwrap());
    assert_eq!(first.rule, HeuristicRule::Corner);
    assert_eq!(a.seed(), 99);
}
