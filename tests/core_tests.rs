//! Integration tests for engine configuration
//!
//! Covers the settings file round trip, the fallback path for broken or
//! missing files, and the effect of loaded settings on a running engine.

use std::fs;
use std::path::PathBuf;

use tactical_realms::core::diagnostics::{init_tracing, DEFAULT_FILTER};
use tactical_realms::core::settings_persistence::{
    load_settings, load_settings_or_default, save_settings,
};
use tactical_realms::{CoreError, EngineSettings, RulesEngine, Square};

/// Fresh per-test directory under the system temp dir
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "tactical_realms_{}_{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_settings_round_trip() {
    //! Saving creates missing directories and loading returns the same values
    let _ = init_tracing(DEFAULT_FILTER);
    let dir = scratch_dir("round_trip");
    let path = dir.join("nested").join("engine_settings.json");

    let settings = EngineSettings {
        reopen_game_on_undo: false,
        reject_moves_after_game_over: true,
        log_moves: false,
    };
    save_settings(&path, &settings).unwrap();

    assert_eq!(load_settings(&path).unwrap(), settings);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = scratch_dir("missing");
    let path = dir.join("engine_settings.json");

    assert!(matches!(load_settings(&path), Err(CoreError::SettingsIo(_))));
    assert_eq!(load_settings_or_default(&path), EngineSettings::default());
}

#[test]
fn test_broken_file_falls_back_to_defaults() {
    let dir = scratch_dir("broken");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("engine_settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        load_settings(&path),
        Err(CoreError::SettingsSerialization(_))
    ));
    assert_eq!(load_settings_or_default(&path), EngineSettings::default());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_older_file_gains_new_fields() {
    //! Files written before a switch existed load with that switch defaulted
    let dir = scratch_dir("partial");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("engine_settings.json");
    fs::write(&path, r#"{ "log_moves": false }"#).unwrap();

    let settings = load_settings(&path).unwrap();
    assert!(!settings.log_moves);
    assert!(settings.reopen_game_on_undo);
    assert!(settings.reject_moves_after_game_over);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_loaded_settings_drive_engine() {
    let dir = scratch_dir("engine");
    let path = dir.join("engine_settings.json");
    let settings = EngineSettings {
        log_moves: false,
        ..EngineSettings::default()
    };
    save_settings(&path, &settings).unwrap();

    let mut engine = RulesEngine::with_settings(load_settings_or_default(&path));
    assert_eq!(engine.settings(), &settings);

    let e2 = Square::from_algebraic("e2").unwrap();
    let e4 = Square::from_algebraic("e4").unwrap();
    engine.attempt_move(e2, e4).unwrap();
    assert_eq!(engine.history().len(), 1);
    let _ = fs::remove_dir_all(&dir);
}
