//! # Configuration Tests
//!
//! Defaults, JSON deserialization and file loading of the driver
//! configuration.

use std::fs;

use mantissa_core::config::{Config, GeneralConfig};
use mantissa_core::{ConfigError, Op, Scenario};
use pretty_assertions::assert_eq;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.show_bits);
    assert!(config.general.show_operands);
    assert_eq!(config.scenarios, Config::default_scenarios());
}

#[test]
fn test_default_scenarios_cover_every_operation() {
    let scenarios = Config::default_scenarios();
    for op in [Op::Add, Op::Sub, Op::Mul] {
        assert!(scenarios.iter().any(|s| s.op == op), "no {op} scenario");
    }
    assert!(scenarios.iter().all(|s| s.name.is_some()));
}

#[test]
fn test_empty_json_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_general_section() {
    let config = Config::from_json(r#"{ "general": { "show_operands": false } }"#).unwrap();
    assert_eq!(
        config.general,
        GeneralConfig {
            show_bits: false,
            show_operands: false,
        }
    );
}

#[test]
fn test_explicit_scenarios_replace_defaults() {
    let json = r#"{
        "scenarios": [
            { "lhs": -4.2, "op": "sub", "rhs": -2.1, "expected": -2.1 }
        ]
    }"#;
    let config = Config::from_json(json).unwrap();
    assert_eq!(
        config.scenarios,
        vec![Scenario::new(-4.2, Op::Sub, -2.1).expecting(-2.1)]
    );
}

#[test]
fn test_empty_scenario_list_is_kept() {
    let config = Config::from_json(r#"{ "scenarios": [] }"#).unwrap();
    assert!(config.scenarios.is_empty());
}

#[test]
fn test_invalid_json_is_rejected() {
    let err = Config::from_json("{ \"general\": ").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));

    let err = Config::from_json(r#"{ "scenarios": [{ "lhs": 1.0, "op": "div", "rhs": 2.0 }] }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenarios.json");
    fs::write(
        &path,
        r#"{ "general": { "show_bits": true }, "scenarios": [{ "lhs": 4.2, "op": "*", "rhs": 10.0 }] }"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert!(config.general.show_bits);
    assert_eq!(config.scenarios, vec![Scenario::new(4.2, Op::Mul, 10.0)]);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    match Config::load(&path) {
        Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}
