//! # Configuration Tests
//!
//! Tests for configuration defaults, JSON deserialization, and partial
//! overrides.

use axpsim_core::config::*;
use pretty_assertions::assert_eq;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.queues.iq_entries, 20);
    assert_eq!(config.queues.fq_entries, 15);
    assert_eq!(config.window.rob_entries, 80);
    assert!(config.ipr.fpe_at_reset);
}

#[test]
fn test_empty_json_uses_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.queues.iq_entries, 20);
    assert_eq!(config.queues.fq_entries, 15);
    assert_eq!(config.window.rob_entries, 80);
    assert!(config.ipr.fpe_at_reset);
}

#[test]
fn test_full_json_deserialization() {
    let json = r#"{
        "queues": { "iq_entries": 8, "fq_entries": 4 },
        "window": { "rob_entries": 32 },
        "ipr": { "fpe_at_reset": false }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.queues.iq_entries, 8);
    assert_eq!(config.queues.fq_entries, 4);
    assert_eq!(config.window.rob_entries, 32);
    assert!(!config.ipr.fpe_at_reset);
}

#[test]
fn test_partial_json_keeps_other_defaults() {
    let json = r#"{ "queues": { "iq_entries": 4 } }"#;

    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.queues.iq_entries, 4);
    assert_eq!(config.queues.fq_entries, 15);
    assert_eq!(config.window.rob_entries, 80);
    assert!(config.ipr.fpe_at_reset);
}
