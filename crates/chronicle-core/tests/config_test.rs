use chronicle_core::config::{defaults, ChronicleConfig, ClockConfig, WireEncoding};
use chronicle_core::ChronicleError;

#[test]
fn clock_config_defaults() {
    let config = ClockConfig::default();
    assert_eq!(config.preferred_encoding, WireEncoding::Full);
    assert_eq!(config.fallback_to_full, defaults::DEFAULT_FALLBACK_TO_FULL);
    assert_eq!(
        config.replica_warn_threshold,
        defaults::DEFAULT_REPLICA_WARN_THRESHOLD
    );
}

#[test]
fn empty_toml_yields_defaults() {
    let config = ChronicleConfig::from_toml_str("").unwrap();
    assert_eq!(config, ChronicleConfig::default());
}

#[test]
fn partial_toml_overrides_only_given_fields() {
    let config = ChronicleConfig::from_toml_str(
        r#"
        [clock]
        preferred_encoding = "compact"
        fallback_to_full = false
        "#,
    )
    .unwrap();
    assert_eq!(config.clock.preferred_encoding, WireEncoding::Compact);
    assert!(!config.clock.fallback_to_full);
    assert_eq!(
        config.clock.replica_warn_threshold,
        defaults::DEFAULT_REPLICA_WARN_THRESHOLD
    );
}

#[test]
fn unknown_encoding_is_invalid_config() {
    let err = ChronicleConfig::from_toml_str(
        r#"
        [clock]
        preferred_encoding = "tiny"
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, ChronicleError::InvalidConfig { .. }));
}

#[test]
fn toml_serialization_preserves_values() {
    let mut config = ChronicleConfig::default();
    config.clock.preferred_encoding = WireEncoding::Compact;
    config.clock.replica_warn_threshold = 16;
    let rendered = config.to_toml_string().unwrap();
    let parsed = ChronicleConfig::from_toml_str(&rendered).unwrap();
    assert_eq!(parsed, config);
}
