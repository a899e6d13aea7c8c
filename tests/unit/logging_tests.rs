// Logging unit tests

use memegen::logging::{init_subscriber, LogFormat, LoggingConfig};

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
}

#[test]
fn test_init_subscriber_twice_is_ok() {
    let config = LoggingConfig {
        level: "warn".to_string(),
        format: LogFormat::Json,
    };
    assert!(init_subscriber(&config).is_ok());
    assert!(init_subscriber(&config).is_ok());
}

#[test]
fn test_format_deserializes_lowercase() {
    let format: LogFormat = serde_yaml::from_str("pretty").unwrap();
    assert_eq!(format, LogFormat::Pretty);
}
