// Configuration unit tests

use memegen::config::{Config, RenderConfig};
use memegen::error::RenderError;
use memegen::logging::LogFormat;
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_empty_yaml_uses_defaults() {
    let config = Config::from_yaml_with_env("{}").unwrap();
    assert_eq!(config.images_root, PathBuf::from("data/images"));
    assert_eq!(config.render, RenderConfig::default());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_partial_render_section_keeps_other_defaults() {
    let yaml = r#"
render:
  baseline_width: 800
  blur_radius: 0
"#;
    let config = Config::from_yaml_with_env(yaml).unwrap();
    assert_eq!(config.render.baseline_width, 800);
    assert_eq!(config.render.blur_radius, 0.0);
    assert_eq!(config.render.text_margin, 20);
    assert_eq!(config.render.watermark_font_size, 15);
}

#[test]
fn test_logging_section() {
    let yaml = r#"
logging:
  level: debug
  format: json
"#;
    let config = Config::from_yaml_with_env(yaml).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_env_substitution() {
    std::env::set_var("MEMEGEN_TEST_IMAGES_ROOT", "/srv/memes");
    let config = Config::from_yaml_with_env("images_root: ${MEMEGEN_TEST_IMAGES_ROOT}\n").unwrap();
    assert_eq!(config.images_root, PathBuf::from("/srv/memes"));
}

#[test]
fn test_missing_env_var_is_error() {
    let yaml = "images_root: ${MEMEGEN_TEST_UNSET_VAR}\n";
    let err = Config::from_yaml_with_env(yaml).unwrap_err();
    assert!(
        matches!(err, RenderError::InvalidConfig(msg) if msg.contains("MEMEGEN_TEST_UNSET_VAR"))
    );
}

#[test]
fn test_invalid_render_values_rejected() {
    let yaml = r#"
render:
  max_font_divisor: 0
"#;
    let err = Config::from_yaml_with_env(yaml).unwrap_err();
    assert!(err.is_caller_error());
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "images_root: /tmp/memegen-images").unwrap();
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.images_root, PathBuf::from("/tmp/memegen-images"));
}

#[test]
fn test_from_missing_file() {
    let err = Config::from_file("/nonexistent/memegen.yaml").unwrap_err();
    assert!(matches!(err, RenderError::InvalidConfig(_)));
}
