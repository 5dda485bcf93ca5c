//! Configuration file loading

use ardi::config::AppConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_load_explicit_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("ardi.toml");
    fs::write(
        &path,
        r#"default_baud = 115200
sketches_dir = "src/sketches"
core = "arduino:samd"
arduino_cli = "/opt/arduino/arduino-cli"
read_chunk_size = 256
"#,
    )
    .expect("Failed to write config");

    let config = AppConfig::load(Some(&path)).expect("Config should load");
    assert_eq!(config.default_baud, 115200);
    assert_eq!(config.sketches_dir, PathBuf::from("src/sketches"));
    assert_eq!(config.core, "arduino:samd");
    assert_eq!(
        config.arduino_cli,
        Some(PathBuf::from("/opt/arduino/arduino-cli"))
    );
    assert_eq!(config.read_chunk_size, 256);
}

#[test]
fn test_invalid_config_names_the_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "default_baud = \"fast\"\n").expect("Failed to write config");

    let err = AppConfig::load(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
}
