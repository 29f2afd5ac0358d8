//! Tests for config module

use rescue_dogs::config::ResolvedConfig;
use rescue_dogs::errors::AppError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("rescue-dogs.toml");

    let config_content = r#"
token_url = "http://localhost:8080/v2/oauth2/token"
listing_url = "http://localhost:8080/v2/animals"
organization = "WA55"
client_id = "file-id"
client_secret = "file-secret"
"#;

    fs::write(&config_path, config_content).unwrap();

    let config = ResolvedConfig::from_toml_file(&config_path).unwrap();

    assert_eq!(config.token_url, "http://localhost:8080/v2/oauth2/token");
    assert_eq!(config.organization, "WA55");
    assert_eq!(
        config.query_builder().base_url(),
        "http://localhost:8080/v2/animals?type=dog&organization=WA55&status=adoptable"
    );

    let creds = config.credentials_with(|_| None).unwrap();
    assert_eq!(creds.client_id, "file-id");
    assert_eq!(creds.client_secret, "file-secret");
}

#[test]
fn test_config_partial() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("rescue-dogs.toml");

    fs::write(&config_path, "organization = \"CA12\"\n").unwrap();

    let config = ResolvedConfig::from_toml_file(&config_path).unwrap();

    // Should use config value for organization
    assert_eq!(config.organization, "CA12");
    // Should use defaults for other values
    assert_eq!(config.listing_url, "https://api.petfinder.com/v2/animals");
    assert!(config.client_id.is_none());
}

#[test]
fn test_config_invalid_toml() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("rescue-dogs.toml");

    fs::write(&config_path, "organization = \"OR208\n").unwrap();

    let result = ResolvedConfig::from_toml_file(&config_path);
    assert!(matches!(result, Err(AppError::ConfigError(_))));
}

#[test]
fn test_config_nonexistent_file() {
    let result = ResolvedConfig::from_toml_file(std::path::Path::new("nonexistent.toml"));
    assert!(matches!(result, Err(AppError::IoError(_))));
}

#[test]
fn test_config_without_credentials_errors() {
    let config = ResolvedConfig::default();
    let result = config.credentials_with(|_| None);
    assert!(matches!(result, Err(AppError::MissingCredentials(_))));
}
