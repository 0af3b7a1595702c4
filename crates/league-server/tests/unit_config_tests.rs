//! Unit tests for ServerConfig and RepositoryType

use league_repository::RepositorySource;
use league_server::config::{LogFormat, RepositoryType, ServerConfig};
use std::path::PathBuf;

#[test]
fn test_empty_document_gives_defaults() {
    let config = ServerConfig::from_toml("").unwrap();

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8080);
    assert_eq!(config.repository, RepositoryType::Memory);
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_partial_document_keeps_other_defaults() {
    let config = ServerConfig::from_toml("port = 9090").unwrap();

    assert_eq!(config.port, 9090);
    assert_eq!(config.host, "127.0.0.1");
}

#[test]
fn test_postgres_repository() {
    let config = ServerConfig::from_toml(
        r#"
        host = "0.0.0.0"
        log_dir = "logs"

        [repository]
        type = "postgres"
        url = "postgresql://localhost/league"
        "#,
    )
    .unwrap();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.log_dir, Some(PathBuf::from("logs")));
    assert_eq!(
        config.repository,
        RepositoryType::Postgres {
            url: "postgresql://localhost/league".to_string()
        }
    );

    let repo = config.repository.to_repository_config();
    assert_eq!(repo.source, RepositorySource::Database);
}

#[test]
fn test_json_log_format() {
    let config = ServerConfig::from_toml(r#"log_format = "json""#).unwrap();
    assert_eq!(config.log_format, LogFormat::Json);

    assert_eq!(ServerConfig::from_toml("").unwrap().log_format, LogFormat::Text);
    assert!(ServerConfig::from_toml(r#"log_format = "xml""#).is_err());
}

#[test]
fn test_postgres_without_url_is_rejected() {
    let result = ServerConfig::from_toml(
        r#"
        [repository]
        type = "postgres"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_blank_postgres_url_is_rejected() {
    let result = ServerConfig::from_toml(
        r#"
        [repository]
        type = "postgres"
        url = ""
        "#,
    );
    let err = result.unwrap_err().to_string();
    assert!(err.contains("database_url"), "{}", err);
}

#[test]
fn test_unknown_repository_type_is_rejected() {
    let result = ServerConfig::from_toml(
        r#"
        [repository]
        type = "mongodb"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_repository_type_json_shape() {
    let json = serde_json::to_value(RepositoryType::Memory).unwrap();
    assert_eq!(json, serde_json::json!({"type": "memory"}));
}

#[test]
fn test_config_serialization_roundtrip() {
    let config = ServerConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: ServerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.port, config.port);
    assert_eq!(back.repository, config.repository);
}
