// Settings for the test database cleanup: where the test database lives, how
// logs are filtered, which execution profile the process runs under and which
// entity types are registered for truncation. Values come from a YAML file,
// with environment variables filling in when no file exists. `APP_PROFILE`
// always has the last word on the profile.

use std::path::Path;
use thiserror::Error;

pub mod types;

// Re-export all configuration types
pub use types::*;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found. Tried paths: {paths}")]
    FileNotFound { paths: String },

    #[error("Failed to read configuration file: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {source}")]
    ParseError {
        #[from]
        source: serde_yaml::Error,
    },

    #[error("Invalid environment configuration: {0}")]
    Environment(String),
}

/// Main configuration loading interface
impl TestConfig {
    /// Load configuration from YAML file, then apply `APP_PROFILE` if set
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: TestConfig = serde_yaml::from_str(&content)?;
        config
            .cleanup
            .apply_profile_override(std::env::var("APP_PROFILE").ok());
        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        // Try different config locations in order
        let config_paths = ["config/config.yaml", "config.yaml", "config/test.yaml"];

        for path in &config_paths {
            if Path::new(path).exists() {
                return Self::load_from_file(path);
            }
        }

        // If no config file found, fail with descriptive error
        Err(ConfigError::FileNotFound {
            paths: config_paths.join(", "),
        })
    }

    /// Load from the default file locations, falling back to environment variables
    pub fn load_or_env() -> Result<Self, ConfigError> {
        match Self::load() {
            Ok(config) => Ok(config),
            Err(ConfigError::FileNotFound { .. }) => {
                Self::from_env().map_err(ConfigError::Environment)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file_with_entities() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
database:
  host: localhost
  port: 5432
  database: cleanup_test
  username: postgres
  password: postgres
cleanup:
  profile: test
  entities:
    - type_name: UserAccount
      entity: ""
    - type_name: OrderLine
      table: order_lines
    - type_name: AuditView
"#
        )
        .unwrap();

        let config = TestConfig::load_from_file(file.path()).unwrap();

        assert_eq!(config.database.max_connections, 2);
        assert_eq!(config.logging.level, "info");
        assert!(config.cleanup.is_active());
        assert_eq!(config.cleanup.entities.len(), 3);
        assert_eq!(
            config.cleanup.entities[0],
            EntityConfig {
                type_name: "UserAccount".to_string(),
                table: None,
                entity: Some(String::new()),
            }
        );
        assert_eq!(
            config.cleanup.entities[1].table.as_deref(),
            Some("order_lines")
        );
        assert_eq!(config.cleanup.entities[2].table, None);
        assert_eq!(config.cleanup.entities[2].entity, None);
    }

    #[test]
    fn test_missing_cleanup_section_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
database:
  host: db
  port: 5433
  database: app
  username: app
  password: app
  max_connections: 8
"#
        )
        .unwrap();

        let config = TestConfig::load_from_file(file.path()).unwrap();

        assert_eq!(config.database.max_connections, 8);
        assert_eq!(config.cleanup.profile, DEFAULT_PROFILE);
        assert_eq!(config.cleanup.active_profile, DEFAULT_ACTIVE_PROFILE);
        assert!(!config.cleanup.is_active());
        assert!(config.cleanup.entities.is_empty());
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "database: [not, a, map]").unwrap();

        let err = TestConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TestConfig::load_from_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError { .. }));
    }
}
