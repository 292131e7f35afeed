use serde::{Deserialize, Deserializer};
use std::{collections::HashMap, env};

/// Profile the cleanup is wired for unless configured otherwise
pub const DEFAULT_ACTIVE_PROFILE: &str = "test";

/// Profile assumed when none is set, mirroring a plain production start
pub const DEFAULT_PROFILE: &str = "default";

#[derive(Debug, Clone, Deserialize)]
pub struct TestConfig {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub cleanup: CleanupConfig,
}

impl TestConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            database: DatabaseConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
            cleanup: CleanupConfig::from_env()?,
        })
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
}

fn default_max_connections() -> usize {
    2
}

impl DatabaseConfig {
    /// Create a connection URL for this database configuration
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database
        )
    }

    /// Load from environment variables
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            host: env::var("DATABASE_HOST").map_err(|_| "DATABASE_HOST not set")?,
            port: env::var("DATABASE_PORT")
                .map_err(|_| "DATABASE_PORT not set")?
                .parse()
                .map_err(|_| "DATABASE_PORT must be a valid port number")?,
            database: env::var("DATABASE_NAME").map_err(|_| "DATABASE_NAME not set")?,
            username: env::var("DATABASE_USERNAME").map_err(|_| "DATABASE_USERNAME not set")?,
            password: env::var("DATABASE_PASSWORD").map_err(|_| "DATABASE_PASSWORD not set")?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| default_max_connections().to_string())
                .parse()
                .map_err(|_| "DATABASE_MAX_CONNECTIONS must be a valid number")?,
        })
    }
}

/// Logging Configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

impl LoggingConfig {
    /// Load from environment variables
    pub fn from_env() -> Result<Self, String> {
        let mut modules = HashMap::new();

        if let Ok(level) = env::var("LOG_MODULE_CLEANUP") {
            modules.insert("cleanup".to_string(), level);
        }
        if let Ok(level) = env::var("LOG_MODULE_DATABASE") {
            modules.insert("database".to_string(), level);
        }

        Ok(Self {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            modules,
        })
    }

    /// Filter directive understood by `tracing_subscriber::EnvFilter`
    pub fn filter_directive(&self) -> String {
        let mut filter = self.level.clone();

        // Sorted so the directive is stable across runs
        let mut modules: Vec<_> = self.modules.iter().collect();
        modules.sort();
        for (module, level) in modules {
            filter.push_str(&format!(",{module}={level}"));
        }

        filter
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            modules: HashMap::new(),
        }
    }
}

/// Activation and entity registry for the cleanup service
#[derive(Debug, Clone, Deserialize)]
pub struct CleanupConfig {
    /// Execution profile the process runs under (APP_PROFILE)
    #[serde(default = "default_profile")]
    pub profile: String,
    /// Profile under which the cleanup may be wired in
    #[serde(default = "default_active_profile")]
    pub active_profile: String,
    /// Load-time entity registry. Order is kept as listed.
    #[serde(default)]
    pub entities: Vec<EntityConfig>,
}

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}

fn default_active_profile() -> String {
    DEFAULT_ACTIVE_PROFILE.to_string()
}

impl CleanupConfig {
    /// Load from environment variables. Entities can only be listed in a config file.
    pub fn from_env() -> Result<Self, String> {
        let profile = env::var("APP_PROFILE").unwrap_or_else(|_| default_profile());
        if profile.trim().is_empty() {
            return Err("APP_PROFILE must not be empty".to_string());
        }

        Ok(Self {
            profile,
            active_profile: env::var("CLEANUP_ACTIVE_PROFILE")
                .unwrap_or_else(|_| default_active_profile()),
            entities: Vec::new(),
        })
    }

    /// A non-empty `APP_PROFILE` wins over the profile read from a file
    pub fn apply_profile_override(&mut self, profile: Option<String>) {
        if let Some(profile) = profile.filter(|p| !p.trim().is_empty()) {
            self.profile = profile;
        }
    }

    pub fn is_active(&self) -> bool {
        self.profile == self.active_profile
    }
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            active_profile: default_active_profile(),
            entities: Vec::new(),
        }
    }
}

/// One persistence-mapped type as listed in configuration.
///
/// `table` and `entity` model the two persistence markers. A present key marks the
/// type even when its value is empty; a type with neither key is unmarked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntityConfig {
    pub type_name: String,
    #[serde(default, deserialize_with = "deserialize_marker")]
    pub table: Option<String>,
    #[serde(default, deserialize_with = "deserialize_marker")]
    pub entity: Option<String>,
}

/// Only called for keys that are present, so a bare `entity:` (null) still marks.
fn deserialize_marker<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(Some(name.unwrap_or_default()))
}
