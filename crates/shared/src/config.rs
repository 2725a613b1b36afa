//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Document store configuration.
    pub store: StoreConfig,
    /// Admin credential configuration.
    #[serde(default)]
    pub admin: AdminConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Document store configuration.
///
/// The store is an external collaborator reached over its query API; only
/// the connection parameters live here, never query logic.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the query API, e.g. `https://example.api.store.io/v2021-10-21`.
    pub base_url: String,
    /// Dataset to query against.
    #[serde(default = "default_dataset")]
    pub dataset: String,
    /// Optional bearer token for private datasets.
    #[serde(default)]
    pub token: Option<String>,
}

fn default_dataset() -> String {
    "production".to_string()
}

/// Admin credential configuration.
///
/// A single fixed pair; the defaults match the storefront's placeholder
/// admin account so a bare deployment behaves like the hosted dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Admin display name expected at login.
    #[serde(default = "default_admin_name")]
    pub admin_name: String,
    /// Admin password expected at login.
    #[serde(default = "default_admin_password")]
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            admin_name: default_admin_name(),
            password: default_admin_password(),
        }
    }
}

fn default_admin_name() -> String {
    "ZubairRiaz".to_string()
}

fn default_admin_password() -> String {
    "1718".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("HEKTO").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
