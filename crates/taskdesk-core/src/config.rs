use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 7540;
pub const DEFAULT_BIND: &str = "127.0.0.1";
/// Hard cap on list/search results returned in one response.
pub const TASK_LIST_LIMIT: usize = 50;

/// Top-level config (taskdesk.toml + TASKDESK_* env overrides).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskdeskConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub web: WebConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Static UI serving; the bundled web client lives in `web.dir`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_web_dir")]
    pub dir: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            dir: default_web_dir(),
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}
fn default_db_path() -> String {
    "scheduler.db".to_string()
}
fn default_web_dir() -> String {
    "./web".to_string()
}

impl TaskdeskConfig {
    /// Load config from a TOML file with TASKDESK_* env var overrides.
    ///
    /// Checks in order:
    ///   1. Explicit path argument
    ///   2. ./taskdesk.toml
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path.unwrap_or("taskdesk.toml");

        let config: TaskdeskConfig = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("TASKDESK_").split("_"))
            .extract()
            .map_err(|e| crate::error::TaskdeskError::Config(e.to_string()))?;

        Ok(config)
    }
}
