use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

pub const DEFAULT_MONGO_URI: &str = "mongodb://mongo:27017/lab03db";
pub const DEFAULT_DATABASE: &str = "items_db";

#[derive(Debug, Clone, Deserialize)]
pub struct ItemConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub store: StoreBackend,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    /// Explicit database name. When unset, the database named in the URI is
    /// used, then [`DEFAULT_DATABASE`].
    pub database: Option<String>,
    pub server_selection_timeout: Duration,
    pub connect_timeout: Duration,
}

impl MongoConfig {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: None,
            server_selection_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl ItemConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env, APP__ prefix and PORT)
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let mut mongodb = MongoConfig::new(get_env("MONGO_URI", Some(DEFAULT_MONGO_URI), is_prod)?);
        mongodb.database = env::var("MONGODB_DATABASE").ok().filter(|s| !s.is_empty());

        Ok(ItemConfig {
            common: common_config,
            mongodb,
            store: get_env("ITEM_STORE", Some("mongo"), false)?
                .parse()
                .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?,
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
        })
    }
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(format!("Invalid item store backend: {}", s)),
        }
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
