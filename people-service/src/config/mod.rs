use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct PeopleConfig {
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub store: StoreBackend,
    /// OTLP collector endpoint. Span export is disabled when unset.
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

/// Which `PersonStore` implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" => Ok(StoreBackend::Mongo),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(AppError::ConfigError(anyhow::anyhow!(
                "PEOPLE_STORE must be 'mongo' or 'memory', got '{}'",
                other
            ))),
        }
    }
}

pub const DEFAULT_DATABASE: &str = "go-test";

impl PeopleConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        Self::from_lookup(common, |key| env::var(key).ok())
    }

    /// Build the service config from an arbitrary variable source.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = match lookup("PEOPLE_STORE") {
            Some(value) => value.parse()?,
            None => StoreBackend::Mongo,
        };

        // The connection string only matters when Mongo backs the service.
        let uri = match (lookup("MONGO_URL"), store) {
            (Some(uri), _) if !uri.trim().is_empty() => uri,
            (_, StoreBackend::Memory) => String::new(),
            (_, StoreBackend::Mongo) => {
                return Err(AppError::ConfigError(anyhow::anyhow!(
                    "MONGO_URL is required but not set"
                )));
            }
        };

        Ok(PeopleConfig {
            common,
            mongodb: MongoConfig {
                uri,
                database: lookup("MONGO_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            },
            store,
            otlp_endpoint: lookup("OTLP_ENDPOINT").filter(|s| !s.is_empty()),
        })
    }
}
