use error_stack::{Report, ResultExt};
use std::error::Error;
use std::str::FromStr;

pub const PORT_VAR: &str = "PEOPLE_PORT";
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const DATABASE_POOL_SIZE_VAR: &str = "DATABASE_POOL_SIZE";
pub const METRICS_ENABLED_VAR: &str = "PEOPLE_METRICS_ENABLED";

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
#[error("invalid configuration")]
pub struct ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// `None` keeps people in memory.
    pub database: Option<DatabaseConfig>,
    pub metrics_enabled: bool,
}

#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: Option<usize>,
}

// the url usually carries credentials
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"<redacted>")
            .field("pool_size", &self.pool_size)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report<ConfigError>> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, Report<ConfigError>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = match lookup(DATABASE_URL_VAR).filter(|url| !url.is_empty()) {
            Some(url) => Some(DatabaseConfig {
                url,
                pool_size: parse(&lookup, DATABASE_POOL_SIZE_VAR)?,
            }),
            None => None,
        };

        Ok(Self {
            port: parse(&lookup, PORT_VAR)?.unwrap_or(DEFAULT_PORT),
            database,
            metrics_enabled: parse(&lookup, METRICS_ENABLED_VAR)?.unwrap_or(true),
        })
    }
}

fn parse<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, Report<ConfigError>>
where
    T: FromStr,
    T::Err: Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .change_context(ConfigError)
                .attach_with(|| format!("{key} has an invalid value '{value}'"))
        })
        .transpose()
}
