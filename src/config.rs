use std::{env, fmt::Display, str::FromStr, time::Duration};

use log::info;

use crate::error::ConfigError;

// Postgres always listens on its standard port in our deployments
pub const POSTGRES_PORT: u16 = 5432;

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub host: String,
    pub database: String,
    pub user: String,
    pub password: String,
    pub port: u16,
    pub max_connections: u32,
    /// How long a request waits for a connection before failing with a 500.
    pub acquire_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub static_dir: String,
    pub store: StoreConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            port: try_load("PORT", "80")?,
            static_dir: try_load("STATIC_DIR", "static")?,
            store: StoreConfig {
                host: try_load("POSTGRES_HOST", "db")?,
                database: try_load("POSTGRES_DB", "voting_db")?,
                user: try_load("POSTGRES_USER", "user")?,
                password: load_secret("POSTGRES_PASSWORD", "password"),
                port: POSTGRES_PORT,
                max_connections: try_load("POSTGRES_MAX_CONNECTIONS", "5")?,
                acquire_timeout: Duration::from_secs(try_load("POSTGRES_ACQUIRE_TIMEOUT_SECS", "30")?),
            },
        })
    }
}

#[derive(Debug, Clone)]
pub struct WatchConfig {
    pub results_url: String,
}

impl WatchConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            results_url: try_load("RESULTS_URL", "http://localhost:80/results")?,
        })
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    parse_value(key, &raw)
}

// Same lookup as try_load, but never echoes the value
fn load_secret(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default");
        default.to_string()
    })
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key: key.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port() {
        let port: u16 = parse_value("PORT", "8080").unwrap();
        assert_eq!(port, 8080);

        let port: u16 = parse_value("PORT", " 80 ").unwrap();
        assert_eq!(port, 80);
    }

    #[test]
    fn test_parse_invalid_port() {
        let err = parse_value::<u16>("PORT", "eighty").unwrap_err();
        match err {
            ConfigError::Invalid { key, value, .. } => {
                assert_eq!(key, "PORT");
                assert_eq!(value, "eighty");
            }
        }

        assert!(parse_value::<u16>("PORT", "70000").is_err());
    }

    #[test]
    fn test_default_used_when_unset() {
        let host: String = try_load("CATS_DOGS_TEST_UNSET_HOST", "db").unwrap();
        assert_eq!(host, "db");

        let secret = load_secret("CATS_DOGS_TEST_UNSET_SECRET", "password");
        assert_eq!(secret, "password");
    }
}
