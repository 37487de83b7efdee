use anyhow::{Context, Result, bail};
use std::time::Duration;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 100;
const DEFAULT_BCRYPT_COST: u32 = 12;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_query_timeout: Duration,
    pub bcrypt_cost: u32,
    pub otel_endpoint: Option<String>,
    pub is_dev: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url =
            var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let jwt_secret = var("JWT_SECRET")
            .or_else(|| var("TOKEN_SECRET_KEY"))
            .context("Missing environment variable: JWT_SECRET")?;

        let port = match var("PORT").or_else(|| var("SERVER_PORT")) {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid u16 integer")?,
            None => DEFAULT_PORT,
        };

        let db_max_connections = match var("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .context("DB_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let timeout_secs = match var("DB_QUERY_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("DB_QUERY_TIMEOUT_SECS must be a positive integer")?,
            None => DEFAULT_QUERY_TIMEOUT_SECS,
        };

        if timeout_secs == 0 {
            bail!("DB_QUERY_TIMEOUT_SECS must be greater than zero");
        }

        let bcrypt_cost = match var("BCRYPT_COST") {
            Some(raw) => raw
                .parse::<u32>()
                .context("BCRYPT_COST must be an integer")?,
            None => DEFAULT_BCRYPT_COST,
        };

        if !(4..=31).contains(&bcrypt_cost) {
            bail!("BCRYPT_COST must be between 4 and 31, got {bcrypt_cost}");
        }

        let flag = |key: &str| {
            var(key)
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false)
        };

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            db_max_connections,
            db_query_timeout: Duration::from_secs(timeout_secs),
            bcrypt_cost,
            otel_endpoint: var("OTEL_ENDPOINT"),
            is_dev: flag("DEV_MODE"),
            enable_file_log: flag("ENABLE_FILE_LOG"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_optional_vars_are_absent() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/restaurant"),
            ("JWT_SECRET", "secret"),
        ])
        .unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.db_query_timeout, Duration::from_secs(100));
        assert_eq!(config.bcrypt_cost, 12);
        assert!(config.otel_endpoint.is_none());
        assert!(!config.is_dev);
    }

    #[test]
    fn legacy_variable_names_are_accepted() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/restaurant"),
            ("TOKEN_SECRET_KEY", "legacy"),
            ("SERVER_PORT", "9100"),
        ])
        .unwrap();

        assert_eq!(config.jwt_secret, "legacy");
        assert_eq!(config.port, 9100);
    }

    #[test]
    fn missing_secret_is_an_error() {
        let err = load(&[("DATABASE_URL", "postgres://localhost/restaurant")])
            .err()
            .unwrap();
        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let base = [
            ("DATABASE_URL", "postgres://localhost/restaurant"),
            ("JWT_SECRET", "secret"),
        ];

        let mut with_port = base.to_vec();
        with_port.push(("PORT", "not-a-port"));
        assert!(load(&with_port).is_err());

        let mut with_cost = base.to_vec();
        with_cost.push(("BCRYPT_COST", "2"));
        assert!(load(&with_cost).is_err());

        let mut with_timeout = base.to_vec();
        with_timeout.push(("DB_QUERY_TIMEOUT_SECS", "0"));
        assert!(load(&with_timeout).is_err());
    }
}
