// src/config.rs
use std::net::IpAddr;
use std::str::FromStr;

const DEFAULT_DATABASE_URL: &str = "sqlite://products.db?mode=rwc";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
// Photos travel inline as base64, so the default JSON limit is far too small.
const DEFAULT_BODY_LIMIT_MB: usize = 50;

/// Runtime settings, read from the process environment (after `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub host: IpAddr,
    pub port: u16,
    pub body_limit_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            body_limit_bytes: DEFAULT_BODY_LIMIT_MB * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys take defaults and
    /// unparseable ones are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(defaults.database_url);

        let host_str = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        Self {
            database_url,
            max_connections: parse_or("DATABASE_MAX_CONNECTIONS", lookup("DATABASE_MAX_CONNECTIONS"), defaults.max_connections),
            host: parse_or("HOST", Some(host_str), defaults.host),
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            body_limit_bytes: parse_or("BODY_LIMIT_MB", lookup("BODY_LIMIT_MB"), DEFAULT_BODY_LIMIT_MB)
                .saturating_mul(1024 * 1024),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, %value, "Invalid value, using default");
            default
        }),
    }
}
