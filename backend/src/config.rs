//! Runtime settings read from the process environment.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `DATABASE_URL` | full sqlx connection URL | see below |
//! | `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME` | MySQL settings, used when `DATABASE_URL` is unset and `DB_HOST` is set | port 3306 |
//! | `DB_MAX_CONNECTIONS` | pool size | 5 |
//! | `SERVER_ADDR` | listen address | `0.0.0.0:8080` |
//!
//! Without either database setting a local SQLite file is used.

use std::net::SocketAddr;

use anyhow::{Context, Result};

use crate::storage::connection::DEFAULT_DATABASE_URL;

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_PORT: u16 = 3306;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub server_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = match (get("DATABASE_URL"), get("DB_HOST")) {
            (Some(url), _) => url,
            (None, Some(host)) => {
                let port = match get("DB_PORT") {
                    Some(port) => port
                        .parse::<u16>()
                        .with_context(|| format!("Invalid DB_PORT: {}", port))?,
                    None => DEFAULT_DB_PORT,
                };
                format!(
                    "mysql://{}:{}@{}:{}/{}",
                    get("DB_USER").unwrap_or_default(),
                    get("DB_PASSWORD").unwrap_or_default(),
                    host,
                    port,
                    get("DB_NAME").unwrap_or_default()
                )
            }
            (None, None) => DEFAULT_DATABASE_URL.to_string(),
        };

        let max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(value) => value
                .parse::<u32>()
                .with_context(|| format!("Invalid DB_MAX_CONNECTIONS: {}", value))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let server_addr = get("SERVER_ADDR")
            .unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string());
        let server_addr = server_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid SERVER_ADDR: {}", server_addr))?;

        Ok(Self {
            database_url,
            max_connections,
            server_addr,
        })
    }
}
