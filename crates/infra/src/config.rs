//! Process configuration read from the environment.
//!
//! A `.env` file in the working directory is loaded first if present; real
//! environment variables win over it.

use std::net::SocketAddr;

use thiserror::Error;

use stockbook_inventory::table::MAX_PAGE_SIZE;

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const BIND_ADDR: &str = "STOCKBOOK_BIND";
pub const PAGE_SIZE: &str = "STOCKBOOK_PAGE_SIZE";
pub const MAX_CONNECTIONS: &str = "STOCKBOOK_MAX_CONNECTIONS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Postgres connection string. Optional here so fixture-backed runs work
    /// without one; `require_database_url` enforces it for the store.
    pub database_url: Option<String>,
    pub bind_addr: SocketAddr,
    pub page_size: usize,
    pub max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup(DATABASE_URL).filter(|v| !v.trim().is_empty());

        let bind_addr = match lookup(BIND_ADDR) {
            Some(v) => v.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                name: BIND_ADDR,
                value: v.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_BIND_ADDR
                .parse()
                .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                    name: BIND_ADDR,
                    value: DEFAULT_BIND_ADDR.to_string(),
                    reason: e.to_string(),
                })?,
        };

        let page_size = parse_positive(&lookup, PAGE_SIZE, DEFAULT_PAGE_SIZE)?;
        if page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::Invalid {
                name: PAGE_SIZE,
                value: page_size.to_string(),
                reason: format!("must be at most {MAX_PAGE_SIZE}"),
            });
        }
        let max_connections = parse_positive(&lookup, MAX_CONNECTIONS, DEFAULT_MAX_CONNECTIONS)?;

        Ok(Self {
            database_url,
            bind_addr,
            page_size,
            max_connections,
        })
    }

    pub fn require_database_url(&self) -> Result<&str, ConfigError> {
        self.database_url
            .as_deref()
            .ok_or(ConfigError::Missing(DATABASE_URL))
    }
}

fn parse_positive<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: core::str::FromStr + PartialOrd + Default,
    T::Err: core::fmt::Display,
{
    let Some(raw) = lookup(name) else {
        return Ok(default);
    };
    let value: T = raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        value: raw.clone(),
        reason: e.to_string(),
    })?;
    if value <= T::default() {
        return Err(ConfigError::Invalid {
            name,
            value: raw,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.database_url, None);
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(cfg.page_size, 10);
        assert_eq!(cfg.max_connections, 5);
    }

    #[test]
    fn missing_database_url_is_reported_when_required() {
        let cfg = config(&[("DATABASE_URL", "  ")]).unwrap();
        assert_eq!(cfg.require_database_url(), Err(ConfigError::Missing("DATABASE_URL")));

        let cfg = config(&[("DATABASE_URL", "postgres://localhost/inventory")]).unwrap();
        assert_eq!(cfg.require_database_url().unwrap(), "postgres://localhost/inventory");
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            config(&[("STOCKBOOK_BIND", "nowhere")]),
            Err(ConfigError::Invalid { name: "STOCKBOOK_BIND", .. })
        ));
        assert!(matches!(
            config(&[("STOCKBOOK_PAGE_SIZE", "0")]),
            Err(ConfigError::Invalid { name: "STOCKBOOK_PAGE_SIZE", .. })
        ));
        assert!(matches!(
            config(&[("STOCKBOOK_MAX_CONNECTIONS", "many")]),
            Err(ConfigError::Invalid { name: "STOCKBOOK_MAX_CONNECTIONS", .. })
        ));
    }

    #[test]
    fn page_size_above_the_table_limit_is_rejected() {
        assert!(matches!(
            config(&[("STOCKBOOK_PAGE_SIZE", "200")]),
            Err(ConfigError::Invalid { name: "STOCKBOOK_PAGE_SIZE", ref reason, .. }) if reason == "must be at most 100"
        ));
        assert_eq!(config(&[("STOCKBOOK_PAGE_SIZE", "100")]).unwrap().page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = config(&[("STOCKBOOK_BIND", "127.0.0.1:3000"), ("STOCKBOOK_PAGE_SIZE", "25")]).unwrap();
        assert_eq!(cfg.bind_addr.port(), 3000);
        assert_eq!(cfg.page_size, 25);
    }
}
