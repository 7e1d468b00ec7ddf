use crate::errors::ServerError;
use std::{env, fmt::Display, net::SocketAddr, str::FromStr};
use tracing::info;

pub const DEFAULT_PAGE_SIZE: usize = 6;
pub const DEFAULT_PRICE_CEILING: i64 = 20_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub db_path: String,
    pub schema_path: String,
    pub seed_path: String,
    pub page_size: usize,
    pub price_ceiling: i64,
    pub workers: usize,
    /// When set, the catalog is fetched from here instead of the database.
    pub catalog_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, ServerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; `load` uses the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let page_size: usize = try_load(&lookup, "UNISTAY_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            return Err(ServerError::ConfigError(
                "UNISTAY_PAGE_SIZE must be at least 1".into(),
            ));
        }

        Ok(Self {
            addr: try_load(&lookup, "UNISTAY_ADDR", SocketAddr::from(([127, 0, 0, 1], 3000)))?,
            db_path: try_load(&lookup, "UNISTAY_DB_PATH", "unistay.sqlite3".to_string())?,
            schema_path: try_load(&lookup, "UNISTAY_SCHEMA_PATH", "sql/schema.sql".to_string())?,
            seed_path: try_load(&lookup, "UNISTAY_SEED_PATH", "data/hostels.json".to_string())?,
            page_size,
            price_ceiling: try_load(&lookup, "UNISTAY_PRICE_CEILING", DEFAULT_PRICE_CEILING)?,
            workers: try_load(&lookup, "UNISTAY_WORKERS", 8)?,
            catalog_url: lookup("UNISTAY_CATALOG_URL").filter(|s| !s.trim().is_empty()),
        })
    }
}

fn try_load<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ServerError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| ServerError::ConfigError(format!("Invalid {key} value {raw:?}: {e}"))),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
