use std::env;
use std::path::PathBuf;

use anyhow::Context;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Port the HTTP server binds on all interfaces
    pub port: u16,
    /// Upper bound of the database connection pool
    pub db_max_connections: u32,
    /// Directory with a browser front-end, served for non-API paths
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: parse_or("PORT", DEFAULT_PORT)?,
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            static_dir: env::var("STATIC_DIR").ok().map(PathBuf::from),
        })
    }
}

/// Read an optional numeric variable, rejecting values that do not parse
fn parse_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{} must be a number, got {:?}", key, raw)),
        Err(_) => Ok(default),
    }
}
