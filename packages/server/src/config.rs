use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Listings page whose search form carries the location labels.
pub const UPSTREAM_URL: &str = "https://irres.be/te-koop";

/// Upper bound on a single upstream fetch, connect through body.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Application configuration
///
/// Only the listening port comes from the environment. The upstream URL and
/// fetch timeout are fixed; tests build a `Config` by hand to point the
/// fetcher at a local mock server.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub upstream_url: String,
    pub fetch_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upstream_url: UPSTREAM_URL.to_string(),
            fetch_timeout: FETCH_TIMEOUT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let port = port_from(env::var("PORT").ok().as_deref())?;

        Ok(Self {
            port,
            ..Self::default()
        })
    }
}

/// Unset or blank means the default port
fn port_from(raw: Option<&str>) -> Result<u16> {
    match raw {
        Some(raw) if !raw.trim().is_empty() => parse_port(raw),
        _ => Ok(DEFAULT_PORT),
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse()
        .with_context(|| format!("PORT must be a valid number, got {:?}", raw))
}
