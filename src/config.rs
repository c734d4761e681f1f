use std::env;
use std::net::SocketAddr;

use anyhow::Context;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads `HOST` and `PORT`. Call after `dotenvy::dotenv()` so a `.env` file applies.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("PORT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { host, port }
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        parse_addr(&self.host, self.port)
    }

    // Tried once when the configured port is taken.
    pub fn fallback_addr(&self) -> anyhow::Result<SocketAddr> {
        let port = self
            .port
            .checked_add(1)
            .context("no fallback port above 65535")?;
        parse_addr(&self.host, port)
    }
}

fn parse_addr(host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("cannot parse listen address {}:{}", host, port))
}
