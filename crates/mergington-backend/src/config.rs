//! Server configuration read from the environment.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid HOST `{0}`")]
    InvalidHost(String),
    #[error("Invalid PORT `{0}`")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl Config {
    /// Reads `HOST`, `PORT` and `STATIC_DIR`, loading a `.env` file first if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host.parse().map_err(|_| ConfigError::InvalidHost(host))?;

        let port = match lookup("PORT") {
            Some(port) => port.parse().map_err(|_| ConfigError::InvalidPort(port))?,
            None => DEFAULT_PORT,
        };

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(Self {
            host,
            port,
            static_dir,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
