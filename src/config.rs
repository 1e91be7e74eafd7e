//! Process configuration, read from the environment (and `.env` via `dotenvy`).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const HOST_VAR: &str = "DEMO_API_HOST";
pub const PORT_VAR: &str = "DEMO_API_PORT";
pub const LOG_DIR_VAR: &str = "DEMO_API_LOG_DIR";

const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// When set, logs are also written to a daily rolling file here.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            log_dir: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(host) = get(HOST_VAR) {
            config.host = host
                .trim()
                .parse()
                .with_context(|| format!("{HOST_VAR} is not a valid IP address: {host:?}"))?;
        }
        if let Some(port) = get(PORT_VAR) {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("{PORT_VAR} is not a valid port: {port:?}"))?;
        }
        config.log_dir = get(LOG_DIR_VAR).map(PathBuf::from);

        Ok(config)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
