use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Server settings, read once from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// JSON region catalog; the bundled catalog is used when unset.
    pub regions_file: Option<PathBuf>,
    /// Directory with the built form frontend, served at `/`.
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get("BRIDGE_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("BRIDGE_BIND_ADDR is not a socket address: {}", bind_addr))?;

        Ok(Self {
            bind_addr,
            regions_file: get("BRIDGE_REGIONS_FILE").map(PathBuf::from),
            static_dir: get("BRIDGE_STATIC_DIR").map(PathBuf::from),
        })
    }
}
