//! Runtime configuration for the dashboard server

use std::net::SocketAddr;
use std::path::PathBuf;

use shared::SharedError;

use crate::error::{DashboardError, DashboardResult};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8501;
pub const DEFAULT_ASSETS_DIR: &str = "./assets";
pub const DEFAULT_LOG_LEVEL: &str = "info";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validated server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub bind_address: SocketAddr,
    pub assets_dir: PathBuf,
    pub log_level: String,
}

impl DashboardConfig {
    pub fn new(host: &str, port: u16, assets_dir: impl Into<PathBuf>, log_level: &str) -> DashboardResult<Self> {
        let bind_address: SocketAddr = format!("{host}:{port}")
            .parse()
            .map_err(|e| DashboardError::config(format!("Invalid bind address {host}:{port}: {e}")))?;

        let log_level = log_level.to_lowercase();
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(SharedError::InvalidConfig {
                field: "log_level".to_string(),
                value: log_level,
            }
            .into());
        }

        Ok(Self {
            bind_address,
            assets_dir: assets_dir.into(),
            log_level,
        })
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
