//! Dashboard state management
//!
//! Read-only after startup.

use std::time::Instant;

use crate::config::DashboardConfig;

/// Core dashboard state
#[derive(Debug)]
pub struct DashboardState {
    pub config: DashboardConfig,
    pub server_start_time: Instant,
}

impl DashboardState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            server_start_time: Instant::now(),
        }
    }

    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}
