//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Global component ID singleton - set once at startup
static COMPONENT_ID: OnceLock<ComponentId> = OnceLock::new();

/// Identifies which entry point is emitting logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentId {
    /// Long-running HTTP dashboard
    Server,
    /// One-shot command line estimate
    Cli,
}

impl ComponentId {
    /// Initialize the global component ID for the HTTP server
    pub fn init_server() -> &'static ComponentId {
        COMPONENT_ID.get_or_init(|| ComponentId::Server)
    }

    /// Initialize the global component ID for command line runs
    pub fn init_cli() -> &'static ComponentId {
        COMPONENT_ID.get_or_init(|| ComponentId::Cli)
    }

    /// Get the global component ID
    ///
    /// Falls back to `Server` when nothing was initialized, which is what
    /// in-process tests of the router see.
    pub fn current() -> &'static ComponentId {
        COMPONENT_ID.get().unwrap_or(&ComponentId::Server)
    }

    /// Crate targets whose logs this component cares about
    pub fn log_targets(&self) -> &'static [&'static str] {
        match self {
            ComponentId::Server => &["dashboard", "shared", "tower_http", "axum"],
            ComponentId::Cli => &["dashboard", "shared"],
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::Server => write!(f, "dashboard"),
            ComponentId::Cli => write!(f, "cli"),
        }
    }
}
