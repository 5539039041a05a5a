//! Regeneration Generation dashboard
//!
//! Serves the campaign page, the estimator API behind its sliders, and the
//! campaign's static assets.

pub mod catalogue;
pub mod cli;
pub mod config;
pub mod dashboard_impl;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;

// Re-export main types
pub use config::DashboardConfig;
pub use dashboard_impl::Dashboard;
pub use error::{DashboardError, DashboardResult};
pub use state::DashboardState;
pub use types::*;

pub use services::RealAssetStore;
pub use traits::{AssetResponse, AssetStore};
