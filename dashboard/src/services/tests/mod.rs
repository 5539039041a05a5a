//! Service tests for the dashboard

pub mod asset_store;
pub mod fixtures;
