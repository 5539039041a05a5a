//! Service trait definitions for dependency injection
//!
//! Filesystem access is abstracted here so handlers can be tested without disk

use async_trait::async_trait;

use crate::error::DashboardResult;

/// Read-only access to the dashboard's static assets
#[mockall::automock]
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Read an asset by its path relative to the assets root
    async fn read_asset(&self, path: &str) -> DashboardResult<AssetResponse>;

    /// Check if an asset is present
    async fn asset_exists(&self, path: &str) -> bool;

    /// MIME type for a path, from its extension
    fn content_type(&self, path: &str) -> String;
}

/// Asset bytes with the headers they should be served with
#[derive(Debug, Clone)]
pub struct AssetResponse {
    pub content: Vec<u8>,
    pub content_type: String,
    pub cache_control: Option<String>,
}

impl AssetResponse {
    pub fn new(content: Vec<u8>, content_type: String) -> Self {
        Self {
            content,
            content_type,
            cache_control: None,
        }
    }

    pub fn with_cache_control(mut self, cache_control: String) -> Self {
        self.cache_control = Some(cache_control);
        self
    }
}
