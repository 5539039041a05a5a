//! Filesystem-backed asset store
//!
//! Serves the map image and PDFs from the configured assets directory with
//! content types and cache headers

use async_trait::async_trait;
use shared::{ComponentId, component_debug, component_warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{DashboardError, DashboardResult};
use crate::traits::{AssetResponse, AssetStore};

const FALLBACK_MIME: &str = "application/octet-stream";

/// Asset store rooted at a directory on disk
#[derive(Clone)]
pub struct RealAssetStore {
    base_dir: PathBuf,
    mime_types: HashMap<&'static str, &'static str>,
}

impl RealAssetStore {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        let mime_types = HashMap::from([
            ("pdf", "application/pdf"),
            ("png", "image/png"),
            ("jpg", "image/jpeg"),
            ("jpeg", "image/jpeg"),
            ("gif", "image/gif"),
            ("svg", "image/svg+xml"),
            ("ico", "image/x-icon"),
            ("css", "text/css"),
            ("js", "application/javascript"),
            ("html", "text/html; charset=utf-8"),
        ]);

        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            mime_types,
        }
    }

    fn extension(path: &str) -> Option<String> {
        Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
    }

    fn cache_control(path: &str) -> Option<String> {
        match Self::extension(path)?.as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "svg" | "ico" => Some("public, max-age=86400".to_string()),
            "css" | "js" => Some("public, max-age=3600".to_string()),
            "pdf" => Some("no-cache".to_string()),
            _ => None,
        }
    }

    /// Resolve a request path inside the base directory
    fn resolve_path(&self, request_path: &str) -> DashboardResult<PathBuf> {
        let clean_path = request_path.trim_start_matches('/');
        if clean_path.is_empty() {
            return Err(DashboardError::not_found(request_path));
        }

        let canonical_path = self
            .base_dir
            .join(clean_path)
            .canonicalize()
            .map_err(|_| DashboardError::not_found(request_path))?;

        let canonical_base = self.base_dir.canonicalize().map_err(|e| {
            component_warn!(
                ComponentId::current(),
                "Assets directory {} not accessible: {}",
                self.base_dir.display(),
                e
            );
            DashboardError::not_found(request_path)
        })?;

        if !canonical_path.starts_with(&canonical_base) {
            return Err(DashboardError::AccessDenied {
                path: request_path.to_string(),
            });
        }

        Ok(canonical_path)
    }
}

#[async_trait]
impl AssetStore for RealAssetStore {
    async fn read_asset(&self, path: &str) -> DashboardResult<AssetResponse> {
        let file_path = self.resolve_path(path)?;

        if file_path.is_dir() {
            return Err(DashboardError::not_found(path));
        }

        match fs::read(&file_path).await {
            Ok(content) => {
                component_debug!(ComponentId::current(), "📄 Served asset: {} ({} bytes)", path, content.len());

                let mut response = AssetResponse::new(content, self.content_type(path));
                if let Some(cache) = Self::cache_control(path) {
                    response = response.with_cache_control(cache);
                }
                Ok(response)
            }
            Err(e) => {
                component_warn!(ComponentId::current(), "❌ Failed to read asset {}: {}", path, e);
                Err(DashboardError::not_found(path))
            }
        }
    }

    async fn asset_exists(&self, path: &str) -> bool {
        match self.resolve_path(path) {
            Ok(file_path) => file_path.is_file(),
            Err(_) => false,
        }
    }

    fn content_type(&self, path: &str) -> String {
        Self::extension(path)
            .and_then(|ext| self.mime_types.get(ext.as_str()).copied())
            .unwrap_or(FALLBACK_MIME)
            .to_string()
    }
}

impl Default for RealAssetStore {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_ASSETS_DIR)
    }
}
