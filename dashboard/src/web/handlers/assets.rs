//! Static asset and download handlers

use axum::{
    body::Body,
    extract::{Path, State},
    http::{StatusCode, header},
    response::Response,
};
use shared::{ComponentId, component_info, component_warn};

use crate::catalogue::find_download;
use crate::dashboard_impl::Dashboard;
use crate::error::{DashboardError, DashboardResult};
use crate::traits::{AssetResponse, AssetStore};

fn build_response(asset: AssetResponse, disposition: Option<String>) -> DashboardResult<Response> {
    let mut response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, asset.content_type);

    if let Some(cache_control) = asset.cache_control {
        response = response.header(header::CACHE_CONTROL, cache_control);
    }
    if let Some(disposition) = disposition {
        response = response.header(header::CONTENT_DISPOSITION, disposition);
    }

    response
        .body(Body::from(asset.content))
        .map_err(|e| DashboardError::ResponseError(e.to_string()))
}

/// Serve a file from the assets directory - /static/*path
pub async fn serve_static<S>(Path(path): Path<String>, State(dashboard): State<Dashboard<S>>) -> DashboardResult<Response>
where
    S: AssetStore + 'static,
{
    let asset = dashboard.asset_store().read_asset(&path).await?;
    build_response(asset, None)
}

/// Serve a catalogued PDF as an attachment - /downloads/:id
pub async fn serve_download<S>(Path(id): Path<String>, State(dashboard): State<Dashboard<S>>) -> DashboardResult<Response>
where
    S: AssetStore + 'static,
{
    let entry = find_download(&id).ok_or_else(|| DashboardError::UnknownDownload { id: id.clone() })?;

    let asset = match dashboard.asset_store().read_asset(entry.file_name).await {
        Ok(asset) => asset,
        Err(e) => {
            component_warn!(ComponentId::current(), "Download '{}' unavailable: {}", id, e);
            return Err(e);
        }
    };

    component_info!(ComponentId::current(), "📥 Download: {} ({} bytes)", entry.download_name, asset.content.len());
    build_response(
        asset,
        Some(format!("attachment; filename=\"{}\"", entry.download_name)),
    )
}
