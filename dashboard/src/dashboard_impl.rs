//! Main dashboard implementation
//!
//! The Dashboard struct owns the shared state and the injected asset store,
//! and wires them into the axum router.

use std::future::Future;
use std::sync::Arc;

use axum::{Router, routing::get};
use shared::{ComponentId, component_info, logging};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::catalogue::{DOWNLOADS, MAP_IMAGE};
use crate::config::DashboardConfig;
use crate::error::{DashboardError, DashboardResult};
use crate::state::DashboardState;
use crate::traits::AssetStore;
use crate::types::AssetStatus;
use crate::web::handlers::{api, assets, page};

/// Main dashboard struct with dependency injection
pub struct Dashboard<S: AssetStore> {
    state: Arc<DashboardState>,
    asset_store: Arc<S>,
}

impl<S: AssetStore> Clone for Dashboard<S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            asset_store: self.asset_store.clone(),
        }
    }
}

impl<S> Dashboard<S>
where
    S: AssetStore + 'static,
{
    pub fn new(config: DashboardConfig, asset_store: S) -> Self {
        Self {
            state: Arc::new(DashboardState::new(config)),
            asset_store: Arc::new(asset_store),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/", get(page::serve_dashboard::<S>))
            .route("/api/impact", get(api::land_impact))
            .route("/api/education", get(api::education_budget))
            .route("/api/assets", get(api::list_assets::<S>))
            .route("/downloads/:id", get(assets::serve_download::<S>))
            .route("/static/*path", get(assets::serve_static::<S>))
            .route("/health", get(api::health_check::<S>))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            )
            .with_state(self.clone())
    }

    /// Presence of every catalogued download, in catalogue order
    pub async fn asset_statuses(&self) -> Vec<AssetStatus> {
        let mut statuses = Vec::with_capacity(DOWNLOADS.len());
        for asset in DOWNLOADS.iter() {
            let present = self.asset_store.asset_exists(asset.file_name).await;
            statuses.push(AssetStatus::new(*asset, present));
        }
        statuses
    }

    pub async fn map_available(&self) -> bool {
        self.asset_store.asset_exists(MAP_IMAGE).await
    }

    /// Bind the configured address and serve until Ctrl+C
    pub async fn run(&self) -> DashboardResult<()> {
        let bind_address = self.state.config.bind_address;
        let listener = TcpListener::bind(bind_address)
            .await
            .map_err(|e| DashboardError::ServerStartup(format!("Failed to bind to {bind_address}: {e}")))?;

        self.serve(listener, wait_for_shutdown(tokio::signal::ctrl_c())).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> DashboardResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr()?;
        self.log_asset_report().await;

        component_info!(ComponentId::current(), "🌐 Dashboard listening on http://{}", local_addr);

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| DashboardError::ServerStartup(format!("Server error: {e}")))?;

        Ok(())
    }

    /// Log which catalogued assets are missing so operators see it at startup
    async fn log_asset_report(&self) {
        let assets_dir = self.state.config.assets_dir.display().to_string();
        let mut missing: Vec<&str> = self
            .asset_statuses()
            .await
            .into_iter()
            .filter(|status| !status.present)
            .map(|status| status.asset.file_name)
            .collect();
        if !self.map_available().await {
            missing.push(MAP_IMAGE);
        }

        if missing.is_empty() {
            logging::log_success(ComponentId::current(), &format!("All assets present in {assets_dir}"));
        } else {
            shared::component_warn!(
                ComponentId::current(),
                "⚠️ Missing assets in {}: {}",
                assets_dir,
                missing.join(", ")
            );
        }
    }

    pub fn state(&self) -> &Arc<DashboardState> {
        &self.state
    }

    pub fn asset_store(&self) -> &S {
        &self.asset_store
    }
}

/// Resolve once `signal` fires
///
/// A signal listener that fails to install never resolves, so the server
/// keeps running instead of shutting down at startup.
pub async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => logging::log_shutdown(ComponentId::current(), "Received Ctrl+C signal"),
        Err(err) => {
            logging::log_error(ComponentId::current(), "Signal handling", &err);
            std::future::pending::<()>().await;
        }
    }
}
