//! Dashboard page handler

use axum::{
    extract::{Query, State},
    response::Html,
};
use shared::{
    AcresRegenerated, ChildrenReached, ComponentId, LandImpactDisplay, component_debug, estimate_education_budget,
    estimate_land_impact, format::format_budget_millions,
};

use crate::dashboard_impl::Dashboard;
use crate::traits::AssetStore;
use crate::types::{PageModel, PageQuery};
use crate::web::render::render_dashboard;

/// Serve the dashboard with sliders preset from the query (or defaults)
pub async fn serve_dashboard<S>(State(dashboard): State<Dashboard<S>>, query: Option<Query<PageQuery>>) -> Html<String>
where
    S: AssetStore + 'static,
{
    let query = query.map(|Query(q)| q).unwrap_or_default();

    let acres = query.acres.map(AcresRegenerated::clamped).unwrap_or_default();
    let children = query.children.map(ChildrenReached::clamped).unwrap_or_default();

    let model = PageModel {
        acres,
        land: LandImpactDisplay::from(&estimate_land_impact(acres)),
        children,
        budget: format_budget_millions(estimate_education_budget(children)),
        map_available: dashboard.map_available().await,
        downloads: dashboard.asset_statuses().await,
    };

    component_debug!(
        ComponentId::current(),
        "Rendering dashboard (acres={}, children={})",
        acres,
        children
    );

    Html(render_dashboard(&model))
}
