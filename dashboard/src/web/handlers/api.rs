//! JSON API handlers backing the sliders

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Json,
};
use serde_json::{Value, json};
use shared::{
    AcresRegenerated, ChildrenReached, LandImpactDisplay, SharedError, estimate_education_budget,
    estimate_land_impact, format::format_budget_millions,
};

use crate::dashboard_impl::Dashboard;
use crate::error::{DashboardError, DashboardResult};
use crate::traits::AssetStore;
use crate::types::{AssetStatus, EducationQuery, EducationResponse, ImpactQuery, ImpactResponse};

fn parse_acres(acres: Option<i64>) -> DashboardResult<AcresRegenerated> {
    let value = acres.ok_or_else(|| DashboardError::invalid_request("missing query parameter 'acres'"))?;
    let out_of_range = || {
        SharedError::out_of_range(
            "acres",
            value,
            AcresRegenerated::MIN as i64,
            AcresRegenerated::MAX as i64,
        )
    };

    let acres = u32::try_from(value).map_err(|_| out_of_range())?;
    Ok(AcresRegenerated::new(acres)?)
}

fn parse_children(children: Option<i64>) -> DashboardResult<ChildrenReached> {
    let value = children.ok_or_else(|| DashboardError::invalid_request("missing query parameter 'children'"))?;
    let out_of_range = || {
        SharedError::out_of_range(
            "children",
            value,
            ChildrenReached::MIN as i64,
            ChildrenReached::MAX as i64,
        )
    };

    let children = u64::try_from(value).map_err(|_| out_of_range())?;
    Ok(ChildrenReached::new(children)?)
}

/// Land impact for a number of acres - /api/impact?acres=N
pub async fn land_impact(query: Result<Query<ImpactQuery>, QueryRejection>) -> DashboardResult<Json<ImpactResponse>> {
    let Query(query) = query.map_err(|e| DashboardError::invalid_request(e.body_text()))?;
    let acres = parse_acres(query.acres)?;
    let estimate = estimate_land_impact(acres);

    Ok(Json(ImpactResponse {
        status: "ok".to_string(),
        acres,
        display: LandImpactDisplay::from(&estimate),
        estimate,
    }))
}

/// Toolkit budget for a number of children - /api/education?children=N
pub async fn education_budget(
    query: Result<Query<EducationQuery>, QueryRejection>,
) -> DashboardResult<Json<EducationResponse>> {
    let Query(query) = query.map_err(|e| DashboardError::invalid_request(e.body_text()))?;
    let children = parse_children(query.children)?;
    let budget_usd = estimate_education_budget(children);

    Ok(Json(EducationResponse {
        status: "ok".to_string(),
        children,
        budget_usd,
        display: format_budget_millions(budget_usd),
    }))
}

/// Presence of each catalogued download - /api/assets
pub async fn list_assets<S>(State(dashboard): State<Dashboard<S>>) -> Json<Vec<AssetStatus>>
where
    S: AssetStore + 'static,
{
    Json(dashboard.asset_statuses().await)
}

/// Health check endpoint
pub async fn health_check<S>(State(dashboard): State<Dashboard<S>>) -> Json<Value>
where
    S: AssetStore + 'static,
{
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().timestamp(),
        "uptime_seconds": dashboard.state().get_uptime_seconds(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_acres() {
        assert_eq!(parse_acres(Some(20)).unwrap().get(), 20);
        assert!(matches!(parse_acres(None), Err(DashboardError::InvalidRequest { .. })));

        let err = parse_acres(Some(-3)).unwrap_err();
        assert_eq!(err.to_string(), "acres must be between 1 and 1000, got -3");

        let err = parse_acres(Some(i64::from(u32::MAX) + 1)).unwrap_err();
        assert!(matches!(err, DashboardError::SharedError(SharedError::OutOfRange { .. })));
    }

    #[test]
    fn test_parse_children() {
        assert_eq!(parse_children(Some(0)).unwrap().get(), 0);
        assert!(parse_children(Some(-1)).is_err());
        assert!(parse_children(Some(50_000_001)).is_err());
    }

    #[tokio::test]
    async fn test_land_impact_handler() {
        let Json(response) = land_impact(Ok(Query(ImpactQuery { acres: Some(1000) }))).await.unwrap();

        assert_eq!(response.status, "ok");
        assert_eq!(response.estimate.carbon_tons, 4500.0);
        assert_eq!(response.display.income, "$2,000,000/year");
    }

    #[tokio::test]
    async fn test_education_handler() {
        let Json(response) = education_budget(Ok(Query(EducationQuery {
            children: Some(1_000_000),
        })))
        .await
        .unwrap();

        assert_eq!(response.budget_usd, 18_000_000.0);
        assert_eq!(response.display, "$18.0M");
    }
}
